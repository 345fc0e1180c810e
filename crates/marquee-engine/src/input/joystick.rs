use anyhow::Result;
use tokio::sync::mpsc;

/// Direction octant reported by the joystick widget.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum JoystickDirection {
    Left,
    TopLeft,
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
}

/// Change payload emitted while the stick is held.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct JoystickChange {
    /// Stick angle in radians.
    pub angle: f32,
    pub direction: JoystickDirection,
    /// Normalized deflection in `0.0..=1.0`.
    pub magnitude: f32,
}

/// Visual scale applied to the widget's outer ring and inner knob.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct JoystickStyle {
    pub outer_scale: f32,
    pub inner_scale: f32,
}

impl Default for JoystickStyle {
    fn default() -> Self {
        Self {
            outer_scale: 0.5,
            inner_scale: 0.8,
        }
    }
}

/// Raw signal delivered by a widget through its sink.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum JoystickSignal {
    Start,
    Change(JoystickChange),
    End,
}

/// Write end handed to the external widget.
///
/// Sends are fire-and-forget; a signal arriving after the runtime shut down
/// is silently dropped.
#[derive(Debug, Clone)]
pub struct JoystickSink {
    tx: mpsc::UnboundedSender<JoystickSignal>,
}

impl JoystickSink {
    pub(crate) fn new(tx: mpsc::UnboundedSender<JoystickSignal>) -> Self {
        Self { tx }
    }

    pub fn start(&self) {
        let _ = self.tx.send(JoystickSignal::Start);
    }

    pub fn change(&self, change: JoystickChange) {
        let _ = self.tx.send(JoystickSignal::Change(change));
    }

    pub fn end(&self) {
        let _ = self.tx.send(JoystickSignal::End);
    }
}

/// Contract implemented by the external joystick widget.
pub trait JoystickWidget {
    /// Builds the widget's visuals and wires its callbacks to `sink`.
    fn init(&mut self, style: &JoystickStyle, sink: JoystickSink) -> Result<()>;
}
