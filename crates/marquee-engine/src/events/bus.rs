use crate::input::{JoystickChange, JoystickSignal};

/// Notification emitted by the runtime.
///
/// Observers receive these in emission order; none of them is a request for
/// work, they exist for analytics, screenshot capture, and creative logic.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CreativeEvent {
    /// Once per accepted frame, after every backend pass has run.
    Render,
    /// A viewport change was applied; dimensions are logical pixels.
    Resize { width: u32, height: u32 },
    JoystickChange(JoystickChange),
    JoystickStart,
    JoystickEnd,
}

impl From<JoystickSignal> for CreativeEvent {
    fn from(signal: JoystickSignal) -> Self {
        match signal {
            JoystickSignal::Start => CreativeEvent::JoystickStart,
            JoystickSignal::Change(change) => CreativeEvent::JoystickChange(change),
            JoystickSignal::End => CreativeEvent::JoystickEnd,
        }
    }
}

/// Ordered observer list for [`CreativeEvent`]s.
///
/// Observers are called on the runtime's own context; they must not block.
#[derive(Default)]
pub struct EventBus {
    observers: Vec<Box<dyn FnMut(&CreativeEvent)>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an observer; observers are invoked in registration order.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&CreativeEvent) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    pub fn emit(&mut self, event: CreativeEvent) {
        for observer in &mut self.observers {
            observer(&event);
        }
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}
