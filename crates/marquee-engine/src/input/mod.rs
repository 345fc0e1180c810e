//! Input boundary.
//!
//! The joystick is a self-contained external widget; this module only defines
//! the types that cross its boundary. The runtime is responsible for handing
//! the widget a [`JoystickSink`] and forwarding its signals to observers.

mod joystick;

pub use joystick::{
    JoystickChange,
    JoystickDirection,
    JoystickSignal,
    JoystickSink,
    JoystickStyle,
    JoystickWidget,
};
