//! Lifecycle notifications.
//!
//! A closed set of observable events emitted by the runtime, delivered to an
//! ordered observer list. Emission is synchronous and never blocks rendering.

mod bus;

pub use bus::{CreativeEvent, EventBus};
