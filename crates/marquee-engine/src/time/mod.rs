//! Frame timing.
//!
//! Provides the rate-limiting sampler that caps how often the compositor
//! runs, without coupling to the runtime loop. Intended usage:
//! - one [`FrameScheduler`] per runtime
//! - the tick source delivers platform animation ticks; the scheduler decides
//!   which of them become frames

mod scheduler;
mod throttle;

pub use scheduler::{FrameScheduler, TickHandle, TickSource, TimerTicks};
pub use throttle::{ThrottleClock, DEFAULT_THROTTLE};
