//! Viewport sizing.
//!
//! Computes logical (display) and upscaled physical (drawing-buffer)
//! dimensions from the device window and applies them atomically to every
//! registered backend plus the optional hit-testing layer. Orientation
//! changes are an alias into the same resize path.

mod manager;
mod state;

pub use manager::{HitLayer, ViewportManager, WindowMetrics};
pub use state::{ViewportState, UPSCALE_FACTOR};
