//! Render composition.
//!
//! Backends are opaque rendering targets (a 2D stage, optionally a layered 3D
//! scene) composed into a single frame in a fixed order. The compositor never
//! owns pixels or scene graphs; it only sequences passes and reports frame
//! completion.

mod backend;
mod compositor;
pub mod materials;

pub use backend::{BackendKind, RenderBackend};
pub use compositor::RenderCompositor;
