use crate::viewport::ViewportState;

/// Backend layer identity; draw order is fixed by kind, 3D under 2D.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BackendKind {
    Scene3d,
    Stage2d,
}

impl BackendKind {
    /// Position in the per-frame pass order (lower draws first).
    pub(crate) fn draw_order(self) -> u8 {
        match self {
            BackendKind::Scene3d => 0,
            BackendKind::Stage2d => 1,
        }
    }
}

/// Pluggable rendering target composed into a single frame.
///
/// A backend owns its canvas/surface, scene root, and camera; the runtime
/// only tells it when to exist, when to draw, and what size to be.
pub trait RenderBackend {
    fn kind(&self) -> BackendKind;

    /// Creates the backend's surface and attaches it to the host container.
    /// Runs once, before the handshake and the first sizing pass.
    fn init(&mut self) -> anyhow::Result<()>;

    /// One draw pass against the backend's own scene and camera.
    fn render_frame(&mut self);

    /// Applies a viewport snapshot: display size from the logical dimensions,
    /// drawing buffer from the physical ones. Camera-bearing backends rebuild
    /// their projection from `state.aspect`, which carries the un-scaled
    /// device ratio.
    fn apply_viewport(&mut self, state: &ViewportState);
}
