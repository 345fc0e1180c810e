use crate::events::{CreativeEvent, EventBus};
use crate::viewport::ViewportState;

use super::{BackendKind, RenderBackend};

struct Slot {
    backend: Box<dyn RenderBackend>,
    ready: bool,
}

/// Orders and invokes backend render passes.
///
/// Zero backends is a valid no-op configuration; a backend whose `init`
/// failed is skipped at render and resize time rather than failing the
/// creative.
#[derive(Default)]
pub struct RenderCompositor {
    slots: Vec<Slot>,
}

impl RenderCompositor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a backend. Pass order is by [`BackendKind`] (3D before 2D);
    /// registration order breaks ties.
    pub fn register(&mut self, backend: Box<dyn RenderBackend>) {
        self.slots.push(Slot {
            backend,
            ready: false,
        });
        self.slots
            .sort_by_key(|slot| slot.backend.kind().draw_order());
    }

    pub fn backend_count(&self) -> usize {
        self.slots.len()
    }

    pub fn ready_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.ready).count()
    }

    /// Initializes every backend. Failures demote the backend to a skipped
    /// slot instead of propagating.
    pub fn init_backends(&mut self) {
        for slot in &mut self.slots {
            match slot.backend.init() {
                Ok(()) => slot.ready = true,
                Err(err) => {
                    slot.ready = false;
                    log::warn!(
                        "render backend {:?} failed to init, skipping: {err:#}",
                        slot.backend.kind(),
                    );
                }
            }
        }
    }

    /// Runs one frame: every ready backend pass in order, then the
    /// frame-completed notification.
    pub fn render_frame(&mut self, bus: &mut EventBus) {
        for slot in &mut self.slots {
            if slot.ready {
                slot.backend.render_frame();
            }
        }
        bus.emit(CreativeEvent::Render);
    }

    /// Pushes a viewport snapshot to every ready backend.
    pub fn apply_viewport(&mut self, state: &ViewportState) {
        for slot in &mut self.slots {
            if slot.ready {
                slot.backend.apply_viewport(state);
            }
        }
    }
}
