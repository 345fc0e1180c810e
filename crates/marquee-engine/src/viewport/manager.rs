use crate::events::{CreativeEvent, EventBus};
use crate::render::RenderCompositor;

use super::ViewportState;

/// Source of the current device viewport size, in raw (un-ceiled) pixels.
///
/// In a webview this is `window.innerWidth/innerHeight`; embedders supply
/// whatever their host exposes.
pub trait WindowMetrics {
    fn device_size(&self) -> (f32, f32);
}

/// Full-viewport invisible input layer.
///
/// Kept at the drawing-buffer (physical) size so hit-testing stays aligned
/// with rendered content after upscaling.
pub trait HitLayer {
    fn resize(&mut self, physical_width: u32, physical_height: u32);
}

/// Computes viewport snapshots and applies them to the render surfaces.
///
/// Must run once before the first frame and again on every resize or
/// orientation event; each pass fully completes before the next begins.
pub struct ViewportManager<M: WindowMetrics> {
    metrics: M,
    hit_layer: Option<Box<dyn HitLayer>>,
    current: Option<ViewportState>,
}

impl<M: WindowMetrics> ViewportManager<M> {
    pub fn new(metrics: M) -> Self {
        Self {
            metrics,
            hit_layer: None,
            current: None,
        }
    }

    pub fn set_hit_layer(&mut self, layer: Box<dyn HitLayer>) {
        self.hit_layer = Some(layer);
    }

    /// The last applied snapshot, if any pass has run.
    pub fn current(&self) -> Option<ViewportState> {
        self.current
    }

    pub fn compute(&self) -> ViewportState {
        let (width, height) = self.metrics.device_size();
        ViewportState::from_device(width, height)
    }

    /// Pushes `state` to every registered backend and the hit layer, records
    /// it, and emits [`CreativeEvent::Resize`] with the logical dimensions.
    pub fn apply(
        &mut self,
        state: ViewportState,
        compositor: &mut RenderCompositor,
        bus: &mut EventBus,
    ) {
        compositor.apply_viewport(&state);

        if let Some(layer) = self.hit_layer.as_mut() {
            layer.resize(state.physical_width(), state.physical_height());
        }

        self.current = Some(state);
        log::debug!(
            "viewport applied: {}x{} logical, {}x{} physical",
            state.logical_width,
            state.logical_height,
            state.physical_width(),
            state.physical_height(),
        );

        bus.emit(CreativeEvent::Resize {
            width: state.logical_width,
            height: state.logical_height,
        });
    }

    /// Compute + apply in one step; the shared path for startup, resize
    /// events, and orientation changes.
    pub fn resize_pass(&mut self, compositor: &mut RenderCompositor, bus: &mut EventBus) {
        let state = self.compute();
        self.apply(state, compositor, bus);
    }
}
