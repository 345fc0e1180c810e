/// Fixed upscale applied uniformly to every drawing buffer.
///
/// Display size stays at logical pixels; the buffer renders at 1.5× and is
/// scaled down by the compositor, which reads as sharper on high-density
/// mobile screens.
pub const UPSCALE_FACTOR: f32 = 1.5;

/// One applied viewport snapshot.
///
/// Logical dimensions are CSS/display pixels; physical dimensions are the
/// drawing-buffer size after the upscale factor. Snapshots supersede each
/// other atomically: all surfaces are resized from the same snapshot before
/// the next frame renders.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewportState {
    pub logical_width: u32,
    pub logical_height: u32,
    pub scale_factor: f32,
    /// Un-scaled device aspect ratio (width / height), for camera-bearing
    /// backends that must rebuild their projection on resize.
    pub aspect: f32,
}

impl ViewportState {
    /// Builds a snapshot from the raw device viewport size.
    pub fn from_device(width: f32, height: f32) -> Self {
        let aspect = if height > 0.0 { width / height } else { 1.0 };
        Self {
            logical_width: width.max(0.0).ceil() as u32,
            logical_height: height.max(0.0).ceil() as u32,
            scale_factor: UPSCALE_FACTOR,
            aspect,
        }
    }

    #[inline]
    pub fn physical_width(&self) -> u32 {
        (self.logical_width as f32 * self.scale_factor).ceil() as u32
    }

    #[inline]
    pub fn physical_height(&self) -> u32 {
        (self.logical_height as f32 * self.scale_factor).ceil() as u32
    }

    #[inline]
    pub fn physical(&self) -> (u32, u32) {
        (self.physical_width(), self.physical_height())
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.logical_width > 0 && self.logical_height > 0 && self.aspect.is_finite()
    }
}
