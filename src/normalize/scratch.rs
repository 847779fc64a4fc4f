//! Scratch surface reused across normalization requests.
//!
//! Holds the resampled RGBA grid and the resampler's tap tables so repeated
//! requests avoid reallocating. The surface is cleared to the active
//! background at the start of every use; nothing from a previous request can
//! leak into the next one.
use crate::convention::InkConvention;
use crate::image::{ImageRgba, ImageViewMut, Rgba, RgbaBuffer};
use crate::region::PixelRegion;
use crate::resample::AreaResampler;

#[derive(Clone, Debug, Default)]
pub struct ScratchSurface {
    pixels: RgbaBuffer,
    resampler: AreaResampler,
}

impl ScratchSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resize to `size × size` and fill with `background`.
    pub fn reset(&mut self, size: usize, background: Rgba) {
        self.pixels.resize(size, size, background);
        self.pixels.fill(background);
    }

    /// Wipe the current contents to transparent, keeping the dimensions.
    pub fn clear(&mut self) {
        self.pixels.fill(Rgba::TRANSPARENT);
    }

    /// Clear, then resample `region` of `src` onto a `size × size` grid.
    pub fn draw_region(
        &mut self,
        src: &ImageRgba<'_>,
        region: PixelRegion,
        size: usize,
        convention: InkConvention,
    ) -> &RgbaBuffer {
        let background = convention.background();
        self.reset(size, background);
        self.resampler
            .resample_into(src, region, background, &mut self.pixels);
        &self.pixels
    }

    /// Current contents (the result of the last draw).
    pub fn pixels(&self) -> &RgbaBuffer {
        &self.pixels
    }
}
