//! Area-weighted RGBA resampling of a source region onto a fixed grid.
//!
//! Each destination pixel is the coverage-weighted mean of the source pixels
//! its footprint overlaps, computed separably from per-axis tap lists. This
//! reproduces the smooth, anti-aliased look of browser canvas downscaling
//! that the digit models were trained on; nearest-neighbour sampling would
//! introduce aliasing instead.
//!
//! Source pixels outside the image are replaced by a caller-provided
//! background pixel, so regions may hang over any edge of the canvas. Only
//! pixels inside the canvas are visited; the overhanging share of each
//! footprint is added as one background term, so the cost is bounded by the
//! canvas size however large the region is.
//! Channels are averaged straight (not premultiplied).

pub mod weights;

use crate::image::{ImageRgba, ImageView, ImageViewMut, Rgba, RgbaBuffer};
use crate::region::PixelRegion;
use weights::AxisWeights;

/// Reusable resampler; keeps its tap tables between calls.
#[derive(Clone, Debug, Default)]
pub struct AreaResampler {
    x_weights: AxisWeights,
    y_weights: AxisWeights,
}

impl AreaResampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resample `region` of `src` into the whole of `dst`.
    ///
    /// `dst` keeps its dimensions; every pixel is overwritten.
    pub fn resample_into(
        &mut self,
        src: &ImageRgba<'_>,
        region: PixelRegion,
        background: Rgba,
        dst: &mut RgbaBuffer,
    ) {
        let (dw, dh) = (dst.width(), dst.height());
        if dw == 0 || dh == 0 {
            return;
        }
        if region.width == dw && region.height == dh && region.is_inside(src.w, src.h) {
            copy_exact(src, region, dst);
            return;
        }

        self.x_weights.rebuild(region.x0, region.width, src.w, dw);
        self.y_weights.rebuild(region.y0, region.height, src.h, dh);

        for oy in 0..dh {
            let y_taps = self.y_weights.taps(oy);
            let y_inside = 1.0 - self.y_weights.outside(oy);
            let dst_row = dst.row_mut(oy);
            for (ox, dst_px) in dst_row.iter_mut().enumerate() {
                let x_taps = self.x_weights.taps(ox);
                let x_inside = 1.0 - self.x_weights.outside(ox);
                let mut acc = [0.0f32; 4];
                for ty in y_taps {
                    let src_row = src.row(ty.src);
                    let mut row_acc = [0.0f32; 4];
                    for tx in x_taps {
                        accumulate(&mut row_acc, src_row[tx.src], tx.weight);
                    }
                    for c in 0..4 {
                        acc[c] += row_acc[c] * ty.weight;
                    }
                }
                // footprint share hanging over the canvas edge
                accumulate(&mut acc, background, 1.0 - x_inside * y_inside);
                *dst_px = to_pixel(acc);
            }
        }
    }
}

/// Resample `region` of `src` to a freshly allocated `size × size` buffer.
pub fn resample_area(
    src: &ImageRgba<'_>,
    region: PixelRegion,
    background: Rgba,
    size: usize,
) -> RgbaBuffer {
    let mut out = RgbaBuffer::new(size, size, background);
    AreaResampler::new().resample_into(src, region, background, &mut out);
    out
}

fn copy_exact(src: &ImageRgba<'_>, region: PixelRegion, dst: &mut RgbaBuffer) {
    let (x0, y0) = (region.x0 as usize, region.y0 as usize);
    for y in 0..region.height {
        let src_row = &src.row(y0 + y)[x0..x0 + region.width];
        dst.row_mut(y).copy_from_slice(src_row);
    }
}

#[inline]
fn accumulate(acc: &mut [f32; 4], px: Rgba, w: f32) {
    acc[0] += px.r as f32 * w;
    acc[1] += px.g as f32 * w;
    acc[2] += px.b as f32 * w;
    acc[3] += px.a as f32 * w;
}

#[inline]
fn to_pixel(acc: [f32; 4]) -> Rgba {
    let q = |v: f32| v.round().clamp(0.0, 255.0) as u8;
    Rgba::new(q(acc[0]), q(acc[1]), q(acc[2]), q(acc[3]))
}
