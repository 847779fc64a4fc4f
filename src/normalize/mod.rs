//! Canvas region → classifier tensor.
//!
//! `normalize` resamples a source region onto a `target_size × target_size`
//! grid with area averaging, then converts every pixel, row by row, to an
//! intensity in `[-1, 1]` through the active [`InkConvention`]. The output
//! order is part of the classifier's input contract and is never transposed.
//!
//! Modules
//! - `scratch` – the reusable, clear-before-use resampling surface.

pub mod scratch;

pub use scratch::ScratchSurface;

use crate::convention::InkConvention;
use crate::error::{NormalizeError, NormalizeResult};
use crate::image::{ImageRgba, ImageView, NormalizedImage, RgbaBuffer};
use crate::region::Rect;
use log::debug;

/// Input resolution of the digit models.
pub const TARGET_SIZE: usize = 28;

/// Normalize `region` of `source` to a `target_size²` intensity vector.
///
/// Errors with [`NormalizeError::InvalidDimensions`] when `target_size` is
/// zero, when `region` is not finite, or when the resampled surface does not
/// hold exactly `target_size²` pixels.
pub fn normalize(
    source: &ImageRgba<'_>,
    region: Rect,
    target_size: usize,
    convention: InkConvention,
    scratch: &mut ScratchSurface,
) -> NormalizeResult<NormalizedImage> {
    let expected = input_len(target_size)?;
    let pixel_region = region.quantize().ok_or(NormalizeError::InvalidDimensions {
        expected,
        actual: 0,
    })?;
    debug!(
        "normalize: region x0={} y0={} {}x{} -> {}x{} ({:?})",
        pixel_region.x0,
        pixel_region.y0,
        pixel_region.width,
        pixel_region.height,
        target_size,
        target_size,
        convention
    );
    let surface = scratch.draw_region(source, pixel_region, target_size, convention);
    to_intensities(surface, target_size, convention)
}

/// Number of intensities produced for `target_size`.
///
/// Errors with [`NormalizeError::InvalidDimensions`] for a zero size or one
/// whose square does not fit in `usize`.
pub fn input_len(target_size: usize) -> NormalizeResult<usize> {
    match target_size.checked_mul(target_size) {
        Some(len) if len > 0 => Ok(len),
        _ => Err(NormalizeError::InvalidDimensions {
            expected: 0,
            actual: target_size,
        }),
    }
}

/// Normalize the whole of `source`, scaled uniformly onto the target grid.
pub fn normalize_full(
    source: &ImageRgba<'_>,
    target_size: usize,
    convention: InkConvention,
    scratch: &mut ScratchSurface,
) -> NormalizeResult<NormalizedImage> {
    let region = Rect::full_square(source.w, source.h);
    normalize(source, region, target_size, convention, scratch)
}

/// Convert an already resampled surface into classifier intensities.
pub fn to_intensities(
    surface: &RgbaBuffer,
    target_size: usize,
    convention: InkConvention,
) -> NormalizeResult<NormalizedImage> {
    let expected = input_len(target_size)?;
    let actual = surface.pixel_count();
    if actual != expected || surface.width() != target_size {
        return Err(NormalizeError::InvalidDimensions { expected, actual });
    }
    let data = surface
        .pixels()
        .iter()
        .map(|&px| convention.intensity(px))
        .collect();
    Ok(NormalizedImage::from_vec(target_size, data))
}
