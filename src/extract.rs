//! Ink bounding box and padded-square extraction.
//!
//! Drawings usually occupy a small, off-centre part of a large canvas. The
//! extractor finds the rectangle spanned by ink pixels and grows it into a
//! square centred on the ink, with a relative margin, so that resampling to
//! the classifier resolution spends its pixels on strokes rather than on
//! blank margins and never distorts the aspect ratio.
//!
//! Spans follow the exclusive convention `max - min`: a stroke covering
//! columns 10..=20 has width 10.
use crate::convention::InkConvention;
use crate::error::{NormalizeError, NormalizeResult};
use crate::image::{ImageRgba, ImageView, Rgba};
use crate::region::Rect;
use log::debug;
use serde::{Deserialize, Serialize};

/// Default relative margin around the ink (10%).
pub const DEFAULT_PADDING_RATIO: f32 = 1.1;

/// Inclusive pixel bounds of all ink pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InkBounds {
    pub min_x: usize,
    pub min_y: usize,
    pub max_x: usize,
    pub max_y: usize,
}

impl InkBounds {
    #[inline]
    pub fn span_x(&self) -> usize {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn span_y(&self) -> usize {
        self.max_y - self.min_y
    }

    /// Expand to the padded square centred on these bounds.
    ///
    /// A single ink pixel has zero span; the edge is floored at one pixel so
    /// the result is never degenerate.
    pub fn padded_square(&self, padding_ratio: f32) -> Rect {
        let width = self.span_x() as f32;
        let height = self.span_y() as f32;
        let edge = (width.max(height) * padding_ratio).max(1.0);
        let x = self.min_x as f32 - (edge - width) / 2.0;
        let y = self.min_y as f32 - (edge - height) / 2.0;
        Rect::new(x, y, edge, edge)
    }
}

/// Scan `image` once and return the bounds of pixels accepted by `is_ink`,
/// or `None` when there is no ink at all.
pub fn ink_bounds<F>(image: &ImageRgba<'_>, is_ink: F) -> Option<InkBounds>
where
    F: Fn(Rgba) -> bool,
{
    let mut bounds: Option<InkBounds> = None;
    for (y, row) in image.rows().enumerate() {
        for (x, &px) in row.iter().enumerate() {
            if !is_ink(px) {
                continue;
            }
            match bounds.as_mut() {
                Some(b) => {
                    b.min_x = b.min_x.min(x);
                    b.max_x = b.max_x.max(x);
                    // rows are visited top to bottom
                    b.max_y = y;
                }
                None => {
                    bounds = Some(InkBounds {
                        min_x: x,
                        min_y: y,
                        max_x: x,
                        max_y: y,
                    })
                }
            }
        }
    }
    bounds
}

/// Find the padded square that encloses all ink pixels.
///
/// Returns [`NormalizeError::EmptyCanvas`] when no pixel is ink and
/// [`NormalizeError::InvalidPadding`] for a ratio below one or non-finite.
/// The square may extend beyond the canvas.
pub fn extract_padded_square<F>(
    image: &ImageRgba<'_>,
    is_ink: F,
    padding_ratio: f32,
) -> NormalizeResult<Rect>
where
    F: Fn(Rgba) -> bool,
{
    Ok(extract_with_bounds(image, is_ink, padding_ratio)?.1)
}

/// [`extract_padded_square`] with the ink predicate of `convention`.
pub fn extract_padded_square_with(
    image: &ImageRgba<'_>,
    convention: InkConvention,
    padding_ratio: f32,
) -> NormalizeResult<Rect> {
    extract_padded_square(image, |px| convention.is_ink(px), padding_ratio)
}

/// Like [`extract_padded_square`] but also returns the raw ink bounds for
/// diagnostics.
pub fn extract_with_bounds<F>(
    image: &ImageRgba<'_>,
    is_ink: F,
    padding_ratio: f32,
) -> NormalizeResult<(InkBounds, Rect)>
where
    F: Fn(Rgba) -> bool,
{
    if !padding_ratio.is_finite() || padding_ratio < 1.0 {
        return Err(NormalizeError::InvalidPadding(padding_ratio));
    }
    let bounds = ink_bounds(image, is_ink).ok_or(NormalizeError::EmptyCanvas)?;
    let square = bounds.padded_square(padding_ratio);
    debug!(
        "extract: ink x=[{}, {}] y=[{}, {}] -> square x={:.2} y={:.2} edge={:.2}",
        bounds.min_x, bounds.max_x, bounds.min_y, bounds.max_y, square.x, square.y, square.width
    );
    Ok((bounds, square))
}
