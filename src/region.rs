//! Source regions in canvas coordinates.
//!
//! `Rect` carries the fractional square produced by the padding math. Before
//! sampling it is re-quantized to a `PixelRegion` with integer offsets; the
//! region may extend past the canvas on any side.
use serde::{Deserialize, Serialize};

/// Largest coordinate or edge, in pixels, a region may have. Keeps the
/// integer region and its end offsets well inside `isize` and exactly
/// representable as `f32`.
pub const MAX_REGION_EXTENT: f32 = 16_777_216.0;

/// Axis-aligned rectangle, top-left origin, x right, y down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Square of edge `max(width, height)` anchored at the origin. Covers the
    /// whole canvas and scales it uniformly; on a non-square canvas the short
    /// side is padded with background.
    pub fn full_square(width: usize, height: usize) -> Self {
        let edge = width.max(height) as f32;
        Self::new(0.0, 0.0, edge, edge)
    }

    #[inline]
    pub fn center(&self) -> [f32; 2] {
        [self.x + 0.5 * self.width, self.y + 0.5 * self.height]
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Round to integer pixel offsets. Width and height are at least one
    /// pixel; `None` for non-finite input or coordinates beyond
    /// [`MAX_REGION_EXTENT`].
    pub fn quantize(&self) -> Option<PixelRegion> {
        let in_range = |v: f32| v.is_finite() && v.abs() <= MAX_REGION_EXTENT;
        if !(in_range(self.x) && in_range(self.y) && in_range(self.width) && in_range(self.height))
        {
            return None;
        }
        Some(PixelRegion {
            x0: self.x.round() as isize,
            y0: self.y.round() as isize,
            width: (self.width.round().max(1.0)) as usize,
            height: (self.height.round().max(1.0)) as usize,
        })
    }
}

/// Integer source window. Offsets may be negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRegion {
    pub x0: isize,
    pub y0: isize,
    pub width: usize,
    pub height: usize,
}

impl PixelRegion {
    pub fn full(width: usize, height: usize) -> Self {
        Self {
            x0: 0,
            y0: 0,
            width,
            height,
        }
    }

    /// True when every pixel of the region lies inside a `w × h` image.
    pub fn is_inside(&self, w: usize, h: usize) -> bool {
        self.x0 >= 0
            && self.y0 >= 0
            && self.x0 as usize + self.width <= w
            && self.y0 as usize + self.height <= h
    }
}
