//! Borrowed and owned RGBA images in row-major layout.
//!
//! `ImageRgba` is the zero-copy view the pipeline reads from; `RgbaBuffer`
//! owns its pixels and backs both canvas snapshots and the resampling scratch
//! surface.
use super::pixel::Rgba;
use super::traits::{ImageView, ImageViewMut};
use crate::error::{NormalizeError, NormalizeResult};

#[derive(Clone, Copy, Debug)]
pub struct ImageRgba<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // pixels between rows
    pub data: &'a [Rgba],
}

impl<'a> ImageRgba<'a> {
    /// Wrap a tightly packed pixel slice, checking `len == w * h`.
    pub fn new(w: usize, h: usize, data: &'a [Rgba]) -> NormalizeResult<Self> {
        let expected = w * h;
        if data.len() != expected {
            return Err(NormalizeError::InvalidBuffer {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgba {
        self.data[y * self.stride + x]
    }
}

impl<'a> ImageView for ImageRgba<'a> {
    type Pixel = Rgba;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[Rgba] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[Rgba]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}

/// Owned RGBA buffer with stride equal to width.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RgbaBuffer {
    width: usize,
    height: usize,
    data: Vec<Rgba>,
}

impl RgbaBuffer {
    /// Allocate a `width × height` buffer filled with `fill`.
    pub fn new(width: usize, height: usize, fill: Rgba) -> Self {
        Self {
            width,
            height,
            data: vec![fill; width * height],
        }
    }

    /// Take ownership of row-major pixels, checking `len == width * height`.
    pub fn from_pixels(width: usize, height: usize, data: Vec<Rgba>) -> NormalizeResult<Self> {
        let expected = width * height;
        if data.len() != expected {
            return Err(NormalizeError::InvalidBuffer {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build from interleaved `r, g, b, a` bytes as produced by a canvas
    /// snapshot (`len == width * height * 4`).
    pub fn from_rgba_bytes(width: usize, height: usize, bytes: &[u8]) -> NormalizeResult<Self> {
        let expected = width * height * 4;
        if bytes.len() != expected {
            return Err(NormalizeError::InvalidBuffer {
                expected,
                actual: bytes.len(),
            });
        }
        let data = bytes.chunks_exact(4).map(Rgba::from_slice).collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Borrow as a read-only `ImageRgba` view
    pub fn as_view(&self) -> ImageRgba<'_> {
        ImageRgba {
            w: self.width,
            h: self.height,
            stride: self.width,
            data: &self.data,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgba {
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, px: Rgba) {
        let i = y * self.width + x;
        self.data[i] = px;
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.data
    }

    /// Change the dimensions, reusing the allocation where possible. Pixel
    /// contents are unspecified afterwards; callers fill before reading.
    pub fn resize(&mut self, width: usize, height: usize, fill: Rgba) {
        self.width = width;
        self.height = height;
        self.data.resize(width * height, fill);
    }

    /// Interleaved `r, g, b, a` bytes.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.data.iter().flat_map(|px| px.to_array()).collect()
    }
}

impl ImageView for RgbaBuffer {
    type Pixel = Rgba;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn stride(&self) -> usize {
        self.width
    }
    #[inline]
    fn row(&self, y: usize) -> &[Rgba] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[Rgba]> {
        Some(&self.data)
    }
}

impl ImageViewMut for RgbaBuffer {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [Rgba] {
        let start = y * self.width;
        let end = start + self.width;
        &mut self.data[start..end]
    }

    fn fill(&mut self, value: Rgba) {
        self.data.fill(value);
    }
}
