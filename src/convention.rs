//! Ink conventions of the drawing surfaces the pipeline accepts.
//!
//! Some surfaces draw strokes onto a transparent backdrop, so the alpha
//! channel carries the ink. Others draw onto opaque white, so ink is the
//! inverted red channel. Both map onto the same `[-1, 1]` intensity scale,
//! where `-1` is background and `1` is full ink.
use crate::image::Rgba;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InkConvention {
    /// Ink iff `alpha != 0`; intensity `alpha / 127.5 - 1`.
    #[default]
    TransparentBackground,
    /// Ink iff `red < 255`; intensity `(255 - red) / 127.5 - 1`.
    WhiteBackground,
}

impl InkConvention {
    #[inline]
    pub fn is_ink(self, px: Rgba) -> bool {
        match self {
            Self::TransparentBackground => px.a != 0,
            Self::WhiteBackground => px.r < 255,
        }
    }

    /// Raw ink amount in `[0, 255]`.
    #[inline]
    pub fn ink_level(self, px: Rgba) -> u8 {
        match self {
            Self::TransparentBackground => px.a,
            Self::WhiteBackground => 255 - px.r,
        }
    }

    /// Classifier intensity in `[-1, 1]`.
    #[inline]
    pub fn intensity(self, px: Rgba) -> f64 {
        f64::from(self.ink_level(px)) / 127.5 - 1.0
    }

    /// Pixel an empty surface of this kind is made of. Used to clear scratch
    /// buffers and to stand in for samples outside the source.
    #[inline]
    pub fn background(self) -> Rgba {
        match self {
            Self::TransparentBackground => Rgba::TRANSPARENT,
            Self::WhiteBackground => Rgba::WHITE,
        }
    }
}
