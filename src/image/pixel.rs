//! Straight (non-premultiplied) 8-bit RGBA pixel record.
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// `rgba(0, 0, 0, 0)`, the cleared state of a transparent surface.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    /// `rgba(255, 255, 255, 255)`
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);
    /// `rgba(0, 0, 0, 255)`
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub fn from_slice(px: &[u8]) -> Self {
        Self::new(px[0], px[1], px[2], px[3])
    }

    #[inline]
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(c: [u8; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}
