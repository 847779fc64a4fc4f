//! Square single-channel f64 image in row-major layout (stride == width).
//!
//! This is the exact input contract of the digit classifier: `size * size`
//! intensities in `[-1, 1]`, ordered row by row in the orientation of the
//! source canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedImage {
    /// Edge length in pixels
    size: usize,
    /// Backing storage in row-major order
    data: Vec<f64>,
}

impl NormalizedImage {
    pub(crate) fn from_vec(size: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), size * size);
        Self { size, data }
    }

    /// Edge length of the square image.
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    /// Get the intensity at (x, y).
    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.data[y * self.size + x]
    }

    /// Flat row-major view, suitable for handing to a classifier.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl crate::image::traits::ImageView for NormalizedImage {
    type Pixel = f64;

    #[inline]
    fn width(&self) -> usize {
        self.size
    }
    #[inline]
    fn height(&self) -> usize {
        self.size
    }
    #[inline]
    fn stride(&self) -> usize {
        self.size
    }
    #[inline]
    fn row(&self, y: usize) -> &[f64] {
        let start = y * self.size;
        &self.data[start..start + self.size]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[f64]> {
        Some(&self.data)
    }
}
