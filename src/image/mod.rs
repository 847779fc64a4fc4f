pub mod io;
pub mod normalized;
pub mod pixel;
pub mod rgba;
pub mod traits;

pub use self::normalized::NormalizedImage;
pub use self::pixel::Rgba;
pub use self::rgba::{ImageRgba, RgbaBuffer};
pub use self::traits::{ImageView, ImageViewMut, Rows};
