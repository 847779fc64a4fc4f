//! I/O helpers for canvas snapshots, normalized previews and JSON.
//!
//! - `load_rgba_image`: read a PNG/JPEG/etc. into an owned RGBA buffer.
//! - `save_normalized_png`: write a `NormalizedImage` to a grayscale PNG.
//! - `save_rgba_png`: write an owned RGBA buffer to a PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageView, NormalizedImage, Rgba, RgbaBuffer};
use image::{DynamicImage, GrayImage, ImageBuffer, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to 8-bit RGBA.
pub fn load_rgba_image(path: &Path) -> Result<RgbaBuffer, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgba8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let pixels = img.pixels().map(|p| Rgba::from(p.0)).collect();
    RgbaBuffer::from_pixels(width, height, pixels)
        .map_err(|e| format!("Failed to decode {}: {e}", path.display()))
}

/// Save a normalized image as grayscale, mapping `[-1, 1]` onto `[0, 255]`.
/// Ink ends up bright, background dark.
pub fn save_normalized_png(image: &NormalizedImage, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let size = image.size() as u32;
    let mut out = GrayImage::new(size, size);
    for (y, row) in image.rows().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            let px = ((v + 1.0) * 127.5).round().clamp(0.0, 255.0);
            out.put_pixel(x as u32, y as u32, Luma([px as u8]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save an RGBA buffer to a PNG.
pub fn save_rgba_png(buffer: &RgbaBuffer, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let image: ImageBuffer<image::Rgba<u8>, Vec<u8>> = ImageBuffer::from_raw(
        buffer.width() as u32,
        buffer.height() as u32,
        buffer.to_rgba_bytes(),
    )
    .ok_or_else(|| "Failed to create image buffer".to_string())?;
    DynamicImage::ImageRgba8(image)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
