use digit_canvas::image::{Rgba, RgbaBuffer};

/// Canvas of `width × height` filled with `background`, with the inclusive
/// rectangle `(x0, y0)..=(x1, y1)` painted in `ink`.
pub fn canvas_with_block(
    width: usize,
    height: usize,
    background: Rgba,
    ink: Rgba,
    (x0, y0): (usize, usize),
    (x1, y1): (usize, usize),
) -> RgbaBuffer {
    assert!(width > 0 && height > 0, "canvas dimensions must be positive");
    assert!(x1 < width && y1 < height, "block must fit inside the canvas");

    let mut canvas = RgbaBuffer::new(width, height, background);
    for y in y0..=y1 {
        for x in x0..=x1 {
            canvas.set(x, y, ink);
        }
    }
    canvas
}

/// Deterministic pseudo-random RGBA noise (xorshift), for determinism checks.
#[allow(dead_code)]
pub fn noise_canvas(width: usize, height: usize, seed: u32) -> RgbaBuffer {
    let mut state = seed.max(1);
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state
    };
    let mut canvas = RgbaBuffer::new(width, height, Rgba::TRANSPARENT);
    for y in 0..height {
        for x in 0..width {
            let v = next().to_le_bytes();
            canvas.set(x, y, Rgba::from(v));
        }
    }
    canvas
}
