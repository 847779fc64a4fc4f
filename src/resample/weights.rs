/// One source sample contributing to an output pixel along a single axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tap {
    /// Source coordinate, always inside the image.
    pub src: usize,
    /// Fraction of the output footprint covered by this sample.
    pub weight: f32,
}

/// Per-output-pixel tap lists for one axis of an area-weighted resample.
///
/// Output pixel `o` covers the source interval `[o * s, (o + 1) * s)` with
/// `s = src_len / dst_len`, offset by `src_start`. Every source pixel
/// overlapping that interval contributes with the length of the overlap
/// divided by `s`. Only pixels inside `[0, valid_len)` get a tap; the part of
/// the footprint hanging over the image edge is kept as a single
/// [`outside`](Self::outside) weight, so taps plus outside sum to one and the
/// table size never depends on how far a region extends past the image.
#[derive(Clone, Debug, Default)]
pub struct AxisWeights {
    taps: Vec<Tap>,
    offsets: Vec<usize>,
    outside: Vec<f32>,
}

impl AxisWeights {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the taps mapping `src_len` pixels starting at `src_start`
    /// onto `dst_len` output pixels, for an image axis of `valid_len` pixels.
    /// Reuses the existing allocations.
    pub fn rebuild(&mut self, src_start: isize, src_len: usize, valid_len: usize, dst_len: usize) {
        self.taps.clear();
        self.offsets.clear();
        self.outside.clear();
        self.offsets.push(0);
        if src_len == 0 || dst_len == 0 {
            self.offsets.resize(dst_len + 1, 0);
            self.outside.resize(dst_len, 1.0);
            return;
        }
        let scale = src_len as f64 / dst_len as f64;
        let start = src_start as f64;
        let valid = valid_len as f64;
        for o in 0..dst_len {
            let lo = start + o as f64 * scale;
            let hi = start + (o + 1) as f64 * scale;
            let first = lo.max(0.0).floor();
            let last = hi.min(valid).ceil();
            if first < last {
                for i in first as usize..last as usize {
                    let overlap = hi.min((i + 1) as f64) - lo.max(i as f64);
                    if overlap > 1e-9 {
                        self.taps.push(Tap {
                            src: i,
                            weight: (overlap / scale) as f32,
                        });
                    }
                }
            }
            let span = hi - lo;
            let before = (0.0 - lo).clamp(0.0, span);
            let after = (hi - valid).clamp(0.0, span);
            self.offsets.push(self.taps.len());
            self.outside.push(((before + after) / scale).min(1.0) as f32);
        }
    }

    /// Taps of output pixel `o`.
    #[inline]
    pub fn taps(&self, o: usize) -> &[Tap] {
        &self.taps[self.offsets[o]..self.offsets[o + 1]]
    }

    /// Share of output pixel `o` that falls outside the image.
    #[inline]
    pub fn outside(&self, o: usize) -> f32 {
        self.outside[o]
    }

    pub fn output_len(&self) -> usize {
        self.outside.len()
    }
}
