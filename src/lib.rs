#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod convention;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod recognizer;
pub mod region;

// Pipeline stages, usable on their own.
pub mod config;
pub mod extract;
pub mod normalize;
pub mod resample;
pub mod trigger;

// --- High-level re-exports -------------------------------------------------

// Main entry points: recognizer + results.
pub use crate::recognizer::{
    Classifier, CropMode, DigitRecognizer, DigitScores, EmptyCanvasPolicy, RecognizerParams,
    ScoreSink,
};
pub use crate::diagnostics::{RecognitionOutcome, RecognitionReport};

// The normalization core.
pub use crate::convention::InkConvention;
pub use crate::error::{NormalizeError, NormalizeResult};
pub use crate::extract::{extract_padded_square, extract_padded_square_with, DEFAULT_PADDING_RATIO};
pub use crate::normalize::{normalize, normalize_full, ScratchSurface, TARGET_SIZE};
pub use crate::region::{PixelRegion, Rect};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use digit_canvas::prelude::*;
///
/// # fn main() -> Result<(), NormalizeError> {
/// let canvas = RgbaBuffer::new(280, 280, Rgba::TRANSPARENT);
/// let classifier = |image: &[f64]| vec![image.len() as f64; 10];
///
/// let mut recognizer = DigitRecognizer::new(RecognizerParams::default(), classifier);
/// let mut display = |scores: &DigitScores| println!("{:?}", scores.best());
///
/// let outcome = recognizer.recognize(&canvas.as_view(), &mut display)?;
/// println!("outcome={outcome:?}");
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{ImageRgba, Rgba, RgbaBuffer};
    pub use crate::{
        Classifier, DigitRecognizer, DigitScores, InkConvention, NormalizeError,
        RecognizerParams, ScoreSink,
    };
}
