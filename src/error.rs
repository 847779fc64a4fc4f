//! Error type shared by extraction, normalization and recognition.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NormalizeError {
    /// The output grid is unusable (zero or overflowing size, unrepresentable
    /// region) or does not match the `target_size²` values the classifier
    /// consumes.
    #[error("invalid image size: expected {expected} pixels, got {actual}")]
    InvalidDimensions { expected: usize, actual: usize },
    /// No pixel of the canvas counts as ink under the active convention.
    #[error("canvas contains no ink")]
    EmptyCanvas,
    /// Pixel storage does not match the declared `width * height`.
    #[error("pixel buffer holds {actual} values, expected {expected}")]
    InvalidBuffer { expected: usize, actual: usize },
    #[error("padding ratio must be finite and >= 1.0, got {0}")]
    InvalidPadding(f32),
    /// The classifier returned a score vector of the wrong length.
    #[error("classifier returned {actual} scores, expected {expected}")]
    InvalidScores { expected: usize, actual: usize },
}

pub type NormalizeResult<T> = Result<T, NormalizeError>;
