//! Seams towards the external collaborators: the digit classifier and the
//! score display.
use crate::error::{NormalizeError, NormalizeResult};
use crate::normalize::TARGET_SIZE;
use serde::{Deserialize, Serialize};

/// Number of output classes (digits 0–9).
pub const DIGIT_CLASSES: usize = 10;

/// Opaque digit classifier.
///
/// Receives exactly [`input_size`](Self::input_size) values in `[-1, 1]`,
/// row-major, and returns one score per digit. Scores need not be
/// normalized.
pub trait Classifier {
    /// Number of values the model consumes.
    fn input_size(&self) -> usize {
        TARGET_SIZE * TARGET_SIZE
    }

    fn infer(&self, image: &[f64]) -> Vec<f64>;
}

impl<F> Classifier for F
where
    F: Fn(&[f64]) -> Vec<f64>,
{
    fn infer(&self, image: &[f64]) -> Vec<f64> {
        self(image)
    }
}

/// Fire-and-forget display of a score vector.
pub trait ScoreSink {
    fn show(&mut self, scores: &DigitScores);
}

impl<F> ScoreSink for F
where
    F: FnMut(&DigitScores),
{
    fn show(&mut self, scores: &DigitScores) {
        self(scores)
    }
}

/// Per-digit scores as returned by the classifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DigitScores([f64; DIGIT_CLASSES]);

impl DigitScores {
    /// The neutral state shown before anything was drawn.
    pub fn zeros() -> Self {
        Self([0.0; DIGIT_CLASSES])
    }

    pub fn new(scores: [f64; DIGIT_CLASSES]) -> Self {
        Self(scores)
    }

    /// Accept a classifier output, rejecting the wrong number of classes.
    pub fn from_vec(scores: Vec<f64>) -> NormalizeResult<Self> {
        let actual = scores.len();
        let arr: [f64; DIGIT_CLASSES] =
            scores
                .try_into()
                .map_err(|_| NormalizeError::InvalidScores {
                    expected: DIGIT_CLASSES,
                    actual,
                })?;
        Ok(Self(arr))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn get(&self, digit: usize) -> Option<f64> {
        self.0.get(digit).copied()
    }

    /// Digit with the highest score; `None` if every score is NaN. Ties go
    /// to the lower digit.
    pub fn best(&self) -> Option<u8> {
        let mut best: Option<(usize, f64)> = None;
        for (digit, &score) in self.0.iter().enumerate() {
            if score.is_nan() {
                continue;
            }
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((digit, score)),
            }
        }
        best.map(|(digit, _)| digit as u8)
    }

    /// Scores clamped to `[0, 1]` for bar-chart display; NaN becomes 0.
    pub fn clamped(&self) -> Self {
        let mut out = self.0;
        for v in &mut out {
            *v = if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
        }
        Self(out)
    }
}
