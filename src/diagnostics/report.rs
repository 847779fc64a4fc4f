use crate::convention::InkConvention;
use crate::diagnostics::TimingBreakdown;
use crate::extract::InkBounds;
use crate::recognizer::{CropMode, DigitScores};
use crate::region::{PixelRegion, Rect};
use serde::Serialize;

/// Result produced by
/// [`DigitRecognizer::recognize_with_report`](crate::DigitRecognizer).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionReport {
    pub input: InputDescriptor,
    pub outcome: RecognitionOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<RegionStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<DigitScores>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_digit: Option<u8>,
    pub timings: TimingBreakdown,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub target_size: usize,
    pub convention: InkConvention,
    pub crop: CropMode,
}

/// How the sampled region was chosen.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionStage {
    /// Ink bounds; absent when the full canvas was used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ink_bounds: Option<InkBounds>,
    /// Fractional source square before quantization.
    pub rect: Rect,
    /// Integer window actually resampled.
    pub sampled: PixelRegion,
    /// True when an empty canvas fell back to the full surface.
    pub fallback_full_canvas: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecognitionOutcome {
    /// The classifier ran and the display was updated.
    Recognized,
    /// Nothing drawn; classifier skipped, display reset.
    Empty,
}
