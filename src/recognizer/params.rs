//! Parameter types configuring a recognition request.
//!
//! Defaults reproduce the bounding-box pipeline on a transparent drawing
//! surface: 28×28 output, 10% padding, empty canvases skipped.

use crate::convention::InkConvention;
use crate::extract::DEFAULT_PADDING_RATIO;
use crate::normalize::TARGET_SIZE;
use serde::{Deserialize, Serialize};

/// Which part of the canvas feeds the resampler.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CropMode {
    /// Padded square around the ink.
    #[default]
    PaddedSquare,
    /// The whole canvas, scaled uniformly.
    FullCanvas,
}

/// What to do when the canvas holds no ink.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyCanvasPolicy {
    /// Do not classify; reset the display to all zeros.
    #[default]
    Skip,
    /// Normalize the full canvas and classify it anyway.
    FullCanvas,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognizerParams {
    /// Output edge length. Fixed by the classifier's trained input shape, so
    /// it is never read from configuration.
    #[serde(skip_deserializing, default = "default_target_size")]
    pub target_size: usize,
    /// Relative margin applied to the ink bounds (>= 1).
    pub padding_ratio: f32,
    pub convention: InkConvention,
    pub crop: CropMode,
    pub empty_canvas: EmptyCanvasPolicy,
}

fn default_target_size() -> usize {
    TARGET_SIZE
}

impl Default for RecognizerParams {
    fn default() -> Self {
        Self {
            target_size: TARGET_SIZE,
            padding_ratio: DEFAULT_PADDING_RATIO,
            convention: InkConvention::TransparentBackground,
            crop: CropMode::PaddedSquare,
            empty_canvas: EmptyCanvasPolicy::Skip,
        }
    }
}

impl RecognizerParams {
    pub fn with_convention(mut self, convention: InkConvention) -> Self {
        self.convention = convention;
        self
    }

    pub fn with_crop(mut self, crop: CropMode) -> Self {
        self.crop = crop;
        self
    }

    pub fn with_empty_canvas(mut self, policy: EmptyCanvasPolicy) -> Self {
        self.empty_canvas = policy;
        self
    }

    pub fn with_padding_ratio(mut self, padding_ratio: f32) -> Self {
        self.padding_ratio = padding_ratio;
        self
    }
}
