//! Digit recognizer orchestrating one canvas → scores request.
//!
//! Overview
//! - Scans the canvas for ink under the configured [`InkConvention`] and
//!   picks the source region: the padded square around the ink, or the
//!   whole canvas.
//! - Resamples the region onto the model grid through an owned scratch
//!   surface and converts it to `[-1, 1]` intensities.
//! - Hands the vector to the [`Classifier`] and the resulting scores to the
//!   [`ScoreSink`].
//!
//! An empty canvas never reaches the classifier unless
//! [`EmptyCanvasPolicy::FullCanvas`] is selected.
//!
//! Modules
//! - [`params`] – configuration of a request.
//! - [`classifier`] – collaborator traits and the score vector.
//! - `pipeline` – the [`DigitRecognizer`] implementation.
//!
//! [`InkConvention`]: crate::convention::InkConvention

pub mod classifier;
pub mod params;
mod pipeline;

pub use classifier::{Classifier, DigitScores, ScoreSink, DIGIT_CLASSES};
pub use params::{CropMode, EmptyCanvasPolicy, RecognizerParams};
pub use pipeline::{DigitRecognizer, PreparedImage};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convention::InkConvention;
    use crate::diagnostics::RecognitionOutcome;
    use crate::error::NormalizeError;
    use crate::image::{Rgba, RgbaBuffer};
    use std::cell::Cell;

    struct CountingClassifier {
        calls: Cell<usize>,
        last_len: Cell<usize>,
    }

    impl CountingClassifier {
        fn new() -> Self {
            Self {
                calls: Cell::new(0),
                last_len: Cell::new(0),
            }
        }
    }

    impl Classifier for CountingClassifier {
        fn infer(&self, image: &[f64]) -> Vec<f64> {
            self.calls.set(self.calls.get() + 1);
            self.last_len.set(image.len());
            let mut out = vec![0.0; DIGIT_CLASSES];
            out[7] = 0.9;
            out
        }
    }

    #[derive(Default)]
    struct RecordingSink(Vec<DigitScores>);

    impl ScoreSink for RecordingSink {
        fn show(&mut self, scores: &DigitScores) {
            self.0.push(*scores);
        }
    }

    fn canvas_with_stroke() -> RgbaBuffer {
        let mut buf = RgbaBuffer::new(64, 64, Rgba::TRANSPARENT);
        for y in 10..40 {
            for x in 30..34 {
                buf.set(x, y, Rgba::BLACK);
            }
        }
        buf
    }

    #[test]
    fn empty_canvas_skips_classifier_and_resets_display() {
        let canvas = RgbaBuffer::new(64, 64, Rgba::TRANSPARENT);
        let mut rec = DigitRecognizer::new(RecognizerParams::default(), CountingClassifier::new());
        let mut sink = RecordingSink::default();
        let outcome = rec.recognize(&canvas.as_view(), &mut sink).unwrap();
        assert_eq!(outcome, RecognitionOutcome::Empty);
        assert_eq!(rec.classifier().calls.get(), 0);
        assert_eq!(sink.0, vec![DigitScores::zeros()]);
    }

    #[test]
    fn prepare_reports_empty_canvas_under_skip() {
        let canvas = RgbaBuffer::new(8, 8, Rgba::WHITE);
        let params = RecognizerParams::default().with_convention(InkConvention::WhiteBackground);
        let mut rec = DigitRecognizer::new(params, CountingClassifier::new());
        let err = rec.prepare(&canvas.as_view()).unwrap_err();
        assert_eq!(err, NormalizeError::EmptyCanvas);
    }

    #[test]
    fn empty_canvas_fallback_classifies_full_canvas() {
        let canvas = RgbaBuffer::new(56, 56, Rgba::TRANSPARENT);
        let params = RecognizerParams::default().with_empty_canvas(EmptyCanvasPolicy::FullCanvas);
        let mut rec = DigitRecognizer::new(params, CountingClassifier::new());
        let mut sink = RecordingSink::default();
        let report = rec
            .recognize_with_report(&canvas.as_view(), &mut sink)
            .unwrap();
        assert_eq!(report.outcome, RecognitionOutcome::Recognized);
        let region = report.region.unwrap();
        assert!(region.fallback_full_canvas);
        assert!(region.ink_bounds.is_none());
        assert_eq!(rec.classifier().calls.get(), 1);
        assert_eq!(rec.classifier().last_len.get(), 28 * 28);
    }

    #[test]
    fn stroke_is_classified_with_full_report() {
        let canvas = canvas_with_stroke();
        let mut rec = DigitRecognizer::new(RecognizerParams::default(), CountingClassifier::new());
        let mut sink = RecordingSink::default();
        let report = rec
            .recognize_with_report(&canvas.as_view(), &mut sink)
            .unwrap();
        assert_eq!(report.outcome, RecognitionOutcome::Recognized);
        assert_eq!(report.best_digit, Some(7));
        assert_eq!(sink.0.len(), 1);
        assert_eq!(sink.0[0].get(7), Some(0.9));
        let region = report.region.unwrap();
        let bounds = region.ink_bounds.unwrap();
        assert_eq!((bounds.min_x, bounds.max_x), (30, 33));
        assert_eq!((bounds.min_y, bounds.max_y), (10, 39));
        assert!(region.rect.is_square());
        let labels: Vec<&str> = report
            .timings
            .stages
            .iter()
            .map(|s| s.label.as_str())
            .collect();
        assert_eq!(labels, ["extract", "resample", "convert", "infer"]);
    }

    #[test]
    fn wrong_score_count_aborts_before_display() {
        let canvas = canvas_with_stroke();
        let classifier = |_: &[f64]| vec![0.5; 3];
        let mut rec = DigitRecognizer::new(RecognizerParams::default(), classifier);
        let mut sink = RecordingSink::default();
        let err = rec.recognize(&canvas.as_view(), &mut sink).unwrap_err();
        assert_eq!(
            err,
            NormalizeError::InvalidScores {
                expected: 10,
                actual: 3
            }
        );
        assert!(sink.0.is_empty());
    }

    #[test]
    fn invalid_padding_aborts_request() {
        let canvas = canvas_with_stroke();
        let params = RecognizerParams::default().with_padding_ratio(0.5);
        let mut rec = DigitRecognizer::new(params, CountingClassifier::new());
        let mut sink = RecordingSink::default();
        assert!(rec.recognize(&canvas.as_view(), &mut sink).is_err());
        assert_eq!(rec.classifier().calls.get(), 0);
        assert!(sink.0.is_empty());
    }

    #[test]
    fn zero_target_size_aborts_before_classifier() {
        let canvas = canvas_with_stroke();
        let params = RecognizerParams {
            target_size: 0,
            ..RecognizerParams::default()
        };
        let mut rec = DigitRecognizer::new(params, CountingClassifier::new());
        let mut sink = RecordingSink::default();
        let err = rec.recognize(&canvas.as_view(), &mut sink).unwrap_err();
        assert!(
            matches!(err, NormalizeError::InvalidDimensions { .. }),
            "unexpected error {err:?}"
        );
        assert_eq!(rec.classifier().calls.get(), 0);
        assert!(sink.0.is_empty());
    }

    #[test]
    fn grid_must_match_classifier_input() {
        let canvas = canvas_with_stroke();
        let params = RecognizerParams {
            target_size: 5,
            ..RecognizerParams::default()
        };
        let mut rec = DigitRecognizer::new(params, CountingClassifier::new());
        let mut sink = RecordingSink::default();
        let err = rec.recognize(&canvas.as_view(), &mut sink).unwrap_err();
        assert_eq!(
            err,
            NormalizeError::InvalidDimensions {
                expected: 784,
                actual: 25
            }
        );
        assert_eq!(rec.classifier().calls.get(), 0);
        assert!(sink.0.is_empty());

        // an empty canvas does not bypass the check
        let blank = RgbaBuffer::new(64, 64, Rgba::TRANSPARENT);
        assert!(rec.recognize(&blank.as_view(), &mut sink).is_err());
        assert!(sink.0.is_empty());
    }

    #[test]
    fn classifier_declares_its_input_size() {
        struct SmallModel;

        impl Classifier for SmallModel {
            fn input_size(&self) -> usize {
                16 * 16
            }

            fn infer(&self, image: &[f64]) -> Vec<f64> {
                vec![image.len() as f64; DIGIT_CLASSES]
            }
        }

        let canvas = canvas_with_stroke();
        let mut sink = RecordingSink::default();
        let mut rec = DigitRecognizer::new(RecognizerParams::default(), SmallModel);
        assert_eq!(
            rec.recognize(&canvas.as_view(), &mut sink),
            Err(NormalizeError::InvalidDimensions {
                expected: 256,
                actual: 784
            })
        );

        let params = RecognizerParams {
            target_size: 16,
            ..RecognizerParams::default()
        };
        let mut rec = DigitRecognizer::new(params, SmallModel);
        rec.recognize(&canvas.as_view(), &mut sink).unwrap();
        assert_eq!(sink.0, vec![DigitScores::new([256.0; DIGIT_CLASSES])]);
    }

    #[test]
    fn huge_padding_stays_bounded() {
        let canvas = canvas_with_stroke();
        let params = RecognizerParams::default().with_padding_ratio(200.0);
        let mut rec = DigitRecognizer::new(params, CountingClassifier::new());
        let prepared = rec.prepare(&canvas.as_view()).unwrap();
        assert_eq!(prepared.region.sampled.width, 5800);
        assert_eq!(prepared.image.len(), 784);
        assert!(prepared.image.as_slice().iter().all(|v| (-1.0..=1.0).contains(v)));

        let params = RecognizerParams::default().with_padding_ratio(1e30);
        let mut rec = DigitRecognizer::new(params, CountingClassifier::new());
        let mut sink = RecordingSink::default();
        let err = rec.recognize(&canvas.as_view(), &mut sink).unwrap_err();
        assert!(matches!(err, NormalizeError::InvalidDimensions { .. }));
        assert_eq!(rec.classifier().calls.get(), 0);
        assert!(sink.0.is_empty());
    }

    #[test]
    fn full_canvas_crop_keeps_uniform_scale() {
        let canvas = canvas_with_stroke();
        let params = RecognizerParams::default().with_crop(CropMode::FullCanvas);
        let mut rec = DigitRecognizer::new(params, CountingClassifier::new());
        let prepared = rec.prepare(&canvas.as_view()).unwrap();
        assert_eq!(prepared.region.rect.width, 64.0);
        assert_eq!(prepared.region.sampled.x0, 0);
        assert!(!prepared.region.fallback_full_canvas);
        // the stroke sits in columns 30..34 of 64, i.e. output column 13..15
        assert!(prepared.image.get(14, 10) > 0.0);
        assert_eq!(prepared.image.get(0, 0), -1.0);
    }

    #[test]
    fn clear_resets_display() {
        let canvas = canvas_with_stroke();
        let mut rec = DigitRecognizer::new(RecognizerParams::default(), CountingClassifier::new());
        let mut sink = RecordingSink::default();
        rec.recognize(&canvas.as_view(), &mut sink).unwrap();
        rec.clear(&mut sink);
        assert_eq!(sink.0.last(), Some(&DigitScores::zeros()));
        assert!(rec
            .scratch()
            .pixels()
            .pixels()
            .iter()
            .all(|&p| p == Rgba::TRANSPARENT));
    }
}
