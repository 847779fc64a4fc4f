use super::classifier::{Classifier, DigitScores, ScoreSink};
use super::params::{CropMode, EmptyCanvasPolicy, RecognizerParams};
use crate::diagnostics::{
    elapsed_ms, InputDescriptor, RecognitionOutcome, RecognitionReport, RegionStage,
    TimingBreakdown,
};
use crate::error::{NormalizeError, NormalizeResult};
use crate::extract::{extract_with_bounds, ink_bounds};
use crate::image::{ImageRgba, NormalizedImage, Rgba};
use crate::normalize::{input_len, to_intensities, ScratchSurface};
use crate::region::Rect;
use log::{debug, warn};
use std::time::Instant;

/// Normalized classifier input together with the region it was cut from.
#[derive(Clone, Debug)]
pub struct PreparedImage {
    pub image: NormalizedImage,
    pub region: RegionStage,
}

/// Runs canvas → tensor → classifier → display for one drawing at a time.
///
/// Owns the scratch surface, so a single recognizer must not be shared
/// between concurrent requests; coalesce triggers with
/// [`Debouncer`](crate::trigger::Debouncer) instead.
pub struct DigitRecognizer<C> {
    params: RecognizerParams,
    classifier: C,
    scratch: ScratchSurface,
}

impl<C> DigitRecognizer<C> {
    pub fn new(params: RecognizerParams, classifier: C) -> Self {
        Self {
            params,
            classifier,
            scratch: ScratchSurface::new(),
        }
    }

    pub fn params(&self) -> &RecognizerParams {
        &self.params
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Scratch surface holding the last resampled grid.
    pub fn scratch(&self) -> &ScratchSurface {
        &self.scratch
    }

    /// Choose the source region and normalize it, without classifying.
    ///
    /// Under [`EmptyCanvasPolicy::Skip`] an ink-free canvas yields
    /// [`NormalizeError::EmptyCanvas`].
    pub fn prepare(&mut self, canvas: &ImageRgba<'_>) -> NormalizeResult<PreparedImage> {
        self.prepare_timed(canvas, &mut TimingBreakdown::default())
    }

    /// Wipe the scratch surface and reset the display to zeros.
    pub fn clear<S: ScoreSink>(&mut self, sink: &mut S) {
        self.scratch.clear();
        sink.show(&DigitScores::zeros());
    }

    fn prepare_timed(
        &mut self,
        canvas: &ImageRgba<'_>,
        timings: &mut TimingBreakdown,
    ) -> NormalizeResult<PreparedImage> {
        let target_size = self.params.target_size;
        let convention = self.params.convention;
        let expected = input_len(target_size)?;

        let extract_start = Instant::now();
        let region = self.select_region(canvas, expected);
        timings.push_since("extract", extract_start);
        let region = region?;

        let resample_start = Instant::now();
        let sampled = region.sampled;
        debug!(
            "resample: region x0={} y0={} {}x{} -> {}x{}",
            sampled.x0, sampled.y0, sampled.width, sampled.height, target_size, target_size
        );
        let surface = self
            .scratch
            .draw_region(canvas, sampled, target_size, convention);
        timings.push_since("resample", resample_start);

        let convert_start = Instant::now();
        let image = to_intensities(surface, target_size, convention)?;
        timings.push_since("convert", convert_start);

        Ok(PreparedImage { image, region })
    }

    fn select_region(
        &self,
        canvas: &ImageRgba<'_>,
        expected: usize,
    ) -> NormalizeResult<RegionStage> {
        let convention = self.params.convention;
        let is_ink = |px: Rgba| convention.is_ink(px);
        let full = Rect::full_square(canvas.w, canvas.h);

        let selected = match self.params.crop {
            CropMode::PaddedSquare => extract_with_bounds(canvas, is_ink, self.params.padding_ratio)
                .map(|(bounds, rect)| (Some(bounds), rect)),
            CropMode::FullCanvas => ink_bounds(canvas, is_ink)
                .map(|bounds| (Some(bounds), full))
                .ok_or(NormalizeError::EmptyCanvas),
        };

        let (bounds, rect, fallback_full_canvas) = match selected {
            Ok((bounds, rect)) => (bounds, rect, false),
            Err(NormalizeError::EmptyCanvas)
                if self.params.empty_canvas == EmptyCanvasPolicy::FullCanvas =>
            {
                debug!("recognize: canvas has no ink, falling back to full canvas");
                (None, full, true)
            }
            Err(err) => return Err(err),
        };

        let sampled = rect
            .quantize()
            .ok_or(NormalizeError::InvalidDimensions {
                expected,
                actual: 0,
            })?;
        Ok(RegionStage {
            ink_bounds: bounds,
            rect,
            sampled,
            fallback_full_canvas,
        })
    }
}

impl<C: Classifier> DigitRecognizer<C> {
    /// Recognize `canvas` and push the scores to `sink`.
    pub fn recognize<S: ScoreSink>(
        &mut self,
        canvas: &ImageRgba<'_>,
        sink: &mut S,
    ) -> NormalizeResult<RecognitionOutcome> {
        self.recognize_with_report(canvas, sink)
            .map(|report| report.outcome)
    }

    /// Like [`recognize`](Self::recognize) and also return a report of the
    /// request.
    ///
    /// Empty canvases (under `Skip`) reset the sink to zeros and return
    /// [`RecognitionOutcome::Empty`] without touching the classifier. Any
    /// other error aborts the request before the classifier or the sink are
    /// called; this includes a grid whose size differs from the classifier's
    /// [`input_size`](Classifier::input_size).
    pub fn recognize_with_report<S: ScoreSink>(
        &mut self,
        canvas: &ImageRgba<'_>,
        sink: &mut S,
    ) -> NormalizeResult<RecognitionReport> {
        let start = Instant::now();
        let mut timings = TimingBreakdown::default();
        let input = InputDescriptor {
            width: canvas.w,
            height: canvas.h,
            target_size: self.params.target_size,
            convention: self.params.convention,
            crop: self.params.crop,
        };

        let model_input = self.classifier.input_size();
        let produced = input_len(self.params.target_size)?;
        if produced != model_input {
            return Err(NormalizeError::InvalidDimensions {
                expected: model_input,
                actual: produced,
            });
        }

        let prepared = match self.prepare_timed(canvas, &mut timings) {
            Ok(prepared) => prepared,
            Err(NormalizeError::EmptyCanvas) => {
                warn!("recognize: canvas has no ink, skipping inference");
                sink.show(&DigitScores::zeros());
                timings.total_ms = elapsed_ms(start);
                return Ok(RecognitionReport {
                    input,
                    outcome: RecognitionOutcome::Empty,
                    region: None,
                    scores: None,
                    best_digit: None,
                    timings,
                });
            }
            Err(err) => return Err(err),
        };

        let infer_start = Instant::now();
        let raw = self.classifier.infer(prepared.image.as_slice());
        timings.push_since("infer", infer_start);
        let scores = DigitScores::from_vec(raw)?;
        sink.show(&scores);

        let best_digit = scores.best();
        timings.total_ms = elapsed_ms(start);
        debug!(
            "recognize: best={:?} total_ms={:.3}",
            best_digit, timings.total_ms
        );
        Ok(RecognitionReport {
            input,
            outcome: RecognitionOutcome::Recognized,
            region: Some(prepared.region),
            scores: Some(scores),
            best_digit,
            timings,
        })
    }
}
