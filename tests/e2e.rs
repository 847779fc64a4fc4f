mod common;

use common::synthetic_canvas::canvas_with_block;
use digit_canvas::image::{Rgba, RgbaBuffer};
use digit_canvas::{
    extract_padded_square_with, normalize, DigitRecognizer, DigitScores, InkConvention,
    NormalizeError, RecognitionOutcome, RecognizerParams, ScratchSurface, TARGET_SIZE,
};
use std::cell::RefCell;

fn black_square_canvas() -> RgbaBuffer {
    canvas_with_block(280, 280, Rgba::WHITE, Rgba::BLACK, (100, 100), (150, 150))
}

#[test]
fn black_square_is_cropped_and_centred() {
    let canvas = black_square_canvas();
    let square =
        extract_padded_square_with(&canvas.as_view(), InkConvention::WhiteBackground, 1.1)
            .expect("canvas has ink");

    assert!(square.is_square());
    assert!(
        (square.width - 55.0).abs() < 0.5,
        "edge should be about 50 * 1.1, got {}",
        square.width
    );
    let [cx, cy] = square.center();
    assert!(
        (cx - 125.0).abs() < 1.0 && (cy - 125.0).abs() < 1.0,
        "square should be centred near (125, 125), got ({cx}, {cy})"
    );

    let image = normalize(
        &canvas.as_view(),
        square,
        TARGET_SIZE,
        InkConvention::WhiteBackground,
        &mut ScratchSurface::new(),
    )
    .expect("normalization succeeds");
    assert_eq!(image.len(), TARGET_SIZE * TARGET_SIZE);

    for (x, y) in [(13, 13), (14, 14), (13, 14), (14, 13), (10, 17)] {
        let v = image.get(x, y);
        assert!(v > 0.95, "centre pixel ({x}, {y}) should be ink, got {v}");
    }
    let last = TARGET_SIZE - 1;
    for (x, y) in [(0, 0), (last, 0), (0, last), (last, last)] {
        let v = image.get(x, y);
        assert!(v < -0.95, "corner pixel ({x}, {y}) should be background, got {v}");
    }
}

#[test]
fn recognizer_feeds_classifier_exact_model_input() {
    let canvas = black_square_canvas();
    let seen: RefCell<Vec<f64>> = RefCell::new(Vec::new());
    let classifier = |image: &[f64]| {
        *seen.borrow_mut() = image.to_vec();
        let mut scores = vec![0.01; 10];
        scores[0] = 0.8;
        scores
    };
    let params = RecognizerParams::default().with_convention(InkConvention::WhiteBackground);
    let mut recognizer = DigitRecognizer::new(params, classifier);

    let mut shown = Vec::new();
    let mut display = |scores: &DigitScores| shown.push(*scores);
    let report = recognizer
        .recognize_with_report(&canvas.as_view(), &mut display)
        .expect("recognition succeeds");

    assert_eq!(report.outcome, RecognitionOutcome::Recognized);
    assert_eq!(report.best_digit, Some(0));
    assert_eq!(shown.len(), 1);

    let input = seen.borrow();
    assert_eq!(input.len(), TARGET_SIZE * TARGET_SIZE);
    assert!(input.iter().all(|v| (-1.0..=1.0).contains(v)));
    assert!(input[14 * TARGET_SIZE + 14] > 0.95);
    assert!(input[0] < -0.95);
}

#[test]
fn conventions_agree_on_equivalent_drawings() {
    // same stroke drawn on a transparent and on a white surface
    let transparent = canvas_with_block(
        200,
        200,
        Rgba::TRANSPARENT,
        Rgba::BLACK,
        (40, 70),
        (90, 160),
    );
    let white = canvas_with_block(200, 200, Rgba::WHITE, Rgba::BLACK, (40, 70), (90, 160));

    let mut a = DigitRecognizer::new(RecognizerParams::default(), ());
    let mut b = DigitRecognizer::new(
        RecognizerParams::default().with_convention(InkConvention::WhiteBackground),
        (),
    );
    let pa = a.prepare(&transparent.as_view()).unwrap();
    let pb = b.prepare(&white.as_view()).unwrap();
    assert_eq!(pa.region.ink_bounds, pb.region.ink_bounds);
    // rounding of the resampled channel may differ by one step
    let step = 1.0 / 127.5 + 1e-9;
    for (va, vb) in pa.image.as_slice().iter().zip(pb.image.as_slice()) {
        assert!((va - vb).abs() <= step, "{va} vs {vb}");
    }
}

#[test]
fn blank_canvas_never_reaches_classifier() {
    let calls = RefCell::new(0usize);
    let classifier = |_: &[f64]| {
        *calls.borrow_mut() += 1;
        vec![0.0; 10]
    };
    let params = RecognizerParams::default().with_convention(InkConvention::WhiteBackground);
    let mut recognizer = DigitRecognizer::new(params, classifier);

    let canvas = RgbaBuffer::new(280, 280, Rgba::WHITE);
    let mut shown = Vec::new();
    let mut display = |scores: &DigitScores| shown.push(*scores);
    let outcome = recognizer
        .recognize(&canvas.as_view(), &mut display)
        .expect("empty canvas is not an error");

    assert_eq!(outcome, RecognitionOutcome::Empty);
    assert_eq!(*calls.borrow(), 0);
    assert_eq!(shown, vec![DigitScores::zeros()]);
}

#[test]
fn oversized_padding_still_produces_model_input() {
    let canvas = black_square_canvas();
    let params = RecognizerParams::default()
        .with_convention(InkConvention::WhiteBackground)
        .with_padding_ratio(200.0);
    let mut recognizer = DigitRecognizer::new(params, ());
    let prepared = recognizer.prepare(&canvas.as_view()).expect("canvas has ink");

    assert_eq!(prepared.region.sampled.width, 10_000);
    assert_eq!(prepared.image.len(), TARGET_SIZE * TARGET_SIZE);
    assert!(prepared.image.as_slice().iter().all(|v| (-1.0..=1.0).contains(v)));
    // the block shrinks to a faint smudge in the middle of the grid
    assert!(prepared.image.get(14, 14) > -1.0);
    assert_eq!(prepared.image.get(0, 0), -1.0);
}

#[test]
fn unrepresentable_padding_is_rejected_without_inference() {
    let canvas = black_square_canvas();
    let calls = RefCell::new(0usize);
    let classifier = |_: &[f64]| {
        *calls.borrow_mut() += 1;
        vec![0.0; 10]
    };
    let params = RecognizerParams::default()
        .with_convention(InkConvention::WhiteBackground)
        .with_padding_ratio(1e30);
    let mut recognizer = DigitRecognizer::new(params, classifier);
    let mut shown = Vec::new();
    let mut display = |scores: &DigitScores| shown.push(*scores);

    let err = recognizer
        .recognize(&canvas.as_view(), &mut display)
        .unwrap_err();
    assert!(
        matches!(err, NormalizeError::InvalidDimensions { .. }),
        "unexpected error {err:?}"
    );
    assert_eq!(*calls.borrow(), 0);
    assert!(shown.is_empty());
}
