use digit_canvas::image::{Rgba, RgbaBuffer};
use digit_canvas::{DigitRecognizer, DigitScores, InkConvention, RecognizerParams};

fn main() {
    env_logger::init();

    // Demo stub: draws a vertical bar on a white 280x280 canvas and runs the
    // recognizer with a classifier that scores ink coverage.
    let (w, h) = (280usize, 280usize);
    let mut canvas = RgbaBuffer::new(w, h, Rgba::WHITE);
    for y in 60..220 {
        for x in 130..150 {
            canvas.set(x, y, Rgba::BLACK);
        }
    }

    let classifier = |image: &[f64]| {
        let coverage = image.iter().filter(|&&v| v > 0.0).count() as f64 / image.len() as f64;
        let mut scores = vec![0.0; 10];
        scores[1] = coverage;
        scores
    };
    let params = RecognizerParams::default().with_convention(InkConvention::WhiteBackground);
    let mut recognizer = DigitRecognizer::new(params, classifier);

    let mut display = |scores: &DigitScores| {
        let bars: Vec<String> = scores
            .clamped()
            .as_slice()
            .iter()
            .map(|v| format!("{v:.2}"))
            .collect();
        println!("scores=[{}]", bars.join(", "));
    };

    match recognizer.recognize_with_report(&canvas.as_view(), &mut display) {
        Ok(report) => println!(
            "outcome={:?} best={:?} latency_ms={:.3}",
            report.outcome, report.best_digit, report.timings.total_ms
        ),
        Err(err) => eprintln!("Error: {err}"),
    }
}
