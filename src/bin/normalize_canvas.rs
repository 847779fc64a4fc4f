use digit_canvas::config::normalize::load_config;
use digit_canvas::diagnostics::RegionStage;
use digit_canvas::image::io::{load_rgba_image, save_normalized_png, save_rgba_png, write_json_file};
use digit_canvas::image::ImageView;
use digit_canvas::{DigitRecognizer, InkConvention};
use serde::Serialize;
use std::env;
use std::path::Path;
use std::time::Instant;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let canvas = load_rgba_image(&config.input)?;
    let params = config.params.clone();
    let mut recognizer = DigitRecognizer::new(params.clone(), ());

    let start = Instant::now();
    let prepared = recognizer
        .prepare(&canvas.as_view())
        .map_err(|e| format!("Failed to normalize {}: {e}", config.input.display()))?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    let image = &prepared.image;
    let ink_pixels = image.as_slice().iter().filter(|&&v| v > -1.0).count();
    let summary = NormalizeSummary {
        width: canvas.width(),
        height: canvas.height(),
        target_size: image.size(),
        convention: params.convention,
        elapsed_ms,
        region: prepared.region.clone(),
        ink_pixels,
        values: image.as_slice().to_vec(),
    };

    println!(
        "Normalized {}x{} canvas to {}x{} in {:.3} ms ({} non-background cells)",
        summary.width, summary.height, summary.target_size, summary.target_size, elapsed_ms, ink_pixels
    );
    let rect = &summary.region.rect;
    println!(
        "  region: x={:.2} y={:.2} edge={:.2} (sampled {}x{} at {},{})",
        rect.x,
        rect.y,
        rect.width,
        summary.region.sampled.width,
        summary.region.sampled.height,
        summary.region.sampled.x0,
        summary.region.sampled.y0
    );

    if let Some(path) = &config.output.normalized_image {
        save_normalized_png(image, path)?;
        println!("Saved normalized image to {}", path.display());
    }
    if let Some(path) = &config.output.scratch_image {
        save_rgba_png(recognizer.scratch().pixels(), path)?;
        println!("Saved scratch surface to {}", path.display());
    }
    if let Some(path) = &config.output.report_json {
        write_json_file(path, &summary)?;
        println!("Saved report to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: normalize_canvas <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NormalizeSummary {
    width: usize,
    height: usize,
    target_size: usize,
    convention: InkConvention,
    elapsed_ms: f64,
    region: RegionStage,
    ink_pixels: usize,
    values: Vec<f64>,
}
