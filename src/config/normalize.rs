//! Runtime configuration of the `normalize_canvas` tool.
use crate::recognizer::RecognizerParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct NormalizeToolConfig {
    /// Canvas snapshot (PNG/JPEG) to normalize.
    pub input: PathBuf,
    #[serde(default)]
    pub params: RecognizerParams,
    pub output: NormalizeOutputConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct NormalizeOutputConfig {
    /// Grayscale preview of the normalized grid.
    pub normalized_image: Option<PathBuf>,
    /// Resampled RGBA grid as drawn on the scratch surface.
    pub scratch_image: Option<PathBuf>,
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<NormalizeToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(data: &str) -> Result<NormalizeToolConfig, serde_json::Error> {
    serde_json::from_str(data)
}
