//! Artifact writer
//!
//! Lays out one [`FlagReport`] as files in a directory:
//! `flag.png`, `color_bar.png`, `blended.png`, `map.html` (when the country
//! was located) and `report.json`.

use crate::pipeline::FlagReport;
use crate::{AnalysisError, Result};
use image::RgbImage;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const FLAG_FILE: &str = "flag.png";
pub const COLOR_BAR_FILE: &str = "color_bar.png";
pub const BLENDED_FILE: &str = "blended.png";
pub const MAP_FILE: &str = "map.html";
pub const REPORT_FILE: &str = "report.json";

/// Write every artifact of `report` into `dir`, creating it if needed
///
/// Returns the paths written, in the order above.
pub fn save_artifacts(report: &FlagReport, dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .map_err(|e| AnalysisError::io(format!("Failed to create {}", dir.display()), e))?;

    let mut written = Vec::new();

    for (name, img) in [
        (FLAG_FILE, &report.flag),
        (COLOR_BAR_FILE, &report.color_bar),
        (BLENDED_FILE, &report.blended_swatch),
    ] {
        written.push(save_png(img, &dir.join(name))?);
    }

    if let Some(map) = &report.map {
        let path = dir.join(MAP_FILE);
        write_file(&path, map.to_html().as_bytes())?;
        written.push(path);
    }

    let json = serde_json::to_string_pretty(report)
        .map_err(|e| AnalysisError::render("Failed to serialize report", e))?;
    let path = dir.join(REPORT_FILE);
    write_file(&path, json.as_bytes())?;
    written.push(path);

    Ok(written)
}

fn save_png(img: &RgbImage, path: &Path) -> Result<PathBuf> {
    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| AnalysisError::render(format!("Failed to write {}", path.display()), e))?;
    debug!(path = %path.display(), "saved image");
    Ok(path.to_path_buf())
}

fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    fs::write(path, contents)
        .map_err(|e| AnalysisError::io(format!("Failed to write {}", path.display()), e))?;
    debug!(path = %path.display(), "saved file");
    Ok(())
}
