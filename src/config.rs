//! Configuration structures for the flag_colors pipeline.
//!
//! This module defines all tunable parameters, grouped by pipeline stage.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use flag_colors::PipelineConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = PipelineConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use defaults
//! let config = PipelineConfig::default();
//! # Ok::<(), flag_colors::AnalysisError>(())
//! ```
//!
//! # Configuration Sections
//!
//! - [`FlagSourceConfig`]: where flag images come from
//! - [`AnalysisConfig`]: resize and k-means parameters
//! - [`RenderConfig`]: artifact dimensions
//! - [`LocatorConfig`]: geocoder endpoint and map settings

use crate::constants::{analysis, flags, locator, network, render};
use crate::error::{AnalysisError, Result};
use image::imageops::FilterType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Complete pipeline configuration.
///
/// Serializable to/from JSON so a run can be reproduced exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Output directory for artifacts
    pub output_path: PathBuf,

    /// Flag image source
    pub flag_source: FlagSourceConfig,

    /// Color analysis
    pub analysis: AnalysisConfig,

    /// Artifact rendering
    pub render: RenderConfig,

    /// Geocoding and map output
    pub locator: LocatorConfig,
}

/// Flag image source.
///
/// When `local_dir` is set, flags are read from `<local_dir>/<code>.png`
/// instead of being downloaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlagSourceConfig {
    /// URL template; `{code}` is replaced by the lowercase alpha-2 code
    pub url_template: String,

    /// Offline flag directory
    #[serde(default)]
    pub local_dir: Option<PathBuf>,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

/// Resampling filter applied before clustering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeFilter {
    Nearest,
    Triangle,
    Bicubic,
    Gaussian,
    Lanczos3,
}

impl From<ResizeFilter> for FilterType {
    fn from(filter: ResizeFilter) -> Self {
        match filter {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::Bicubic => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Color clustering parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Number of clusters (1-255)
    pub n_colors: usize,

    /// Resize target width; aspect ratio is not preserved
    pub resize_width: u32,

    /// Resize target height
    pub resize_height: u32,

    /// Resampling filter
    pub filter: ResizeFilter,

    /// k-means++ seed
    pub seed: u64,

    /// Maximum iterations per run
    pub max_iterations: usize,

    /// Convergence threshold
    pub convergence: f32,

    /// Number of restarts with consecutive seeds
    #[serde(default = "default_runs")]
    pub runs: usize,
}

fn default_runs() -> usize {
    analysis::RUNS
}

/// Artifact dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    pub bar_width: u32,
    pub bar_height: u32,
    pub swatch_width: u32,
    pub swatch_height: u32,
}

/// Geocoding and map parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocatorConfig {
    /// Skip geocoding entirely
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Nominatim-compatible endpoint
    pub endpoint: String,

    /// User agent sent to the geocoder
    pub user_agent: String,

    /// Initial map zoom
    pub zoom_start: u8,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

fn default_enabled() -> bool {
    true
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("flag_output"),
            flag_source: FlagSourceConfig {
                url_template: flags::FLAG_CDN_URL_TEMPLATE.to_string(),
                local_dir: None,
                timeout_secs: network::REQUEST_TIMEOUT.as_secs(),
            },
            analysis: AnalysisConfig {
                n_colors: analysis::N_COLORS,
                resize_width: analysis::RESIZE_WIDTH,
                resize_height: analysis::RESIZE_HEIGHT,
                filter: ResizeFilter::Bicubic,
                seed: analysis::SEED,
                max_iterations: analysis::MAX_ITERATIONS,
                convergence: analysis::CONVERGENCE,
                runs: analysis::RUNS,
            },
            render: RenderConfig {
                bar_width: render::BAR_WIDTH,
                bar_height: render::BAR_HEIGHT,
                swatch_width: render::SWATCH_WIDTH,
                swatch_height: render::SWATCH_HEIGHT,
            },
            locator: LocatorConfig {
                enabled: true,
                endpoint: locator::NOMINATIM_URL.to_string(),
                user_agent: locator::USER_AGENT.to_string(),
                zoom_start: locator::ZOOM_START,
                timeout_secs: network::REQUEST_TIMEOUT.as_secs(),
            },
        }
    }
}

impl FlagSourceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl AnalysisConfig {
    /// Reject cluster counts and grids k-means cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.n_colors == 0 || self.n_colors > analysis::MAX_CLUSTERS {
            return Err(AnalysisError::invalid("analysis.n_colors", self.n_colors));
        }
        if self.resize_width == 0 || self.resize_height == 0 {
            return Err(AnalysisError::invalid(
                "analysis.resize",
                format!("{}x{}", self.resize_width, self.resize_height),
            ));
        }
        let pixel_count = (self.resize_width as usize) * (self.resize_height as usize);
        if pixel_count < self.n_colors {
            return Err(AnalysisError::invalid(
                "analysis.n_colors",
                format!("{} (only {} pixels)", self.n_colors, pixel_count),
            ));
        }
        if self.max_iterations == 0 {
            return Err(AnalysisError::invalid("analysis.max_iterations", 0));
        }
        if self.runs == 0 {
            return Err(AnalysisError::invalid("analysis.runs", 0));
        }
        if !(self.convergence.is_finite() && self.convergence >= 0.0) {
            return Err(AnalysisError::invalid("analysis.convergence", self.convergence));
        }
        Ok(())
    }
}

impl LocatorConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl PipelineConfig {
    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AnalysisError::io(format!("Failed to read {}", path.display()), e))?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            AnalysisError::config(format!("Invalid JSON in {}", path.display()), e)
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AnalysisError::config("Failed to serialize configuration", e))?;
        std::fs::write(path, json)
            .map_err(|e| AnalysisError::io(format!("Failed to write {}", path.display()), e))?;
        Ok(())
    }

    /// Reject values the pipeline cannot run with
    pub fn validate(&self) -> Result<()> {
        self.analysis.validate()?;

        let r = &self.render;
        if r.bar_width == 0 || r.bar_height == 0 {
            return Err(AnalysisError::invalid(
                "render.bar",
                format!("{}x{}", r.bar_width, r.bar_height),
            ));
        }
        if r.swatch_width == 0 || r.swatch_height == 0 {
            return Err(AnalysisError::invalid(
                "render.swatch",
                format!("{}x{}", r.swatch_width, r.swatch_height),
            ));
        }

        if !self
            .flag_source
            .url_template
            .contains(flags::CODE_PLACEHOLDER)
        {
            return Err(AnalysisError::invalid(
                "flag_source.url_template",
                &self.flag_source.url_template,
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = PipelineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.analysis.n_colors, 5);
        assert_eq!(config.analysis.seed, 42);
        assert_eq!(config.locator.zoom_start, 4);
    }

    #[test]
    fn test_json_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = PipelineConfig::default();
        config.analysis.n_colors = 3;
        config.flag_source.local_dir = Some(PathBuf::from("flags"));
        config.to_json_file(&path).unwrap();

        let loaded = PipelineConfig::from_json_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_optional_fields_use_defaults() {
        let mut value = serde_json::to_value(PipelineConfig::default()).unwrap();
        value["analysis"].as_object_mut().unwrap().remove("runs");
        value["locator"].as_object_mut().unwrap().remove("enabled");

        let config: PipelineConfig = serde_json::from_value(value).unwrap();
        assert_eq!(config.analysis.runs, 1);
        assert!(config.locator.enabled);
    }

    #[test]
    fn test_rejects_zero_clusters() {
        let mut config = PipelineConfig::default();
        config.analysis.n_colors = 0;
        assert!(matches!(
            config.validate(),
            Err(AnalysisError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_rejects_more_clusters_than_pixels() {
        let mut config = PipelineConfig::default();
        config.analysis.resize_width = 2;
        config.analysis.resize_height = 2;
        config.analysis.n_colors = 5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_analysis_section_validates_alone() {
        let mut analysis = PipelineConfig::default().analysis;
        assert!(analysis.validate().is_ok());

        analysis.runs = 0;
        assert!(analysis.validate().is_err());
        analysis.runs = 1;
        analysis.convergence = f32::NAN;
        assert!(analysis.validate().is_err());
    }

    #[test]
    fn test_rejects_template_without_placeholder() {
        let mut config = PipelineConfig::default();
        config.flag_source.url_template = "https://example.com/flag.png".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            PipelineConfig::from_json_file(&path),
            Err(AnalysisError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_filter_mapping() {
        assert!(matches!(
            FilterType::from(ResizeFilter::Bicubic),
            FilterType::CatmullRom
        ));
        assert!(matches!(
            FilterType::from(ResizeFilter::Nearest),
            FilterType::Nearest
        ));
    }
}
