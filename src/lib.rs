//! # Flag Colors
//!
//! A Rust crate for extracting the colors of national flags.
//!
//! Given a country name, this library:
//! - Resolves the name to an ISO 3166-1 country and fetches its flag
//! - Clusters the flag's pixels into dominant colors with their proportions
//! - Blends those colors into one representative color
//! - Renders a proportional color bar and a blended-color swatch
//! - Locates the country and builds a map with a marker
//!
//! ## Example
//!
//! ```rust,no_run
//! use flag_colors::{analyze_country, PipelineConfig};
//!
//! let report = analyze_country("France", &PipelineConfig::default())?;
//! println!("Blended: {} from {} colors", report.blended.hex, report.palette.len());
//! # Ok::<(), flag_colors::AnalysisError>(())
//! ```

pub mod color;
pub mod config;
pub mod constants;
pub mod country;
pub mod error;
pub mod fetch;
pub mod image_loader;
pub mod locator;
pub mod output;
pub mod pipeline;
pub mod render;

pub use color::{
    analyze_flag_color, blend_colors, ColorAnalyzer, ColorPalette, ColorResult, DominantColor,
};
pub use config::PipelineConfig;
pub use country::{search_fuzzy, Country};
pub use error::{AnalysisError, Result};
pub use fetch::{get_flag_image, FileFlagSource, FlagCdnSource, FlagSource};
pub use locator::{Coordinates, Geocoder, Locator, MapView, NominatimGeocoder};
pub use output::save_artifacts;
pub use pipeline::{DefaultPipeline, FlagPipeline, FlagReport};
pub use render::{render_blended_color, render_color_bar};

/// Analyze a country's flag with the configured providers
///
/// This is the main entry point. It fetches the flag (from the CDN, or from
/// `flag_source.local_dir` when set), extracts and blends its colors,
/// renders the artifacts and, unless disabled, geocodes the country.
///
/// # Errors
///
/// Returns `AnalysisError` if:
/// - The configuration is invalid
/// - No country matches `country_name`
/// - The flag cannot be downloaded or decoded
/// - Clustering fails
///
/// A failed location lookup is not an error; the report's `map` is `None`.
pub fn analyze_country(country_name: &str, config: &PipelineConfig) -> Result<FlagReport> {
    DefaultPipeline::from_config(config.clone())?.run(country_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_country_fails_before_network() {
        let mut config = PipelineConfig::default();
        config.flag_source.local_dir = Some(std::env::temp_dir());
        config.locator.enabled = false;

        assert!(matches!(
            analyze_country("Middle-earth", &config),
            Err(AnalysisError::CountryNotFound { .. })
        ));
    }
}
