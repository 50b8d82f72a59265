//! End-to-end flag analysis
//!
//! country name → flag image → dominant colors → blended color → artifacts,
//! with the location lookup running off to the side. Only the flag half can
//! fail the run.

use crate::color::{blend_palette, ColorAnalyzer, ColorConverter, ColorPalette, ColorResult};
use crate::config::PipelineConfig;
use crate::country::Country;
use crate::fetch::{get_flag_image, FileFlagSource, FlagCdnSource, FlagSource};
use crate::locator::{Coordinates, Geocoder, Locator, MapView, NominatimGeocoder};
use crate::render::{render_blended_color_sized, render_color_bar_sized};
use crate::Result;
use image::RgbImage;
use serde::Serialize;
use tracing::{debug, info};

/// Everything produced for one country
#[derive(Debug, Clone, Serialize)]
pub struct FlagReport {
    /// Input as typed
    pub query: String,
    /// Resolved country
    pub country: &'static Country,
    /// Dominant colors, largest share first
    pub palette: ColorPalette,
    /// Proportion-weighted average color
    pub blended: ColorResult,
    /// ΔE76 between the blended color and the dominant color
    pub dominant_delta_e: f32,
    /// Geocoded position, when found
    pub location: Option<Coordinates>,
    #[serde(skip)]
    pub flag: RgbImage,
    #[serde(skip)]
    pub color_bar: RgbImage,
    #[serde(skip)]
    pub blended_swatch: RgbImage,
    #[serde(skip)]
    pub map: Option<MapView>,
}

/// Flag source and geocoder bound to a configuration
pub struct FlagPipeline<F: FlagSource, G: Geocoder> {
    config: PipelineConfig,
    flags: F,
    locator: Option<Locator<G>>,
    analyzer: ColorAnalyzer,
}

/// Pipeline wired to the configured network or file providers
pub type DefaultPipeline = FlagPipeline<Box<dyn FlagSource>, NominatimGeocoder>;

impl<F: FlagSource, G: Geocoder> FlagPipeline<F, G> {
    /// Build a pipeline from explicit providers
    ///
    /// The geocoder is ignored when `config.locator.enabled` is false.
    pub fn new(config: PipelineConfig, flags: F, geocoder: G) -> Result<Self> {
        config.validate()?;
        let locator = config
            .locator
            .enabled
            .then(|| Locator::new(geocoder).with_zoom(config.locator.zoom_start));
        let analyzer = ColorAnalyzer::new(config.analysis.clone());

        Ok(Self {
            config,
            flags,
            locator,
            analyzer,
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Analyze one country
    ///
    /// # Errors
    ///
    /// Fails when the country is unknown, the flag cannot be fetched or
    /// decoded, or clustering fails. Location problems only leave
    /// `location` and `map` empty.
    pub fn run(&self, country_name: &str) -> Result<FlagReport> {
        let (country, flag) = get_flag_image(&self.flags, country_name)?;

        let palette = self.analyzer.analyze(&flag)?;
        let blended = blend_palette(&palette)?;
        let converter = ColorConverter::new();
        let dominant_delta_e = palette
            .dominant()
            .map(|c| converter.delta_e(converter.srgb_to_lab(c.srgb), blended.lab))
            .unwrap_or_default();
        info!(
            country = country.name,
            colors = palette.len(),
            blended = %blended.hex,
            delta_e = dominant_delta_e,
            "analyzed flag"
        );

        let render = &self.config.render;
        let color_bar = render_color_bar_sized(&palette, render.bar_width, render.bar_height);
        let blended_swatch =
            render_blended_color_sized(&blended, render.swatch_width, render.swatch_height);

        let map = match &self.locator {
            Some(locator) => locator.render_country_map(country_name),
            None => {
                debug!("locator disabled");
                None
            }
        };

        Ok(FlagReport {
            query: country_name.to_string(),
            country,
            palette,
            blended,
            dominant_delta_e,
            location: map.as_ref().map(|m| m.center),
            flag,
            color_bar,
            blended_swatch,
            map,
        })
    }
}

impl DefaultPipeline {
    /// Flag CDN (or `flag_source.local_dir`) plus Nominatim
    pub fn from_config(config: PipelineConfig) -> Result<Self> {
        let flags: Box<dyn FlagSource> = match &config.flag_source.local_dir {
            Some(dir) => Box::new(FileFlagSource::new(dir.clone())),
            None => Box::new(FlagCdnSource::new(&config.flag_source)?),
        };
        let geocoder = NominatimGeocoder::new(&config.locator)?;
        Self::new(config, flags, geocoder)
    }
}
