use super::FlagSource;
use crate::config::FlagSourceConfig;
use crate::constants::flags::CODE_PLACEHOLDER;
use crate::country::Country;
use crate::image_loader::decode_bytes;
use crate::{AnalysisError, Result};
use image::RgbImage;
use reqwest::blocking::Client;
use tracing::debug;

/// Downloads flags from a URL template such as `https://flagcdn.com/w320/{code}.png`
pub struct FlagCdnSource {
    client: Client,
    url_template: String,
}

impl FlagCdnSource {
    pub fn new(config: &FlagSourceConfig) -> Result<Self> {
        if !config.url_template.contains(CODE_PLACEHOLDER) {
            return Err(AnalysisError::invalid(
                "flag_source.url_template",
                &config.url_template,
            ));
        }

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AnalysisError::flag_fetch("Failed to build HTTP client", e))?;

        Ok(Self {
            client,
            url_template: config.url_template.clone(),
        })
    }

    pub fn flag_url(&self, country: &Country) -> String {
        self.url_template
            .replace(CODE_PLACEHOLDER, &country.flag_code())
    }
}

impl FlagSource for FlagCdnSource {
    fn fetch(&self, country: &Country) -> Result<RgbImage> {
        let url = self.flag_url(country);
        debug!(%url, "downloading flag");

        let response = self
            .client
            .get(&url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| AnalysisError::flag_fetch(format!("GET {} failed", url), e))?;

        let bytes = response
            .bytes()
            .map_err(|e| AnalysisError::flag_fetch(format!("Reading {} failed", url), e))?;
        debug!(%url, bytes = bytes.len(), "flag downloaded");

        decode_bytes(&bytes)
    }
}
