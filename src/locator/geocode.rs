//! Geocoding providers

use crate::config::LocatorConfig;
use crate::{AnalysisError, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// WGS84 position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Resolves a free-form place name to coordinates
pub trait Geocoder {
    /// `Ok(None)` means the provider answered but knows no such place
    fn geocode(&self, query: &str) -> Result<Option<Coordinates>>;
}

impl<G: Geocoder + ?Sized> Geocoder for &G {
    fn geocode(&self, query: &str) -> Result<Option<Coordinates>> {
        (**self).geocode(query)
    }
}

/// Nominatim (OpenStreetMap) search API client
pub struct NominatimGeocoder {
    client: Client,
    endpoint: String,
}

/// One entry of a Nominatim `format=json` search response
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: Option<String>,
}

impl NominatimGeocoder {
    pub fn new(config: &LocatorConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .build()
            .map_err(|e| AnalysisError::geocode("Failed to build HTTP client", e))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
        })
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.endpoint)
    }
}

impl Geocoder for NominatimGeocoder {
    fn geocode(&self, query: &str) -> Result<Option<Coordinates>> {
        let url = self.search_url();
        debug!(%url, query, "geocoding");

        let places: Vec<NominatimPlace> = self
            .client
            .get(&url)
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| AnalysisError::geocode(format!("Request to {} failed", url), e))?
            .json()
            .map_err(|e| AnalysisError::geocode("Malformed geocoder response", e))?;

        places.into_iter().next().map(parse_place).transpose()
    }
}

fn parse_place(place: NominatimPlace) -> Result<Coordinates> {
    let latitude: f64 = place
        .lat
        .trim()
        .parse()
        .map_err(|e| AnalysisError::geocode(format!("Invalid latitude '{}'", place.lat), e))?;
    let longitude: f64 = place
        .lon
        .trim()
        .parse()
        .map_err(|e| AnalysisError::geocode(format!("Invalid longitude '{}'", place.lon), e))?;

    let coords = Coordinates::new(latitude, longitude);
    if !coords.is_valid() {
        return Err(AnalysisError::GeocodeError {
            message: format!("Coordinates out of range: {}, {}", latitude, longitude),
            source: None,
        });
    }

    debug!(
        latitude,
        longitude,
        place = place.display_name.as_deref().unwrap_or(""),
        "geocoded"
    );
    Ok(coords)
}
