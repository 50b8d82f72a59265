//! Country location lookup
//!
//! Geocodes the country name as typed and builds a [`MapView`] with one
//! marker. Failures here never abort the pipeline; they are logged and the
//! map is simply absent.

mod geocode;
mod map;

pub use geocode::{Coordinates, Geocoder, NominatimGeocoder};
pub use map::{MapView, Marker};

use crate::constants::locator::ZOOM_START;
use crate::{AnalysisError, Result};
use tracing::{debug, warn};

/// Geocoder plus map settings
pub struct Locator<G: Geocoder> {
    geocoder: G,
    zoom_start: u8,
}

impl<G: Geocoder> Locator<G> {
    pub fn new(geocoder: G) -> Self {
        Self {
            geocoder,
            zoom_start: ZOOM_START,
        }
    }

    pub fn with_zoom(mut self, zoom_start: u8) -> Self {
        self.zoom_start = zoom_start;
        self
    }

    /// Coordinates for a place name, or an error describing why not
    pub fn locate(&self, country_name: &str) -> Result<Coordinates> {
        let query = country_name.trim();
        if query.is_empty() {
            return Err(AnalysisError::LocationNotFound {
                query: country_name.to_string(),
            });
        }

        self.geocoder
            .geocode(query)?
            .ok_or_else(|| AnalysisError::LocationNotFound {
                query: query.to_string(),
            })
    }

    /// Coordinates for a place name; any failure is logged and yields `None`
    pub fn get_country_center_latlon(&self, country_name: &str) -> Option<Coordinates> {
        match self.locate(country_name) {
            Ok(coords) => Some(coords),
            Err(e) => {
                warn!(country = country_name, error = %e, "could not locate country");
                None
            }
        }
    }

    /// Map centered on the country with a marker labelled as typed
    pub fn render_country_map(&self, country_name: &str) -> Option<MapView> {
        let coords = self.get_country_center_latlon(country_name)?;
        debug!(
            latitude = coords.latitude,
            longitude = coords.longitude,
            zoom = self.zoom_start,
            "building map"
        );
        Some(MapView::new(coords, self.zoom_start).with_marker(coords, country_name))
    }
}
