//! Default parameters and provider endpoints
//!
//! Compile-time defaults for every stage of the pipeline. The runtime
//! values live in [`crate::config::PipelineConfig`], which starts from these.

/// Flag image provider
pub mod flags {
    /// URL template for flag images; `{code}` is the lowercase ISO alpha-2 code
    pub const FLAG_CDN_URL_TEMPLATE: &str = "https://flagcdn.com/w320/{code}.png";

    /// Placeholder substituted in [`FLAG_CDN_URL_TEMPLATE`]
    pub const CODE_PLACEHOLDER: &str = "{code}";
}

/// Color clustering parameters
pub mod analysis {
    /// Number of dominant colors extracted from a flag
    pub const N_COLORS: usize = 5;

    /// Flags are resampled to this size before clustering
    pub const RESIZE_WIDTH: u32 = 100;
    pub const RESIZE_HEIGHT: u32 = 100;

    /// Seed for k-means++ initialization
    pub const SEED: u64 = 42;

    /// Upper bound on k-means iterations per run
    pub const MAX_ITERATIONS: usize = 300;

    /// Convergence threshold on centroid movement (sRGB units, 0..1)
    pub const CONVERGENCE: f32 = 1e-4;

    /// Number of k-means restarts; the lowest score wins
    pub const RUNS: usize = 1;

    /// Cluster indices are stored as `u8`
    pub const MAX_CLUSTERS: usize = u8::MAX as usize;
}

/// Artifact dimensions
pub mod render {
    /// Proportional color bar
    pub const BAR_WIDTH: u32 = 300;
    pub const BAR_HEIGHT: u32 = 50;

    /// Blended color swatch
    pub const SWATCH_WIDTH: u32 = 300;
    pub const SWATCH_HEIGHT: u32 = 100;
}

/// Geocoding and map parameters
pub mod locator {
    /// Nominatim search endpoint
    pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

    /// Nominatim's usage policy requires an identifying user agent
    pub const USER_AGENT: &str = "flag-locator";

    /// Initial map zoom level
    pub const ZOOM_START: u8 = 4;

    /// Map viewport in pixels
    pub const MAP_WIDTH: u32 = 500;
    pub const MAP_HEIGHT: u32 = 300;

    /// OpenStreetMap raster tiles
    pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
    pub const TILE_ATTRIBUTION: &str =
        "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";
}

/// Network behaviour
pub mod network {
    use std::time::Duration;

    /// Per-request timeout for flag and geocoder calls
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_template_has_placeholder() {
        assert!(flags::FLAG_CDN_URL_TEMPLATE.contains(flags::CODE_PLACEHOLDER));
    }

    #[test]
    fn test_cluster_bounds() {
        assert!(analysis::N_COLORS > 0);
        assert!(analysis::N_COLORS <= analysis::MAX_CLUSTERS);
        assert!(
            (analysis::RESIZE_WIDTH * analysis::RESIZE_HEIGHT) as usize >= analysis::N_COLORS
        );
    }

    #[test]
    fn test_artifact_dimensions() {
        assert!(render::BAR_WIDTH > 0 && render::BAR_HEIGHT > 0);
        assert!(render::SWATCH_WIDTH > 0 && render::SWATCH_HEIGHT > 0);
        assert!(network::REQUEST_TIMEOUT.as_secs() > 0);
    }
}
