//! Interactive map output
//!
//! A [`MapView`] is a centered map with a single marker. It renders to a
//! standalone Leaflet page using OpenStreetMap tiles.

use super::Coordinates;
use crate::constants::locator::{MAP_HEIGHT, MAP_WIDTH, TILE_ATTRIBUTION, TILE_URL};
use serde::Serialize;

/// Map marker with hover tooltip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub position: Coordinates,
    pub tooltip: String,
}

/// Map centered on a location
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub center: Coordinates,
    pub zoom: u8,
    pub markers: Vec<Marker>,
    pub width: u32,
    pub height: u32,
}

const LEAFLET_VERSION: &str = "1.9.4";
const LEAFLET_CSS_SRI: &str = "sha256-p4NxAoJBhIIN+hmNHrzRCf9tD/miZyoHS5obTRR9BMY=";
const LEAFLET_JS_SRI: &str = "sha256-20nQCchB9co0qIjJZRGuk2/Z9VM+kNiyxNV1lvTlZBo=";

impl MapView {
    pub fn new(center: Coordinates, zoom: u8) -> Self {
        Self {
            center,
            zoom,
            markers: Vec::new(),
            width: MAP_WIDTH,
            height: MAP_HEIGHT,
        }
    }

    pub fn with_marker(mut self, position: Coordinates, tooltip: impl Into<String>) -> Self {
        self.markers.push(Marker {
            position,
            tooltip: tooltip.into(),
        });
        self
    }

    /// Render a self-contained HTML page
    pub fn to_html(&self) -> String {
        let mut markers = String::new();
        for marker in &self.markers {
            markers.push_str(&format!(
                "    L.marker([{}, {}]).bindTooltip({}).addTo(map);\n",
                marker.position.latitude,
                marker.position.longitude,
                js_string(&marker.tooltip),
            ));
        }

        let title = self
            .markers
            .first()
            .map(|m| html_escape(&m.tooltip))
            .unwrap_or_else(|| "Map".to_string());

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>{title}</title>
  <link rel="stylesheet" href="https://unpkg.com/leaflet@{version}/dist/leaflet.css"
        integrity="{css_sri}" crossorigin="">
  <script src="https://unpkg.com/leaflet@{version}/dist/leaflet.js"
          integrity="{js_sri}" crossorigin=""></script>
</head>
<body>
  <div id="map" style="width: {width}px; height: {height}px;"></div>
  <script>
    var map = L.map("map").setView([{lat}, {lon}], {zoom});
    L.tileLayer({tiles}, {{ attribution: {attribution} }}).addTo(map);
{markers}  </script>
</body>
</html>
"#,
            title = title,
            version = LEAFLET_VERSION,
            css_sri = LEAFLET_CSS_SRI,
            js_sri = LEAFLET_JS_SRI,
            width = self.width,
            height = self.height,
            lat = self.center.latitude,
            lon = self.center.longitude,
            zoom = self.zoom,
            tiles = js_string(TILE_URL),
            attribution = js_string(TILE_ATTRIBUTION),
            markers = markers,
        )
    }
}

/// Quote a string as a JavaScript literal that is safe inside `<script>`
fn js_string(s: &str) -> String {
    serde_json::Value::String(s.to_string())
        .to_string()
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
}

fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
