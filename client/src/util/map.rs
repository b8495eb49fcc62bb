//! OpenStreetMap embed URLs for a looked-up location.
//!
//! The map is an `<iframe>` onto OSM's export embed page, centered on the
//! record's coordinates with a marker. `SPAN_DEGREES` is roughly zoom 13.

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;

use store::types::Coordinates;

const EMBED_BASE: &str = "https://www.openstreetmap.org/export/embed.html";
const VIEW_BASE: &str = "https://www.openstreetmap.org/";
const SPAN_DEGREES: f64 = 0.01;
const VIEW_ZOOM: u8 = 13;

/// Bounding box `(min_lon, min_lat, max_lon, max_lat)` around `center`,
/// clamped to valid degrees.
pub fn bounding_box(center: Coordinates) -> (f64, f64, f64, f64) {
    (
        (center.longitude - SPAN_DEGREES).max(-180.0),
        (center.latitude - SPAN_DEGREES).max(-90.0),
        (center.longitude + SPAN_DEGREES).min(180.0),
        (center.latitude + SPAN_DEGREES).min(90.0),
    )
}

/// `src` for the embedded map iframe.
pub fn embed_url(center: Coordinates) -> String {
    let (min_lon, min_lat, max_lon, max_lat) = bounding_box(center);
    format!(
        "{EMBED_BASE}?bbox={min_lon:.6}%2C{min_lat:.6}%2C{max_lon:.6}%2C{max_lat:.6}&layer=mapnik&marker={:.6}%2C{:.6}",
        center.latitude, center.longitude
    )
}

/// Link to the full OSM map at the same spot.
pub fn view_url(center: Coordinates) -> String {
    format!(
        "{VIEW_BASE}?mlat={lat:.6}&mlon={lon:.6}#map={VIEW_ZOOM}/{lat:.6}/{lon:.6}",
        lat = center.latitude,
        lon = center.longitude
    )
}
