//! Marker icon derivation.
//!
//! Pure functions invoked explicitly after state updates. Derivation is
//! per-marker best-effort: one city failing to produce an icon must not
//! suppress the others — `None` renders the default fallback marker.

use ambient_geo::CityReading;
use ambient_sensor::SensorReading;

/// Icon descriptor handed to the rendering surface.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerIcon {
    /// Icon name (glyph unicode lives in the rendering layer)
    pub glyph: &'static str,
    /// Marker tooltip/label text
    pub label: String,
}

/// Icon name for a temperature band.
pub fn temperature_glyph(celsius: f64) -> &'static str {
    if celsius < 0.0 {
        "snowflake"
    } else if celsius < 12.0 {
        "thermometer_cold"
    } else if celsius < 26.0 {
        "thermometer"
    } else {
        "thermometer_hot"
    }
}

/// Derive the icon for one catalog city. Returns `None` when no sensible
/// icon can be produced (non-finite temperature).
pub fn city_marker(city: &CityReading) -> Option<MarkerIcon> {
    if !city.temperature.is_finite() {
        return None;
    }

    Some(MarkerIcon {
        glyph: temperature_glyph(city.temperature),
        label: format!("{} {:.1}\u{00b0}C", city.city, city.temperature),
    })
}

/// Derive icons for the whole catalog, one slot per city.
pub fn derive_city_markers(cities: &[CityReading]) -> Vec<Option<MarkerIcon>> {
    cities.iter().map(city_marker).collect()
}

/// Derive the viewer's own marker from the latest sensor reading.
/// An unknown temperature yields `None` (default marker).
pub fn user_marker(reading: &SensorReading) -> Option<MarkerIcon> {
    let temperature = reading.temperature.filter(|t| t.is_finite())?;

    Some(MarkerIcon {
        glyph: temperature_glyph(temperature),
        label: format!("You {:.1}\u{00b0}C", temperature),
    })
}
