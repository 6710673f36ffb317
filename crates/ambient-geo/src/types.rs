use serde::{Deserialize, Serialize};

/// Geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub lat: f64,
    pub lng: f64,
}

impl GeoCoordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A named reference point from the static catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub coord: GeoCoordinate,
}

impl City {
    pub fn new(name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            name: name.into(),
            coord: GeoCoordinate::new(lat, lng),
        }
    }
}

/// A catalog city enriched with its current temperature.
///
/// City temperatures are never unknown: a city that cannot be resolved is
/// dropped from the batch instead of carrying a null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityReading {
    pub city: String,
    pub coord: GeoCoordinate,
    pub temperature: f64,
}

/// Location resolution errors.
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location service unavailable")]
    ServiceUnavailable,
    #[error("Location request timed out")]
    Timeout,
    #[error("Location error: {0}")]
    Other(String),
}

/// City temperature lookup errors.
#[derive(Debug, thiserror::Error)]
pub enum GeoError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Temperature service returned status {0}")]
    BadStatus(u16),
    #[error("Parse error: {0}")]
    Parse(String),
}
