//! Location and reference-city data for Ambient
//!
//! Resolves the viewer's coordinate (device locator with a fixed fallback),
//! enriches a static city catalog with per-city temperatures, and compares
//! the local reading against the nearest reference city.

pub mod catalog;
pub mod compare;
pub mod location;
pub mod types;

pub use catalog::{default_cities, CatalogOutcome, CityCatalog, CityTemperatureClient, TemperatureProvider};
pub use compare::{nearest, NearestCity, TemperatureDirection};
pub use location::{LocationSource, ResolvedLocation, FALLBACK_COORDINATE};
pub use types::{City, CityReading, GeoCoordinate, GeoError, LocationError};
