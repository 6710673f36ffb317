//! Nearest-city comparison.
//!
//! Distance is planar Euclidean on raw lat/lng, deliberately not geodesic:
//! the comparison only has to pick the closest of a handful of reference
//! points, and the original behavior is preserved.

use crate::types::{CityReading, GeoCoordinate};

/// How the local temperature relates to the nearest city's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureDirection {
    Warmer,
    Cooler,
    Similar,
}

impl TemperatureDirection {
    pub fn label(self) -> &'static str {
        match self {
            TemperatureDirection::Warmer => "warmer",
            TemperatureDirection::Cooler => "cooler",
            TemperatureDirection::Similar => "similar",
        }
    }
}

/// Result of comparing the viewer against the closest reference city.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestCity {
    pub city: String,
    /// Signed local-minus-city temperature difference.
    pub delta_celsius: f64,
    pub direction: TemperatureDirection,
}

fn squared_distance(a: GeoCoordinate, b: GeoCoordinate) -> f64 {
    let dlat = a.lat - b.lat;
    let dlng = a.lng - b.lng;
    dlat * dlat + dlng * dlng
}

/// Find the reference city of minimum planar distance and compute the
/// signed temperature delta against it.
///
/// Returns `None` when the city list is empty or the local temperature is
/// unknown. Exact distance ties go to the first city in iteration order.
pub fn nearest(
    user: GeoCoordinate,
    user_temperature: Option<f64>,
    cities: &[CityReading],
) -> Option<NearestCity> {
    let user_temperature = user_temperature?;

    let mut best: Option<(&CityReading, f64)> = None;
    for city in cities {
        let d = squared_distance(user, city.coord);
        match best {
            // Strict less-than keeps the first city on exact ties.
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((city, d)),
        }
    }

    let (city, _) = best?;
    let delta_celsius = user_temperature - city.temperature;
    let direction = if delta_celsius > 0.0 {
        TemperatureDirection::Warmer
    } else if delta_celsius < 0.0 {
        TemperatureDirection::Cooler
    } else {
        TemperatureDirection::Similar
    };

    Some(NearestCity {
        city: city.city.clone(),
        delta_celsius,
        direction,
    })
}
