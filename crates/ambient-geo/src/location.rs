//! Viewer location: device locator with a fixed stub fallback.
//!
//! Resolution happens once per session. Failures are recorded as strings on
//! the result, never raised to the caller.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::types::{GeoCoordinate, LocationError};

const RESOLVE_TIMEOUT_SECS: u64 = 10;
const CACHED_FIX_MAX_AGE_SECS: u64 = 60;

/// Fixed coordinate served by the stub locator when the device capability
/// is denied, times out, or is absent.
pub const FALLBACK_COORDINATE: GeoCoordinate = GeoCoordinate {
    lat: 43.6532,
    lng: -79.3832,
};

/// Device geolocation capability. Out of scope for this workspace; stubbed
/// as unavailable, like a denied browser permission.
pub mod device {
    use crate::types::{GeoCoordinate, LocationError};

    pub async fn current_position() -> Result<GeoCoordinate, LocationError> {
        Err(LocationError::ServiceUnavailable)
    }

    pub async fn is_available() -> bool {
        false
    }
}

/// Outcome of a location resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub coord: GeoCoordinate,
    /// True when the fixed stub coordinate was substituted.
    pub from_fallback: bool,
    /// Recorded failure of the device capability, if any.
    pub error: Option<String>,
}

/// Resolves the viewer's coordinate, preferring the device capability and
/// reusing a recent device fix within a 60-second tolerance.
#[derive(Debug)]
pub struct LocationSource {
    fallback: GeoCoordinate,
    cached_fix: Mutex<Option<(GeoCoordinate, Instant)>>,
}

impl Default for LocationSource {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationSource {
    pub fn new() -> Self {
        Self::with_fallback(FALLBACK_COORDINATE)
    }

    pub fn with_fallback(fallback: GeoCoordinate) -> Self {
        Self {
            fallback,
            cached_fix: Mutex::new(None),
        }
    }

    /// Resolve the viewer's coordinate. A device failure degrades to the
    /// fallback coordinate with the failure recorded on the result.
    pub async fn resolve(&self) -> ResolvedLocation {
        if let Some(coord) = self.fresh_cached_fix() {
            tracing::debug!("Reusing cached device fix");
            return ResolvedLocation {
                coord,
                from_fallback: false,
                error: None,
            };
        }

        let attempt = tokio::time::timeout(
            Duration::from_secs(RESOLVE_TIMEOUT_SECS),
            device::current_position(),
        )
        .await
        .unwrap_or(Err(LocationError::Timeout));

        match attempt {
            Ok(coord) => {
                tracing::info!("Device position: {}, {}", coord.lat, coord.lng);
                self.store_fix(coord);
                ResolvedLocation {
                    coord,
                    from_fallback: false,
                    error: None,
                }
            }
            Err(e) => {
                tracing::warn!("Device location unavailable ({}), using fallback", e);
                ResolvedLocation {
                    coord: self.fallback,
                    from_fallback: true,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    fn fresh_cached_fix(&self) -> Option<GeoCoordinate> {
        let guard = self.cached_fix.lock().ok()?;
        let (coord, at) = (*guard)?;
        if at.elapsed() <= Duration::from_secs(CACHED_FIX_MAX_AGE_SECS) {
            Some(coord)
        } else {
            None
        }
    }

    fn store_fix(&self, coord: GeoCoordinate) {
        if let Ok(mut guard) = self.cached_fix.lock() {
            *guard = Some((coord, Instant::now()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn device_unavailable_degrades_to_fallback() {
        let source = LocationSource::new();
        let resolved = source.resolve().await;

        assert!(resolved.from_fallback);
        assert_eq!(resolved.coord, FALLBACK_COORDINATE);
        assert!(resolved.error.is_some());
    }

    #[tokio::test]
    async fn custom_fallback_is_served() {
        let source = LocationSource::with_fallback(GeoCoordinate::new(51.5074, -0.1278));
        let resolved = source.resolve().await;

        assert!(resolved.from_fallback);
        assert_eq!(resolved.coord, GeoCoordinate::new(51.5074, -0.1278));
    }

    #[tokio::test]
    async fn device_capability_is_reported_absent() {
        assert!(!device::is_available().await);
    }
}
