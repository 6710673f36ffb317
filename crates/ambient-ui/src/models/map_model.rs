//! Map view model: lifecycle state, data reconciliation, marker derivation.
//!
//! The model owns its state exclusively and is only mutated from the thread
//! draining its message channel. Derived values (markers, nearest city) are
//! recomputed explicitly after each update rather than through a reactive
//! graph.

use ambient_core::{AppError, Config, MapViewState};
use ambient_geo::{compare, CatalogOutcome, CityReading, NearestCity, ResolvedLocation};
use ambient_sensor::SensorReading;

use crate::models::icons::{self, MarkerIcon};
use crate::services::{CityError, ResolveError};

#[derive(Debug)]
pub struct MapModel {
    state: MapViewState,

    loading_location: bool,
    loading_cities: bool,

    location: Option<ResolvedLocation>,
    cities: Vec<CityReading>,
    reading: SensorReading,

    // Derived state, recomputed after each update
    city_markers: Vec<Option<MarkerIcon>>,
    user_marker: Option<MarkerIcon>,
    nearest: Option<NearestCity>,

    /// Accumulated user-visible errors, deduplicated
    errors: Vec<String>,
}

impl MapModel {
    pub fn new(config: &Config) -> Self {
        let mut model = Self {
            state: MapViewState::default(),
            loading_location: false,
            loading_cities: false,
            location: None,
            cities: Vec::new(),
            reading: SensorReading::default(),
            city_markers: Vec::new(),
            user_marker: None,
            nearest: None,
            errors: Vec::new(),
        };

        if !config.map.has_api_key() {
            model.push_error(
                "Map provider key not set - using the keyless fallback tiles".to_string(),
            );
        }

        model
    }

    /// First render. Mounts once, and only in a client context.
    pub fn mount(&mut self, is_client: bool) {
        self.state = self.state.on_client_render(is_client);
    }

    /// Ask for the rendering engine. `already_loaded` comes from the
    /// process-wide flag in `AppServices`; a loaded engine skips the
    /// loading state entirely.
    pub fn request_engine(&mut self, already_loaded: bool) {
        self.state = self.state.on_engine_requested(already_loaded);
    }

    /// The rendering engine finished loading.
    pub fn engine_loaded(&mut self) {
        self.state = self.state.on_engine_loaded();
    }

    pub fn state(&self) -> MapViewState {
        self.state
    }

    /// True once location/city/sensor fetches may be triggered.
    pub fn can_fetch_data(&self) -> bool {
        self.state.can_fetch_data()
    }

    /// Flag the in-flight fetches. Returns false (and does nothing) before
    /// the engine is ready — markers must never be derived without it.
    pub fn begin_fetches(&mut self) -> bool {
        if !self.can_fetch_data() {
            return false;
        }
        self.loading_location = true;
        self.loading_cities = true;
        true
    }

    pub fn is_loading(&self) -> bool {
        self.loading_location || self.loading_cities
    }

    pub fn apply_location(&mut self, resolved: ResolvedLocation) {
        self.loading_location = false;

        if let Some(err) = &resolved.error {
            tracing::warn!("Location resolution degraded: {}", err);
            let app: AppError = ResolveError::Device(err.clone()).into();
            self.push_error(app.user_message().to_string());
        }

        self.location = Some(resolved);
        self.recompute();
    }

    pub fn apply_cities(&mut self, outcome: CatalogOutcome) {
        self.loading_cities = false;

        if outcome.is_total_failure() {
            let app: AppError = CityError::AllFailed(outcome.failures.join("; ")).into();
            self.push_error(app.user_message().to_string());
        } else {
            for failure in &outcome.failures {
                self.push_error(CityError::Lookup(failure.clone()).to_string());
            }
        }

        self.cities = outcome.readings;
        self.recompute();
    }

    pub fn apply_reading(&mut self, reading: SensorReading) {
        self.reading = reading;
        self.recompute();
    }

    /// Explicit derivation pass: markers and the nearest-city comparison.
    fn recompute(&mut self) {
        self.city_markers = icons::derive_city_markers(&self.cities);
        self.user_marker = icons::user_marker(&self.reading);

        // Comparison needs both the coordinate and a known local
        // temperature; `nearest` returns None otherwise.
        self.nearest = self.location.as_ref().and_then(|loc| {
            compare::nearest(loc.coord, self.reading.temperature, &self.cities)
        });
    }

    fn push_error(&mut self, message: String) {
        if !self.errors.contains(&message) {
            self.errors.push(message);
        }
    }

    pub fn location(&self) -> Option<&ResolvedLocation> {
        self.location.as_ref()
    }

    pub fn cities(&self) -> &[CityReading] {
        &self.cities
    }

    pub fn city_markers(&self) -> &[Option<MarkerIcon>] {
        &self.city_markers
    }

    pub fn user_marker(&self) -> Option<&MarkerIcon> {
        self.user_marker.as_ref()
    }

    pub fn nearest(&self) -> Option<&NearestCity> {
        self.nearest.as_ref()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}
