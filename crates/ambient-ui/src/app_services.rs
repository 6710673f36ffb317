//! Centralized application services container.
//!
//! Holds the tokio runtime, the root cancellation token, and the shared
//! data-source clients. View lifetimes hang off child tokens: cancelling a
//! view's token makes any in-flight work for it a no-op.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;
use parking_lot::RwLock;
use tokio_util::sync::CancellationToken;

use ambient_core::settings::SettingsRepository;
use ambient_core::Config;
use ambient_geo::{CityCatalog, CityTemperatureClient, LocationSource, TemperatureProvider};
use ambient_sensor::SensorSource;
use ambient_suggest::SuggestClient;

/// Shared services for the whole application.
pub struct AppServices {
    /// Tokio runtime for async operations
    runtime: tokio::runtime::Runtime,

    /// Root cancellation token; child tokens are handed to views
    root_token: CancellationToken,

    /// Sensor reading source; swapped out when the user changes the IP.
    /// The poll loop holds the outer Arc and re-reads the slot each tick.
    sensor: Arc<RwLock<Arc<SensorSource>>>,

    location: Arc<LocationSource>,
    catalog: Arc<CityCatalog>,
    suggest: Arc<SuggestClient>,

    /// Whether the map rendering engine has been loaded this process.
    /// Survives map view teardown so a remount skips the loading state.
    map_engine_loaded: AtomicBool,

    config: Config,
}

impl AppServices {
    /// Build the service container from config plus persisted settings.
    ///
    /// The persisted sensor IP wins over the config default; an empty IP
    /// means mock readings only.
    pub fn new(config: Config, settings: &dyn SettingsRepository) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("ambient-tokio")
            .build()?;

        let sensor_ip = if settings.sensor_ip().trim().is_empty() {
            config.sensor.ip.clone()
        } else {
            settings.sensor_ip().to_string()
        };

        let suggest = SuggestClient::new(&config.suggest.api_url)?;

        // The city-temperature endpoint is a stub until a real provider is
        // wired in; the HTTP path is exercised by tests and available via
        // `with_temperature_endpoint`.
        let catalog = CityCatalog::stub();

        tracing::info!(
            "AppServices initialized (sensor {})",
            if sensor_ip.is_empty() { "mock-only" } else { &sensor_ip }
        );

        Ok(Self {
            runtime,
            root_token: CancellationToken::new(),
            sensor: Arc::new(RwLock::new(Arc::new(SensorSource::new(&sensor_ip)))),
            location: Arc::new(LocationSource::new()),
            catalog: Arc::new(catalog),
            suggest: Arc::new(suggest),
            map_engine_loaded: AtomicBool::new(false),
            config,
        })
    }

    /// Point the catalog at a remote temperature service instead of the
    /// stub provider.
    pub fn with_temperature_endpoint(mut self, base_url: &str) -> Result<Self> {
        let client = CityTemperatureClient::new(base_url)?;
        self.catalog = Arc::new(CityCatalog::new(
            ambient_geo::default_cities(),
            TemperatureProvider::Http(client),
        ));
        Ok(self)
    }

    pub fn handle(&self) -> tokio::runtime::Handle {
        self.runtime.handle().clone()
    }

    /// Child token tied to one view's lifetime.
    pub fn view_token(&self) -> CancellationToken {
        self.root_token.child_token()
    }

    pub fn sensor(&self) -> Arc<SensorSource> {
        self.sensor.read().clone()
    }

    /// The swappable sensor slot, for the poll loop.
    pub fn sensor_slot(&self) -> Arc<RwLock<Arc<SensorSource>>> {
        self.sensor.clone()
    }

    /// Replace the sensor source after the user changes the persisted IP.
    pub fn set_sensor_ip(&self, ip: &str) {
        tracing::info!("Sensor IP changed, rebuilding reading source");
        *self.sensor.write() = Arc::new(SensorSource::new(ip));
    }

    pub fn location(&self) -> Arc<LocationSource> {
        self.location.clone()
    }

    pub fn catalog(&self) -> Arc<CityCatalog> {
        self.catalog.clone()
    }

    pub fn suggest(&self) -> Arc<SuggestClient> {
        self.suggest.clone()
    }

    pub fn map_engine_loaded(&self) -> bool {
        self.map_engine_loaded.load(Ordering::Relaxed)
    }

    pub fn mark_map_engine_loaded(&self) {
        self.map_engine_loaded.store(true, Ordering::Relaxed);
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Cancel everything and wind the runtime down.
    pub fn shutdown(self) {
        tracing::info!("Shutting down application services");
        self.root_token.cancel();
        self.runtime
            .shutdown_timeout(std::time::Duration::from_secs(2));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ambient_core::settings::TomlSettings;

    #[test]
    fn persisted_ip_wins_over_config() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = TomlSettings::load(dir.path()).unwrap();
        settings.set_sensor_ip("10.1.1.5").unwrap();

        let mut config = Config::default();
        config.sensor.ip = "192.168.0.99".to_string();

        let services = AppServices::new(config, &settings).unwrap();
        assert!(services.sensor().has_network_sensor());
        services.shutdown();
    }

    #[test]
    fn empty_settings_fall_back_to_config_ip() {
        let dir = tempfile::tempdir().unwrap();
        let settings = TomlSettings::load(dir.path()).unwrap();

        let config = Config::default(); // no IP anywhere
        let services = AppServices::new(config, &settings).unwrap();
        assert!(!services.sensor().has_network_sensor());
        services.shutdown();
    }

    #[test]
    fn set_sensor_ip_swaps_the_source() {
        let dir = tempfile::tempdir().unwrap();
        let settings = TomlSettings::load(dir.path()).unwrap();
        let services = AppServices::new(Config::default(), &settings).unwrap();

        assert!(!services.sensor().has_network_sensor());
        services.set_sensor_ip("10.0.0.8");
        assert!(services.sensor().has_network_sensor());
        services.shutdown();
    }

    #[test]
    fn engine_flag_persists_across_views() {
        let dir = tempfile::tempdir().unwrap();
        let settings = TomlSettings::load(dir.path()).unwrap();
        let services = AppServices::new(Config::default(), &settings).unwrap();

        assert!(!services.map_engine_loaded());
        services.mark_map_engine_loaded();
        assert!(services.map_engine_loaded());
        services.shutdown();
    }

    #[test]
    fn view_tokens_are_cancelled_by_shutdown() {
        let dir = tempfile::tempdir().unwrap();
        let settings = TomlSettings::load(dir.path()).unwrap();
        let services = AppServices::new(Config::default(), &settings).unwrap();

        let token = services.view_token();
        assert!(!token.is_cancelled());
        services.shutdown();
        assert!(token.is_cancelled());
    }
}
