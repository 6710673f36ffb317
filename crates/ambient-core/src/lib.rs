pub mod config;
pub mod error;
pub mod map_view_state;
pub mod settings;

pub use config::{Config, DashboardConfig, MapConfig, SensorConfig, SuggestConfig, Theme, UiConfig};
pub use error::{
    AppError, ConfigError, LocationError, NetworkError, SensorError, SuggestError,
};
pub use map_view_state::MapViewState;
pub use settings::{SettingsRepository, TomlSettings};

use anyhow::Result;

/// Initialize the core application
pub fn init() -> Result<()> {
    // Initialize tracing/logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Ambient core initialized");
    Ok(())
}
