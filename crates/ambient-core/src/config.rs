use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add an error
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Add a warning
    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application configuration directory
    pub config_dir: PathBuf,

    /// Sensor endpoint settings
    #[serde(default)]
    pub sensor: SensorConfig,

    /// Dashboard polling settings
    #[serde(default)]
    pub dashboard: DashboardConfig,

    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,

    /// Map provider settings
    #[serde(default)]
    pub map: MapConfig,

    /// Suggestion service settings
    #[serde(default)]
    pub suggest: SuggestConfig,
}

/// Theme preference persisted in user settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The opposite theme, for toggle controls.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorConfig {
    /// Sensor device IP (empty = no sensor configured, mock readings only)
    #[serde(default)]
    pub ip: String,

    /// Prefer the network sensor over the mock generator when an IP is set
    #[serde(default = "default_prefer_network")]
    pub prefer_network: bool,
}

fn default_prefer_network() -> bool {
    true
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            ip: String::new(),
            prefer_network: default_prefer_network(),
        }
    }
}

impl SensorConfig {
    /// True when a sensor endpoint has been configured.
    pub fn is_configured(&self) -> bool {
        !self.ip.trim().is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Poll interval in seconds (default: 30)
    #[serde(default = "default_poll_seconds")]
    pub poll_seconds: u32,

    /// Number of readings retained in the rolling history (default: 30)
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
}

fn default_poll_seconds() -> u32 {
    30
}

fn default_history_capacity() -> usize {
    30
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            poll_seconds: default_poll_seconds(),
            history_capacity: default_history_capacity(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme preference
    #[serde(default)]
    pub theme: Theme,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Map provider API key. Read from AMBIENT_MAP_API_KEY when absent.
    /// Missing key degrades to the keyless fallback tile source.
    #[serde(default)]
    pub api_key: Option<String>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            api_key: std::env::var("AMBIENT_MAP_API_KEY").ok(),
        }
    }
}

impl MapConfig {
    /// Effective API key: config file first, then environment.
    pub fn effective_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| std::env::var("AMBIENT_MAP_API_KEY").ok())
    }

    /// Check if a map provider key is available (config or environment).
    pub fn has_api_key(&self) -> bool {
        self.effective_api_key().is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestConfig {
    /// Base URL of the suggestion generation service
    #[serde(default = "default_suggest_url")]
    pub api_url: String,
}

fn default_suggest_url() -> String {
    "http://localhost:8090".to_string()
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            api_url: default_suggest_url(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ambient");

        Self {
            config_dir,
            sensor: SensorConfig::default(),
            dashboard: DashboardConfig::default(),
            ui: UiConfig::default(),
            map: MapConfig::default(),
            suggest: SuggestConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }

        let contents =
            std::fs::read_to_string(&config_path).context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Load configuration and validate it
    ///
    /// Returns the config along with any validation warnings.
    /// Returns an error if validation fails with critical errors.
    pub fn load_validated() -> Result<(Self, ValidationResult)> {
        let config = Self::load()?;
        let validation = config.validate();

        if !validation.is_valid() {
            anyhow::bail!(
                "Configuration validation failed: {}",
                validation.error_summary()
            );
        }

        if !validation.warnings.is_empty() {
            for warning in &validation.warnings {
                tracing::warn!("Config warning: {}", warning);
            }
        }

        Ok((config, validation))
    }

    /// Validate the configuration
    ///
    /// Returns a ValidationResult containing any errors or warnings.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        // Validate suggestion service URL
        self.validate_url(&self.suggest.api_url, "suggest.api_url", &mut result);

        // Validate sensor endpoint (only when configured; empty means mock-only)
        if self.sensor.is_configured() {
            let endpoint = format!("http://{}/data", self.sensor.ip);
            if Url::parse(&endpoint).is_err() {
                result.add_error(
                    "sensor.ip",
                    format!("Not a usable host or IP: {}", self.sensor.ip),
                );
            }
        } else {
            result.add_warning(
                "sensor.ip",
                "No sensor configured - dashboard will show simulated readings",
            );
        }

        // Validate poll interval
        if self.dashboard.poll_seconds == 0 {
            result.add_warning("dashboard.poll_seconds", "Polling disabled (0 seconds)");
        } else if self.dashboard.poll_seconds > 3600 {
            result.add_warning(
                "dashboard.poll_seconds",
                "Poll interval is more than an hour",
            );
        }

        // Validate history capacity
        if self.dashboard.history_capacity == 0 {
            result.add_error(
                "dashboard.history_capacity",
                "History capacity must be greater than 0",
            );
        }

        // Validate map key (just warn if not configured)
        if !self.map.has_api_key() {
            result.add_warning(
                "map.api_key",
                "Map provider key not set - falling back to keyless tile source",
            );
        }

        result
    }

    /// Validate a URL field
    fn validate_url(&self, url_str: &str, field_name: &str, result: &mut ValidationResult) {
        match Url::parse(url_str) {
            Ok(url) => {
                // Check scheme
                if url.scheme() != "http" && url.scheme() != "https" {
                    result.add_error(
                        field_name,
                        format!("URL must use http or https scheme, got: {}", url.scheme()),
                    );
                }

                // Check host
                if url.host().is_none() {
                    result.add_error(field_name, "URL must have a host");
                }

                if let Some(port) = url.port() {
                    if port == 0 {
                        result.add_error(field_name, "Port cannot be 0");
                    }
                }
            }
            Err(e) => {
                result.add_error(field_name, format!("Invalid URL: {}", e));
            }
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        // Ensure config directory exists
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(&config_path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the path to the configuration file
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("ambient");

        Ok(config_dir.join("config.toml"))
    }
}
