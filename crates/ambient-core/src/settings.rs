//! Persisted user settings (sensor IP, theme).
//!
//! The dashboard treats these as an opaque key-value contract: callers go
//! through `SettingsRepository` with explicit get/set methods, and the
//! storage backend is injected rather than reached for as a global.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::Theme;
use crate::error::ConfigError;

/// Explicit get/set contract for persisted user settings.
///
/// Absence of a value defaults to the empty string (sensor IP) or `light`
/// (theme); there is no versioning.
pub trait SettingsRepository {
    fn sensor_ip(&self) -> &str;
    fn set_sensor_ip(&mut self, ip: &str) -> Result<(), ConfigError>;
    fn theme(&self) -> Theme;
    fn set_theme(&mut self, theme: Theme) -> Result<(), ConfigError>;
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct SettingsValues {
    #[serde(default)]
    sensor_ip: String,
    #[serde(default)]
    theme: Theme,
}

/// TOML-file-backed settings repository.
///
/// Every `set_*` persists immediately; a missing file yields defaults.
#[derive(Debug)]
pub struct TomlSettings {
    path: PathBuf,
    values: SettingsValues,
}

impl TomlSettings {
    /// Load settings from `<dir>/settings.toml`, using defaults when the
    /// file does not exist yet.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join("settings.toml");

        let values = if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::NotFound(format!("{}: {}", path.display(), e)))?;
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?
        } else {
            SettingsValues::default()
        };

        Ok(Self { path, values })
    }

    fn persist(&self) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::PersistFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(&self.values)
            .map_err(|e| ConfigError::PersistFailed(e.to_string()))?;

        std::fs::write(&self.path, contents)
            .map_err(|e| ConfigError::PersistFailed(e.to_string()))?;

        Ok(())
    }
}

impl SettingsRepository for TomlSettings {
    fn sensor_ip(&self) -> &str {
        &self.values.sensor_ip
    }

    fn set_sensor_ip(&mut self, ip: &str) -> Result<(), ConfigError> {
        self.values.sensor_ip = ip.to_string();
        self.persist()?;
        tracing::debug!("Persisted sensor IP: {}", ip);
        Ok(())
    }

    fn theme(&self) -> Theme {
        self.values.theme
    }

    fn set_theme(&mut self, theme: Theme) -> Result<(), ConfigError> {
        self.values.theme = theme;
        self.persist()?;
        tracing::debug!("Persisted theme: {}", theme.as_str());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = TomlSettings::load(dir.path()).unwrap();
        assert_eq!(settings.sensor_ip(), "");
        assert_eq!(settings.theme(), Theme::Light);
    }

    #[test]
    fn sensor_ip_round_trips() {
        let dir = tempfile::tempdir().unwrap();

        let mut settings = TomlSettings::load(dir.path()).unwrap();
        settings.set_sensor_ip("192.168.1.42").unwrap();

        let reloaded = TomlSettings::load(dir.path()).unwrap();
        assert_eq!(reloaded.sensor_ip(), "192.168.1.42");
    }

    #[test]
    fn theme_toggles_between_light_and_dark() {
        let dir = tempfile::tempdir().unwrap();

        let mut settings = TomlSettings::load(dir.path()).unwrap();
        settings.set_theme(settings.theme().toggled()).unwrap();
        assert_eq!(settings.theme(), Theme::Dark);

        let mut reloaded = TomlSettings::load(dir.path()).unwrap();
        assert_eq!(reloaded.theme(), Theme::Dark);

        reloaded.set_theme(reloaded.theme().toggled()).unwrap();
        assert_eq!(reloaded.theme(), Theme::Light);
    }

    #[test]
    fn set_does_not_clobber_other_keys() {
        let dir = tempfile::tempdir().unwrap();

        let mut settings = TomlSettings::load(dir.path()).unwrap();
        settings.set_sensor_ip("10.0.0.7").unwrap();
        settings.set_theme(Theme::Dark).unwrap();

        let reloaded = TomlSettings::load(dir.path()).unwrap();
        assert_eq!(reloaded.sensor_ip(), "10.0.0.7");
        assert_eq!(reloaded.theme(), Theme::Dark);
    }
}
