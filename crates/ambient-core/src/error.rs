//! Centralized error types for the Ambient dashboard.
//!
//! This module provides a typed error hierarchy that:
//! - Enables precise error handling throughout the codebase
//! - Provides user-friendly messages suitable for banner display
//! - Preserves full error context for debugging/logging
//!
//! No error here is fatal: every failure path in the dashboard terminates in
//! a visible message and/or a substituted fallback value.

use thiserror::Error;

/// Top-level application error type.
///
/// All errors in the Ambient workspace should be convertible to this type.
/// Use `user_message()` to get a banner-appropriate message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Sensor error: {0}")]
    Sensor(#[from] SensorError),

    #[error("Location error: {0}")]
    Location(#[from] LocationError),

    #[error("Suggestion service error: {0}")]
    Suggest(#[from] SuggestError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Returns a user-friendly message suitable for display in a banner.
    ///
    /// These messages are designed to be actionable and non-technical.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Network(e) => e.user_message(),
            AppError::Config(e) => e.user_message(),
            AppError::Sensor(e) => e.user_message(),
            AppError::Location(e) => e.user_message(),
            AppError::Suggest(e) => e.user_message(),
            AppError::Io(_) => "A file operation failed. Please try again.",
            AppError::Other(_) => "An unexpected error occurred. Please try again.",
        }
    }
}

/// Network-related errors (HTTP, connectivity).
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl NetworkError {
    pub fn user_message(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed(_) => {
                "Unable to connect. Check your network connection."
            }
            NetworkError::Timeout => "The request timed out. Please try again.",
            NetworkError::ServerError { status, .. } if *status >= 500 => {
                "The server is experiencing issues. Please try again later."
            }
            NetworkError::ServerError { .. } => "The request failed. Please try again.",
            NetworkError::InvalidResponse(_) => {
                "Received an unexpected response. Please try again."
            }
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),

    #[error("Missing required setting: {0}")]
    MissingSetting(String),

    #[error("Failed to persist settings: {0}")]
    PersistFailed(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::NotFound(_) => "Configuration not found. Using defaults.",
            ConfigError::Invalid(_) => "Invalid configuration. Check your settings.",
            ConfigError::ParseError(_) => "Configuration file is malformed. Check your settings.",
            ConfigError::MissingSetting(_) => "A required setting is missing. Check your settings.",
            ConfigError::PersistFailed(_) => "Failed to save settings. Please try again.",
        }
    }
}

/// Sensor endpoint errors.
///
/// These are always recoverable: the reading source substitutes mock data
/// rather than surfacing them to the caller.
#[derive(Debug, Error)]
pub enum SensorError {
    #[error("Sensor not configured")]
    NotConfigured,

    #[error("Sensor unreachable: {0}")]
    Unreachable(String),

    #[error("Sensor returned malformed data: {0}")]
    MalformedData(String),

    #[error("Sensor reports degraded status: {0}")]
    Degraded(String),
}

impl SensorError {
    pub fn user_message(&self) -> &'static str {
        match self {
            SensorError::NotConfigured => {
                "No sensor configured. Showing simulated readings."
            }
            SensorError::Unreachable(_) => {
                "Sensor unreachable. Showing simulated readings."
            }
            SensorError::MalformedData(_) => {
                "Sensor sent unreadable data. Showing simulated readings."
            }
            SensorError::Degraded(_) => "Sensor is reporting a degraded status.",
        }
    }
}

/// Location resolution errors.
#[derive(Debug, Error)]
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

impl LocationError {
    pub fn user_message(&self) -> &'static str {
        match self {
            LocationError::PermissionDenied => {
                "Location access was denied. Using the default position."
            }
            LocationError::ServiceUnavailable => {
                "Location service unavailable. Using the default position."
            }
            LocationError::Timeout => "Locating you took too long. Using the default position.",
            LocationError::Other(_) => "Could not determine your position.",
        }
    }
}

/// Suggestion generation errors.
#[derive(Debug, Error)]
pub enum SuggestError {
    #[error("Suggestion API error: {0}")]
    ApiError(String),

    #[error("Suggestion response malformed: {0}")]
    MalformedResponse(String),

    #[error("Suggestion service unavailable")]
    ServiceUnavailable,
}

impl SuggestError {
    pub fn user_message(&self) -> &'static str {
        match self {
            SuggestError::ApiError(_) => "Suggestions are unavailable right now.",
            SuggestError::MalformedResponse(_) => "Suggestions are unavailable right now.",
            SuggestError::ServiceUnavailable => "Suggestion service is unavailable.",
        }
    }
}

/// Extension trait for converting reqwest errors to our error types.
pub trait ReqwestErrorExt {
    fn into_network_error(self) -> NetworkError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_network_error(self) -> NetworkError {
        if self.is_timeout() {
            NetworkError::Timeout
        } else if self.is_connect() {
            NetworkError::ConnectionFailed(self.to_string())
        } else if let Some(status) = self.status() {
            NetworkError::ServerError {
                status: status.as_u16(),
                message: self.to_string(),
            }
        } else {
            NetworkError::ConnectionFailed(self.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_conversion() {
        let sensor_err = SensorError::NotConfigured;
        let app_err: AppError = sensor_err.into();
        assert!(matches!(app_err, AppError::Sensor(SensorError::NotConfigured)));
    }

    #[test]
    fn test_user_message_propagation() {
        let app_err = AppError::Location(LocationError::Timeout);
        assert_eq!(
            app_err.user_message(),
            "Locating you took too long. Using the default position."
        );
    }

    #[test]
    fn test_sensor_errors_point_at_mock_fallback() {
        // Every transient sensor failure must tell the user that mock data
        // has been substituted, not that the dashboard is broken.
        for err in [
            SensorError::NotConfigured,
            SensorError::Unreachable("refused".into()),
            SensorError::MalformedData("not json".into()),
        ] {
            assert!(err.user_message().contains("simulated"));
        }
    }

    #[test]
    fn test_server_error_message_distinguishes_5xx() {
        let e = NetworkError::ServerError {
            status: 503,
            message: "unavailable".into(),
        };
        assert!(e.user_message().contains("server"));
    }
}
