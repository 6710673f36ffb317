use serde::{Deserialize, Serialize};

/// One temperature/humidity sample.
///
/// `None` fields signal a failed read. Downstream consumers must treat
/// `None` as "unknown", never as zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct SensorReading {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
}

impl SensorReading {
    pub fn new(temperature: f64, humidity: f64) -> Self {
        Self {
            temperature: Some(temperature),
            humidity: Some(humidity),
        }
    }

    /// A reading whose fields are all unknown (failed read).
    pub fn failed() -> Self {
        Self {
            temperature: None,
            humidity: None,
        }
    }

    /// True when no field of the reading is known.
    pub fn is_failed(&self) -> bool {
        self.temperature.is_none() && self.humidity.is_none()
    }
}

/// Sensor self-reported status descriptor.
///
/// Any `status` other than `"OK"` is a degraded but non-fatal condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorStatus {
    pub status: String,
    pub ip: String,
}

impl SensorStatus {
    pub const OK: &'static str = "OK";

    pub fn ok(ip: impl Into<String>) -> Self {
        Self {
            status: Self::OK.to_string(),
            ip: ip.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == Self::OK
    }
}

/// Sensor endpoint errors.
///
/// Callers of `SensorSource` never see these: the source substitutes mock
/// data instead. They exist for the raw client and for logging.
#[derive(Debug, thiserror::Error)]
pub enum SensorError {
    #[error("Sensor request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Sensor returned status {0}")]
    BadStatus(u16),
    #[error("Sensor body malformed: {0}")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_reading_has_no_fields() {
        let r = SensorReading::failed();
        assert!(r.is_failed());
        assert_eq!(r.temperature, None);
        assert_eq!(r.humidity, None);
    }

    #[test]
    fn partial_reading_is_not_failed() {
        let r = SensorReading {
            temperature: Some(21.5),
            humidity: None,
        };
        assert!(!r.is_failed());
    }

    #[test]
    fn status_ok_check() {
        assert!(SensorStatus::ok("10.0.0.2").is_ok());
        assert!(!SensorStatus {
            status: "ERROR".into(),
            ip: String::new(),
        }
        .is_ok());
    }

    #[test]
    fn reading_serializes_null_for_unknown() {
        let json = serde_json::to_string(&SensorReading::failed()).unwrap();
        assert_eq!(json, r#"{"temperature":null,"humidity":null}"#);
    }
}
