//! Mock reading generator: jittered values around fixed baselines, with a
//! small synthetic failure rate so downstream null handling stays honest.

use rand::Rng;

use crate::types::{SensorReading, SensorStatus};

pub const TEMPERATURE_BASELINE: f64 = 22.0;
pub const TEMPERATURE_JITTER: f64 = 2.5;
pub const HUMIDITY_BASELINE: f64 = 55.0;
pub const HUMIDITY_JITTER: f64 = 5.0;

/// Fraction of mock readings that fail outright (both fields unknown).
pub const READING_FAILURE_RATE: f64 = 0.05;
/// Fraction of mock status fetches that report a degraded sensor.
pub const STATUS_FAILURE_RATE: f64 = 0.02;

/// IP reported by the mock when no real sensor is configured.
pub const MOCK_IP: &str = "192.168.4.1";

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Synthetic sensor used when no endpoint is configured or the real one
/// cannot be read.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockSensor;

impl MockSensor {
    pub fn new() -> Self {
        Self
    }

    /// Generate one reading: values jittered around the baselines and
    /// rounded to one decimal, or an all-unknown reading ~5% of the time.
    pub fn reading(&self) -> SensorReading {
        let mut rng = rand::thread_rng();

        if rng.gen_bool(READING_FAILURE_RATE) {
            tracing::debug!("Mock sensor simulated a failed read");
            return SensorReading::failed();
        }

        let temperature =
            round1(TEMPERATURE_BASELINE + rng.gen_range(-TEMPERATURE_JITTER..=TEMPERATURE_JITTER));
        let humidity =
            round1(HUMIDITY_BASELINE + rng.gen_range(-HUMIDITY_JITTER..=HUMIDITY_JITTER));

        SensorReading::new(temperature, humidity)
    }

    /// Generate a status descriptor: OK with the mock IP, or a degraded
    /// status with no IP ~2% of the time.
    pub fn status(&self) -> SensorStatus {
        let mut rng = rand::thread_rng();

        if rng.gen_bool(STATUS_FAILURE_RATE) {
            tracing::debug!("Mock sensor simulated a degraded status");
            return SensorStatus {
                status: "ERROR".to_string(),
                ip: String::new(),
            };
        }

        SensorStatus::ok(MOCK_IP)
    }
}
