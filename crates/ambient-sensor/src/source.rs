//! Reading source: network sensor when configured, mock generator
//! otherwise. Infallible by contract — one attempt per call, no retries,
//! every failure path ends in substituted mock data.

use crate::client::SensorClient;
use crate::mock::MockSensor;
use crate::types::{SensorReading, SensorStatus};

/// Supplies readings and status descriptors, preferring the configured
/// network sensor and falling back to the mock generator.
#[derive(Debug, Clone)]
pub struct SensorSource {
    client: Option<SensorClient>,
    mock: MockSensor,
}

impl SensorSource {
    /// Build a source for the persisted sensor IP; an empty IP means
    /// mock-only.
    pub fn new(sensor_ip: &str) -> Self {
        let client = if sensor_ip.trim().is_empty() {
            None
        } else {
            match SensorClient::for_ip(sensor_ip.trim()) {
                Ok(c) => Some(c),
                Err(e) => {
                    tracing::warn!("Could not build sensor client for {}: {}", sensor_ip, e);
                    None
                }
            }
        };

        Self {
            client,
            mock: MockSensor::new(),
        }
    }

    /// Source pointed at an explicit base URL (tests).
    pub fn with_client(client: SensorClient) -> Self {
        Self {
            client: Some(client),
            mock: MockSensor::new(),
        }
    }

    /// True when a network sensor endpoint is configured.
    pub fn has_network_sensor(&self) -> bool {
        self.client.is_some()
    }

    /// Fetch one reading. Attempts the network sensor when configured and
    /// `prefer_network` is set; any failure substitutes a mock reading.
    pub async fn fetch_reading(&self, prefer_network: bool) -> SensorReading {
        if prefer_network {
            if let Some(client) = &self.client {
                match client.fetch_data().await {
                    Ok(reading) => return reading,
                    Err(e) => {
                        tracing::warn!("Sensor read failed, using mock data: {}", e);
                    }
                }
            }
        }

        self.mock.reading()
    }

    /// Fetch the status descriptor, with the same fallback behavior as
    /// `fetch_reading`.
    pub async fn fetch_status(&self, prefer_network: bool) -> SensorStatus {
        if prefer_network {
            if let Some(client) = &self.client {
                match client.fetch_status().await {
                    Ok(status) => return status,
                    Err(e) => {
                        tracing::warn!("Sensor status fetch failed, using mock status: {}", e);
                    }
                }
            }
        }

        self.mock.status()
    }
}
