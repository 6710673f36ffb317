//! Raw HTTP client for a network sensor endpoint.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::types::{SensorError, SensorReading, SensorStatus};

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Wire shape of `GET /data`. Fields are plain numbers on the wire; the
/// sensor signals failure by not answering, never with nulls.
#[derive(Debug, Deserialize)]
struct DataBody {
    temperature: f64,
    humidity: f64,
}

/// Wire shape of `GET /status`.
#[derive(Debug, Deserialize)]
struct StatusBody {
    status: String,
    #[serde(default)]
    ip: String,
}

/// HTTP client for one sensor endpoint.
#[derive(Debug, Clone)]
pub struct SensorClient {
    client: Client,
    base_url: String,
}

impl SensorClient {
    /// Create a client for an explicit base URL (tests point this at a
    /// mock server).
    pub fn new(base_url: &str) -> Result<Self, SensorError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client for a configured sensor IP.
    pub fn for_ip(ip: &str) -> Result<Self, SensorError> {
        Self::new(&format!("http://{}", ip))
    }

    /// Fetch one reading from `GET /data`.
    pub async fn fetch_data(&self) -> Result<SensorReading, SensorError> {
        let url = format!("{}/data", self.base_url);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(SensorError::BadStatus(response.status().as_u16()));
        }

        let body: DataBody = response
            .json()
            .await
            .map_err(|e| SensorError::Malformed(e.to_string()))?;

        Ok(SensorReading::new(body.temperature, body.humidity))
    }

    /// Fetch the status descriptor from `GET /status`.
    pub async fn fetch_status(&self) -> Result<SensorStatus, SensorError> {
        let url = format!("{}/status", self.base_url);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(SensorError::BadStatus(response.status().as_u16()));
        }

        let body: StatusBody = response
            .json()
            .await
            .map_err(|e| SensorError::Malformed(e.to_string()))?;

        Ok(SensorStatus {
            status: body.status,
            ip: body.ip,
        })
    }
}
