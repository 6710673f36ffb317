//! Reference-city catalog: static coordinates enriched with per-city
//! temperatures fetched independently and in parallel.
//!
//! Partial success: cities that fail are dropped and reported in an
//! aggregate warning list; the batch only counts as failed when every
//! lookup fails.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::types::{City, CityReading, GeoError};

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// The static reference points shown on the map.
pub fn default_cities() -> Vec<City> {
    vec![
        City::new("New York", 40.7128, -74.0060),
        City::new("London", 51.5074, -0.1278),
        City::new("Tokyo", 35.6762, 139.6503),
        City::new("Paris", 48.8566, 2.3522),
        City::new("Sydney", -33.8688, 151.2093),
    ]
}

fn stub_temperature(city_name: &str) -> f64 {
    match city_name {
        "New York" => 22.0,
        "London" => 15.0,
        "Tokyo" => 18.0,
        "Paris" => 16.0,
        "Sydney" => 26.0,
        _ => 20.0,
    }
}

#[derive(Debug, Deserialize)]
struct TemperatureBody {
    temperature: f64,
}

/// HTTP client for a remote city-temperature service.
#[derive(Debug, Clone)]
pub struct CityTemperatureClient {
    client: Client,
    base_url: String,
}

impl CityTemperatureClient {
    pub fn new(base_url: &str) -> Result<Self, GeoError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn temperature(&self, city_name: &str) -> Result<f64, GeoError> {
        let url = format!("{}/temperature", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("city", city_name)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GeoError::BadStatus(response.status().as_u16()));
        }

        let body: TemperatureBody = response
            .json()
            .await
            .map_err(|e| GeoError::Parse(e.to_string()))?;

        Ok(body.temperature)
    }
}

/// Where city temperatures come from.
#[derive(Debug, Clone)]
pub enum TemperatureProvider {
    /// Fixed per-city values; always succeeds.
    Stub,
    /// Remote temperature service.
    Http(CityTemperatureClient),
}

impl TemperatureProvider {
    async fn temperature(&self, city_name: &str) -> Result<f64, GeoError> {
        match self {
            TemperatureProvider::Stub => Ok(stub_temperature(city_name)),
            TemperatureProvider::Http(client) => client.temperature(city_name).await,
        }
    }
}

/// Result of one catalog resolution.
#[derive(Debug, Clone, Default)]
pub struct CatalogOutcome {
    /// Successfully enriched cities, in catalog order.
    pub readings: Vec<CityReading>,
    /// Human-readable failure entries for the cities that were dropped.
    pub failures: Vec<String>,
}

impl CatalogOutcome {
    /// True when every lookup in the batch failed.
    pub fn is_total_failure(&self) -> bool {
        self.readings.is_empty() && !self.failures.is_empty()
    }
}

/// Static city list plus the temperature provider that enriches it.
#[derive(Debug, Clone)]
pub struct CityCatalog {
    cities: Vec<City>,
    provider: TemperatureProvider,
}

impl CityCatalog {
    pub fn new(cities: Vec<City>, provider: TemperatureProvider) -> Self {
        Self { cities, provider }
    }

    /// Catalog of the default cities backed by the stub provider.
    pub fn stub() -> Self {
        Self::new(default_cities(), TemperatureProvider::Stub)
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Fetch every city's temperature in parallel and merge in the static
    /// coordinates. Results keep catalog order regardless of completion
    /// order.
    pub async fn resolve_all(&self) -> CatalogOutcome {
        let mut handles = Vec::with_capacity(self.cities.len());

        for city in &self.cities {
            let provider = self.provider.clone();
            let city = city.clone();
            let name = city.name.clone();
            let handle = tokio::spawn(async move {
                provider.temperature(&city.name).await.map(|temperature| CityReading {
                    city: city.name,
                    coord: city.coord,
                    temperature,
                })
            });
            handles.push((name, handle));
        }

        let mut outcome = CatalogOutcome::default();
        for (name, handle) in handles {
            match handle.await {
                Ok(Ok(reading)) => outcome.readings.push(reading),
                Ok(Err(e)) => {
                    tracing::warn!("City temperature lookup failed for {}: {}", name, e);
                    outcome.failures.push(format!("{}: {}", name, e));
                }
                Err(e) => {
                    tracing::error!("City temperature task panicked for {}: {}", name, e);
                    outcome.failures.push(format!("{}: {}", name, e));
                }
            }
        }

        if outcome.is_total_failure() {
            tracing::error!("Every city temperature lookup failed");
        }

        outcome
    }
}
