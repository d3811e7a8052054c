//! Internal Service Adapter
//!
//! Queries the companion spot data service, the preferred and most
//! authoritative weather source. Any non-success response, malformed
//! payload or timeout is a plain [`SourceError`]; there is no partial
//! result path.

use super::{SourceError, WeatherSource};
use crate::error::SpotfinderError;
use crate::models::{Coordinate, Provenance, WeatherRecord};
use crate::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Client for the internal spot data service
pub struct InternalServiceClient {
    client: Client,
    base_url: String,
}

impl InternalServiceClient {
    /// Create a new client for the given service base URL
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("spotfinder/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SpotfinderError::general(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

/// Weather payload returned by the internal data service
#[derive(Debug, Deserialize)]
struct InternalWeatherResponse {
    wind_speed_ms: f32,
    wind_direction_deg: f32,
    wind_gust_ms: f32,
    air_temperature_c: f32,
    wave_height_m: f32,
    observed_at: DateTime<Utc>,
}

impl InternalWeatherResponse {
    fn into_record(self) -> WeatherRecord {
        WeatherRecord {
            wind_speed: self.wind_speed_ms,
            wind_direction: self.wind_direction_deg,
            wind_gust: self.wind_gust_ms,
            temperature: self.air_temperature_c,
            wave_height: self.wave_height_m,
            timestamp: self.observed_at,
            provenance: Provenance::Internal,
        }
    }
}

#[async_trait]
impl WeatherSource for InternalServiceClient {
    fn name(&self) -> &'static str {
        "internal-service"
    }

    fn provenance(&self) -> Provenance {
        Provenance::Internal
    }

    async fn fetch(&self, coordinate: &Coordinate) -> std::result::Result<WeatherRecord, SourceError> {
        let url = format!(
            "{}/weather?lat={}&lon={}",
            self.base_url, coordinate.latitude, coordinate.longitude
        );
        debug!("Querying internal data service: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SourceError::Network(format!("Internal service request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(SourceError::Api(format!(
                "Internal service returned {}",
                response.status()
            )));
        }

        let payload: InternalWeatherResponse = response.json().await.map_err(|e| {
            SourceError::Parse(format!("Failed to parse internal service response: {e}"))
        })?;

        Ok(payload.into_record())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_mapping() {
        let payload = InternalWeatherResponse {
            wind_speed_ms: 8.5,
            wind_direction_deg: 250.0,
            wind_gust_ms: 11.0,
            air_temperature_c: 23.5,
            wave_height_m: 1.4,
            observed_at: Utc::now(),
        };

        let record = payload.into_record();
        assert_eq!(record.wind_speed, 8.5);
        assert_eq!(record.wind_direction, 250.0);
        assert_eq!(record.wind_gust, 11.0);
        assert_eq!(record.temperature, 23.5);
        assert_eq!(record.wave_height, 1.4);
        assert_eq!(record.provenance, Provenance::Internal);
    }

    #[test]
    fn test_client_creation() {
        let client =
            InternalServiceClient::new("http://localhost:8080", Duration::from_secs(5)).unwrap();
        assert_eq!(client.base_url, "http://localhost:8080");
    }
}
