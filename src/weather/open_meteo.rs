//! Public API Adapter
//!
//! Queries the Open-Meteo forecast API directly, bypassing the internal
//! data service. Used only after the internal source has definitively
//! failed. No API key required.

use super::{SourceError, WeatherSource};
use crate::error::SpotfinderError;
use crate::models::{Coordinate, Provenance, WeatherRecord};
use crate::Result;
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Client for the Open-Meteo public weather API
pub struct OpenMeteoClient {
    client: Client,
    base_url: String,
}

impl OpenMeteoClient {
    /// Create a new client for the given API base URL
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

/// `OpenMeteo` API response structures
mod openmeteo {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub current: Option<CurrentData>,
    }

    /// Current weather block from `OpenMeteo`
    #[derive(Debug, Deserialize)]
    pub struct CurrentData {
        #[serde(rename = "temperature_2m")]
        pub temperature: f32,
        #[serde(rename = "wind_speed_10m")]
        pub wind_speed: f32,
        #[serde(rename = "wind_direction_10m")]
        pub wind_direction: f32,
        #[serde(rename = "wind_gusts_10m")]
        pub wind_gusts: f32,
    }
}

use openmeteo::ForecastResponse;

impl OpenMeteoClient {
    fn to_record(current: &openmeteo::CurrentData) -> WeatherRecord {
        WeatherRecord {
            wind_speed: current.wind_speed,
            // Open-Meteo reports 360 for due north; canonical range is [0, 360)
            wind_direction: current.wind_direction.rem_euclid(360.0),
            wind_gust: current.wind_gusts,
            temperature: current.temperature,
            // The forecast endpoint carries no marine data
            wave_height: 0.0,
            timestamp: Utc::now(),
            provenance: Provenance::ExternalDirect,
        }
    }
}

#[async_trait]
impl WeatherSource for OpenMeteoClient {
    fn name(&self) -> &'static str {
        "open-meteo"
    }

    fn provenance(&self) -> Provenance {
        Provenance::ExternalDirect
    }

    async fn fetch(&self, coordinate: &Coordinate) -> std::result::Result<WeatherRecord, SourceError> {
        let url = format!(
            "{}/forecast?latitude={}&longitude={}&current=temperature_2m,wind_speed_10m,wind_direction_10m,wind_gusts_10m&wind_speed_unit=ms",
            self.base_url, coordinate.latitude, coordinate.longitude
        );
        debug!("Querying Open-Meteo: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SourceError::Network(format!("Open-Meteo request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(SourceError::Api(format!(
                "Open-Meteo returned {}",
                response.status()
            )));
        }

        let forecast: ForecastResponse = response.json().await.map_err(|e| {
            SourceError::Parse(format!("Failed to parse Open-Meteo response: {e}"))
        })?;

        let current = forecast.current.ok_or_else(|| {
            SourceError::Parse("Open-Meteo response missing current weather block".to_string())
        })?;

        Ok(Self::to_record(&current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_data_mapping() {
        let current = openmeteo::CurrentData {
            temperature: 19.5,
            wind_speed: 7.2,
            wind_direction: 245.0,
            wind_gusts: 10.1,
        };

        let record = OpenMeteoClient::to_record(&current);
        assert_eq!(record.wind_speed, 7.2);
        assert_eq!(record.wind_direction, 245.0);
        assert_eq!(record.wind_gust, 10.1);
        assert_eq!(record.temperature, 19.5);
        assert_eq!(record.wave_height, 0.0);
        assert_eq!(record.provenance, Provenance::ExternalDirect);
    }

    #[test]
    fn test_due_north_normalized_into_range() {
        let current = openmeteo::CurrentData {
            temperature: 15.0,
            wind_speed: 5.0,
            wind_direction: 360.0,
            wind_gusts: 6.0,
        };

        let record = OpenMeteoClient::to_record(&current);
        assert_eq!(record.wind_direction, 0.0);
    }

    #[test]
    fn test_missing_current_block_is_parse_error() {
        let forecast: ForecastResponse = serde_json::from_str("{}").unwrap();
        assert!(forecast.current.is_none());
    }
}
