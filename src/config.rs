//! Configuration management for the `Spotfinder` library
//!
//! Handles loading configuration from files and environment variables,
//! and provides validation for all configuration settings.

use crate::SpotfinderError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SpotfinderConfig {
    /// Weather source configuration
    #[serde(default)]
    pub weather: WeatherConfig,
    /// Catalog configuration
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Weather source configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Base URL of the internal spot data service
    #[serde(default = "default_internal_base_url")]
    pub internal_base_url: String,
    /// Internal service request timeout in seconds
    #[serde(default = "default_internal_timeout")]
    pub internal_timeout_seconds: u32,
    /// Base URL of the public weather API
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
    /// Public API request timeout in seconds
    #[serde(default = "default_public_timeout")]
    pub public_timeout_seconds: u32,
}

/// Catalog configuration settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    /// Path to a JSON catalog file; built-in seed spots are used when unset
    #[serde(default)]
    pub path: Option<String>,
    /// Optional cap on how far away a "nearest" spot may be, in kilometers.
    /// Unset preserves the historical behavior of no cutoff.
    #[serde(default)]
    pub max_spot_distance_km: Option<f64>,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_internal_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_internal_timeout() -> u32 {
    5
}

fn default_public_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

fn default_public_timeout() -> u32 {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            internal_base_url: default_internal_base_url(),
            internal_timeout_seconds: default_internal_timeout(),
            public_base_url: default_public_base_url(),
            public_timeout_seconds: default_public_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl SpotfinderConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment variable overrides with SPOTFINDER_ prefix
        builder = builder.add_source(
            Environment::with_prefix("SPOTFINDER")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: SpotfinderConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("spotfinder").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        if self.weather.internal_base_url.is_empty() {
            return Err(
                SpotfinderError::config("Internal service base URL cannot be empty").into(),
            );
        }

        if self.weather.public_base_url.is_empty() {
            return Err(SpotfinderError::config("Public API base URL cannot be empty").into());
        }

        if self.weather.internal_timeout_seconds == 0
            || self.weather.internal_timeout_seconds > 300
        {
            return Err(SpotfinderError::config(
                "Internal service timeout must be between 1 and 300 seconds",
            )
            .into());
        }

        if self.weather.public_timeout_seconds == 0 || self.weather.public_timeout_seconds > 300 {
            return Err(SpotfinderError::config(
                "Public API timeout must be between 1 and 300 seconds",
            )
            .into());
        }

        if let Some(max_km) = self.catalog.max_spot_distance_km {
            if !max_km.is_finite() || max_km <= 0.0 {
                return Err(SpotfinderError::config(
                    "Maximum spot distance must be a positive number of kilometers",
                )
                .into());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SpotfinderConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.weather.internal_timeout_seconds, 5);
        assert_eq!(config.weather.public_timeout_seconds, 5);
        assert_eq!(config.weather.public_base_url, "https://api.open-meteo.com/v1");
        assert!(config.catalog.max_spot_distance_km.is_none());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = SpotfinderConfig::default();
        config.weather.internal_timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_excessive_timeout_rejected() {
        let mut config = SpotfinderConfig::default();
        config.weather.public_timeout_seconds = 301;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let mut config = SpotfinderConfig::default();
        config.weather.internal_base_url = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_max_distance_rejected() {
        let mut config = SpotfinderConfig::default();
        config.catalog.max_spot_distance_km = Some(-10.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_positive_max_distance_accepted() {
        let mut config = SpotfinderConfig::default();
        config.catalog.max_spot_distance_km = Some(250.0);
        assert!(config.validate().is_ok());
    }
}
