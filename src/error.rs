//! Error types and handling for the `Spotfinder` library

use thiserror::Error;

/// Main error type for the `Spotfinder` library
#[derive(Error, Debug)]
pub enum SpotfinderError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// API communication errors
    #[error("API error: {message}")]
    Api { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Catalog loading errors
    #[error("Catalog error: {message}")]
    Catalog { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl SpotfinderError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new catalog error
    pub fn catalog<S: Into<String>>(message: S) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = SpotfinderError::config("missing base URL");
        assert!(matches!(config_err, SpotfinderError::Config { .. }));

        let api_err = SpotfinderError::api("connection failed");
        assert!(matches!(api_err, SpotfinderError::Api { .. }));

        let validation_err = SpotfinderError::validation("invalid coordinates");
        assert!(matches!(validation_err, SpotfinderError::Validation { .. }));
    }

    #[test]
    fn test_display_includes_message() {
        let validation_err = SpotfinderError::validation("test input");
        assert!(validation_err.to_string().contains("test input"));

        let catalog_err = SpotfinderError::catalog("bad file");
        assert!(catalog_err.to_string().contains("bad file"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let spot_err: SpotfinderError = io_err.into();
        assert!(matches!(spot_err, SpotfinderError::Io { .. }));
    }
}
