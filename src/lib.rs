//! `Spotfinder` - Kitesurf spot lookup and layered weather resolution
//!
//! This library resolves the nearest known kitesurf spot for a coordinate
//! and answers weather queries through a fallback chain that never fails:
//! internal data service, then public weather API, then synthetic data.

pub mod catalog;
pub mod config;
pub mod error;
pub mod geo;
pub mod models;
pub mod weather;

// Re-export core types for public API
pub use catalog::{BuiltinCatalog, CatalogProvider, JsonFileCatalog};
pub use config::SpotfinderConfig;
pub use error::SpotfinderError;
pub use geo::{NearestSpot, SpotIndex};
pub use models::{Coordinate, Difficulty, Provenance, SpotRecord, WaterType, WeatherRecord};
pub use weather::{SyntheticGenerator, WeatherResolver, WeatherSource};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, SpotfinderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
