//! Spot catalog loading
//!
//! The geo index is built from a complete catalog snapshot supplied by a
//! catalog provider. Providers return the whole catalog at once; there are
//! no incremental or partial updates.

use crate::error::SpotfinderError;
use crate::models::{Coordinate, Difficulty, SpotRecord, WaterType};
use crate::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{debug, info};

/// Source of complete spot catalog snapshots
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Load a complete, consistent catalog snapshot
    async fn load(&self) -> Result<Vec<SpotRecord>>;
}

/// Catalog provider reading a JSON array of spots from a file
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogProvider for JsonFileCatalog {
    async fn load(&self) -> Result<Vec<SpotRecord>> {
        debug!("Loading spot catalog from {}", self.path.display());
        let contents = std::fs::read_to_string(&self.path)?;
        let spots: Vec<SpotRecord> = serde_json::from_str(&contents).map_err(|e| {
            SpotfinderError::catalog(format!(
                "Failed to parse catalog file {}: {e}",
                self.path.display()
            ))
        })?;
        info!(
            "Loaded {} spots from catalog file {}",
            spots.len(),
            self.path.display()
        );
        Ok(spots)
    }
}

/// Catalog provider serving the built-in seed spots
pub struct BuiltinCatalog;

#[async_trait]
impl CatalogProvider for BuiltinCatalog {
    async fn load(&self) -> Result<Vec<SpotRecord>> {
        Ok(builtin_spots())
    }
}

/// Built-in seed catalog of well-known kitesurf spots
///
/// Kept as static catalog data so a deployment without an external catalog
/// still answers nearest-spot queries.
#[must_use]
pub fn builtin_spots() -> Vec<SpotRecord> {
    vec![
        seed_spot(
            "tarifa",
            "Tarifa",
            "Spain",
            "Costa de la Luz, Andalusia",
            36.0143,
            -5.6044,
            Difficulty::Intermediate,
            WaterType::Choppy,
        ),
        seed_spot(
            "dakhla",
            "Dakhla",
            "Morocco",
            "Dakhla Lagoon, Western Sahara",
            23.7136,
            -15.9355,
            Difficulty::Beginner,
            WaterType::Flat,
        ),
        seed_spot(
            "cabarete",
            "Cabarete",
            "Dominican Republic",
            "Kite Beach, Puerto Plata",
            19.7586,
            -70.4083,
            Difficulty::Intermediate,
            WaterType::Waves,
        ),
        seed_spot(
            "le-morne",
            "Le Morne",
            "Mauritius",
            "Le Morne Peninsula",
            -20.4561,
            57.3087,
            Difficulty::Advanced,
            WaterType::Waves,
        ),
        seed_spot(
            "cumbuco",
            "Cumbuco",
            "Brazil",
            "Cumbuco Beach, Ceará",
            -3.6252,
            -38.7293,
            Difficulty::Beginner,
            WaterType::Flat,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn seed_spot(
    id: &str,
    name: &str,
    country: &str,
    location: &str,
    latitude: f64,
    longitude: f64,
    difficulty: Difficulty,
    water_type: WaterType,
) -> SpotRecord {
    SpotRecord {
        id: id.to_string(),
        name: name.to_string(),
        country: country.to_string(),
        location: location.to_string(),
        coordinate: Coordinate {
            latitude,
            longitude,
        },
        difficulty,
        water_type,
    }
}
