//! Kitesurf spot catalog entry

use super::Coordinate;
use serde::{Deserialize, Serialize};

/// A named kitesurf spot from the catalog
///
/// Immutable once loaded into the geo index; refreshing the catalog means
/// building a new index from a fresh snapshot, never editing entries in
/// place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotRecord {
    pub id: String,
    pub name: String,
    pub country: String,
    /// Human-readable locality, e.g. "Costa de la Luz, Andalusia"
    pub location: String,
    pub coordinate: Coordinate,
    pub difficulty: Difficulty,
    pub water_type: WaterType,
}

/// Rider skill level a spot is suited for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// Water conditions typically found at a spot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterType {
    Flat,
    Choppy,
    Waves,
}
