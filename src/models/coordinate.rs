//! Geographic coordinate with range validation

use crate::error::SpotfinderError;
use serde::{Deserialize, Serialize};

/// A validated latitude/longitude pair in decimal degrees
///
/// Deserialization goes through [`Coordinate::new`], so records arriving
/// from catalog files or API payloads carry the same range guarantee as
/// ones constructed in code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    /// Latitude in decimal degrees, in [-90, 90]
    pub latitude: f64,
    /// Longitude in decimal degrees, in [-180, 180]
    pub longitude: f64,
}

/// Unvalidated wire form of a coordinate
#[derive(Deserialize)]
struct RawCoordinate {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = SpotfinderError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Coordinate::new(raw.latitude, raw.longitude)
    }
}

impl Coordinate {
    /// Create a coordinate, rejecting out-of-range values.
    ///
    /// Range checking happens here, at the boundary; the geo index and the
    /// weather pipeline assume coordinates they receive are already valid.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, SpotfinderError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(SpotfinderError::validation(format!(
                "latitude must be in [-90, 90], got {latitude}"
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(SpotfinderError::validation(format!(
                "longitude must be in [-180, 180], got {longitude}"
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Format coordinate as a "lat, lon" string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}
