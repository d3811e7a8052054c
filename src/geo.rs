//! Geo Index
//!
//! In-memory nearest-neighbor lookup over the spot catalog, using
//! great-circle (haversine) distance on a spherical Earth approximation.

use crate::models::{Coordinate, SpotRecord};
use tracing::debug;

/// A catalog spot matched to a query, with its distance from the query point
#[derive(Debug, Clone)]
pub struct NearestSpot<'a> {
    pub spot: &'a SpotRecord,
    pub distance_km: f64,
}

/// Read-only nearest-neighbor index over a catalog snapshot
///
/// Built once from a complete catalog snapshot and never mutated; to pick up
/// a refreshed catalog, build a new index and swap it in at the owner (e.g.
/// behind an `Arc`). The catalog is small (hundreds to low thousands of
/// entries), so lookups are a linear scan; the contract leaves room to swap
/// in a spatial index later without changing any signature.
pub struct SpotIndex {
    spots: Vec<SpotRecord>,
}

impl SpotIndex {
    /// Build an index from a catalog snapshot
    #[must_use]
    pub fn new(spots: Vec<SpotRecord>) -> Self {
        debug!("Building spot index with {} entries", spots.len());
        Self { spots }
    }

    /// Number of spots in the catalog snapshot
    #[must_use]
    pub fn len(&self) -> usize {
        self.spots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    /// All spots in the snapshot, in catalog order
    #[must_use]
    pub fn spots(&self) -> &[SpotRecord] {
        &self.spots
    }

    /// Find the single closest spot to a coordinate
    ///
    /// Returns `None` only when the catalog is empty. Ties are broken by
    /// catalog insertion order: the first entry at the minimal distance wins.
    #[must_use]
    pub fn find_nearest(&self, coordinate: &Coordinate) -> Option<NearestSpot<'_>> {
        let mut best: Option<NearestSpot<'_>> = None;

        for spot in &self.spots {
            let distance = distance_km(coordinate, &spot.coordinate);
            let closer = match &best {
                Some(current) => distance < current.distance_km,
                None => true,
            };
            if closer {
                best = Some(NearestSpot {
                    spot,
                    distance_km: distance,
                });
            }
        }

        if let Some(nearest) = &best {
            debug!(
                "Nearest spot to ({}) is {} at {:.1} km",
                coordinate.format_coordinates(),
                nearest.spot.name,
                nearest.distance_km
            );
        }

        best
    }

    /// Find the closest spot within a maximum radius in kilometers
    ///
    /// Same lookup as [`find_nearest`](Self::find_nearest) but returns `None`
    /// when even the closest spot lies beyond `max_km`.
    #[must_use]
    pub fn find_nearest_within(
        &self,
        coordinate: &Coordinate,
        max_km: f64,
    ) -> Option<NearestSpot<'_>> {
        self.find_nearest(coordinate)
            .filter(|nearest| nearest.distance_km <= max_km)
    }
}

/// Great-circle distance between two coordinates in kilometers
#[must_use]
pub fn distance_km(from: &Coordinate, to: &Coordinate) -> f64 {
    haversine::distance(
        haversine::Location {
            latitude: from.latitude,
            longitude: from.longitude,
        },
        haversine::Location {
            latitude: to.latitude,
            longitude: to.longitude,
        },
        haversine::Units::Kilometers,
    )
}
