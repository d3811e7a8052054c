//! Layered weather resolution
//!
//! Three sources implement one fetch contract with very different
//! reliability: the internal data service (authoritative), the public
//! Open-Meteo API (direct fallback), and a synthetic generator (terminal
//! fallback that cannot fail). The [`pipeline::WeatherResolver`] escalates
//! through them in that order.

pub mod internal;
pub mod normalize;
pub mod open_meteo;
pub mod pipeline;
pub mod synthetic;

use crate::models::{Coordinate, Provenance, WeatherRecord};
use async_trait::async_trait;
use thiserror::Error;

pub use internal::InternalServiceClient;
pub use open_meteo::OpenMeteoClient;
pub use pipeline::WeatherResolver;
pub use synthetic::SyntheticGenerator;

/// Failure of a single weather source
///
/// Always recovered locally by escalating to the next source; never
/// surfaced to a caller of the pipeline.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Out-of-range data: {0}")]
    OutOfRange(String),

    #[error("Timed out after {0:?}")]
    Timeout(std::time::Duration),
}

/// A single weather data source
///
/// `fetch` either produces a complete candidate record or fails; partial or
/// ambiguous data must never be promoted to a record. Cancellation safety:
/// the pipeline may drop an in-flight `fetch` future on timeout, so sources
/// must not hold state that a dropped call could corrupt.
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Short source name for logging
    fn name(&self) -> &'static str;

    /// Provenance tag the pipeline stamps onto records from this source
    fn provenance(&self) -> Provenance;

    /// Fetch a candidate weather record for a coordinate
    async fn fetch(&self, coordinate: &Coordinate) -> Result<WeatherRecord, SourceError>;
}
