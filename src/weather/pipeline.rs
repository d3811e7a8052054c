//! Resolution Pipeline
//!
//! Strict escalation chain over the weather sources: the internal data
//! service first, the public API second, synthetic data last. Each stage
//! runs only after the previous stage's definitive failure, so a healthy
//! internal service means no public API traffic at all, and total latency
//! is bounded by the two network timeouts.

use super::{
    normalize, InternalServiceClient, OpenMeteoClient, SourceError, SyntheticGenerator,
    WeatherSource,
};
use crate::config::SpotfinderConfig;
use crate::models::{Coordinate, WeatherRecord};
use crate::Result;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Escalation stages, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    TryInternal,
    TryExternal,
    UseSynthetic,
}

/// Weather resolver over the three-source escalation chain
///
/// `resolve` never fails: the synthetic generator is the terminal stage and
/// cannot fail, so every query produces exactly one record. Degraded
/// answers are distinguishable by their provenance tag.
pub struct WeatherResolver {
    internal: Box<dyn WeatherSource>,
    public: Box<dyn WeatherSource>,
    synthetic: SyntheticGenerator,
    internal_timeout: Duration,
    public_timeout: Duration,
}

impl WeatherResolver {
    /// Build a resolver with the real network adapters from configuration
    pub fn new(config: &SpotfinderConfig) -> Result<Self> {
        let internal_timeout =
            Duration::from_secs(u64::from(config.weather.internal_timeout_seconds));
        let public_timeout = Duration::from_secs(u64::from(config.weather.public_timeout_seconds));

        Ok(Self {
            internal: Box::new(InternalServiceClient::new(
                &config.weather.internal_base_url,
                internal_timeout,
            )?),
            public: Box::new(OpenMeteoClient::new(
                &config.weather.public_base_url,
                public_timeout,
            )?),
            synthetic: SyntheticGenerator::new(),
            internal_timeout,
            public_timeout,
        })
    }

    /// Build a resolver from explicit sources
    ///
    /// Used by tests to substitute stub sources, and by callers that need a
    /// seeded synthetic generator.
    #[must_use]
    pub fn with_sources(
        internal: Box<dyn WeatherSource>,
        public: Box<dyn WeatherSource>,
        synthetic: SyntheticGenerator,
        internal_timeout: Duration,
        public_timeout: Duration,
    ) -> Self {
        Self {
            internal,
            public,
            synthetic,
            internal_timeout,
            public_timeout,
        }
    }

    /// Resolve weather for a coordinate
    ///
    /// Walks the escalation chain and returns the first record that passes
    /// the normalizer, tagged with the provenance of the source that
    /// produced it. Infallible by contract.
    pub async fn resolve(&self, coordinate: &Coordinate) -> WeatherRecord {
        let mut stage = Stage::TryInternal;

        loop {
            match stage {
                Stage::TryInternal => {
                    match self
                        .attempt(self.internal.as_ref(), self.internal_timeout, coordinate)
                        .await
                    {
                        Ok(record) => return record,
                        Err(e) => {
                            warn!(
                                "Internal weather source failed for ({}): {}, falling back to public API",
                                coordinate.format_coordinates(),
                                e
                            );
                            stage = Stage::TryExternal;
                        }
                    }
                }
                Stage::TryExternal => {
                    match self
                        .attempt(self.public.as_ref(), self.public_timeout, coordinate)
                        .await
                    {
                        Ok(record) => return record,
                        Err(e) => {
                            warn!(
                                "Public weather source failed for ({}): {}, falling back to synthetic data",
                                coordinate.format_coordinates(),
                                e
                            );
                            stage = Stage::UseSynthetic;
                        }
                    }
                }
                Stage::UseSynthetic => {
                    debug!(
                        "Serving synthetic weather for ({})",
                        coordinate.format_coordinates()
                    );
                    return self.synthetic.generate();
                }
            }
        }
    }

    /// Run one source under its timeout and validate the candidate record
    ///
    /// The timeout drops the in-flight fetch future, so a slow source cannot
    /// write anything after its stage has been abandoned.
    async fn attempt(
        &self,
        source: &dyn WeatherSource,
        stage_timeout: Duration,
        coordinate: &Coordinate,
    ) -> std::result::Result<WeatherRecord, SourceError> {
        let mut record = timeout(stage_timeout, source.fetch(coordinate))
            .await
            .map_err(|_| SourceError::Timeout(stage_timeout))??;

        normalize::validate(&record)?;
        record.provenance = source.provenance();

        debug!(
            "Source {} produced a record for ({})",
            source.name(),
            coordinate.format_coordinates()
        );
        Ok(record)
    }
}
