//! Canonical weather record and provenance tagging

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which data source ultimately produced a [`WeatherRecord`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Provenance {
    /// Internal data service, the authoritative source
    Internal,
    /// Public weather API queried directly, bypassing the internal service
    ExternalDirect,
    /// Generated mock data, the terminal fallback
    Synthetic,
}

impl Provenance {
    /// Stable string form, matching the serialized encoding
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::Internal => "internal",
            Provenance::ExternalDirect => "external-direct",
            Provenance::Synthetic => "synthetic",
        }
    }

    /// Whether this record came from an authoritative source
    #[must_use]
    pub fn is_authoritative(&self) -> bool {
        matches!(self, Provenance::Internal)
    }
}

/// Canonical weather observation for a coordinate
///
/// Created fresh per query and never mutated after the pipeline hands it
/// out. Every source's raw schema is mapped into this shape and validated
/// before the record reaches a caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// Wind speed in m/s (>= 0)
    pub wind_speed: f32,
    /// Wind direction in degrees, [0, 360) where 0 is North
    pub wind_direction: f32,
    /// Wind gust speed in m/s (>= wind_speed)
    pub wind_gust: f32,
    /// Temperature in Celsius
    pub temperature: f32,
    /// Significant wave height in meters (>= 0)
    pub wave_height: f32,
    /// Timestamp of the observation
    pub timestamp: DateTime<Utc>,
    /// Source that produced this record
    pub provenance: Provenance,
}

impl WeatherRecord {
    /// Convert wind direction from degrees to cardinal direction
    #[must_use]
    pub fn wind_direction_to_cardinal(degrees: f32) -> &'static str {
        let normalized = degrees.rem_euclid(360.0);
        let index = ((normalized / 22.5) + 0.5) as usize % 16;
        [
            "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W",
            "WNW", "NW", "NNW",
        ][index]
    }

    /// Format wind information
    #[must_use]
    pub fn format_wind(&self) -> String {
        let direction = Self::wind_direction_to_cardinal(self.wind_direction);
        format!(
            "{:.1} m/s {} (gusts {:.1} m/s)",
            self.wind_speed, direction, self.wind_gust
        )
    }

    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{:.1}°C", self.temperature)
    }

    /// Check if conditions are suitable for kitesurfing (basic heuristic)
    #[must_use]
    pub fn is_suitable_for_kitesurfing(&self) -> bool {
        // Basic safety criteria for kitesurfing:
        // - rideable wind between 6-14 m/s
        // - gusts not wildly above the base wind
        let wind_ok = self.wind_speed >= 6.0 && self.wind_speed <= 14.0;
        let gust_ok = self.wind_gust <= self.wind_speed * 1.5;
        wind_ok && gust_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(wind_speed: f32, wind_gust: f32) -> WeatherRecord {
        WeatherRecord {
            wind_speed,
            wind_direction: 180.0,
            wind_gust,
            temperature: 22.0,
            wave_height: 0.8,
            timestamp: Utc::now(),
            provenance: Provenance::Internal,
        }
    }

    #[test]
    fn test_wind_direction_to_cardinal() {
        assert_eq!(WeatherRecord::wind_direction_to_cardinal(0.0), "N");
        assert_eq!(WeatherRecord::wind_direction_to_cardinal(90.0), "E");
        assert_eq!(WeatherRecord::wind_direction_to_cardinal(180.0), "S");
        assert_eq!(WeatherRecord::wind_direction_to_cardinal(270.0), "W");
        assert_eq!(WeatherRecord::wind_direction_to_cardinal(45.0), "NE");
        assert_eq!(WeatherRecord::wind_direction_to_cardinal(359.0), "N");
    }

    #[test]
    fn test_provenance_serialization() {
        assert_eq!(
            serde_json::to_string(&Provenance::Internal).unwrap(),
            "\"internal\""
        );
        assert_eq!(
            serde_json::to_string(&Provenance::ExternalDirect).unwrap(),
            "\"external-direct\""
        );
        assert_eq!(
            serde_json::to_string(&Provenance::Synthetic).unwrap(),
            "\"synthetic\""
        );
    }

    #[test]
    fn test_provenance_as_str_matches_serialization() {
        for provenance in [
            Provenance::Internal,
            Provenance::ExternalDirect,
            Provenance::Synthetic,
        ] {
            let serialized = serde_json::to_string(&provenance).unwrap();
            assert_eq!(serialized, format!("\"{}\"", provenance.as_str()));
        }
    }

    #[test]
    fn test_kitesurfing_suitability() {
        let good = record(10.0, 12.0);
        assert!(good.is_suitable_for_kitesurfing());

        let too_light = record(3.0, 4.0);
        assert!(!too_light.is_suitable_for_kitesurfing());

        let too_strong = record(18.0, 22.0);
        assert!(!too_strong.is_suitable_for_kitesurfing());

        let too_gusty = record(10.0, 19.0);
        assert!(!too_gusty.is_suitable_for_kitesurfing());
    }

    #[test]
    fn test_format_wind() {
        let record = record(8.0, 10.5);
        assert_eq!(record.format_wind(), "8.0 m/s S (gusts 10.5 m/s)");
    }
}
