//! Result Normalizer
//!
//! Range validation of candidate weather records. Every source's mapped
//! record passes through here before the pipeline accepts it; a source that
//! answers 200 OK with nonsensical values is treated exactly like a source
//! that failed outright.

use super::SourceError;
use crate::models::WeatherRecord;

/// Validate a candidate record's numeric invariants
///
/// Rejections: non-finite values, negative wind speed, wind direction
/// outside [0, 360), gust below wind speed, negative wave height.
pub fn validate(record: &WeatherRecord) -> Result<(), SourceError> {
    for (field, value) in [
        ("wind_speed", record.wind_speed),
        ("wind_direction", record.wind_direction),
        ("wind_gust", record.wind_gust),
        ("temperature", record.temperature),
        ("wave_height", record.wave_height),
    ] {
        if !value.is_finite() {
            return Err(SourceError::OutOfRange(format!(
                "{field} is not finite: {value}"
            )));
        }
    }

    if record.wind_speed < 0.0 {
        return Err(SourceError::OutOfRange(format!(
            "negative wind speed: {}",
            record.wind_speed
        )));
    }
    if !(0.0..360.0).contains(&record.wind_direction) {
        return Err(SourceError::OutOfRange(format!(
            "wind direction outside [0, 360): {}",
            record.wind_direction
        )));
    }
    if record.wind_gust < record.wind_speed {
        return Err(SourceError::OutOfRange(format!(
            "gust {} below wind speed {}",
            record.wind_gust, record.wind_speed
        )));
    }
    if record.wave_height < 0.0 {
        return Err(SourceError::OutOfRange(format!(
            "negative wave height: {}",
            record.wave_height
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Provenance;
    use chrono::Utc;
    use rstest::rstest;

    fn valid_record() -> WeatherRecord {
        WeatherRecord {
            wind_speed: 9.0,
            wind_direction: 245.0,
            wind_gust: 12.5,
            temperature: 21.0,
            wave_height: 1.2,
            timestamp: Utc::now(),
            provenance: Provenance::Internal,
        }
    }

    #[test]
    fn test_valid_record_accepted() {
        assert!(validate(&valid_record()).is_ok());
    }

    #[test]
    fn test_direction_400_rejected() {
        let mut record = valid_record();
        record.wind_direction = 400.0;
        assert!(matches!(
            validate(&record),
            Err(SourceError::OutOfRange(_))
        ));
    }

    #[rstest]
    #[case::negative_speed(-1.0, 245.0, 12.5, 1.2)]
    #[case::negative_direction(9.0, -5.0, 12.5, 1.2)]
    #[case::direction_360(9.0, 360.0, 12.5, 1.2)]
    #[case::gust_below_wind(9.0, 245.0, 5.0, 1.2)]
    #[case::negative_wave(9.0, 245.0, 12.5, -0.1)]
    fn test_invariant_violations_rejected(
        #[case] wind_speed: f32,
        #[case] wind_direction: f32,
        #[case] wind_gust: f32,
        #[case] wave_height: f32,
    ) {
        let mut record = valid_record();
        record.wind_speed = wind_speed;
        record.wind_direction = wind_direction;
        record.wind_gust = wind_gust;
        record.wave_height = wave_height;
        assert!(matches!(
            validate(&record),
            Err(SourceError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_nan_rejected() {
        let mut record = valid_record();
        record.temperature = f32::NAN;
        assert!(matches!(
            validate(&record),
            Err(SourceError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_zero_boundaries_accepted() {
        let mut record = valid_record();
        record.wind_speed = 0.0;
        record.wind_gust = 0.0;
        record.wind_direction = 0.0;
        record.wave_height = 0.0;
        assert!(validate(&record).is_ok());
    }
}
