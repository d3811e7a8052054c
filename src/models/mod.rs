//! Core data models for spot lookup and weather resolution

pub mod coordinate;
pub mod spot;
pub mod weather;

pub use coordinate::Coordinate;
pub use spot::{Difficulty, SpotRecord, WaterType};
pub use weather::{Provenance, WeatherRecord};
