use anyhow::{Context, Result};
use spotfinder::{
    catalog::{self, JsonFileCatalog},
    CatalogProvider, Coordinate, SpotfinderConfig, SpotIndex, WeatherResolver,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = SpotfinderConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone())),
        )
        .init();

    // Default to Tarifa when no coordinates are given
    let mut args = std::env::args().skip(1);
    let latitude = parse_arg(args.next(), 36.0143, "latitude")?;
    let longitude = parse_arg(args.next(), -5.6044, "longitude")?;
    let coordinate = Coordinate::new(latitude, longitude)
        .with_context(|| "Coordinates must be valid decimal degrees")?;

    let spots = match &config.catalog.path {
        Some(path) => JsonFileCatalog::new(path).load().await?,
        None => catalog::builtin_spots(),
    };
    let index = SpotIndex::new(spots);

    let nearest = match config.catalog.max_spot_distance_km {
        Some(max_km) => index.find_nearest_within(&coordinate, max_km),
        None => index.find_nearest(&coordinate),
    };

    match &nearest {
        Some(nearest) => println!(
            "Nearest spot to {}: {} ({}, {}) - {:.1} km away",
            coordinate.format_coordinates(),
            nearest.spot.name,
            nearest.spot.location,
            nearest.spot.country,
            nearest.distance_km
        ),
        None => println!(
            "No catalog spot near {}",
            coordinate.format_coordinates()
        ),
    }

    let resolver = WeatherResolver::new(&config)?;
    let weather = resolver.resolve(&coordinate).await;

    println!(
        "Weather [{}]: wind {}, {} - wave height {:.1} m",
        weather.provenance.as_str(),
        weather.format_wind(),
        weather.format_temperature(),
        weather.wave_height
    );
    if weather.is_suitable_for_kitesurfing() {
        println!("Conditions look rideable.");
    }

    Ok(())
}

fn parse_arg(arg: Option<String>, default: f64, name: &str) -> Result<f64> {
    match arg {
        Some(raw) => raw
            .parse::<f64>()
            .with_context(|| format!("Invalid {name}: {raw}")),
        None => Ok(default),
    }
}
