//! Prints synthetic sensor packages as JSON.
//!
//! Run with:
//! ```
//! cargo run -p sensor-data --bin generate-packages > packages.json
//! WORKOUT_PACKAGES=packages.json cargo run -p workouts
//! ```
//!
//! `PACKAGE_COUNT` and `SEED` override the defaults.

use std::env;

use anyhow::Context;
use sensor_data::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = GenerationConfig::default();

    if let Ok(count) = env::var("PACKAGE_COUNT") {
        config.package_count = count
            .parse()
            .with_context(|| format!("PACKAGE_COUNT is not a number: {count}"))?;
    }
    if let Ok(seed) = env::var("SEED") {
        config.seed = Some(
            seed.parse()
                .with_context(|| format!("SEED is not a number: {seed}"))?,
        );
    }

    let packages = PackageGenerator::new().generate(&config)?;

    println!("{}", serde_json::to_string_pretty(&packages)?);

    Ok(())
}
