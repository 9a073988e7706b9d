use std::{env, fs};

use anyhow::Context;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use workouts::{SensorPackage, sample_packages, summarize};

fn init_logging() {
    // Logs go to stderr; stdout only carries report lines.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_packages() -> anyhow::Result<Vec<SensorPackage>> {
    match env::var("WORKOUT_PACKAGES") {
        Ok(path) => {
            tracing::info!("Reading sensor packages from {}", path);
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("failed to read sensor packages from {path}"))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse sensor packages in {path}"))
        }
        Err(_) => {
            tracing::info!("WORKOUT_PACKAGES not set, using sample packages");
            Ok(sample_packages())
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let packages = load_packages()?;

    for message in summarize(&packages)? {
        println!("{message}");
    }

    Ok(())
}
