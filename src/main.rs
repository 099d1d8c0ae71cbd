//! RunWear - what should I wear on my run?

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use runwear_core::Config;
use runwear_ui::{TerminalPage, WeatherPipeline};
use runwear_weather::{Coordinate, FixedGeolocator};

#[derive(Parser)]
#[command(
    name = "runwear",
    version,
    about = "Current weather and clothing recommendations for your run"
)]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Look up the weather for a US ZIP code
    Zip { zip: String },
    /// Use the position configured under [location]
    Locate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, validation) = Config::load_validated(cli.config.as_deref())?;
    runwear_core::init(&config.logging.level)?;

    // Logged again here: validation ran before the subscriber existed.
    for warning in &validation.warnings {
        tracing::warn!("Config warning: {}", warning);
    }

    tracing::info!("RunWear started");

    let page = Arc::new(TerminalPage::new());
    let pipeline = WeatherPipeline::from_config(page, &config)
        .context("Failed to initialize HTTP client")?;

    match cli.command {
        Command::Zip { zip } => pipeline.resolve_by_zip(&zip).await,
        Command::Locate => {
            let position = config
                .location
                .position()
                .map(|(lat, lon)| Coordinate::new(lat, lon));
            pipeline
                .resolve_by_geolocation(&FixedGeolocator::new(position))
                .await
        }
    }

    Ok(())
}
