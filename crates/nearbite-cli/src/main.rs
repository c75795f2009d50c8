mod output;
mod search;

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand};
use nearbite_core::Coordinate;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "nearbite")]
#[command(about = "Find restaurants near a location, nearest first")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search for restaurants around a coordinate or a named place
    Search(SearchArgs),
    /// Normalize a saved Geoapify places response without calling the network
    Normalize(NormalizeArgs),
}

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("origin").required(true).args(["near", "city"])))]
struct SearchArgs {
    /// Search origin as "LAT,LON"
    #[arg(long, value_name = "LAT,LON", allow_hyphen_values = true)]
    near: Option<Coordinate>,

    /// Search origin as a city or place name, resolved with the geocoder
    #[arg(long)]
    city: Option<String>,

    /// Search radius in miles (0-30]; defaults to NEARBITE_DEFAULT_RADIUS_MILES
    #[arg(long, value_parser = nearbite_core::parse_radius)]
    radius: Option<f64>,

    /// Print results as JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct NormalizeArgs {
    /// Path to a Geoapify `/v2/places` JSON response
    #[arg(long)]
    file: PathBuf,

    /// Reference coordinate for distances, as "LAT,LON"
    #[arg(long, value_name = "LAT,LON", allow_hyphen_values = true)]
    near: Coordinate,

    /// Print results as JSON instead of a table
    #[arg(long)]
    json: bool,
}

const DEFAULT_LOG_LEVEL: &str = "info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // RUST_LOG wins, then NEARBITE_LOG_LEVEL. A bad filter falls back to the
    // default so offline commands still run.
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| {
            EnvFilter::try_new(
                std::env::var("NEARBITE_LOG_LEVEL")
                    .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
            )
        })
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Search(args) => {
            let config = nearbite_core::load_app_config()?;
            tracing::debug!(?config, "loaded configuration");
            search::run_search(&config, args).await
        }
        // Offline; provider settings are not read.
        Commands::Normalize(args) => search::run_normalize(&args),
    }
}
