//! Meteotile CLI
//!
//! Command-line front end: resolve a place name (or take raw coordinates)
//! and print the aggregated weather view.

#![allow(clippy::print_stdout)]

use std::sync::Arc;

use anyhow::bail;
use application::{AggregatorService, Resolution, ResolverService, WeatherView};
use clap::{Parser, Subcommand};
use domain::{GeoLocation, Place};
use infrastructure::{GeocodingAdapter, WeatherDataAdapter};
use integration_openmeteo::OpenMeteoClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Meteotile CLI
#[derive(Parser)]
#[command(name = "meteotile-cli")]
#[command(author, version, about = "Place-based weather lookup", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up weather for a place by name
    ///
    /// Ambiguous names print a numbered candidate list; re-run with
    /// --pick N to choose one.
    Lookup {
        /// Free-text place name, e.g. "Berlin"
        query: String,

        /// Choose candidate N (1-based) when the name is ambiguous
        #[arg(short, long)]
        pick: Option<usize>,
    },

    /// Look up weather for raw coordinates
    Coords {
        /// Latitude in decimal degrees (-90 to 90)
        #[arg(allow_negative_numbers = true)]
        latitude: f64,

        /// Longitude in decimal degrees (-180 to 180)
        #[arg(allow_negative_numbers = true)]
        longitude: f64,
    },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Print the aggregated view under a location headline
fn print_view(headline: &str, view: &WeatherView) {
    println!("{} {}", view.glyph, headline);
    println!();
    println!("{}", view.temperature);
    println!("{}", view.windspeed);
    println!("{}", view.humidity);
    println!();
    for (label, value) in view.tiles() {
        println!("{label:>13}  {value}");
    }
}

/// Print the candidate list for an ambiguous name
fn print_candidates(candidates: &[Place]) {
    println!("Several places match:");
    for (position, candidate) in candidates.iter().enumerate() {
        println!("  {}. {}", position + 1, candidate.label());
    }
    println!("Re-run with --pick N to choose one.");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = log_filter_from_verbosity(cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = OpenMeteoClient::with_defaults()?;
    let weather = Arc::new(WeatherDataAdapter::from_client(client.clone()));
    let aggregator = AggregatorService::new(weather);

    match cli.command {
        Commands::Lookup { query, pick } => {
            let geocoding = Arc::new(GeocodingAdapter::from_client(client));
            let resolver = ResolverService::new(geocoding);

            match resolver.resolve(&query).await? {
                Resolution::Resolved(place) => {
                    let view = aggregator.aggregate(&place.location()).await?;
                    print_view(&place.headline(), &view);
                },
                Resolution::Ambiguous(candidates) => {
                    if let Some(pick) = pick {
                        let Some(place) = pick.checked_sub(1).and_then(|i| candidates.get(i))
                        else {
                            bail!(
                                "--pick {pick} is out of range; {} candidates matched",
                                candidates.len()
                            );
                        };
                        let view = aggregator.aggregate(&place.location()).await?;
                        print_view(&place.headline(), &view);
                    } else {
                        print_candidates(&candidates);
                    }
                },
                Resolution::NoMatch => {
                    println!("No places found.");
                },
            }
        },

        Commands::Coords {
            latitude,
            longitude,
        } => {
            let location = GeoLocation::new(latitude, longitude)?;
            let view = aggregator.aggregate(&location).await?;
            print_view(&location.to_string(), &view);
        },
    }

    Ok(())
}
