//! qrw CLI - Command Line Operations for Walk-Versus-Analytic Pricing
//!
//! Operational entry point for the qrw-pricer workspace.
//!
//! # Commands
//!
//! - `qrw price` - Price a European call/put analytically and via the
//!   seeded random-walk simulation, and report the relative error
//!
//! # Architecture
//!
//! As the **S**ervice layer of the workspace, this crate validates input,
//! invokes the pricer layer, and renders the result bundle. All numerical
//! work lives in `pricer_core` / `pricer_models` / `pricer_pricing`.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Walk-versus-analytic option pricing CLI
#[derive(Parser)]
#[command(name = "qrw")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a European option analytically and via random walks
    Price {
        /// Initial stock price S0
        #[arg(long, default_value = "100.0")]
        spot: f64,

        /// Strike price K
        #[arg(long, default_value = "100.0")]
        strike: f64,

        /// Annualised risk-free rate r
        #[arg(long, default_value = "0.02")]
        rate: f64,

        /// Annualised volatility sigma
        #[arg(long, default_value = "0.2")]
        volatility: f64,

        /// Time to maturity T in years
        #[arg(long, default_value = "5.0")]
        expiry: f64,

        /// Number of ±1 steps per walk
        #[arg(long, default_value = "100")]
        steps: usize,

        /// Number of independent walks
        #[arg(long, default_value = "500")]
        walks: usize,

        /// Reproducibility seed: an integer, or any phrase
        #[arg(long, default_value = "42")]
        seed: String,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Price {
            spot,
            strike,
            rate,
            volatility,
            expiry,
            steps,
            walks,
            seed,
            format,
        } => commands::price::run(
            spot, strike, rate, volatility, expiry, steps, walks, &seed, &format,
        ),
    }
}
