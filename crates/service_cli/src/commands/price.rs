//! Price command implementation
//!
//! Validates the input bundle, runs the pricing engine once, and renders
//! the result as a table or as JSON (the full result bundle, suitable for
//! downstream charting).

use pricer_core::types::{MarketParams, Seed, SimulationParams};
use pricer_pricing::engine::PricingEngine;
use tracing::{error, info};

use crate::{CliError, Result};

/// Run the price command
#[allow(clippy::too_many_arguments)]
pub fn run(
    spot: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    expiry: f64,
    steps: usize,
    walks: usize,
    seed: &str,
    format: &str,
) -> Result<()> {
    let seed = parse_seed(seed);

    // Report every validation problem at once, before touching the engine
    let mut violations = MarketParams::validate(spot, strike, rate, volatility, expiry);
    violations.extend(SimulationParams::validate(steps, walks));
    if !violations.is_empty() {
        for violation in &violations {
            eprintln!("error: {}", violation);
        }
        return Err(CliError::Validation(violations.len()));
    }

    // Constructors cannot fail past this point; validation ran above
    let market = MarketParams::new(spot, strike, rate, volatility, expiry)
        .map_err(|_| CliError::Calculation)?;
    let sim = SimulationParams::builder()
        .n_steps(steps)
        .n_walks(walks)
        .seed(seed)
        .build()
        .map_err(|_| CliError::Calculation)?;

    info!("Starting pricing run...");
    info!("  S0 = {}, K = {}, r = {}, sigma = {}, T = {}", spot, strike, rate, volatility, expiry);
    info!("  steps = {}, walks = {}, seed = {}", steps, walks, seed);

    let result = PricingEngine::new().price(&market, &sim).map_err(|err| {
        error!("Pricing engine failed: {}", err);
        CliError::Calculation
    })?;

    info!(
        "Black-Scholes Call: ${:.4} Put: ${:.4}",
        result.analytic_call, result.analytic_put
    );
    info!(
        "Walk Call: ${:.4} Put: ${:.4}",
        result.walk_call, result.walk_put
    );
    info!(
        "Call Error: {:.2}% Put Error: {:.2}%",
        result.call_relative_error_pct, result.put_relative_error_pct
    );

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        "table" => {
            println!("\n┌──────────────────┬──────────────┬──────────────┐");
            println!("│                  │ Call         │ Put          │");
            println!("├──────────────────┼──────────────┼──────────────┤");
            println!(
                "│ Black-Scholes    │ {:>12.4} │ {:>12.4} │",
                result.analytic_call, result.analytic_put
            );
            println!(
                "│ Random walk      │ {:>12.4} │ {:>12.4} │",
                result.walk_call, result.walk_put
            );
            println!(
                "│ Relative error % │ {:>12.2} │ {:>12.2} │",
                result.call_relative_error_pct, result.put_relative_error_pct
            );
            println!("└──────────────────┴──────────────┴──────────────┘");
            println!(
                "\nDistribution: {} distinct positions in [{}, {}], mean {:.4}, std dev {:.4}",
                result.stats.num_positions,
                result.stats.min_position,
                result.stats.max_position,
                result.stats.mean_position,
                result.stats.std_dev,
            );
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: table, json",
                other
            )));
        }
    }

    info!("Pricing complete");
    Ok(())
}

/// Interprets the seed argument as an integer when it parses as one, and
/// as a phrase otherwise.
fn parse_seed(raw: &str) -> Seed {
    match raw.parse::<u64>() {
        Ok(value) => Seed::from(value),
        Err(_) => Seed::from_phrase(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_seed_parses_as_integer() {
        assert_eq!(parse_seed("42"), Seed::from(42_u64));
    }

    #[test]
    fn textual_seed_falls_back_to_phrase_hash() {
        assert_eq!(parse_seed("pilot run"), Seed::from_phrase("pilot run"));
        assert_ne!(parse_seed("pilot run"), parse_seed("42"));
    }

    #[test]
    fn negative_number_is_treated_as_phrase() {
        // u64 parsing rejects the sign, so "-1" hashes as text
        assert_eq!(parse_seed("-1"), Seed::from_phrase("-1"));
    }

    #[test]
    fn invalid_input_never_reaches_the_engine() {
        let result = run(-1.0, 100.0, 0.02, 0.2, 5.0, 100, 500, "42", "table");
        assert!(matches!(result, Err(CliError::Validation(1))));
    }

    #[test]
    fn all_violations_counted() {
        let result = run(-1.0, 0.0, 0.02, 0.2, 5.0, 0, 500, "42", "table");
        assert!(matches!(result, Err(CliError::Validation(3))));
    }

    #[test]
    fn unknown_format_rejected() {
        let result = run(100.0, 100.0, 0.02, 0.2, 5.0, 10, 10, "42", "xml");
        assert!(matches!(result, Err(CliError::InvalidArgument(_))));
    }
}
