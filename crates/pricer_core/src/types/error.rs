//! Error types for parameter validation.
//!
//! Every variant carries the offending value, and the `Display` text is the
//! human-readable validation message surfaced at the caller boundary before
//! the engine is invoked.

use thiserror::Error;

/// Parameter validation error.
///
/// Produced by [`MarketParams::new`](crate::types::MarketParams::new) and
/// [`SimulationParamsBuilder::build`](crate::types::SimulationParamsBuilder::build)
/// when a field violates its invariant. All market fields must be strictly
/// positive; step and walk counts must be positive integers within the
/// engine bounds.
///
/// # Examples
/// ```
/// use pricer_core::types::{MarketParams, ParamError};
///
/// let err = MarketParams::new(100.0, 100.0, 0.02, -0.2, 5.0).unwrap_err();
/// assert_eq!(err, ParamError::NonPositiveVolatility { volatility: -0.2 });
/// assert!(err.to_string().contains("Volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParamError {
    /// Initial stock price is zero or negative.
    #[error("Initial stock price (S0) must be positive: got {spot}")]
    NonPositiveSpot {
        /// The invalid spot value.
        spot: f64,
    },

    /// Strike price is zero or negative.
    #[error("Strike price (K) must be positive: got {strike}")]
    NonPositiveStrike {
        /// The invalid strike value.
        strike: f64,
    },

    /// Risk-free rate is zero or negative.
    #[error("Risk-free rate (r) must be positive: got {rate}")]
    NonPositiveRate {
        /// The invalid rate value.
        rate: f64,
    },

    /// Volatility is zero or negative.
    #[error("Volatility (sigma) must be positive: got {volatility}")]
    NonPositiveVolatility {
        /// The invalid volatility value.
        volatility: f64,
    },

    /// Time to maturity is zero or negative.
    #[error("Maturity (T) must be positive: got {expiry}")]
    NonPositiveExpiry {
        /// The invalid expiry value.
        expiry: f64,
    },

    /// Step count outside the valid range [1, MAX_STEPS].
    #[error("n_steps must be a positive integer in [1, 10_000]: got {0}")]
    InvalidStepCount(usize),

    /// Walk count outside the valid range [1, MAX_WALKS].
    #[error("n_walks must be a positive integer in [1, 10_000_000]: got {0}")]
    InvalidWalkCount(usize),
}
