//! Analytical pricing formulas for European options.
//!
//! Currently a single model:
//! - Black-Scholes for lognormal dynamics
//!
//! The normal CDF comes from `pricer_core::math::distributions`, which uses
//! an erfc-based approximation that is stable far into the tails.

pub mod black_scholes;

pub use black_scholes::BlackScholes;
