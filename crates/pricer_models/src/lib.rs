//! # pricer_models: Analytical Models for the QRW Pricing Workspace
//!
//! ## Layer 2 (Analytics) Role
//!
//! pricer_models provides the closed-form benchmark that the walk-based
//! Monte Carlo engine is measured against:
//! - Black-Scholes European call/put pricing (`analytical::black_scholes`)
//!
//! Inputs arrive as pre-validated [`pricer_core::types::MarketParams`], so
//! the models themselves perform no defensive checks: sigma > 0 and T > 0
//! are guaranteed by construction and the d1/d2 denominators never vanish.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::types::MarketParams;
//! use pricer_models::analytical::BlackScholes;
//!
//! let market = MarketParams::new(100.0, 100.0, 0.05, 0.2, 1.0).unwrap();
//! let bs = BlackScholes::new(market);
//!
//! // Put-call parity: C - P = S - K*exp(-rT)
//! let parity = bs.price_call() - bs.price_put()
//!     - (market.spot() - market.strike() * market.discount_factor());
//! assert!(parity.abs() < 1e-10);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
