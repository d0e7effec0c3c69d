//! # pricer_pricing: Walk-Based Monte Carlo Engine (Layer 3)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing hosts the simulation side of the workspace:
//! - Seeded pseudo-random number generation (`rng`)
//! - Symmetric ±1 lattice walk simulation (`walk`)
//! - Walk-outcome to price-distribution mapping (`distribution`)
//! - End-to-end pricing orchestration against the Black-Scholes
//!   benchmark (`engine`)
//!
//! The engine is a pure request→response computation: no I/O, no shared
//! mutable state, no retained state between calls. Each pricing run owns a
//! fresh RNG stream keyed by the caller's seed, so identical inputs yield
//! bit-identical results.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::types::{MarketParams, SimulationParams};
//! use pricer_pricing::engine::PricingEngine;
//!
//! let market = MarketParams::new(100.0, 100.0, 0.02, 0.2, 5.0).unwrap();
//! let sim = SimulationParams::builder()
//!     .n_steps(100)
//!     .n_walks(500)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let result = PricingEngine::new().price(&market, &sim).unwrap();
//! assert!(result.call_relative_error_pct.is_finite());
//! assert!(result.call_relative_error_pct >= 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod distribution;
pub mod engine;
pub mod error;
pub mod rng;
pub mod walk;

pub use distribution::{DistributionStats, PositionBucket};
pub use engine::{PricingEngine, PricingResult};
pub use error::EngineError;
