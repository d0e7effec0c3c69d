//! # pricer_core: Foundation Layer for the QRW Pricing Workspace
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Standard normal distribution primitives (`math::distributions`)
//! - Validated parameter types: `MarketParams`, `SimulationParams`, `Seed`
//!   (`types::params`)
//! - Error taxonomy: `ParamError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal
//! external dependencies:
//! - num-traits: traits for generic numerical computation
//! - thiserror: structured error definitions
//! - serde: serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::distributions::norm_cdf;
//! use pricer_core::types::MarketParams;
//!
//! // Validated market parameters
//! let market = MarketParams::new(100.0, 100.0, 0.02, 0.2, 5.0).unwrap();
//! assert_eq!(market.spot(), 100.0);
//!
//! // Standard normal CDF
//! let phi = norm_cdf(0.0_f64);
//! assert!((phi - 0.5).abs() < 1e-7);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
