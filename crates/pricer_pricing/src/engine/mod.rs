//! Pricing orchestration: analytic benchmark versus walk-based estimate.

mod pricer;

pub use pricer::{PricingEngine, PricingResult};
