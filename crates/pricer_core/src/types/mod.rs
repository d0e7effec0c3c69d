//! Core parameter and error types.

pub mod error;
pub mod params;

pub use error::ParamError;
pub use params::{
    MarketParams, Seed, SimulationParams, SimulationParamsBuilder, MAX_STEPS, MAX_WALKS,
};
