//! Symmetric ±1 lattice walk simulation.

mod simulator;

pub use simulator::{simulate, simulate_with_rng};
