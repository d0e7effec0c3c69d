//! Random number generation for the walk simulator.
//!
//! Design points:
//! - **Reproducibility**: every generator is seeded; the same seed always
//!   produces the same sequence for the same implementation.
//! - **Isolation**: streams are created fresh per pricing run and share no
//!   state. There is no process-wide RNG.
//! - **Efficiency**: batch filling via `&mut [f64]` slices, no allocation
//!   in the hot path.

mod prng;

pub use prng::WalkRng;
