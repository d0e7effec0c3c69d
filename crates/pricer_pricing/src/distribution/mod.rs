//! Walk-outcome to price-distribution mapping.

mod builder;

pub use builder::{build_distribution, DistributionStats, PositionBucket};
