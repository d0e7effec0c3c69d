//! Error types for the walk-based pricing engine.

use pricer_core::types::ParamError;
use thiserror::Error;

/// Engine-level pricing error.
///
/// The engine performs no I/O, so there are no transient failures here: a
/// run either succeeds deterministically or fails deterministically for the
/// same inputs.
///
/// # Variants
/// - `DegenerateDistribution`: no walk positions reached the distribution
///   builder. With validated [`SimulationParams`](pricer_core::types::SimulationParams)
///   this signals a logic error upstream and is fatal for the run.
/// - `InvalidParameter`: a parameter bundle failed validation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EngineError {
    /// Zero walks or zero distinct positions reached the distribution builder.
    #[error("Degenerate distribution: no walk positions to aggregate")]
    DegenerateDistribution,

    /// Parameter validation failure.
    #[error(transparent)]
    InvalidParameter(#[from] ParamError),
}
