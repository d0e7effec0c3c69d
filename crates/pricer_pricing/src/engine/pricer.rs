//! Pricing engine orchestrating one full comparison run.
//!
//! One invocation per "calculate" action:
//! 1. Closed-form call/put via [`BlackScholes`]
//! 2. Walk simulation via [`walk::simulate`](crate::walk::simulate)
//! 3. Distribution build via
//!    [`build_distribution`](crate::distribution::build_distribution)
//! 4. Discounted expected payoffs e^(-rT)·Σ P(p)·payoff(p)
//! 5. Relative error against the analytic benchmark, in percent
//!
//! The engine keeps no state between calls: identical inputs yield a
//! bit-identical [`PricingResult`].

use pricer_core::types::{MarketParams, SimulationParams};
use pricer_models::analytical::BlackScholes;

use crate::distribution::{build_distribution, DistributionStats, PositionBucket};
use crate::error::EngineError;
use crate::walk;

/// Immutable snapshot of one full pricing run.
///
/// Owned exclusively by the caller that requested it; the engine retains
/// nothing. Callers read `distribution` as an ordered sequence for charting,
/// `stats` for summary display, and the price/error fields for headline
/// numbers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PricingResult {
    /// Black-Scholes call price.
    pub analytic_call: f64,
    /// Black-Scholes put price.
    pub analytic_put: f64,
    /// Discounted expected call payoff over the walk distribution.
    pub walk_call: f64,
    /// Discounted expected put payoff over the walk distribution.
    pub walk_put: f64,
    /// |walk_call - analytic_call| / analytic_call · 100.
    pub call_relative_error_pct: f64,
    /// |walk_put - analytic_put| / analytic_put · 100.
    pub put_relative_error_pct: f64,
    /// Empirical price distribution, ascending by position.
    pub distribution: Vec<PositionBucket>,
    /// Summary statistics of the position distribution.
    pub stats: DistributionStats,
}

/// Walk-versus-analytic pricing engine.
///
/// Stateless and re-entrant: each [`price`](PricingEngine::price) call owns
/// a fresh RNG stream keyed by the simulation seed, so concurrent
/// independent runs are safe without locking.
///
/// # Examples
/// ```
/// use pricer_core::types::{MarketParams, SimulationParams};
/// use pricer_pricing::engine::PricingEngine;
///
/// let market = MarketParams::new(100.0, 100.0, 0.02, 0.2, 5.0).unwrap();
/// let sim = SimulationParams::builder()
///     .n_steps(100)
///     .n_walks(500)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let engine = PricingEngine::new();
/// let first = engine.price(&market, &sim).unwrap();
/// let second = engine.price(&market, &sim).unwrap();
/// assert_eq!(first, second);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PricingEngine;

impl PricingEngine {
    /// Creates a new engine.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Runs one full pricing comparison.
    ///
    /// # Arguments
    /// * `market` - Validated market parameters
    /// * `sim` - Validated simulation parameters
    ///
    /// # Returns
    /// The complete [`PricingResult`] bundle. Relative errors are finite
    /// and non-negative: positive market parameters guarantee a strictly
    /// positive analytic denominator.
    ///
    /// # Errors
    /// [`EngineError::DegenerateDistribution`] if the simulator produced no
    /// positions, which cannot happen for validated parameters.
    pub fn price(
        &self,
        market: &MarketParams,
        sim: &SimulationParams,
    ) -> Result<PricingResult, EngineError> {
        let analytic = BlackScholes::new(*market);
        let analytic_call = analytic.price_call();
        let analytic_put = analytic.price_put();

        let positions = walk::simulate(sim);
        let (distribution, stats) = build_distribution(market, sim.n_steps(), &positions)?;

        let expected_call: f64 = distribution
            .iter()
            .map(|b| b.probability * b.call_payoff)
            .sum();
        let expected_put: f64 = distribution
            .iter()
            .map(|b| b.probability * b.put_payoff)
            .sum();

        let discount = market.discount_factor();
        let walk_call = discount * expected_call;
        let walk_put = discount * expected_put;

        Ok(PricingResult {
            analytic_call,
            analytic_put,
            walk_call,
            walk_put,
            call_relative_error_pct: relative_error_pct(walk_call, analytic_call),
            put_relative_error_pct: relative_error_pct(walk_put, analytic_put),
            distribution,
            stats,
        })
    }
}

/// |estimate - benchmark| / benchmark, in percent.
#[inline]
fn relative_error_pct(estimate: f64, benchmark: f64) -> f64 {
    (estimate - benchmark).abs() / benchmark * 100.0
}
