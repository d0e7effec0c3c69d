//! Discretised stock-price distribution over walk outcomes.
//!
//! Final walk positions are tallied into an empirical probability
//! distribution; each distinct position maps to a stock price through the
//! CRR-style multiplicative factors u = e^(σ√dt), d = 1/u, and carries
//! call/put payoffs against the strike.
//!
//! The tally uses an offset-indexed array (index = position + n_steps)
//! instead of a hash map: positions are small bounded integers, so this
//! avoids hashing and yields ascending position order without a sort.

use pricer_core::types::MarketParams;

use crate::error::EngineError;

/// One entry of the empirical price distribution.
///
/// A bucket per distinct final walk position, carrying the empirical
/// frequency, the implied stock price at that lattice level, and the
/// intrinsic call/put payoffs at that price.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PositionBucket {
    /// Net walk displacement, in [-n_steps, n_steps].
    pub position: i64,
    /// Empirical frequency count/n_walks, in (0, 1].
    pub probability: f64,
    /// Discretised stock price S0·u^p (p ≥ 0) or S0·d^|p| (p < 0).
    pub price: f64,
    /// max(price - K, 0).
    pub call_payoff: f64,
    /// max(K - price, 0).
    pub put_payoff: f64,
}

/// Probability-weighted summary statistics of the position distribution.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DistributionStats {
    /// Probability-weighted mean position Σ p·P(p).
    pub mean_position: f64,
    /// Probability-weighted standard deviation √(Σ (p-mean)²·P(p)).
    pub std_dev: f64,
    /// Smallest observed position.
    pub min_position: i64,
    /// Largest observed position.
    pub max_position: i64,
    /// Number of distinct observed positions.
    pub num_positions: usize,
}

/// Builds the empirical price distribution and its summary statistics.
///
/// # Arguments
/// * `market` - Validated market parameters (supplies S0, K, sigma, T)
/// * `n_steps` - Step count used to generate `positions`; fixes dt = T/n_steps
/// * `positions` - Final walk positions, one per trial, each in
///   `[-n_steps, n_steps]`
///
/// # Returns
/// Buckets in ascending position order with probabilities summing to 1,
/// plus the derived [`DistributionStats`].
///
/// # Errors
/// [`EngineError::DegenerateDistribution`] if `positions` is empty. With
/// validated simulation parameters upstream this cannot occur and signals
/// a logic error in the caller.
///
/// # Examples
/// ```
/// use pricer_core::types::MarketParams;
/// use pricer_pricing::distribution::build_distribution;
///
/// let market = MarketParams::new(100.0, 100.0, 0.02, 0.2, 5.0).unwrap();
/// let (buckets, stats) = build_distribution(&market, 2, &[-2, 0, 0, 2]).unwrap();
///
/// assert_eq!(buckets.len(), 3);
/// assert_eq!(stats.num_positions, 3);
/// assert_eq!(buckets[1].probability, 0.5);
/// ```
pub fn build_distribution(
    market: &MarketParams,
    n_steps: usize,
    positions: &[i64],
) -> Result<(Vec<PositionBucket>, DistributionStats), EngineError> {
    if positions.is_empty() {
        return Err(EngineError::DegenerateDistribution);
    }

    let n_walks = positions.len();

    // CRR-style discretisation of volatility per step
    let dt = market.expiry() / n_steps as f64;
    let up = (market.volatility() * dt.sqrt()).exp();
    let down = 1.0 / up;

    // Offset-indexed tally: index = position + n_steps
    let offset = n_steps as i64;
    let mut counts = vec![0_usize; 2 * n_steps + 1];
    for &position in positions {
        counts[(position + offset) as usize] += 1;
    }

    let mut buckets = Vec::new();
    for (index, &count) in counts.iter().enumerate() {
        if count == 0 {
            continue;
        }

        let position = index as i64 - offset;
        let probability = count as f64 / n_walks as f64;

        let price = if position >= 0 {
            market.spot() * up.powi(position as i32)
        } else {
            market.spot() * down.powi(-position as i32)
        };

        buckets.push(PositionBucket {
            position,
            probability,
            price,
            call_payoff: (price - market.strike()).max(0.0),
            put_payoff: (market.strike() - price).max(0.0),
        });
    }

    let mean_position: f64 = buckets
        .iter()
        .map(|b| b.position as f64 * b.probability)
        .sum();
    let variance: f64 = buckets
        .iter()
        .map(|b| {
            let deviation = b.position as f64 - mean_position;
            deviation * deviation * b.probability
        })
        .sum();

    let stats = DistributionStats {
        mean_position,
        std_dev: variance.sqrt(),
        min_position: buckets.first().map(|b| b.position).unwrap_or(0),
        max_position: buckets.last().map(|b| b.position).unwrap_or(0),
        num_positions: buckets.len(),
    };

    Ok((buckets, stats))
}
