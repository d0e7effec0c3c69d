//! Validated parameter types for a pricing run.
//!
//! Two input bundles drive every pricing run:
//! - [`MarketParams`]: the five Black-Scholes market inputs, all strictly
//!   positive, validated at construction.
//! - [`SimulationParams`]: walk simulation controls (step count, walk count,
//!   seed), built through [`SimulationParamsBuilder`] with validation at
//!   build time.
//!
//! Validation lives in the constructors so that downstream layers can assume
//! well-formed input and stay free of defensive checks.

use super::error::ParamError;

/// Maximum number of walk simulations allowed.
pub const MAX_WALKS: usize = 10_000_000;

/// Maximum number of steps allowed per walk.
pub const MAX_STEPS: usize = 10_000;

/// Reproducibility seed for the walk simulator.
///
/// A thin newtype over `u64`. Integer seeds convert directly; textual seeds
/// are folded to a `u64` with FNV-1a so that a phrase can stand in for a
/// number, matching the seed-as-string convention of dashboard front ends.
///
/// # Examples
/// ```
/// use pricer_core::types::Seed;
///
/// let a = Seed::from(42);
/// assert_eq!(a.value(), 42);
///
/// // Same phrase, same seed
/// assert_eq!(Seed::from_phrase("pilot run"), Seed::from_phrase("pilot run"));
/// assert_ne!(Seed::from_phrase("pilot run"), Seed::from_phrase("prod run"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Seed(u64);

impl Seed {
    /// Derives a seed from an arbitrary phrase using the FNV-1a hash.
    pub fn from_phrase(phrase: &str) -> Self {
        const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
        const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

        let mut hash = FNV_OFFSET;
        for byte in phrase.as_bytes() {
            hash ^= u64::from(*byte);
            hash = hash.wrapping_mul(FNV_PRIME);
        }
        Seed(hash)
    }

    /// Returns the underlying 64-bit seed value.
    #[inline]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for Seed {
    /// The documented default seed of the reference parameter set.
    fn default() -> Self {
        Seed(42)
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Seed(value)
    }
}

impl std::fmt::Display for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Market parameters for a European option.
///
/// Immutable once constructed; every field is strictly positive. Consumed
/// read-only by both the analytic pricer and the walk-based engine.
///
/// # Examples
/// ```
/// use pricer_core::types::MarketParams;
///
/// let market = MarketParams::new(100.0, 100.0, 0.02, 0.2, 5.0).unwrap();
/// assert_eq!(market.strike(), 100.0);
///
/// // Zero volatility is rejected at construction
/// assert!(MarketParams::new(100.0, 100.0, 0.02, 0.0, 5.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MarketParams {
    /// Initial stock price (S0).
    spot: f64,
    /// Strike price (K).
    strike: f64,
    /// Annualised risk-free rate (r).
    rate: f64,
    /// Annualised volatility (sigma).
    volatility: f64,
    /// Time to maturity in years (T).
    expiry: f64,
}

impl MarketParams {
    /// Creates a validated parameter set.
    ///
    /// # Arguments
    /// * `spot` - Initial stock price S0
    /// * `strike` - Strike price K
    /// * `rate` - Annualised risk-free rate r
    /// * `volatility` - Annualised volatility sigma
    /// * `expiry` - Time to maturity T in years
    ///
    /// # Errors
    /// Returns the first [`ParamError`] in field order if any field is not
    /// strictly positive (NaN also fails, since NaN comparisons are false).
    pub fn new(
        spot: f64,
        strike: f64,
        rate: f64,
        volatility: f64,
        expiry: f64,
    ) -> Result<Self, ParamError> {
        match Self::validate(spot, strike, rate, volatility, expiry).into_iter().next() {
            Some(err) => Err(err),
            None => Ok(Self {
                spot,
                strike,
                rate,
                volatility,
                expiry,
            }),
        }
    }

    /// Checks all five fields and returns every violation found.
    ///
    /// Useful at an interactive boundary where the full list of problems
    /// should be reported at once rather than one failure at a time.
    pub fn validate(
        spot: f64,
        strike: f64,
        rate: f64,
        volatility: f64,
        expiry: f64,
    ) -> Vec<ParamError> {
        let mut errors = Vec::new();

        // NaN compares false against everything, so it needs its own check
        if spot <= 0.0 || spot.is_nan() {
            errors.push(ParamError::NonPositiveSpot { spot });
        }
        if strike <= 0.0 || strike.is_nan() {
            errors.push(ParamError::NonPositiveStrike { strike });
        }
        if rate <= 0.0 || rate.is_nan() {
            errors.push(ParamError::NonPositiveRate { rate });
        }
        if volatility <= 0.0 || volatility.is_nan() {
            errors.push(ParamError::NonPositiveVolatility { volatility });
        }
        if expiry <= 0.0 || expiry.is_nan() {
            errors.push(ParamError::NonPositiveExpiry { expiry });
        }

        errors
    }

    /// Returns the initial stock price S0.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike price K.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the annualised risk-free rate r.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the annualised volatility sigma.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the time to maturity T in years.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Returns the discount factor e^(-rT) to present value.
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.expiry).exp()
    }
}

/// Walk simulation parameters.
///
/// Immutable configuration for one pricing run. Identical
/// `MarketParams` + `SimulationParams` yield bit-identical simulator output.
/// Use [`SimulationParams::builder`] to construct instances.
///
/// # Examples
/// ```
/// use pricer_core::types::SimulationParams;
///
/// let sim = SimulationParams::builder()
///     .n_steps(100)
///     .n_walks(500)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(sim.n_steps(), 100);
/// assert_eq!(sim.n_walks(), 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SimulationParams {
    /// Number of ±1 steps per walk.
    n_steps: usize,
    /// Number of independent walks.
    n_walks: usize,
    /// Reproducibility seed.
    seed: Seed,
}

impl SimulationParams {
    /// Creates a new builder.
    #[inline]
    pub fn builder() -> SimulationParamsBuilder {
        SimulationParamsBuilder::default()
    }

    /// Returns the number of steps per walk.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the number of independent walks.
    #[inline]
    pub fn n_walks(&self) -> usize {
        self.n_walks
    }

    /// Returns the reproducibility seed.
    #[inline]
    pub fn seed(&self) -> Seed {
        self.seed
    }

    /// Checks both counts and returns every violation found.
    pub fn validate(n_steps: usize, n_walks: usize) -> Vec<ParamError> {
        let mut errors = Vec::new();

        if n_steps == 0 || n_steps > MAX_STEPS {
            errors.push(ParamError::InvalidStepCount(n_steps));
        }
        if n_walks == 0 || n_walks > MAX_WALKS {
            errors.push(ParamError::InvalidWalkCount(n_walks));
        }

        errors
    }
}

/// Builder for [`SimulationParams`].
///
/// Validates counts at build time; the seed defaults to
/// [`Seed::default`] (42) when not supplied.
#[derive(Debug, Clone, Default)]
pub struct SimulationParamsBuilder {
    n_steps: Option<usize>,
    n_walks: Option<usize>,
    seed: Seed,
}

impl SimulationParamsBuilder {
    /// Sets the number of steps per walk, in [1, [`MAX_STEPS`]].
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = Some(n_steps);
        self
    }

    /// Sets the number of independent walks, in [1, [`MAX_WALKS`]].
    #[inline]
    pub fn n_walks(mut self, n_walks: usize) -> Self {
        self.n_walks = Some(n_walks);
        self
    }

    /// Sets the reproducibility seed.
    #[inline]
    pub fn seed(mut self, seed: impl Into<Seed>) -> Self {
        self.seed = seed.into();
        self
    }

    /// Builds the parameter set.
    ///
    /// # Errors
    /// Returns [`ParamError::InvalidStepCount`] or
    /// [`ParamError::InvalidWalkCount`] when a count is missing, zero, or
    /// above its bound.
    pub fn build(self) -> Result<SimulationParams, ParamError> {
        let n_steps = self.n_steps.unwrap_or(0);
        let n_walks = self.n_walks.unwrap_or(0);

        match SimulationParams::validate(n_steps, n_walks).into_iter().next() {
            Some(err) => Err(err),
            None => Ok(SimulationParams {
                n_steps,
                n_walks,
                seed: self.seed,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================
    // Seed
    // ==========================================================

    #[test]
    fn seed_from_integer() {
        let seed = Seed::from(12345_u64);
        assert_eq!(seed.value(), 12345);
    }

    #[test]
    fn seed_default_is_42() {
        assert_eq!(Seed::default().value(), 42);
    }

    #[test]
    fn seed_from_phrase_is_deterministic() {
        let a = Seed::from_phrase("reproducible");
        let b = Seed::from_phrase("reproducible");
        assert_eq!(a, b);
    }

    #[test]
    fn seed_from_different_phrases_differ() {
        assert_ne!(Seed::from_phrase("alpha"), Seed::from_phrase("beta"));
    }

    #[test]
    fn seed_from_empty_phrase_is_fnv_offset() {
        assert_eq!(Seed::from_phrase("").value(), 0xcbf2_9ce4_8422_2325);
    }

    // ==========================================================
    // MarketParams
    // ==========================================================

    #[test]
    fn market_params_valid() {
        let market = MarketParams::new(100.0, 95.0, 0.02, 0.2, 5.0).unwrap();
        assert_eq!(market.spot(), 100.0);
        assert_eq!(market.strike(), 95.0);
        assert_eq!(market.rate(), 0.02);
        assert_eq!(market.volatility(), 0.2);
        assert_eq!(market.expiry(), 5.0);
    }

    #[test]
    fn market_params_rejects_each_field() {
        assert_eq!(
            MarketParams::new(0.0, 100.0, 0.02, 0.2, 5.0).unwrap_err(),
            ParamError::NonPositiveSpot { spot: 0.0 }
        );
        assert_eq!(
            MarketParams::new(100.0, -1.0, 0.02, 0.2, 5.0).unwrap_err(),
            ParamError::NonPositiveStrike { strike: -1.0 }
        );
        assert_eq!(
            MarketParams::new(100.0, 100.0, 0.0, 0.2, 5.0).unwrap_err(),
            ParamError::NonPositiveRate { rate: 0.0 }
        );
        assert_eq!(
            MarketParams::new(100.0, 100.0, 0.02, 0.0, 5.0).unwrap_err(),
            ParamError::NonPositiveVolatility { volatility: 0.0 }
        );
        assert_eq!(
            MarketParams::new(100.0, 100.0, 0.02, 0.2, 0.0).unwrap_err(),
            ParamError::NonPositiveExpiry { expiry: 0.0 }
        );
    }

    #[test]
    fn market_params_rejects_nan() {
        assert!(MarketParams::new(f64::NAN, 100.0, 0.02, 0.2, 5.0).is_err());
    }

    #[test]
    fn market_params_validate_collects_all_errors() {
        let errors = MarketParams::validate(-1.0, 0.0, 0.02, -0.2, 5.0);
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn discount_factor_matches_definition() {
        let market = MarketParams::new(100.0, 100.0, 0.02, 0.2, 5.0).unwrap();
        assert!((market.discount_factor() - (-0.1_f64).exp()).abs() < 1e-15);
    }

    // ==========================================================
    // SimulationParams
    // ==========================================================

    #[test]
    fn simulation_params_builder_valid() {
        let sim = SimulationParams::builder()
            .n_steps(100)
            .n_walks(500)
            .seed(42)
            .build()
            .unwrap();

        assert_eq!(sim.n_steps(), 100);
        assert_eq!(sim.n_walks(), 500);
        assert_eq!(sim.seed().value(), 42);
    }

    #[test]
    fn simulation_params_default_seed() {
        let sim = SimulationParams::builder()
            .n_steps(10)
            .n_walks(10)
            .build()
            .unwrap();
        assert_eq!(sim.seed(), Seed::default());
    }

    #[test]
    fn simulation_params_phrase_seed() {
        let sim = SimulationParams::builder()
            .n_steps(10)
            .n_walks(10)
            .seed(Seed::from_phrase("desk demo"))
            .build()
            .unwrap();
        assert_eq!(sim.seed(), Seed::from_phrase("desk demo"));
    }

    #[test]
    fn simulation_params_rejects_zero_steps() {
        let result = SimulationParams::builder().n_steps(0).n_walks(10).build();
        assert!(matches!(result, Err(ParamError::InvalidStepCount(0))));
    }

    #[test]
    fn simulation_params_rejects_zero_walks() {
        let result = SimulationParams::builder().n_steps(10).n_walks(0).build();
        assert!(matches!(result, Err(ParamError::InvalidWalkCount(0))));
    }

    #[test]
    fn simulation_params_rejects_counts_above_bounds() {
        let result = SimulationParams::builder()
            .n_steps(MAX_STEPS + 1)
            .n_walks(10)
            .build();
        assert!(matches!(result, Err(ParamError::InvalidStepCount(_))));

        let result = SimulationParams::builder()
            .n_steps(10)
            .n_walks(MAX_WALKS + 1)
            .build();
        assert!(matches!(result, Err(ParamError::InvalidWalkCount(_))));
    }

    #[test]
    fn simulation_params_missing_counts() {
        assert!(SimulationParams::builder().n_walks(10).build().is_err());
        assert!(SimulationParams::builder().n_steps(10).build().is_err());
    }
}
