//! Black-Scholes pricing for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·Φ(d₁) - K·e^(-rT)·Φ(d₂)
//! **Put Price**: P = K·e^(-rT)·Φ(-d₂) - S·Φ(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use pricer_core::math::distributions::norm_cdf;
use pricer_core::types::MarketParams;

/// Black-Scholes model for European option pricing.
///
/// Wraps a validated [`MarketParams`] and exposes closed-form call and put
/// prices. Because `MarketParams` guarantees sigma > 0 and T > 0, the d1/d2
/// terms are always well defined and both prices are strictly positive.
///
/// # Examples
/// ```
/// use pricer_core::types::MarketParams;
/// use pricer_models::analytical::BlackScholes;
///
/// let market = MarketParams::new(100.0, 100.0, 0.05, 0.2, 1.0).unwrap();
/// let bs = BlackScholes::new(market);
///
/// // ATM call, S=K=100, r=0.05, sigma=0.2, T=1 => approx 10.45
/// assert!((bs.price_call() - 10.4506).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BlackScholes {
    market: MarketParams,
}

impl BlackScholes {
    /// Creates a model over an already-validated parameter set.
    #[inline]
    pub fn new(market: MarketParams) -> Self {
        Self { market }
    }

    /// Returns the underlying market parameters.
    #[inline]
    pub fn market(&self) -> &MarketParams {
        &self.market
    }

    /// Computes the d1 term.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    #[inline]
    pub fn d1(&self) -> f64 {
        let m = &self.market;
        let vol_sqrt_t = m.volatility() * m.expiry().sqrt();

        let log_moneyness = (m.spot() / m.strike()).ln();
        let drift = (m.rate() + 0.5 * m.volatility() * m.volatility()) * m.expiry();

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes the d2 term.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self) -> f64 {
        self.d1() - self.market.volatility() * self.market.expiry().sqrt()
    }

    /// Computes the European call price.
    ///
    /// C = S·Φ(d₁) - K·e^(-rT)·Φ(d₂)
    #[inline]
    pub fn price_call(&self) -> f64 {
        let m = &self.market;
        m.spot() * norm_cdf(self.d1()) - m.strike() * m.discount_factor() * norm_cdf(self.d2())
    }

    /// Computes the European put price.
    ///
    /// P = K·e^(-rT)·Φ(-d₂) - S·Φ(-d₁)
    #[inline]
    pub fn price_put(&self) -> f64 {
        let m = &self.market;
        m.strike() * m.discount_factor() * norm_cdf(-self.d2()) - m.spot() * norm_cdf(-self.d1())
    }
}
