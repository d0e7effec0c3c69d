//! Walk simulator: independent trials of a symmetric random walk.
//!
//! Each trial starts at position 0 and applies `n_steps` increments, each
//! +1 with probability 0.5 and -1 otherwise. The "quantum walk" naming in
//! the surrounding project is metaphorical: this is a classical symmetric
//! lattice walk acting as a binomial proxy for a diffusing log-price.

use pricer_core::types::SimulationParams;

use crate::rng::WalkRng;

/// Simulates the configured number of walks and returns final positions.
///
/// A fresh RNG stream is instantiated from the configured seed on every
/// call, so repeated invocations with the same parameters are bit-identical
/// and concurrent callers never share state.
///
/// # Arguments
/// * `params` - Validated simulation parameters (steps, walks, seed)
///
/// # Returns
/// One final position per walk, in trial order. Each position lies in
/// `[-n_steps, n_steps]` and has the same parity as `n_steps`.
///
/// # Examples
/// ```
/// use pricer_core::types::SimulationParams;
/// use pricer_pricing::walk::simulate;
///
/// let params = SimulationParams::builder()
///     .n_steps(100)
///     .n_walks(500)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let positions = simulate(&params);
/// assert_eq!(positions.len(), 500);
/// assert!(positions.iter().all(|p| p.abs() <= 100));
/// ```
pub fn simulate(params: &SimulationParams) -> Vec<i64> {
    let mut rng = WalkRng::from_seed(params.seed());
    simulate_with_rng(params.n_steps(), params.n_walks(), &mut rng)
}

/// Simulates walks drawing from a caller-supplied stream.
///
/// One uniform draw per step, thresholded at 0.5: `u < 0.5` steps up,
/// otherwise down. The strict comparison is part of the reproducibility
/// contract and must not be rewritten as `<=`.
///
/// Runs in O(n_steps · n_walks) time with O(n_walks) output space.
pub fn simulate_with_rng(n_steps: usize, n_walks: usize, rng: &mut WalkRng) -> Vec<i64> {
    let mut positions = Vec::with_capacity(n_walks);

    for _ in 0..n_walks {
        let mut position: i64 = 0;

        for _ in 0..n_steps {
            if rng.gen_uniform() < 0.5 {
                position += 1;
            } else {
                position -= 1;
            }
        }

        positions.push(position);
    }

    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn params(n_steps: usize, n_walks: usize, seed: u64) -> SimulationParams {
        SimulationParams::builder()
            .n_steps(n_steps)
            .n_walks(n_walks)
            .seed(seed)
            .build()
            .unwrap()
    }

    #[test]
    fn output_length_matches_walk_count() {
        let positions = simulate(&params(10, 250, 42));
        assert_eq!(positions.len(), 250);
    }

    #[test]
    fn positions_bounded_by_step_count() {
        let positions = simulate(&params(50, 1_000, 42));
        assert!(positions.iter().all(|p| p.abs() <= 50));
    }

    #[test]
    fn positions_share_parity_with_step_count() {
        // After n steps of ±1, position ≡ n (mod 2)
        let odd = simulate(&params(51, 200, 1));
        assert!(odd.iter().all(|p| (p.rem_euclid(2)) == 1));

        let even = simulate(&params(50, 200, 1));
        assert!(even.iter().all(|p| (p.rem_euclid(2)) == 0));
    }

    #[test]
    fn same_seed_reproduces_positions_exactly() {
        let a = simulate(&params(100, 500, 42));
        let b = simulate(&params(100, 500, 42));
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_produce_different_positions() {
        let a = simulate(&params(100, 500, 42));
        let b = simulate(&params(100, 500, 43));
        assert_ne!(a, b);
    }

    #[test]
    fn single_step_single_walk_is_plus_or_minus_one() {
        let positions = simulate(&params(1, 1, 42));
        assert_eq!(positions.len(), 1);
        assert!(positions[0] == 1 || positions[0] == -1);
    }

    #[test]
    fn mean_position_is_near_zero_for_large_samples() {
        // Symmetric walk: the sample mean should sit close to zero
        let positions = simulate(&params(100, 10_000, 7));
        let mean: f64 =
            positions.iter().map(|&p| p as f64).sum::<f64>() / positions.len() as f64;
        // std error of the mean is sqrt(100)/sqrt(10_000) = 0.1
        assert!(mean.abs() < 1.0, "mean {} too far from zero", mean);
    }

    proptest! {
        #[test]
        fn simulate_is_deterministic(
            n_steps in 1_usize..64,
            n_walks in 1_usize..64,
            seed in 0_u64..1_000,
        ) {
            let p = params(n_steps, n_walks, seed);
            prop_assert_eq!(simulate(&p), simulate(&p));
        }

        #[test]
        fn positions_always_in_range(
            n_steps in 1_usize..64,
            n_walks in 1_usize..64,
            seed in 0_u64..1_000,
        ) {
            let positions = simulate(&params(n_steps, n_walks, seed));
            prop_assert!(positions.iter().all(|p| p.unsigned_abs() as usize <= n_steps));
        }
    }
}
