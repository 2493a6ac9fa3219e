//! Profit Apportionment
//!
//! Splits each scenario's reward pool between the three competitors:
//!
//! - Stable (1): 50-60% of the pool
//! - Moderate (2): 20-30% of the pool, plus any residual
//! - Aggressive (3): whatever remains, never below zero
//!
//! All Competitor 1 draws happen before any Competitor 2 draw, so the first
//! row's Competitor 1 share does not depend on how many rows follow it.
//! Every call reseeds its own generator.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Uniform};
use tracing::debug;

use crate::scenario::Scenario;

pub const DEFAULT_SEED: u64 = 42;

pub const STABLE_SHARE: (f64, f64) = (0.5, 0.6);
pub const MODERATE_SHARE: (f64, f64) = (0.2, 0.3);

/// Floors the Aggressive share at zero and folds what is left over (or
/// overdrawn) into the Moderate share.
pub fn settle_shares(max_reward: f64, stable: f64, moderate: f64) -> [f64; 3] {
    let aggressive = (max_reward - (stable + moderate)).max(0.0);
    let moderate = moderate + (max_reward - (stable + moderate + aggressive));
    [stable, moderate, aggressive]
}

pub fn apportion(rows: &mut [Scenario], seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let stable_dist = Uniform::new(STABLE_SHARE.0, STABLE_SHARE.1);
    let moderate_dist = Uniform::new(MODERATE_SHARE.0, MODERATE_SHARE.1);

    let stable: Vec<f64> = rows
        .iter()
        .map(|row| row.max_reward * stable_dist.sample(&mut rng))
        .collect();
    let moderate: Vec<f64> = rows
        .iter()
        .map(|row| row.max_reward * moderate_dist.sample(&mut rng))
        .collect();

    for ((row, s), m) in rows.iter_mut().zip(stable).zip(moderate) {
        let shares = settle_shares(row.max_reward, s, m);
        row.set_profits(shares);
    }

    debug!(rows = rows.len(), seed, "apportioned profits");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::fixture;
    use crate::partition::PartitionKind;

    fn single(max_reward: f64) -> Vec<Scenario> {
        vec![Scenario::new(0.65, 0.2, 0.01, 0.01, max_reward)]
    }

    #[test]
    fn test_shares_sum_to_max_reward() {
        for kind in PartitionKind::all() {
            let mut rows = fixture(kind);
            apportion(&mut rows, DEFAULT_SEED);

            for row in &rows {
                let total: f64 = row.profits().iter().sum();
                assert!((total - row.max_reward).abs() < 1e-6);
                assert!(row.profits().iter().all(|&p| p >= 0.0));
                assert!(row.is_balanced());
            }
        }
    }

    #[test]
    fn test_share_ranges() {
        let mut rows = fixture(PartitionKind::Baseline);
        apportion(&mut rows, DEFAULT_SEED);

        for row in &rows {
            let stable = row.competitor_1_profit / row.max_reward;
            let moderate = row.competitor_2_profit / row.max_reward;
            assert!(stable >= 0.5 && stable < 0.6);
            assert!(moderate >= 0.2 - 1e-9 && moderate <= 0.3 + 1e-9);
            assert!(row.competitor_3_profit / row.max_reward > 0.1 - 1e-9);
        }
    }

    #[test]
    fn test_deterministic_for_seed() {
        let mut first = fixture(PartitionKind::Changing);
        let mut second = fixture(PartitionKind::Changing);
        apportion(&mut first, DEFAULT_SEED);
        apportion(&mut second, DEFAULT_SEED);

        for (a, b) in first.iter().zip(second.iter()) {
            for (x, y) in a.profits().iter().zip(b.profits().iter()) {
                assert_eq!(x.to_bits(), y.to_bits());
            }
        }

        let mut other = fixture(PartitionKind::Changing);
        apportion(&mut other, DEFAULT_SEED + 1);
        assert_ne!(first[0].competitor_1_profit, other[0].competitor_1_profit);
    }

    #[test]
    fn test_known_reward_pool() {
        let mut rows = single(1_309_906.0);
        apportion(&mut rows, 42);
        let [c1, c2, c3] = rows[0].profits();

        assert!((c1 + c2 + c3 - 1_309_906.0).abs() < 1e-6);
        assert!(c3 >= 0.0);

        let mut again = single(1_309_906.0);
        apportion(&mut again, 42);
        assert_eq!(rows, again);
    }

    #[test]
    fn test_stable_draws_precede_moderate_draws() {
        let mut one = single(1_000_000.0);
        let mut two = vec![one[0].clone(), one[0].clone()];
        apportion(&mut one, DEFAULT_SEED);
        apportion(&mut two, DEFAULT_SEED);

        assert_eq!(one[0].competitor_1_profit, two[0].competitor_1_profit);
        assert_ne!(one[0].competitor_2_profit, two[0].competitor_2_profit);
    }

    #[test]
    fn test_settle_floors_aggressive_share() {
        let [stable, moderate, aggressive] = settle_shares(100.0, 70.0, 40.0);
        assert_eq!(aggressive, 0.0);
        assert_eq!(stable, 70.0);
        assert!((moderate - 30.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_input() {
        let mut rows: Vec<Scenario> = Vec::new();
        apportion(&mut rows, DEFAULT_SEED);
        assert!(rows.is_empty());
    }
}
