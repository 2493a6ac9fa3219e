//! Per-partition profit summary printed by the binaries.

use crate::scenario::{Competitor, Scenario};

#[derive(Debug, Clone, PartialEq)]
pub struct PartitionSummary {
    pub rows: usize,
    pub mean_max_reward: f64,
    /// Indexed by competitor number minus one.
    pub mean_profit: [f64; 3],
    pub mean_share: [f64; 3],
    pub max_abs_residual: f64,
}

impl PartitionSummary {
    pub fn from_rows(rows: &[Scenario]) -> Self {
        let n = rows.len().max(1) as f64;
        let mut mean_profit = [0.0; 3];
        let mut mean_share = [0.0; 3];

        for row in rows {
            for (i, profit) in row.profits().iter().enumerate() {
                mean_profit[i] += profit / n;
                if row.max_reward > 0.0 {
                    mean_share[i] += profit / row.max_reward / n;
                }
            }
        }

        Self {
            rows: rows.len(),
            mean_max_reward: rows.iter().map(|r| r.max_reward).sum::<f64>() / n,
            mean_profit,
            mean_share,
            max_abs_residual: rows.iter().map(|r| r.residual().abs()).fold(0.0, f64::max),
        }
    }

    pub fn print(&self) {
        println!("  Scenarios:               {}", self.rows);
        println!("  Mean max reward:         {:.0}", self.mean_max_reward);
        for competitor in Competitor::all() {
            let i = competitor.number() - 1;
            println!(
                "  Competitor {} ({:10}) {:>10.0}  ({:.1}%)",
                competitor.number(),
                format!("{}):", competitor.strategy()),
                self.mean_profit[i],
                self.mean_share[i] * 100.0
            );
        }
        println!("  Max sum residual:        {:.2e}", self.max_abs_residual);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apportion::{apportion, DEFAULT_SEED};
    use crate::fixtures::fixture;
    use crate::partition::PartitionKind;

    #[test]
    fn test_summary_of_apportioned_fixture() {
        let mut rows = fixture(PartitionKind::Baseline);
        apportion(&mut rows, DEFAULT_SEED);
        let summary = PartitionSummary::from_rows(&rows);

        assert_eq!(summary.rows, 24);
        assert!((summary.mean_share.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        assert!(summary.mean_share[0] >= 0.5 && summary.mean_share[0] < 0.6);
        assert!(summary.max_abs_residual < 1e-6);
        assert!(
            (summary.mean_profit.iter().sum::<f64>() - summary.mean_max_reward).abs() < 1e-3
        );
    }

    #[test]
    fn test_summary_of_empty_partition() {
        let summary = PartitionSummary::from_rows(&[]);
        assert_eq!(summary.rows, 0);
        assert_eq!(summary.mean_max_reward, 0.0);
        assert_eq!(summary.mean_share, [0.0; 3]);
    }
}
