//! Literal sweep fixtures for the synthetic variant.
//!
//! Both datasets share the same 3 x 2 x 2 x 2 parameter grid and differ only
//! in their reward pools.

use crate::partition::PartitionKind;
use crate::scenario::Scenario;

pub const FIXTURE_ROWS: usize = 24;

const INERTIA_FACTORS: [f64; 3] = [0.65, 0.75, 0.85];
const SENSITIVITY_MEANS: [f64; 2] = [0.2, 0.3];
const SENSITIVITY_STDS: [f64; 2] = [0.01, 0.05];
const SMOOTHING_FACTORS: [f64; 2] = [0.01, 0.05];

pub const BASELINE_MAX_REWARDS: [f64; FIXTURE_ROWS] = [
    1309906.0, 1236701.0, 1149118.0, 1171631.0, 1074240.0, 1264237.0, 1227460.0, 1338243.0,
    1382157.0, 1282807.0, 1180983.0, 1350838.0, 1038987.0, 1073309.0, 1292268.0, 1239196.0,
    1064827.0, 1138588.0, 1086051.0, 1181636.0, 1307508.0, 1439242.0, 1142314.0, 1125013.0,
];

pub const CHANGING_MAX_REWARDS: [f64; FIXTURE_ROWS] = [
    1275241.0, 1200541.0, 1150207.0, 1418184.0, 1291320.0, 1169130.0, 1342307.0, 1116139.0,
    1047227.0, 1247421.0, 1001624.0, 1128964.0, 1269070.0, 1297992.0, 1069440.0, 1091359.0,
    1256777.0, 1100916.0, 1023912.0, 1150148.0, 1203074.0, 1238640.0, 1228183.0, 1160634.0,
];

/// Grid point for row `i`: inertia changes every 8 rows, mean every 4,
/// std every 2, smoothing every row.
fn grid_point(i: usize) -> (f64, f64, f64, f64) {
    (
        INERTIA_FACTORS[(i / 8) % INERTIA_FACTORS.len()],
        SENSITIVITY_MEANS[(i / 4) % 2],
        SENSITIVITY_STDS[(i / 2) % 2],
        SMOOTHING_FACTORS[i % 2],
    )
}

fn build(max_rewards: &[f64]) -> Vec<Scenario> {
    max_rewards
        .iter()
        .enumerate()
        .map(|(i, &reward)| {
            let (inertia, mean, std, smoothing) = grid_point(i);
            Scenario::new(inertia, mean, std, smoothing, reward)
        })
        .collect()
}

pub fn fixture(kind: PartitionKind) -> Vec<Scenario> {
    match kind {
        PartitionKind::Baseline => build(&BASELINE_MAX_REWARDS),
        PartitionKind::Changing => build(&CHANGING_MAX_REWARDS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_layout() {
        let rows = fixture(PartitionKind::Baseline);
        assert_eq!(rows.len(), FIXTURE_ROWS);

        let inertia: Vec<f64> = rows.iter().map(|r| r.inertia_factor).collect();
        assert!(inertia[..8].iter().all(|&v| v == 0.65));
        assert!(inertia[8..16].iter().all(|&v| v == 0.75));
        assert!(inertia[16..].iter().all(|&v| v == 0.85));

        let std: Vec<f64> = rows[..4].iter().map(|r| r.price_sensitivity_std).collect();
        assert_eq!(std, vec![0.01, 0.01, 0.05, 0.05]);
        let smoothing: Vec<f64> = rows[..4].iter().map(|r| r.smoothing_factor).collect();
        assert_eq!(smoothing, vec![0.01, 0.05, 0.01, 0.05]);
        assert_eq!(rows[4].price_sensitivity_mean, 0.3);
        assert_eq!(rows[8].price_sensitivity_mean, 0.2);
    }

    #[test]
    fn test_datasets_share_grid() {
        let baseline = fixture(PartitionKind::Baseline);
        let changing = fixture(PartitionKind::Changing);
        for (a, b) in baseline.iter().zip(changing.iter()) {
            assert_eq!(a.inertia_factor, b.inertia_factor);
            assert_eq!(a.smoothing_factor, b.smoothing_factor);
        }
        assert_eq!(baseline[0].max_reward, 1309906.0);
        assert_eq!(changing[0].max_reward, 1275241.0);
        assert!(baseline.iter().all(|r| r.profits() == [0.0; 3]));
    }
}
