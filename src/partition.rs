//! Positional split of the full results table into the baseline and
//! changing inertia halves.

use tracing::{debug, warn};

use crate::scenario::Scenario;

pub const PARTITION_ROWS: usize = 24;
pub const EXPECTED_TABLE_ROWS: usize = PARTITION_ROWS * 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartitionKind {
    Baseline,
    Changing,
}

impl PartitionKind {
    pub fn all() -> Vec<Self> {
        vec![Self::Baseline, Self::Changing]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Baseline => "Baseline Inertia Environment",
            Self::Changing => "Changing Inertia Environment",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::Changing => "changing",
        }
    }

    /// Chart title used for the literal fixture datasets.
    pub fn dataset_title(&self) -> String {
        let index = match self {
            Self::Baseline => 1,
            Self::Changing => 2,
        };
        format!("{} (Dataset {})", self.name(), index)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Partitions<'a> {
    pub baseline: &'a [Scenario],
    pub changing: &'a [Scenario],
}

impl<'a> Partitions<'a> {
    pub fn get(&self, kind: PartitionKind) -> &'a [Scenario] {
        match kind {
            PartitionKind::Baseline => self.baseline,
            PartitionKind::Changing => self.changing,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (PartitionKind, &'a [Scenario])> + '_ {
        PartitionKind::all().into_iter().map(move |kind| (kind, self.get(kind)))
    }
}

/// Rows `0..24` are the baseline, everything after is the changing set.
pub fn split(rows: &[Scenario]) -> Partitions<'_> {
    if rows.len() != EXPECTED_TABLE_ROWS {
        warn!(
            rows = rows.len(),
            expected = EXPECTED_TABLE_ROWS,
            "results table is not two full partitions"
        );
    }
    let cut = rows.len().min(PARTITION_ROWS);
    let (baseline, changing) = rows.split_at(cut);
    debug!(baseline = baseline.len(), changing = changing.len(), "split results table");
    Partitions { baseline, changing }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(n: usize) -> Vec<Scenario> {
        (0..n)
            .map(|i| Scenario::new(0.65, 0.2, 0.01, 0.01, 1000.0 + i as f64))
            .collect()
    }

    #[test]
    fn test_split_full_table() {
        let rows = table(EXPECTED_TABLE_ROWS);
        let parts = split(&rows);

        assert_eq!(parts.baseline.len(), PARTITION_ROWS);
        assert_eq!(parts.changing.len(), PARTITION_ROWS);
        assert_eq!(parts.baseline[0].max_reward, 1000.0);
        assert_eq!(parts.baseline[23].max_reward, 1023.0);
        assert_eq!(parts.changing[0].max_reward, 1024.0);
        assert_eq!(parts.changing[23].max_reward, 1047.0);

        let ordered = parts
            .changing
            .windows(2)
            .all(|w| w[0].max_reward < w[1].max_reward);
        assert!(ordered);
    }

    #[test]
    fn test_split_short_table() {
        let rows = table(10);
        let parts = split(&rows);
        assert_eq!(parts.baseline.len(), 10);
        assert!(parts.changing.is_empty());
    }

    #[test]
    fn test_split_long_table_keeps_tail() {
        let rows = table(50);
        let parts = split(&rows);
        assert_eq!(parts.changing.len(), 26);
    }

    #[test]
    fn test_iter_order() {
        let rows = table(EXPECTED_TABLE_ROWS);
        let kinds: Vec<PartitionKind> = split(&rows).iter().map(|(k, _)| k).collect();
        assert_eq!(kinds, vec![PartitionKind::Baseline, PartitionKind::Changing]);
        assert_eq!(
            PartitionKind::Changing.dataset_title(),
            "Changing Inertia Environment (Dataset 2)"
        );
    }
}
