//! Scenario rows
//!
//! One row per simulation configuration: four sweep parameters, the total
//! reward pool, and the profit each competitor ended up with.

use serde::{Deserialize, Serialize};

/// Tolerance used when checking that profits add back up to the reward pool.
pub const SUM_TOLERANCE: f64 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Competitor {
    Stable,     // Competitor 1
    Moderate,   // Competitor 2
    Aggressive, // Competitor 3
}

impl Competitor {
    pub fn all() -> Vec<Self> {
        vec![Self::Stable, Self::Moderate, Self::Aggressive]
    }

    pub fn number(&self) -> usize {
        match self {
            Self::Stable => 1,
            Self::Moderate => 2,
            Self::Aggressive => 3,
        }
    }

    pub fn strategy(&self) -> &'static str {
        match self {
            Self::Stable => "Stable",
            Self::Moderate => "Moderate",
            Self::Aggressive => "Aggressive",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelStyle {
    /// `inertia=0.65, meanprice=0.2, pricesd=0.01, smoothing=0.01`
    Full,
    /// `Inertia: 0.65, Sensitivity: 0.2, Smoothing: 0.01`
    Compact,
}

/// Column names match the CSV headers exactly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(rename = "Inertia Factor")]
    pub inertia_factor: f64,
    #[serde(rename = "Price Sensitivity Mean")]
    pub price_sensitivity_mean: f64,
    #[serde(rename = "Price Sensitivity Std")]
    pub price_sensitivity_std: f64,
    #[serde(rename = "Smoothing Factor")]
    pub smoothing_factor: f64,
    #[serde(rename = "Max Reward")]
    pub max_reward: f64,
    #[serde(rename = "Competitor 1 Profit")]
    pub competitor_1_profit: f64,
    #[serde(rename = "Competitor 2 Profit")]
    pub competitor_2_profit: f64,
    #[serde(rename = "Competitor 3 Profit")]
    pub competitor_3_profit: f64,
}

impl Scenario {
    /// A row with no profits assigned yet.
    pub fn new(
        inertia_factor: f64,
        price_sensitivity_mean: f64,
        price_sensitivity_std: f64,
        smoothing_factor: f64,
        max_reward: f64,
    ) -> Self {
        Self {
            inertia_factor,
            price_sensitivity_mean,
            price_sensitivity_std,
            smoothing_factor,
            max_reward,
            competitor_1_profit: 0.0,
            competitor_2_profit: 0.0,
            competitor_3_profit: 0.0,
        }
    }

    pub fn profit(&self, competitor: Competitor) -> f64 {
        match competitor {
            Competitor::Stable => self.competitor_1_profit,
            Competitor::Moderate => self.competitor_2_profit,
            Competitor::Aggressive => self.competitor_3_profit,
        }
    }

    pub fn profits(&self) -> [f64; 3] {
        [
            self.competitor_1_profit,
            self.competitor_2_profit,
            self.competitor_3_profit,
        ]
    }

    pub fn set_profits(&mut self, profits: [f64; 3]) {
        let [first, second, third] = profits;
        self.competitor_1_profit = first;
        self.competitor_2_profit = second;
        self.competitor_3_profit = third;
    }

    /// Max Reward minus the sum of the three profits. Zero when the row is
    /// fully apportioned.
    pub fn residual(&self) -> f64 {
        self.max_reward - self.profits().iter().sum::<f64>()
    }

    pub fn is_balanced(&self) -> bool {
        let scale = self.max_reward.abs().max(1.0);
        self.residual().abs() <= SUM_TOLERANCE * scale
            && self.profits().iter().all(|p| *p >= 0.0)
    }

    pub fn composite_label(&self, style: LabelStyle) -> String {
        match style {
            LabelStyle::Full => format!(
                "inertia={}, meanprice={}, pricesd={}, smoothing={}",
                self.inertia_factor,
                self.price_sensitivity_mean,
                self.price_sensitivity_std,
                self.smoothing_factor,
            ),
            LabelStyle::Compact => format!(
                "Inertia: {}, Sensitivity: {}, Smoothing: {}",
                self.inertia_factor, self.price_sensitivity_mean, self.smoothing_factor,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Scenario {
        Scenario::new(0.65, 0.2, 0.01, 0.01, 1_309_906.0)
    }

    #[test]
    fn test_full_label_contains_all_parameters() {
        let label = sample().composite_label(LabelStyle::Full);
        assert_eq!(label, "inertia=0.65, meanprice=0.2, pricesd=0.01, smoothing=0.01");
    }

    #[test]
    fn test_compact_label_omits_std() {
        let label = sample().composite_label(LabelStyle::Compact);
        assert_eq!(label, "Inertia: 0.65, Sensitivity: 0.2, Smoothing: 0.01");
        assert!(!label.contains("pricesd"));
    }

    #[test]
    fn test_residual_and_balance() {
        let mut row = sample();
        assert!(!row.is_balanced());
        assert!((row.residual() - 1_309_906.0).abs() < 1e-9);

        row.set_profits([700_000.0, 300_000.0, 309_906.0]);
        assert!(row.is_balanced());
        assert_eq!(row.profit(Competitor::Aggressive), 309_906.0);

        row.set_profits([1_400_000.0, -90_094.0, 0.0]);
        assert!(!row.is_balanced());
    }

    #[test]
    fn test_competitor_numbering() {
        let numbers: Vec<usize> = Competitor::all().iter().map(|c| c.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }
}
