//! Computed ROI figures.

use serde::{Deserialize, Serialize};

/// Months needed for cumulative benefit to cover total cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaybackPeriod {
    /// A finite (possibly negative) number of months.
    Months(f64),
    /// Costs are positive but there is no benefit to pay them back.
    Never,
}

impl PaybackPeriod {
    /// The month count, if the investment pays back at all.
    pub fn months(&self) -> Option<f64> {
        match self {
            PaybackPeriod::Months(m) => Some(*m),
            PaybackPeriod::Never => None,
        }
    }

    pub fn is_never(&self) -> bool {
        matches!(self, PaybackPeriod::Never)
    }
}

/// Intermediate terms of a computation; feeds the breakdown charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiBreakdown {
    pub direct_training_costs: f64,
    pub opportunity_costs: f64,
    pub productivity_benefit: f64,
    pub retention_benefit: f64,
}

impl RoiBreakdown {
    pub fn total_costs(&self) -> f64 {
        self.direct_training_costs + self.opportunity_costs
    }

    pub fn total_benefits(&self) -> f64 {
        self.productivity_benefit + self.retention_benefit
    }
}

/// The outcome of one compute.
///
/// Replaced wholesale on every recompute; never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiResult {
    pub total_costs: f64,
    pub total_benefits: f64,
    pub net_benefit: f64,
    /// Signed percentage.
    pub roi: f64,
    pub payback_period: PaybackPeriod,
}

impl RoiResult {
    /// True when the program returns more than it costs.
    pub fn is_positive(&self) -> bool {
        self.roi > 0.0
    }

    /// Cumulative benefit accrued per month under the linear model.
    pub fn monthly_benefit(&self) -> f64 {
        self.total_benefits / 12.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payback_months_exposes_value() {
        assert_eq!(PaybackPeriod::Months(8.5).months(), Some(8.5));
        assert_eq!(PaybackPeriod::Never.months(), None);
        assert!(PaybackPeriod::Never.is_never());
    }

    #[test]
    fn payback_serializes_as_tagged_value() {
        assert_eq!(
            serde_json::to_string(&PaybackPeriod::Months(2.0)).unwrap(),
            r#"{"months":2.0}"#
        );
        assert_eq!(serde_json::to_string(&PaybackPeriod::Never).unwrap(), r#""never""#);
    }

    #[test]
    fn breakdown_totals_sum_their_parts() {
        let b = RoiBreakdown {
            direct_training_costs: 100.0,
            opportunity_costs: 50.0,
            productivity_benefit: 30.0,
            retention_benefit: 20.0,
        };
        assert_eq!(b.total_costs(), 150.0);
        assert_eq!(b.total_benefits(), 50.0);
    }

    #[test]
    fn monthly_benefit_is_twelfth_of_total() {
        let result = RoiResult {
            total_costs: 0.0,
            total_benefits: 1_200.0,
            net_benefit: 1_200.0,
            roi: 0.0,
            payback_period: PaybackPeriod::Months(0.0),
        };
        assert_eq!(result.monthly_benefit(), 100.0);
        assert!(!result.is_positive());
    }
}
