//! ROI Calculator - cost, benefit, ROI and payback arithmetic.

use super::inputs::TrainingInputs;
use super::result::{PaybackPeriod, RoiBreakdown, RoiResult};

/// Share of annual revenue attributed to retaining an employee.
pub const RETENTION_VALUE_FACTOR: f64 = 0.15;

/// Months in the payback and timeline models.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Stateless calculator for training ROI.
pub struct RoiCalculator;

impl RoiCalculator {
    /// Computes the full result for a set of inputs.
    ///
    /// # Edge Cases
    /// - Zero total cost: ROI is 0% and payback is 0 months
    /// - Positive cost, zero benefit: payback is [`PaybackPeriod::Never`]
    pub fn compute(inputs: &TrainingInputs) -> RoiResult {
        let breakdown = Self::breakdown(inputs);
        let total_costs = breakdown.total_costs();
        let total_benefits = breakdown.total_benefits();

        RoiResult {
            total_costs,
            total_benefits,
            net_benefit: total_benefits - total_costs,
            roi: Self::roi_percent(total_benefits, total_costs),
            payback_period: Self::payback_period(total_benefits, total_costs),
        }
    }

    /// Computes the intermediate cost and benefit terms.
    pub fn breakdown(inputs: &TrainingInputs) -> RoiBreakdown {
        RoiBreakdown {
            direct_training_costs: inputs.training_cost,
            opportunity_costs: Self::opportunity_costs(inputs),
            productivity_benefit: inputs.annual_revenue * (inputs.productivity_increase / 100.0),
            retention_benefit: (inputs.annual_revenue * RETENTION_VALUE_FACTOR)
                * (inputs.employee_retention / 100.0),
        }
    }

    /// Value of participant time: headcount × hourly rate × hours.
    pub fn opportunity_costs(inputs: &TrainingInputs) -> f64 {
        inputs.participants_count * inputs.employee_hourly_rate * inputs.training_duration
    }

    /// (benefits − costs) / costs × 100, defined as 0 when costs are 0.
    pub fn roi_percent(benefits: f64, costs: f64) -> f64 {
        if costs == 0.0 {
            return 0.0;
        }
        ((benefits - costs) / costs) * 100.0
    }

    /// Months until linear monthly benefit covers the cost.
    pub fn payback_period(benefits: f64, costs: f64) -> PaybackPeriod {
        if costs <= 0.0 {
            return PaybackPeriod::Months(0.0);
        }
        if benefits == 0.0 {
            return PaybackPeriod::Never;
        }
        PaybackPeriod::Months(costs / (benefits / MONTHS_PER_YEAR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calculator::InputField;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn default_scenario_matches_reference_figures() {
        let inputs = TrainingInputs::default();
        let breakdown = RoiCalculator::breakdown(&inputs);
        let result = RoiCalculator::compute(&inputs);

        assert_eq!(breakdown.opportunity_costs, 800_000.0);
        assert_eq!(breakdown.productivity_benefit, 1_500_000.0);
        assert_eq!(breakdown.retention_benefit, 150_000.0);
        assert_eq!(result.total_costs, 1_150_000.0);
        assert_eq!(result.total_benefits, 1_650_000.0);
        assert_eq!(result.net_benefit, 500_000.0);
        assert!(approx(result.roi, 43.478_260_869_565_22));

        let months = result.payback_period.months().unwrap();
        assert!(approx(months, 1_150_000.0 / (1_650_000.0 / 12.0)));
        assert!((months - 8.36).abs() < 0.01);
    }

    #[test]
    fn zero_improvements_give_minus_hundred_percent() {
        let inputs = TrainingInputs::default()
            .with_field(InputField::ProductivityIncrease, 0.0)
            .with_field(InputField::EmployeeRetention, 0.0);
        let result = RoiCalculator::compute(&inputs);

        assert_eq!(result.total_benefits, 0.0);
        assert_eq!(result.net_benefit, -result.total_costs);
        assert_eq!(result.roi, -100.0);
    }

    #[test]
    fn zero_benefit_payback_is_never_not_nan() {
        let inputs = TrainingInputs::default()
            .with_field(InputField::ProductivityIncrease, 0.0)
            .with_field(InputField::EmployeeRetention, 0.0);
        let result = RoiCalculator::compute(&inputs);

        assert_eq!(result.payback_period, PaybackPeriod::Never);
    }

    #[test]
    fn zero_cost_roi_is_zero_by_definition() {
        let inputs = TrainingInputs::default()
            .with_field(InputField::TrainingCost, 0.0)
            .with_field(InputField::ParticipantsCount, 0.0);
        let result = RoiCalculator::compute(&inputs);

        assert_eq!(result.total_costs, 0.0);
        assert!(result.total_benefits > 0.0);
        assert_eq!(result.roi, 0.0);
        assert_eq!(result.payback_period, PaybackPeriod::Months(0.0));
    }

    #[test]
    fn negative_costs_pay_back_immediately() {
        let inputs = TrainingInputs::default()
            .with_field(InputField::TrainingCost, -2_000_000.0);
        let result = RoiCalculator::compute(&inputs);

        assert!(result.total_costs < 0.0);
        assert_eq!(result.payback_period, PaybackPeriod::Months(0.0));
    }

    #[test]
    fn negative_benefits_give_negative_payback() {
        let inputs = TrainingInputs::default()
            .with_field(InputField::ProductivityIncrease, -10.0)
            .with_field(InputField::EmployeeRetention, 0.0);
        let result = RoiCalculator::compute(&inputs);

        assert!(result.payback_period.months().unwrap() < 0.0);
    }

    #[test]
    fn compute_is_idempotent() {
        let inputs = TrainingInputs::default();
        assert_eq!(RoiCalculator::compute(&inputs), RoiCalculator::compute(&inputs));
    }

    #[test]
    fn roi_percent_handles_break_even() {
        assert_eq!(RoiCalculator::roi_percent(500.0, 500.0), 0.0);
        assert_eq!(RoiCalculator::roi_percent(1_000.0, 500.0), 100.0);
    }
}
