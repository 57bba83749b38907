//! Property-based invariant tests for the ROI arithmetic.
//!
//! These tests verify invariants that must hold for any inputs:
//!
//! 1. totalCosts == trainingCost + participants × rate × hours, exactly.
//! 2. netBenefit == totalBenefits − totalCosts, exactly.
//! 3. Zero total cost gives 0% ROI whatever the benefits.
//! 4. Zero benefit with positive cost pays back Never, never NaN.
//! 5. compute is idempotent.
//! 6. The 12-month timeline is linear in the month index.
//! 7. Breakdown slices sum to the result totals.
//! 8. Currency formatting round-trips whole rupee amounts.

use proptest::prelude::*;
use training_roi::domain::calculator::projections::{benefit_breakdown, cost_breakdown, timeline};
use training_roi::domain::calculator::{
    PaybackPeriod, RoiCalculator, TrainingInputs, TIMELINE_MONTHS,
};
use training_roi::domain::formatting::format_inr;

// ── Helpers ─────────────────────────────────────────────────────────────

fn non_negative_inputs() -> impl Strategy<Value = TrainingInputs> {
    (
        0.0f64..5_000_000.0,
        0u32..1_000,
        0.0f64..10_000.0,
        0.0f64..200.0,
        0.0f64..=50.0,
        0.0f64..=30.0,
        0.0f64..100_000_000.0,
    )
        .prop_map(
            |(cost, participants, rate, hours, productivity, retention, revenue)| TrainingInputs {
                training_cost: cost,
                participants_count: f64::from(participants),
                employee_hourly_rate: rate,
                training_duration: hours,
                productivity_increase: productivity,
                employee_retention: retention,
                annual_revenue: revenue,
            },
        )
}

fn any_finite_inputs() -> impl Strategy<Value = TrainingInputs> {
    proptest::array::uniform7(-1.0e9f64..1.0e9).prop_map(|v| TrainingInputs {
        training_cost: v[0],
        participants_count: v[1],
        employee_hourly_rate: v[2],
        training_duration: v[3],
        productivity_increase: v[4],
        employee_retention: v[5],
        annual_revenue: v[6],
    })
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * a.abs().max(b.abs()).max(1.0)
}

// ═════════════════════════════════════════════════════════════════════════
// 1-2. Cost and net identities
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn total_costs_identity_is_exact(inputs in non_negative_inputs()) {
        let result = RoiCalculator::compute(&inputs);
        let expected = inputs.training_cost
            + inputs.participants_count * inputs.employee_hourly_rate * inputs.training_duration;
        prop_assert_eq!(result.total_costs, expected);
    }

    #[test]
    fn net_benefit_identity_is_exact(inputs in any_finite_inputs()) {
        let result = RoiCalculator::compute(&inputs);
        prop_assert_eq!(result.net_benefit, result.total_benefits - result.total_costs);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3-4. Zero-cost and zero-benefit policies
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn zero_cost_means_zero_roi(
        inputs in non_negative_inputs(),
        rate in 0.0f64..10_000.0,
    ) {
        let inputs = TrainingInputs {
            training_cost: 0.0,
            participants_count: 0.0,
            employee_hourly_rate: rate,
            ..inputs
        };
        let result = RoiCalculator::compute(&inputs);

        prop_assert_eq!(result.total_costs, 0.0);
        prop_assert_eq!(result.roi, 0.0);
        prop_assert_eq!(result.payback_period, PaybackPeriod::Months(0.0));
    }

    #[test]
    fn zero_benefit_never_pays_back(inputs in non_negative_inputs()) {
        let inputs = TrainingInputs {
            training_cost: inputs.training_cost + 1.0,
            productivity_increase: 0.0,
            employee_retention: 0.0,
            ..inputs
        };
        let result = RoiCalculator::compute(&inputs);

        prop_assert_eq!(result.total_benefits, 0.0);
        prop_assert!(result.payback_period.is_never());
        prop_assert!(result.payback_period.months().is_none());
        prop_assert_eq!(result.roi, -100.0);
        prop_assert_eq!(result.net_benefit, -result.total_costs);
    }

    #[test]
    fn finite_inputs_never_produce_nan(inputs in any_finite_inputs()) {
        let result = RoiCalculator::compute(&inputs);
        prop_assert!(!result.roi.is_nan());
        if let Some(months) = result.payback_period.months() {
            prop_assert!(!months.is_nan());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Idempotence
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn compute_is_idempotent(inputs in any_finite_inputs()) {
        let first = RoiCalculator::compute(&inputs);
        let second = RoiCalculator::compute(&inputs);
        prop_assert_eq!(first, second);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6-7. Projections
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn timeline_is_linear(inputs in non_negative_inputs()) {
        let result = RoiCalculator::compute(&inputs);
        let points = timeline(&result);
        let monthly = result.total_benefits / 12.0;

        prop_assert_eq!(points.len(), TIMELINE_MONTHS as usize);
        for (i, point) in points.iter().enumerate() {
            let month = (i + 1) as u32;
            prop_assert_eq!(point.month, month);
            prop_assert_eq!(point.costs, result.total_costs);
            prop_assert_eq!(point.benefits, monthly * f64::from(month));
        }
        prop_assert!(approx_eq(points[11].benefits, result.total_benefits));
    }

    #[test]
    fn breakdown_slices_sum_to_totals(inputs in non_negative_inputs()) {
        let result = RoiCalculator::compute(&inputs);
        let costs: f64 = cost_breakdown(&inputs).iter().map(|s| s.value).sum();
        let benefits: f64 = benefit_breakdown(&inputs).iter().map(|s| s.value).sum();

        prop_assert!(approx_eq(costs, result.total_costs));
        prop_assert!(approx_eq(benefits, result.total_benefits));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8. Currency formatting
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn whole_rupees_round_trip_through_format(amount in 0u64..1_000_000_000_000) {
        let formatted = format_inr(amount as f64);
        prop_assert!(formatted.starts_with('₹'));

        let digits: String = formatted.chars().filter(|c| c.is_ascii_digit()).collect();
        prop_assert_eq!(digits.parse::<u64>().unwrap(), amount);
    }

    #[test]
    fn negative_amounts_carry_leading_minus(amount in 1u64..1_000_000_000) {
        let formatted = format_inr(-(amount as f64));
        prop_assert!(formatted.starts_with("-₹"));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// Reference scenarios
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn default_scenario_matches_worked_example() {
    let result = RoiCalculator::compute(&TrainingInputs::default());

    assert_eq!(result.total_costs, 1_150_000.0);
    assert_eq!(result.total_benefits, 1_650_000.0);
    assert_eq!(result.net_benefit, 500_000.0);
    assert!((result.roi - 43.478_260_869_565_22).abs() < 1e-9);
    let months = result.payback_period.months().unwrap();
    assert!((months - 8.363_636_363_636_363).abs() < 1e-9);
}

#[test]
fn zero_cost_scenario_is_zero_roi_by_definition() {
    let inputs = TrainingInputs {
        training_cost: 0.0,
        participants_count: 0.0,
        ..TrainingInputs::default()
    };
    let result = RoiCalculator::compute(&inputs);

    assert_eq!(result.total_costs, 0.0);
    assert_eq!(result.roi, 0.0);
    assert_eq!(result.total_benefits, 1_650_000.0);
}
