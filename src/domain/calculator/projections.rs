//! Chart projections - data series for the cost, benefit and timeline views.
//!
//! All projections are pure functions of the inputs or the result and are
//! recomputed on every render.

use serde::{Deserialize, Serialize};

use super::inputs::TrainingInputs;
use super::result::RoiResult;
use super::roi_calculator::{RoiCalculator, MONTHS_PER_YEAR};

/// Number of points in the timeline projection.
pub const TIMELINE_MONTHS: u32 = 12;

/// One named slice of a two-part breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSlice {
    pub name: String,
    pub value: f64,
}

impl ChartSlice {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// This slice's share of `total` as a percentage; 0 when `total` is 0.
    pub fn share_of(&self, total: f64) -> f64 {
        if total == 0.0 {
            return 0.0;
        }
        self.value / total * 100.0
    }
}

/// One month on the cost/benefit timeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelinePoint {
    pub month: u32,
    /// Total cost, constant across months.
    pub costs: f64,
    /// Cumulative benefit up to and including this month.
    pub benefits: f64,
}

impl TimelinePoint {
    /// True once cumulative benefit has caught up with cost.
    pub fn is_paid_back(&self) -> bool {
        self.benefits >= self.costs
    }
}

/// The three chart series rendered alongside a result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartProjections {
    pub cost_breakdown: [ChartSlice; 2],
    pub benefit_breakdown: [ChartSlice; 2],
    pub timeline: Vec<TimelinePoint>,
}

impl ChartProjections {
    /// Builds every projection for one inputs/result pair.
    pub fn project(inputs: &TrainingInputs, result: &RoiResult) -> Self {
        Self {
            cost_breakdown: cost_breakdown(inputs),
            benefit_breakdown: benefit_breakdown(inputs),
            timeline: timeline(result),
        }
    }
}

/// Training costs vs opportunity costs.
pub fn cost_breakdown(inputs: &TrainingInputs) -> [ChartSlice; 2] {
    [
        ChartSlice::new("Training Costs", inputs.training_cost),
        ChartSlice::new("Opportunity Costs", RoiCalculator::opportunity_costs(inputs)),
    ]
}

/// Productivity benefit vs retention benefit.
pub fn benefit_breakdown(inputs: &TrainingInputs) -> [ChartSlice; 2] {
    let breakdown = RoiCalculator::breakdown(inputs);
    [
        ChartSlice::new("Productivity", breakdown.productivity_benefit),
        ChartSlice::new("Retention", breakdown.retention_benefit),
    ]
}

/// Twelve months of constant cost against linearly accumulating benefit.
pub fn timeline(result: &RoiResult) -> Vec<TimelinePoint> {
    let monthly_benefit = result.total_benefits / MONTHS_PER_YEAR;
    (1..=TIMELINE_MONTHS)
        .map(|month| TimelinePoint {
            month,
            costs: result.total_costs,
            benefits: monthly_benefit * f64::from(month),
        })
        .collect()
}

/// First month in the timeline where benefit covers cost, if any.
pub fn break_even_month(points: &[TimelinePoint]) -> Option<u32> {
    points.iter().find(|p| p.is_paid_back()).map(|p| p.month)
}
