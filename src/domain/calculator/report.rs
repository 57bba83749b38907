//! ROI report - the snapshot handed to report generation and export.

use serde::{Deserialize, Serialize};

use super::inputs::TrainingInputs;
use super::insights::KeyInsights;
use super::projections::ChartProjections;
use super::result::RoiResult;
use super::session::ComputedResult;
use crate::domain::foundation::{ReportId, Timestamp};

/// Everything needed to render one ROI report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiReport {
    pub id: ReportId,
    pub generated_at: Timestamp,
    pub computed_at: Timestamp,
    pub inputs: TrainingInputs,
    pub result: RoiResult,
    pub projections: ChartProjections,
    pub insights: KeyInsights,
    /// Inputs were edited after this result was computed.
    pub stale: bool,
}

impl RoiReport {
    /// Builds a report from a displayed result.
    pub fn from_computed(computed: &ComputedResult, stale: bool) -> Self {
        Self {
            id: ReportId::new(),
            generated_at: Timestamp::now(),
            computed_at: computed.computed_at,
            inputs: computed.inputs,
            result: computed.result,
            projections: computed.projections(),
            insights: computed.insights(),
            stale,
        }
    }

    /// Base filename (no extension) for downloads and attachments.
    pub fn base_filename(&self, prefix: &str) -> String {
        format!("{}-{}", prefix, self.id.short())
    }
}
