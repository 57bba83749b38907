//! Report Generator Port - Markdown rendering of an ROI report.
//!
//! The application layer depends on this trait; adapters such as
//! `TemplateReportGenerator` provide the layout.

use thiserror::Error;

use crate::domain::calculator::RoiReport;

/// Port for rendering an ROI report as markdown.
///
/// # Contract
///
/// Implementations must:
/// - Produce a single markdown document with a level-1 title first
/// - Include the summary figures, the three chart series and the insights
/// - Be deterministic for a given report
pub trait ReportGenerator: Send + Sync {
    /// Render the whole report.
    fn generate(&self, report: &RoiReport) -> Result<String, ReportError>;

    /// Title used for the document heading and the default email subject.
    fn title(&self, report: &RoiReport) -> String;
}

/// Errors that can occur while rendering a report.
#[derive(Debug, Clone, Error)]
pub enum ReportError {
    /// The report holds figures that cannot be rendered.
    #[error("Invalid report data: {0}")]
    InvalidData(String),

    /// Unexpected generator failure.
    #[error("Report generation failed: {0}")]
    Internal(String),
}

impl ReportError {
    pub fn invalid_data(reason: impl Into<String>) -> Self {
        Self::InvalidData(reason.into())
    }

    pub fn internal(reason: impl Into<String>) -> Self {
        Self::Internal(reason.into())
    }
}
