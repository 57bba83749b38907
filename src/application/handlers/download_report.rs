//! DownloadReportHandler - the download action.
//!
//! Renders the displayed result (fresh or stale) as a report and converts it
//! to the requested download format.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};

use super::export::{export_markdown, format_label};
use crate::application::Notification;
use crate::config::ExportConfig;
use crate::domain::calculator::{CalculatorSession, RoiReport};
use crate::domain::foundation::{DomainError, ErrorCode, ReportId};
use crate::ports::{
    DocumentExportService, ExportError, ExportFormat, ExportedDocument, ReportError,
    ReportGenerator,
};

/// Command to download the current report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DownloadReportCommand {
    /// Requested format; `None` uses the configured `export.default_format`.
    pub format: Option<ExportFormat>,
}

impl DownloadReportCommand {
    pub fn new(format: ExportFormat) -> Self {
        Self {
            format: Some(format),
        }
    }

    pub fn pdf() -> Self {
        Self::new(ExportFormat::Pdf)
    }

    pub fn html() -> Self {
        Self::new(ExportFormat::Html)
    }

    pub fn markdown() -> Self {
        Self::new(ExportFormat::Markdown)
    }
}

/// Result of a successful download.
#[derive(Debug, Clone)]
pub struct DownloadReportResult {
    pub report_id: ReportId,
    pub document: ExportedDocument,
    /// Where the document was written, when a download directory is configured.
    pub saved_to: Option<PathBuf>,
    /// "Downloading ..." followed by "Download complete".
    pub notifications: Vec<Notification>,
}

/// Error type for the download action.
#[derive(Debug, Clone)]
pub enum DownloadReportError {
    /// Nothing has been calculated yet.
    NoResults,
    /// The report could not be rendered.
    GenerationFailed(String),
    /// Conversion or saving failed.
    ExportFailed(ExportError),
}

impl DownloadReportError {
    /// Toast shown for this failure.
    pub fn notification(&self) -> Notification {
        match self {
            DownloadReportError::NoResults => {
                Notification::destructive("No results to download", "Please calculate ROI first")
            }
            other => Notification::destructive("Download failed", other.to_string()),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            DownloadReportError::NoResults => ErrorCode::NoResults,
            DownloadReportError::GenerationFailed(_) => ErrorCode::ReportGenerationFailed,
            DownloadReportError::ExportFailed(_) => ErrorCode::ExportFailed,
        }
    }
}

impl std::fmt::Display for DownloadReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DownloadReportError::NoResults => write!(f, "No results to download"),
            DownloadReportError::GenerationFailed(msg) => {
                write!(f, "Report generation failed: {}", msg)
            }
            DownloadReportError::ExportFailed(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for DownloadReportError {}

impl From<ReportError> for DownloadReportError {
    fn from(err: ReportError) -> Self {
        DownloadReportError::GenerationFailed(err.to_string())
    }
}

impl From<ExportError> for DownloadReportError {
    fn from(err: ExportError) -> Self {
        DownloadReportError::ExportFailed(err)
    }
}

impl From<DownloadReportError> for DomainError {
    fn from(err: DownloadReportError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

/// Handler for the download action.
///
/// # Dependencies
///
/// - `ReportGenerator`: Render the markdown report
/// - `DocumentExportService`: Convert to HTML or PDF
///
/// # Usage
///
/// ```rust,ignore
/// let handler = DownloadReportHandler::new(generator, exporter, &config.export);
/// let result = handler.handle(&session, DownloadReportCommand::pdf()).await?;
/// std::fs::write(&result.document.filename, &result.document.content)?;
/// ```
pub struct DownloadReportHandler {
    report_generator: Arc<dyn ReportGenerator>,
    export_service: Arc<dyn DocumentExportService>,
    filename_prefix: String,
    download_dir: Option<PathBuf>,
    default_format: ExportFormat,
}

impl DownloadReportHandler {
    pub fn new(
        report_generator: Arc<dyn ReportGenerator>,
        export_service: Arc<dyn DocumentExportService>,
        config: &ExportConfig,
    ) -> Self {
        Self {
            report_generator,
            export_service,
            filename_prefix: config.filename_prefix.clone(),
            download_dir: config.download_dir.clone(),
            default_format: config.default_format,
        }
    }

    pub async fn handle(
        &self,
        session: &CalculatorSession,
        cmd: DownloadReportCommand,
    ) -> Result<DownloadReportResult, DownloadReportError> {
        // 1. Require a displayed result
        let computed = session.displayed().ok_or_else(|| {
            warn!("download requested before any calculation");
            DownloadReportError::NoResults
        })?;

        let format = cmd.format.unwrap_or(self.default_format);
        let label = format_label(format);
        let mut notifications = vec![Notification::info(
            format!("Downloading {}", label),
            "Your ROI report is being prepared",
        )];

        // 2. Snapshot and render
        let report = RoiReport::from_computed(computed, session.is_stale());
        let markdown = self.report_generator.generate(&report)?;

        // 3. Convert
        let base_filename = report.base_filename(&self.filename_prefix);
        let document =
            export_markdown(self.export_service.as_ref(), markdown, format, &base_filename)
                .await?;

        // 4. Optionally persist
        let saved_to = match &self.download_dir {
            Some(dir) => Some(document.save_to(dir).await?),
            None => None,
        };

        info!(
            report_id = %report.id,
            format = %format,
            bytes = document.size_bytes(),
            stale = report.stale,
            "report downloaded"
        );

        notifications.push(Notification::info(
            "Download complete",
            "ROI report has been downloaded",
        ));

        Ok(DownloadReportResult {
            report_id: report.id,
            document,
            saved_to,
            notifications,
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
