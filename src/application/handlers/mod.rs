//! Application handlers.
//!
//! One handler per calculator action: compute, download, email.

mod calculate_roi;
mod download_report;
mod email_report;
mod export;

pub use calculate_roi::{CalculateRoiHandler, CalculateRoiResult};
pub use download_report::{
    DownloadReportCommand, DownloadReportError, DownloadReportHandler, DownloadReportResult,
};
pub use email_report::{
    EmailReportCommand, EmailReportError, EmailReportHandler, EmailReportResult, ReportAttachment,
};
