//! Application layer - handlers behind the calculator's three buttons.
//!
//! Handlers orchestrate the calculator session and the export/mail ports.
//! Each returns its result together with the [`Notification`]s a rendering
//! layer shows as toasts.

pub mod handlers;
mod notification;

pub use handlers::{
    // Calculate
    CalculateRoiHandler, CalculateRoiResult,
    // Download
    DownloadReportCommand, DownloadReportError, DownloadReportHandler, DownloadReportResult,
    // Email
    EmailReportCommand, EmailReportError, EmailReportHandler, EmailReportResult,
    ReportAttachment,
};
pub use notification::{Notification, NotificationVariant};
