//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between the
//! calculator and the outside world. Adapters implement these ports.
//!
//! - `ReportGenerator` - Renders an ROI report as markdown
//! - `DocumentExportService` - Converts markdown to HTML or PDF
//! - `Mailer` - Sends the report by email

mod document_export_service;
mod mailer;
mod report_generator;

pub use document_export_service::{
    DocumentExportService, ExportError, ExportFormat, ExportedDocument,
};
pub use mailer::{
    is_plausible_address, DeliveryReceipt, EmailAttachment, EmailMessage, MailError, Mailer,
};
pub use report_generator::{ReportError, ReportGenerator};
