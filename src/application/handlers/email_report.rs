//! EmailReportHandler - the email action.
//!
//! Sends the displayed report to a recipient. The report is rendered once;
//! its HTML form becomes the message body and, optionally, a converted copy
//! is attached. A PDF attachment falls back to HTML when PDF conversion is
//! unavailable, so a missing Pandoc never blocks the email itself.

use std::sync::Arc;

use tracing::{info, warn};

use super::export::export_markdown;
use crate::application::Notification;
use crate::config::{EmailConfig, ExportConfig};
use crate::domain::calculator::{CalculatorSession, RoiReport};
use crate::domain::foundation::{DomainError, ErrorCode, ReportId};
use crate::ports::{
    is_plausible_address, DeliveryReceipt, DocumentExportService, EmailMessage, ExportError,
    ExportFormat, MailError, Mailer, ReportError, ReportGenerator,
};

/// Which copy of the report rides along with the email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportAttachment {
    /// The configured `export.default_format`.
    #[default]
    Configured,
    Format(ExportFormat),
    Omitted,
}

/// Command to email the current report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailReportCommand {
    /// Recipient address; `None` when the user has not entered one yet.
    pub recipient: Option<String>,
    pub attachment: ReportAttachment,
}

impl EmailReportCommand {
    /// Email with a copy in the configured format attached.
    pub fn to(recipient: impl Into<String>) -> Self {
        Self {
            recipient: Some(recipient.into()),
            attachment: ReportAttachment::Configured,
        }
    }

    /// The email button pressed before an address was entered.
    pub fn without_recipient() -> Self {
        Self {
            recipient: None,
            attachment: ReportAttachment::Configured,
        }
    }

    /// Picks the attachment format explicitly; `None` sends no attachment.
    pub fn with_attachment(mut self, format: Option<ExportFormat>) -> Self {
        self.attachment = match format {
            Some(format) => ReportAttachment::Format(format),
            None => ReportAttachment::Omitted,
        };
        self
    }
}

/// Result of a successful send.
#[derive(Debug, Clone)]
pub struct EmailReportResult {
    pub report_id: ReportId,
    pub recipient: String,
    pub receipt: DeliveryReceipt,
    pub notification: Notification,
}

/// Error type for the email action.
#[derive(Debug, Clone)]
pub enum EmailReportError {
    /// Nothing has been calculated yet.
    NoResults,
    /// No address was supplied; the user should be prompted for one.
    RecipientRequired,
    /// Address failed the plausibility check or was refused by the provider.
    InvalidRecipient(String),
    /// The report could not be rendered.
    GenerationFailed(String),
    /// Body or attachment conversion failed.
    ExportFailed(ExportError),
    /// The mail provider failed.
    DeliveryFailed(MailError),
}

impl EmailReportError {
    /// Toast shown for this failure.
    pub fn notification(&self) -> Notification {
        match self {
            EmailReportError::NoResults => {
                Notification::destructive("No results to email", "Please calculate ROI first")
            }
            EmailReportError::RecipientRequired => Notification::info(
                "Email feature",
                "Please enter your email to receive the ROI report",
            ),
            EmailReportError::InvalidRecipient(address) => Notification::destructive(
                "Invalid email address",
                format!("'{}' is not a valid email address", address),
            ),
            other => Notification::destructive("Email failed", other.to_string()),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            EmailReportError::NoResults => ErrorCode::NoResults,
            EmailReportError::RecipientRequired | EmailReportError::InvalidRecipient(_) => {
                ErrorCode::ValidationFailed
            }
            EmailReportError::GenerationFailed(_) => ErrorCode::ReportGenerationFailed,
            EmailReportError::ExportFailed(_) => ErrorCode::ExportFailed,
            EmailReportError::DeliveryFailed(_) => ErrorCode::DeliveryFailed,
        }
    }

    /// True when retrying the same command might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, EmailReportError::DeliveryFailed(err) if err.is_transient())
    }
}

impl std::fmt::Display for EmailReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmailReportError::NoResults => write!(f, "No results to email"),
            EmailReportError::RecipientRequired => write!(f, "Recipient email address required"),
            EmailReportError::InvalidRecipient(address) => {
                write!(f, "Invalid recipient address: {}", address)
            }
            EmailReportError::GenerationFailed(msg) => {
                write!(f, "Report generation failed: {}", msg)
            }
            EmailReportError::ExportFailed(err) => write!(f, "{}", err),
            EmailReportError::DeliveryFailed(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for EmailReportError {}

impl From<ReportError> for EmailReportError {
    fn from(err: ReportError) -> Self {
        EmailReportError::GenerationFailed(err.to_string())
    }
}

impl From<ExportError> for EmailReportError {
    fn from(err: ExportError) -> Self {
        EmailReportError::ExportFailed(err)
    }
}

impl From<MailError> for EmailReportError {
    fn from(err: MailError) -> Self {
        match err {
            MailError::InvalidRecipient(address) => EmailReportError::InvalidRecipient(address),
            other => EmailReportError::DeliveryFailed(other),
        }
    }
}

impl From<EmailReportError> for DomainError {
    fn from(err: EmailReportError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

/// Handler for the email action.
///
/// # Dependencies
///
/// - `ReportGenerator`: Render the markdown report
/// - `DocumentExportService`: HTML body and attachment conversion
/// - `Mailer`: Deliver the message
pub struct EmailReportHandler {
    report_generator: Arc<dyn ReportGenerator>,
    export_service: Arc<dyn DocumentExportService>,
    mailer: Arc<dyn Mailer>,
    from: String,
    subject: Option<String>,
    filename_prefix: String,
    default_format: ExportFormat,
}

impl EmailReportHandler {
    pub fn new(
        report_generator: Arc<dyn ReportGenerator>,
        export_service: Arc<dyn DocumentExportService>,
        mailer: Arc<dyn Mailer>,
        email: &EmailConfig,
        export: &ExportConfig,
    ) -> Self {
        Self {
            report_generator,
            export_service,
            mailer,
            from: email.from_header(),
            subject: email.subject.clone(),
            filename_prefix: export.filename_prefix.clone(),
            default_format: export.default_format,
        }
    }

    /// Configured subject, or the report title tagged with the report id.
    fn subject_for(&self, report: &RoiReport) -> String {
        match &self.subject {
            Some(subject) => subject.clone(),
            None => format!(
                "{} #{}",
                self.report_generator.title(report),
                report.id.short()
            ),
        }
    }

    /// Resolves the attachment format, swapping PDF for HTML when PDF
    /// conversion cannot run.
    async fn attachment_format(&self, attachment: ReportAttachment) -> Option<ExportFormat> {
        let format = match attachment {
            ReportAttachment::Configured => self.default_format,
            ReportAttachment::Format(format) => format,
            ReportAttachment::Omitted => return None,
        };
        if format == ExportFormat::Pdf && !self.export_service.is_available().await {
            warn!("PDF export unavailable, attaching HTML report instead");
            return Some(ExportFormat::Html);
        }
        Some(format)
    }

    pub async fn handle(
        &self,
        session: &CalculatorSession,
        cmd: EmailReportCommand,
    ) -> Result<EmailReportResult, EmailReportError> {
        // 1. Require a displayed result
        let computed = session.displayed().ok_or_else(|| {
            warn!("email requested before any calculation");
            EmailReportError::NoResults
        })?;

        // 2. Require a plausible recipient
        let recipient = match cmd.recipient.as_deref().map(str::trim) {
            None | Some("") => return Err(EmailReportError::RecipientRequired),
            Some(address) if !is_plausible_address(address) => {
                return Err(EmailReportError::InvalidRecipient(address.to_string()))
            }
            Some(address) => address.to_string(),
        };

        // 3. Render once; HTML body, optional converted attachment
        let report = RoiReport::from_computed(computed, session.is_stale());
        let markdown = self.report_generator.generate(&report)?;
        let html_body = self.export_service.to_html(&markdown).await?;

        let subject = self.subject_for(&report);
        let mut message = EmailMessage::new(&self.from, &recipient, subject, html_body);
        if let Some(format) = self.attachment_format(cmd.attachment).await {
            let base_filename = report.base_filename(&self.filename_prefix);
            let document =
                export_markdown(self.export_service.as_ref(), markdown, format, &base_filename)
                    .await?;
            message = message.with_attachment(document.into());
        }

        // 4. Deliver
        let receipt = self.mailer.send(&message).await.map_err(|e| {
            warn!(error = %e, transient = e.is_transient(), "report email failed");
            EmailReportError::from(e)
        })?;

        info!(
            report_id = %report.id,
            message_id = %receipt.message_id,
            attachments = message.attachments.len(),
            "report emailed"
        );

        let notification = Notification::info(
            "Email sent",
            format!("ROI report sent to {}", recipient),
        );

        Ok(EmailReportResult {
            report_id: report.id,
            recipient,
            receipt,
            notification,
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
