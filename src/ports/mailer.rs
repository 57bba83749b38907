//! Mailer Port - Outbound email delivery interface.
//!
//! The email action of the calculator depends on this trait. Adapters
//! (`ResendMailer`, `InMemoryMailer`) provide delivery.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ExportedDocument;

/// Port for sending email.
///
/// # Contract
///
/// Implementations must:
/// - Deliver to every address in `to`
/// - Include the attachment, if any, unmodified
/// - Return a provider message id on success
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send one message.
    ///
    /// # Errors
    ///
    /// Returns `MailError` if the provider rejects or cannot be reached.
    async fn send(&self, message: &EmailMessage) -> Result<DeliveryReceipt, MailError>;
}

/// A file attached to an email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAttachment {
    pub filename: String,
    pub content_type: String,
    pub content: Vec<u8>,
}

impl From<ExportedDocument> for EmailAttachment {
    fn from(doc: ExportedDocument) -> Self {
        Self {
            filename: doc.filename,
            content_type: doc.content_type,
            content: doc.content,
        }
    }
}

/// An outbound email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html_body: String,
    pub attachments: Vec<EmailAttachment>,
}

impl EmailMessage {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        subject: impl Into<String>,
        html_body: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: vec![to.into()],
            subject: subject.into(),
            html_body: html_body.into(),
            attachments: Vec::new(),
        }
    }

    pub fn with_attachment(mut self, attachment: EmailAttachment) -> Self {
        self.attachments.push(attachment);
        self
    }
}

/// Provider acknowledgement of a sent message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryReceipt {
    pub message_id: String,
}

/// Errors that can occur when sending email.
#[derive(Debug, Clone, Error)]
pub enum MailError {
    /// Recipient address is malformed.
    #[error("Invalid recipient address: {0}")]
    InvalidRecipient(String),

    /// Provider could not be reached.
    #[error("Network error: {0}")]
    Network(String),

    /// Provider rejected the request.
    #[error("Mail provider rejected message ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// Request exceeded the configured timeout.
    #[error("Mail request timed out after {0} seconds")]
    Timeout(u64),

    /// Adapter is misconfigured.
    #[error("Mailer configuration error: {0}")]
    Configuration(String),
}

impl MailError {
    pub fn network(reason: impl Into<String>) -> Self {
        Self::Network(reason.into())
    }

    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration(reason.into())
    }

    /// True when retrying the same request might succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            MailError::Network(_) | MailError::Timeout(_) => true,
            MailError::Rejected { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

/// Cheap recipient check used before handing a message to a mailer.
pub fn is_plausible_address(address: &str) -> bool {
    let trimmed = address.trim();
    match trimmed.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !trimmed.contains(char::is_whitespace)
        }
        None => false,
    }
}
