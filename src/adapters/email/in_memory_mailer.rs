//! In-memory mailer - records messages instead of sending them.
//!
//! Used in tests and local development where no mail provider is wired.

use std::sync::Mutex;

use async_trait::async_trait;
use tracing::info;

use crate::ports::{is_plausible_address, DeliveryReceipt, EmailMessage, MailError, Mailer};

/// Mailer that keeps every accepted message in memory.
#[derive(Debug, Default)]
pub struct InMemoryMailer {
    sent: Mutex<Vec<EmailMessage>>,
    fail_with: Mutex<Option<MailError>>,
}

impl InMemoryMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every following send fail with `error`.
    pub fn fail_with(&self, error: MailError) {
        *self.fail_with.lock().unwrap_or_else(|e| e.into_inner()) = Some(error);
    }

    /// Messages accepted so far, oldest first.
    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

#[async_trait]
impl Mailer for InMemoryMailer {
    async fn send(&self, message: &EmailMessage) -> Result<DeliveryReceipt, MailError> {
        if let Some(err) = self.fail_with.lock().unwrap_or_else(|e| e.into_inner()).clone() {
            return Err(err);
        }
        if let Some(bad) = message.to.iter().find(|t| !is_plausible_address(t)) {
            return Err(MailError::InvalidRecipient(bad.clone()));
        }

        let mut sent = self.sent.lock().unwrap_or_else(|e| e.into_inner());
        sent.push(message.clone());
        let message_id = format!("in-memory-{}", sent.len());

        info!(%message_id, to = ?message.to, "recorded email");
        Ok(DeliveryReceipt { message_id })
    }
}
