//! Resend Mailer - Implementation of Mailer over the Resend HTTP API.
//!
//! ```ignore
//! let config = ResendConfig::new(api_key).with_base_url("https://api.resend.com");
//! let mailer = ResendMailer::new(config)?;
//! mailer.send(&message).await?;
//! ```

use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::EmailConfig;
use crate::ports::{
    is_plausible_address, DeliveryReceipt, EmailMessage, MailError, Mailer,
};

/// Configuration for the Resend mailer.
#[derive(Debug, Clone)]
pub struct ResendConfig {
    api_key: Secret<String>,
    pub base_url: String,
    pub timeout: Duration,
}

impl ResendConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: "https://api.resend.com".to_string(),
            timeout: Duration::from_secs(15),
        }
    }

    /// Builds adapter config from the `email` config section.
    pub fn from_email_config(config: &EmailConfig) -> Result<Self, MailError> {
        if !config.is_enabled() {
            return Err(MailError::configuration("Resend API key is not configured"));
        }
        Ok(Self::new(config.resend_api_key.clone())
            .with_base_url(config.resend_base_url.clone())
            .with_timeout(Duration::from_secs(config.request_timeout_secs)))
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Mailer backed by Resend.
pub struct ResendMailer {
    config: ResendConfig,
    client: Client,
}

impl ResendMailer {
    pub fn new(config: ResendConfig) -> Result<Self, MailError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| MailError::configuration(format!("HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn emails_url(&self) -> String {
        format!("{}/emails", self.config.base_url)
    }

    /// Converts our message to Resend's request body.
    fn to_resend_request(message: &EmailMessage) -> ResendRequest {
        ResendRequest {
            from: message.from.clone(),
            to: message.to.iter().map(|t| t.trim().to_string()).collect(),
            subject: message.subject.clone(),
            html: message.html_body.clone(),
            attachments: message
                .attachments
                .iter()
                .map(|a| ResendAttachment {
                    filename: a.filename.clone(),
                    content: STANDARD.encode(&a.content),
                })
                .collect(),
        }
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, message: &EmailMessage) -> Result<DeliveryReceipt, MailError> {
        if let Some(bad) = message.to.iter().find(|t| !is_plausible_address(t)) {
            return Err(MailError::InvalidRecipient(bad.clone()));
        }
        if message.to.is_empty() {
            return Err(MailError::InvalidRecipient(String::new()));
        }

        let body = Self::to_resend_request(message);
        let response = self
            .client
            .post(self.emails_url())
            .bearer_auth(self.config.api_key())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    MailError::Timeout(self.config.timeout.as_secs())
                } else if e.is_connect() {
                    MailError::network(format!("Connection failed: {}", e))
                } else {
                    MailError::network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let reason = serde_json::from_str::<ResendErrorBody>(&text)
                .map(|b| b.message)
                .unwrap_or(text);
            warn!(status = status.as_u16(), %reason, "resend rejected email");
            return Err(MailError::Rejected {
                status: status.as_u16(),
                message: reason,
            });
        }

        let parsed: ResendResponse = response
            .json()
            .await
            .map_err(|e| MailError::network(format!("Invalid response body: {}", e)))?;

        debug!(message_id = %parsed.id, "email accepted by resend");
        Ok(DeliveryReceipt {
            message_id: parsed.id,
        })
    }
}

#[derive(Debug, Serialize)]
struct ResendRequest {
    from: String,
    to: Vec<String>,
    subject: String,
    html: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attachments: Vec<ResendAttachment>,
}

#[derive(Debug, Serialize)]
struct ResendAttachment {
    filename: String,
    /// Base64-encoded file content.
    content: String,
}

#[derive(Debug, Deserialize)]
struct ResendResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ResendErrorBody {
    message: String,
}
