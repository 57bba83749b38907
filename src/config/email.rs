//! Email configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Email configuration (Resend). Email delivery is off while no API key is set.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// Resend API key
    #[serde(default)]
    pub resend_api_key: String,

    /// Resend API base URL
    #[serde(default = "default_base_url")]
    pub resend_base_url: String,

    /// From email address
    #[serde(default = "default_from_email")]
    pub from_email: String,

    /// From name
    #[serde(default = "default_from_name")]
    pub from_name: String,

    /// Fixed subject line; when unset the report title and id are used
    #[serde(default)]
    pub subject: Option<String>,

    /// Per-request timeout against the mail API
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl EmailConfig {
    /// Get formatted "From" header value
    pub fn from_header(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }

    pub fn is_enabled(&self) -> bool {
        !self.resend_api_key.is_empty()
    }

    /// Validate email configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.is_enabled() && !self.resend_api_key.starts_with("re_") {
            return Err(ValidationError::InvalidResendKey);
        }
        if !self.from_email.contains('@') {
            return Err(ValidationError::InvalidFromEmail);
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 120 {
            return Err(ValidationError::InvalidMailTimeout);
        }
        Ok(())
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            resend_api_key: String::new(),
            resend_base_url: default_base_url(),
            from_email: default_from_email(),
            from_name: default_from_name(),
            subject: None,
            request_timeout_secs: default_request_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.resend.com".to_string()
}

fn default_from_email() -> String {
    "reports@training-roi.app".to_string()
}

fn default_from_name() -> String {
    "Training ROI Calculator".to_string()
}

fn default_request_timeout() -> u64 {
    15
}
