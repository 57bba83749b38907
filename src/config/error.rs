//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid default input: {0}")]
    InvalidDefaultInput(String),

    #[error("Invalid PDF timeout (must be 1-600 seconds)")]
    InvalidPdfTimeout,

    #[error("Report filename prefix cannot be empty")]
    EmptyFilenamePrefix,

    #[error("Invalid Resend API key format")]
    InvalidResendKey,

    #[error("Invalid from email address")]
    InvalidFromEmail,

    #[error("Invalid mail request timeout (must be 1-120 seconds)")]
    InvalidMailTimeout,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
