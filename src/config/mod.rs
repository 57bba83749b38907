//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables with the
//! `config` and `dotenvy` crates. Variables use the `TRAINING_ROI` prefix and
//! nested values are separated by double underscores. Every section has
//! defaults, so an empty environment yields a working calculator with email
//! delivery switched off.
//!
//! # Example
//!
//! ```no_run
//! use training_roi::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("PDF timeout: {}s", config.export.pdf_timeout_secs);
//! ```

mod calculator;
mod email;
mod error;
mod export;
mod logging;

pub use calculator::CalculatorConfig;
pub use email::EmailConfig;
pub use error::{ConfigError, ValidationError};
pub use export::ExportConfig;
pub use logging::LoggingConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Initial calculator inputs
    #[serde(default)]
    pub calculator: CalculatorConfig,

    /// Report export configuration (Pandoc, filenames)
    #[serde(default)]
    pub export: ExportConfig,

    /// Email configuration (Resend)
    #[serde(default)]
    pub email: EmailConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `TRAINING_ROI` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `TRAINING_ROI__EXPORT__PDF_TIMEOUT_SECS=60` -> `export.pdf_timeout_secs = 60`
    /// - `TRAINING_ROI__CALCULATOR__TRAINING_COST=500000` -> `calculator.training_cost = 500000`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TRAINING_ROI")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load and validate in one step.
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.calculator.validate()?;
        self.export.validate()?;
        self.email.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ExportFormat;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "TRAINING_ROI__CALCULATOR__TRAINING_COST",
        "TRAINING_ROI__CALCULATOR__PARTICIPANTS_COUNT",
        "TRAINING_ROI__EXPORT__PDF_TIMEOUT_SECS",
        "TRAINING_ROI__EXPORT__DEFAULT_FORMAT",
        "TRAINING_ROI__EMAIL__RESEND_API_KEY",
        "TRAINING_ROI__EMAIL__FROM_EMAIL",
        "TRAINING_ROI__LOGGING__LEVEL",
        "TRAINING_ROI__LOGGING__JSON",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.calculator, CalculatorConfig::default());
        assert!(!config.email.is_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TRAINING_ROI__CALCULATOR__TRAINING_COST", "500000");
        env::set_var("TRAINING_ROI__CALCULATOR__PARTICIPANTS_COUNT", "80");
        env::set_var("TRAINING_ROI__EXPORT__PDF_TIMEOUT_SECS", "60");
        env::set_var("TRAINING_ROI__EXPORT__DEFAULT_FORMAT", "html");
        env::set_var("TRAINING_ROI__EMAIL__RESEND_API_KEY", "re_xxx");
        env::set_var("TRAINING_ROI__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.calculator.training_cost, 500_000.0);
        assert_eq!(config.calculator.initial_inputs().participants_count, 80.0);
        assert_eq!(config.export.pdf_timeout_secs, 60);
        assert_eq!(config.export.default_format, ExportFormat::Html);
        assert!(config.email.is_enabled());
        assert!(config.logging.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_email_section() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TRAINING_ROI__EMAIL__RESEND_API_KEY", "re_xxx");
        env::set_var("TRAINING_ROI__EMAIL__FROM_EMAIL", "nobody");
        let result = AppConfig::load_validated();
        clear_env();

        assert!(matches!(
            result,
            Err(ConfigError::ValidationFailed(ValidationError::InvalidFromEmail))
        ));
    }

    #[test]
    fn test_validate_rejects_negative_default_input() {
        let config = AppConfig {
            calculator: CalculatorConfig {
                training_cost: -1.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidDefaultInput(_))
        ));
    }
}
