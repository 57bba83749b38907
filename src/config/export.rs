//! Report export configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::ports::ExportFormat;

/// Report export configuration (Pandoc, filenames, download target)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ExportConfig {
    /// Pandoc executable; searched on PATH when unset
    pub pandoc_path: Option<String>,

    /// LaTeX engine Pandoc uses for PDF output
    #[serde(default = "default_pdf_engine")]
    pub pdf_engine: String,

    /// Upper bound on one PDF conversion
    #[serde(default = "default_pdf_timeout")]
    pub pdf_timeout_secs: u64,

    /// Embed the report stylesheet in HTML output
    #[serde(default = "default_include_css")]
    pub include_default_css: bool,

    /// Title printed at the top of every report
    #[serde(default = "default_report_title")]
    pub report_title: String,

    /// Filename stem; the report id and extension are appended
    #[serde(default = "default_filename_prefix")]
    pub filename_prefix: String,

    /// Format used when the caller does not pick one
    #[serde(default)]
    pub default_format: ExportFormat,

    /// Directory downloads are written to, if any
    pub download_dir: Option<PathBuf>,
}

impl ExportConfig {
    /// Validate export configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.pdf_timeout_secs == 0 || self.pdf_timeout_secs > 600 {
            return Err(ValidationError::InvalidPdfTimeout);
        }
        if self.filename_prefix.trim().is_empty() {
            return Err(ValidationError::EmptyFilenamePrefix);
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            pandoc_path: None,
            pdf_engine: default_pdf_engine(),
            pdf_timeout_secs: default_pdf_timeout(),
            include_default_css: default_include_css(),
            report_title: default_report_title(),
            filename_prefix: default_filename_prefix(),
            default_format: ExportFormat::default(),
            download_dir: None,
        }
    }
}

fn default_pdf_engine() -> String {
    "xelatex".to_string()
}

fn default_pdf_timeout() -> u64 {
    30
}

fn default_include_css() -> bool {
    true
}

fn default_report_title() -> String {
    "Training ROI Report".to_string()
}

fn default_filename_prefix() -> String {
    "training-roi-report".to_string()
}
