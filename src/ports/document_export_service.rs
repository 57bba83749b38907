//! Document Export Service Port - Report format conversion interface.
//!
//! Converts a markdown ROI report into a downloadable format. The download
//! and email actions depend on this trait; `PulldownExportService` provides
//! HTML via pulldown-cmark and PDF via Pandoc.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Port for exporting markdown reports to other formats.
///
/// # Contract
///
/// Implementations must:
/// - Convert valid markdown to the target format
/// - Keep tables and lists intact
/// - Report clear errors for conversion failures
#[async_trait]
pub trait DocumentExportService: Send + Sync {
    /// Convert markdown content to PDF bytes.
    async fn to_pdf(&self, markdown: &str) -> Result<Vec<u8>, ExportError>;

    /// Convert markdown content to a complete, styled HTML document.
    async fn to_html(&self, markdown: &str) -> Result<String, ExportError>;

    /// Check whether PDF conversion can run right now.
    async fn is_available(&self) -> bool;
}

/// Export formats offered for download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Raw markdown (no conversion needed).
    Markdown,
    /// PDF document.
    #[default]
    Pdf,
    /// HTML document.
    Html,
}

impl ExportFormat {
    /// MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "text/markdown; charset=utf-8",
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Html => "text/html; charset=utf-8",
        }
    }

    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Html => "html",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "pdf" => Ok(ExportFormat::Pdf),
            "html" | "htm" => Ok(ExportFormat::Html),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// An exported report ready to download or attach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    pub content: Vec<u8>,
    pub content_type: String,
    pub filename: String,
    pub format: ExportFormat,
}

impl ExportedDocument {
    pub fn new(content: Vec<u8>, format: ExportFormat, base_filename: &str) -> Self {
        Self {
            content,
            content_type: format.content_type().to_string(),
            filename: format!("{}.{}", base_filename, format.extension()),
            format,
        }
    }

    pub fn from_markdown(markdown: String, base_filename: &str) -> Self {
        Self::new(markdown.into_bytes(), ExportFormat::Markdown, base_filename)
    }

    pub fn from_html(html: String, base_filename: &str) -> Self {
        Self::new(html.into_bytes(), ExportFormat::Html, base_filename)
    }

    pub fn from_pdf(pdf_bytes: Vec<u8>, base_filename: &str) -> Self {
        Self::new(pdf_bytes, ExportFormat::Pdf, base_filename)
    }

    pub fn size_bytes(&self) -> usize {
        self.content.len()
    }

    /// Hex-encoded SHA-256 of the content.
    pub fn checksum(&self) -> String {
        let digest = Sha256::digest(&self.content);
        digest.iter().map(|b| format!("{:02x}", b)).collect()
    }

    /// Writes the document into `dir` under its own filename.
    ///
    /// Writes to a temporary sibling first and renames, so a failed write
    /// never leaves a partial file behind.
    pub async fn save_to(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| ExportError::io_error(format!("create {}: {}", dir.display(), e)))?;

        let target = dir.join(&self.filename);
        let temp = dir.join(format!(".{}.tmp", self.filename));

        tokio::fs::write(&temp, &self.content)
            .await
            .map_err(|e| ExportError::io_error(format!("write {}: {}", temp.display(), e)))?;
        tokio::fs::rename(&temp, &target)
            .await
            .map_err(|e| ExportError::io_error(format!("rename {}: {}", target.display(), e)))?;

        Ok(target)
    }
}

/// Errors that can occur during report export.
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// External converter (Pandoc) is not available.
    #[error("Export service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("PDF conversion failed: {0}")]
    PdfConversionFailed(String),

    #[error("HTML conversion failed: {0}")]
    HtmlConversionFailed(String),

    #[error("Conversion timed out after {0} seconds")]
    Timeout(u64),

    #[error("I/O error during export: {0}")]
    IoError(String),
}

impl ExportError {
    pub fn service_unavailable(reason: impl Into<String>) -> Self {
        Self::ServiceUnavailable(reason.into())
    }

    pub fn pdf_failed(reason: impl Into<String>) -> Self {
        Self::PdfConversionFailed(reason.into())
    }

    pub fn html_failed(reason: impl Into<String>) -> Self {
        Self::HtmlConversionFailed(reason.into())
    }

    pub fn io_error(reason: impl Into<String>) -> Self {
        Self::IoError(reason.into())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
