//! Pulldown-cmark based export service adapter.
//!
//! - HTML conversion uses pulldown-cmark (pure Rust, always available)
//! - PDF conversion shells out to Pandoc, which must be installed

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use pulldown_cmark::{html, Options, Parser};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::config::ExportConfig;
use crate::ports::{DocumentExportService, ExportError};

const FALLBACK_TITLE: &str = "Training ROI Report";

/// Export service using pulldown-cmark for HTML and Pandoc for PDF.
///
/// ```rust,ignore
/// let service = PulldownExportService::new().with_pdf_timeout(60);
/// let html = service.to_html(&markdown).await?;
/// let pdf = service.to_pdf(&markdown).await?;
/// ```
#[derive(Debug, Clone)]
pub struct PulldownExportService {
    /// Path to pandoc executable. If None, will search PATH.
    pandoc_path: Option<String>,
    pdf_engine: String,
    pdf_timeout_secs: u64,
    include_default_css: bool,
}

impl Default for PulldownExportService {
    fn default() -> Self {
        Self {
            pandoc_path: None,
            pdf_engine: "xelatex".to_string(),
            pdf_timeout_secs: 30,
            include_default_css: true,
        }
    }
}

impl PulldownExportService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the service from the `export` config section.
    pub fn from_config(config: &ExportConfig) -> Self {
        let mut service = Self::new().with_pdf_timeout(config.pdf_timeout_secs);
        if let Some(path) = &config.pandoc_path {
            service = service.with_pandoc_path(path.clone());
        }
        service.pdf_engine = config.pdf_engine.clone();
        service.include_default_css = config.include_default_css;
        service
    }

    pub fn with_pandoc_path(mut self, path: impl Into<String>) -> Self {
        self.pandoc_path = Some(path.into());
        self
    }

    pub fn with_pdf_timeout(mut self, timeout_secs: u64) -> Self {
        self.pdf_timeout_secs = timeout_secs;
        self
    }

    pub fn without_default_css(mut self) -> Self {
        self.include_default_css = false;
        self
    }

    fn pandoc_command(&self) -> &str {
        self.pandoc_path.as_deref().unwrap_or("pandoc")
    }

    fn wrap_html(&self, body: String, title: &str) -> String {
        let css = if self.include_default_css {
            REPORT_CSS
        } else {
            ""
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="en-IN">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
<body>
    <article class="roi-report">
{body}
    </article>
</body>
</html>"#,
            title = html_escape(title),
            css = css,
            body = body
        )
    }

    /// First level-1 heading, or a fallback title.
    fn extract_title(markdown: &str) -> String {
        markdown
            .lines()
            .find_map(|line| line.trim().strip_prefix("# "))
            .map(|t| t.trim().to_string())
            .unwrap_or_else(|| FALLBACK_TITLE.to_string())
    }

    async fn check_pandoc(&self) -> bool {
        let output = Command::new(self.pandoc_command())
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await;

        output.map(|o| o.status.success()).unwrap_or(false)
    }
}

#[async_trait]
impl DocumentExportService for PulldownExportService {
    async fn to_pdf(&self, markdown: &str) -> Result<Vec<u8>, ExportError> {
        if !self.check_pandoc().await {
            warn!(pandoc = self.pandoc_command(), "pandoc not available for PDF export");
            return Err(ExportError::service_unavailable(
                "Pandoc is not installed. PDF export requires Pandoc. \
                 Install from https://pandoc.org/installing.html",
            ));
        }

        let engine = format!("--pdf-engine={}", self.pdf_engine);
        let mut child = Command::new(self.pandoc_command())
            .args([
                "-f",
                "markdown",
                "-t",
                "pdf",
                engine.as_str(),
                "-V",
                "geometry:margin=1in",
                "-V",
                "mainfont=Noto Sans",
            ])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| ExportError::pdf_failed(format!("Failed to start Pandoc: {}", e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(markdown.as_bytes())
                .await
                .map_err(|e| ExportError::pdf_failed(format!("Failed to write to Pandoc: {}", e)))?;
        }

        let output = tokio::time::timeout(
            Duration::from_secs(self.pdf_timeout_secs),
            child.wait_with_output(),
        )
        .await
        .map_err(|_| ExportError::Timeout(self.pdf_timeout_secs))?
        .map_err(|e| ExportError::pdf_failed(format!("Pandoc execution failed: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExportError::pdf_failed(format!(
                "Pandoc returned error: {}",
                stderr.trim()
            )));
        }

        debug!(bytes = output.stdout.len(), "rendered PDF report");
        Ok(output.stdout)
    }

    async fn to_html(&self, markdown: &str) -> Result<String, ExportError> {
        let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
        let parser = Parser::new_ext(markdown, options);

        let mut body = String::new();
        html::push_html(&mut body, parser);

        let title = Self::extract_title(markdown);
        Ok(self.wrap_html(body, &title))
    }

    async fn is_available(&self) -> bool {
        self.check_pandoc().await
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Styling for HTML reports, in the calculator's palette.
const REPORT_CSS: &str = r#"
:root {
    --dark-green: #245e4f;
    --mint: #7ac9a7;
    --gold: #e9c46a;
    --text: #1f2937;
    --muted: #f3f4f6;
    --border: #e5e7eb;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Arial, sans-serif;
    line-height: 1.6;
    color: var(--text);
    max-width: 900px;
    margin: 0 auto;
    padding: 2rem;
}

h1 {
    color: var(--dark-green);
    border-bottom: 3px solid var(--gold);
    padding-bottom: 0.5rem;
}

h2 {
    color: var(--dark-green);
    border-bottom: 1px solid var(--border);
    padding-bottom: 0.25rem;
    margin-top: 2rem;
}

blockquote {
    margin: 1em 0;
    padding: 0.5em 1em;
    border-left: 4px solid var(--gold);
    background-color: var(--muted);
}

table {
    width: 100%;
    border-collapse: collapse;
    margin: 1em 0;
}

th, td {
    padding: 0.5rem;
    text-align: left;
    border: 1px solid var(--border);
}

th {
    background-color: var(--mint);
    color: var(--dark-green);
}

tr:nth-child(even) {
    background-color: var(--muted);
}

@media print {
    body {
        padding: 0;
    }

    table {
        page-break-inside: avoid;
    }
}
"#;
