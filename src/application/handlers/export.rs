//! Markdown to download-format conversion shared by the export handlers.

use crate::ports::{DocumentExportService, ExportError, ExportFormat, ExportedDocument};

/// Converts a rendered markdown report into `format`.
pub(super) async fn export_markdown(
    exporter: &dyn DocumentExportService,
    markdown: String,
    format: ExportFormat,
    base_filename: &str,
) -> Result<ExportedDocument, ExportError> {
    match format {
        ExportFormat::Markdown => Ok(ExportedDocument::from_markdown(markdown, base_filename)),
        ExportFormat::Html => {
            let html = exporter.to_html(&markdown).await?;
            Ok(ExportedDocument::from_html(html, base_filename))
        }
        ExportFormat::Pdf => {
            let pdf = exporter.to_pdf(&markdown).await?;
            Ok(ExportedDocument::from_pdf(pdf, base_filename))
        }
    }
}

/// Upper-case label used in notifications ("PDF", "HTML", "MD").
pub(super) fn format_label(format: ExportFormat) -> String {
    format.extension().to_uppercase()
}
