//! Document adapters - Report rendering and format conversion.
//!
//! - `TemplateReportGenerator` - Renders an ROI report as markdown
//! - `PulldownExportService` - Converts markdown to HTML (pulldown-cmark) or PDF (Pandoc)

mod pulldown_export_service;
mod template_report_generator;

pub use pulldown_export_service::PulldownExportService;
pub use template_report_generator::TemplateReportGenerator;
