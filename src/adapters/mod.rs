//! Adapters - Implementations of port interfaces.
//!
//! - `document` - Markdown report generation and HTML/PDF export
//! - `email` - Mail delivery (Resend, in-memory)

pub mod document;
pub mod email;

pub use document::{PulldownExportService, TemplateReportGenerator};
pub use email::{InMemoryMailer, ResendConfig, ResendMailer};
