//! Email adapters - Implementations of the Mailer port.
//!
//! - `ResendMailer` - Delivers through the Resend HTTP API
//! - `InMemoryMailer` - Records messages for tests and local runs

mod in_memory_mailer;
mod resend_mailer;

pub use in_memory_mailer::InMemoryMailer;
pub use resend_mailer::{ResendConfig, ResendMailer};
