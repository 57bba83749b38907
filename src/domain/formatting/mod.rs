//! Display formatting for calculator figures.
//!
//! Currency follows the en-IN locale: rupee sign, Indian digit grouping,
//! no fraction digits. Percentages carry two decimals, months one.

mod currency;
mod percent;

pub use currency::{format_inr, format_millions, NOT_AVAILABLE, RUPEE_SYMBOL};
pub use percent::{format_months, format_percent};
