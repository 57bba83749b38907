//! Calculator Module - the ROI computation core.
//!
//! # Components
//!
//! - `TrainingInputs` / `InputField` - the seven editable parameters
//! - `RoiCalculator` - pure cost, benefit, ROI and payback arithmetic
//! - `projections` - chart series (cost split, benefit split, 12-month timeline)
//! - `KeyInsights` - narrative bullets for a result
//! - `CalculatorSession` - inputs plus the Uncomputed/Fresh/Stale result phase
//! - `RoiReport` - snapshot handed to report generation
//!
//! Everything here is synchronous and free of I/O.

mod inputs;
mod insights;
pub mod projections;
mod report;
mod result;
mod roi_calculator;
mod session;

pub use inputs::{
    InputField, TrainingInputs, DEFAULT_ANNUAL_REVENUE, DEFAULT_EMPLOYEE_HOURLY_RATE,
    DEFAULT_EMPLOYEE_RETENTION, DEFAULT_PARTICIPANTS_COUNT, DEFAULT_PRODUCTIVITY_INCREASE,
    DEFAULT_TRAINING_COST, DEFAULT_TRAINING_DURATION,
};
pub use insights::{KeyInsights, Outlook};
pub use projections::{ChartProjections, ChartSlice, TimelinePoint, TIMELINE_MONTHS};
pub use report::RoiReport;
pub use result::{PaybackPeriod, RoiBreakdown, RoiResult};
pub use roi_calculator::{RoiCalculator, MONTHS_PER_YEAR, RETENTION_VALUE_FACTOR};
pub use session::{CalculatorSession, ComputedResult, ResultPhase};
