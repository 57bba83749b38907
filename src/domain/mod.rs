//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, state machine, errors)
//! - `calculator` - Training ROI inputs, computation, projections and session state
//! - `formatting` - en-IN currency, percentage and month display strings

pub mod calculator;
pub mod formatting;
pub mod foundation;
