//! CalculateRoiHandler - the compute action.
//!
//! Computes a fresh result from the session's current inputs. Inputs are
//! never clamped; out-of-range values are computed as given and reported
//! back as warnings.

use tracing::{info, warn};

use crate::application::Notification;
use crate::domain::calculator::{CalculatorSession, ComputedResult, ResultPhase};
use crate::domain::foundation::ValidationError;
use crate::domain::formatting::{format_months, format_percent};

/// Result of a compute.
#[derive(Debug, Clone)]
pub struct CalculateRoiResult {
    pub computed: ComputedResult,
    /// Phase the session was in before computing.
    pub previous_phase: ResultPhase,
    /// Input problems that did not block the computation.
    pub warnings: Vec<ValidationError>,
    pub notification: Notification,
}

/// Handler for the compute action.
///
/// # Usage
///
/// ```rust,ignore
/// let handler = CalculateRoiHandler::new();
/// let result = handler.handle(&mut session);
/// println!("{}", result.notification.description);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CalculateRoiHandler;

impl CalculateRoiHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, session: &mut CalculatorSession) -> CalculateRoiResult {
        let previous_phase = session.phase();

        // 1. Collect input warnings without touching the values
        let warnings = session.inputs().validate().err().unwrap_or_default();
        for warning in &warnings {
            warn!(field = warning.field(), %warning, "computing with out-of-range input");
        }

        // 2. Compute and display
        let computed = *session.calculate();
        let result = &computed.result;

        info!(
            total_costs = result.total_costs,
            total_benefits = result.total_benefits,
            roi = result.roi,
            previous_phase = ?previous_phase,
            "calculated training ROI"
        );

        let notification = Notification::info(
            "ROI calculated",
            format!(
                "ROI of {} with a payback period of {}",
                format_percent(result.roi),
                format_months(&result.payback_period)
            ),
        );

        CalculateRoiResult {
            computed,
            previous_phase,
            warnings,
            notification,
        }
    }
}
