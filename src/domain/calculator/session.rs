//! Calculator session - the state owned by one rendering of the calculator.
//!
//! Holds the editable inputs and the last computed result. Results only
//! change on an explicit [`CalculatorSession::calculate`]; editing an input
//! afterwards keeps the old result on display but marks it stale.

use serde::{Deserialize, Serialize};

use super::inputs::{InputField, TrainingInputs};
use super::insights::KeyInsights;
use super::projections::ChartProjections;
use super::result::RoiResult;
use super::roi_calculator::RoiCalculator;
use crate::domain::foundation::{StateMachine, Timestamp};

/// Lifecycle of the displayed result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultPhase {
    /// Nothing computed yet.
    Uncomputed,
    /// Result matches the current inputs.
    Fresh,
    /// Inputs changed since the result was computed.
    Stale,
}

impl StateMachine for ResultPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ResultPhase::*;
        matches!(
            (self, target),
            (Uncomputed, Fresh) | (Fresh, Fresh) | (Fresh, Stale) | (Stale, Fresh) | (Stale, Stale)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ResultPhase::*;
        match self {
            Uncomputed => vec![Fresh],
            Fresh => vec![Fresh, Stale],
            Stale => vec![Fresh, Stale],
        }
    }
}

/// A result together with the inputs it was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedResult {
    pub inputs: TrainingInputs,
    pub result: RoiResult,
    pub computed_at: Timestamp,
}

impl ComputedResult {
    /// Chart series for this result, always from the snapshot inputs.
    pub fn projections(&self) -> ChartProjections {
        ChartProjections::project(&self.inputs, &self.result)
    }

    pub fn insights(&self) -> KeyInsights {
        KeyInsights::from_result(&self.result)
    }
}

/// Explicit state object for one calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorSession {
    inputs: TrainingInputs,
    phase: ResultPhase,
    computed: Option<ComputedResult>,
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new(TrainingInputs::default())
    }
}

impl CalculatorSession {
    /// Starts a session with the given inputs and no result.
    pub fn new(inputs: TrainingInputs) -> Self {
        Self {
            inputs,
            phase: ResultPhase::Uncomputed,
            computed: None,
        }
    }

    pub fn inputs(&self) -> &TrainingInputs {
        &self.inputs
    }

    pub fn phase(&self) -> ResultPhase {
        self.phase
    }

    /// Overwrites one input. A displayed result becomes stale if the value
    /// actually changed.
    pub fn set_field(&mut self, field: InputField, value: f64) {
        let changed = self.inputs.get(field).to_bits() != value.to_bits();
        self.inputs.set_field(field, value);

        if changed {
            // Uncomputed → Stale is rejected; the session simply stays uncomputed.
            if let Ok(next) = self.phase.transition_to(ResultPhase::Stale) {
                self.phase = next;
            }
        }
    }

    /// Computes a fresh result from the current inputs and displays it.
    pub fn calculate(&mut self) -> &ComputedResult {
        let result = RoiCalculator::compute(&self.inputs);
        // every phase may move to Fresh
        self.phase = ResultPhase::Fresh;
        self.computed.insert(ComputedResult {
            inputs: self.inputs,
            result,
            computed_at: Timestamp::now(),
        })
    }

    /// The last computed result, fresh or stale.
    pub fn displayed(&self) -> Option<&ComputedResult> {
        self.computed.as_ref()
    }

    pub fn displayed_result(&self) -> Option<&RoiResult> {
        self.computed.as_ref().map(|c| &c.result)
    }

    pub fn has_results(&self) -> bool {
        self.computed.is_some()
    }

    pub fn is_stale(&self) -> bool {
        self.phase == ResultPhase::Stale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_has_no_results() {
        let session = CalculatorSession::default();
        assert_eq!(session.phase(), ResultPhase::Uncomputed);
        assert!(!session.has_results());
        assert!(session.displayed_result().is_none());
    }

    #[test]
    fn editing_before_compute_stays_uncomputed() {
        let mut session = CalculatorSession::default();
        session.set_field(InputField::TrainingCost, 1.0);
        assert_eq!(session.phase(), ResultPhase::Uncomputed);
        assert_eq!(session.inputs().training_cost, 1.0);
    }

    #[test]
    fn calculate_makes_result_fresh() {
        let mut session = CalculatorSession::default();
        let computed = *session.calculate();

        assert_eq!(session.phase(), ResultPhase::Fresh);
        assert_eq!(computed.result.total_costs, 1_150_000.0);
        assert_eq!(session.displayed_result(), Some(&computed.result));
    }

    #[test]
    fn editing_after_compute_marks_stale_but_keeps_result() {
        let mut session = CalculatorSession::default();
        let before = session.calculate().result;

        session.set_field(InputField::ParticipantsCount, 100.0);

        assert!(session.is_stale());
        assert_eq!(session.displayed_result(), Some(&before));
        assert_eq!(session.displayed().unwrap().inputs.participants_count, 50.0);
    }

    #[test]
    fn rewriting_same_value_keeps_result_fresh() {
        let mut session = CalculatorSession::default();
        session.calculate();
        session.set_field(InputField::TrainingCost, 350_000.0);
        assert_eq!(session.phase(), ResultPhase::Fresh);
    }

    #[test]
    fn recalculating_replaces_stale_result() {
        let mut session = CalculatorSession::default();
        session.calculate();
        session.set_field(InputField::TrainingCost, 0.0);
        let fresh = session.calculate().result;

        assert_eq!(session.phase(), ResultPhase::Fresh);
        assert_eq!(fresh.total_costs, 800_000.0);
    }

    #[test]
    fn projections_follow_snapshot_not_edited_inputs() {
        let mut session = CalculatorSession::default();
        session.calculate();
        session.set_field(InputField::TrainingCost, 1.0);

        let projections = session.displayed().unwrap().projections();
        assert_eq!(projections.cost_breakdown[0].value, 350_000.0);
    }

    #[test]
    fn phase_transitions_follow_state_machine() {
        assert!(ResultPhase::Uncomputed.can_transition_to(&ResultPhase::Fresh));
        assert!(!ResultPhase::Uncomputed.can_transition_to(&ResultPhase::Stale));
        assert!(ResultPhase::Stale.can_transition_to(&ResultPhase::Fresh));
        assert!(!ResultPhase::Fresh.can_transition_to(&ResultPhase::Uncomputed));

        for phase in [ResultPhase::Uncomputed, ResultPhase::Fresh, ResultPhase::Stale] {
            assert!(!phase.is_terminal());
            for target in phase.valid_transitions() {
                assert!(phase.can_transition_to(&target));
            }
        }
    }
}
