//! Calculator defaults configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::calculator::{
    TrainingInputs, DEFAULT_ANNUAL_REVENUE, DEFAULT_EMPLOYEE_HOURLY_RATE,
    DEFAULT_EMPLOYEE_RETENTION, DEFAULT_PARTICIPANTS_COUNT, DEFAULT_PRODUCTIVITY_INCREASE,
    DEFAULT_TRAINING_COST, DEFAULT_TRAINING_DURATION,
};

/// Starting values shown in the calculator form.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CalculatorConfig {
    #[serde(default = "default_training_cost")]
    pub training_cost: f64,

    #[serde(default = "default_participants_count")]
    pub participants_count: f64,

    #[serde(default = "default_employee_hourly_rate")]
    pub employee_hourly_rate: f64,

    #[serde(default = "default_training_duration")]
    pub training_duration: f64,

    #[serde(default = "default_productivity_increase")]
    pub productivity_increase: f64,

    #[serde(default = "default_employee_retention")]
    pub employee_retention: f64,

    #[serde(default = "default_annual_revenue")]
    pub annual_revenue: f64,
}

impl CalculatorConfig {
    /// The configured defaults as calculator inputs.
    pub fn initial_inputs(&self) -> TrainingInputs {
        TrainingInputs {
            training_cost: self.training_cost,
            participants_count: self.participants_count,
            employee_hourly_rate: self.employee_hourly_rate,
            training_duration: self.training_duration,
            productivity_increase: self.productivity_increase,
            employee_retention: self.employee_retention,
            annual_revenue: self.annual_revenue,
        }
    }

    /// Configured defaults must themselves pass input validation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.initial_inputs().validate().map_err(|errors| {
            let joined = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            ValidationError::InvalidDefaultInput(joined)
        })
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            training_cost: default_training_cost(),
            participants_count: default_participants_count(),
            employee_hourly_rate: default_employee_hourly_rate(),
            training_duration: default_training_duration(),
            productivity_increase: default_productivity_increase(),
            employee_retention: default_employee_retention(),
            annual_revenue: default_annual_revenue(),
        }
    }
}

fn default_training_cost() -> f64 {
    DEFAULT_TRAINING_COST
}

fn default_participants_count() -> f64 {
    DEFAULT_PARTICIPANTS_COUNT
}

fn default_employee_hourly_rate() -> f64 {
    DEFAULT_EMPLOYEE_HOURLY_RATE
}

fn default_training_duration() -> f64 {
    DEFAULT_TRAINING_DURATION
}

fn default_productivity_increase() -> f64 {
    DEFAULT_PRODUCTIVITY_INCREASE
}

fn default_employee_retention() -> f64 {
    DEFAULT_EMPLOYEE_RETENTION
}

fn default_annual_revenue() -> f64 {
    DEFAULT_ANNUAL_REVENUE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_domain_defaults() {
        assert_eq!(CalculatorConfig::default().initial_inputs(), TrainingInputs::default());
    }

    #[test]
    fn partial_json_fills_remaining_defaults() {
        let config: CalculatorConfig =
            serde_json::from_str(r#"{"training_cost": 120000, "participants_count": 12}"#).unwrap();
        let inputs = config.initial_inputs();

        assert_eq!(inputs.training_cost, 120_000.0);
        assert_eq!(inputs.participants_count, 12.0);
        assert_eq!(inputs.annual_revenue, DEFAULT_ANNUAL_REVENUE);
    }

    #[test]
    fn validation_rejects_out_of_range_default() {
        let config = CalculatorConfig {
            productivity_increase: 75.0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("productivityIncrease"));
    }

    #[test]
    fn validation_accepts_defaults() {
        assert!(CalculatorConfig::default().validate().is_ok());
    }
}
