//! Training inputs - the seven parameters the calculator works from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Default direct training cost (₹).
pub const DEFAULT_TRAINING_COST: f64 = 350_000.0;
/// Default number of participants.
pub const DEFAULT_PARTICIPANTS_COUNT: f64 = 50.0;
/// Default average hourly rate (₹).
pub const DEFAULT_EMPLOYEE_HOURLY_RATE: f64 = 1_000.0;
/// Default training duration (hours).
pub const DEFAULT_TRAINING_DURATION: f64 = 16.0;
/// Default expected productivity increase (%).
pub const DEFAULT_PRODUCTIVITY_INCREASE: f64 = 15.0;
/// Default expected retention improvement (%).
pub const DEFAULT_EMPLOYEE_RETENTION: f64 = 10.0;
/// Default annual revenue per employee (₹).
pub const DEFAULT_ANNUAL_REVENUE: f64 = 10_000_000.0;

/// Names one editable field of [`TrainingInputs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputField {
    TrainingCost,
    ParticipantsCount,
    EmployeeHourlyRate,
    TrainingDuration,
    ProductivityIncrease,
    EmployeeRetention,
    AnnualRevenue,
}

impl InputField {
    /// All fields, in form order.
    pub const ALL: [InputField; 7] = [
        InputField::TrainingCost,
        InputField::ParticipantsCount,
        InputField::EmployeeHourlyRate,
        InputField::TrainingDuration,
        InputField::AnnualRevenue,
        InputField::ProductivityIncrease,
        InputField::EmployeeRetention,
    ];

    /// The camelCase key used by the form layer.
    pub fn key(&self) -> &'static str {
        match self {
            InputField::TrainingCost => "trainingCost",
            InputField::ParticipantsCount => "participantsCount",
            InputField::EmployeeHourlyRate => "employeeHourlyRate",
            InputField::TrainingDuration => "trainingDuration",
            InputField::ProductivityIncrease => "productivityIncrease",
            InputField::EmployeeRetention => "employeeRetention",
            InputField::AnnualRevenue => "annualRevenue",
        }
    }

    /// Form label.
    pub fn label(&self) -> &'static str {
        match self {
            InputField::TrainingCost => "Total Training Cost (₹)",
            InputField::ParticipantsCount => "Number of Participants",
            InputField::EmployeeHourlyRate => "Average Hourly Rate (₹)",
            InputField::TrainingDuration => "Training Duration (hours)",
            InputField::ProductivityIncrease => "Productivity Increase (%)",
            InputField::EmployeeRetention => "Employee Retention Improvement (%)",
            InputField::AnnualRevenue => "Annual Revenue Per Employee (₹)",
        }
    }

    /// Slider bounds for the percentage fields; `None` for free-text fields.
    pub fn slider_range(&self) -> Option<(f64, f64)> {
        match self {
            InputField::ProductivityIncrease => Some((0.0, 50.0)),
            InputField::EmployeeRetention => Some((0.0, 30.0)),
            _ => None,
        }
    }

    /// True for fields that count whole things.
    pub fn is_integral(&self) -> bool {
        matches!(self, InputField::ParticipantsCount)
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for InputField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trainingCost" | "training_cost" => Ok(InputField::TrainingCost),
            "participantsCount" | "participants_count" => Ok(InputField::ParticipantsCount),
            "employeeHourlyRate" | "employee_hourly_rate" => Ok(InputField::EmployeeHourlyRate),
            "trainingDuration" | "training_duration" => Ok(InputField::TrainingDuration),
            "productivityIncrease" | "productivity_increase" => {
                Ok(InputField::ProductivityIncrease)
            }
            "employeeRetention" | "employee_retention" => Ok(InputField::EmployeeRetention),
            "annualRevenue" | "annual_revenue" => Ok(InputField::AnnualRevenue),
            other => Err(ValidationError::invalid_format(
                "field",
                format!("unknown input field '{}'", other),
            )),
        }
    }
}

/// The calculator's input parameters.
///
/// Setters overwrite unconditionally, negatives included; use
/// [`TrainingInputs::validate`] where a form layer wants to reject bad data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingInputs {
    pub training_cost: f64,
    pub participants_count: f64,
    pub employee_hourly_rate: f64,
    pub training_duration: f64,
    pub productivity_increase: f64,
    pub employee_retention: f64,
    pub annual_revenue: f64,
}

impl Default for TrainingInputs {
    fn default() -> Self {
        Self {
            training_cost: DEFAULT_TRAINING_COST,
            participants_count: DEFAULT_PARTICIPANTS_COUNT,
            employee_hourly_rate: DEFAULT_EMPLOYEE_HOURLY_RATE,
            training_duration: DEFAULT_TRAINING_DURATION,
            productivity_increase: DEFAULT_PRODUCTIVITY_INCREASE,
            employee_retention: DEFAULT_EMPLOYEE_RETENTION,
            annual_revenue: DEFAULT_ANNUAL_REVENUE,
        }
    }
}

impl TrainingInputs {
    /// Inputs with every field set to zero.
    pub fn zeroed() -> Self {
        Self {
            training_cost: 0.0,
            participants_count: 0.0,
            employee_hourly_rate: 0.0,
            training_duration: 0.0,
            productivity_increase: 0.0,
            employee_retention: 0.0,
            annual_revenue: 0.0,
        }
    }

    /// Reads one field.
    pub fn get(&self, field: InputField) -> f64 {
        match field {
            InputField::TrainingCost => self.training_cost,
            InputField::ParticipantsCount => self.participants_count,
            InputField::EmployeeHourlyRate => self.employee_hourly_rate,
            InputField::TrainingDuration => self.training_duration,
            InputField::ProductivityIncrease => self.productivity_increase,
            InputField::EmployeeRetention => self.employee_retention,
            InputField::AnnualRevenue => self.annual_revenue,
        }
    }

    /// Overwrites one field in place.
    pub fn set_field(&mut self, field: InputField, value: f64) {
        let slot = match field {
            InputField::TrainingCost => &mut self.training_cost,
            InputField::ParticipantsCount => &mut self.participants_count,
            InputField::EmployeeHourlyRate => &mut self.employee_hourly_rate,
            InputField::TrainingDuration => &mut self.training_duration,
            InputField::ProductivityIncrease => &mut self.productivity_increase,
            InputField::EmployeeRetention => &mut self.employee_retention,
            InputField::AnnualRevenue => &mut self.annual_revenue,
        };
        *slot = value;
    }

    /// Reducer form of [`set_field`](Self::set_field).
    pub fn with_field(mut self, field: InputField, value: f64) -> Self {
        self.set_field(field, value);
        self
    }

    /// Checks every field and returns all problems found.
    ///
    /// Amounts must be finite and non-negative, the participant count must be
    /// a whole number, and the two percentages must sit inside their slider
    /// ranges.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let errors: Vec<ValidationError> = InputField::ALL
            .iter()
            .filter_map(|field| Self::check_field(*field, self.get(*field)))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn check_field(field: InputField, value: f64) -> Option<ValidationError> {
        if !value.is_finite() {
            return Some(ValidationError::not_finite(field.key()));
        }
        if let Some((min, max)) = field.slider_range() {
            if value < min || value > max {
                return Some(ValidationError::out_of_range(field.key(), min, max, value));
            }
            return None;
        }
        if value < 0.0 {
            return Some(ValidationError::negative(field.key(), value));
        }
        if field.is_integral() && value.fract() != 0.0 {
            return Some(ValidationError::invalid_format(
                field.key(),
                "must be a whole number",
            ));
        }
        None
    }
}
