//! Key insights - short narrative bullets summarizing a result.

use serde::{Deserialize, Serialize};

use super::result::RoiResult;
use crate::domain::formatting::{format_inr, format_months, format_percent};

/// Whether the result reads as a gain or a loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outlook {
    Positive,
    Negative,
}

impl Outlook {
    pub fn of(result: &RoiResult) -> Self {
        if result.is_positive() {
            Outlook::Positive
        } else {
            Outlook::Negative
        }
    }

    /// Arrow shown beside a signed figure on the summary cards.
    pub fn arrow(value: f64) -> &'static str {
        if value > 0.0 {
            "▲"
        } else {
            "▼"
        }
    }
}

/// Bullets rendered under "Key Insights".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyInsights {
    pub outlook: Outlook,
    pub bullets: Vec<String>,
}

impl KeyInsights {
    pub fn from_result(result: &RoiResult) -> Self {
        let outlook = Outlook::of(result);
        let roi = format_percent(result.roi);

        let bullets = match outlook {
            Outlook::Positive => vec![
                format!(
                    "Your training program is projected to deliver a positive ROI of {}",
                    roi
                ),
                format!(
                    "You can expect to recover your investment within {}",
                    format_months(&result.payback_period)
                ),
                format!(
                    "The net benefit of {} represents a significant return on your L&D investment",
                    format_inr(result.net_benefit)
                ),
            ],
            Outlook::Negative => vec![
                format!("Your training program currently shows a negative ROI of {}", roi),
                "Consider adjusting training parameters to improve potential returns".to_string(),
                "Focus on areas with higher impact on productivity or employee retention"
                    .to_string(),
            ],
        };

        Self { outlook, bullets }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calculator::{InputField, RoiCalculator, TrainingInputs};

    #[test]
    fn positive_result_mentions_roi_payback_and_net_benefit() {
        let result = RoiCalculator::compute(&TrainingInputs::default());
        let insights = KeyInsights::from_result(&result);

        assert_eq!(insights.outlook, Outlook::Positive);
        assert_eq!(insights.bullets.len(), 3);
        assert!(insights.bullets[0].contains("43.48%"));
        assert!(insights.bullets[1].contains("8.4 months"));
        assert!(insights.bullets[2].contains("₹5,00,000"));
    }

    #[test]
    fn negative_result_suggests_adjustments() {
        let inputs = TrainingInputs::default().with_field(InputField::ProductivityIncrease, 0.0);
        let result = RoiCalculator::compute(&inputs);
        let insights = KeyInsights::from_result(&result);

        assert_eq!(insights.outlook, Outlook::Negative);
        assert!(insights.bullets[0].contains("negative ROI of -86.96%"));
        assert!(insights.bullets[1].starts_with("Consider adjusting"));
    }

    #[test]
    fn zero_roi_counts_as_negative_outlook() {
        let result = RoiCalculator::compute(&TrainingInputs::zeroed());
        assert_eq!(Outlook::of(&result), Outlook::Negative);
    }

    #[test]
    fn arrow_points_by_sign() {
        assert_eq!(Outlook::arrow(1.0), "▲");
        assert_eq!(Outlook::arrow(0.0), "▼");
        assert_eq!(Outlook::arrow(-1.0), "▼");
    }
}
