//! Template-based report generator adapter.
//!
//! Lays an ROI report out as a fixed markdown template: summary cards,
//! inputs, the three chart series as tables, and the key insights.

use crate::config::ExportConfig;
use crate::domain::calculator::projections::break_even_month;
use crate::domain::calculator::{ChartSlice, InputField, Outlook, RoiReport};
use crate::domain::formatting::{format_inr, format_millions, format_months, format_percent};
use crate::ports::{ReportError, ReportGenerator};

const DEFAULT_TITLE: &str = "Training ROI Report";

/// Template-based implementation of ReportGenerator.
#[derive(Debug, Clone)]
pub struct TemplateReportGenerator {
    title: String,
    include_timeline: bool,
}

impl Default for TemplateReportGenerator {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            include_timeline: true,
        }
    }
}

impl TemplateReportGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the generator from the `export` config section.
    pub fn from_config(config: &ExportConfig) -> Self {
        Self::new().with_title(config.report_title.clone())
    }

    /// Overrides the report title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Leaves the month-by-month table out.
    pub fn without_timeline(mut self) -> Self {
        self.include_timeline = false;
        self
    }

    fn check_finite(report: &RoiReport) -> Result<(), ReportError> {
        let r = &report.result;
        let figures = [
            ("total costs", r.total_costs),
            ("total benefits", r.total_benefits),
            ("net benefit", r.net_benefit),
            ("roi", r.roi),
        ];
        for (name, value) in figures {
            if !value.is_finite() {
                return Err(ReportError::invalid_data(format!("{} is not finite", name)));
            }
        }
        Ok(())
    }

    fn header(&self, report: &RoiReport) -> String {
        let mut out = format!("# {}\n\n", self.title);
        out.push_str(&format!(
            "*Generated {} · Report {}*\n\n",
            report.generated_at.to_report_string(),
            report.id.short()
        ));
        if report.stale {
            out.push_str(&format!(
                "> **Note:** inputs were changed after this result was calculated on {}. \
                 Figures reflect the inputs listed below.\n\n",
                report.computed_at.to_report_string()
            ));
        }
        out
    }

    fn summary(report: &RoiReport) -> String {
        let r = &report.result;
        let mut out = String::from("## Summary\n\n");
        out.push_str("| Metric | Value |\n");
        out.push_str("|--------|-------|\n");
        out.push_str(&format!("| Total Costs | {} |\n", format_inr(r.total_costs)));
        out.push_str(&format!("| Total Benefits | {} |\n", format_inr(r.total_benefits)));
        out.push_str(&format!(
            "| Net Benefit | {} {} |\n",
            format_inr(r.net_benefit),
            Outlook::arrow(r.net_benefit)
        ));
        out.push_str(&format!(
            "| ROI | {} {} |\n",
            format_percent(r.roi),
            Outlook::arrow(r.roi)
        ));
        out.push_str(&format!(
            "| Payback Period | {} |\n\n",
            format_months(&r.payback_period)
        ));
        out
    }

    fn inputs(report: &RoiReport) -> String {
        let mut out = String::from("## Input Parameters\n\n");
        out.push_str("| Parameter | Value |\n");
        out.push_str("|-----------|-------|\n");
        for field in InputField::ALL {
            let value = report.inputs.get(field);
            let shown = match field {
                InputField::TrainingCost
                | InputField::EmployeeHourlyRate
                | InputField::AnnualRevenue => format_inr(value),
                InputField::ProductivityIncrease | InputField::EmployeeRetention => {
                    format!("{}%", value)
                }
                InputField::ParticipantsCount | InputField::TrainingDuration => value.to_string(),
            };
            out.push_str(&format!("| {} | {} |\n", field.label(), shown));
        }
        out.push('\n');
        out
    }

    fn breakdown(heading: &str, slices: &[ChartSlice]) -> String {
        let total: f64 = slices.iter().map(|s| s.value).sum();
        let mut out = format!("## {}\n\n", heading);
        out.push_str("| Item | Amount | Share |\n");
        out.push_str("|------|--------|-------|\n");
        for slice in slices {
            out.push_str(&format!(
                "| {} | {} | {:.0}% |\n",
                slice.name,
                format_inr(slice.value),
                slice.share_of(total)
            ));
        }
        out.push('\n');
        out
    }

    fn timeline(report: &RoiReport) -> String {
        let points = &report.projections.timeline;
        let mut out = String::from("## Timeline\n\n");
        out.push_str("| Month | Total Costs | Cumulative Benefits |\n");
        out.push_str("|-------|-------------|---------------------|\n");
        for p in points {
            out.push_str(&format!(
                "| {} | {} | {} |\n",
                p.month,
                format_millions(p.costs),
                format_millions(p.benefits)
            ));
        }
        out.push('\n');
        match break_even_month(points) {
            Some(month) => out.push_str(&format!(
                "Cumulative benefits overtake costs in month {}.\n\n",
                month
            )),
            None => out.push_str("Cumulative benefits do not overtake costs within 12 months.\n\n"),
        }
        out
    }

    fn insights(report: &RoiReport) -> String {
        let mut out = String::from("## Key Insights\n\n");
        for bullet in &report.insights.bullets {
            out.push_str(&format!("- {}\n", bullet));
        }
        out
    }
}

impl ReportGenerator for TemplateReportGenerator {
    fn generate(&self, report: &RoiReport) -> Result<String, ReportError> {
        Self::check_finite(report)?;

        let mut doc = self.header(report);
        doc.push_str(&Self::summary(report));
        doc.push_str(&Self::inputs(report));
        doc.push_str(&Self::breakdown("Cost Breakdown", &report.projections.cost_breakdown));
        doc.push_str(&Self::breakdown(
            "Benefit Analysis",
            &report.projections.benefit_breakdown,
        ));
        if self.include_timeline {
            doc.push_str(&Self::timeline(report));
        }
        doc.push_str(&Self::insights(report));
        Ok(doc)
    }

    fn title(&self, _report: &RoiReport) -> String {
        self.title.clone()
    }
}
