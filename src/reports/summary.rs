//! Summary report generator for shell output.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::pipeline::Assessment;
use crate::questionnaire::ProfileAnswers;
use crate::scoring::DpeClass;
use std::fmt::Write as _;

/// Apply ANSI color formatting if colored output is enabled.
pub(super) fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Color used for a class letter
pub(super) const fn class_color(class: DpeClass) -> &'static str {
    match class {
        DpeClass::A | DpeClass::B => "green",
        DpeClass::C | DpeClass::D => "yellow",
        DpeClass::E | DpeClass::F | DpeClass::G => "red",
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn write_assessment(
        &self,
        out: &mut String,
        assessment: &Assessment,
        config: &ReportConfig,
    ) -> Result<(), ReportError> {
        let result = &assessment.result;
        let class = result.class;

        writeln!(
            out,
            "{} {}",
            self.color(config.title(), "bold"),
            assessment.source
        )?;
        writeln!(out, "{}", self.color("─".repeat(40).as_str(), "dim"))?;
        writeln!(
            out,
            "{}        {}  {} ({} kWh/m²/year)",
            self.color("Class:", "cyan"),
            self.color(class.letter(), class_color(class)),
            class.description(),
            class.range_label()
        )?;
        writeln!(
            out,
            "{}  {} kWh/m²/year",
            self.color("Consumption:", "cyan"),
            result.consumption_intensity
        )?;
        let b = &result.breakdown;
        writeln!(
            out,
            "{}    heating {} · hot water {} · envelope losses {}",
            self.color("Breakdown:", "cyan"),
            b.heating,
            b.hot_water,
            b.envelope_losses
        )?;
        if !assessment.is_complete() {
            writeln!(
                out,
                "{}    {} of {} questions (defaults used)",
                self.color("Answered:", "cyan"),
                ProfileAnswers::QUESTION_COUNT - assessment.defaulted_fields.len(),
                ProfileAnswers::QUESTION_COUNT
            )?;
        }

        if config.show_factors {
            let f = &assessment.factors;
            writeln!(out)?;
            writeln!(out, "{}", self.color("Factors", "bold"))?;
            writeln!(out, "  base          {:>7.1}", f.base)?;
            for (name, value) in [
                ("climate", f.climate),
                ("envelope", f.envelope),
                ("glazing area", f.window_surface),
                ("heating", f.heating),
                ("ventilation", f.ventilation),
                ("usage", f.usage),
                ("orientation", f.orientation),
            ] {
                writeln!(out, "  {name:<13} ×{value:>6.3}")?;
            }
            writeln!(out, "  = {:.2}", f.product())?;
        }

        writeln!(out)?;
        if result.weaknesses.is_empty() {
            writeln!(out, "{}", self.color("No weakness detected", "green"))?;
        } else {
            writeln!(
                out,
                "{}",
                self.color(&format!("Weaknesses ({})", result.weaknesses.len()), "bold")
            )?;
            for weakness in &result.weaknesses {
                let severity = weakness.severity.as_str();
                let tag = match weakness.severity {
                    crate::model::Severity::High => self.color(severity, "red"),
                    crate::model::Severity::Medium => self.color(severity, "yellow"),
                    crate::model::Severity::Low => self.color(severity, "dim"),
                };
                writeln!(
                    out,
                    "  [{tag}] {} {}",
                    weakness.label,
                    self.color(&format!("(impact {})", weakness.impact_score), "dim")
                )?;
                if config.show_details {
                    writeln!(out, "         {}", weakness.description)?;
                }
            }
        }

        writeln!(out)?;
        writeln!(out, "{}", self.color("Recommendations", "bold"))?;
        for (i, rec) in config.recommendations(result).iter().enumerate() {
            writeln!(
                out,
                "  {}. {} {}",
                i + 1,
                rec.name,
                self.color(
                    &format!("({} priority, ~{}% saving)", rec.priority.as_str(), rec.estimated_saving),
                    "dim"
                )
            )?;
            writeln!(out, "     {}", rec.reason)?;
            if config.show_details {
                writeln!(out, "     Class: {}", rec.dpe_impact)?;
                writeln!(out, "     Comfort: {}", rec.comfort_impact)?;
                writeln!(out, "     Bill: {}", rec.bill_impact)?;
                writeln!(out, "     {}", rec.explanation)?;
            }
        }
        Ok(())
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(
        &self,
        assessments: &[Assessment],
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut out = String::new();
        for (i, assessment) in assessments.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            self.write_assessment(&mut out, assessment, config)?;
        }
        Ok(out.trim_end().to_string())
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
