//! Markdown report generator.

use super::escape::{escape_markdown_inline, escape_markdown_table};
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::pipeline::Assessment;
use crate::questionnaire::ProfileAnswers;
use std::fmt::Write as _;

/// Markdown report generator
#[derive(Debug, Default)]
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn write_overview(out: &mut String, assessments: &[Assessment]) -> std::fmt::Result {
        writeln!(out, "| Profile | Class | kWh/m²/year | Weaknesses |")?;
        writeln!(out, "|---------|-------|-------------|------------|")?;
        for a in assessments {
            writeln!(
                out,
                "| {} | {} | {} | {} |",
                escape_markdown_table(&a.source),
                a.result.class,
                a.result.consumption_intensity,
                a.result.weaknesses.len()
            )?;
        }
        writeln!(out)
    }

    fn write_assessment(
        out: &mut String,
        assessment: &Assessment,
        config: &ReportConfig,
    ) -> std::fmt::Result {
        let result = &assessment.result;
        writeln!(out, "## {}", escape_markdown_inline(&assessment.source))?;
        writeln!(out)?;
        writeln!(
            out,
            "**Class {}** ({}): {} kWh/m²/year, range {}",
            result.class,
            result.class.description(),
            result.consumption_intensity,
            result.class.range_label()
        )?;
        if !assessment.is_complete() {
            writeln!(out)?;
            writeln!(
                out,
                "_{} of {} questions answered; defaults used for: {}_",
                ProfileAnswers::QUESTION_COUNT - assessment.defaulted_fields.len(),
                ProfileAnswers::QUESTION_COUNT,
                assessment.defaulted_fields.join(", ")
            )?;
        }
        writeln!(out)?;

        writeln!(out, "### Breakdown")?;
        writeln!(out)?;
        writeln!(out, "| Part | kWh/m²/year |")?;
        writeln!(out, "|------|-------------|")?;
        let b = &result.breakdown;
        writeln!(out, "| Heating | {} |", b.heating)?;
        writeln!(out, "| Hot water | {} |", b.hot_water)?;
        writeln!(out, "| Envelope losses | {} |", b.envelope_losses)?;
        writeln!(out)?;

        if config.show_factors {
            let f = &assessment.factors;
            writeln!(out, "### Factors")?;
            writeln!(out)?;
            writeln!(out, "| Factor | Value |")?;
            writeln!(out, "|--------|-------|")?;
            for (name, value) in [
                ("Base", f.base),
                ("Climate", f.climate),
                ("Envelope", f.envelope),
                ("Glazing area", f.window_surface),
                ("Heating", f.heating),
                ("Ventilation", f.ventilation),
                ("Usage", f.usage),
                ("Orientation", f.orientation),
            ] {
                writeln!(out, "| {name} | {value:.3} |")?;
            }
            writeln!(out)?;
        }

        writeln!(out, "### Weaknesses")?;
        writeln!(out)?;
        if result.weaknesses.is_empty() {
            writeln!(out, "None detected.")?;
        }
        for w in &result.weaknesses {
            writeln!(
                out,
                "- **{}** ({}, {} severity, impact {})",
                w.label,
                w.category.name(),
                w.severity.as_str(),
                w.impact_score
            )?;
            if config.show_details {
                writeln!(out, "  {}", w.description)?;
            }
        }
        writeln!(out)?;

        writeln!(out, "### Recommendations")?;
        writeln!(out)?;
        for (i, r) in config.recommendations(result).iter().enumerate() {
            writeln!(
                out,
                "{}. **{}** ({} priority, ~{}% saving): {}",
                i + 1,
                r.name,
                r.priority.as_str(),
                r.estimated_saving,
                r.reason
            )?;
            if config.show_details {
                writeln!(out, "   - Class: {}", r.dpe_impact)?;
                writeln!(out, "   - Comfort: {}", r.comfort_impact)?;
                writeln!(out, "   - Bill: {}", r.bill_impact)?;
                writeln!(out, "   - {}", r.explanation)?;
            }
        }
        writeln!(out)
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(
        &self,
        assessments: &[Assessment],
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut out = String::new();
        writeln!(out, "# {}", config.title())?;
        writeln!(out)?;
        if let Some(generated_at) = &config.metadata.generated_at {
            writeln!(
                out,
                "_Generated by dpe-estimator {} (engine {}) at {generated_at}_",
                config.metadata.tool_version, config.metadata.engine_version
            )?;
            writeln!(out)?;
        }
        if assessments.len() > 1 {
            Self::write_overview(&mut out, assessments)?;
        }
        for assessment in assessments {
            Self::write_assessment(&mut out, assessment, config)?;
        }
        Ok(out.trim_end().to_string())
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DwellingProfile, WindowType};

    fn assessment(source: &str, answers: &ProfileAnswers) -> Assessment {
        Assessment::evaluate(source, answers, &DwellingProfile::default()).unwrap()
    }

    #[test]
    fn test_single_assessment() {
        let answers = ProfileAnswers {
            window_type: Some(WindowType::Single),
            ..ProfileAnswers::default()
        };
        let report = MarkdownReporter::new()
            .generate(&[assessment("flat.yaml", &answers)], &ReportConfig::default())
            .unwrap();
        assert!(report.starts_with("# DPE estimate"));
        assert!(report.contains("## flat.yaml"));
        assert!(report.contains("- **Single glazing with high heat loss** (Envelope, high severity, impact 85)"));
        assert!(report.contains("1. **Replace single glazing** (high priority, ~12% saving)"));
        assert!(report.contains("_1 of 19 questions answered"));
        assert!(!report.contains("| Profile |"));
    }

    #[test]
    fn test_overview_escapes_sources() {
        let answers = ProfileAnswers::from_profile(&DwellingProfile::default());
        let report = MarkdownReporter::new()
            .generate(
                &[assessment("a|b.yaml", &answers), assessment("my_home.yaml", &answers)],
                &ReportConfig::default(),
            )
            .unwrap();
        assert!(report.contains("| a\\|b.yaml | E | 251 | 0 |"));
        assert!(report.contains("## my\\_home.yaml"));
        assert!(!report.contains("questions answered"));
    }
}
