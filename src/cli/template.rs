//! Template command handler.
//!
//! Prints a fully answered profile that can be edited and fed back to
//! `assess`.

use crate::model::DwellingProfile;
use crate::pipeline::{write_output, OutputTarget};
use crate::questionnaire::ProfileAnswers;
use anyhow::{Context, Result};
use clap::ValueEnum;
use std::path::PathBuf;

/// Document format of a template
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TemplateFormat {
    #[default]
    Yaml,
    Json,
}

/// Render `profile` as an answers document.
pub fn render_template(format: TemplateFormat, profile: &DwellingProfile) -> Result<String> {
    let answers = ProfileAnswers::from_profile(profile);
    match format {
        TemplateFormat::Yaml => {
            let body = serde_yaml_ng::to_string(&answers).context("Failed to render YAML")?;
            Ok(format!(
                "# Dwelling profile for dpe-estimator\n# Delete a line to let the default apply.\n{body}"
            ))
        }
        TemplateFormat::Json => {
            serde_json::to_string_pretty(&answers).context("Failed to render JSON")
        }
    }
}

/// Print the template, or write it to `output`.
pub fn run_template(
    format: TemplateFormat,
    defaults: &DwellingProfile,
    output: Option<PathBuf>,
) -> Result<()> {
    let text = render_template(format, defaults)?;
    write_output(&text, &OutputTarget::from_option(output), false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{parse_answers, AnswerFormat};

    #[test]
    fn test_yaml_template_reads_back() {
        let profile = DwellingProfile::default();
        let text = render_template(TemplateFormat::Yaml, &profile).unwrap();
        assert!(text.starts_with("# Dwelling profile"));
        assert!(text.contains("constructionPeriod:"));
        assert!(text.contains("1975-1988"));

        let answers = parse_answers(&text, AnswerFormat::Yaml).unwrap();
        assert_eq!(answers.answered_count(), ProfileAnswers::QUESTION_COUNT);
        assert_eq!(answers.resolve(&profile).unwrap().profile, profile);
    }

    #[test]
    fn test_json_template_reads_back() {
        let profile = DwellingProfile::default();
        let text = render_template(TemplateFormat::Json, &profile).unwrap();
        let answers = parse_answers(&text, AnswerFormat::Json).unwrap();
        assert_eq!(answers, ProfileAnswers::from_profile(&profile));
    }
}
