//! Loading profile answers and turning them into assessments.

use crate::error::{DpeError, ErrorContext, ParseErrorKind, Result};
use crate::model::{DpeResult, DwellingProfile};
use crate::questionnaire::ProfileAnswers;
use crate::scoring::{compute_result, ConsumptionFactors};
use serde::Serialize;
use std::path::Path;

/// Document syntax of a profile file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerFormat {
    Json,
    Yaml,
}

impl AnswerFormat {
    /// JSON when the extension says so or the document opens with `{`.
    #[must_use]
    pub fn detect(path: Option<&Path>, content: &str) -> Self {
        let json_extension = path
            .and_then(Path::extension)
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if json_extension || content.trim_start().starts_with('{') {
            Self::Json
        } else {
            Self::Yaml
        }
    }
}

/// Decode answers from a document.
pub fn parse_answers(content: &str, format: AnswerFormat) -> Result<ProfileAnswers> {
    if content.trim().is_empty() {
        return Err(DpeError::parse("profile document", ParseErrorKind::Empty));
    }
    let answers = match format {
        AnswerFormat::Json => serde_json::from_str(content)?,
        AnswerFormat::Yaml => serde_yaml_ng::from_str(content)?,
    };
    Ok(answers)
}

/// Read a profile file from disk.
pub fn load_answers(path: &Path) -> Result<ProfileAnswers> {
    let content = std::fs::read_to_string(path).map_err(|e| DpeError::io(path, e))?;
    let format = AnswerFormat::detect(Some(path), &content);
    tracing::debug!("Reading {} as {:?}", path.display(), format);
    parse_answers(&content, format).with_context(|| path.display().to_string())
}

/// Resolve answers from configuration into the profile used for unanswered questions.
pub fn default_profile(config_defaults: &ProfileAnswers) -> Result<DwellingProfile> {
    config_defaults
        .resolve(&DwellingProfile::default())
        .map(|resolved| resolved.profile)
        .context("configuration defaults")
}

/// A scored profile together with how it was obtained
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    /// Where the answers came from
    pub source: String,
    /// The profile actually scored
    pub profile: DwellingProfile,
    /// Questions that fell back to defaults
    pub defaulted_fields: Vec<&'static str>,
    /// Factors behind the consumption estimate
    pub factors: ConsumptionFactors,
    pub result: DpeResult,
}

impl Assessment {
    /// Resolve and score answers.
    pub fn evaluate(
        source: impl Into<String>,
        answers: &ProfileAnswers,
        defaults: &DwellingProfile,
    ) -> Result<Self> {
        let resolved = answers.resolve(defaults)?;
        let factors = ConsumptionFactors::from_profile(&resolved.profile);
        let result = compute_result(&resolved.profile);
        Ok(Self {
            source: source.into(),
            profile: resolved.profile,
            defaulted_fields: resolved.defaulted_fields,
            factors,
            result,
        })
    }

    /// Whether every question was answered
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.defaulted_fields.is_empty()
    }
}

/// Load, resolve and score one profile file.
pub fn assess_file(path: &Path, defaults: &DwellingProfile) -> Result<Assessment> {
    let answers = load_answers(path)?;
    let source = path.display().to_string();
    let assessment =
        Assessment::evaluate(source.as_str(), &answers, defaults).context(source.as_str())?;
    tracing::info!(
        "{}: class {} ({} kWh/m²/year)",
        assessment.source,
        assessment.result.class,
        assessment.result.consumption_intensity
    );
    Ok(assessment)
}
