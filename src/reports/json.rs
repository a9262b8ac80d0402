//! JSON report generator.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator, ReportMetadata};
use crate::model::{EnergyBreakdown, Recommendation, Weakness};
use crate::pipeline::Assessment;
use crate::scoring::{ConsumptionFactors, DpeClass};
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    metadata: &'a ReportMetadata,
    assessments: Vec<JsonAssessment<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonAssessment<'a> {
    source: &'a str,
    class: DpeClass,
    class_range: String,
    consumption_intensity: u32,
    breakdown: &'a EnergyBreakdown,
    weaknesses: &'a [Weakness],
    recommendations: &'a [Recommendation],
    defaulted_fields: &'a [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    factors: Option<&'a ConsumptionFactors>,
}

impl<'a> JsonAssessment<'a> {
    fn new(assessment: &'a Assessment, config: &ReportConfig) -> Self {
        let result = &assessment.result;
        Self {
            source: &assessment.source,
            class: result.class,
            class_range: result.class.range_label(),
            consumption_intensity: result.consumption_intensity,
            breakdown: &result.breakdown,
            weaknesses: &result.weaknesses,
            recommendations: config.recommendations(result),
            defaulted_fields: &assessment.defaulted_fields,
            factors: config.show_factors.then_some(&assessment.factors),
        }
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(
        &self,
        assessments: &[Assessment],
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let report = JsonReport {
            metadata: &config.metadata,
            assessments: assessments
                .iter()
                .map(|a| JsonAssessment::new(a, config))
                .collect(),
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        };
        json.map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}
