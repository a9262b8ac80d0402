//! Report type definitions.

use crate::model::{DpeResult, Recommendation};
use crate::scoring::ESTIMATOR_ENGINE_VERSION;
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Colored text summary
    #[default]
    Summary,
    /// Structured JSON output
    Json,
    /// Human-readable Markdown
    #[value(alias = "md")]
    Markdown,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Summary => write!(f, "summary"),
            Self::Json => write!(f, "json"),
            Self::Markdown => write!(f, "markdown"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Include weakness descriptions and recommendation explanations
    pub show_details: bool,
    /// Include the consumption factors
    pub show_factors: bool,
    /// Maximum recommendations per assessment
    pub max_recommendations: Option<usize>,
    /// Title for the report
    pub title: Option<String>,
    /// Additional metadata to include
    pub metadata: ReportMetadata,
}

impl ReportConfig {
    /// Recommendations of `result` after applying the configured limit
    #[must_use]
    pub fn recommendations<'a>(&self, result: &'a DpeResult) -> &'a [Recommendation] {
        let all = result.recommendations.as_slice();
        match self.max_recommendations {
            Some(limit) if limit < all.len() => &all[..limit],
            _ => all,
        }
    }

    /// Report title, with a default
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("DPE estimate")
    }
}

/// Metadata included in reports
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    /// Tool version
    pub tool_version: String,
    /// Scoring engine version
    pub engine_version: String,
    /// Generation timestamp (RFC 3339)
    pub generated_at: Option<String>,
}

impl ReportMetadata {
    /// Metadata stamped with the current time
    #[must_use]
    pub fn new() -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            engine_version: ESTIMATOR_ENGINE_VERSION.to_string(),
            generated_at: Some(chrono::Utc::now().to_rfc3339()),
        }
    }
}
