//! Configuration types for dpe-estimator.

use crate::questionnaire::ProfileAnswers;
use crate::reports::ReportFormat;
use crate::scoring::DpeClass;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI flags are merged over the file settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
    /// Answers used in place of unanswered questions.
    ///
    /// Fields left out here fall back to the built-in defaults.
    pub defaults: ProfileAnswers,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Exit with a failure code when the class is worse than `class`.
    pub const fn fail_above(mut self, class: Option<DpeClass>) -> Self {
        self.config.behavior.fail_above = class;
        self
    }

    /// Show the consumption factors in reports.
    pub const fn show_factors(mut self, show: bool) -> Self {
        self.config.behavior.show_factors = show;
        self
    }

    /// Show weakness descriptions and recommendation explanations.
    pub const fn show_details(mut self, show: bool) -> Self {
        self.config.behavior.show_details = show;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Sections
// ============================================================================

/// Output-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format
    pub format: ReportFormat,
    /// Output file (stdout when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable ANSI colors
    pub no_color: bool,
}

/// Behavior flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Exit with code 1 when the estimated class is worse than this one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_above: Option<DpeClass>,
    /// Show the factors behind the consumption estimate
    pub show_factors: bool,
    /// Show weakness descriptions and recommendation explanations
    pub show_details: bool,
    /// Limit the number of recommendations printed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_recommendations: Option<usize>,
    /// Suppress non-essential output
    pub quiet: bool,
}
