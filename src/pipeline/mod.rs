//! Pipeline orchestration: load → resolve → score → report.
//!
//! Shared by the CLI command handlers so each of them only decides what to
//! do with the assessments.

mod output;
mod parse;
mod report_stage;

pub use output::{should_use_color, write_output, OutputTarget};
pub use parse::{
    assess_file, default_profile, load_answers, parse_answers, AnswerFormat, Assessment,
};
pub use report_stage::{output_report, report_config};

use crate::scoring::DpeClass;
use std::path::PathBuf;

/// Structured pipeline error types for better diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// A profile file could not be loaded or scored
    #[error("Assessment failed for {}: {source}", path.display())]
    AssessmentFailed {
        path: PathBuf,
        #[source]
        source: crate::error::DpeError,
    },
}

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// At least one class is worse than the `--fail-above` threshold
    pub const CLASS_ABOVE_THRESHOLD: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

/// Exit code for a set of assessments against an optional threshold.
#[must_use]
pub fn threshold_exit_code(assessments: &[Assessment], fail_above: Option<DpeClass>) -> i32 {
    let Some(threshold) = fail_above else {
        return exit_codes::SUCCESS;
    };
    let failing: Vec<&Assessment> = assessments
        .iter()
        .filter(|a| a.result.class.is_worse_than(threshold))
        .collect();
    for assessment in &failing {
        tracing::warn!(
            "{}: class {} is worse than {}",
            assessment.source,
            assessment.result.class,
            threshold
        );
    }
    if failing.is_empty() {
        exit_codes::SUCCESS
    } else {
        exit_codes::CLASS_ABOVE_THRESHOLD
    }
}
