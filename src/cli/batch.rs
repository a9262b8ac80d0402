//! Batch command handler.
//!
//! Profiles are scored in parallel. A file that fails is reported and the
//! others still go through.

use crate::config::AppConfig;
use crate::model::DwellingProfile;
use crate::pipeline::{
    assess_file, default_profile, exit_codes, output_report, threshold_exit_code, Assessment,
    PipelineError,
};
use anyhow::Result;
use rayon::prelude::*;
use std::path::PathBuf;

/// Assess every path, keeping input order.
#[must_use]
pub fn assess_all(
    paths: &[PathBuf],
    defaults: &DwellingProfile,
) -> Vec<Result<Assessment, PipelineError>> {
    paths
        .par_iter()
        .map(|path| {
            assess_file(path, defaults).map_err(|source| PipelineError::AssessmentFailed {
                path: path.clone(),
                source,
            })
        })
        .collect()
}

/// Run the batch command, returning the desired exit code.
///
/// Any failed file yields [`exit_codes::ERROR`]; otherwise the class
/// threshold decides.
pub fn run_batch(paths: &[PathBuf], config: &AppConfig) -> Result<i32> {
    let defaults = default_profile(&config.defaults)?;

    if !config.behavior.quiet {
        tracing::info!("Assessing {} profile(s)", paths.len());
    }

    let mut assessments = Vec::with_capacity(paths.len());
    let mut failures = 0usize;
    for outcome in assess_all(paths, &defaults) {
        match outcome {
            Ok(assessment) => assessments.push(assessment),
            Err(e) => {
                failures += 1;
                tracing::error!("{e}");
            }
        }
    }

    if !assessments.is_empty() {
        output_report(config, &assessments)?;
    }

    if failures > 0 {
        tracing::warn!("{failures} of {} profile(s) could not be assessed", paths.len());
        return Ok(exit_codes::ERROR);
    }
    Ok(threshold_exit_code(&assessments, config.behavior.fail_above))
}
