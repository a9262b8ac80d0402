//! Report output stage.

use crate::config::AppConfig;
use crate::reports::{create_reporter, ReportConfig, ReportMetadata};
use anyhow::Result;

use super::{should_use_color, write_output, Assessment, OutputTarget};

/// Build the report settings from the application config.
#[must_use]
pub fn report_config(config: &AppConfig) -> ReportConfig {
    ReportConfig {
        show_details: config.behavior.show_details,
        show_factors: config.behavior.show_factors,
        max_recommendations: config.behavior.max_recommendations,
        metadata: ReportMetadata::new(),
        ..ReportConfig::default()
    }
}

/// Render assessments in the configured format and write them out.
pub fn output_report(config: &AppConfig, assessments: &[Assessment]) -> Result<()> {
    let target = OutputTarget::from_option(config.output.file.clone());
    let use_color = should_use_color(config.output.no_color, &target);
    let reporter = create_reporter(config.output.format, use_color);
    let report = reporter.generate(assessments, &report_config(config))?;
    write_output(&report, &target, config.behavior.quiet)
}
