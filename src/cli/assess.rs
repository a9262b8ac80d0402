//! Assess command handler.

use crate::config::AppConfig;
use crate::pipeline::{assess_file, default_profile, output_report, threshold_exit_code};
use anyhow::{Context, Result};
use std::path::Path;

/// Score one profile file and report it, returning the desired exit code.
pub fn run_assess(profile_path: &Path, config: &AppConfig) -> Result<i32> {
    let defaults = default_profile(&config.defaults)?;
    let assessment = assess_file(profile_path, &defaults)
        .with_context(|| format!("Failed to assess {}", profile_path.display()))?;

    if !assessment.is_complete() && !config.behavior.quiet {
        tracing::info!(
            "Defaults used for {} unanswered question(s): {}",
            assessment.defaulted_fields.len(),
            assessment.defaulted_fields.join(", ")
        );
    }

    let assessments = [assessment];
    output_report(config, &assessments)?;
    Ok(threshold_exit_code(&assessments, config.behavior.fail_above))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::exit_codes;
    use crate::scoring::DpeClass;
    use tempfile::TempDir;

    fn config_writing_to(dir: &TempDir, fail_above: Option<DpeClass>) -> AppConfig {
        AppConfig::builder()
            .output_format(crate::reports::ReportFormat::Json)
            .output_file(Some(dir.path().join("report.json")))
            .fail_above(fail_above)
            .quiet(true)
            .build()
    }

    #[test]
    fn test_assess_passes_threshold() {
        let tmp = TempDir::new().unwrap();
        let profile = tmp.path().join("house.yaml");
        std::fs::write(&profile, "heatingType: heat_pump\nwallInsulation: good\n").unwrap();

        let code = run_assess(&profile, &config_writing_to(&tmp, Some(DpeClass::D))).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);

        let report = std::fs::read_to_string(tmp.path().join("report.json")).unwrap();
        assert!(report.contains("\"consumptionIntensity\""));
    }

    #[test]
    fn test_assess_fails_threshold() {
        let tmp = TempDir::new().unwrap();
        let profile = tmp.path().join("house.json");
        std::fs::write(&profile, r#"{"windowType": "single"}"#).unwrap();

        let code = run_assess(&profile, &config_writing_to(&tmp, Some(DpeClass::C))).unwrap();
        assert_eq!(code, exit_codes::CLASS_ABOVE_THRESHOLD);
    }

    #[test]
    fn test_assess_missing_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let result = run_assess(&tmp.path().join("none.yaml"), &config_writing_to(&tmp, None));
        assert!(result.is_err());
    }
}
