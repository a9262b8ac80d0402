//! Default configurations and presets for dpe-estimator.

use super::types::{AppConfig, BehaviorConfig, OutputConfig};
use crate::questionnaire::ProfileAnswers;
use crate::reports::ReportFormat;
use crate::scoring::DpeClass;

/// Class above which the `ci` preset fails
pub const DEFAULT_CI_FAIL_ABOVE: DpeClass = DpeClass::E;

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Colored summary on the terminal
    Default,
    /// Machine-readable output, fail on poor classes
    Ci,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Ci => "ci",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "ci" | "ci-cd" | "pipeline" => Some(Self::Ci),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Colored summary for interactive use",
            Self::Ci => "JSON output that fails when the class is worse than E",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Ci]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Ci => Self {
                output: OutputConfig {
                    format: ReportFormat::Json,
                    file: None,
                    no_color: true,
                },
                behavior: BehaviorConfig {
                    fail_above: Some(DEFAULT_CI_FAIL_ABOVE),
                    quiet: true,
                    ..BehaviorConfig::default()
                },
                defaults: ProfileAnswers::default(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_names_roundtrip() {
        for preset in ConfigPreset::all() {
            assert_eq!(ConfigPreset::from_name(preset.name()), Some(*preset));
        }
        assert_eq!(ConfigPreset::from_name("CI"), Some(ConfigPreset::Ci));
        assert_eq!(ConfigPreset::from_name("unknown"), None);
    }

    #[test]
    fn test_ci_preset() {
        let config = AppConfig::from_preset(ConfigPreset::Ci);
        assert_eq!(config.output.format, ReportFormat::Json);
        assert_eq!(config.behavior.fail_above, Some(DpeClass::E));
        assert!(config.output.no_color);
    }
}
