//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use super::validation::Validatable;
use crate::error::{DpeError, ErrorContext, Result};
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".dpe-estimator.yaml",
    ".dpe-estimator.yml",
    "dpe-estimator.yaml",
    "dpe-estimator.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/dpe-estimator/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
        tracing::warn!("Config file {} does not exist", path.display());
    }

    let cwd = std::env::current_dir().ok();
    if let Some(path) = cwd.as_deref().and_then(find_config_in_dir) {
        return Some(path);
    }

    if let Some(path) = find_git_root().as_deref().and_then(find_config_in_dir) {
        return Some(path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        if let Some(path) = find_config_in_dir(&config_dir.join("dpe-estimator")) {
            return Some(path);
        }
    }

    dirs::home_dir().as_deref().and_then(find_config_in_dir)
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    cwd.ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    /// File not found
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// IO error reading file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// YAML parsing error
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml_ng::Error),
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> std::result::Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    let config: AppConfig = serde_yaml_ng::from_str(&content)?;
    Ok(config)
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// Only values that differ from the defaults override; this layers CLI
    /// args over file config. Flags can only be switched on and a threshold
    /// only set, so a later layer cannot undo `quiet`, `no_color` or
    /// `fail_above` from an earlier one.
    pub fn merge(&mut self, other: &Self) {
        if other.output.format != crate::reports::ReportFormat::default() {
            self.output.format = other.output.format;
        }
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
        if other.output.no_color {
            self.output.no_color = true;
        }

        if other.behavior.fail_above.is_some() {
            self.behavior.fail_above = other.behavior.fail_above;
        }
        if other.behavior.show_factors {
            self.behavior.show_factors = true;
        }
        if other.behavior.show_details {
            self.behavior.show_details = true;
        }
        if other.behavior.max_recommendations.is_some() {
            self.behavior.max_recommendations = other.behavior.max_recommendations;
        }
        if other.behavior.quiet {
            self.behavior.quiet = true;
        }

        self.defaults.merge(&other.defaults);
    }

    /// Layer the discovered config file over `self` and validate the result.
    ///
    /// Returns the path the file was loaded from, if any. A file that
    /// cannot be read or parsed is a `Config` error; a merged config that
    /// fails validation is a `Validation` error.
    pub fn layer_file(mut self, config_path: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        let loaded_from = discover_config_file(config_path);
        if let Some(path) = &loaded_from {
            let file = load_config_file(path)
                .map_err(|e| DpeError::config(e.to_string()))
                .with_context(|| path.display().to_string())?;
            tracing::debug!("Loaded config from {}", path.display());
            self.merge(&file);
        }

        let errors = self.validate();
        if !errors.is_empty() {
            let joined: Vec<String> = errors.iter().map(ToString::to_string).collect();
            return Err(DpeError::validation(joined.join("; ")));
        }
        Ok((self, loaded_from))
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# dpe-estimator configuration
# ===========================
#
# Place it at:
#   - .dpe-estimator.yaml in your project root
#   - ~/.config/dpe-estimator/dpe-estimator.yaml for global config
#
# CLI arguments always override file settings.
#
# Settings layer over the --preset in use. Flags here can switch an option
# on but not off: `quiet: false` does not undo the quiet mode of the `ci`
# preset, and leaving out `fail_above` keeps the preset's threshold.

# Output configuration
output:
  # Format: summary, json, markdown
  format: summary
  # Output file path (omit for stdout)
  # file: report.json
  # Disable colored output
  no_color: false

# Behavior flags
behavior:
  # Exit with code 1 when the class is worse than this one
  # fail_above: E
  # Print the consumption factors
  show_factors: false
  # Print weakness descriptions and recommendation explanations
  show_details: false
  # Limit the number of recommendations
  # max_recommendations: 3
  quiet: false

# Answers used for questions left unanswered in a profile, e.g.
#   defaults:
#     climateZone: H2
#     heatingType: heat_pump
#     occupants: 3
defaults: {}
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================
