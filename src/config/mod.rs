//! Configuration module for dpe-estimator.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named presets for common use cases
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust
//! use dpe_estimator::config::{AppConfig, ConfigPreset};
//! use dpe_estimator::scoring::DpeClass;
//!
//! let config = AppConfig::from_preset(ConfigPreset::Ci);
//! assert_eq!(config.behavior.fail_above, Some(DpeClass::E));
//!
//! let config = AppConfig::builder()
//!     .fail_above(Some(DpeClass::D))
//!     .show_factors(true)
//!     .build();
//! assert!(config.behavior.show_factors);
//! ```
//!
//! # Configuration File
//!
//! Place a `.dpe-estimator.yaml` file in your project root or
//! `~/.config/dpe-estimator/`:
//!
//! ```yaml
//! output:
//!   format: json
//! behavior:
//!   fail_above: E
//! defaults:
//!   climateZone: H2
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{ConfigPreset, DEFAULT_CI_FAIL_ABOVE};
pub use types::{AppConfig, AppConfigBuilder, BehaviorConfig, OutputConfig};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_full_example_config, load_config_file, ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all configuration options that can be set in
/// `.dpe-estimator.yaml` config files.
pub fn generate_json_schema() -> serde_json::Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}

/// Generate a JSON Schema for profile answer files.
pub fn generate_answers_schema() -> serde_json::Result<String> {
    let schema = schemars::schema_for!(crate::questionnaire::ProfileAnswers);
    serde_json::to_string_pretty(&schema)
}
