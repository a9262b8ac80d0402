//! Configuration validation for dpe-estimator.

use super::types::{AppConfig, BehaviorConfig, OutputConfig};
use crate::model::{SurfaceArea, WindowSurface};
use crate::questionnaire::ProfileAnswers;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.output.validate());
        errors.extend(self.behavior.validate());
        errors.extend(self.defaults.validate());
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(parent) = self.file.as_deref().and_then(std::path::Path::parent) {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                errors.push(ConfigError::new(
                    "output.file",
                    format!("Parent directory does not exist: {}", parent.display()),
                ));
            }
        }

        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.max_recommendations == Some(0) {
            errors.push(ConfigError::new(
                "behavior.max_recommendations",
                "Must be at least 1 (omit it to show every recommendation)",
            ));
        }
        errors
    }
}

impl Validatable for ProfileAnswers {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(Err(e)) = self.surface_area.map(SurfaceArea::new) {
            errors.push(ConfigError::new("defaults.surfaceArea", e.to_string()));
        }
        if let Some(Err(e)) = self.window_surface.map(WindowSurface::new) {
            errors.push(ConfigError::new("defaults.windowSurface", e.to_string()));
        }
        if self.occupants == Some(0) {
            errors.push(ConfigError::new(
                "defaults.occupants",
                "There must be at least one occupant",
            ));
        }

        errors
    }
}
