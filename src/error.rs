//! Unified error types for dpe-estimator.
//!
//! Scoring itself cannot fail; errors come from building a profile out of
//! raw answers, reading files and loading configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for dpe-estimator operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DpeError {
    /// A profile field is outside its domain
    #[error("Invalid profile field '{field}': {message}")]
    InvalidProfile { field: String, message: String },

    /// A profile file could not be decoded
    #[error("Failed to parse profile: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Invalid YAML: {0}")]
    InvalidYaml(String),

    #[error("Empty profile document")]
    Empty,
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for dpe-estimator operations
pub type Result<T> = std::result::Result<T, DpeError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl DpeError {
    /// Create an invalid-profile error for a field
    pub fn invalid_profile(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidProfile {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        Self::Io {
            message: format!("Failed to access {}", path.display()),
            path: Some(path),
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Field name for profile errors
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidProfile { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DpeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for DpeError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse("JSON document", ParseErrorKind::InvalidJson(err.to_string()))
    }
}

impl From<serde_yaml_ng::Error> for DpeError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        Self::parse("YAML document", ParseErrorKind::InvalidYaml(err.to_string()))
    }
}

// ============================================================================
// Context extension trait
// ============================================================================

/// Extension trait for adding context to errors
pub trait ErrorContext<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T> ErrorContext<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Self {
        self.map_err(|e| add_context(e, context.into()))
    }

    fn with_context<F, C>(self, f: F) -> Self
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| add_context(e, f().into()))
    }
}

fn add_context(error: DpeError, context: String) -> DpeError {
    match error {
        DpeError::Parse {
            context: inner,
            source,
        } => DpeError::Parse {
            context: format!("{context}: {inner}"),
            source,
        },
        DpeError::Io {
            path,
            message,
            source,
        } => DpeError::Io {
            path,
            message: format!("{context}: {message}"),
            source,
        },
        DpeError::InvalidProfile { field, message } => DpeError::InvalidProfile {
            field,
            message: format!("{message} ({context})"),
        },
        DpeError::Config(msg) => DpeError::Config(format!("{context}: {msg}")),
        DpeError::Validation(msg) => DpeError::Validation(format!("{context}: {msg}")),
    }
}
