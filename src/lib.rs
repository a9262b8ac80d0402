//! **Household energy-performance (DPE) class estimator and renovation advisor.**
//!
//! `dpe-estimator` turns a short questionnaire about a dwelling into an
//! estimated annual energy consumption, an A–G class, a breakdown of that
//! consumption, the weaknesses of the home and an ordered list of
//! renovation recommendations. It is an educational estimator, not an
//! engineering-grade thermal model.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the [`DwellingProfile`] that is scored and the
//!   [`DpeResult`] that comes out. Numeric fields are validated newtypes, so
//!   a profile that exists is a profile that can be scored.
//! - **[`scoring`]**: the pure, deterministic engine. [`compute_result`]
//!   never fails and never does I/O.
//! - **[`questionnaire`]**: [`ProfileAnswers`], where every question may be
//!   left unanswered, and its resolution against default answers.
//! - **[`pipeline`]**: load a profile file, resolve it, score it and write
//!   a report.
//! - **[`reports`]**: summary, JSON and Markdown renderers.
//! - **[`config`]**: YAML configuration with discovery, presets and validation.
//!
//! ## Scoring a profile
//!
//! ```
//! use dpe_estimator::{compute_result, DpeClass, DwellingProfile};
//!
//! let result = compute_result(&DwellingProfile::default());
//! assert_eq!(result.consumption_intensity, 251);
//! assert_eq!(result.class, DpeClass::E);
//! assert!(!result.recommendations.is_empty());
//! ```
//!
//! ## Scoring a questionnaire file
//!
//! ```no_run
//! use dpe_estimator::{pipeline::assess_file, DwellingProfile};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let assessment = assess_file(Path::new("house.yaml"), &DwellingProfile::default())?;
//!     println!(
//!         "{}: class {} ({} kWh/m²/year), {} answer(s) defaulted",
//!         assessment.source,
//!         assessment.result.class,
//!         assessment.result.consumption_intensity,
//!         assessment.defaulted_fields.len()
//!     );
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Consumption values are bounded by the coefficient tables
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::missing_errors_doc,
    clippy::struct_excessive_bools
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod questionnaire;
pub mod reports;
pub mod scoring;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, BehaviorConfig, ConfigPreset, OutputConfig};
pub use config::{ConfigError, Validatable};
pub use error::{DpeError, ErrorContext, ParseErrorKind, Result};
pub use model::{DpeResult, DwellingProfile, EnergyBreakdown, Recommendation, Weakness};
pub use pipeline::{assess_file, Assessment};
pub use questionnaire::{ProfileAnswers, ResolvedProfile};
pub use reports::{ReportFormat, ReportGenerator};
pub use scoring::{compute_result, ConsumptionFactors, DpeClass, DpeEstimator};
