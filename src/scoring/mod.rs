//! Energy-performance scoring engine.
//!
//! Estimates the annual consumption of a dwelling, classifies it on the
//! A–G scale, splits it by category and derives weaknesses and renovation
//! recommendations. Every stage is a pure function of the profile.
//!
//! # Usage
//!
//! ```
//! use dpe_estimator::model::DwellingProfile;
//! use dpe_estimator::scoring::{compute_result, DpeClass};
//!
//! let result = compute_result(&DwellingProfile::default());
//! assert_eq!(result.class, DpeClass::E);
//! assert!(!result.recommendations.is_empty());
//! ```

mod breakdown;
mod classifier;
pub mod coefficients;
mod consumption;
mod engine;
mod recommendations;
mod weaknesses;

pub use breakdown::allocate;
pub use classifier::{classify, ClassBand, DpeClass};
pub use consumption::{estimate_consumption, ConsumptionFactors};
pub use engine::{compute_result, DpeEstimator, ESTIMATOR_ENGINE_VERSION};
pub use recommendations::recommend;
pub use weaknesses::detect_weaknesses;
