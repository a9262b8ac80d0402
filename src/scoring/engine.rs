//! Scoring engine.
//!
//! Runs the four derivations over one immutable profile:
//! consumption → class and breakdown, then weaknesses → recommendations.

use super::breakdown::allocate;
use super::classifier::DpeClass;
use super::consumption::ConsumptionFactors;
use super::recommendations::recommend;
use super::weaknesses::detect_weaknesses;
use crate::model::{DpeResult, DwellingProfile};

/// Scoring engine version
pub const ESTIMATOR_ENGINE_VERSION: &str = "1.0";

/// Compute the full estimate for a profile.
///
/// Total over every constructible profile: validation happens when the
/// profile is built.
pub fn compute_result(profile: &DwellingProfile) -> DpeResult {
    let factors = ConsumptionFactors::from_profile(profile);
    let consumption = factors.consumption();
    let class = DpeClass::from_consumption(consumption);

    tracing::debug!(
        base = factors.base,
        climate = factors.climate,
        envelope = factors.envelope,
        window_surface = factors.window_surface,
        heating = factors.heating,
        ventilation = factors.ventilation,
        usage = factors.usage,
        orientation = factors.orientation,
        "Estimated {consumption} kWh/m²/year (class {class})"
    );

    let breakdown = allocate(consumption, profile);
    let weaknesses = detect_weaknesses(profile);
    let recommendations = recommend(profile, &weaknesses);

    tracing::debug!(
        "Detected {} weaknesses, {} recommendations",
        weaknesses.len(),
        recommendations.len()
    );

    DpeResult {
        class,
        consumption_intensity: consumption,
        breakdown,
        weaknesses,
        recommendations,
    }
}

/// Scoring engine handle
#[derive(Debug, Clone, Copy, Default)]
pub struct DpeEstimator {
    _private: (),
}

impl DpeEstimator {
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }

    /// Engine version reported alongside results
    #[must_use]
    pub const fn version(&self) -> &'static str {
        ESTIMATOR_ENGINE_VERSION
    }

    /// Score a profile
    pub fn estimate(&self, profile: &DwellingProfile) -> DpeResult {
        compute_result(profile)
    }

    /// Factors behind the consumption estimate
    #[must_use]
    pub fn factors(&self, profile: &DwellingProfile) -> ConsumptionFactors {
        ConsumptionFactors::from_profile(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecommendationId;

    #[test]
    fn test_default_profile_result() {
        let result = compute_result(&DwellingProfile::default());
        assert_eq!(result.consumption_intensity, 251);
        assert_eq!(result.class, DpeClass::E);
        assert_eq!(result.breakdown.total, 251);
        assert!(result.weaknesses.is_empty());
        assert_eq!(result.recommendations.len(), 1);
        assert_eq!(result.recommendations[0].id, RecommendationId::Optimize);
    }

    #[test]
    fn test_estimator_matches_free_function() {
        let profile = DwellingProfile::default();
        let estimator = DpeEstimator::new();
        assert_eq!(estimator.estimate(&profile), compute_result(&profile));
        assert_eq!(estimator.version(), ESTIMATOR_ENGINE_VERSION);
        assert_eq!(estimator.factors(&profile).consumption(), 251);
    }
}
