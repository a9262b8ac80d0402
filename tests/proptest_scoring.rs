//! Property-based tests for the scoring engine.
//!
//! Profiles are drawn from every enum domain and the practical numeric
//! ranges; the invariants below must hold for all of them.

use dpe_estimator::model::{
    AirLeakage, ClimateZone, ConstructionPeriod, DistributionSystem, DwellingProfile,
    EnergySource, HeatingAge, HeatingType, HousingType, InsulationQuality, Orientation,
    SurfaceArea, UsageLevel, VentilationType, WindowSurface, WindowType,
};
use dpe_estimator::questionnaire::ProfileAnswers;
use dpe_estimator::scoring::{classify, compute_result, estimate_consumption};
use proptest::prelude::*;
use std::num::NonZeroU32;

fn pick<T: Copy + std::fmt::Debug + 'static>(all: &'static [T]) -> impl Strategy<Value = T> {
    prop::sample::select(all)
}

prop_compose! {
    fn envelope()(
        construction_period in pick(ConstructionPeriod::ALL),
        climate_zone in pick(ClimateZone::ALL),
        wall_insulation in pick(InsulationQuality::ALL),
        roof_insulation in pick(InsulationQuality::ALL),
        floor_insulation in pick(InsulationQuality::ALL),
        window_type in pick(WindowType::ALL),
        orientation in pick(Orientation::ALL),
    ) -> (ConstructionPeriod, ClimateZone, InsulationQuality, InsulationQuality,
          InsulationQuality, WindowType, Orientation) {
        (construction_period, climate_zone, wall_insulation, roof_insulation,
         floor_insulation, window_type, orientation)
    }
}

prop_compose! {
    fn systems()(
        heating_type in pick(HeatingType::ALL),
        heating_age in pick(HeatingAge::ALL),
        distribution_system in pick(DistributionSystem::ALL),
        energy_source in pick(EnergySource::ALL),
        ventilation_type in pick(VentilationType::ALL),
        air_leakage in pick(AirLeakage::ALL),
        heating_habits in pick(UsageLevel::ALL),
        hot_water_usage in pick(UsageLevel::ALL),
    ) -> (HeatingType, HeatingAge, DistributionSystem, EnergySource, VentilationType,
          AirLeakage, UsageLevel, UsageLevel) {
        (heating_type, heating_age, distribution_system, energy_source, ventilation_type,
         air_leakage, heating_habits, hot_water_usage)
    }
}

prop_compose! {
    fn any_profile()(
        housing_type in pick(HousingType::ALL),
        surface in 10.0f64..500.0,
        windows in 2.0f64..100.0,
        occupants in 1u32..12,
        env in envelope(),
        sys in systems(),
    ) -> DwellingProfile {
        let mut p = DwellingProfile::default();
        p.housing_type = housing_type;
        p.surface_area = SurfaceArea::new(surface).unwrap();
        p.window_surface = WindowSurface::new(windows).unwrap();
        p.occupants = NonZeroU32::new(occupants).unwrap();
        (p.construction_period, p.climate_zone, p.wall_insulation, p.roof_insulation,
         p.floor_insulation, p.window_type, p.orientation) = env;
        (p.heating_type, p.heating_age, p.distribution_system, p.energy_source,
         p.ventilation_type, p.air_leakage, p.heating_habits, p.hot_water_usage) = sys;
        p
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn result_is_deterministic(profile in any_profile()) {
        prop_assert_eq!(compute_result(&profile), compute_result(&profile));
    }

    #[test]
    fn class_agrees_with_consumption(profile in any_profile()) {
        let result = compute_result(&profile);
        prop_assert_eq!(result.class, classify(result.consumption_intensity));
        prop_assert_eq!(result.consumption_intensity, estimate_consumption(&profile));
    }

    #[test]
    fn breakdown_drift_is_bounded(profile in any_profile()) {
        let breakdown = compute_result(&profile).breakdown;
        prop_assert!(breakdown.rounding_drift().abs() <= 2, "{:?}", breakdown);
    }

    #[test]
    fn recommendations_never_empty(profile in any_profile()) {
        prop_assert!(!compute_result(&profile).recommendations.is_empty());
    }

    #[test]
    fn weaknesses_sorted_by_impact(profile in any_profile()) {
        let weaknesses = compute_result(&profile).weaknesses;
        prop_assert!(weaknesses.windows(2).all(|w| w[0].impact_score >= w[1].impact_score));
    }

    #[test]
    fn housing_type_and_occupants_are_inert(profile in any_profile(), occupants in 1u32..12) {
        let mut other = profile.clone();
        other.housing_type = match profile.housing_type {
            HousingType::Apartment => HousingType::House,
            HousingType::House => HousingType::Apartment,
        };
        other.occupants = NonZeroU32::new(occupants).unwrap();
        prop_assert_eq!(compute_result(&profile), compute_result(&other));
    }

    #[test]
    fn better_insulation_never_costs_more(profile in any_profile()) {
        let mut worse = profile.clone();
        worse.wall_insulation = InsulationQuality::None;
        let mut better = profile;
        better.wall_insulation = InsulationQuality::Excellent;
        prop_assert!(estimate_consumption(&worse) > estimate_consumption(&better));
    }

    #[test]
    fn better_roof_insulation_never_costs_more(profile in any_profile()) {
        let mut worse = profile.clone();
        worse.roof_insulation = InsulationQuality::None;
        let mut better = profile;
        better.roof_insulation = InsulationQuality::Excellent;
        prop_assert!(estimate_consumption(&worse) > estimate_consumption(&better));
    }

    #[test]
    fn better_floor_insulation_never_costs_more(profile in any_profile()) {
        let mut worse = profile.clone();
        worse.floor_insulation = InsulationQuality::None;
        let mut better = profile;
        better.floor_insulation = InsulationQuality::Excellent;
        prop_assert!(estimate_consumption(&worse) > estimate_consumption(&better));
    }

    #[test]
    fn heat_pump_beats_convector(profile in any_profile()) {
        let mut convector = profile.clone();
        convector.heating_type = HeatingType::ElectricConvector;
        let mut heat_pump = profile;
        heat_pump.heating_type = HeatingType::HeatPump;
        prop_assert!(estimate_consumption(&convector) > estimate_consumption(&heat_pump));
    }

    #[test]
    fn double_flow_beats_natural_ventilation(profile in any_profile()) {
        let mut natural = profile.clone();
        natural.ventilation_type = VentilationType::Natural;
        let mut double_flow = profile;
        double_flow.ventilation_type = VentilationType::VmcDouble;
        prop_assert!(estimate_consumption(&natural) > estimate_consumption(&double_flow));
    }

    #[test]
    fn complete_answers_resolve_to_the_same_profile(profile in any_profile()) {
        let answers = ProfileAnswers::from_profile(&profile);
        let resolved = answers.resolve(&DwellingProfile::default()).unwrap();
        prop_assert!(resolved.is_complete());
        prop_assert_eq!(resolved.profile, profile);
    }
}
