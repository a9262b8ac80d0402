//! Consumption estimator.
//!
//! The estimate is a product of a base consumption (by construction period)
//! and seven modifiers. Each modifier is exposed through
//! [`ConsumptionFactors`] so reports can explain the result.

use super::coefficients::{
    FLOOR_WEIGHT, HEATING_HABITS_WEIGHT, HOT_WATER_WEIGHT, LARGE_GLAZING_FACTOR,
    LARGE_GLAZING_RATIO, ROOF_WEIGHT, SMALL_GLAZING_FACTOR, SMALL_GLAZING_RATIO, WALL_WEIGHT,
    WINDOW_WEIGHT,
};
use crate::model::DwellingProfile;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The eight factors whose product is the estimated consumption
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionFactors {
    /// Base consumption in kWh/m²/year
    pub base: f64,
    pub climate: f64,
    pub envelope: f64,
    pub window_surface: f64,
    pub heating: f64,
    pub ventilation: f64,
    pub usage: f64,
    pub orientation: f64,
}

impl ConsumptionFactors {
    /// Derive every factor from a profile
    #[must_use]
    pub fn from_profile(profile: &DwellingProfile) -> Self {
        Self {
            base: profile.construction_period.base_consumption(),
            climate: profile.climate_zone.multiplier(),
            envelope: envelope_factor(profile),
            window_surface: window_surface_factor(profile.window_ratio()),
            heating: heating_factor(profile),
            ventilation: ventilation_factor(profile),
            usage: usage_factor(profile),
            orientation: profile.orientation.coefficient(),
        }
    }

    /// Unrounded product of all factors, in kWh/m²/year
    #[must_use]
    pub fn product(&self) -> f64 {
        self.base
            * self.climate
            * self.envelope
            * self.window_surface
            * self.heating
            * self.ventilation
            * self.usage
            * self.orientation
    }

    /// Rounded consumption, half away from zero
    #[must_use]
    pub fn consumption(&self) -> u32 {
        // Bounded by the tables: roughly 7..=2500
        self.product().round() as u32
    }
}

/// Estimate the annual consumption of a dwelling in kWh/m²/year
#[must_use]
pub fn estimate_consumption(profile: &DwellingProfile) -> u32 {
    ConsumptionFactors::from_profile(profile).consumption()
}

fn envelope_factor(profile: &DwellingProfile) -> f64 {
    profile.wall_insulation.coefficient() * WALL_WEIGHT
        + profile.roof_insulation.coefficient() * ROOF_WEIGHT
        + profile.floor_insulation.coefficient() * FLOOR_WEIGHT
        + profile.window_type.coefficient() * WINDOW_WEIGHT
}

/// Adjustment for the glazed surface ratio. Both boundaries are neutral.
fn window_surface_factor(ratio: f64) -> f64 {
    if ratio > LARGE_GLAZING_RATIO {
        LARGE_GLAZING_FACTOR
    } else if ratio < SMALL_GLAZING_RATIO {
        SMALL_GLAZING_FACTOR
    } else {
        1.0
    }
}

fn heating_factor(profile: &DwellingProfile) -> f64 {
    profile.heating_type.efficiency()
        * profile.heating_age.multiplier()
        * profile.distribution_system.coefficient()
}

fn ventilation_factor(profile: &DwellingProfile) -> f64 {
    profile.ventilation_type.coefficient() * profile.air_leakage.coefficient()
}

fn usage_factor(profile: &DwellingProfile) -> f64 {
    profile.heating_habits.coefficient() * HEATING_HABITS_WEIGHT
        + profile.hot_water_usage.coefficient() * HOT_WATER_WEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        ClimateZone, HeatingType, InsulationQuality, Orientation, SurfaceArea, VentilationType,
        WindowSurface,
    };

    #[test]
    fn test_default_profile_factors() {
        let factors = ConsumptionFactors::from_profile(&DwellingProfile::default());
        assert_eq!(factors.base, 250.0);
        assert_eq!(factors.climate, 1.15);
        assert!((factors.envelope - 1.0).abs() < 1e-9);
        assert_eq!(factors.window_surface, 0.95);
        assert_eq!(factors.heating, 1.0);
        assert_eq!(factors.ventilation, 1.0);
        assert!((factors.usage - 1.0).abs() < 1e-9);
        assert_eq!(factors.orientation, 0.92);
    }

    #[test]
    fn test_default_profile_consumption() {
        // 250 × 1.15 × 1.0 × 0.95 × 1.0 × 1.0 × 1.0 × 0.92 = 251.275
        assert_eq!(estimate_consumption(&DwellingProfile::default()), 251);
    }

    #[test]
    fn test_window_surface_boundaries_are_neutral() {
        assert_eq!(window_surface_factor(0.10), 1.0);
        assert_eq!(window_surface_factor(0.20), 1.0);
        assert_eq!(window_surface_factor(0.15), 1.0);
        assert_eq!(window_surface_factor(0.0999), 1.05);
        assert_eq!(window_surface_factor(0.2001), 0.95);
    }

    #[test]
    fn test_window_ratio_uses_surfaces() {
        let mut profile = DwellingProfile::default();
        profile.surface_area = SurfaceArea::new(100.0).unwrap();
        profile.window_surface = WindowSurface::new(5.0).unwrap();
        let factors = ConsumptionFactors::from_profile(&profile);
        assert_eq!(factors.window_surface, 1.05);

        profile.window_surface = WindowSurface::new(10.0).unwrap();
        let factors = ConsumptionFactors::from_profile(&profile);
        assert_eq!(factors.window_surface, 1.0);
    }

    #[test]
    fn test_better_insulation_lowers_consumption() {
        let mut profile = DwellingProfile::default();
        profile.wall_insulation = InsulationQuality::None;
        let poor = estimate_consumption(&profile);
        profile.wall_insulation = InsulationQuality::Excellent;
        let excellent = estimate_consumption(&profile);
        assert!(excellent < poor);
    }

    #[test]
    fn test_heat_pump_beats_convector() {
        let mut profile = DwellingProfile::default();
        profile.heating_type = HeatingType::ElectricConvector;
        let convector = estimate_consumption(&profile);
        profile.heating_type = HeatingType::HeatPump;
        let heat_pump = estimate_consumption(&profile);
        assert!(heat_pump < convector);
    }

    #[test]
    fn test_double_flow_ventilation_beats_natural() {
        let mut profile = DwellingProfile::default();
        profile.ventilation_type = VentilationType::Natural;
        let natural = estimate_consumption(&profile);
        profile.ventilation_type = VentilationType::VmcDouble;
        let double = estimate_consumption(&profile);
        assert!(double < natural);
    }

    #[test]
    fn test_mild_climate_and_east_facade() {
        let mut profile = DwellingProfile::default();
        profile.climate_zone = ClimateZone::H3;
        profile.orientation = Orientation::East;
        // 250 × 0.8 × 0.95 × 0.97 = 184.3
        assert_eq!(estimate_consumption(&profile), 184);
    }
}
