//! Raw questionnaire answers.
//!
//! Every field is optional: an absent field means the respondent did not
//! know. Resolution fills the gaps from a default profile before scoring.

use crate::error::{DpeError, Result};
use crate::model::{
    AirLeakage, ClimateZone, ConstructionPeriod, DistributionSystem, DwellingProfile,
    EnergySource, HeatingAge, HeatingType, HousingType, InsulationQuality, Orientation,
    SurfaceArea, UsageLevel, VentilationType, WindowSurface, WindowType,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

/// Answers collected by the questionnaire, possibly incomplete
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProfileAnswers {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub housing_type: Option<HousingType>,
    /// Living area in m²
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface_area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub construction_period: Option<ConstructionPeriod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub climate_zone: Option<ClimateZone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wall_insulation: Option<InsulationQuality>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roof_insulation: Option<InsulationQuality>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_insulation: Option<InsulationQuality>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_type: Option<WindowType>,
    /// Glazed surface in m²
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_surface: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heating_type: Option<HeatingType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heating_age: Option<HeatingAge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution_system: Option<DistributionSystem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_source: Option<EnergySource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ventilation_type: Option<VentilationType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub air_leakage: Option<AirLeakage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupants: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heating_habits: Option<UsageLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hot_water_usage: Option<UsageLevel>,
}

/// A profile built from answers, with the fields that were filled in
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedProfile {
    pub profile: DwellingProfile,
    /// Wire names of the fields taken from the defaults
    pub defaulted_fields: Vec<&'static str>,
}

impl ResolvedProfile {
    /// Whether every field was answered
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.defaulted_fields.is_empty()
    }
}

/// Tracks which answers fall back to their default.
struct Resolver {
    defaulted: Vec<&'static str>,
}

impl Resolver {
    fn pick<T: Copy>(&mut self, field: &'static str, answer: Option<T>, default: T) -> T {
        answer.unwrap_or_else(|| {
            self.defaulted.push(field);
            default
        })
    }
}

impl ProfileAnswers {
    /// Number of questions in the questionnaire
    pub const QUESTION_COUNT: usize = 19;

    /// Create an empty answer set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers matching a complete profile
    #[must_use]
    pub fn from_profile(profile: &DwellingProfile) -> Self {
        Self {
            housing_type: Some(profile.housing_type),
            surface_area: Some(profile.surface_area.get()),
            construction_period: Some(profile.construction_period),
            climate_zone: Some(profile.climate_zone),
            wall_insulation: Some(profile.wall_insulation),
            roof_insulation: Some(profile.roof_insulation),
            floor_insulation: Some(profile.floor_insulation),
            window_type: Some(profile.window_type),
            window_surface: Some(profile.window_surface.get()),
            orientation: Some(profile.orientation),
            heating_type: Some(profile.heating_type),
            heating_age: Some(profile.heating_age),
            distribution_system: Some(profile.distribution_system),
            energy_source: Some(profile.energy_source),
            ventilation_type: Some(profile.ventilation_type),
            air_leakage: Some(profile.air_leakage),
            occupants: Some(profile.occupants.get()),
            heating_habits: Some(profile.heating_habits),
            hot_water_usage: Some(profile.hot_water_usage),
        }
    }

    /// Number of answered fields
    #[must_use]
    pub fn answered_count(&self) -> usize {
        [
            self.housing_type.is_some(),
            self.surface_area.is_some(),
            self.construction_period.is_some(),
            self.climate_zone.is_some(),
            self.wall_insulation.is_some(),
            self.roof_insulation.is_some(),
            self.floor_insulation.is_some(),
            self.window_type.is_some(),
            self.window_surface.is_some(),
            self.orientation.is_some(),
            self.heating_type.is_some(),
            self.heating_age.is_some(),
            self.distribution_system.is_some(),
            self.energy_source.is_some(),
            self.ventilation_type.is_some(),
            self.air_leakage.is_some(),
            self.occupants.is_some(),
            self.heating_habits.is_some(),
            self.hot_water_usage.is_some(),
        ]
        .iter()
        .filter(|answered| **answered)
        .count()
    }

    /// Layer `other` over these answers; answered fields in `other` win.
    pub fn merge(&mut self, other: &Self) {
        macro_rules! take {
            ($($field:ident),+) => {
                $(
                    if other.$field.is_some() {
                        self.$field = other.$field;
                    }
                )+
            };
        }
        take!(
            housing_type,
            surface_area,
            construction_period,
            climate_zone,
            wall_insulation,
            roof_insulation,
            floor_insulation,
            window_type,
            window_surface,
            orientation,
            heating_type,
            heating_age,
            distribution_system,
            energy_source,
            ventilation_type,
            air_leakage,
            occupants,
            heating_habits,
            hot_water_usage
        );
    }

    /// Build a complete profile, filling unanswered fields from `defaults`.
    ///
    /// Numeric answers are validated; an out-of-domain value is an error,
    /// never silently replaced by its default.
    pub fn resolve(&self, defaults: &DwellingProfile) -> Result<ResolvedProfile> {
        let mut r = Resolver {
            defaulted: Vec::new(),
        };

        let surface_area = match self.surface_area {
            Some(value) => SurfaceArea::new(value)?,
            None => r.pick("surfaceArea", None, defaults.surface_area),
        };
        let window_surface = match self.window_surface {
            Some(value) => WindowSurface::new(value)?,
            None => r.pick("windowSurface", None, defaults.window_surface),
        };
        let occupants = match self.occupants {
            Some(value) => NonZeroU32::new(value).ok_or_else(|| {
                DpeError::invalid_profile("occupants", "must be at least 1")
            })?,
            None => r.pick("occupants", None, defaults.occupants),
        };

        let profile = DwellingProfile {
            housing_type: r.pick("housingType", self.housing_type, defaults.housing_type),
            surface_area,
            construction_period: r.pick(
                "constructionPeriod",
                self.construction_period,
                defaults.construction_period,
            ),
            climate_zone: r.pick("climateZone", self.climate_zone, defaults.climate_zone),
            wall_insulation: r.pick(
                "wallInsulation",
                self.wall_insulation,
                defaults.wall_insulation,
            ),
            roof_insulation: r.pick(
                "roofInsulation",
                self.roof_insulation,
                defaults.roof_insulation,
            ),
            floor_insulation: r.pick(
                "floorInsulation",
                self.floor_insulation,
                defaults.floor_insulation,
            ),
            window_type: r.pick("windowType", self.window_type, defaults.window_type),
            window_surface,
            orientation: r.pick("orientation", self.orientation, defaults.orientation),
            heating_type: r.pick("heatingType", self.heating_type, defaults.heating_type),
            heating_age: r.pick("heatingAge", self.heating_age, defaults.heating_age),
            distribution_system: r.pick(
                "distributionSystem",
                self.distribution_system,
                defaults.distribution_system,
            ),
            energy_source: r.pick("energySource", self.energy_source, defaults.energy_source),
            ventilation_type: r.pick(
                "ventilationType",
                self.ventilation_type,
                defaults.ventilation_type,
            ),
            air_leakage: r.pick("airLeakage", self.air_leakage, defaults.air_leakage),
            occupants,
            heating_habits: r.pick("heatingHabits", self.heating_habits, defaults.heating_habits),
            hot_water_usage: r.pick(
                "hotWaterUsage",
                self.hot_water_usage,
                defaults.hot_water_usage,
            ),
        };

        if !r.defaulted.is_empty() {
            tracing::debug!("Defaulted unanswered fields: {}", r.defaulted.join(", "));
        }

        Ok(ResolvedProfile {
            profile,
            defaulted_fields: r.defaulted,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_answers_resolve_to_defaults() {
        let resolved = ProfileAnswers::new()
            .resolve(&DwellingProfile::default())
            .unwrap();
        assert_eq!(resolved.profile, DwellingProfile::default());
        assert_eq!(resolved.defaulted_fields.len(), 19);
        assert!(!resolved.is_complete());
    }

    #[test]
    fn test_full_answers_roundtrip() {
        let mut profile = DwellingProfile::default();
        profile.housing_type = HousingType::House;
        profile.heating_type = HeatingType::Wood;
        let answers = ProfileAnswers::from_profile(&profile);
        assert_eq!(answers.answered_count(), 19);
        let resolved = answers.resolve(&DwellingProfile::default()).unwrap();
        assert!(resolved.is_complete());
        assert_eq!(resolved.profile, profile);
    }

    #[test]
    fn test_partial_answers_report_defaulted_fields() {
        let answers = ProfileAnswers {
            surface_area: Some(120.0),
            wall_insulation: Some(InsulationQuality::Poor),
            ..Default::default()
        };
        let resolved = answers.resolve(&DwellingProfile::default()).unwrap();
        assert_eq!(resolved.profile.surface_area.get(), 120.0);
        assert_eq!(resolved.profile.wall_insulation, InsulationQuality::Poor);
        assert!(!resolved.defaulted_fields.contains(&"surfaceArea"));
        assert!(resolved.defaulted_fields.contains(&"roofInsulation"));
        assert_eq!(resolved.defaulted_fields.len(), 17);
    }

    #[test]
    fn test_invalid_numeric_answers_are_rejected() {
        let zero_surface = ProfileAnswers {
            surface_area: Some(0.0),
            ..Default::default()
        };
        let err = zero_surface
            .resolve(&DwellingProfile::default())
            .unwrap_err();
        assert_eq!(err.field(), Some("surfaceArea"));

        let no_occupants = ProfileAnswers {
            occupants: Some(0),
            ..Default::default()
        };
        let err = no_occupants
            .resolve(&DwellingProfile::default())
            .unwrap_err();
        assert_eq!(err.field(), Some("occupants"));
    }

    #[test]
    fn test_merge_prefers_other() {
        let mut base = ProfileAnswers {
            climate_zone: Some(ClimateZone::H1),
            occupants: Some(3),
            ..Default::default()
        };
        let overlay = ProfileAnswers {
            climate_zone: Some(ClimateZone::H3),
            ..Default::default()
        };
        base.merge(&overlay);
        assert_eq!(base.climate_zone, Some(ClimateZone::H3));
        assert_eq!(base.occupants, Some(3));
    }

    #[test]
    fn test_deserialize_camel_case_yaml() {
        let yaml = "housingType: house\nconstructionPeriod: before1948\nheatingAge: more25\n";
        let answers: ProfileAnswers = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(answers.housing_type, Some(HousingType::House));
        assert_eq!(answers.construction_period, Some(ConstructionPeriod::Before1948));
        assert_eq!(answers.heating_age, Some(HeatingAge::MoreThan25));
        assert_eq!(answers.answered_count(), 3);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let json = r#"{"housingType": "house", "basement": true}"#;
        assert!(serde_json::from_str::<ProfileAnswers>(json).is_err());
    }

    #[test]
    fn test_empty_answers_serialize_to_empty_object() {
        let json = serde_json::to_string(&ProfileAnswers::new()).unwrap();
        assert_eq!(json, "{}");
    }
}
