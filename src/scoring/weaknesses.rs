//! Weakness detection.
//!
//! Rules inspect the raw profile, never the computed consumption. They are
//! evaluated in catalog order; the final list is stably sorted by impact so
//! ties keep catalog order.

use crate::model::{
    AirLeakage, DwellingProfile, HeatingAge, HeatingType, InsulationQuality, Severity,
    VentilationType, Weakness, WeaknessCategory, WeaknessId, WindowType,
};

/// A detection rule: returns a weakness when its predicate holds
type WeaknessRule = fn(&DwellingProfile) -> Option<Weakness>;

/// Rule catalog, in declaration order
const RULES: &[WeaknessRule] = &[
    wall_insulation,
    roof_insulation,
    floor_insulation,
    windows,
    heating_type,
    heating_fuel,
    heating_age,
    ventilation,
    air_leakage,
];

/// Detect the weaknesses of a profile, highest impact first
#[must_use]
pub fn detect_weaknesses(profile: &DwellingProfile) -> Vec<Weakness> {
    let mut weaknesses: Vec<Weakness> = RULES.iter().filter_map(|rule| rule(profile)).collect();
    // sort_by is stable: equal impacts keep catalog order
    weaknesses.sort_by(|a, b| b.impact_score.cmp(&a.impact_score));
    weaknesses
}

fn weakness(
    id: WeaknessId,
    category: WeaknessCategory,
    severity: Severity,
    impact_score: u8,
    label: &str,
    description: &str,
) -> Weakness {
    Weakness {
        id,
        label: label.to_string(),
        category,
        severity,
        description: description.to_string(),
        impact_score,
    }
}

// ============================================================================
// Envelope
// ============================================================================

fn wall_insulation(profile: &DwellingProfile) -> Option<Weakness> {
    let (severity, impact) = match profile.wall_insulation {
        InsulationQuality::None => (Severity::High, 90),
        InsulationQuality::Poor => (Severity::Medium, 70),
        _ => return None,
    };
    Some(weakness(
        WeaknessId::WallInsulation,
        WeaknessCategory::Envelope,
        severity,
        impact,
        "Insufficient wall insulation",
        "Walls account for 20 to 25% of a home's heat loss. Poor insulation causes \
         significant losses and thermal discomfort from cold wall surfaces.",
    ))
}

fn roof_insulation(profile: &DwellingProfile) -> Option<Weakness> {
    let impact = match profile.roof_insulation {
        InsulationQuality::None => 95,
        InsulationQuality::Poor => 80,
        _ => return None,
    };
    Some(weakness(
        WeaknessId::RoofInsulation,
        WeaknessCategory::Envelope,
        Severity::High,
        impact,
        "Insufficient roof insulation",
        "The roof accounts for up to 30% of heat loss. It is often the largest single \
         source of loss, especially in detached houses.",
    ))
}

fn floor_insulation(profile: &DwellingProfile) -> Option<Weakness> {
    let impact = match profile.floor_insulation {
        InsulationQuality::None => 50,
        InsulationQuality::Poor => 35,
        _ => return None,
    };
    Some(weakness(
        WeaknessId::FloorInsulation,
        WeaknessCategory::Envelope,
        Severity::Medium,
        impact,
        "Insufficient floor insulation",
        "The lowest floor contributes about 7 to 10% of heat loss. A poorly insulated \
         floor feels cold underfoot.",
    ))
}

fn windows(profile: &DwellingProfile) -> Option<Weakness> {
    (profile.window_type == WindowType::Single).then(|| {
        weakness(
            WeaknessId::Windows,
            WeaknessCategory::Envelope,
            Severity::High,
            85,
            "Single glazing with high heat loss",
            "Single glazing lets through 3 to 4 times more heat than double glazing. It is \
             also a major source of discomfort through cold drafts and condensation.",
        )
    })
}

// ============================================================================
// Heating
// ============================================================================

fn heating_type(profile: &DwellingProfile) -> Option<Weakness> {
    (profile.heating_type == HeatingType::ElectricConvector).then(|| {
        weakness(
            WeaknessId::HeatingType,
            WeaknessCategory::Heating,
            Severity::High,
            80,
            "Electric convector heating",
            "Electric convectors are the least efficient heating option. They dry the air \
             and cause large temperature swings.",
        )
    })
}

fn heating_fuel(profile: &DwellingProfile) -> Option<Weakness> {
    (profile.heating_type == HeatingType::FuelBoiler).then(|| {
        weakness(
            WeaknessId::HeatingFuel,
            WeaknessCategory::Heating,
            Severity::High,
            85,
            "Oil boiler: carbon-intensive and costly",
            "Heating oil is among the most polluting and expensive energies. Oil boilers \
             are being phased out in the coming years.",
        )
    })
}

fn heating_age(profile: &DwellingProfile) -> Option<Weakness> {
    let (severity, impact) = match profile.heating_age {
        HeatingAge::MoreThan25 => (Severity::High, 75),
        HeatingAge::From15To25 => (Severity::Medium, 50),
        HeatingAge::LessThan5 | HeatingAge::From5To15 => return None,
    };
    Some(weakness(
        WeaknessId::HeatingAge,
        WeaknessCategory::Heating,
        severity,
        impact,
        "Ageing heating system",
        "An old heating system loses efficiency over time: its output drops and its \
         emissions rise. Replacing it can significantly cut consumption.",
    ))
}

// ============================================================================
// Ventilation
// ============================================================================

fn ventilation(profile: &DwellingProfile) -> Option<Weakness> {
    (profile.ventilation_type == VentilationType::Natural).then(|| {
        weakness(
            WeaknessId::Ventilation,
            WeaknessCategory::Ventilation,
            Severity::Medium,
            60,
            "Uncontrolled natural ventilation",
            "Without mechanical ventilation, air renewal is uncontrolled. This causes heat \
             loss and can lead to humidity and air-quality problems.",
        )
    })
}

fn air_leakage(profile: &DwellingProfile) -> Option<Weakness> {
    let (severity, impact) = match profile.air_leakage {
        AirLeakage::Significant => (Severity::High, 70),
        AirLeakage::Moderate => (Severity::Medium, 45),
        AirLeakage::None | AirLeakage::Slight => return None,
    };
    Some(weakness(
        WeaknessId::AirLeakage,
        WeaknessCategory::Ventilation,
        severity,
        impact,
        "Significant air leaks",
        "Parasitic air infiltration considerably increases heating needs. Leaks are \
         usually found around windows, doors and cable or duct penetrations.",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(weaknesses: &[Weakness]) -> Vec<WeaknessId> {
        weaknesses.iter().map(|w| w.id).collect()
    }

    #[test]
    fn test_default_profile_has_no_weakness() {
        assert!(detect_weaknesses(&DwellingProfile::default()).is_empty());
    }

    #[test]
    fn test_wall_severity_depends_on_level() {
        let mut profile = DwellingProfile::default();
        profile.wall_insulation = InsulationQuality::None;
        let found = detect_weaknesses(&profile);
        assert_eq!(found[0].severity, Severity::High);
        assert_eq!(found[0].impact_score, 90);

        profile.wall_insulation = InsulationQuality::Poor;
        let found = detect_weaknesses(&profile);
        assert_eq!(found[0].severity, Severity::Medium);
        assert_eq!(found[0].impact_score, 70);
    }

    #[test]
    fn test_roof_is_always_high() {
        let mut profile = DwellingProfile::default();
        profile.roof_insulation = InsulationQuality::Poor;
        let found = detect_weaknesses(&profile);
        assert_eq!(found[0].severity, Severity::High);
        assert_eq!(found[0].impact_score, 80);
    }

    #[test]
    fn test_floor_is_always_medium() {
        let mut profile = DwellingProfile::default();
        profile.floor_insulation = InsulationQuality::None;
        let found = detect_weaknesses(&profile);
        assert_eq!(found[0].severity, Severity::Medium);
        assert_eq!(found[0].impact_score, 50);
    }

    #[test]
    fn test_good_levels_do_not_trigger() {
        let mut profile = DwellingProfile::default();
        profile.wall_insulation = InsulationQuality::Good;
        profile.roof_insulation = InsulationQuality::Excellent;
        profile.air_leakage = AirLeakage::None;
        profile.heating_age = HeatingAge::LessThan5;
        assert!(detect_weaknesses(&profile).is_empty());
    }

    #[test]
    fn test_sorted_by_impact_with_stable_ties() {
        let mut profile = DwellingProfile::default();
        // windows (85) and fuel boiler (85) tie; windows is declared first
        profile.window_type = WindowType::Single;
        profile.heating_type = HeatingType::FuelBoiler;
        profile.wall_insulation = InsulationQuality::None;
        profile.air_leakage = AirLeakage::Moderate;
        let found = detect_weaknesses(&profile);
        assert_eq!(
            ids(&found),
            vec![
                WeaknessId::WallInsulation,
                WeaknessId::Windows,
                WeaknessId::HeatingFuel,
                WeaknessId::AirLeakage,
            ]
        );
        assert!(found
            .windows(2)
            .all(|w| w[0].impact_score >= w[1].impact_score));
    }

    #[test]
    fn test_heating_rules() {
        let mut profile = DwellingProfile::default();
        profile.heating_type = HeatingType::ElectricConvector;
        profile.heating_age = HeatingAge::From15To25;
        let found = detect_weaknesses(&profile);
        assert_eq!(ids(&found), vec![WeaknessId::HeatingType, WeaknessId::HeatingAge]);
        assert_eq!(found[1].severity, Severity::Medium);
        assert_eq!(found[1].category, WeaknessCategory::Heating);
    }

    #[test]
    fn test_worst_profile_triggers_every_rule_but_one_heating_type() {
        let mut profile = DwellingProfile::default();
        profile.wall_insulation = InsulationQuality::None;
        profile.roof_insulation = InsulationQuality::None;
        profile.floor_insulation = InsulationQuality::None;
        profile.window_type = WindowType::Single;
        profile.heating_type = HeatingType::ElectricConvector;
        profile.heating_age = HeatingAge::MoreThan25;
        profile.ventilation_type = VentilationType::Natural;
        profile.air_leakage = AirLeakage::Significant;
        let found = detect_weaknesses(&profile);
        assert_eq!(found.len(), 8);
        assert_eq!(found[0].id, WeaknessId::RoofInsulation);
        assert_eq!(found.last().map(|w| w.id), Some(WeaknessId::FloorInsulation));
    }
}
