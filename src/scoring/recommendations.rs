//! Recommendation generator.
//!
//! Maps detected weaknesses to a fixed catalog of renovation actions. The
//! catalog is an ordered list of steps; a step is either a single rule or a
//! short-circuiting chain where only the first matching rule fires. Output
//! order is catalog order.

use crate::model::{
    DwellingProfile, Priority, Recommendation, RecommendationId, Weakness, WeaknessId,
};
use std::collections::HashSet;

/// Static content of a recommendation
struct Template {
    id: RecommendationId,
    name: &'static str,
    priority: Priority,
    reason: &'static str,
    dpe_impact: &'static str,
    comfort_impact: &'static str,
    bill_impact: &'static str,
    explanation: &'static str,
    estimated_saving: u8,
}

impl Template {
    fn build(&self) -> Recommendation {
        Recommendation {
            id: self.id,
            name: self.name.to_string(),
            priority: self.priority,
            reason: self.reason.to_string(),
            dpe_impact: self.dpe_impact.to_string(),
            comfort_impact: self.comfort_impact.to_string(),
            bill_impact: self.bill_impact.to_string(),
            explanation: self.explanation.to_string(),
            estimated_saving: self.estimated_saving,
        }
    }
}

/// Fires when any of `triggers` is present
struct Rule {
    triggers: &'static [WeaknessId],
    template: Template,
}

impl Rule {
    fn matches(&self, present: &HashSet<WeaknessId>) -> bool {
        self.triggers.iter().any(|id| present.contains(id))
    }
}

enum Step {
    Single(Rule),
    /// Only the first matching rule fires
    FirstMatch(&'static [Rule]),
}

const INSULATE_ROOF: Rule = Rule {
    triggers: &[WeaknessId::RoofInsulation],
    template: Template {
        id: RecommendationId::InsulateRoof,
        name: "Insulate the roof or attic",
        priority: Priority::High,
        reason: "The roof is the largest source of heat loss. Insulating it is the most \
                 cost-effective measure.",
        dpe_impact: "Potential gain of 1 to 2 classes",
        comfort_impact: "Much better thermal comfort in winter and summer",
        bill_impact: "Estimated 20 to 30% reduction of the heating bill",
        explanation: "Warm air naturally rises. Without effective roof insulation, much of the \
                      heat produced escapes straight through it. Insulating lofts, whether \
                      converted or not, is often the simplest and most profitable work.",
        estimated_saving: 25,
    },
};

const INSULATE_WALLS: Rule = Rule {
    triggers: &[WeaknessId::WallInsulation],
    template: Template {
        id: RecommendationId::InsulateWalls,
        name: "Improve wall insulation",
        priority: Priority::High,
        reason: "Walls are the second source of loss. Internal or external insulation \
                 transforms comfort.",
        dpe_impact: "Potential gain of 1 class",
        comfort_impact: "No more cold-wall effect, even comfort throughout",
        bill_impact: "Estimated 15 to 25% reduction of the bill",
        explanation: "Poorly insulated walls leak heat continuously. External wall insulation \
                      performs best because it removes thermal bridges; internal insulation \
                      is a cheaper alternative.",
        estimated_saving: 20,
    },
};

const REPLACE_WINDOWS: Rule = Rule {
    triggers: &[WeaknessId::Windows],
    template: Template {
        id: RecommendationId::ReplaceWindows,
        name: "Replace single glazing",
        priority: Priority::High,
        reason: "Single glazing multiplies window losses by 3 to 4.",
        dpe_impact: "Moderate gain (0.5 to 1 class depending on glazed surface)",
        comfort_impact: "Strong improvement: no more cold drafts, less condensation",
        bill_impact: "Estimated 10 to 15% reduction",
        explanation: "Low-emissivity double glazing divides window losses by 3. Triple glazing \
                      is only worthwhile in cold zones or on north facades.",
        estimated_saving: 12,
    },
};

const UPGRADE_HEATING: Rule = Rule {
    triggers: &[WeaknessId::HeatingType, WeaknessId::HeatingFuel],
    template: Template {
        id: RecommendationId::UpgradeHeating,
        name: "Replace the heating system",
        priority: Priority::High,
        reason: "The current system uses far more energy than modern alternatives.",
        dpe_impact: "Gain of 1 to 2 classes possible",
        comfort_impact: "More even heat, better control",
        bill_impact: "Estimated 30 to 50% reduction of heating costs",
        explanation: "An air-to-water heat pump is 3 to 4 times more efficient than an electric \
                      convector; a condensing gas boiler is also a good compromise. Size the \
                      new system for the building envelope.",
        estimated_saving: 35,
    },
};

const MODERNIZE_HEATING: Rule = Rule {
    triggers: &[WeaknessId::HeatingAge],
    template: Template {
        id: RecommendationId::ModernizeHeating,
        name: "Modernize the heating system",
        priority: Priority::Medium,
        reason: "The system is ageing and losing efficiency.",
        dpe_impact: "Gain of 0.5 to 1 class",
        comfort_impact: "Better control and reliability",
        bill_impact: "Estimated 10 to 20% reduction",
        explanation: "Even with the same technology, recent equipment is more efficient. Also \
                      consider controls such as a programmable thermostat and thermostatic \
                      radiator valves.",
        estimated_saving: 15,
    },
};

const HEATING_CHAIN: &[Rule] = &[UPGRADE_HEATING, MODERNIZE_HEATING];

const INSTALL_VMC: Rule = Rule {
    triggers: &[WeaknessId::Ventilation],
    template: Template {
        id: RecommendationId::InstallVmc,
        name: "Install mechanical ventilation",
        priority: Priority::Medium,
        reason: "Natural ventilation cannot control air losses.",
        dpe_impact: "Moderate impact on the class",
        comfort_impact: "Better air quality, less humidity",
        bill_impact: "5 to 10% reduction (up to 15% with heat recovery)",
        explanation: "Humidity-controlled single-flow ventilation adapts airflow to moisture. \
                      Double-flow ventilation recovers heat from outgoing air to preheat \
                      incoming air, cutting ventilation losses by 70 to 90%.",
        estimated_saving: 8,
    },
};

const SEAL_AIR_LEAKS: Rule = Rule {
    triggers: &[WeaknessId::AirLeakage],
    template: Template {
        id: RecommendationId::SealAirLeaks,
        name: "Seal parasitic air leaks",
        priority: Priority::Medium,
        reason: "Infiltration silently increases heating needs.",
        dpe_impact: "Moderate impact but immediate effect",
        comfort_impact: "No more drafts, better comfort",
        bill_impact: "Estimated 5 to 10% reduction",
        explanation: "Airtightness is improved by sealing window joints, duct and cable \
                      penetrations and roller-shutter boxes. It is usually cheap and very \
                      effective.",
        estimated_saving: 7,
    },
};

const INSULATE_FLOOR: Rule = Rule {
    triggers: &[WeaknessId::FloorInsulation],
    template: Template {
        id: RecommendationId::InsulateFloor,
        name: "Insulate the lowest floor",
        priority: Priority::Low,
        reason: "The floor contributes moderately to losses but insulating it improves comfort.",
        dpe_impact: "Small to moderate gain",
        comfort_impact: "Warmer floor, better comfort",
        bill_impact: "Estimated 5 to 7% reduction",
        explanation: "Floor insulation is often simple with a crawl space or cellar. It removes \
                      the cold-floor feeling and reduces losses through the bottom of the \
                      building.",
        estimated_saving: 6,
    },
};

/// Emitted alone when no other recommendation applies
const OPTIMIZE: Template = Template {
    id: RecommendationId::Optimize,
    name: "Optimize controls and usage habits",
    priority: Priority::Low,
    reason: "The home is well equipped overall.",
    dpe_impact: "Class maintained or slightly improved",
    comfort_impact: "Fine-tuning of existing comfort",
    bill_impact: "5 to 10% reduction through habits",
    explanation: "Install a programmable thermostat and set 19°C during the day and 16°C at \
                  night. Service the heating system regularly and check window seals.",
    estimated_saving: 5,
};

/// Catalog in display order
const CATALOG: &[Step] = &[
    Step::Single(INSULATE_ROOF),
    Step::Single(INSULATE_WALLS),
    Step::Single(REPLACE_WINDOWS),
    Step::FirstMatch(HEATING_CHAIN),
    Step::Single(INSTALL_VMC),
    Step::Single(SEAL_AIR_LEAKS),
    Step::Single(INSULATE_FLOOR),
];

/// Build recommendations from detected weaknesses.
///
/// The result is never empty: without any triggered rule a single
/// "optimize" recommendation is returned. The profile is accepted for
/// rules that may need raw fields; the current catalog only reads weaknesses.
#[must_use]
pub fn recommend(_profile: &DwellingProfile, weaknesses: &[Weakness]) -> Vec<Recommendation> {
    let present: HashSet<WeaknessId> = weaknesses.iter().map(|w| w.id).collect();

    let mut recommendations = Vec::new();
    for step in CATALOG {
        let fired = match step {
            Step::Single(rule) => rule.matches(&present).then_some(rule),
            Step::FirstMatch(rules) => rules.iter().find(|rule| rule.matches(&present)),
        };
        if let Some(rule) = fired {
            recommendations.push(rule.template.build());
        }
    }

    if recommendations.is_empty() {
        recommendations.push(OPTIMIZE.build());
    }
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        AirLeakage, HeatingAge, HeatingType, InsulationQuality, VentilationType, WindowType,
    };
    use crate::scoring::detect_weaknesses;

    fn ids_for(profile: &DwellingProfile) -> Vec<RecommendationId> {
        let weaknesses = detect_weaknesses(profile);
        recommend(profile, &weaknesses).iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_fallback_when_nothing_detected() {
        let profile = DwellingProfile::default();
        let recs = recommend(&profile, &[]);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].id, RecommendationId::Optimize);
        assert_eq!(recs[0].priority, Priority::Low);
        assert_eq!(recs[0].estimated_saving, 5);
    }

    #[test]
    fn test_replacement_takes_precedence_over_modernization() {
        let mut profile = DwellingProfile::default();
        profile.heating_type = HeatingType::FuelBoiler;
        profile.heating_age = HeatingAge::MoreThan25;
        assert_eq!(ids_for(&profile), vec![RecommendationId::UpgradeHeating]);
    }

    #[test]
    fn test_modernization_when_only_age() {
        let mut profile = DwellingProfile::default();
        profile.heating_age = HeatingAge::From15To25;
        let ids = ids_for(&profile);
        assert_eq!(ids, vec![RecommendationId::ModernizeHeating]);
    }

    #[test]
    fn test_convector_triggers_replacement() {
        let mut profile = DwellingProfile::default();
        profile.heating_type = HeatingType::ElectricConvector;
        assert_eq!(ids_for(&profile), vec![RecommendationId::UpgradeHeating]);
    }

    #[test]
    fn test_catalog_order_not_impact_order() {
        let mut profile = DwellingProfile::default();
        profile.floor_insulation = InsulationQuality::Poor;
        profile.air_leakage = AirLeakage::Significant;
        profile.ventilation_type = VentilationType::Natural;
        profile.window_type = WindowType::Single;
        profile.wall_insulation = InsulationQuality::Poor;
        profile.roof_insulation = InsulationQuality::None;
        profile.heating_age = HeatingAge::MoreThan25;
        assert_eq!(
            ids_for(&profile),
            vec![
                RecommendationId::InsulateRoof,
                RecommendationId::InsulateWalls,
                RecommendationId::ReplaceWindows,
                RecommendationId::ModernizeHeating,
                RecommendationId::InstallVmc,
                RecommendationId::SealAirLeaks,
                RecommendationId::InsulateFloor,
            ]
        );
    }

    #[test]
    fn test_savings_are_percentages() {
        for step in CATALOG {
            let rules: &[Rule] = match step {
                Step::Single(rule) => std::slice::from_ref(rule),
                Step::FirstMatch(rules) => *rules,
            };
            for rule in rules {
                assert!(rule.template.estimated_saving <= 100);
                assert!(!rule.triggers.is_empty());
            }
        }
    }
}
