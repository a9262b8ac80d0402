//! Output of the scoring engine.

use crate::scoring::DpeClass;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Complete estimate for one dwelling profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[must_use]
pub struct DpeResult {
    /// Estimated energy class
    pub class: DpeClass,
    /// Estimated consumption in kWh/m²/year
    pub consumption_intensity: u32,
    /// Split of the consumption by category
    pub breakdown: EnergyBreakdown,
    /// Detected weaknesses, highest impact first
    pub weaknesses: Vec<Weakness>,
    /// Renovation recommendations in display order (never empty)
    pub recommendations: Vec<Recommendation>,
}

/// Consumption split into heating, hot water and envelope losses.
///
/// Each part is rounded independently, so the parts may differ from
/// `total` by up to 2 kWh/m²/year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnergyBreakdown {
    pub heating: u32,
    pub hot_water: u32,
    pub envelope_losses: u32,
    pub total: u32,
}

impl EnergyBreakdown {
    /// Sum of the three parts
    #[must_use]
    pub const fn parts_sum(&self) -> u32 {
        self.heating + self.hot_water + self.envelope_losses
    }

    /// Signed difference between the parts and the total, caused by rounding
    #[must_use]
    pub const fn rounding_drift(&self) -> i64 {
        self.parts_sum() as i64 - self.total as i64
    }
}

/// Identifier of a weakness rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WeaknessId {
    WallInsulation,
    RoofInsulation,
    FloorInsulation,
    Windows,
    HeatingType,
    HeatingFuel,
    HeatingAge,
    Ventilation,
    AirLeakage,
}

impl WeaknessId {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WallInsulation => "wall_insulation",
            Self::RoofInsulation => "roof_insulation",
            Self::FloorInsulation => "floor_insulation",
            Self::Windows => "windows",
            Self::HeatingType => "heating_type",
            Self::HeatingFuel => "heating_fuel",
            Self::HeatingAge => "heating_age",
            Self::Ventilation => "ventilation",
            Self::AirLeakage => "air_leakage",
        }
    }
}

impl std::fmt::Display for WeaknessId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Part of the dwelling a weakness belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum WeaknessCategory {
    Envelope,
    Heating,
    Ventilation,
}

impl WeaknessCategory {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Envelope => "Envelope",
            Self::Heating => "Heating",
            Self::Ventilation => "Ventilation",
        }
    }
}

/// Severity of a weakness
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Priority of a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Severity {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl Priority {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// A deficiency detected in the profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Weakness {
    pub id: WeaknessId,
    pub label: String,
    pub category: WeaknessCategory,
    pub severity: Severity,
    pub description: String,
    /// Relative impact, 0-100
    pub impact_score: u8,
}

/// Identifier of a recommendation template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationId {
    InsulateRoof,
    InsulateWalls,
    ReplaceWindows,
    UpgradeHeating,
    ModernizeHeating,
    InstallVmc,
    SealAirLeaks,
    InsulateFloor,
    Optimize,
}

impl RecommendationId {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InsulateRoof => "insulate_roof",
            Self::InsulateWalls => "insulate_walls",
            Self::ReplaceWindows => "replace_windows",
            Self::UpgradeHeating => "upgrade_heating",
            Self::ModernizeHeating => "modernize_heating",
            Self::InstallVmc => "install_vmc",
            Self::SealAirLeaks => "seal_air_leaks",
            Self::InsulateFloor => "insulate_floor",
            Self::Optimize => "optimize",
        }
    }
}

impl std::fmt::Display for RecommendationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A renovation action suggested by one or more weaknesses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: RecommendationId,
    pub name: String,
    pub priority: Priority,
    pub reason: String,
    pub dpe_impact: String,
    pub comfort_impact: String,
    pub bill_impact: String,
    pub explanation: String,
    /// Estimated saving on the bill, in percent
    pub estimated_saving: u8,
}
