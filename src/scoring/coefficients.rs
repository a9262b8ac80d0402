//! Coefficient tables used by the estimator.
//!
//! Every factor is dimensionless and centered near 1.0, except the base
//! consumption which is in kWh/m²/year. Lower is better everywhere.

use crate::model::{
    AirLeakage, ClimateZone, ConstructionPeriod, DistributionSystem, HeatingAge, HeatingType,
    InsulationQuality, Orientation, UsageLevel, VentilationType, WindowType,
};

// ============================================================================
// Weights
// ============================================================================

/// Envelope weights (sum to 1.0)
pub const WALL_WEIGHT: f64 = 0.40;
pub const ROOF_WEIGHT: f64 = 0.30;
pub const FLOOR_WEIGHT: f64 = 0.15;
pub const WINDOW_WEIGHT: f64 = 0.15;

/// Usage weights (sum to 1.0)
pub const HEATING_HABITS_WEIGHT: f64 = 0.6;
pub const HOT_WATER_WEIGHT: f64 = 0.4;

/// Scale applied to the hot-water usage coefficient in the breakdown
pub const HOT_WATER_SHARE_SCALE: f64 = 0.3;

/// Window-to-floor ratio above which glazing is considered large
pub const LARGE_GLAZING_RATIO: f64 = 0.20;
/// Window-to-floor ratio below which glazing is considered small
pub const SMALL_GLAZING_RATIO: f64 = 0.10;

pub const LARGE_GLAZING_FACTOR: f64 = 0.95;
pub const SMALL_GLAZING_FACTOR: f64 = 1.05;

// ============================================================================
// Lookup tables
// ============================================================================

impl ConstructionPeriod {
    /// Base consumption in kWh/m²/year
    #[must_use]
    pub const fn base_consumption(self) -> f64 {
        match self {
            Self::Before1948 => 380.0,
            Self::From1948To1974 => 330.0,
            Self::From1975To1988 => 250.0,
            Self::From1989To2000 => 190.0,
            Self::From2001To2012 => 130.0,
            Self::After2012 => 70.0,
        }
    }
}

impl ClimateZone {
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::H1 => 1.15,
            Self::H2 => 1.0,
            Self::H3 => 0.8,
        }
    }
}

impl InsulationQuality {
    #[must_use]
    pub const fn coefficient(self) -> f64 {
        match self {
            Self::None => 1.4,
            Self::Poor => 1.2,
            Self::Average => 1.0,
            Self::Good => 0.75,
            Self::Excellent => 0.55,
        }
    }
}

impl WindowType {
    #[must_use]
    pub const fn coefficient(self) -> f64 {
        match self {
            Self::Single => 1.35,
            Self::Double => 1.0,
            Self::Triple => 0.8,
        }
    }
}

impl HeatingType {
    /// Efficiency coefficient; heat pumps are best, convectors worst
    #[must_use]
    pub const fn efficiency(self) -> f64 {
        match self {
            Self::ElectricConvector => 1.3,
            Self::ElectricRadiant => 1.1,
            Self::GasBoiler => 1.0,
            Self::GasCondensing => 0.82,
            Self::FuelBoiler => 1.2,
            Self::HeatPump => 0.55,
            Self::Wood => 0.9,
        }
    }
}

impl HeatingAge {
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::LessThan5 => 0.9,
            Self::From5To15 => 1.0,
            Self::From15To25 => 1.15,
            Self::MoreThan25 => 1.35,
        }
    }
}

impl DistributionSystem {
    #[must_use]
    pub const fn coefficient(self) -> f64 {
        match self {
            Self::Radiators => 1.0,
            Self::FloorHeating => 0.88,
        }
    }
}

impl VentilationType {
    #[must_use]
    pub const fn coefficient(self) -> f64 {
        match self {
            Self::Natural => 1.2,
            Self::VmcSimple => 1.0,
            Self::VmcDouble => 0.78,
        }
    }
}

impl AirLeakage {
    #[must_use]
    pub const fn coefficient(self) -> f64 {
        match self {
            Self::None => 0.95,
            Self::Slight => 1.0,
            Self::Moderate => 1.12,
            Self::Significant => 1.3,
        }
    }
}

impl UsageLevel {
    #[must_use]
    pub const fn coefficient(self) -> f64 {
        match self {
            Self::Low => 0.85,
            Self::Average => 1.0,
            Self::High => 1.2,
        }
    }
}

impl Orientation {
    /// Solar gain factor; south facades gain the most
    #[must_use]
    pub const fn coefficient(self) -> f64 {
        match self {
            Self::South => 0.92,
            Self::East | Self::West => 0.97,
            Self::North => 1.05,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_weights_sum_to_one() {
        let sum = WALL_WEIGHT + ROOF_WEIGHT + FLOOR_WEIGHT + WINDOW_WEIGHT;
        assert!((sum - 1.0).abs() < 1e-9, "envelope weights sum to {sum}");
        assert!((HEATING_HABITS_WEIGHT + HOT_WATER_WEIGHT - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_insulation_is_monotonic() {
        let coefficients: Vec<f64> = InsulationQuality::ALL
            .iter()
            .map(|q| q.coefficient())
            .collect();
        assert!(coefficients.windows(2).all(|w| w[0] > w[1]));
        assert_eq!(coefficients.first().copied(), Some(1.4));
        assert_eq!(coefficients.last().copied(), Some(0.55));
    }

    #[test]
    fn test_base_consumption_decreases_with_period() {
        let bases: Vec<f64> = ConstructionPeriod::ALL
            .iter()
            .map(|p| p.base_consumption())
            .collect();
        assert!(bases.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_climate_ordering() {
        assert!(ClimateZone::H1.multiplier() > ClimateZone::H2.multiplier());
        assert!(ClimateZone::H2.multiplier() > ClimateZone::H3.multiplier());
        assert_eq!(ClimateZone::H2.multiplier(), 1.0);
    }

    #[test]
    fn test_heating_extremes() {
        let best = HeatingType::ALL
            .iter()
            .copied()
            .min_by(|a, b| a.efficiency().total_cmp(&b.efficiency()));
        let worst = HeatingType::ALL
            .iter()
            .copied()
            .max_by(|a, b| a.efficiency().total_cmp(&b.efficiency()));
        assert_eq!(best, Some(HeatingType::HeatPump));
        assert_eq!(worst, Some(HeatingType::ElectricConvector));
    }
}
