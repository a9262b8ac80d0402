//! Breakdown allocator.
//!
//! Splits the total consumption into heating, hot water and envelope losses
//! using a weighting independent from the estimator's own. Each part is
//! rounded on its own, so the parts may not add up exactly to the total.

use super::coefficients::HOT_WATER_SHARE_SCALE;
use crate::model::{DwellingProfile, EnergyBreakdown};

/// Unnormalized shares of the three categories
#[derive(Debug, Clone, Copy, PartialEq)]
struct Shares {
    envelope: f64,
    heating: f64,
    hot_water: f64,
}

impl Shares {
    fn from_profile(profile: &DwellingProfile) -> Self {
        let envelope = (profile.wall_insulation.coefficient()
            + profile.roof_insulation.coefficient()
            + profile.window_type.coefficient())
            / 3.0;
        Self {
            envelope,
            heating: profile.heating_type.efficiency(),
            hot_water: profile.hot_water_usage.coefficient() * HOT_WATER_SHARE_SCALE,
        }
    }

    fn sum(&self) -> f64 {
        self.envelope + self.heating + self.hot_water
    }
}

/// Split `total` into its three categories
#[must_use]
pub fn allocate(total: u32, profile: &DwellingProfile) -> EnergyBreakdown {
    let shares = Shares::from_profile(profile);
    // Every coefficient is strictly positive, so the sum never vanishes
    let sum = shares.sum();
    let part = |share: f64| (share / sum * f64::from(total)).round() as u32;

    EnergyBreakdown {
        heating: part(shares.heating),
        hot_water: part(shares.hot_water),
        envelope_losses: part(shares.envelope),
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HeatingType, InsulationQuality, UsageLevel, WindowType};

    #[test]
    fn test_default_profile_breakdown() {
        // shares: envelope 1.0, heating 1.0, hot water 0.3 → sum 2.3
        let breakdown = allocate(251, &DwellingProfile::default());
        assert_eq!(breakdown.heating, 109);
        assert_eq!(breakdown.envelope_losses, 109);
        assert_eq!(breakdown.hot_water, 33);
        assert_eq!(breakdown.total, 251);
        assert_eq!(breakdown.rounding_drift(), 0);
    }

    #[test]
    fn test_zero_total() {
        let breakdown = allocate(0, &DwellingProfile::default());
        assert_eq!(breakdown.parts_sum(), 0);
    }

    #[test]
    fn test_drift_is_bounded() {
        let mut profile = DwellingProfile::default();
        for heating in HeatingType::ALL {
            for usage in UsageLevel::ALL {
                for window in WindowType::ALL {
                    profile.heating_type = *heating;
                    profile.hot_water_usage = *usage;
                    profile.window_type = *window;
                    profile.wall_insulation = InsulationQuality::Poor;
                    for total in [1, 7, 99, 251, 733, 1999] {
                        let breakdown = allocate(total, &profile);
                        assert!(breakdown.rounding_drift().abs() <= 2, "{breakdown:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_heat_pump_shrinks_heating_share() {
        let mut profile = DwellingProfile::default();
        profile.heating_type = HeatingType::ElectricConvector;
        let convector = allocate(200, &profile);
        profile.heating_type = HeatingType::HeatPump;
        let heat_pump = allocate(200, &profile);
        assert!(heat_pump.heating < convector.heating);
        assert!(heat_pump.envelope_losses > convector.envelope_losses);
    }
}
