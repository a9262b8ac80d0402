//! Dwelling profile: the immutable input of the scoring engine.
//!
//! Every enum field has a total domain (no "unknown" variant) and every
//! numeric field is a validated newtype, so a `DwellingProfile` that exists
//! is always scoreable.

use crate::error::{DpeError, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

/// Declares a profile enum with its wire names.
///
/// Generates the enum, `ALL` in declaration order, `as_str()` and `Display`.
macro_rules! profile_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// All values in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Wire name used in profile files.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

profile_enum! {
    /// Kind of dwelling
    HousingType {
        Apartment => "apartment",
        House => "house",
    }
}

profile_enum! {
    /// Construction period, oldest first
    ConstructionPeriod {
        Before1948 => "before1948",
        From1948To1974 => "1948-1974",
        From1975To1988 => "1975-1988",
        From1989To2000 => "1989-2000",
        From2001To2012 => "2001-2012",
        After2012 => "after2012",
    }
}

profile_enum! {
    /// French regulatory climate zone
    ClimateZone {
        /// Cold, continental
        H1 => "H1",
        /// Temperate, oceanic
        H2 => "H2",
        /// Mild, mediterranean
        H3 => "H3",
    }
}

profile_enum! {
    /// Insulation quality of a wall, roof or floor
    InsulationQuality {
        None => "none",
        Poor => "poor",
        Average => "average",
        Good => "good",
        Excellent => "excellent",
    }
}

profile_enum! {
    /// Glazing type
    WindowType {
        Single => "single",
        Double => "double",
        Triple => "triple",
    }
}

profile_enum! {
    /// Main facade orientation
    Orientation {
        North => "north",
        South => "south",
        East => "east",
        West => "west",
    }
}

profile_enum! {
    /// Heating system
    HeatingType {
        ElectricConvector => "electric_convector",
        ElectricRadiant => "electric_radiant",
        GasBoiler => "gas_boiler",
        GasCondensing => "gas_condensing",
        FuelBoiler => "fuel_boiler",
        HeatPump => "heat_pump",
        Wood => "wood",
    }
}

profile_enum! {
    /// Age of the heating system
    HeatingAge {
        LessThan5 => "less5",
        From5To15 => "5to15",
        From15To25 => "15to25",
        MoreThan25 => "more25",
    }
}

profile_enum! {
    /// Heat distribution
    DistributionSystem {
        Radiators => "radiators",
        FloorHeating => "floor_heating",
    }
}

profile_enum! {
    /// Main energy source. Informational only, not used by the estimator.
    EnergySource {
        Electricity => "electricity",
        Gas => "gas",
        Fuel => "fuel",
        Renewable => "renewable",
        Hybrid => "hybrid",
    }
}

profile_enum! {
    /// Ventilation system
    VentilationType {
        Natural => "natural",
        /// Single-flow mechanical ventilation
        VmcSimple => "vmc_simple",
        /// Double-flow mechanical ventilation with heat recovery
        VmcDouble => "vmc_double",
    }
}

profile_enum! {
    /// Perceived air leakage (drafts)
    AirLeakage {
        None => "none",
        Slight => "slight",
        Moderate => "moderate",
        Significant => "significant",
    }
}

profile_enum! {
    /// Occupant behavior level for heating habits and hot water
    UsageLevel {
        Low => "low",
        Average => "average",
        High => "high",
    }
}

/// Smallest surface accepted; below this the window ratio is meaningless.
pub const MIN_SURFACE_AREA: f64 = 1.0;

/// Practical surface range (m²); values outside are accepted with a warning.
pub const PRACTICAL_SURFACE_RANGE: (f64, f64) = (10.0, 500.0);

/// Practical window surface range (m²).
pub const PRACTICAL_WINDOW_RANGE: (f64, f64) = (2.0, 100.0);

/// Heated living area in m².
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "f64", into = "f64")]
pub struct SurfaceArea(f64);

impl SurfaceArea {
    /// Validate a living area.
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() || value < MIN_SURFACE_AREA {
            return Err(DpeError::invalid_profile(
                "surfaceArea",
                format!("must be a finite number of at least {MIN_SURFACE_AREA} m², got {value}"),
            ));
        }
        let (low, high) = PRACTICAL_SURFACE_RANGE;
        if !(low..=high).contains(&value) {
            tracing::warn!("Surface area {value} m² is outside the practical range {low}-{high} m²");
        }
        Ok(Self(value))
    }

    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for SurfaceArea {
    type Error = DpeError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<SurfaceArea> for f64 {
    fn from(value: SurfaceArea) -> Self {
        value.0
    }
}

/// Total glazed surface in m².
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "f64", into = "f64")]
pub struct WindowSurface(f64);

impl WindowSurface {
    /// Validate a glazed surface.
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(DpeError::invalid_profile(
                "windowSurface",
                format!("must be a positive finite number of m², got {value}"),
            ));
        }
        let (low, high) = PRACTICAL_WINDOW_RANGE;
        if !(low..=high).contains(&value) {
            tracing::warn!("Window surface {value} m² is outside the practical range {low}-{high} m²");
        }
        Ok(Self(value))
    }

    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for WindowSurface {
    type Error = DpeError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<WindowSurface> for f64 {
    fn from(value: WindowSurface) -> Self {
        value.0
    }
}

/// Complete description of a dwelling, ready to be scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DwellingProfile {
    // General
    pub housing_type: HousingType,
    pub surface_area: SurfaceArea,
    pub construction_period: ConstructionPeriod,
    pub climate_zone: ClimateZone,

    // Envelope
    pub wall_insulation: InsulationQuality,
    pub roof_insulation: InsulationQuality,
    pub floor_insulation: InsulationQuality,
    pub window_type: WindowType,
    pub window_surface: WindowSurface,
    pub orientation: Orientation,

    // Heating
    pub heating_type: HeatingType,
    pub heating_age: HeatingAge,
    pub distribution_system: DistributionSystem,

    // Energy
    pub energy_source: EnergySource,

    // Ventilation
    pub ventilation_type: VentilationType,
    pub air_leakage: AirLeakage,

    // Occupancy
    pub occupants: NonZeroU32,
    pub heating_habits: UsageLevel,
    pub hot_water_usage: UsageLevel,
}

impl DwellingProfile {
    /// Ratio of glazed surface to living area.
    #[must_use]
    pub fn window_ratio(&self) -> f64 {
        self.window_surface.get() / self.surface_area.get()
    }
}

impl Default for DwellingProfile {
    /// Starting answers of the questionnaire.
    fn default() -> Self {
        Self {
            housing_type: HousingType::Apartment,
            surface_area: SurfaceArea(70.0),
            construction_period: ConstructionPeriod::From1975To1988,
            climate_zone: ClimateZone::H1,
            wall_insulation: InsulationQuality::Average,
            roof_insulation: InsulationQuality::Average,
            floor_insulation: InsulationQuality::Average,
            window_type: WindowType::Double,
            window_surface: WindowSurface(15.0),
            orientation: Orientation::South,
            heating_type: HeatingType::GasBoiler,
            heating_age: HeatingAge::From5To15,
            distribution_system: DistributionSystem::Radiators,
            energy_source: EnergySource::Gas,
            ventilation_type: VentilationType::VmcSimple,
            air_leakage: AirLeakage::Slight,
            occupants: NonZeroU32::MIN.saturating_add(1),
            heating_habits: UsageLevel::Average,
            hot_water_usage: UsageLevel::Average,
        }
    }
}
