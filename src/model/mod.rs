//! Data model for the estimator.
//!
//! [`DwellingProfile`] is the validated input; [`DpeResult`] and its parts
//! are the derived output.

mod profile;
mod result;

pub use profile::{
    AirLeakage, ClimateZone, ConstructionPeriod, DistributionSystem, DwellingProfile,
    EnergySource, HeatingAge, HeatingType, HousingType, InsulationQuality, Orientation,
    SurfaceArea, UsageLevel, VentilationType, WindowSurface, WindowType, MIN_SURFACE_AREA,
    PRACTICAL_SURFACE_RANGE, PRACTICAL_WINDOW_RANGE,
};
pub use result::{
    DpeResult, EnergyBreakdown, Priority, Recommendation, RecommendationId, Severity, Weakness,
    WeaknessCategory, WeaknessId,
};
