//! Energy class classifier.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Energy-performance class, A (best) to G (worst)
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    ValueEnum,
    Serialize,
    Deserialize,
    JsonSchema,
)]
pub enum DpeClass {
    /// ≤ 70 kWh/m²/year
    A,
    /// 71-110
    B,
    /// 111-180
    C,
    /// 181-250
    D,
    /// 251-330
    E,
    /// 331-420
    F,
    /// > 420
    G,
}

impl DpeClass {
    /// All classes, best first
    pub const ALL: [Self; 7] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
    ];

    /// Classify a consumption in kWh/m²/year. Upper bounds are inclusive.
    #[must_use]
    pub const fn from_consumption(consumption: u32) -> Self {
        match consumption {
            0..=70 => Self::A,
            71..=110 => Self::B,
            111..=180 => Self::C,
            181..=250 => Self::D,
            251..=330 => Self::E,
            331..=420 => Self::F,
            _ => Self::G,
        }
    }

    /// Inclusive upper bound of the class, `None` for G
    #[must_use]
    pub const fn upper_bound(&self) -> Option<u32> {
        match self {
            Self::A => Some(70),
            Self::B => Some(110),
            Self::C => Some(180),
            Self::D => Some(250),
            Self::E => Some(330),
            Self::F => Some(420),
            Self::G => None,
        }
    }

    /// Inclusive lower bound of the class
    #[must_use]
    pub const fn lower_bound(&self) -> u32 {
        match self {
            Self::A => 0,
            Self::B => 71,
            Self::C => 111,
            Self::D => 181,
            Self::E => 251,
            Self::F => 331,
            Self::G => 421,
        }
    }

    #[must_use]
    pub const fn letter(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
            Self::G => "G",
        }
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::A => "Very efficient",
            Self::B => "Efficient",
            Self::C => "Fairly efficient",
            Self::D => "Average",
            Self::E => "Fairly inefficient",
            Self::F => "Inefficient",
            Self::G => "Very inefficient",
        }
    }

    /// Human-readable consumption range, e.g. `71–110`
    #[must_use]
    pub fn range_label(&self) -> String {
        match (self, self.upper_bound()) {
            (Self::A, Some(max)) => format!("≤ {max}"),
            (_, Some(max)) => format!("{}–{max}", self.lower_bound()),
            (_, None) => format!("> {}", self.lower_bound() - 1),
        }
    }

    /// Whether this class is worse than `other`
    #[must_use]
    pub fn is_worse_than(&self, other: Self) -> bool {
        *self > other
    }

    /// The full class scale, best first
    #[must_use]
    pub fn scale() -> Vec<ClassBand> {
        Self::ALL
            .iter()
            .map(|class| ClassBand {
                class: *class,
                label: class.range_label(),
                max: class.upper_bound(),
                description: class.description().to_string(),
            })
            .collect()
    }
}

impl std::fmt::Display for DpeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.letter())
    }
}

/// One row of the class scale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ClassBand {
    pub class: DpeClass,
    pub label: String,
    /// Inclusive maximum in kWh/m²/year, `None` for the open-ended last class
    pub max: Option<u32>,
    pub description: String,
}

/// Classify a consumption in kWh/m²/year
#[must_use]
pub const fn classify(consumption: u32) -> DpeClass {
    DpeClass::from_consumption(consumption)
}
