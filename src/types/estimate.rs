//! Estimate request/result types and the enums they are built from

use crate::types::QuoteError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Service tier, selects the rate band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CleanType {
    #[default]
    Standard,
    Deep,
}

impl CleanType {
    pub const ALL: [CleanType; 2] = [CleanType::Standard, CleanType::Deep];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Deep => "deep",
        }
    }
}

impl FromStr for CleanType {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "deep" => Ok(Self::Deep),
            _ => Err(QuoteError::UnknownVariant {
                kind: "clean type",
                value: s.to_string(),
                expected: "standard, deep",
            }),
        }
    }
}

/// How much work the home needs before the clean.
///
/// Only biases the recommended point estimate, never the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    #[default]
    Normal,
    Messy,
    Heavy,
}

impl Condition {
    pub const ALL: [Condition; 3] = [Condition::Normal, Condition::Messy, Condition::Heavy];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Messy => "messy",
            Self::Heavy => "heavy",
        }
    }
}

impl FromStr for Condition {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            // "light" is what the older form called the lowest level
            "normal" | "light" => Ok(Self::Normal),
            "messy" => Ok(Self::Messy),
            "heavy" => Ok(Self::Heavy),
            _ => Err(QuoteError::UnknownVariant {
                kind: "condition",
                value: s.to_string(),
                expected: "normal, messy, heavy",
            }),
        }
    }
}

/// Coarse pet count bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetLoad {
    #[default]
    None,
    /// 1-2 pets
    Some,
    /// 3+ pets
    Many,
}

impl PetLoad {
    pub const ALL: [PetLoad; 3] = [PetLoad::None, PetLoad::Some, PetLoad::Many];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Some => "some",
            Self::Many => "many",
        }
    }
}

impl FromStr for PetLoad {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "0" => Ok(Self::None),
            "some" | "1-2" => Ok(Self::Some),
            "many" | "3+" => Ok(Self::Many),
            _ => Err(QuoteError::UnknownVariant {
                kind: "pet load",
                value: s.to_string(),
                expected: "none, some (1-2), many (3+)",
            }),
        }
    }
}

/// Optional task billed by the hour instead of by area.
///
/// Variant order is catalog order; `BTreeSet<AddOn>` iterates in it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AddOn {
    Fridge,
    Oven,
    Cabinets,
    Organize,
}

impl AddOn {
    pub const ALL: [AddOn; 4] = [AddOn::Fridge, AddOn::Oven, AddOn::Cabinets, AddOn::Organize];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fridge => "fridge",
            Self::Oven => "oven",
            Self::Cabinets => "cabinets",
            Self::Organize => "organize",
        }
    }

    /// Human-readable task name
    pub fn label(self) -> &'static str {
        match self {
            Self::Fridge => "Fridge interior",
            Self::Oven => "Oven interior",
            Self::Cabinets => "Inside cabinets",
            Self::Organize => "Organization reset",
        }
    }
}

impl FromStr for AddOn {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fridge" => Ok(Self::Fridge),
            "oven" => Ok(Self::Oven),
            "cabinets" => Ok(Self::Cabinets),
            "organize" => Ok(Self::Organize),
            _ => Err(QuoteError::UnknownVariant {
                kind: "add-on",
                value: s.to_string(),
                expected: "fridge, oven, cabinets, organize",
            }),
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),+) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.pad(self.as_str())
                }
            }
        )+
    };
}

display_as_str!(CleanType, Condition, PetLoad, AddOn);

/// Low/high dollar pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceRange {
    pub low: f64,
    pub high: f64,
}

/// Everything the calculator needs to price one home
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateRequest {
    pub sqft: f64,
    pub clean_type: CleanType,
    pub condition: Condition,
    pub pets: PetLoad,
    pub add_ons: BTreeSet<AddOn>,
}

impl Default for EstimateRequest {
    fn default() -> Self {
        Self {
            sqft: 1500.0,
            clean_type: CleanType::default(),
            condition: Condition::default(),
            pets: PetLoad::default(),
            add_ons: BTreeSet::new(),
        }
    }
}

/// Priced estimate, ready to render
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateResult {
    pub total_low: f64,
    pub total_high: f64,
    pub recommended_total: f64,
    pub selected_count: usize,
    pub add_on_hours: f64,
    /// Unrounded; may differ from `add_on_cost_rounded`
    pub add_on_cost_raw: f64,
    pub add_on_cost_rounded: f64,
}
