//! Price guide: rounded base ranges at the policy's example home sizes

use crate::services::EstimateCalculator;
use crate::types::CleanType;
use serde::Serialize;

/// One line of the guide
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuideRow {
    pub clean_type: CleanType,
    pub sqft: u32,
    pub low: f64,
    pub high: f64,
}

pub struct PriceGuide;

impl PriceGuide {
    /// Rows for one clean type, in the policy's example order
    pub fn rows(calculator: &EstimateCalculator, clean_type: CleanType) -> Vec<GuideRow> {
        calculator
            .policy()
            .example_sqft
            .iter()
            .map(|&sqft| {
                let range = calculator.base_range(clean_type, f64::from(sqft));
                GuideRow {
                    clean_type,
                    sqft,
                    low: calculator.round_to_unit(range.low),
                    high: calculator.round_to_unit(range.high),
                }
            })
            .collect()
    }

    /// Rows for every clean type (standard first)
    pub fn all(calculator: &EstimateCalculator) -> Vec<GuideRow> {
        CleanType::ALL
            .iter()
            .flat_map(|&clean_type| Self::rows(calculator, clean_type))
            .collect()
    }
}
