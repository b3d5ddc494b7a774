//! Instant price estimator for residential cleaning quotes

pub mod logging;
pub mod services;
pub mod types;

pub use services::{EstimateCalculator, PricingPolicy};
pub use types::{
    AddOn, CleanType, Condition, EstimateRequest, EstimateResult, PetLoad, QuoteError, Result,
};
