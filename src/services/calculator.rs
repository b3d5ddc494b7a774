//! Estimate calculator
//!
//! Pure functions over a validated [`PricingPolicy`]. Nothing here clamps or
//! validates the request; that is the caller's job.

use crate::services::policy::PricingPolicy;
use crate::types::{
    CleanType, Condition, EstimateRequest, EstimateResult, PetLoad, PriceRange, Result,
};

/// Add-ons covered by the minimum-hours charge
const ADD_ONS_IN_MINIMUM: usize = 2;

/// Hours added for each add-on past the minimum
const HOURS_PER_EXTRA_ADD_ON: f64 = 0.5;

/// Calculator bound to one pricing policy
#[derive(Debug, Clone)]
pub struct EstimateCalculator {
    policy: PricingPolicy,
}

impl Default for EstimateCalculator {
    fn default() -> Self {
        // PricingPolicy::default() always passes validate()
        Self {
            policy: PricingPolicy::default(),
        }
    }
}

impl EstimateCalculator {
    /// Validate the policy once; no per-call checks after this
    pub fn new(policy: PricingPolicy) -> Result<Self> {
        policy.validate()?;
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }

    /// Area-based price range before add-ons
    pub fn base_range(&self, clean_type: CleanType, sqft: f64) -> PriceRange {
        let rate = self.policy.rate(clean_type);
        PriceRange {
            low: sqft * rate.low,
            high: sqft * rate.high,
        }
    }

    /// Hours billed for `selected_count` add-ons.
    ///
    /// The first two share the minimum; each one after that adds half an hour.
    pub fn add_on_hours(&self, selected_count: usize) -> f64 {
        match selected_count {
            0 => 0.0,
            n if n <= ADD_ONS_IN_MINIMUM => self.policy.add_on_minimum_hours,
            n => {
                self.policy.add_on_minimum_hours
                    + HOURS_PER_EXTRA_ADD_ON * (n - ADD_ONS_IN_MINIMUM) as f64
            }
        }
    }

    /// Point estimate inside the base range, pulled toward `high` by
    /// condition and pets.
    pub fn recommended_estimate(
        &self,
        clean_type: CleanType,
        sqft: f64,
        condition: Condition,
        pets: PetLoad,
    ) -> f64 {
        let rate = self.policy.rate(clean_type);
        let bias = self.bias(condition, pets);
        let blended_rate = rate.low + (rate.high - rate.low) * bias;
        sqft * blended_rate
    }

    /// Condition bias plus pet delta, capped to [0,1]
    pub fn bias(&self, condition: Condition, pets: PetLoad) -> f64 {
        let raw = self.policy.condition_bias(condition) + self.policy.pet_bias_delta(pets);
        raw.clamp(0.0, 1.0)
    }

    /// Nearest multiple of the rounding unit; ties round away from zero
    pub fn round_to_unit(&self, value: f64) -> f64 {
        let unit = f64::from(self.policy.rounding_unit);
        (value / unit).round() * unit
    }

    /// Full estimate: base range, recommended point and add-on charge
    pub fn estimate(&self, request: &EstimateRequest) -> EstimateResult {
        let selected_count = request.add_ons.len();
        let add_on_hours = self.add_on_hours(selected_count);
        let add_on_cost = add_on_hours * self.policy.hourly_rate;

        let base = self.base_range(request.clean_type, request.sqft);
        let recommended = self.recommended_estimate(
            request.clean_type,
            request.sqft,
            request.condition,
            request.pets,
        );

        EstimateResult {
            total_low: self.round_to_unit(base.low + add_on_cost),
            total_high: self.round_to_unit(base.high + add_on_cost),
            recommended_total: self.round_to_unit(recommended + add_on_cost),
            selected_count,
            add_on_hours,
            add_on_cost_raw: add_on_cost,
            add_on_cost_rounded: self.round_to_unit(add_on_cost),
        }
    }
}
