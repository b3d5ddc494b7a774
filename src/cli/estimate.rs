//! `cleanquote estimate` subcommand

use clap::Args;
use serde::Serialize;
use std::collections::BTreeSet;

use cleanquote::services::{add_on_summary, format_dollars, format_hours, PricingPolicy};
use cleanquote::{
    AddOn, CleanType, Condition, EstimateCalculator, EstimateRequest, EstimateResult, PetLoad,
    QuoteError, Result,
};

/// Smallest home the form accepts
const MIN_SQFT: f64 = 300.0;

/// Largest home the form accepts
const MAX_SQFT: f64 = 8000.0;

/// Price one home
#[derive(Args, Debug)]
pub struct EstimateArgs {
    /// Approximate square footage (clamped to 300-8000)
    #[arg(long, default_value_t = 1500.0, allow_negative_numbers = true)]
    pub sqft: f64,

    /// Clean type: standard or deep
    #[arg(long, default_value = "standard")]
    pub clean_type: CleanType,

    /// Home condition: normal, messy or heavy
    #[arg(long, default_value = "normal")]
    pub condition: Condition,

    /// Pets: none, some (1-2) or many (3+)
    #[arg(long, default_value = "none")]
    pub pets: PetLoad,

    /// Add-on task: fridge, oven, cabinets, organize (repeatable)
    #[arg(long = "add-on", value_name = "NAME", value_delimiter = ',')]
    pub add_ons: Vec<AddOn>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct EstimateReport<'a> {
    sqft: f64,
    clean_type: CleanType,
    condition: Condition,
    pets: PetLoad,
    add_ons: &'a BTreeSet<AddOn>,
    #[serde(flatten)]
    result: &'a EstimateResult,
}

impl EstimateArgs {
    pub fn run(self, calculator: &EstimateCalculator) -> Result<()> {
        let json = self.json;
        let request = self.into_request()?;
        tracing::debug!(?request, "pricing request");

        let result = calculator.estimate(&request);

        if json {
            let report = EstimateReport {
                sqft: request.sqft,
                clean_type: request.clean_type,
                condition: request.condition,
                pets: request.pets,
                add_ons: &request.add_ons,
                result: &result,
            };
            let out = serde_json::to_string_pretty(&report)
                .map_err(|e| QuoteError::Parse(e.to_string()))?;
            println!("{}", out);
        } else {
            println!("{}", render_text(&request, &result, calculator.policy()));
        }
        Ok(())
    }

    /// Build the calculator request, applying the form's input bounds
    fn into_request(self) -> Result<EstimateRequest> {
        Ok(EstimateRequest {
            sqft: clamp_sqft(self.sqft)?,
            clean_type: self.clean_type,
            condition: self.condition,
            pets: self.pets,
            add_ons: self.add_ons.into_iter().collect(),
        })
    }
}

fn clamp_sqft(sqft: f64) -> Result<f64> {
    if !sqft.is_finite() {
        return Err(QuoteError::InvalidInput(format!(
            "square footage must be a number, got {}",
            sqft
        )));
    }
    let clamped = sqft.clamp(MIN_SQFT, MAX_SQFT);
    if clamped != sqft {
        tracing::warn!(
            requested = sqft,
            used = clamped,
            "square footage outside {}-{}, clamped",
            MIN_SQFT,
            MAX_SQFT
        );
    }
    Ok(clamped)
}

fn render_text(request: &EstimateRequest, result: &EstimateResult, policy: &PricingPolicy) -> String {
    let mut cost_line = format!(
        "  Estimated add-on cost (already included above): {}",
        format_dollars(result.add_on_cost_rounded)
    );
    if result.add_on_cost_raw != result.add_on_cost_rounded {
        cost_line.push_str(&format!(" (raw: ${:.2})", result.add_on_cost_raw));
    }

    [
        format!(
            "Estimated range: {} - {}",
            format_dollars(result.total_low),
            format_dollars(result.total_high)
        ),
        format!(
            "Recommended estimate: ~{} (based on pets + home condition)",
            format_dollars(result.recommended_total)
        ),
        String::new(),
        format!(
            "Add-on breakdown: {}/hr ({}-hour minimum)",
            format_dollars(policy.hourly_rate),
            format_hours(policy.add_on_minimum_hours)
        ),
        format!(
            "  Selected add-ons: {} ({})",
            result.selected_count,
            add_on_summary(&request.add_ons)
        ),
        format!(
            "  Estimated add-on time: {} hrs",
            format_hours(result.add_on_hours)
        ),
        cost_line,
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(sqft: f64, add_ons: Vec<AddOn>) -> EstimateArgs {
        EstimateArgs {
            sqft,
            clean_type: CleanType::Standard,
            condition: Condition::Normal,
            pets: PetLoad::None,
            add_ons,
            json: false,
        }
    }

    // ========== clamp_sqft ==========

    #[test]
    fn test_clamp_sqft_within_bounds_untouched() {
        assert_eq!(clamp_sqft(1500.0).unwrap(), 1500.0);
        assert_eq!(clamp_sqft(300.0).unwrap(), 300.0);
        assert_eq!(clamp_sqft(8000.0).unwrap(), 8000.0);
    }

    #[test]
    fn test_clamp_sqft_out_of_bounds() {
        assert_eq!(clamp_sqft(0.0).unwrap(), 300.0);
        assert_eq!(clamp_sqft(-50.0).unwrap(), 300.0);
        assert_eq!(clamp_sqft(12_000.0).unwrap(), 8000.0);
    }

    #[test]
    fn test_clamp_sqft_rejects_nan() {
        let err = clamp_sqft(f64::NAN).unwrap_err();
        assert!(matches!(err, QuoteError::InvalidInput(_)));
        assert!(clamp_sqft(f64::INFINITY).is_err());
    }

    // ========== into_request ==========

    #[test]
    fn test_into_request_dedups_add_ons() {
        let request = args(1500.0, vec![AddOn::Oven, AddOn::Oven, AddOn::Fridge])
            .into_request()
            .unwrap();
        assert_eq!(request.add_ons.len(), 2);
    }

    #[test]
    fn test_into_request_clamps() {
        let request = args(100.0, Vec::new()).into_request().unwrap();
        assert_eq!(request.sqft, 300.0);
    }

    // ========== render_text ==========

    #[test]
    fn test_render_two_add_ons() {
        let calc = EstimateCalculator::default();
        let request = args(1500.0, vec![AddOn::Fridge, AddOn::Oven])
            .into_request()
            .unwrap();
        let result = calc.estimate(&request);

        let text = render_text(&request, &result, calc.policy());

        assert!(text.contains("Estimated range: $280 - $385"));
        assert!(text.contains("Recommended estimate: ~$315"));
        assert!(text.contains("$55/hr (1-hour minimum)"));
        assert!(text.contains("Selected add-ons: 2 (Fridge interior, Oven interior)"));
        assert!(text.contains("Estimated add-on time: 1 hrs"));
        assert!(text.contains("(already included above): $55"));
        assert!(!text.contains("raw:"));
    }

    #[test]
    fn test_render_shows_raw_cost_when_rounded_differs() {
        let mut policy = PricingPolicy::default();
        policy.hourly_rate = 57.0;
        let calc = EstimateCalculator::new(policy).unwrap();
        let request = args(1500.0, vec![AddOn::Fridge, AddOn::Oven, AddOn::Cabinets])
            .into_request()
            .unwrap();
        let result = calc.estimate(&request);

        let text = render_text(&request, &result, calc.policy());

        assert!(text.contains("Estimated add-on time: 1.5 hrs"));
        assert!(text.contains("$85 (raw: $85.50)"));
    }

    #[test]
    fn test_render_no_add_ons() {
        let calc = EstimateCalculator::default();
        let request = args(1500.0, Vec::new()).into_request().unwrap();
        let result = calc.estimate(&request);

        let text = render_text(&request, &result, calc.policy());

        assert!(text.contains("Estimated range: $225 - $330"));
        assert!(text.contains("Selected add-ons: 0 (No add-ons selected)"));
    }

    #[test]
    fn test_report_json_flattens_result() {
        let calc = EstimateCalculator::default();
        let request = args(1500.0, vec![AddOn::Fridge]).into_request().unwrap();
        let result = calc.estimate(&request);
        let report = EstimateReport {
            sqft: request.sqft,
            clean_type: request.clean_type,
            condition: request.condition,
            pets: request.pets,
            add_ons: &request.add_ons,
            result: &result,
        };

        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["clean_type"], "standard");
        assert_eq!(value["add_ons"], serde_json::json!(["fridge"]));
        assert_eq!(value["total_low"], serde_json::json!(280.0));
        assert_eq!(value["add_on_hours"], serde_json::json!(1.0));
    }
}
