//! Pricing policy: the tunable numbers behind every estimate
//!
//! Loaded once (from a JSON file or the built-in defaults), validated at load,
//! then handed read-only to the calculator.

use crate::types::{CleanType, Condition, PetLoad, QuoteError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Policy file name under the config directory
const POLICY_FILE_NAME: &str = "policy.json";

/// Dollars per square foot for one clean type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RateBand {
    pub low: f64,
    pub high: f64,
}

/// One rate band per clean type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rates {
    pub standard: RateBand,
    pub deep: RateBand,
}

/// Bias weight in [0,1] per home condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConditionBias {
    pub normal: f64,
    pub messy: f64,
    pub heavy: f64,
}

/// Bias delta in [0,1] per pet load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PetBiasDelta {
    pub none: f64,
    pub some: f64,
    pub many: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PricingPolicy {
    pub rates: Rates,
    /// Dollars per add-on hour
    pub hourly_rate: f64,
    /// Hours billed for the first one or two add-ons
    pub add_on_minimum_hours: f64,
    pub condition_bias: ConditionBias,
    pub pet_bias_delta: PetBiasDelta,
    /// Whole dollars; every displayed total is a multiple of this
    pub rounding_unit: u32,
    /// Square footages listed in the price guide
    #[serde(default = "default_example_sqft")]
    pub example_sqft: Vec<u32>,
}

fn default_example_sqft() -> Vec<u32> {
    vec![1200, 1500, 2000, 2500]
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            rates: Rates {
                standard: RateBand {
                    low: 0.15,
                    high: 0.22,
                },
                deep: RateBand {
                    low: 0.25,
                    high: 0.35,
                },
            },
            hourly_rate: 55.0,
            add_on_minimum_hours: 1.0,
            condition_bias: ConditionBias {
                normal: 0.35,
                messy: 0.65,
                heavy: 0.9,
            },
            pet_bias_delta: PetBiasDelta {
                none: 0.0,
                some: 0.08,
                many: 0.15,
            },
            rounding_unit: 5,
            example_sqft: default_example_sqft(),
        }
    }
}

impl PricingPolicy {
    pub fn rate(&self, clean_type: CleanType) -> &RateBand {
        match clean_type {
            CleanType::Standard => &self.rates.standard,
            CleanType::Deep => &self.rates.deep,
        }
    }

    pub fn condition_bias(&self, condition: Condition) -> f64 {
        match condition {
            Condition::Normal => self.condition_bias.normal,
            Condition::Messy => self.condition_bias.messy,
            Condition::Heavy => self.condition_bias.heavy,
        }
    }

    pub fn pet_bias_delta(&self, pets: PetLoad) -> f64 {
        match pets {
            PetLoad::None => self.pet_bias_delta.none,
            PetLoad::Some => self.pet_bias_delta.some,
            PetLoad::Many => self.pet_bias_delta.many,
        }
    }

    /// Reject a policy the calculator could not price sensibly with.
    /// Reports the first offending field.
    pub fn validate(&self) -> Result<()> {
        for clean_type in CleanType::ALL {
            let band = self.rate(clean_type);
            let field = format!("rates.{}", clean_type);
            ensure_positive(&format!("{}.low", field), band.low)?;
            ensure_positive(&format!("{}.high", field), band.high)?;
            if band.low >= band.high {
                return Err(QuoteError::Config(format!(
                    "{}: low ({}) must be below high ({})",
                    field, band.low, band.high
                )));
            }
        }

        ensure_positive("hourly_rate", self.hourly_rate)?;
        ensure_positive("add_on_minimum_hours", self.add_on_minimum_hours)?;

        for condition in Condition::ALL {
            ensure_unit_interval(
                &format!("condition_bias.{}", condition),
                self.condition_bias(condition),
            )?;
        }
        for pets in PetLoad::ALL {
            ensure_unit_interval(
                &format!("pet_bias_delta.{}", pets),
                self.pet_bias_delta(pets),
            )?;
        }

        if self.rounding_unit == 0 {
            return Err(QuoteError::Config(
                "rounding_unit: must be a positive whole dollar amount".into(),
            ));
        }

        if let Some(bad) = self.example_sqft.iter().find(|&&sqft| sqft == 0) {
            return Err(QuoteError::Config(format!(
                "example_sqft: sizes must be positive, got {}",
                bad
            )));
        }

        Ok(())
    }

    /// Parse and validate a policy from JSON text
    pub fn from_json_str(content: &str) -> Result<Self> {
        let policy: PricingPolicy = serde_json::from_str(content)
            .map_err(|e| QuoteError::Parse(format!("Invalid policy format: {}", e)))?;
        policy.validate()?;
        Ok(policy)
    }

    /// Load and validate a policy file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            QuoteError::Config(format!("Cannot read policy {}: {}", path.display(), e))
        })?;
        let policy = Self::from_json_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded pricing policy");
        Ok(policy)
    }

    /// Resolve the policy to use: explicit path, then the user's config file,
    /// then the built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_path() {
            Ok(path) if path.exists() => Self::load(&path),
            Ok(_) => {
                tracing::debug!("no policy file found, using built-in defaults");
                Ok(Self::default())
            }
            Err(e) => {
                tracing::warn!("{}; using built-in defaults", e);
                Ok(Self::default())
            }
        }
    }

    /// Write the policy as pretty JSON, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| QuoteError::Parse(format!("Serialization failed: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the default policy path (~/.cleanquote/policy.json)
    pub fn default_path() -> Result<PathBuf> {
        let home = directories::UserDirs::new()
            .ok_or_else(|| QuoteError::Config("Failed to get home directory".into()))?
            .home_dir()
            .to_path_buf();
        Ok(home.join(".cleanquote").join(POLICY_FILE_NAME))
    }
}

fn ensure_positive(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(QuoteError::Config(format!(
            "{}: must be a positive number, got {}",
            field, value
        )));
    }
    Ok(())
}

fn ensure_unit_interval(field: &str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(QuoteError::Config(format!(
            "{}: must be between 0 and 1, got {}",
            field, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn assert_config_error(policy: &PricingPolicy, needle: &str) {
        match policy.validate() {
            Err(QuoteError::Config(msg)) => {
                assert!(msg.contains(needle), "expected '{}' in '{}'", needle, msg)
            }
            other => panic!("expected config error, got {:?}", other),
        }
    }

    // ========== validate tests ==========

    #[test]
    fn test_default_policy_is_valid() {
        assert!(PricingPolicy::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_inverted_rate_band() {
        let mut policy = PricingPolicy::default();
        policy.rates.deep = RateBand {
            low: 0.35,
            high: 0.25,
        };
        assert_config_error(&policy, "rates.deep");
    }

    #[test]
    fn test_rejects_equal_rate_bounds() {
        let mut policy = PricingPolicy::default();
        policy.rates.standard.high = policy.rates.standard.low;
        assert_config_error(&policy, "rates.standard");
    }

    #[test]
    fn test_rejects_negative_rate() {
        let mut policy = PricingPolicy::default();
        policy.rates.standard.low = -0.1;
        assert_config_error(&policy, "rates.standard.low");
    }

    #[test]
    fn test_rejects_nan_rate() {
        let mut policy = PricingPolicy::default();
        policy.rates.deep.high = f64::NAN;
        assert_config_error(&policy, "rates.deep.high");
    }

    #[test]
    fn test_rejects_non_positive_hourly_rate() {
        let mut policy = PricingPolicy::default();
        policy.hourly_rate = 0.0;
        assert_config_error(&policy, "hourly_rate");
    }

    #[test]
    fn test_rejects_zero_rounding_unit() {
        let mut policy = PricingPolicy::default();
        policy.rounding_unit = 0;
        assert_config_error(&policy, "rounding_unit");
    }

    #[test]
    fn test_rejects_bias_outside_unit_interval() {
        let mut policy = PricingPolicy::default();
        policy.condition_bias.heavy = 1.2;
        assert_config_error(&policy, "condition_bias.heavy");

        let mut policy = PricingPolicy::default();
        policy.pet_bias_delta.some = -0.05;
        assert_config_error(&policy, "pet_bias_delta.some");
    }

    #[test]
    fn test_rejects_zero_example_sqft() {
        let mut policy = PricingPolicy::default();
        policy.example_sqft.push(0);
        assert_config_error(&policy, "example_sqft");
    }

    // ========== lookup tests ==========

    #[test]
    fn test_lookups_follow_enum() {
        let policy = PricingPolicy::default();
        assert!((policy.rate(CleanType::Deep).low - 0.25).abs() < 1e-12);
        assert!((policy.condition_bias(Condition::Messy) - 0.65).abs() < 1e-12);
        assert!((policy.pet_bias_delta(PetLoad::Many) - 0.15).abs() < 1e-12);
    }

    // ========== load/save tests ==========

    #[test]
    fn test_from_json_str_defaults_example_sqft() {
        let json = r#"{
            "rates": {
                "standard": { "low": 0.1, "high": 0.2 },
                "deep": { "low": 0.3, "high": 0.4 }
            },
            "hourly_rate": 60,
            "add_on_minimum_hours": 1,
            "condition_bias": { "normal": 0.3, "messy": 0.6, "heavy": 0.9 },
            "pet_bias_delta": { "none": 0, "some": 0.1, "many": 0.2 },
            "rounding_unit": 10
        }"#;

        let policy = PricingPolicy::from_json_str(json).unwrap();

        assert_eq!(policy.rounding_unit, 10);
        assert!((policy.hourly_rate - 60.0).abs() < f64::EPSILON);
        assert_eq!(policy.example_sqft, vec![1200, 1500, 2000, 2500]);
    }

    #[test]
    fn test_from_json_str_rejects_unknown_field() {
        let mut value = serde_json::to_value(PricingPolicy::default()).unwrap();
        value["surge_multiplier"] = serde_json::json!(2.0);

        let err = PricingPolicy::from_json_str(&value.to_string()).unwrap_err();
        assert!(matches!(err, QuoteError::Parse(_)));
    }

    #[test]
    fn test_from_json_str_validates() {
        let mut policy = PricingPolicy::default();
        policy.hourly_rate = -5.0;
        let json = serde_json::to_string(&policy).unwrap();

        let err = PricingPolicy::from_json_str(&json).unwrap_err();
        assert!(matches!(err, QuoteError::Config(_)));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("policy.json");

        let mut policy = PricingPolicy::default();
        policy.hourly_rate = 65.0;
        policy.save(&path).unwrap();

        let loaded = PricingPolicy::load(&path).unwrap();
        assert_eq!(loaded, policy);
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        let err = PricingPolicy::load(&path).unwrap_err();
        assert!(matches!(err, QuoteError::Config(_)));
    }

    #[test]
    fn test_load_corrupt_file_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("policy.json");
        fs::write(&path, "not valid json{{{").unwrap();

        let err = PricingPolicy::load(&path).unwrap_err();
        assert!(matches!(err, QuoteError::Parse(_)));
    }

    #[test]
    fn test_resolve_prefers_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("policy.json");
        let mut policy = PricingPolicy::default();
        policy.rounding_unit = 25;
        policy.save(&path).unwrap();

        let resolved = PricingPolicy::resolve(Some(path.as_path())).unwrap();
        assert_eq!(resolved.rounding_unit, 25);
    }
}
