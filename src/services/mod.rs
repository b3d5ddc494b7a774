//! Pricing policy, estimate calculation and rendering helpers

pub mod calculator;
pub mod format;
pub mod guide;
pub mod policy;

pub use calculator::EstimateCalculator;
pub use format::{add_on_summary, format_dollars, format_hours, format_sqft};
pub use guide::{GuideRow, PriceGuide};
pub use policy::{PricingPolicy, RateBand};
