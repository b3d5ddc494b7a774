//! Display helpers for rendering estimates

use crate::types::AddOn;
use std::collections::BTreeSet;

/// Format a dollar amount.
///
/// Whole amounts get thousands separators and no cents; anything else
/// keeps two decimals.
///
/// # Examples
/// ```
/// use cleanquote::services::format::format_dollars;
///
/// assert_eq!(format_dollars(1234.0), "$1,234");
/// assert_eq!(format_dollars(137.5), "$137.50");
/// ```
pub fn format_dollars(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();

    if abs.fract() == 0.0 {
        format!("{}${}", sign, group_thousands(&format!("{:.0}", abs)))
    } else {
        let fixed = format!("{:.2}", abs);
        let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        format!("{}${}.{}", sign, group_thousands(whole), cents)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Square footage with thousands separators ("1,200 sq ft")
pub fn format_sqft(sqft: u32) -> String {
    format!("{} sq ft", group_thousands(&sqft.to_string()))
}

/// Whole hours print bare ("1"), fractional with one decimal ("2.5")
pub fn format_hours(hours: f64) -> String {
    if hours.fract() == 0.0 {
        format!("{:.0}", hours)
    } else {
        format!("{:.1}", hours)
    }
}

/// Comma-separated add-on labels, or a placeholder when nothing is selected
pub fn add_on_summary(add_ons: &BTreeSet<AddOn>) -> String {
    if add_ons.is_empty() {
        return "No add-ons selected".to_string();
    }
    add_ons
        .iter()
        .map(|a| a.label())
        .collect::<Vec<_>>()
        .join(", ")
}
