//! `cleanquote guide` subcommand

use clap::Args;

use cleanquote::services::{format_dollars, format_sqft, GuideRow, PriceGuide};
use cleanquote::{CleanType, EstimateCalculator, QuoteError, Result};

/// Show base ranges at typical home sizes
#[derive(Args, Debug)]
pub struct GuideArgs {
    /// Only show one clean type
    #[arg(long)]
    pub clean_type: Option<CleanType>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl GuideArgs {
    pub fn run(self, calculator: &EstimateCalculator) -> Result<()> {
        let rows = match self.clean_type {
            Some(clean_type) => PriceGuide::rows(calculator, clean_type),
            None => PriceGuide::all(calculator),
        };

        if self.json {
            let out = serde_json::to_string_pretty(&rows)
                .map_err(|e| QuoteError::Parse(e.to_string()))?;
            println!("{}", out);
        } else {
            println!("{}", render_text(&rows));
        }
        Ok(())
    }
}

fn render_text(rows: &[GuideRow]) -> String {
    let mut lines = Vec::new();
    let mut current: Option<CleanType> = None;

    for row in rows {
        if current != Some(row.clean_type) {
            if current.is_some() {
                lines.push(String::new());
            }
            lines.push(match row.clean_type {
                CleanType::Standard => "Standard clean".to_string(),
                CleanType::Deep => "Deep clean".to_string(),
            });
            current = Some(row.clean_type);
        }
        lines.push(format!(
            "  {:>12}   {} - {}",
            format_sqft(row.sqft),
            format_dollars(row.low),
            format_dollars(row.high)
        ));
    }

    if lines.is_empty() {
        lines.push("No example sizes configured".to_string());
    }
    lines.join("\n")
}
