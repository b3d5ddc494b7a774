//! `cleanquote policy` subcommands

use clap::Subcommand;
use std::path::{Path, PathBuf};

use cleanquote::services::{format_dollars, format_hours, format_sqft, PricingPolicy};
use cleanquote::{CleanType, Condition, PetLoad, QuoteError, Result};

#[derive(Subcommand, Debug)]
pub enum PolicyCommand {
    /// Print the effective pricing policy
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the built-in policy to a file for editing
    Init {
        /// Destination (default: ~/.cleanquote/policy.json)
        #[arg(long, value_name = "PATH")]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl PolicyCommand {
    pub fn run(self, explicit: Option<&Path>) -> Result<()> {
        match self {
            Self::Show { json } => {
                let policy = PricingPolicy::resolve(explicit)?;
                if json {
                    let out = serde_json::to_string_pretty(&policy)
                        .map_err(|e| QuoteError::Parse(e.to_string()))?;
                    println!("{}", out);
                } else {
                    println!("{}", render_text(&policy));
                }
            }
            Self::Init { path, force } => {
                let target = match path {
                    Some(p) => p,
                    None => PricingPolicy::default_path()?,
                };
                write_default(&target, force)?;
                println!("Wrote default pricing policy to {}", target.display());
            }
        }
        Ok(())
    }
}

fn write_default(target: &Path, force: bool) -> Result<()> {
    if target.exists() && !force {
        return Err(QuoteError::Config(format!(
            "{} already exists (use --force to overwrite)",
            target.display()
        )));
    }
    PricingPolicy::default().save(target)?;
    tracing::info!(path = %target.display(), "wrote default pricing policy");
    Ok(())
}

fn render_text(policy: &PricingPolicy) -> String {
    let mut lines = vec!["Rates ($/sq ft)".to_string()];
    for clean_type in CleanType::ALL {
        let band = policy.rate(clean_type);
        lines.push(format!("  {:<9} {} - {}", clean_type, band.low, band.high));
    }

    lines.push(format!(
        "Add-ons: {}/hr, {} hr minimum",
        format_dollars(policy.hourly_rate),
        format_hours(policy.add_on_minimum_hours)
    ));

    let conditions: Vec<String> = Condition::ALL
        .iter()
        .map(|&c| format!("{} {}", c, policy.condition_bias(c)))
        .collect();
    lines.push(format!("Condition bias: {}", conditions.join(", ")));

    let pets: Vec<String> = PetLoad::ALL
        .iter()
        .map(|&p| format!("{} {}", p, policy.pet_bias_delta(p)))
        .collect();
    lines.push(format!("Pet bias delta: {}", pets.join(", ")));

    lines.push(format!(
        "Rounding: nearest {}",
        format_dollars(f64::from(policy.rounding_unit))
    ));

    let sizes: Vec<String> = policy.example_sqft.iter().map(|&s| format_sqft(s)).collect();
    lines.push(format!("Guide sizes: {}", sizes.join(", ")));

    lines.join("\n")
}
