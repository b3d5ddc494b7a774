mod estimate;
mod guide;
mod policy;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use cleanquote::logging::init_logger;
use cleanquote::{EstimateCalculator, PricingPolicy};

use estimate::EstimateArgs;
use guide::GuideArgs;
use policy::PolicyCommand;

/// Instant price estimates for residential cleaning
#[derive(Parser)]
#[command(name = "cleanquote")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Pricing policy file (default: ~/.cleanquote/policy.json, else built-in)
    #[arg(long, global = true, value_name = "PATH")]
    policy: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price one home
    Estimate(EstimateArgs),

    /// Show base ranges at typical home sizes
    Guide(GuideArgs),

    /// Inspect or create the pricing policy file
    Policy {
        #[command(subcommand)]
        command: PolicyCommand,
    },
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        init_logger(self.verbose);

        match self.command {
            Commands::Estimate(args) => {
                let calculator = load_calculator(self.policy.as_deref())?;
                args.run(&calculator)?;
            }
            Commands::Guide(args) => {
                let calculator = load_calculator(self.policy.as_deref())?;
                args.run(&calculator)?;
            }
            Commands::Policy { command } => command.run(self.policy.as_deref())?,
        }
        Ok(())
    }
}

fn load_calculator(explicit: Option<&Path>) -> cleanquote::Result<EstimateCalculator> {
    let policy = PricingPolicy::resolve(explicit)?;
    EstimateCalculator::new(policy)
}
