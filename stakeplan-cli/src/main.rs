//! Stakeplan CLI — Martingale staking schedule planner.
//!
//! Commands:
//! - `plan` — generate a schedule from flags or a TOML config and print it,
//!   optionally saving the artifact set (manifest.json, schedule.csv)
//! - `check` — validate a TOML config and report the resolved parameters

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use stakeplan_core::generate_plan;

mod config;
mod export;
mod table;

use config::{PlanConfig, PlanSection};
use export::{save_artifacts, PlanArtifact};

#[derive(Parser)]
#[command(
    name = "stakeplan",
    about = "Stakeplan CLI — Martingale staking schedule planner"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a staking schedule and print it as a table.
    Plan {
        /// Number of trades in the schedule.
        #[arg(long)]
        trades: Option<u32>,

        /// Profit per successful trade, in percent (2.0 = 2%).
        #[arg(long)]
        profit_pct: Option<f64>,

        /// Desired net profit per successful trade, in currency units.
        #[arg(long)]
        target: Option<f64>,

        /// Display currency code.
        #[arg(long, default_value = "EUR")]
        currency: String,

        /// Path to a TOML config file (mutually exclusive with the
        /// parameter flags above).
        #[arg(long)]
        config: Option<PathBuf>,

        /// Save manifest.json and schedule.csv under this directory.
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Validate a TOML config file and print the resolved parameters.
    Check {
        /// Path to the TOML config file.
        config: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Plan {
            trades,
            profit_pct,
            target,
            currency,
            config,
            output_dir,
        } => run_plan(trades, profit_pct, target, currency, config, output_dir),
        Commands::Check { config } => run_check(&config),
    }
}

fn run_plan(
    trades: Option<u32>,
    profit_pct: Option<f64>,
    target: Option<f64>,
    currency: String,
    config_path: Option<PathBuf>,
    output_dir: Option<PathBuf>,
) -> Result<()> {
    let config = build_config(trades, profit_pct, target, currency, config_path)?;
    let params = config.params()?;
    let plan = generate_plan(&params)?;

    print!("{}", table::render_table(&plan, &config.plan.currency));
    println!();
    print!("{}", table::render_summary(&plan, &config.plan.currency));

    if let Some(dir) = output_dir {
        let artifact = PlanArtifact::from_plan(&config, &plan);
        let run_dir = save_artifacts(&artifact, &dir)?;
        println!();
        println!("Artifacts saved to: {}", run_dir.display());
    }

    Ok(())
}

/// Resolve the `plan` command inputs into a single config.
///
/// `--config` and the direct parameter flags are mutually exclusive; the
/// direct flags must come as a complete set.
fn build_config(
    trades: Option<u32>,
    profit_pct: Option<f64>,
    target: Option<f64>,
    currency: String,
    config_path: Option<PathBuf>,
) -> Result<PlanConfig> {
    if let Some(path) = config_path {
        if trades.is_some() || profit_pct.is_some() || target.is_some() {
            bail!("--config and the direct parameter flags are mutually exclusive");
        }
        return Ok(PlanConfig::from_file(&path)?);
    }

    let (Some(num_trades), Some(profit_pct), Some(desired_profit)) = (trades, profit_pct, target)
    else {
        bail!("either --config or all of --trades, --profit-pct, --target are required");
    };

    Ok(PlanConfig {
        plan: PlanSection {
            num_trades,
            profit_pct,
            desired_profit,
            currency,
        },
    })
}

fn run_check(path: &Path) -> Result<()> {
    let config = PlanConfig::from_file(path)?;
    let params = config.params()?;

    println!("Config OK: {}", path.display());
    println!("Plan id:       {}", config.plan_id());
    println!("Trades:        {}", params.num_trades);
    println!("Profit:        {:.2}% per successful trade", params.profit_pct);
    println!(
        "Target profit: {:.2} {}",
        params.desired_profit, config.plan.currency
    );

    Ok(())
}
