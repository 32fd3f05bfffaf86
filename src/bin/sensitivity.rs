//! Appreciation-rate sensitivity sweep for one location
//!
//! Usage: cargo run --bin sensitivity -- 31080 --defaults locations.csv --rates 0,0.02,0.04

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

use rent_vs_own::location::CsvDefaultsProvider;
use rent_vs_own::{ScenarioAssumptions, ScenarioRunner};

#[derive(Parser, Debug)]
#[command(name = "sensitivity", about = "Sweep home appreciation rates for one CBSA")]
struct Args {
    /// CBSA code
    cbsa: String,

    /// CSV file of location defaults
    #[arg(long, env = "RENT_VS_OWN_DEFAULTS")]
    defaults: PathBuf,

    /// Comma-separated annual appreciation rates
    #[arg(long, value_delimiter = ',', default_values_t = [0.0, 0.01, 0.02, 0.03, 0.04, 0.05, 0.06])]
    rates: Vec<f64>,

    #[arg(long, default_value_t = 0.05)]
    investment_return: f64,

    #[arg(long, default_value_t = 0.05)]
    savings_rate: f64,

    #[arg(long, default_value_t = 30)]
    horizon_years: u32,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let provider = CsvDefaultsProvider::from_path(&args.defaults)
        .with_context(|| format!("Failed to load location defaults from {}", args.defaults.display()))?;
    let runner = ScenarioRunner::from_provider(&provider, &args.cbsa)?;

    let base = ScenarioAssumptions::new(args.horizon_years, 0.03, args.investment_return, args.savings_rate)
        .context("Invalid scenario assumptions")?;
    let scenarios = ScenarioRunner::appreciation_sweep(&base, &args.rates);

    let start = Instant::now();
    let results = runner.run_scenarios(&scenarios)?;
    let elapsed = start.elapsed();

    let defaults = runner.defaults();
    println!("{} (CBSA {}), {} year horizon", defaults.name, defaults.cbsa, args.horizon_years);
    println!("{:>12} {:>16} {:>16} {:>12} {:>10}",
        "Apprec", "Owner Equity", "Renter Port", "Break-even", "Better");
    println!("{}", "-".repeat(70));

    for result in &results {
        let break_even = result
            .break_even_month
            .map(|m| m.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("{:>11.2}% {:>16.0} {:>16.0} {:>12} {:>10}",
            result.assumptions.appreciation_rate() * 100.0,
            result.owner_equity,
            result.renter_portfolio,
            break_even,
            result.better_option().as_str(),
        );
    }

    println!("\n{} scenarios in {:?}", results.len(), elapsed);
    Ok(())
}
