//! Rent vs. Own CLI
//!
//! Loads location defaults for a CBSA, runs the month-by-month projection and
//! prints the comparison.

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use rent_vs_own::location::{CsvDefaultsProvider, SurveyResponseProvider, DEFAULT_LOAN_TERM_MONTHS};
use rent_vs_own::{compare_scenarios, ComparisonResult, DefaultsProvider, ScenarioAssumptions};

/// Compare economic gains from renting versus owning.
#[derive(Parser, Debug)]
#[command(name = "rent-vs-own", version, about, long_about = None)]
struct Args {
    /// CBSA code, e.g., 31080 for Los Angeles
    cbsa: String,

    /// CSV file of location defaults (ignored when survey files are given)
    #[arg(long, env = "RENT_VS_OWN_DEFAULTS")]
    defaults: Option<PathBuf>,

    /// Saved Census ACS API response (JSON) for the CBSA
    #[arg(long, requires = "hmda_summary")]
    acs_response: Option<PathBuf>,

    /// Saved HMDA summary row (JSON) for the CBSA
    #[arg(long, requires = "acs_response")]
    hmda_summary: Option<PathBuf>,

    /// Mortgage term applied to survey-assembled defaults
    #[arg(long, default_value_t = DEFAULT_LOAN_TERM_MONTHS)]
    loan_term_months: u32,

    /// Annual home price appreciation (e.g., 0.03 for 3%)
    #[arg(long, default_value_t = 0.03)]
    appreciation_rate: f64,

    /// Annual investment return for renter savings
    #[arg(long, default_value_t = 0.05)]
    investment_return: f64,

    /// Share of income invested monthly by the renter
    #[arg(long, default_value_t = 0.05)]
    savings_rate: f64,

    /// Projection horizon in years
    #[arg(long, default_value_t = 30)]
    horizon_years: u32,

    /// Dump the monthly timeline as JSON
    #[arg(long)]
    show_timeline: bool,

    /// Write the monthly timeline to a CSV file
    #[arg(long)]
    timeline_csv: Option<PathBuf>,

    /// Print the summary as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let provider: Box<dyn DefaultsProvider> = match defaults_source(&args)? {
        DefaultsSource::Survey { acs, hmda } => {
            Box::new(SurveyResponseProvider::new(acs, hmda, args.loan_term_months))
        }
        DefaultsSource::Csv(path) => Box::new(
            CsvDefaultsProvider::from_path(path)
                .with_context(|| format!("Failed to load location defaults from {}", path.display()))?,
        ),
    };

    let defaults = provider
        .location_defaults(&args.cbsa)
        .with_context(|| format!("Failed to obtain defaults for CBSA {}", args.cbsa))?;

    let assumptions = ScenarioAssumptions::new(
        args.horizon_years,
        args.appreciation_rate,
        args.investment_return,
        args.savings_rate,
    )
    .context("Invalid scenario assumptions")?;

    let result = compare_scenarios(&defaults, Some(&assumptions)).context("Projection setup failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result.summary())?);
    } else {
        print_report(&result);
    }

    if args.show_timeline {
        println!("{}", serde_json::to_string_pretty(&result.timeline)?);
    }

    if let Some(path) = &args.timeline_csv {
        write_timeline_csv(path, &result)
            .with_context(|| format!("Failed to write timeline to {}", path.display()))?;
        println!("\nTimeline written to: {}", path.display());
    }

    Ok(())
}

/// Where location defaults come from
#[derive(Debug, PartialEq)]
enum DefaultsSource<'a> {
    Survey { acs: &'a Path, hmda: &'a Path },
    Csv(&'a Path),
}

/// Survey files given on the command line take precedence over a CSV path,
/// which may only be coming from `RENT_VS_OWN_DEFAULTS`.
fn defaults_source(args: &Args) -> Result<DefaultsSource<'_>> {
    match (&args.acs_response, &args.hmda_summary, &args.defaults) {
        (Some(acs), Some(hmda), _) => Ok(DefaultsSource::Survey { acs, hmda }),
        (_, _, Some(path)) => Ok(DefaultsSource::Csv(path)),
        _ => bail!("Provide --defaults <csv> or both --acs-response and --hmda-summary"),
    }
}

fn print_report(result: &ComparisonResult) {
    let defaults = result.defaults;

    println!("Location: {} (CBSA {})", defaults.name, defaults.cbsa);
    println!("Median income: ${}", dollars(defaults.median_income));
    println!("Median rent: ${}", dollars(defaults.median_rent));
    println!("Median property value: ${}", dollars(defaults.property_value));
    println!("Median loan amount: ${}", dollars(defaults.loan_amount));
    println!("Mortgage rate: {:.2}%", defaults.interest_rate);
    println!();
    println!("Monthly homeowner cost (PITI+utilities): ${}", dollars(result.owner_monthly_cost));
    println!("Monthly rent: ${}", dollars(result.renter_monthly_cost));
    println!();
    println!("Owner ending equity: ${}", dollars(result.owner_equity));
    println!("Renter ending portfolio: ${}", dollars(result.renter_portfolio));
    println!("Better outcome: {}", result.better_option());
    if let (Some(month), Some(years)) = (result.break_even_month, result.break_even_years()) {
        println!("Break-even month: {} (~{:.1} years)", month, years);
    }
}

fn write_timeline_csv(path: &Path, result: &ComparisonResult) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for snap in &result.timeline {
        writer.serialize(snap)?;
    }
    writer.flush()?;
    Ok(())
}

/// Whole dollars with thousands separators
fn dollars(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if rounded < 0.0 {
        format!("-{}", out)
    } else {
        out
    }
}
