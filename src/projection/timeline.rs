//! Comparison output structures

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::assumptions::ScenarioAssumptions;
use crate::location::LocationFinancialDefaults;

/// State of both scenarios at the end of one month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlySnapshot {
    /// Projection month (1-indexed)
    pub month: u32,
    pub home_value: f64,
    pub equity: f64,
    pub loan_balance: f64,
    pub renter_portfolio: f64,
}

/// Which scenario ends the horizon with more wealth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BetterOption {
    Owning,
    Renting,
    Tie,
}

impl BetterOption {
    /// Compare terminal owner equity against the renter portfolio
    pub fn from_terminal(owner_equity: f64, renter_portfolio: f64) -> Self {
        if owner_equity > renter_portfolio {
            BetterOption::Owning
        } else if renter_portfolio > owner_equity {
            BetterOption::Renting
        } else {
            BetterOption::Tie
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BetterOption::Owning => "owning",
            BetterOption::Renting => "renting",
            BetterOption::Tie => "tie",
        }
    }
}

impl fmt::Display for BetterOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one rent-vs-own comparison
///
/// Borrows the defaults and assumptions it was computed from.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonResult<'a> {
    pub defaults: &'a LocationFinancialDefaults,
    pub assumptions: &'a ScenarioAssumptions,

    /// Mortgage payment plus taxes, insurance and utilities
    pub owner_monthly_cost: f64,
    pub renter_monthly_cost: f64,

    /// Terminal values (copied from the last snapshot)
    pub owner_equity: f64,
    pub renter_portfolio: f64,

    pub break_even_month: Option<u32>,
    pub timeline: Vec<MonthlySnapshot>,
}

impl<'a> ComparisonResult<'a> {
    pub fn better_option(&self) -> BetterOption {
        BetterOption::from_terminal(self.owner_equity, self.renter_portfolio)
    }

    /// Break-even expressed in years
    pub fn break_even_years(&self) -> Option<f64> {
        self.break_even_month.map(|m| m as f64 / 12.0)
    }

    pub fn final_snapshot(&self) -> Option<&MonthlySnapshot> {
        self.timeline.last()
    }

    /// Headline figures without the timeline
    pub fn summary(&self) -> ComparisonSummary {
        ComparisonSummary {
            cbsa: self.defaults.cbsa.clone(),
            name: self.defaults.name.clone(),
            horizon_years: self.assumptions.horizon_years(),
            down_payment: self.defaults.down_payment(),
            loan_to_value: self.defaults.loan_to_value(),
            owner_monthly_cost: self.owner_monthly_cost,
            renter_monthly_cost: self.renter_monthly_cost,
            owner_equity: self.owner_equity,
            renter_portfolio: self.renter_portfolio,
            break_even_month: self.break_even_month,
            break_even_years: self.break_even_years(),
            better_option: self.better_option(),
        }
    }
}

/// Summary statistics for a comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub cbsa: String,
    pub name: String,
    pub horizon_years: u32,
    pub down_payment: f64,
    pub loan_to_value: f64,
    pub owner_monthly_cost: f64,
    pub renter_monthly_cost: f64,
    pub owner_equity: f64,
    pub renter_portfolio: f64,
    pub break_even_month: Option<u32>,
    pub break_even_years: Option<f64>,
    pub better_option: BetterOption,
}
