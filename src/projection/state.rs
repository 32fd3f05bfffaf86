//! Running state of the owner and renter trajectories

use crate::location::LocationFinancialDefaults;

/// State carried from one month to the next during a projection
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Last completed projection month (0 before the first step)
    pub month: u32,

    /// Outstanding mortgage principal
    pub loan_balance: f64,

    /// Market value of the home
    pub home_value: f64,

    /// Renter's invested savings
    pub portfolio: f64,

    /// First month the renter portfolio caught up to owner equity
    pub break_even_month: Option<u32>,
}

impl ProjectionState {
    /// Initial state at purchase: full loan outstanding, nothing invested yet
    pub fn from_defaults(defaults: &LocationFinancialDefaults) -> Self {
        Self {
            month: 0,
            loan_balance: defaults.loan_amount,
            home_value: defaults.property_value,
            portfolio: 0.0,
            break_even_month: None,
        }
    }

    /// Owner equity, floored at zero when the loan exceeds the home value
    pub fn equity(&self) -> f64 {
        (self.home_value - self.loan_balance).max(0.0)
    }

    /// Record break-even at the current month if it has not happened yet
    pub fn check_break_even(&mut self) {
        if self.break_even_month.is_none() && self.portfolio >= self.equity() {
            self.break_even_month = Some(self.month);
        }
    }
}
