//! User-configurable scenario assumptions for the projection

use serde::Serialize;

use crate::error::ScenarioError;

pub const DEFAULT_HORIZON_YEARS: u32 = 30;
pub const DEFAULT_APPRECIATION_RATE: f64 = 0.03;
pub const DEFAULT_INVESTMENT_RETURN: f64 = 0.05;
pub const DEFAULT_SAVINGS_RATE: f64 = 0.05;

/// Projection knobs chosen by the user
///
/// Rates are annual fractions (0.03 for 3%). Fields are only reachable through
/// [`ScenarioAssumptions::new`], so a constructed value always satisfies the
/// horizon and savings-rate invariants.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioAssumptions {
    horizon_years: u32,
    appreciation_rate: f64,
    investment_return: f64,
    savings_rate_of_income: f64,
}

impl ScenarioAssumptions {
    /// 30-year horizon, 3% appreciation, 5% investment return, 5% savings rate
    pub const DEFAULT: Self = Self {
        horizon_years: DEFAULT_HORIZON_YEARS,
        appreciation_rate: DEFAULT_APPRECIATION_RATE,
        investment_return: DEFAULT_INVESTMENT_RETURN,
        savings_rate_of_income: DEFAULT_SAVINGS_RATE,
    };

    pub fn new(
        horizon_years: u32,
        appreciation_rate: f64,
        investment_return: f64,
        savings_rate_of_income: f64,
    ) -> Result<Self, ScenarioError> {
        if horizon_years == 0 || horizon_years.checked_mul(12).is_none() {
            return Err(ScenarioError::InvalidHorizon);
        }
        if !(0.0..=1.0).contains(&savings_rate_of_income) {
            return Err(ScenarioError::SavingsRateOutOfRange(savings_rate_of_income));
        }

        Ok(Self {
            horizon_years,
            appreciation_rate,
            investment_return,
            savings_rate_of_income,
        })
    }

    /// Copy with a different appreciation rate (used for sensitivity sweeps)
    pub fn with_appreciation_rate(&self, appreciation_rate: f64) -> Self {
        Self {
            appreciation_rate,
            ..self.clone()
        }
    }

    /// Copy with a different investment return
    pub fn with_investment_return(&self, investment_return: f64) -> Self {
        Self {
            investment_return,
            ..self.clone()
        }
    }

    pub fn horizon_years(&self) -> u32 {
        self.horizon_years
    }

    /// Total projection months
    pub fn horizon_months(&self) -> u32 {
        self.horizon_years * 12
    }

    pub fn appreciation_rate(&self) -> f64 {
        self.appreciation_rate
    }

    pub fn investment_return(&self) -> f64 {
        self.investment_return
    }

    pub fn savings_rate_of_income(&self) -> f64 {
        self.savings_rate_of_income
    }
}

impl Default for ScenarioAssumptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}
