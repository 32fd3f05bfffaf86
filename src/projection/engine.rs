//! Monthly rent-vs-own projection engine

use crate::assumptions::ScenarioAssumptions;
use crate::error::ScenarioError;
use crate::location::LocationFinancialDefaults;
use super::amortization::{amortize_month, monthly_mortgage_payment};
use super::rates::{annual_to_monthly_growth, annual_to_monthly_rate};
use super::state::ProjectionState;
use super::timeline::{ComparisonResult, MonthlySnapshot};

/// Compare renting and owning for one location
///
/// Uses [`ScenarioAssumptions::DEFAULT`] when no assumptions are given.
pub fn compare_scenarios<'a>(
    defaults: &'a LocationFinancialDefaults,
    assumptions: Option<&'a ScenarioAssumptions>,
) -> Result<ComparisonResult<'a>, ScenarioError> {
    let assumptions = assumptions.unwrap_or(&ScenarioAssumptions::DEFAULT);
    Ok(ScenarioEngine::new(defaults, assumptions)?.project())
}

/// Per-run constants derived once from the inputs
#[derive(Debug, Clone)]
pub struct ScenarioEngine<'a> {
    defaults: &'a LocationFinancialDefaults,
    assumptions: &'a ScenarioAssumptions,

    pub mortgage_payment: f64,
    pub mortgage_rate_monthly: f64,
    pub appreciation_monthly: f64,
    pub investment_monthly: f64,

    /// Renter's monthly contribution to the portfolio
    pub monthly_investment: f64,
}

impl<'a> ScenarioEngine<'a> {
    /// Run all setup conversions; fails before any month is simulated
    pub fn new(
        defaults: &'a LocationFinancialDefaults,
        assumptions: &'a ScenarioAssumptions,
    ) -> Result<Self, ScenarioError> {
        let mortgage_payment = monthly_mortgage_payment(
            defaults.loan_amount,
            defaults.interest_rate,
            defaults.loan_term_months,
        );
        let mortgage_rate_monthly = annual_to_monthly_rate(defaults.interest_rate);
        let appreciation_monthly = annual_to_monthly_growth(assumptions.appreciation_rate())?;
        let investment_monthly = annual_to_monthly_growth(assumptions.investment_return())?;
        let monthly_investment = defaults.median_income / 12.0 * assumptions.savings_rate_of_income();

        log::debug!(
            "CBSA {}: payment={:.2} mortgage_rate={:.6} appreciation={:.6} investment={:.6} contribution={:.2}",
            defaults.cbsa,
            mortgage_payment,
            mortgage_rate_monthly,
            appreciation_monthly,
            investment_monthly,
            monthly_investment,
        );

        Ok(Self {
            defaults,
            assumptions,
            mortgage_payment,
            mortgage_rate_monthly,
            appreciation_monthly,
            investment_monthly,
            monthly_investment,
        })
    }

    /// Mortgage payment plus taxes, insurance and utilities
    pub fn owner_monthly_cost(&self) -> f64 {
        self.mortgage_payment + self.defaults.owner_non_pi_costs()
    }

    /// Rent is held flat for the whole horizon
    pub fn renter_monthly_cost(&self) -> f64 {
        self.defaults.median_rent
    }

    /// Run the month-by-month projection over the full horizon
    pub fn project(&self) -> ComparisonResult<'a> {
        let months = self.assumptions.horizon_months();
        let mut state = ProjectionState::from_defaults(self.defaults);
        let mut timeline = Vec::with_capacity(months as usize);

        for month in 1..=months {
            state.month = month;
            timeline.push(self.step(&mut state));
        }

        let (owner_equity, renter_portfolio) = timeline
            .last()
            .map(|snap: &MonthlySnapshot| (snap.equity, snap.renter_portfolio))
            .unwrap_or((0.0, 0.0));

        log::info!(
            "Projected {} months for CBSA {}: equity={:.0} portfolio={:.0} break_even={:?}",
            months,
            self.defaults.cbsa,
            owner_equity,
            renter_portfolio,
            state.break_even_month,
        );

        ComparisonResult {
            defaults: self.defaults,
            assumptions: self.assumptions,
            owner_monthly_cost: self.owner_monthly_cost(),
            renter_monthly_cost: self.renter_monthly_cost(),
            owner_equity,
            renter_portfolio,
            break_even_month: state.break_even_month,
            timeline,
        }
    }

    /// Advance both trajectories by one month
    fn step(&self, state: &mut ProjectionState) -> MonthlySnapshot {
        // Pay down the loan
        let amortization = amortize_month(
            state.loan_balance,
            self.mortgage_payment,
            self.mortgage_rate_monthly,
            state.month,
            self.defaults.loan_term_months,
        );
        state.loan_balance = amortization.ending_balance;

        // Appreciate the home
        state.home_value *= 1.0 + self.appreciation_monthly;
        let equity = state.equity();

        // Contribution lands after this month's growth
        state.portfolio = state.portfolio * (1.0 + self.investment_monthly) + self.monthly_investment;

        state.check_break_even();

        MonthlySnapshot {
            month: state.month,
            home_value: state.home_value,
            equity,
            loan_balance: state.loan_balance,
            renter_portfolio: state.portfolio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::sample_defaults;
    use approx::assert_abs_diff_eq;

    fn assumptions(horizon_years: u32) -> ScenarioAssumptions {
        ScenarioAssumptions::new(horizon_years, 0.03, 0.05, 0.05).unwrap()
    }

    #[test]
    fn test_timeline_length_and_months() {
        let defaults = sample_defaults();
        for years in [1, 5, 30, 40] {
            let assumptions = assumptions(years);
            let result = compare_scenarios(&defaults, Some(&assumptions)).unwrap();

            assert_eq!(result.timeline.len(), (years * 12) as usize);
            for (i, snap) in result.timeline.iter().enumerate() {
                assert_eq!(snap.month, i as u32 + 1);
            }
        }
    }

    #[test]
    fn test_default_assumptions_used_when_omitted() {
        let defaults = sample_defaults();
        let result = compare_scenarios(&defaults, None).unwrap();

        assert_eq!(result.timeline.len(), 360);
        assert_eq!(result.assumptions, &ScenarioAssumptions::default());

        let explicit_assumptions = ScenarioAssumptions::default();
        let explicit = compare_scenarios(&defaults, Some(&explicit_assumptions)).unwrap();
        assert_eq!(result.timeline, explicit.timeline);
    }

    #[test]
    fn test_deterministic() {
        let defaults = sample_defaults();
        let assumptions = assumptions(30);

        let first = compare_scenarios(&defaults, Some(&assumptions)).unwrap();
        let second = compare_scenarios(&defaults, Some(&assumptions)).unwrap();

        assert_eq!(first.timeline, second.timeline);
        assert_eq!(first.break_even_month, second.break_even_month);
        assert_eq!(first.owner_equity.to_bits(), second.owner_equity.to_bits());
    }

    #[test]
    fn test_monthly_costs() {
        let defaults = sample_defaults();
        let assumptions = assumptions(30);
        let result = compare_scenarios(&defaults, Some(&assumptions)).unwrap();

        assert_abs_diff_eq!(result.owner_monthly_cost, 1798.65 + 700.0, epsilon = 0.01);
        assert_eq!(result.renter_monthly_cost, 1_900.0);
    }

    #[test]
    fn test_first_month_values() {
        let defaults = sample_defaults();
        let assumptions = assumptions(1);
        let result = compare_scenarios(&defaults, Some(&assumptions)).unwrap();
        let first = &result.timeline[0];

        let payment = monthly_mortgage_payment(300_000.0, 6.0, 360);
        let expected_balance = 300_000.0 - (payment - 1_500.0);
        let expected_home = 375_000.0 * 1.03_f64.powf(1.0 / 12.0);

        assert_abs_diff_eq!(first.loan_balance, expected_balance, epsilon = 1e-6);
        assert_abs_diff_eq!(first.home_value, expected_home, epsilon = 1e-6);
        assert_abs_diff_eq!(first.equity, expected_home - expected_balance, epsilon = 1e-6);
        // No growth on the first contribution: 90_000 / 12 * 0.05
        assert_abs_diff_eq!(first.renter_portfolio, 375.0, epsilon = 1e-9);
    }

    #[test]
    fn test_terminal_values_match_last_snapshot() {
        let defaults = sample_defaults();
        let assumptions = assumptions(30);
        let result = compare_scenarios(&defaults, Some(&assumptions)).unwrap();
        let last = result.final_snapshot().unwrap();

        assert_eq!(result.owner_equity, last.equity);
        assert_eq!(result.renter_portfolio, last.renter_portfolio);
    }

    #[test]
    fn test_balance_non_negative_and_retired_at_term() {
        let defaults = LocationFinancialDefaults {
            loan_term_months: 180,
            ..sample_defaults()
        };
        let assumptions = assumptions(30);
        let result = compare_scenarios(&defaults, Some(&assumptions)).unwrap();

        assert!(result.timeline.iter().all(|s| s.loan_balance >= 0.0));
        assert_abs_diff_eq!(result.timeline[179].loan_balance, 0.0, epsilon = 1e-4);

        // Once retired, equity is the full home value
        let last = result.final_snapshot().unwrap();
        assert_abs_diff_eq!(last.equity, last.home_value, epsilon = 1e-4);
    }

    #[test]
    fn test_equity_never_negative_when_underwater() {
        let defaults = LocationFinancialDefaults {
            property_value: 200_000.0,
            loan_amount: 300_000.0,
            ..sample_defaults()
        };
        let assumptions = ScenarioAssumptions::new(10, -0.05, 0.05, 0.05).unwrap();
        let result = compare_scenarios(&defaults, Some(&assumptions)).unwrap();

        assert_eq!(result.timeline[0].equity, 0.0);
        assert!(result.timeline.iter().all(|s| s.equity >= 0.0));
        // Portfolio is positive from month one, so renting breaks even immediately
        assert_eq!(result.break_even_month, Some(1));
    }

    #[test]
    fn test_zero_rate_amortization() {
        let defaults = LocationFinancialDefaults {
            interest_rate: 0.0,
            loan_amount: 360_000.0,
            property_value: 400_000.0,
            ..sample_defaults()
        };
        let assumptions = assumptions(31);
        let result = compare_scenarios(&defaults, Some(&assumptions)).unwrap();

        let mut prior = defaults.loan_amount;
        for snap in result.timeline.iter().take(359) {
            assert_abs_diff_eq!(prior - snap.loan_balance, 1_000.0, epsilon = 1e-6);
            prior = snap.loan_balance;
        }
        assert_abs_diff_eq!(result.timeline[359].loan_balance, 0.0, epsilon = 1e-6);
        assert!(result.timeline[360..].iter().all(|s| s.loan_balance == result.timeline[359].loan_balance));
    }

    #[test]
    fn test_break_even_is_first_crossing() {
        let defaults = LocationFinancialDefaults {
            median_income: 250_000.0,
            ..sample_defaults()
        };
        let assumptions = ScenarioAssumptions::new(30, 0.0, 0.08, 0.3).unwrap();
        let result = compare_scenarios(&defaults, Some(&assumptions)).unwrap();

        let month = result.break_even_month.expect("renter should catch up");
        let idx = (month - 1) as usize;
        assert!(result.timeline[idx].renter_portfolio >= result.timeline[idx].equity);
        assert!(result.timeline[..idx].iter().all(|s| s.renter_portfolio < s.equity));
    }

    #[test]
    fn test_break_even_absent_when_never_crossed() {
        let defaults = LocationFinancialDefaults {
            median_income: 0.0,
            ..sample_defaults()
        };
        let assumptions = assumptions(30);
        let result = compare_scenarios(&defaults, Some(&assumptions)).unwrap();

        assert_eq!(result.break_even_month, None);
        assert!(result.timeline.iter().all(|s| s.renter_portfolio < s.equity));
        assert_eq!(result.renter_portfolio, 0.0);
        assert_eq!(result.better_option().as_str(), "owning");
    }

    #[test]
    fn test_no_loan_keeps_balance_zero() {
        let defaults = LocationFinancialDefaults {
            loan_amount: 0.0,
            ..sample_defaults()
        };
        let assumptions = assumptions(2);
        let engine = ScenarioEngine::new(&defaults, &assumptions).unwrap();
        assert_eq!(engine.mortgage_payment, 0.0);
        assert_abs_diff_eq!(engine.owner_monthly_cost(), 700.0, epsilon = 1e-9);

        let result = engine.project();
        assert!(result.timeline.iter().all(|s| s.loan_balance == 0.0));
    }

    #[test]
    fn test_invalid_growth_rate_fails_setup() {
        let defaults = sample_defaults();
        let bad_appreciation = ScenarioAssumptions::new(30, -1.0, 0.05, 0.05).unwrap();
        assert_eq!(
            compare_scenarios(&defaults, Some(&bad_appreciation)).unwrap_err(),
            ScenarioError::GrowthRateTooLow(-1.0)
        );

        let bad_return = ScenarioAssumptions::new(30, 0.03, -2.0, 0.05).unwrap();
        assert!(ScenarioEngine::new(&defaults, &bad_return).is_err());
    }
}
