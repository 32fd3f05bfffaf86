//! Scenario runner for sensitivity sweeps over a single location
//!
//! Holds one location's defaults and runs any number of assumption sets
//! against them. Runs share no mutable state, so they are fanned out with rayon.

use rayon::prelude::*;

use crate::assumptions::ScenarioAssumptions;
use crate::error::{ProviderError, ScenarioError};
use crate::location::{DefaultsProvider, LocationFinancialDefaults};
use crate::projection::{compare_scenarios, ComparisonResult};

/// Runner bound to one location's defaults
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(defaults);
/// let base = ScenarioAssumptions::default();
/// let sweep = ScenarioRunner::appreciation_sweep(&base, &[0.0, 0.02, 0.04]);
/// let results = runner.run_scenarios(&sweep)?;
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    defaults: LocationFinancialDefaults,
}

impl ScenarioRunner {
    pub fn new(defaults: LocationFinancialDefaults) -> Self {
        Self { defaults }
    }

    /// Create runner by looking up a CBSA in a provider
    pub fn from_provider<P: DefaultsProvider + ?Sized>(provider: &P, cbsa: &str) -> Result<Self, ProviderError> {
        Ok(Self::new(provider.location_defaults(cbsa)?))
    }

    /// Run a single comparison
    pub fn run<'a>(&'a self, assumptions: &'a ScenarioAssumptions) -> Result<ComparisonResult<'a>, ScenarioError> {
        compare_scenarios(&self.defaults, Some(assumptions))
    }

    /// Run several assumption sets in parallel; results keep the input order
    ///
    /// Fails if any assumption set is rejected during setup.
    pub fn run_scenarios<'a>(
        &'a self,
        scenarios: &'a [ScenarioAssumptions],
    ) -> Result<Vec<ComparisonResult<'a>>, ScenarioError> {
        let results = scenarios
            .par_iter()
            .map(|assumptions| self.run(assumptions))
            .collect::<Result<Vec<_>, _>>()?;

        log::info!("Ran {} scenarios for CBSA {}", results.len(), self.defaults.cbsa);
        Ok(results)
    }

    /// Copies of `base` with each appreciation rate substituted
    pub fn appreciation_sweep(base: &ScenarioAssumptions, rates: &[f64]) -> Vec<ScenarioAssumptions> {
        rates.iter().map(|&rate| base.with_appreciation_rate(rate)).collect()
    }

    /// Copies of `base` with each investment return substituted
    pub fn investment_return_sweep(base: &ScenarioAssumptions, returns: &[f64]) -> Vec<ScenarioAssumptions> {
        returns.iter().map(|&r| base.with_investment_return(r)).collect()
    }

    pub fn defaults(&self) -> &LocationFinancialDefaults {
        &self.defaults
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::{sample_defaults, StaticProvider};

    #[test]
    fn test_scenario_runner_sweep() {
        let runner = ScenarioRunner::new(sample_defaults());
        let base = ScenarioAssumptions::default();
        let scenarios = ScenarioRunner::appreciation_sweep(&base, &[0.0, 0.03, 0.06]);

        let results = runner.run_scenarios(&scenarios).unwrap();
        assert_eq!(results.len(), 3);

        // Order preserved
        for (result, scenario) in results.iter().zip(&scenarios) {
            assert_eq!(result.assumptions, scenario);
        }

        // Higher appreciation should result in higher terminal equity
        assert!(results[2].owner_equity > results[1].owner_equity);
        assert!(results[1].owner_equity > results[0].owner_equity);

        // Renter side does not depend on appreciation
        assert_eq!(results[0].renter_portfolio, results[2].renter_portfolio);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let runner = ScenarioRunner::new(sample_defaults());
        let base = ScenarioAssumptions::default();
        let scenarios = ScenarioRunner::investment_return_sweep(&base, &[0.02, 0.05, 0.08, 0.11]);

        let parallel = runner.run_scenarios(&scenarios).unwrap();
        for (result, scenario) in parallel.iter().zip(&scenarios) {
            let sequential = runner.run(scenario).unwrap();
            assert_eq!(result.timeline, sequential.timeline);
        }
    }

    #[test]
    fn test_invalid_scenario_fails_batch() {
        let runner = ScenarioRunner::new(sample_defaults());
        let base = ScenarioAssumptions::default();
        let scenarios = ScenarioRunner::appreciation_sweep(&base, &[0.03, -1.0]);

        assert!(matches!(
            runner.run_scenarios(&scenarios),
            Err(ScenarioError::GrowthRateTooLow(_))
        ));
    }

    #[test]
    fn test_from_provider() {
        let provider: StaticProvider = std::iter::once(sample_defaults()).collect();
        let runner = ScenarioRunner::from_provider(&provider, "31080").unwrap();
        assert_eq!(runner.defaults().cbsa, "31080");

        assert!(ScenarioRunner::from_provider(&provider, "99999").is_err());
    }
}
