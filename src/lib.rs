//! Rent vs. Own - month-by-month wealth projection for U.S. metro areas
//!
//! This library provides:
//! - Location financial defaults (income, rent, loan terms, recurring costs) per CBSA
//! - Providers for those defaults (CSV files, saved ACS/HMDA survey pulls, in-memory)
//! - Mortgage amortization and rate conversion math
//! - The rent-vs-own projection with break-even detection
//! - A scenario runner for sensitivity sweeps over one location

pub mod error;
pub mod location;
pub mod assumptions;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use error::{ProviderError, ScenarioError};
pub use location::{DefaultsProvider, LocationFinancialDefaults};
pub use assumptions::ScenarioAssumptions;
pub use projection::{compare_scenarios, BetterOption, ComparisonResult, MonthlySnapshot};
pub use scenario::ScenarioRunner;
