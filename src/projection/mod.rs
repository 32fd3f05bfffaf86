//! Monthly amortization and wealth projection for rent vs. own

mod state;
mod engine;
mod timeline;
pub mod rates;
pub mod amortization;

pub use state::ProjectionState;
pub use engine::{compare_scenarios, ScenarioEngine};
pub use timeline::{BetterOption, ComparisonResult, ComparisonSummary, MonthlySnapshot};
pub use rates::{annual_to_monthly_growth, annual_to_monthly_rate};
pub use amortization::{amortize_month, monthly_mortgage_payment, AmortizationStep};
