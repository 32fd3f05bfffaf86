//! Location financial defaults and the providers that supply them

mod data;
mod provider;
pub mod loader;
pub mod survey;

pub use data::{LocationFinancialDefaults, DEFAULT_LOAN_TERM_MONTHS};
pub use provider::{DefaultsProvider, StaticProvider};
pub use loader::{load_locations, load_locations_from_reader, CsvDefaultsProvider};
pub use survey::{assemble_defaults, AcsMetrics, HmdaSummary, SurveyResponseProvider};

#[cfg(test)]
pub(crate) use data::sample_defaults;
