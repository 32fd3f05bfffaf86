//! Error types for scenario construction and location data loading

use thiserror::Error;

/// Invalid scenario input, raised before any simulation work happens
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScenarioError {
    #[error("horizon_years must be positive and its month count must fit in u32")]
    InvalidHorizon,

    #[error("savings_rate_of_income must be between 0 and 1, got {0}")]
    SavingsRateOutOfRange(f64),

    #[error("annual rate must be greater than -100%, got {0}")]
    GrowthRateTooLow(f64),
}

/// Failure to obtain location defaults from a provider
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("I/O error reading location data: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("ACS query returned no rows for CBSA {0}")]
    NoRows(String),

    #[error("could not convert ACS value '{value}' in column {column} to a number")]
    InvalidValue { column: String, value: String },

    #[error("no location data for CBSA {0}")]
    UnknownLocation(String),
}
