//! Load location defaults from CSV
//!
//! Expected header (cost and term columns optional):
//! `cbsa,name,median_income,median_rent,property_value,loan_amount,interest_rate,loan_term_months,monthly_taxes,monthly_insurance,monthly_utilities`

use csv::Reader;
use std::path::Path;

use super::{DefaultsProvider, LocationFinancialDefaults, StaticProvider};
use crate::error::ProviderError;

/// Load all location rows from a CSV file
pub fn load_locations<P: AsRef<Path>>(path: P) -> Result<Vec<LocationFinancialDefaults>, ProviderError> {
    let mut reader = Reader::from_path(path)?;
    let mut locations = Vec::new();

    for result in reader.deserialize() {
        let row: LocationFinancialDefaults = result?;
        locations.push(row);
    }

    Ok(locations)
}

/// Load location rows from any reader (e.g., string buffer, network stream)
pub fn load_locations_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<LocationFinancialDefaults>, ProviderError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut locations = Vec::new();

    for result in csv_reader.deserialize() {
        let row: LocationFinancialDefaults = result?;
        locations.push(row);
    }

    Ok(locations)
}

/// Provider backed by a CSV file loaded once up front
#[derive(Debug, Clone)]
pub struct CsvDefaultsProvider {
    inner: StaticProvider,
}

impl CsvDefaultsProvider {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ProviderError> {
        let path = path.as_ref();
        let locations = load_locations(path)?;
        log::debug!("Loaded {} locations from {}", locations.len(), path.display());
        Ok(Self { inner: locations.into_iter().collect() })
    }

    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, ProviderError> {
        let locations = load_locations_from_reader(reader)?;
        Ok(Self { inner: locations.into_iter().collect() })
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl DefaultsProvider for CsvDefaultsProvider {
    fn location_defaults(&self, cbsa: &str) -> Result<LocationFinancialDefaults, ProviderError> {
        self.inner.location_defaults(cbsa)
    }
}
