//! Provider interface for location defaults

use std::collections::HashMap;

use super::LocationFinancialDefaults;
use crate::error::ProviderError;

/// Source of location financial defaults
///
/// Implementations return fully resolved data; the simulator never sees
/// in-flight or partial provider results.
pub trait DefaultsProvider {
    fn location_defaults(&self, cbsa: &str) -> Result<LocationFinancialDefaults, ProviderError>;
}

/// In-memory provider keyed by CBSA code
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    locations: HashMap<String, LocationFinancialDefaults>,
}

impl StaticProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a location
    pub fn insert(&mut self, defaults: LocationFinancialDefaults) {
        self.locations.insert(defaults.cbsa.clone(), defaults);
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

impl FromIterator<LocationFinancialDefaults> for StaticProvider {
    fn from_iter<I: IntoIterator<Item = LocationFinancialDefaults>>(iter: I) -> Self {
        let mut provider = Self::new();
        for defaults in iter {
            provider.insert(defaults);
        }
        provider
    }
}

impl DefaultsProvider for StaticProvider {
    fn location_defaults(&self, cbsa: &str) -> Result<LocationFinancialDefaults, ProviderError> {
        self.locations
            .get(cbsa)
            .cloned()
            .ok_or_else(|| ProviderError::UnknownLocation(cbsa.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::data::sample_defaults;

    #[test]
    fn test_static_provider_lookup() {
        let provider: StaticProvider = std::iter::once(sample_defaults()).collect();

        let defaults = provider.location_defaults("31080").unwrap();
        assert_eq!(defaults.name, "Los Angeles-Long Beach-Anaheim, CA");

        let missing = provider.location_defaults("99999");
        assert!(matches!(missing, Err(ProviderError::UnknownLocation(c)) if c == "99999"));
    }
}
