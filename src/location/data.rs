//! Location financial defaults for a single CBSA

use serde::{Deserialize, Serialize};

/// Default mortgage term (30-year fixed)
pub const DEFAULT_LOAN_TERM_MONTHS: u32 = 360;

fn default_loan_term_months() -> u32 {
    DEFAULT_LOAN_TERM_MONTHS
}

/// CBSA-level financial facts used as the base case for a comparison
///
/// Income is annual; rent and the recurring owner costs are monthly dollars.
/// `interest_rate` is an annual percentage (6.25 means 6.25%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationFinancialDefaults {
    pub cbsa: String,
    pub name: String,

    /// Median household income (annual)
    pub median_income: f64,

    /// Median gross rent (monthly)
    pub median_rent: f64,

    pub property_value: f64,
    pub loan_amount: f64,

    /// Annual mortgage rate as a percentage
    pub interest_rate: f64,

    #[serde(default = "default_loan_term_months")]
    pub loan_term_months: u32,

    #[serde(default)]
    pub monthly_taxes: f64,

    #[serde(default)]
    pub monthly_insurance: f64,

    #[serde(default)]
    pub monthly_utilities: f64,
}

impl LocationFinancialDefaults {
    /// Cash put down at purchase
    pub fn down_payment(&self) -> f64 {
        (self.property_value - self.loan_amount).max(0.0)
    }

    pub fn loan_to_value(&self) -> f64 {
        if self.property_value == 0.0 {
            0.0
        } else {
            self.loan_amount / self.property_value
        }
    }

    /// Monthly owner costs outside principal and interest
    pub fn owner_non_pi_costs(&self) -> f64 {
        self.monthly_taxes + self.monthly_insurance + self.monthly_utilities
    }
}

#[cfg(test)]
pub(crate) fn sample_defaults() -> LocationFinancialDefaults {
    LocationFinancialDefaults {
        cbsa: "31080".to_string(),
        name: "Los Angeles-Long Beach-Anaheim, CA".to_string(),
        median_income: 90_000.0,
        median_rent: 1_900.0,
        property_value: 375_000.0,
        loan_amount: 300_000.0,
        interest_rate: 6.0,
        loan_term_months: DEFAULT_LOAN_TERM_MONTHS,
        monthly_taxes: 350.0,
        monthly_insurance: 120.0,
        monthly_utilities: 230.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_values() {
        let defaults = sample_defaults();

        assert!((defaults.down_payment() - 75_000.0).abs() < 1e-9);
        assert!((defaults.loan_to_value() - 0.8).abs() < 1e-12);
        assert!((defaults.owner_non_pi_costs() - 700.0).abs() < 1e-9);
    }

    #[test]
    fn test_down_payment_floored_at_zero() {
        let defaults = LocationFinancialDefaults {
            loan_amount: 400_000.0,
            ..sample_defaults()
        };
        assert_eq!(defaults.down_payment(), 0.0);
    }

    #[test]
    fn test_loan_to_value_zero_property() {
        let defaults = LocationFinancialDefaults {
            property_value: 0.0,
            ..sample_defaults()
        };
        assert_eq!(defaults.loan_to_value(), 0.0);
    }

    #[test]
    fn test_deserialize_applies_field_defaults() {
        let json = r#"{
            "cbsa": "12420",
            "name": "Austin-Round Rock-San Marcos, TX",
            "median_income": 97000,
            "median_rent": 1600,
            "property_value": 450000,
            "loan_amount": 360000,
            "interest_rate": 6.5
        }"#;
        let defaults: LocationFinancialDefaults = serde_json::from_str(json).unwrap();

        assert_eq!(defaults.loan_term_months, 360);
        assert_eq!(defaults.owner_non_pi_costs(), 0.0);
    }
}
