//! Assemble location defaults from saved ACS and HMDA survey pulls
//!
//! The ACS side consumes a Census API response body (an array of rows with the
//! header first). The HMDA side consumes one summary row per CBSA with median
//! property value, median loan amount and average interest rate. Neither side
//! performs network retrieval; the responses are handed in already resolved.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::{DefaultsProvider, LocationFinancialDefaults};
use crate::error::ProviderError;

/// ACS column and the divisor that brings it to the unit the model expects
/// (income stays annual, everything else becomes monthly dollars).
pub const ACS_METRICS: [(AcsMetric, &str, f64); 8] = [
    (AcsMetric::MedianIncome, "B19013_001E", 1.0),
    (AcsMetric::MedianRent, "B25064_001E", 1.0),
    (AcsMetric::RealEstateTaxes, "B25103_001E", 12.0),
    (AcsMetric::HomeInsurance, "B25141_001E", 12.0),
    (AcsMetric::Electricity, "B25132_001E", 1.0),
    (AcsMetric::Gas, "B25133_001E", 1.0),
    (AcsMetric::WaterSewer, "B25134_001E", 12.0),
    (AcsMetric::OtherFuel, "B25135_001E", 12.0),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcsMetric {
    MedianIncome,
    MedianRent,
    RealEstateTaxes,
    HomeInsurance,
    Electricity,
    Gas,
    WaterSewer,
    OtherFuel,
}

/// Housing metrics for one CBSA, already converted to model units
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AcsMetrics {
    pub name: Option<String>,
    pub median_income: f64,
    pub median_rent: f64,
    pub real_estate_taxes: f64,
    pub home_insurance: f64,
    pub electricity: f64,
    pub gas: f64,
    pub water_sewer: f64,
    pub other_fuel: f64,
}

impl AcsMetrics {
    /// Parse a Census API response body
    pub fn from_response(cbsa: &str, body: &str) -> Result<Self, ProviderError> {
        let rows: Vec<Vec<Option<String>>> = serde_json::from_str(body)?;
        Self::from_rows(cbsa, &rows)
    }

    /// Build metrics from header + value rows
    pub fn from_rows(cbsa: &str, rows: &[Vec<Option<String>>]) -> Result<Self, ProviderError> {
        if rows.len() < 2 {
            return Err(ProviderError::NoRows(cbsa.to_string()));
        }

        let row: HashMap<&str, Option<&str>> = rows[0]
            .iter()
            .zip(rows[1].iter())
            .filter_map(|(header, value)| {
                header.as_deref().map(|h| (h, value.as_deref()))
            })
            .collect();

        let mut metrics = AcsMetrics {
            name: row.get("NAME").copied().flatten().map(str::to_string),
            ..Default::default()
        };

        for (metric, column, divisor) in ACS_METRICS {
            let raw = parse_acs_value(column, row.get(column).copied().flatten())?;
            let value = match raw {
                Some(v) => v / divisor,
                None => {
                    log::warn!("ACS column {} missing for CBSA {}, defaulting to 0", column, cbsa);
                    0.0
                }
            };
            metrics.set(metric, value);
        }

        Ok(metrics)
    }

    fn set(&mut self, metric: AcsMetric, value: f64) {
        match metric {
            AcsMetric::MedianIncome => self.median_income = value,
            AcsMetric::MedianRent => self.median_rent = value,
            AcsMetric::RealEstateTaxes => self.real_estate_taxes = value,
            AcsMetric::HomeInsurance => self.home_insurance = value,
            AcsMetric::Electricity => self.electricity = value,
            AcsMetric::Gas => self.gas = value,
            AcsMetric::WaterSewer => self.water_sewer = value,
            AcsMetric::OtherFuel => self.other_fuel = value,
        }
    }

    /// Monthly utilities: electricity + gas + water/sewer + other fuel
    pub fn monthly_utilities(&self) -> f64 {
        self.electricity + self.gas + self.water_sewer + self.other_fuel
    }
}

fn parse_acs_value(column: &str, value: Option<&str>) -> Result<Option<f64>, ProviderError> {
    match value {
        None | Some("") | Some("null") => Ok(None),
        Some(v) => v
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| ProviderError::InvalidValue {
                column: column.to_string(),
                value: v.to_string(),
            }),
    }
}

/// Median loan facts for one CBSA from HMDA filings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HmdaSummary {
    #[serde(default)]
    pub cbsa: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub property_value: Option<f64>,
    #[serde(default)]
    pub loan_amount: Option<f64>,
    #[serde(default)]
    pub interest_rate: Option<f64>,
}

impl HmdaSummary {
    pub fn from_json(body: &str) -> Result<Self, ProviderError> {
        Ok(serde_json::from_str(body)?)
    }
}

fn or_zero(value: Option<f64>, field: &str, cbsa: &str) -> f64 {
    value.unwrap_or_else(|| {
        log::warn!("HMDA {} missing for CBSA {}, defaulting to 0", field, cbsa);
        0.0
    })
}

/// Combine ACS and HMDA pulls into a single defaults record
///
/// Missing values are carried as 0.0 rather than rejected.
pub fn assemble_defaults(
    cbsa: &str,
    acs: &AcsMetrics,
    hmda: &HmdaSummary,
    loan_term_months: u32,
) -> LocationFinancialDefaults {
    let name = hmda
        .name
        .clone()
        .filter(|n| !n.is_empty())
        .or_else(|| acs.name.clone().filter(|n| !n.is_empty()))
        .unwrap_or_else(|| format!("CBSA {}", cbsa));

    LocationFinancialDefaults {
        cbsa: cbsa.to_string(),
        name,
        median_income: acs.median_income,
        median_rent: acs.median_rent,
        property_value: or_zero(hmda.property_value, "property_value", cbsa),
        loan_amount: or_zero(hmda.loan_amount, "loan_amount", cbsa),
        interest_rate: or_zero(hmda.interest_rate, "interest_rate", cbsa),
        loan_term_months,
        monthly_taxes: acs.real_estate_taxes,
        monthly_insurance: acs.home_insurance,
        monthly_utilities: acs.monthly_utilities(),
    }
}

/// Provider reading a saved ACS response and HMDA summary from disk
#[derive(Debug, Clone)]
pub struct SurveyResponseProvider {
    acs_response: PathBuf,
    hmda_summary: PathBuf,
    loan_term_months: u32,
}

impl SurveyResponseProvider {
    pub fn new(acs_response: impl AsRef<Path>, hmda_summary: impl AsRef<Path>, loan_term_months: u32) -> Self {
        Self {
            acs_response: acs_response.as_ref().to_path_buf(),
            hmda_summary: hmda_summary.as_ref().to_path_buf(),
            loan_term_months,
        }
    }
}

impl DefaultsProvider for SurveyResponseProvider {
    fn location_defaults(&self, cbsa: &str) -> Result<LocationFinancialDefaults, ProviderError> {
        let acs = AcsMetrics::from_response(cbsa, &fs::read_to_string(&self.acs_response)?)?;
        let hmda = HmdaSummary::from_json(&fs::read_to_string(&self.hmda_summary)?)?;

        if !hmda.cbsa.is_empty() && hmda.cbsa != cbsa {
            return Err(ProviderError::UnknownLocation(cbsa.to_string()));
        }

        Ok(assemble_defaults(cbsa, &acs, &hmda, self.loan_term_months))
    }
}
