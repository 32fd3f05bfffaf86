//! Annual to monthly rate conversions

use crate::error::ScenarioError;

/// Convert an annual percentage (6.25 for 6.25%) to a monthly fractional rate
///
/// Non-positive inputs return 0.
pub fn annual_to_monthly_rate(annual_rate_pct: f64) -> f64 {
    if annual_rate_pct <= 0.0 {
        return 0.0;
    }
    annual_rate_pct / 100.0 / 12.0
}

/// Convert an annual fractional growth rate to the equivalent compounded monthly rate
///
/// monthly = (1 + annual)^(1/12) - 1
pub fn annual_to_monthly_growth(annual_rate: f64) -> Result<f64, ScenarioError> {
    if annual_rate <= -1.0 {
        return Err(ScenarioError::GrowthRateTooLow(annual_rate));
    }
    Ok((1.0 + annual_rate).powf(1.0 / 12.0) - 1.0)
}
