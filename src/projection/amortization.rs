//! Fixed-rate level-payment mortgage math

use super::rates::annual_to_monthly_rate;

/// Level monthly payment for a fixed-rate loan
///
/// Returns 0 when there is no principal or no term. A zero monthly rate falls
/// back to straight-line repayment.
pub fn monthly_mortgage_payment(principal: f64, annual_rate_pct: f64, term_months: u32) -> f64 {
    if principal <= 0.0 || term_months == 0 {
        return 0.0;
    }

    let monthly_rate = annual_to_monthly_rate(annual_rate_pct);
    if monthly_rate == 0.0 {
        return principal / term_months as f64;
    }

    let discount = (1.0 + monthly_rate).powf(-(term_months as f64));
    principal * monthly_rate / (1.0 - discount)
}

/// Interest and principal split for one month of a loan
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AmortizationStep {
    pub interest: f64,
    pub principal: f64,
    /// Balance after the principal is applied
    pub ending_balance: f64,
}

/// Apply one month of amortization to `balance`
///
/// No principal is paid once the balance is exhausted, when the payment is
/// zero, or after `term_months`. Principal never exceeds the outstanding
/// balance, so the ending balance is never negative.
pub fn amortize_month(
    balance: f64,
    payment: f64,
    monthly_rate: f64,
    month: u32,
    term_months: u32,
) -> AmortizationStep {
    let interest = if balance > 0.0 { balance * monthly_rate } else { 0.0 };

    if balance > 0.0 && payment > 0.0 && month <= term_months {
        let principal_portion = (payment - interest).max(0.0);
        let principal = principal_portion.min(balance);
        AmortizationStep {
            interest,
            principal,
            ending_balance: (balance - principal).max(0.0),
        }
    } else {
        AmortizationStep {
            interest,
            principal: 0.0,
            ending_balance: balance,
        }
    }
}
