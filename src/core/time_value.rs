//! Stand-alone time-value calculators.
//!
//! Amounts, rates and durations are floored at zero; durations are rounded to whole
//! years and compounded monthly with the effective monthly rate.

use serde::{Deserialize, Serialize};

use super::engine::DEGENERATE_RATE_GAP;
use super::math::effective_monthly_rate;

#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum TimeValueRequest {
    #[serde(rename_all = "camelCase")]
    FutureValueLumpSum {
        present_value: f64,
        annual_rate_pct: f64,
        years: f64,
    },
    #[serde(rename_all = "camelCase")]
    PresentValueLumpSum {
        future_value: f64,
        annual_rate_pct: f64,
        years: f64,
    },
    #[serde(rename_all = "camelCase")]
    FutureValueGrowingPayments {
        payment: f64,
        annual_rate_pct: f64,
        growth_pct: f64,
        years: f64,
    },
    #[serde(rename_all = "camelCase")]
    PaymentForTarget {
        future_value: f64,
        annual_rate_pct: f64,
        growth_pct: f64,
        years: f64,
    },
    #[serde(rename_all = "camelCase")]
    PresentValueGrowingPayments {
        payment: f64,
        annual_rate_pct: f64,
        growth_pct: f64,
        years: f64,
    },
}

impl TimeValueRequest {
    pub fn kind(&self) -> &'static str {
        match self {
            TimeValueRequest::FutureValueLumpSum { .. } => "future-value-lump-sum",
            TimeValueRequest::PresentValueLumpSum { .. } => "present-value-lump-sum",
            TimeValueRequest::FutureValueGrowingPayments { .. } => "future-value-growing-payments",
            TimeValueRequest::PaymentForTarget { .. } => "payment-for-target",
            TimeValueRequest::PresentValueGrowingPayments { .. } => {
                "present-value-growing-payments"
            }
        }
    }

    pub fn evaluate(&self) -> f64 {
        match *self {
            TimeValueRequest::FutureValueLumpSum {
                present_value,
                annual_rate_pct,
                years,
            } => future_value_lump_sum(present_value, annual_rate_pct, years),
            TimeValueRequest::PresentValueLumpSum {
                future_value,
                annual_rate_pct,
                years,
            } => present_value_lump_sum(future_value, annual_rate_pct, years),
            TimeValueRequest::FutureValueGrowingPayments {
                payment,
                annual_rate_pct,
                growth_pct,
                years,
            } => future_value_growing_payments(payment, annual_rate_pct, growth_pct, years),
            TimeValueRequest::PaymentForTarget {
                future_value,
                annual_rate_pct,
                growth_pct,
                years,
            } => payment_for_target(future_value, annual_rate_pct, growth_pct, years),
            TimeValueRequest::PresentValueGrowingPayments {
                payment,
                annual_rate_pct,
                growth_pct,
                years,
            } => present_value_growing_payments(payment, annual_rate_pct, growth_pct, years),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundInterestResult {
    pub final_amount: f64,
    pub total_contributions: f64,
    pub total_interest: f64,
}

fn months(years: f64) -> u32 {
    if years.is_finite() {
        (years.round().max(0.0) as u32).saturating_mul(12)
    } else {
        0
    }
}

fn monthly_rate(annual_pct: f64) -> f64 {
    effective_monthly_rate(annual_pct.max(0.0))
}

pub fn future_value_lump_sum(present_value: f64, annual_rate_pct: f64, years: f64) -> f64 {
    let n = months(years);
    present_value.max(0.0) * (1.0 + monthly_rate(annual_rate_pct)).powf(f64::from(n))
}

/// With no time to discount the target is returned as entered.
pub fn present_value_lump_sum(future_value: f64, annual_rate_pct: f64, years: f64) -> f64 {
    let n = months(years);
    if n == 0 {
        return future_value;
    }
    future_value.max(0.0) / (1.0 + monthly_rate(annual_rate_pct)).powf(f64::from(n))
}

/// Accumulated value of `n` monthly payments of one unit growing at `g_m`,
/// compounding at `i_m`.
fn growing_payments_factor(i_m: f64, g_m: f64, n: u32) -> f64 {
    let months = f64::from(n);
    if (i_m - g_m).abs() < DEGENERATE_RATE_GAP {
        months * (1.0 + i_m).powf(months - 1.0)
    } else {
        ((1.0 + i_m).powf(months) - (1.0 + g_m).powf(months)) / (i_m - g_m)
    }
}

pub fn future_value_growing_payments(
    payment: f64,
    annual_rate_pct: f64,
    growth_pct: f64,
    years: f64,
) -> f64 {
    let n = months(years);
    if n == 0 {
        return 0.0;
    }
    let factor =
        growing_payments_factor(monthly_rate(annual_rate_pct), monthly_rate(growth_pct), n);
    payment.max(0.0) * factor
}

/// First monthly payment that, growing at `growth_pct`, accumulates to `future_value`.
pub fn payment_for_target(
    future_value: f64,
    annual_rate_pct: f64,
    growth_pct: f64,
    years: f64,
) -> f64 {
    let n = months(years);
    if n == 0 {
        return 0.0;
    }
    let factor =
        growing_payments_factor(monthly_rate(annual_rate_pct), monthly_rate(growth_pct), n);
    future_value.max(0.0) / factor
}

pub fn present_value_growing_payments(
    payment: f64,
    annual_rate_pct: f64,
    growth_pct: f64,
    years: f64,
) -> f64 {
    let n = months(years);
    if n == 0 {
        return 0.0;
    }
    let i_m = monthly_rate(annual_rate_pct);
    let accumulated =
        payment.max(0.0) * growing_payments_factor(i_m, monthly_rate(growth_pct), n);
    accumulated / (1.0 + i_m).powf(f64::from(n))
}

/// Savings plan with a nominal monthly rate (annual / 12), contributions at month end.
pub fn compound_interest(
    initial_amount: f64,
    monthly_contribution: f64,
    annual_rate_pct: f64,
    years: u32,
) -> CompoundInterestResult {
    let rate = annual_rate_pct / 100.0 / 12.0;
    let n = f64::from(years.saturating_mul(12));

    let grown_initial = initial_amount * (1.0 + rate).powf(n);
    let grown_contributions = if rate > 0.0 {
        monthly_contribution * (((1.0 + rate).powf(n) - 1.0) / rate)
    } else {
        monthly_contribution * n
    };

    let final_amount = grown_initial + grown_contributions;
    let total_contributions = initial_amount + monthly_contribution * n;
    CompoundInterestResult {
        final_amount,
        total_contributions,
        total_interest: final_amount - total_contributions,
    }
}
