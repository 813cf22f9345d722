use std::f64::consts::SQRT_2;

/// Risk units that map onto one unit (100%) of annualised volatility.
pub const RISK_UNITS_PER_VOLATILITY: f64 = 27.0;

/// Upper bound for the volatility derived from risk units.
pub const MAX_VOLATILITY: f64 = 0.6;

const ERF_P: f64 = 0.3275911;
const ERF_A1: f64 = 0.254829592;
const ERF_A2: f64 = -0.284496736;
const ERF_A3: f64 = 1.421413741;
const ERF_A4: f64 = -1.453152027;
const ERF_A5: f64 = 1.061405429;

/// Effective monthly rate equivalent to an annual percentage.
pub fn effective_monthly_rate(annual_pct: f64) -> f64 {
    (1.0 + annual_pct / 100.0).powf(1.0 / 12.0) - 1.0
}

/// Abramowitz & Stegun 7.1.26 (max abs error about 1.5e-7).
pub fn erf(x: f64) -> f64 {
    let sign = if x >= 0.0 { 1.0 } else { -1.0 };
    let x = x.abs();
    let t = 1.0 / (1.0 + ERF_P * x);
    let poly = ((((ERF_A5 * t + ERF_A4) * t + ERF_A3) * t + ERF_A2) * t + ERF_A1) * t;
    sign * (1.0 - poly * (-x * x).exp())
}

/// The normal CDF approximation used for probability estimates. Built on [`erf`],
/// so it is not exact.
pub fn cumulative_normal(z: f64) -> f64 {
    0.5 * (1.0 + erf(z / SQRT_2))
}

/// Annualised standard deviation implied by a risk-unit score.
pub fn volatility_from_risk_units(risk_units: f64) -> f64 {
    (risk_units.max(0.0) / RISK_UNITS_PER_VOLATILITY).min(MAX_VOLATILITY)
}
