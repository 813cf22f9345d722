use tracing::debug;

use super::error::{ValidationError, ValidationErrors};
use super::math::{cumulative_normal, effective_monthly_rate, volatility_from_risk_units};
use super::types::{
    AdversePolicy, AssetClass, Inputs, PortfolioProfile, PresentValues, ProjectionResult,
    ScenarioIncome,
};

/// Below this gap between monthly discount and growth rates the growing-annuity
/// formula switches to its linear limit.
pub const DEGENERATE_RATE_GAP: f64 = 1e-15;

/// Volatilities below this are treated as no distribution at all.
const MIN_VOLATILITY: f64 = 1e-12;

const MIN_HORIZON_YEARS: f64 = 1e-9;

/// Highest accepted age. Bounds every horizon so compounding stays finite for
/// ordinary rates.
pub const MAX_AGE: u32 = 150;

/// Checked horizons of a profile that passed validation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Horizon {
    pub working_years: u32,
    pub retirement_years: u32,
}

/// One weighted entry of the portfolio: a balance (thousands) with its return drivers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Position {
    pub balance_k: f64,
    pub risk_units: f64,
    pub risk_premium_pct: f64,
}

impl From<&AssetClass> for Position {
    fn from(asset: &AssetClass) -> Self {
        Self {
            balance_k: asset.balance_k,
            risk_units: asset.risk_units,
            risk_premium_pct: asset.risk_premium_pct,
        }
    }
}

pub fn run_projection(inputs: &Inputs) -> Result<ProjectionResult, ValidationErrors> {
    let horizon = validate(inputs).inspect_err(|errors| {
        debug!(count = errors.len(), "projection rejected: {errors}");
    })?;

    let pv = present_values(inputs, horizon);
    let positions = portfolio_positions(inputs, pv);
    let portfolio = aggregate_portfolio(&positions);

    let safe_rate = inputs.safe_rate_pct / 100.0;
    let expected_return = safe_rate + portfolio.weighted_risk_premium;
    let volatility = volatility_from_risk_units(portfolio.weighted_risk_units);
    let expenses = inputs.current_expenses();
    let tax = inputs.tax_rate_pct / 100.0;

    let expected = project_scenario(
        portfolio.total_wealth,
        expected_return,
        Some(safe_rate),
        horizon,
        tax,
        expenses,
    );

    let (adverse, adverse_probability) = match inputs.adverse {
        AdversePolicy::FixedZ { z_score } => (
            project_scenario(portfolio.total_wealth, 0.0, None, horizon, tax, expenses),
            cumulative_normal(z_score),
        ),
        AdversePolicy::DerivedVolatility {
            threshold_return_pct,
        } => {
            let threshold = threshold_return_pct / 100.0;
            (
                project_scenario(
                    portfolio.total_wealth,
                    threshold,
                    Some(safe_rate),
                    horizon,
                    tax,
                    expenses,
                ),
                shortfall_probability(
                    expected_return,
                    volatility,
                    threshold,
                    f64::from(horizon.working_years),
                ),
            )
        }
    };

    let result = ProjectionResult {
        policy: inputs.adverse.kind(),
        present_value_savings: pv.savings,
        present_value_pension: pv.pension,
        total_wealth: portfolio.total_wealth,
        weighted_risk_units: portfolio.weighted_risk_units,
        weighted_risk_premium_pct: portfolio.weighted_risk_premium * 100.0,
        expected_return_pct: expected_return * 100.0,
        volatility_pct: volatility * 100.0,
        expected_net_income: expected.net_monthly,
        expected_coverage_pct: expected.coverage_pct,
        adverse_net_income: adverse.net_monthly,
        adverse_coverage_pct: adverse.coverage_pct,
        adverse_probability_pct: adverse_probability * 100.0,
    };
    ensure_finite(&result).inspect_err(|errors| {
        debug!("projection overflowed: {errors}");
    })?;
    Ok(result)
}

/// Rejects results whose compounding left the range of `f64`.
fn ensure_finite(result: &ProjectionResult) -> Result<(), ValidationErrors> {
    let optional = |value: Option<f64>| value.unwrap_or(0.0);
    let errors: Vec<_> = [
        ("present value of savings", result.present_value_savings),
        ("present value of pension", result.present_value_pension),
        ("total wealth", result.total_wealth),
        ("weighted risk units", result.weighted_risk_units),
        ("weighted risk premium", result.weighted_risk_premium_pct),
        ("expected return", result.expected_return_pct),
        ("volatility", result.volatility_pct),
        ("expected net income", result.expected_net_income),
        ("expected coverage", optional(result.expected_coverage_pct)),
        ("adverse net income", result.adverse_net_income),
        ("adverse coverage", optional(result.adverse_coverage_pct)),
        ("adverse probability", result.adverse_probability_pct),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_finite())
    .map(|(field, _)| ValidationError::Unrepresentable { field })
    .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

/// Collects every violated rule; `Ok` carries the checked horizons.
pub fn validate(inputs: &Inputs) -> Result<Horizon, ValidationErrors> {
    let mut errors = Vec::new();

    let working_years = inputs.working_years();
    let retirement_years = inputs.retirement_years();
    if working_years <= 0 {
        errors.push(ValidationError::WorkingHorizon { working_years });
    }
    if retirement_years <= 0 {
        errors.push(ValidationError::RetirementHorizon { retirement_years });
    }
    for (field, age) in [
        ("current age", inputs.current_age),
        ("retirement age", inputs.retirement_age),
        ("life expectancy", inputs.life_expectancy),
    ] {
        if age > MAX_AGE {
            errors.push(ValidationError::AgeLimit {
                field,
                age,
                max: MAX_AGE,
            });
        }
    }
    if !inputs.tax_rate_pct.is_finite() || !(0.0..=100.0).contains(&inputs.tax_rate_pct) {
        errors.push(ValidationError::TaxRate {
            tax_rate_pct: inputs.tax_rate_pct,
        });
    }
    if matches!(inputs.adverse, AdversePolicy::FixedZ { z_score } if !z_score.is_finite()) {
        errors.push(ValidationError::ZScore);
    }

    let h = &inputs.holdings;
    for (field, value) in [
        ("monthly income", inputs.monthly_income),
        ("savings rate", inputs.savings_rate_pct),
        ("monthly pension", inputs.monthly_pension),
        ("bank balance", h.bank.balance_k),
        ("pension assets balance", h.pension_assets.balance_k),
        ("securities balance", h.securities.balance_k),
        ("real estate balance", h.real_estate.balance_k),
        ("debt balance", h.debt.balance_k),
        ("bank risk units", h.bank.risk_units),
        ("pension assets risk units", h.pension_assets.risk_units),
        ("securities risk units", h.securities.risk_units),
        ("real estate risk units", h.real_estate.risk_units),
        ("debt risk units", h.debt.risk_units),
        ("bank risk premium", h.bank.risk_premium_pct),
        ("pension assets risk premium", h.pension_assets.risk_premium_pct),
        ("securities risk premium", h.securities.risk_premium_pct),
        ("real estate risk premium", h.real_estate.risk_premium_pct),
        ("debt risk premium", h.debt.risk_premium_pct),
        ("future savings risk units", inputs.future_savings.risk_units),
        ("future pension risk units", inputs.future_pension.risk_units),
    ] {
        if !value.is_finite() {
            errors.push(ValidationError::NonFinite { field });
        }
    }

    let mut rates = vec![
        ("safe rate", inputs.safe_rate_pct),
        ("income growth", inputs.income_growth_pct),
        (
            "savings discount rate",
            inputs.safe_rate_pct + inputs.future_savings.risk_premium_pct,
        ),
        (
            "pension discount rate",
            inputs.safe_rate_pct + inputs.future_pension.risk_premium_pct,
        ),
    ];
    if let AdversePolicy::DerivedVolatility {
        threshold_return_pct,
    } = inputs.adverse
    {
        rates.push(("adverse threshold return", threshold_return_pct));
    }
    for (field, rate_pct) in rates {
        if !rate_pct.is_finite() {
            errors.push(ValidationError::NonFinite { field });
        } else if rate_pct <= -100.0 {
            errors.push(ValidationError::RateFloor { field, rate_pct });
        }
    }

    if errors.is_empty() {
        Ok(Horizon {
            working_years: working_years as u32,
            retirement_years: retirement_years as u32,
        })
    } else {
        Err(ValidationErrors(errors))
    }
}

/// Present values (thousands) of future savings and of the statutory pension.
pub fn present_values(inputs: &Inputs, horizon: Horizon) -> PresentValues {
    let contribution = inputs.monthly_income * inputs.savings_rate_pct / 100.0;
    let savings = growing_annuity_present_value(
        contribution,
        effective_monthly_rate(inputs.safe_rate_pct + inputs.future_savings.risk_premium_pct),
        effective_monthly_rate(inputs.income_growth_pct),
        horizon.working_years.saturating_mul(12),
    ) / 1000.0;

    let pension = pension_present_value(
        inputs.monthly_pension,
        inputs.safe_rate_pct + inputs.future_pension.risk_premium_pct,
        horizon.working_years,
        horizon.retirement_years,
    ) / 1000.0;

    PresentValues { savings, pension }
}

/// Present value of a monthly payment growing at `monthly_growth`, discounted at
/// `monthly_discount` over `months`.
pub fn growing_annuity_present_value(
    contribution: f64,
    monthly_discount: f64,
    monthly_growth: f64,
    months: u32,
) -> f64 {
    if months == 0 {
        return 0.0;
    }
    let n = f64::from(months);
    if (monthly_discount - monthly_growth).abs() < DEGENERATE_RATE_GAP {
        return contribution * n;
    }
    let ratio = (1.0 + monthly_growth) / (1.0 + monthly_discount);
    contribution * (1.0 - ratio.powf(n)) / (monthly_discount - monthly_growth)
}

/// The whole retirement stream discounted as one lump sum, compounding by years.
pub fn pension_present_value(
    monthly_pension: f64,
    annual_discount_pct: f64,
    working_years: u32,
    retirement_years: u32,
) -> f64 {
    let nominal = monthly_pension * f64::from(retirement_years) * 12.0;
    nominal / (1.0 + annual_discount_pct / 100.0).powf(f64::from(working_years))
}

/// The seven weighted entries: five holdings plus both present values.
pub fn portfolio_positions(inputs: &Inputs, pv: PresentValues) -> [Position; 7] {
    let h = &inputs.holdings;
    [
        Position::from(&h.bank),
        Position::from(&h.pension_assets),
        Position::from(&h.securities),
        Position::from(&h.real_estate),
        Position::from(&h.debt),
        Position {
            balance_k: pv.savings,
            risk_units: inputs.future_savings.risk_units,
            risk_premium_pct: inputs.future_savings.risk_premium_pct,
        },
        Position {
            balance_k: pv.pension,
            risk_units: inputs.future_pension.risk_units,
            risk_premium_pct: inputs.future_pension.risk_premium_pct,
        },
    ]
}

/// Balance-weighted averages. Zero total wealth yields zero weights.
pub fn aggregate_portfolio(positions: &[Position]) -> PortfolioProfile {
    let total_wealth: f64 = positions.iter().map(|p| p.balance_k).sum();
    if total_wealth == 0.0 {
        return PortfolioProfile {
            total_wealth,
            weighted_risk_units: 0.0,
            weighted_risk_premium: 0.0,
        };
    }

    let risk_units: f64 = positions.iter().map(|p| p.balance_k * p.risk_units).sum();
    let risk_premium: f64 = positions
        .iter()
        .map(|p| p.balance_k * (p.risk_premium_pct / 100.0))
        .sum();

    PortfolioProfile {
        total_wealth,
        weighted_risk_units: risk_units / total_wealth,
        weighted_risk_premium: risk_premium / total_wealth,
    }
}

/// Grows `total_wealth` for the working years, spreads it flat over retirement and
/// taxes it. With `discount_rate` the income is expressed in today's money.
pub fn project_scenario(
    total_wealth: f64,
    annual_return: f64,
    discount_rate: Option<f64>,
    horizon: Horizon,
    tax: f64,
    current_expenses: f64,
) -> ScenarioIncome {
    let years = f64::from(horizon.working_years);
    let wealth_at_retirement = total_wealth * (1.0 + annual_return).powf(years);
    let gross_monthly =
        1000.0 * (wealth_at_retirement / (f64::from(horizon.retirement_years) * 12.0));
    let net_monthly = match discount_rate {
        Some(rate) => (1.0 - tax) * gross_monthly / (1.0 + rate).powf(years),
        None => (1.0 - tax) * gross_monthly,
    };

    ScenarioIncome {
        wealth_at_retirement,
        gross_monthly,
        net_monthly,
        coverage_pct: coverage_pct(net_monthly, current_expenses),
    }
}

/// `None` when there are no current expenses to cover.
pub fn coverage_pct(net_monthly: f64, current_expenses: f64) -> Option<f64> {
    if current_expenses == 0.0 {
        None
    } else {
        Some(net_monthly / current_expenses * 100.0)
    }
}

/// Probability (0..=1) that the annualised return over `years` falls below
/// `threshold`, treating it as normal with standard error `volatility / sqrt(years)`.
/// A heuristic illustration, not a pricing model.
pub fn shortfall_probability(
    expected_return: f64,
    volatility: f64,
    threshold: f64,
    years: f64,
) -> f64 {
    let t = years.max(MIN_HORIZON_YEARS);
    let sigma = volatility.max(0.0);
    if sigma < MIN_VOLATILITY {
        return if threshold >= expected_return { 1.0 } else { 0.0 };
    }
    let z = (threshold - expected_return) / (sigma / t.sqrt());
    cumulative_normal(z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Holdings, PolicyKind, StreamAssumption};
    use proptest::prelude::{prop_assert, prop_assert_eq, proptest};

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn assert_approx_tol(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() <= tol,
            "expected {expected}, got {actual}, tolerance {tol}"
        );
    }

    /// 45 → 67 → 90 household with bank, securities and real estate.
    fn sample_inputs() -> Inputs {
        Inputs {
            current_age: 45,
            retirement_age: 67,
            life_expectancy: 90,
            safe_rate_pct: 2.0,
            income_growth_pct: 2.0,
            monthly_income: 950.0,
            savings_rate_pct: 10.0,
            tax_rate_pct: 25.0,
            monthly_pension: 1262.0,
            holdings: Holdings {
                bank: AssetClass::new(50.0, 0.0, 0.0),
                pension_assets: AssetClass::new(0.0, 0.0, 0.0),
                securities: AssetClass::new(220.0, 3.5, 2.0),
                real_estate: AssetClass::new(300.0, 2.0, 2.0),
                debt: AssetClass::new(0.0, 0.0, 0.0),
            },
            future_savings: StreamAssumption::new(1.0, 0.0),
            future_pension: StreamAssumption::new(1.0, 1.0),
            adverse: AdversePolicy::FixedZ { z_score: -1.04 },
        }
    }

    fn derived(inputs: &Inputs, threshold_return_pct: f64) -> Inputs {
        let mut inputs = inputs.clone();
        inputs.adverse = AdversePolicy::DerivedVolatility {
            threshold_return_pct,
        };
        inputs
    }

    fn zero_wealth_inputs() -> Inputs {
        let mut inputs = sample_inputs();
        inputs.holdings = Holdings::default();
        inputs.savings_rate_pct = 0.0;
        inputs.monthly_pension = 0.0;
        inputs
    }

    #[test]
    fn scenario_example_present_values_and_total_wealth() {
        let result = run_projection(&sample_inputs()).expect("valid profile");

        // Savings and discount rates coincide: 950 * 10% * 264 months.
        assert_approx(result.present_value_savings, 25.08);
        let pension = 1262.0 * 276.0 / 1.03_f64.powi(22) / 1000.0;
        assert_approx(result.present_value_pension, pension);
        assert_approx(result.total_wealth, 570.0 + 25.08 + pension);
        assert!(result.total_wealth > 700.0 && result.total_wealth < 850.0);
        assert_eq!(result.policy, PolicyKind::FixedZ);
    }

    #[test]
    fn scenario_example_matches_hand_calculation() {
        let result = run_projection(&sample_inputs()).expect("valid profile");
        let pv_pension = 1262.0 * 276.0 / 1.03_f64.powi(22) / 1000.0;
        let total = 570.0 + 25.08 + pv_pension;

        let weighted_units = (220.0 * 3.5 + 300.0 * 2.0 + 25.08 + pv_pension) / total;
        let weighted_premium = (220.0 * 0.02 + 300.0 * 0.02 + pv_pension * 0.01) / total;
        assert_approx(result.weighted_risk_units, weighted_units);
        assert_approx(result.weighted_risk_premium_pct, weighted_premium * 100.0);

        let mu = 0.02 + weighted_premium;
        assert_approx(result.expected_return_pct, mu * 100.0);
        let gross = 1000.0 * total * (1.0 + mu).powi(22) / 276.0;
        let net = 0.75 * gross / 1.02_f64.powi(22);
        assert_approx(result.expected_net_income, net);
        assert_approx(
            result.expected_coverage_pct.expect("expenses are positive"),
            net / 855.0 * 100.0,
        );

        let adverse = 1000.0 * 0.75 * total / 276.0;
        assert_approx(result.adverse_net_income, adverse);
        assert_approx(
            result.adverse_coverage_pct.expect("expenses are positive"),
            adverse / 855.0 * 100.0,
        );
        assert_approx_tol(result.adverse_probability_pct, 14.92, 0.01);
    }

    #[test]
    fn scenario_example_is_consistent_across_policies() {
        let fixed = run_projection(&sample_inputs()).expect("valid profile");
        let shortfall = run_projection(&derived(&sample_inputs(), 0.0)).expect("valid profile");

        // Everything up to the expected scenario is policy independent.
        assert_eq!(fixed.present_value_savings, shortfall.present_value_savings);
        assert_eq!(fixed.present_value_pension, shortfall.present_value_pension);
        assert_eq!(fixed.total_wealth, shortfall.total_wealth);
        assert_eq!(fixed.weighted_risk_units, shortfall.weighted_risk_units);
        assert_eq!(fixed.expected_net_income, shortfall.expected_net_income);
        assert_eq!(fixed.expected_coverage_pct, shortfall.expected_coverage_pct);

        // A 0% threshold leaves wealth unchanged; the only difference is the
        // purchasing-power discount the derived policy applies.
        assert_approx(
            shortfall.adverse_net_income * 1.02_f64.powi(22),
            fixed.adverse_net_income,
        );
        assert!(shortfall.adverse_net_income < fixed.adverse_net_income);
        assert!(shortfall.adverse_probability_pct < fixed.adverse_probability_pct);
        assert_eq!(shortfall.policy, PolicyKind::DerivedVolatility);
    }

    #[test]
    fn derived_probability_matches_hand_calculation() {
        let result = run_projection(&derived(&sample_inputs(), 0.0)).expect("valid profile");
        let sigma = result.weighted_risk_units / 27.0;
        let mu = result.expected_return_pct / 100.0;
        let z = (0.0 - mu) / (sigma / 22.0_f64.sqrt());
        assert_approx(result.volatility_pct, sigma * 100.0);
        assert_approx(result.adverse_probability_pct, cumulative_normal(z) * 100.0);
        assert!(result.adverse_probability_pct > 0.5 && result.adverse_probability_pct < 3.0);
    }

    #[test]
    fn degenerate_rate_branch_is_continuous_with_general_formula() {
        let g = effective_monthly_rate(2.0);
        let limit = growing_annuity_present_value(100.0, g, g, 264);
        let near = growing_annuity_present_value(100.0, g + 1e-10, g, 264);
        assert_approx(limit, 26_400.0);
        assert!(
            (near - limit).abs() / limit < 5e-3,
            "general formula {near} strays from linear limit {limit}"
        );
        // The general formula tends to n / (1 + d); the linear branch drops that
        // one-month discount, and nothing else.
        assert_approx_tol(near * (1.0 + g), limit, limit * 1e-6);
    }

    #[test]
    fn growing_annuity_with_zero_months_is_zero() {
        assert_eq!(growing_annuity_present_value(500.0, 0.004, 0.001, 0), 0.0);
    }

    #[test]
    fn growing_annuity_matches_level_annuity_without_growth() {
        // 100/month for 12 months at 0.5%: 100 * (1 - 1.005^-12) / 0.005.
        let pv = growing_annuity_present_value(100.0, 0.005, 0.0, 12);
        assert_approx(pv, 100.0 * (1.0 - 1.005_f64.powi(-12)) / 0.005);
    }

    #[test]
    fn pension_present_value_without_working_years_is_nominal() {
        assert_approx(pension_present_value(1_000.0, 3.0, 0, 20), 240_000.0);
        assert_approx(
            pension_present_value(1_000.0, 3.0, 10, 20),
            240_000.0 / 1.03_f64.powi(10),
        );
    }

    #[test]
    fn negative_savings_rate_reduces_wealth() {
        let mut inputs = sample_inputs();
        inputs.savings_rate_pct = -100.0;
        let result = run_projection(&inputs).expect("valid profile");
        assert!(result.present_value_savings < 0.0);
        // Expenses are twice the income; coverage stays defined.
        assert!(result.expected_coverage_pct.is_some());
    }

    #[test]
    fn zero_wealth_weights_are_exactly_zero() {
        let result = run_projection(&zero_wealth_inputs()).expect("valid profile");
        assert_eq!(result.total_wealth, 0.0);
        assert_eq!(result.weighted_risk_units, 0.0);
        assert_eq!(result.weighted_risk_premium_pct, 0.0);
        assert!(!result.weighted_risk_units.is_nan());
        assert_eq!(result.expected_net_income, 0.0);
    }

    #[test]
    fn debt_is_weighted_with_its_negative_sign() {
        let profile = aggregate_portfolio(&[
            Position {
                balance_k: 100.0,
                risk_units: 2.0,
                risk_premium_pct: 2.0,
            },
            Position {
                balance_k: -50.0,
                risk_units: 0.0,
                risk_premium_pct: 3.0,
            },
        ]);
        assert_approx(profile.total_wealth, 50.0);
        assert_approx(profile.weighted_risk_units, 4.0);
        // (100 * 0.02 - 50 * 0.03) / 50 falls outside both entries' premiums.
        assert_approx(profile.weighted_risk_premium, 0.01);
    }

    #[test]
    fn coverage_is_undefined_without_expenses() {
        let mut inputs = sample_inputs();
        inputs.savings_rate_pct = 100.0;
        let result = run_projection(&inputs).expect("valid profile");
        assert_eq!(result.expected_coverage_pct, None);
        assert_eq!(result.adverse_coverage_pct, None);
        assert!(result.expected_net_income.is_finite());
    }

    #[test]
    fn equal_retirement_and_current_age_is_rejected() {
        let mut inputs = sample_inputs();
        inputs.retirement_age = inputs.current_age;
        let errors = run_projection(&inputs).expect_err("no working years");
        assert!(!errors.is_empty());
        assert!(errors.contains_code("working-horizon"));
    }

    #[test]
    fn all_violations_are_reported_together() {
        let mut inputs = sample_inputs();
        inputs.current_age = 70;
        inputs.retirement_age = 65;
        inputs.life_expectancy = 60;
        inputs.tax_rate_pct = 101.0;
        inputs.adverse = AdversePolicy::FixedZ { z_score: f64::NAN };

        let errors = validate(&inputs).expect_err("invalid profile");
        let codes: Vec<_> = errors.iter().map(ValidationError::code).collect();
        assert_eq!(
            codes,
            vec!["working-horizon", "retirement-horizon", "tax-rate", "z-score"]
        );
    }

    #[test]
    fn tax_rate_bounds_are_inclusive() {
        for tax in [0.0, 100.0] {
            let mut inputs = sample_inputs();
            inputs.tax_rate_pct = tax;
            assert!(run_projection(&inputs).is_ok(), "tax {tax} should be valid");
        }
        let mut inputs = sample_inputs();
        inputs.tax_rate_pct = -0.5;
        assert!(run_projection(&inputs).is_err());
    }

    #[test]
    fn rates_at_or_below_minus_hundred_are_rejected() {
        let mut inputs = derived(&sample_inputs(), -100.0);
        inputs.income_growth_pct = f64::INFINITY;
        let errors = validate(&inputs).expect_err("invalid rates");
        assert!(errors.contains_code("rate-floor"));
        assert!(errors.contains_code("non-finite"));
    }

    #[test]
    fn zero_volatility_probability_is_degenerate() {
        assert_eq!(shortfall_probability(0.04, 0.0, 0.0, 20.0), 0.0);
        assert_eq!(shortfall_probability(0.04, 0.0, 0.04, 20.0), 1.0);
        assert_eq!(shortfall_probability(0.04, 1e-13, 0.05, 20.0), 1.0);
    }

    #[test]
    fn threshold_at_expected_return_is_even_odds() {
        assert_approx_tol(shortfall_probability(0.05, 0.2, 0.05, 10.0), 0.5, 1e-8);
    }

    #[test]
    fn reruns_are_bit_identical() {
        for inputs in [sample_inputs(), derived(&sample_inputs(), 1.0)] {
            let first = run_projection(&inputs).expect("valid profile");
            let second = run_projection(&inputs.clone()).expect("valid profile");
            assert_eq!(
                first.adverse_probability_pct.to_bits(),
                second.adverse_probability_pct.to_bits()
            );
            assert_eq!(
                first.expected_net_income.to_bits(),
                second.expected_net_income.to_bits()
            );
            assert_eq!(first, second);
        }
    }

    #[test]
    fn huge_horizons_are_rejected_without_overflow() {
        for (current, retirement, life) in [
            (0, 400_000_000, 400_000_010),
            (0, 200_000, 200_010),
            (u32::MAX - 1, u32::MAX, u32::MAX),
        ] {
            let mut inputs = sample_inputs();
            inputs.current_age = current;
            inputs.retirement_age = retirement;
            inputs.life_expectancy = life;
            for profile in [inputs.clone(), derived(&inputs, 0.0)] {
                let errors = run_projection(&profile).expect_err("ages beyond the limit");
                assert!(errors.contains_code("age-limit"));
            }
        }
    }

    #[test]
    fn longest_accepted_horizon_stays_finite() {
        let mut inputs = sample_inputs();
        inputs.current_age = 0;
        inputs.retirement_age = MAX_AGE - 1;
        inputs.life_expectancy = MAX_AGE;
        for profile in [inputs.clone(), derived(&inputs, 0.0)] {
            let result = run_projection(&profile).expect("ages at the limit are valid");
            assert!(result.expected_net_income.is_finite());
            assert!(result.adverse_net_income.is_finite());
            assert!(
                result
                    .expected_coverage_pct
                    .is_some_and(|c| c.is_finite())
            );
        }
        let mut inputs = sample_inputs();
        inputs.life_expectancy = MAX_AGE + 1;
        let errors = validate(&inputs).expect_err("life expectancy beyond the limit");
        assert!(errors.contains_code("age-limit"));
    }

    #[test]
    fn overflowing_results_are_rejected() {
        let mut inputs = sample_inputs();
        inputs.current_age = 0;
        inputs.retirement_age = MAX_AGE - 1;
        inputs.life_expectancy = MAX_AGE;
        inputs.holdings.bank = AssetClass::new(1e306, 0.0, 3.0);
        for profile in [inputs.clone(), derived(&inputs, 2.0)] {
            let errors = run_projection(&profile).expect_err("wealth leaves the f64 range");
            assert!(errors.contains_code("unrepresentable"));
            assert!(errors.iter().all(|e| e.code() == "unrepresentable"));
        }
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_raising_one_premium_never_lowers_weighted_premium(
            balances in proptest::collection::vec(0u32..2_000, 7),
            premiums_bp in proptest::collection::vec(-300i32..800, 7),
            index in 0usize..7,
            bump_bp in 1u32..500
        ) {
            let mut positions: Vec<Position> = balances
                .iter()
                .zip(premiums_bp.iter())
                .map(|(&b, &p)| Position {
                    balance_k: b as f64,
                    risk_units: 1.0,
                    risk_premium_pct: p as f64 / 100.0,
                })
                .collect();
            positions[index].balance_k += 1.0;

            let before = aggregate_portfolio(&positions);
            positions[index].risk_premium_pct += bump_bp as f64 / 100.0;
            let after = aggregate_portfolio(&positions);

            prop_assert!(after.weighted_risk_premium + 1e-12 >= before.weighted_risk_premium);
            prop_assert_eq!(after.total_wealth, before.total_wealth);
        }
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(48))]

        #[test]
        fn prop_adverse_probability_is_a_percentage(
            current_age in 20u32..60,
            working in 1u32..40,
            retired in 1u32..40,
            safe_bp in -200i32..600,
            growth_bp in -200i32..500,
            income in 0u32..20_000,
            savings_pct in 0i32..101,
            tax_pct in 0u32..101,
            pension in 0u32..5_000,
            bank in 1u32..1_000,
            securities in 0u32..3_000,
            real_estate in 0u32..5_000,
            debt_share_pct in 0u32..100,
            securities_units_bp in 0u32..1_200,
            securities_premium_bp in 0u32..800,
            threshold_bp in -500i32..800,
            z_milli in -3_000i32..3_000
        ) {
            let mut inputs = sample_inputs();
            inputs.current_age = current_age;
            inputs.retirement_age = current_age + working;
            inputs.life_expectancy = inputs.retirement_age + retired;
            inputs.safe_rate_pct = safe_bp as f64 / 100.0;
            inputs.income_growth_pct = growth_bp as f64 / 100.0;
            inputs.monthly_income = income as f64;
            inputs.savings_rate_pct = savings_pct as f64;
            inputs.tax_rate_pct = tax_pct as f64;
            inputs.monthly_pension = pension as f64;
            inputs.holdings.bank.balance_k = bank as f64;
            inputs.holdings.securities = AssetClass::new(
                securities as f64,
                securities_units_bp as f64 / 100.0,
                securities_premium_bp as f64 / 100.0,
            );
            inputs.holdings.real_estate.balance_k = real_estate as f64;
            let assets = (bank + securities + real_estate) as f64;
            inputs.holdings.debt.balance_k = -(assets * debt_share_pct as f64 / 100.0);

            for policy in [
                AdversePolicy::FixedZ { z_score: z_milli as f64 / 1_000.0 },
                AdversePolicy::DerivedVolatility {
                    threshold_return_pct: threshold_bp as f64 / 100.0,
                },
            ] {
                inputs.adverse = policy;
                let result = run_projection(&inputs).expect("generated profiles are valid");
                prop_assert!((0.0..=100.0).contains(&result.adverse_probability_pct));
                prop_assert!(result.total_wealth.is_finite());
                prop_assert!(result.expected_net_income.is_finite());
                prop_assert!(result.adverse_net_income.is_finite());
                prop_assert!(result.volatility_pct >= 0.0 && result.volatility_pct <= 60.0 + 1e-9);
            }
        }
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(32))]

        #[test]
        fn prop_no_working_years_always_invalid(
            age in 18u32..90,
            life_extra in 0u32..30,
            tax_pct in -50i32..150,
            income in 0u32..10_000
        ) {
            let mut inputs = sample_inputs();
            inputs.current_age = age;
            inputs.retirement_age = age;
            inputs.life_expectancy = age + life_extra;
            inputs.tax_rate_pct = tax_pct as f64;
            inputs.monthly_income = income as f64;

            let errors = run_projection(&inputs).expect_err("no working years");
            prop_assert!(errors.contains_code("working-horizon"));
        }
    }
}
