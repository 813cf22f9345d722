use serde::{Deserialize, Serialize};

/// How the adverse scenario is priced and how likely it is.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "kebab-case")]
pub enum AdversePolicy {
    /// Adverse wealth is today's wealth spread over retirement, neither grown nor
    /// discounted; its probability is read straight off the normal CDF at `z_score`.
    #[serde(rename_all = "camelCase")]
    FixedZ { z_score: f64 },
    /// Adverse wealth grows at `threshold_return_pct`; the probability of realising
    /// less than that comes from a volatility derived from the weighted risk units.
    #[serde(rename_all = "camelCase")]
    DerivedVolatility { threshold_return_pct: f64 },
}

impl AdversePolicy {
    pub fn kind(self) -> PolicyKind {
        match self {
            AdversePolicy::FixedZ { .. } => PolicyKind::FixedZ,
            AdversePolicy::DerivedVolatility { .. } => PolicyKind::DerivedVolatility,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyKind {
    FixedZ,
    DerivedVolatility,
}

impl PolicyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PolicyKind::FixedZ => "fixed-z",
            PolicyKind::DerivedVolatility => "derived-volatility",
        }
    }
}

/// One user-entered asset class. Balances are in thousands.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetClass {
    pub balance_k: f64,
    pub risk_units: f64,
    pub risk_premium_pct: f64,
}

impl AssetClass {
    pub const fn new(balance_k: f64, risk_units: f64, risk_premium_pct: f64) -> Self {
        Self {
            balance_k,
            risk_units,
            risk_premium_pct,
        }
    }
}

/// Return assumptions for a stream whose balance is a computed present value.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamAssumption {
    pub risk_units: f64,
    pub risk_premium_pct: f64,
}

impl StreamAssumption {
    pub const fn new(risk_units: f64, risk_premium_pct: f64) -> Self {
        Self {
            risk_units,
            risk_premium_pct,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holdings {
    pub bank: AssetClass,
    pub pension_assets: AssetClass,
    pub securities: AssetClass,
    pub real_estate: AssetClass,
    /// Carries a negative balance.
    pub debt: AssetClass,
}

impl Holdings {
    pub fn iter(&self) -> impl Iterator<Item = &AssetClass> {
        [
            &self.bank,
            &self.pension_assets,
            &self.securities,
            &self.real_estate,
            &self.debt,
        ]
        .into_iter()
    }
}

/// Household profile. All rates are annual percentages as entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inputs {
    pub current_age: u32,
    pub retirement_age: u32,
    pub life_expectancy: u32,
    pub safe_rate_pct: f64,
    pub income_growth_pct: f64,
    pub monthly_income: f64,
    pub savings_rate_pct: f64,
    pub tax_rate_pct: f64,
    pub monthly_pension: f64,
    pub holdings: Holdings,
    pub future_savings: StreamAssumption,
    pub future_pension: StreamAssumption,
    pub adverse: AdversePolicy,
}

impl Inputs {
    pub fn working_years(&self) -> i64 {
        i64::from(self.retirement_age) - i64::from(self.current_age)
    }

    pub fn retirement_years(&self) -> i64 {
        i64::from(self.life_expectancy) - i64::from(self.retirement_age)
    }

    /// Monthly spending before retirement.
    pub fn current_expenses(&self) -> f64 {
        self.monthly_income * (1.0 - self.savings_rate_pct / 100.0)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentValues {
    pub savings: f64,
    pub pension: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioProfile {
    pub total_wealth: f64,
    pub weighted_risk_units: f64,
    /// Fraction, not percent.
    pub weighted_risk_premium: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioIncome {
    pub wealth_at_retirement: f64,
    pub gross_monthly: f64,
    pub net_monthly: f64,
    pub coverage_pct: Option<f64>,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    pub policy: PolicyKind,
    pub present_value_savings: f64,
    pub present_value_pension: f64,
    pub total_wealth: f64,
    pub weighted_risk_units: f64,
    pub weighted_risk_premium_pct: f64,
    pub expected_return_pct: f64,
    pub volatility_pct: f64,
    pub expected_net_income: f64,
    pub expected_coverage_pct: Option<f64>,
    pub adverse_net_income: f64,
    pub adverse_coverage_pct: Option<f64>,
    pub adverse_probability_pct: f64,
}
