//! Example households for the "load example" picker and the tests.
//!
//! Each policy has its own set: the fixed-z households carry a calibrated z-score,
//! the derived-volatility households an adverse return threshold.

use super::types::{
    AdversePolicy, AssetClass, Holdings, Inputs, PolicyKind, StreamAssumption,
};

pub const PRESET_NAMES: [&str; 8] = [
    "user", "frida", "jana", "fred", "karin", "armin", "benno", "frank",
];

#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub inputs: Inputs,
}

pub fn presets(kind: PolicyKind) -> Vec<Preset> {
    PRESET_NAMES
        .iter()
        .filter_map(|&name| preset(kind, name).map(|inputs| Preset { name, inputs }))
        .collect()
}

pub fn preset(kind: PolicyKind, name: &str) -> Option<Inputs> {
    match kind {
        PolicyKind::FixedZ => fixed_z_preset(name),
        PolicyKind::DerivedVolatility => derived_volatility_preset(name),
    }
}

/// Starting profile of the fixed-z calculator.
pub fn fixed_z_defaults() -> Inputs {
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

/// Starting profile of the derived-volatility calculator.
pub fn derived_volatility_defaults() -> Inputs {
    Inputs {
        current_age: 40,
        retirement_age: 67,
        life_expectancy: 90,
        safe_rate_pct: 2.0,
        income_growth_pct: 2.0,
        monthly_income: 2200.0,
        savings_rate_pct: 8.0,
        tax_rate_pct: 20.0,
        monthly_pension: 1262.0,
        holdings: Holdings {
            bank: AssetClass::new(15.0, 0.0, 0.0),
            pension_assets: AssetClass::new(10.0, 1.0, 1.0),
            securities: AssetClass::new(20.0, 3.0, 3.0),
            real_estate: AssetClass::new(0.0, 0.0, 0.0),
            debt: AssetClass::new(0.0, 0.0, 0.0),
        },
        future_savings: StreamAssumption::new(2.0, 2.0),
        future_pension: StreamAssumption::new(1.0, 1.0),
        adverse: AdversePolicy::DerivedVolatility {
            threshold_return_pct: 0.0,
        },
    }
}

#[allow(clippy::too_many_arguments)]
fn household(
    ages: (u32, u32, u32),
    income_growth_pct: f64,
    monthly_income: f64,
    savings_rate_pct: f64,
    tax_rate_pct: f64,
    monthly_pension: f64,
    z_score: f64,
    holdings: Holdings,
    future_savings: StreamAssumption,
    future_pension: StreamAssumption,
) -> Inputs {
    Inputs {
        current_age: ages.0,
        retirement_age: ages.1,
        life_expectancy: ages.2,
        safe_rate_pct: 2.0,
        income_growth_pct,
        monthly_income,
        savings_rate_pct,
        tax_rate_pct,
        monthly_pension,
        holdings,
        future_savings,
        future_pension,
        adverse: AdversePolicy::FixedZ { z_score },
    }
}

fn fixed_z_preset(name: &str) -> Option<Inputs> {
    let inputs = match name {
        "user" => fixed_z_defaults(),
        "frida" => {
            let mut inputs = fixed_z_defaults();
            inputs.retirement_age = 70;
            inputs.savings_rate_pct = -100.0;
            inputs
        }
        "jana" => household(
            (35, 67, 95),
            3.0,
            2800.0,
            10.0,
            20.0,
            2200.0,
            -1.555,
            Holdings {
                bank: AssetClass::new(15.0, 0.0, 0.0),
                pension_assets: AssetClass::new(25.0, 2.0, 1.0),
                securities: AssetClass::new(20.0, 4.0, 4.0),
                real_estate: AssetClass::new(0.0, 0.0, 0.0),
                debt: AssetClass::new(-10.0, 0.0, 1.0),
            },
            StreamAssumption::new(1.0, 4.0),
            StreamAssumption::new(1.0, 1.0),
        ),
        "fred" => household(
            (50, 70, 90),
            2.0,
            3800.0,
            10.0,
            30.0,
            1562.0,
            -0.739,
            Holdings {
                bank: AssetClass::new(90.0, 0.0, 0.0),
                pension_assets: AssetClass::new(120.0, 2.0, 2.0),
                securities: AssetClass::new(280.0, 4.0, 3.0),
                real_estate: AssetClass::new(800.0, 3.0, 2.0),
                debt: AssetClass::new(-150.0, 0.0, 3.0),
            },
            StreamAssumption::new(3.0, 3.0),
            StreamAssumption::new(1.0, 1.0),
        ),
        "karin" => household(
            (30, 67, 95),
            2.0,
            1800.0,
            5.0,
            20.0,
            1908.0,
            -1.645,
            Holdings {
                bank: AssetClass::new(5.0, 0.0, 0.0),
                ..Holdings::default()
            },
            StreamAssumption::new(1.0, 2.0),
            StreamAssumption::new(1.0, 1.0),
        ),
        "armin" => household(
            (40, 67, 90),
            2.0,
            6400.0,
            25.0,
            35.0,
            3925.0,
            -1.405,
            Holdings {
                bank: AssetClass::new(125.0, 0.0, 0.0),
                pension_assets: AssetClass::new(40.0, 2.0, 1.0),
                securities: AssetClass::new(140.0, 4.0, 3.5),
                ..Holdings::default()
            },
            StreamAssumption::new(2.0, 3.5),
            StreamAssumption::new(1.5, 1.0),
        ),
        "benno" => household(
            (55, 64, 90),
            2.0,
            58_333.3333,
            30.0,
            40.0,
            3150.0,
            -0.706,
            Holdings {
                bank: AssetClass::new(200.0, 0.0, 0.0),
                pension_assets: AssetClass::new(220.0, 2.0, 1.0),
                securities: AssetClass::new(2500.0, 7.0, 4.0),
                real_estate: AssetClass::new(5500.0, 2.5, 3.0),
                debt: AssetClass::new(-2000.0, 0.0, 1.5),
            },
            StreamAssumption::new(1.0, 4.0),
            StreamAssumption::new(1.0, 1.0),
        ),
        "frank" => household(
            (60, 67, 90),
            2.0,
            6200.0,
            12.0,
            35.0,
            8309.0,
            -0.706,
            Holdings {
                bank: AssetClass::new(210.0, 0.0, 0.0),
                ..Holdings::default()
            },
            StreamAssumption::new(0.5, 0.0),
            StreamAssumption::new(0.5, 0.5),
        ),
        _ => return None,
    };
    Some(inputs)
}

fn derived_volatility_preset(name: &str) -> Option<Inputs> {
    let mut inputs = derived_volatility_defaults();
    match name {
        "user" => {}
        "frida" => {
            inputs.current_age = 45;
            inputs.retirement_age = 70;
            inputs.monthly_income = 950.0;
            inputs.savings_rate_pct = -100.0;
            inputs.holdings.bank.balance_k = 50.0;
            inputs.holdings.pension_assets.balance_k = 0.0;
            inputs.holdings.securities.balance_k = 220.0;
            inputs.holdings.securities.risk_units = 3.5;
            inputs.holdings.real_estate.balance_k = 300.0;
            inputs.holdings.real_estate.risk_units = 2.0;
            inputs.future_savings = StreamAssumption::new(0.0, 0.0);
        }
        "jana" => {
            inputs.income_growth_pct = 3.0;
            inputs.current_age = 35;
            inputs.life_expectancy = 95;
            inputs.monthly_income = 2800.0;
            inputs.savings_rate_pct = 10.0;
            inputs.monthly_pension = 2200.0;
            inputs.holdings.pension_assets.balance_k = 25.0;
            inputs.holdings.pension_assets.risk_units = 2.0;
            inputs.holdings.securities.risk_units = 4.0;
            inputs.holdings.debt.balance_k = -10.0;
            inputs.future_savings = StreamAssumption::new(1.0, 4.0);
        }
        "fred" => {
            inputs.current_age = 50;
            inputs.retirement_age = 70;
            inputs.monthly_income = 3800.0;
            inputs.savings_rate_pct = 10.0;
            inputs.tax_rate_pct = 30.0;
            inputs.monthly_pension = 1562.0;
            inputs.holdings.bank.balance_k = 90.0;
            inputs.holdings.pension_assets.balance_k = 120.0;
            inputs.holdings.pension_assets.risk_units = 2.0;
            inputs.holdings.securities.balance_k = 280.0;
            inputs.holdings.securities.risk_units = 4.0;
            inputs.holdings.real_estate.balance_k = 800.0;
            inputs.holdings.real_estate.risk_units = 3.0;
            inputs.holdings.debt.balance_k = -150.0;
            inputs.future_savings = StreamAssumption::new(3.0, 3.0);
        }
        "karin" => {
            inputs.current_age = 30;
            inputs.life_expectancy = 95;
            inputs.monthly_income = 1800.0;
            inputs.savings_rate_pct = 5.0;
            inputs.monthly_pension = 1908.0;
            inputs.holdings.bank.balance_k = 5.0;
            inputs.holdings.pension_assets.balance_k = 0.0;
            inputs.holdings.securities.balance_k = 0.0;
            inputs.future_savings = StreamAssumption::new(1.0, 2.0);
        }
        "armin" => {
            inputs.monthly_income = 6400.0;
            inputs.savings_rate_pct = 25.0;
            inputs.tax_rate_pct = 35.0;
            inputs.monthly_pension = 3925.0;
            inputs.holdings.bank.balance_k = 125.0;
            inputs.holdings.pension_assets.balance_k = 40.0;
            inputs.holdings.pension_assets.risk_units = 2.0;
            inputs.holdings.securities.balance_k = 140.0;
            inputs.holdings.securities.risk_units = 4.0;
            inputs.future_savings = StreamAssumption::new(2.0, 3.5);
            inputs.future_pension.risk_units = 1.5;
        }
        "benno" => {
            inputs.current_age = 55;
            inputs.retirement_age = 64;
            inputs.monthly_income = 58_333.3333;
            inputs.savings_rate_pct = 30.0;
            inputs.tax_rate_pct = 40.0;
            inputs.monthly_pension = 3150.0;
            inputs.holdings.bank.balance_k = 200.0;
            inputs.holdings.pension_assets.balance_k = 220.0;
            inputs.holdings.pension_assets.risk_units = 2.0;
            inputs.holdings.securities.balance_k = 2500.0;
            inputs.holdings.securities.risk_units = 7.0;
            inputs.holdings.real_estate.balance_k = 5500.0;
            inputs.holdings.real_estate.risk_units = 2.5;
            inputs.holdings.debt.balance_k = -2000.0;
            inputs.future_savings = StreamAssumption::new(1.0, 4.0);
        }
        "frank" => {
            inputs.current_age = 60;
            inputs.monthly_income = 6200.0;
            inputs.savings_rate_pct = 12.0;
            inputs.tax_rate_pct = 35.0;
            inputs.monthly_pension = 8309.0;
            inputs.holdings.bank.balance_k = 210.0;
            inputs.holdings.pension_assets.balance_k = 0.0;
            inputs.holdings.securities.balance_k = 0.0;
            inputs.future_savings = StreamAssumption::new(0.5, 0.0);
            inputs.future_pension = StreamAssumption::new(0.5, 0.5);
        }
        _ => return None,
    }
    Some(inputs)
}
