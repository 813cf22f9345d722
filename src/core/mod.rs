mod engine;
mod error;
mod math;
mod presets;
mod time_value;
mod types;

pub use engine::{
    DEGENERATE_RATE_GAP, Horizon, MAX_AGE, Position, aggregate_portfolio, coverage_pct,
    growing_annuity_present_value, pension_present_value, portfolio_positions, present_values,
    project_scenario, run_projection, shortfall_probability, validate,
};
pub use error::{ValidationError, ValidationErrors};
pub use math::{
    MAX_VOLATILITY, RISK_UNITS_PER_VOLATILITY, cumulative_normal, effective_monthly_rate, erf,
    volatility_from_risk_units,
};
pub use presets::{
    PRESET_NAMES, Preset, derived_volatility_defaults, fixed_z_defaults, preset, presets,
};
pub use time_value::{
    CompoundInterestResult, TimeValueRequest, compound_interest, future_value_growing_payments,
    future_value_lump_sum, payment_for_target, present_value_growing_payments,
    present_value_lump_sum,
};
pub use types::{
    AdversePolicy, AssetClass, Holdings, Inputs, PolicyKind, PortfolioProfile, PresentValues,
    ProjectionResult, ScenarioIncome, StreamAssumption,
};
