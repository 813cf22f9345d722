use axum::{
    Router,
    extract::{Json, Path, Query},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{debug, info};

use crate::core::{
    AdversePolicy, AssetClass, CompoundInterestResult, Holdings, Inputs, PolicyKind,
    ProjectionResult, StreamAssumption, TimeValueRequest, ValidationErrors, compound_interest,
    preset, presets, run_projection,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum CliPolicy {
    FixedZ,
    DerivedVolatility,
}

impl From<CliPolicy> for PolicyKind {
    fn from(value: CliPolicy) -> Self {
        match value {
            CliPolicy::FixedZ => PolicyKind::FixedZ,
            CliPolicy::DerivedVolatility => PolicyKind::DerivedVolatility,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ApiPolicy {
    #[serde(alias = "fixedZ", alias = "fixed_z", alias = "rentenprognose")]
    FixedZ,
    #[serde(
        alias = "derivedVolatility",
        alias = "derived_volatility",
        alias = "vermoegen"
    )]
    DerivedVolatility,
}

impl From<ApiPolicy> for CliPolicy {
    fn from(value: ApiPolicy) -> Self {
        match value {
            ApiPolicy::FixedZ => CliPolicy::FixedZ,
            ApiPolicy::DerivedVolatility => CliPolicy::DerivedVolatility,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ProjectionPayload {
    preset: Option<String>,
    policy: Option<ApiPolicy>,

    #[serde(alias = "ageNow")]
    current_age: Option<u32>,
    #[serde(alias = "ageRet")]
    retirement_age: Option<u32>,
    #[serde(alias = "ageLife")]
    life_expectancy: Option<u32>,

    #[serde(alias = "r")]
    safe_rate: Option<f64>,
    #[serde(alias = "g")]
    income_growth: Option<f64>,
    #[serde(alias = "income")]
    monthly_income: Option<f64>,
    #[serde(alias = "s")]
    savings_rate: Option<f64>,
    #[serde(alias = "tax")]
    tax_rate: Option<f64>,
    #[serde(alias = "pensionMonthly")]
    monthly_pension: Option<f64>,
    #[serde(alias = "zBad")]
    z_score: Option<f64>,
    #[serde(alias = "badMuPct")]
    adverse_return: Option<f64>,

    bank_k: Option<f64>,
    #[serde(alias = "reBank")]
    bank_risk_units: Option<f64>,
    #[serde(alias = "rpBank")]
    bank_risk_premium: Option<f64>,
    #[serde(alias = "pensionAssetK")]
    pension_assets_k: Option<f64>,
    #[serde(alias = "rePensionAsset")]
    pension_assets_risk_units: Option<f64>,
    #[serde(alias = "rpPensionAsset")]
    pension_assets_risk_premium: Option<f64>,
    #[serde(alias = "secK")]
    securities_k: Option<f64>,
    #[serde(alias = "reSec")]
    securities_risk_units: Option<f64>,
    #[serde(alias = "rpSec")]
    securities_risk_premium: Option<f64>,
    #[serde(alias = "immoK")]
    real_estate_k: Option<f64>,
    #[serde(alias = "reImmo")]
    real_estate_risk_units: Option<f64>,
    #[serde(alias = "rpImmo")]
    real_estate_risk_premium: Option<f64>,
    debt_k: Option<f64>,
    #[serde(alias = "reDebt")]
    debt_risk_units: Option<f64>,
    #[serde(alias = "rpDebt")]
    debt_risk_premium: Option<f64>,

    #[serde(alias = "rePvSave")]
    savings_risk_units: Option<f64>,
    #[serde(alias = "rpPvSave")]
    savings_risk_premium: Option<f64>,
    #[serde(alias = "rePvPens")]
    pension_risk_units: Option<f64>,
    #[serde(alias = "rpPvPens")]
    pension_risk_premium: Option<f64>,
}

/// Flags left out fall back to the selected preset, or to the policy's starting
/// profile when no preset is given.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "outlook project",
    about = "Retirement outlook: present values, weighted risk profile and expected vs adverse retirement income"
)]
pub struct Cli {
    #[arg(long, help = "Start from a named example household (user, frida, jana, ...)")]
    preset: Option<String>,
    #[arg(long, value_enum, default_value_t = CliPolicy::FixedZ)]
    policy: CliPolicy,
    #[arg(long)]
    current_age: Option<u32>,
    #[arg(long)]
    retirement_age: Option<u32>,
    #[arg(long)]
    life_expectancy: Option<u32>,
    #[arg(long, allow_negative_numbers = true, help = "Safe annual interest rate in percent")]
    safe_rate: Option<f64>,
    #[arg(long, allow_negative_numbers = true, help = "Annual income growth in percent")]
    income_growth: Option<f64>,
    #[arg(long, allow_negative_numbers = true, help = "Net monthly income")]
    monthly_income: Option<f64>,
    #[arg(
        long,
        allow_negative_numbers = true,
        help = "Share of income saved in percent; negative consumes principal"
    )]
    savings_rate: Option<f64>,
    #[arg(long, allow_negative_numbers = true, help = "Tax on retirement income in percent")]
    tax_rate: Option<f64>,
    #[arg(long, allow_negative_numbers = true, help = "Forecast statutory monthly pension")]
    monthly_pension: Option<f64>,
    #[arg(
        long,
        allow_negative_numbers = true,
        help = "z-score of the adverse quantile (fixed-z policy)"
    )]
    z_score: Option<f64>,
    #[arg(
        long,
        allow_negative_numbers = true,
        help = "Adverse annual return threshold in percent (derived-volatility policy)"
    )]
    adverse_return: Option<f64>,
    #[arg(long, allow_negative_numbers = true, help = "Bank deposits in thousands")]
    bank_k: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    bank_risk_units: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    bank_risk_premium: Option<f64>,
    #[arg(long, allow_negative_numbers = true, help = "Pension-linked assets in thousands")]
    pension_assets_k: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pension_assets_risk_units: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pension_assets_risk_premium: Option<f64>,
    #[arg(long, allow_negative_numbers = true, help = "Securities in thousands")]
    securities_k: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    securities_risk_units: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    securities_risk_premium: Option<f64>,
    #[arg(long, allow_negative_numbers = true, help = "Real estate in thousands")]
    real_estate_k: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    real_estate_risk_units: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    real_estate_risk_premium: Option<f64>,
    #[arg(
        long,
        allow_negative_numbers = true,
        help = "Debt in thousands, entered as a negative balance"
    )]
    debt_k: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    debt_risk_units: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    debt_risk_premium: Option<f64>,
    #[arg(long, allow_negative_numbers = true, help = "Risk units of the future savings stream")]
    savings_risk_units: Option<f64>,
    #[arg(
        long,
        allow_negative_numbers = true,
        help = "Risk premium of the future savings stream in percent"
    )]
    savings_risk_premium: Option<f64>,
    #[arg(long, allow_negative_numbers = true, help = "Risk units of the future pension stream")]
    pension_risk_units: Option<f64>,
    #[arg(
        long,
        allow_negative_numbers = true,
        help = "Risk premium of the future pension stream in percent"
    )]
    pension_risk_premium: Option<f64>,
}

impl From<Cli> for ProjectionPayload {
    fn from(cli: Cli) -> Self {
        Self {
            preset: cli.preset,
            policy: Some(match cli.policy {
                CliPolicy::FixedZ => ApiPolicy::FixedZ,
                CliPolicy::DerivedVolatility => ApiPolicy::DerivedVolatility,
            }),
            current_age: cli.current_age,
            retirement_age: cli.retirement_age,
            life_expectancy: cli.life_expectancy,
            safe_rate: cli.safe_rate,
            income_growth: cli.income_growth,
            monthly_income: cli.monthly_income,
            savings_rate: cli.savings_rate,
            tax_rate: cli.tax_rate,
            monthly_pension: cli.monthly_pension,
            z_score: cli.z_score,
            adverse_return: cli.adverse_return,
            bank_k: cli.bank_k,
            bank_risk_units: cli.bank_risk_units,
            bank_risk_premium: cli.bank_risk_premium,
            pension_assets_k: cli.pension_assets_k,
            pension_assets_risk_units: cli.pension_assets_risk_units,
            pension_assets_risk_premium: cli.pension_assets_risk_premium,
            securities_k: cli.securities_k,
            securities_risk_units: cli.securities_risk_units,
            securities_risk_premium: cli.securities_risk_premium,
            real_estate_k: cli.real_estate_k,
            real_estate_risk_units: cli.real_estate_risk_units,
            real_estate_risk_premium: cli.real_estate_risk_premium,
            debt_k: cli.debt_k,
            debt_risk_units: cli.debt_risk_units,
            debt_risk_premium: cli.debt_risk_premium,
            savings_risk_units: cli.savings_risk_units,
            savings_risk_premium: cli.savings_risk_premium,
            pension_risk_units: cli.pension_risk_units,
            pension_risk_premium: cli.pension_risk_premium,
        }
    }
}

/// Every field of a profile, as entered on the form.
#[derive(Debug, Clone)]
struct ProfileArgs {
    policy: CliPolicy,
    current_age: u32,
    retirement_age: u32,
    life_expectancy: u32,
    safe_rate: f64,
    income_growth: f64,
    monthly_income: f64,
    savings_rate: f64,
    tax_rate: f64,
    monthly_pension: f64,
    z_score: Option<f64>,
    adverse_return: Option<f64>,
    bank: AssetClass,
    pension_assets: AssetClass,
    securities: AssetClass,
    real_estate: AssetClass,
    debt: AssetClass,
    savings: StreamAssumption,
    pension: StreamAssumption,
}

impl ProfileArgs {
    fn from_inputs(inputs: &Inputs) -> Self {
        let (policy, z_score, adverse_return) = match inputs.adverse {
            AdversePolicy::FixedZ { z_score } => (CliPolicy::FixedZ, Some(z_score), None),
            AdversePolicy::DerivedVolatility {
                threshold_return_pct,
            } => (
                CliPolicy::DerivedVolatility,
                None,
                Some(threshold_return_pct),
            ),
        };
        Self {
            policy,
            current_age: inputs.current_age,
            retirement_age: inputs.retirement_age,
            life_expectancy: inputs.life_expectancy,
            safe_rate: inputs.safe_rate_pct,
            income_growth: inputs.income_growth_pct,
            monthly_income: inputs.monthly_income,
            savings_rate: inputs.savings_rate_pct,
            tax_rate: inputs.tax_rate_pct,
            monthly_pension: inputs.monthly_pension,
            z_score,
            adverse_return,
            bank: inputs.holdings.bank,
            pension_assets: inputs.holdings.pension_assets,
            securities: inputs.holdings.securities,
            real_estate: inputs.holdings.real_estate,
            debt: inputs.holdings.debt,
            savings: inputs.future_savings,
            pension: inputs.future_pension,
        }
    }
}

#[derive(Debug)]
struct ApiRequest {
    preset: Option<String>,
    inputs: Inputs,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorEntry {
    code: &'static str,
    message: String,
}

/// Numeric fields are `null` when the profile is invalid or a value is undefined.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectionResponse {
    policy: PolicyKind,
    preset: Option<String>,
    valid: bool,
    errors: Vec<ErrorEntry>,
    present_value_savings: Option<f64>,
    present_value_pension: Option<f64>,
    total_wealth: Option<f64>,
    weighted_risk_units: Option<f64>,
    weighted_risk_premium_pct: Option<f64>,
    expected_return_pct: Option<f64>,
    volatility_pct: Option<f64>,
    expected_net_income: Option<f64>,
    expected_coverage_pct: Option<f64>,
    adverse_net_income: Option<f64>,
    adverse_coverage_pct: Option<f64>,
    adverse_probability_pct: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PresetListResponse {
    fixed_z: Vec<&'static str>,
    derived_volatility: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TimeValueResponse {
    kind: &'static str,
    value: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct CompoundInterestPayload {
    initial_amount: Option<f64>,
    monthly_contribution: Option<f64>,
    annual_rate_pct: Option<f64>,
    years: Option<u32>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn build_inputs(args: ProfileArgs) -> Result<Inputs, String> {
    let adverse = match args.policy {
        CliPolicy::FixedZ => {
            if args.adverse_return.is_some() {
                return Err(
                    "adverseReturn only applies to the derived-volatility policy".to_string(),
                );
            }
            let z_score = args
                .z_score
                .ok_or_else(|| "zScore is required for the fixed-z policy".to_string())?;
            AdversePolicy::FixedZ { z_score }
        }
        CliPolicy::DerivedVolatility => {
            if args.z_score.is_some() {
                return Err("zScore only applies to the fixed-z policy".to_string());
            }
            let threshold_return_pct = args.adverse_return.ok_or_else(|| {
                "adverseReturn is required for the derived-volatility policy".to_string()
            })?;
            AdversePolicy::DerivedVolatility {
                threshold_return_pct,
            }
        }
    };

    Ok(Inputs {
        current_age: args.current_age,
        retirement_age: args.retirement_age,
        life_expectancy: args.life_expectancy,
        safe_rate_pct: args.safe_rate,
        income_growth_pct: args.income_growth,
        monthly_income: args.monthly_income,
        savings_rate_pct: args.savings_rate,
        tax_rate_pct: args.tax_rate,
        monthly_pension: args.monthly_pension,
        holdings: Holdings {
            bank: args.bank,
            pension_assets: args.pension_assets,
            securities: args.securities,
            real_estate: args.real_estate,
            debt: args.debt,
        },
        future_savings: args.savings,
        future_pension: args.pension,
        adverse,
    })
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    info!("outlook HTTP API listening on http://{addr}");
    info!("local access: http://127.0.0.1:{port}/api/projection");

    axum::serve(listener, router()).await
}

fn router() -> Router {
    Router::new()
        .route(
            "/api/projection",
            get(projection_get_handler).post(projection_post_handler),
        )
        .route("/api/presets", get(presets_handler))
        .route("/api/presets/:policy/:name", get(preset_handler))
        .route("/api/time-value", post(time_value_handler))
        .route("/api/compound-interest", get(compound_interest_handler))
        .fallback(not_found_handler)
}

/// Runs one projection from command-line flags and renders it as pretty JSON.
/// Invalid profiles come back as `Err` carrying the same JSON document.
pub fn run_cli(cli: Cli) -> Result<String, String> {
    let request = api_request_from_payload(cli.into())?;
    let policy = request.inputs.adverse.kind();
    let outcome = run_projection(&request.inputs);
    let valid = outcome.is_ok();
    let response = build_projection_response(policy, request.preset, &outcome);
    let json = serde_json::to_string_pretty(&response)
        .map_err(|e| format!("failed to render projection: {e}"))?;
    if valid { Ok(json) } else { Err(json) }
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn projection_get_handler(Query(payload): Query<ProjectionPayload>) -> Response {
    projection_handler_impl(payload)
}

async fn projection_post_handler(Json(payload): Json<ProjectionPayload>) -> Response {
    projection_handler_impl(payload)
}

fn projection_handler_impl(payload: ProjectionPayload) -> Response {
    let request = match api_request_from_payload(payload) {
        Ok(request) => request,
        Err(msg) => return error_response(StatusCode::BAD_REQUEST, &msg),
    };

    let policy = request.inputs.adverse.kind();
    let outcome = run_projection(&request.inputs);
    if let Err(errors) = &outcome {
        debug!(policy = policy.as_str(), "invalid profile: {errors}");
    }
    json_response(
        StatusCode::OK,
        build_projection_response(policy, request.preset, &outcome),
    )
}

async fn presets_handler() -> Response {
    json_response(
        StatusCode::OK,
        PresetListResponse {
            fixed_z: preset_names(PolicyKind::FixedZ),
            derived_volatility: preset_names(PolicyKind::DerivedVolatility),
        },
    )
}

fn preset_names(kind: PolicyKind) -> Vec<&'static str> {
    presets(kind).into_iter().map(|p| p.name).collect()
}

async fn preset_handler(Path((policy, name)): Path<(ApiPolicy, String)>) -> Response {
    let kind: PolicyKind = CliPolicy::from(policy).into();
    match preset(kind, &name) {
        Some(inputs) => json_response(StatusCode::OK, inputs),
        None => error_response(
            StatusCode::NOT_FOUND,
            &format!("unknown preset '{name}' for policy {}", kind.as_str()),
        ),
    }
}

async fn time_value_handler(Json(request): Json<TimeValueRequest>) -> Response {
    json_response(
        StatusCode::OK,
        TimeValueResponse {
            kind: request.kind(),
            value: request.evaluate(),
        },
    )
}

async fn compound_interest_handler(Query(payload): Query<CompoundInterestPayload>) -> Response {
    json_response(StatusCode::OK, compound_interest_from_payload(payload))
}

fn compound_interest_from_payload(payload: CompoundInterestPayload) -> CompoundInterestResult {
    compound_interest(
        payload.initial_amount.unwrap_or(10_000.0),
        payload.monthly_contribution.unwrap_or(200.0),
        payload.annual_rate_pct.unwrap_or(7.0),
        payload.years.unwrap_or(20),
    )
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-store"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

#[cfg(test)]
fn api_request_from_json(json: &str) -> Result<ApiRequest, String> {
    let payload = serde_json::from_str::<ProjectionPayload>(json)
        .map_err(|e| format!("Invalid API JSON payload: {e}"))?;
    api_request_from_payload(payload)
}

fn api_request_from_payload(payload: ProjectionPayload) -> Result<ApiRequest, String> {
    let policy = payload.policy.map(CliPolicy::from).unwrap_or(CliPolicy::FixedZ);
    let base = match payload.preset.as_deref() {
        Some(name) => preset(policy.into(), name).ok_or_else(|| {
            format!(
                "unknown preset '{name}' for policy {}",
                PolicyKind::from(policy).as_str()
            )
        })?,
        None => default_profile(policy),
    };
    let mut args = ProfileArgs::from_inputs(&base);

    if let Some(v) = payload.current_age {
        args.current_age = v;
    }
    if let Some(v) = payload.retirement_age {
        args.retirement_age = v;
    }
    if let Some(v) = payload.life_expectancy {
        args.life_expectancy = v;
    }

    if let Some(v) = payload.safe_rate {
        args.safe_rate = v;
    }
    if let Some(v) = payload.income_growth {
        args.income_growth = v;
    }
    if let Some(v) = payload.monthly_income {
        args.monthly_income = v;
    }
    if let Some(v) = payload.savings_rate {
        args.savings_rate = v;
    }
    if let Some(v) = payload.tax_rate {
        args.tax_rate = v;
    }
    if let Some(v) = payload.monthly_pension {
        args.monthly_pension = v;
    }
    if let Some(v) = payload.z_score {
        args.z_score = Some(v);
    }
    if let Some(v) = payload.adverse_return {
        args.adverse_return = Some(v);
    }

    if let Some(v) = payload.bank_k {
        args.bank.balance_k = v;
    }
    if let Some(v) = payload.bank_risk_units {
        args.bank.risk_units = v;
    }
    if let Some(v) = payload.bank_risk_premium {
        args.bank.risk_premium_pct = v;
    }
    if let Some(v) = payload.pension_assets_k {
        args.pension_assets.balance_k = v;
    }
    if let Some(v) = payload.pension_assets_risk_units {
        args.pension_assets.risk_units = v;
    }
    if let Some(v) = payload.pension_assets_risk_premium {
        args.pension_assets.risk_premium_pct = v;
    }
    if let Some(v) = payload.securities_k {
        args.securities.balance_k = v;
    }
    if let Some(v) = payload.securities_risk_units {
        args.securities.risk_units = v;
    }
    if let Some(v) = payload.securities_risk_premium {
        args.securities.risk_premium_pct = v;
    }
    if let Some(v) = payload.real_estate_k {
        args.real_estate.balance_k = v;
    }
    if let Some(v) = payload.real_estate_risk_units {
        args.real_estate.risk_units = v;
    }
    if let Some(v) = payload.real_estate_risk_premium {
        args.real_estate.risk_premium_pct = v;
    }
    if let Some(v) = payload.debt_k {
        args.debt.balance_k = v;
    }
    if let Some(v) = payload.debt_risk_units {
        args.debt.risk_units = v;
    }
    if let Some(v) = payload.debt_risk_premium {
        args.debt.risk_premium_pct = v;
    }

    if let Some(v) = payload.savings_risk_units {
        args.savings.risk_units = v;
    }
    if let Some(v) = payload.savings_risk_premium {
        args.savings.risk_premium_pct = v;
    }
    if let Some(v) = payload.pension_risk_units {
        args.pension.risk_units = v;
    }
    if let Some(v) = payload.pension_risk_premium {
        args.pension.risk_premium_pct = v;
    }

    let inputs = build_inputs(args)?;
    Ok(ApiRequest {
        preset: payload.preset,
        inputs,
    })
}

fn default_profile(policy: CliPolicy) -> Inputs {
    match policy {
        CliPolicy::FixedZ => crate::core::fixed_z_defaults(),
        CliPolicy::DerivedVolatility => crate::core::derived_volatility_defaults(),
    }
}

fn build_projection_response(
    policy: PolicyKind,
    preset: Option<String>,
    outcome: &Result<ProjectionResult, ValidationErrors>,
) -> ProjectionResponse {
    match outcome {
        Ok(result) => ProjectionResponse {
            policy,
            preset,
            valid: true,
            errors: Vec::new(),
            present_value_savings: Some(result.present_value_savings),
            present_value_pension: Some(result.present_value_pension),
            total_wealth: Some(result.total_wealth),
            weighted_risk_units: Some(result.weighted_risk_units),
            weighted_risk_premium_pct: Some(result.weighted_risk_premium_pct),
            expected_return_pct: Some(result.expected_return_pct),
            volatility_pct: Some(result.volatility_pct),
            expected_net_income: Some(result.expected_net_income),
            expected_coverage_pct: result.expected_coverage_pct,
            adverse_net_income: Some(result.adverse_net_income),
            adverse_coverage_pct: result.adverse_coverage_pct,
            adverse_probability_pct: Some(result.adverse_probability_pct),
        },
        Err(errors) => ProjectionResponse {
            policy,
            preset,
            valid: false,
            errors: errors
                .iter()
                .map(|e| ErrorEntry {
                    code: e.code(),
                    message: e.to_string(),
                })
                .collect(),
            present_value_savings: None,
            present_value_pension: None,
            total_wealth: None,
            weighted_risk_units: None,
            weighted_risk_premium_pct: None,
            expected_return_pct: None,
            volatility_pct: None,
            expected_net_income: None,
            expected_coverage_pct: None,
            adverse_net_income: None,
            adverse_coverage_pct: None,
            adverse_probability_pct: None,
        },
    }
}
