use axum::{
    Router,
    extract::{Json, Query},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::core::{
    CostSpec, Evaluation, FOREIGN_SERIES_LABEL, LOCAL_SERIES_LABEL, PROJECTION_HORIZON_MONTHS,
    Params, calculation_steps, evaluate, month_label, projection_series, verdict,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliCostKind {
    Amount,
    Percent,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ApiCostKind {
    #[serde(alias = "flat", alias = "fixed")]
    Amount,
    #[serde(alias = "pct")]
    Percent,
}

impl From<ApiCostKind> for CliCostKind {
    fn from(value: ApiCostKind) -> Self {
        match value {
            ApiCostKind::Amount => CliCostKind::Amount,
            ApiCostKind::Percent => CliCostKind::Percent,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "pegbond",
    about = "Pegged-currency deposit vs foreign-currency bond break-even calculator"
)]
struct Cli {
    #[arg(long, help = "Principal in local currency")]
    principal: f64,
    #[arg(long, help = "Current exchange rate in local units per foreign unit")]
    exchange_rate: f64,
    #[arg(long, help = "Local fixed-deposit annual rate in percent, e.g. 4")]
    local_rate: f64,
    #[arg(long, help = "Foreign bond annual rate in percent, e.g. 4.5")]
    foreign_rate: f64,
    #[arg(
        long,
        default_value_t = 0.0,
        help = "Currency conversion cost: a flat amount, or a percent charged per conversion leg"
    )]
    conversion_cost: f64,
    #[arg(long, value_enum, default_value_t = CliCostKind::Amount)]
    conversion_cost_kind: CliCostKind,
    #[arg(
        long,
        default_value_t = 0.0,
        help = "One-time investment fee: a flat amount, or a percent of principal"
    )]
    investment_fee: f64,
    #[arg(long, value_enum, default_value_t = CliCostKind::Amount)]
    investment_fee_kind: CliCostKind,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct EvaluatePayload {
    principal: Option<f64>,
    exchange_rate: Option<f64>,
    local_rate: Option<f64>,
    foreign_rate: Option<f64>,
    conversion_cost: Option<f64>,
    conversion_cost_kind: Option<ApiCostKind>,
    investment_fee: Option<f64>,
    investment_fee_kind: Option<ApiCostKind>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SeriesResponse {
    label: &'static str,
    data: Vec<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChartResponse {
    labels: Vec<String>,
    series: Vec<SeriesResponse>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EvaluateResponse {
    #[serde(flatten)]
    evaluation: Evaluation,
    verdict: String,
    steps: Vec<String>,
    chart: ChartResponse,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn build_cost_spec(name: &str, value: f64, kind: CliCostKind) -> Result<CostSpec, String> {
    if value < 0.0 {
        return Err(format!("{name} must be >= 0"));
    }

    match kind {
        CliCostKind::Amount => Ok(CostSpec::Flat(value)),
        CliCostKind::Percent => {
            if value > 100.0 {
                return Err(format!("{name} cannot exceed 100 percent"));
            }
            Ok(CostSpec::Percent(value))
        }
    }
}

fn build_params(cli: Cli) -> Result<Params, String> {
    for (name, value) in [
        ("--principal", cli.principal),
        ("--exchange-rate", cli.exchange_rate),
        ("--local-rate", cli.local_rate),
        ("--foreign-rate", cli.foreign_rate),
        ("--conversion-cost", cli.conversion_cost),
        ("--investment-fee", cli.investment_fee),
    ] {
        if !value.is_finite() {
            return Err(format!("{name} must be a finite number"));
        }
    }

    if cli.principal <= 0.0 {
        return Err("--principal must be > 0".to_string());
    }

    if cli.exchange_rate <= 0.0 {
        return Err("--exchange-rate must be > 0".to_string());
    }

    if cli.local_rate < 0.0 {
        return Err("--local-rate must be >= 0".to_string());
    }

    if cli.foreign_rate < 0.0 {
        return Err("--foreign-rate must be >= 0".to_string());
    }

    let conversion_cost = build_cost_spec(
        "--conversion-cost",
        cli.conversion_cost,
        cli.conversion_cost_kind,
    )?;
    let investment_fee = build_cost_spec(
        "--investment-fee",
        cli.investment_fee,
        cli.investment_fee_kind,
    )?;

    Ok(Params {
        principal: cli.principal,
        exchange_rate: cli.exchange_rate,
        local_rate: cli.local_rate / 100.0,
        foreign_rate: cli.foreign_rate / 100.0,
        conversion_cost,
        investment_fee,
    })
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = Router::new()
        .route(
            "/api/evaluate",
            get(evaluate_get_handler).post(evaluate_post_handler),
        )
        .fallback(not_found_handler);

    let listener = TcpListener::bind(addr).await?;
    println!("pegbond HTTP API listening on http://{addr}");
    println!("Local access: http://127.0.0.1:{port}/api/evaluate");

    axum::serve(listener, app).await
}

pub fn run_cli() -> Result<(), String> {
    let cli = Cli::parse();
    let params = build_params(cli)?;
    let evaluation = evaluate(&params);

    for step in calculation_steps(&params, &evaluation) {
        println!("{step}");
    }
    println!();
    println!("{}", verdict(&evaluation.break_even));
    Ok(())
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn evaluate_get_handler(Query(payload): Query<EvaluatePayload>) -> Response {
    evaluate_handler_impl(payload).await
}

async fn evaluate_post_handler(Json(payload): Json<EvaluatePayload>) -> Response {
    evaluate_handler_impl(payload).await
}

async fn evaluate_handler_impl(payload: EvaluatePayload) -> Response {
    let params = match params_from_payload(payload) {
        Ok(params) => params,
        Err(msg) => return error_response(StatusCode::BAD_REQUEST, &msg),
    };

    json_response(StatusCode::OK, build_evaluate_response(&params))
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        "no-store".parse().expect("valid header"),
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
fn params_from_json(json: &str) -> Result<Params, String> {
    let payload = serde_json::from_str::<EvaluatePayload>(json)
        .map_err(|e| format!("Invalid API JSON payload: {e}"))?;
    params_from_payload(payload)
}

fn params_from_payload(payload: EvaluatePayload) -> Result<Params, String> {
    let mut cli = default_cli_for_api();

    if let Some(v) = payload.principal {
        cli.principal = v;
    }
    if let Some(v) = payload.exchange_rate {
        cli.exchange_rate = v;
    }
    if let Some(v) = payload.local_rate {
        cli.local_rate = v;
    }
    if let Some(v) = payload.foreign_rate {
        cli.foreign_rate = v;
    }
    if let Some(v) = payload.conversion_cost {
        cli.conversion_cost = v;
    }
    if let Some(v) = payload.conversion_cost_kind {
        cli.conversion_cost_kind = v.into();
    }
    if let Some(v) = payload.investment_fee {
        cli.investment_fee = v;
    }
    if let Some(v) = payload.investment_fee_kind {
        cli.investment_fee_kind = v.into();
    }

    build_params(cli)
}

fn default_cli_for_api() -> Cli {
    Cli {
        principal: 100_000.0,
        exchange_rate: 7.80,
        local_rate: 4.0,
        foreign_rate: 4.5,
        conversion_cost: 0.1,
        conversion_cost_kind: CliCostKind::Percent,
        investment_fee: 0.05,
        investment_fee_kind: CliCostKind::Percent,
    }
}

fn build_evaluate_response(params: &Params) -> EvaluateResponse {
    let evaluation = evaluate(params);
    let series = projection_series(
        params.principal,
        params.local_rate,
        evaluation.risk.effective_foreign_rate_local,
        evaluation.costs.total_one_time_cost,
        PROJECTION_HORIZON_MONTHS,
    );

    let labels = series.iter().map(|p| month_label(p.month_index)).collect();
    let local_data = series.iter().map(|p| p.local_cumulative).collect();
    let foreign_data = series.iter().map(|p| p.foreign_net_cumulative).collect();

    EvaluateResponse {
        verdict: verdict(&evaluation.break_even),
        steps: calculation_steps(params, &evaluation),
        evaluation,
        chart: ChartResponse {
            labels,
            series: vec![
                SeriesResponse {
                    label: LOCAL_SERIES_LABEL,
                    data: local_data,
                },
                SeriesResponse {
                    label: FOREIGN_SERIES_LABEL,
                    data: foreign_data,
                },
            ],
        },
    }
}
