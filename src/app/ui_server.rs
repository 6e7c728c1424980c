use crate::config::Config;
use crate::data::binance::BinanceClient;
use crate::data::KlineRequest;
use crate::models::{Interval, Kline};
use crate::{Error, ErrorKind, Result};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Json;
use axum::Router;
use serde::Deserialize;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tokio::task::spawn_blocking;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

pub const DASHBOARD_HTML: &str = include_str!("dashboard.html");

struct UiState {
    config: Config,
}

#[derive(Serialize)]
struct Health {
    status: &'static str,
    symbol: String,
    base_url: String,
    timestamp: i64,
}

/// Serialize view of one kline: timestamps as RFC 3339 strings, everything
/// else as the fetcher produced it.
#[derive(Serialize)]
struct KlineRow {
    open_time: String,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: f64,
    close_time: String,
    quote_asset_volume: String,
    trades: i64,
    taker_base_vol: String,
    taker_quote_vol: String,
    ignore: String,
}

#[derive(Serialize)]
struct KlinesResponse {
    symbol: String,
    interval: &'static str,
    count: usize,
    rows: Vec<KlineRow>,
}

#[derive(Deserialize)]
struct KlinesQuery {
    interval: Option<String>,
    limit: Option<u32>,
}

pub async fn run(addr: &str, config: Config) -> Result<()> {
    let state = UiState { config };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(dashboard))
        .route("/api/health", get(health))
        .route("/api/config", get(config_view))
        .route("/api/klines", get(klines))
        .with_state(Arc::new(state))
        .layer(cors);

    info!(addr, "dashboard listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|err| Error::transport(format!("bind failed: {err}")))?;
    axum::serve(listener, app)
        .await
        .map_err(|err| Error::transport(format!("server error: {err}")))?;
    Ok(())
}

async fn dashboard() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

async fn health(State(state): State<Arc<UiState>>) -> impl IntoResponse {
    let response = Health {
        status: "ok",
        symbol: state.config.symbol.clone(),
        base_url: state.config.data.base_url.clone(),
        timestamp: now_epoch(),
    };
    Json(response)
}

async fn config_view(State(state): State<Arc<UiState>>) -> impl IntoResponse {
    let config = &state.config;
    let intervals: Vec<&'static str> = Interval::all()
        .iter()
        .map(|interval| interval.as_str())
        .collect();
    Json(json!({
        "symbol": config.symbol,
        "quote_asset": config.quote_asset,
        "intervals": intervals,
        "default_interval": config.data.default_interval,
        "min_limit": config.data.min_limit,
        "max_limit": config.data.max_limit,
        "default_limit": config.data.default_limit,
        "chart": {
            "height": config.chart.height,
            "theme": config.chart.theme,
        },
    }))
}

async fn klines(
    State(state): State<Arc<UiState>>,
    Query(query): Query<KlinesQuery>,
) -> impl IntoResponse {
    match fetch_klines(state, query).await {
        Ok(response) => Json(response).into_response(),
        Err(err) => {
            warn!(kind = kind_label(err.kind), message = %err.message, "kline fetch failed");
            (
                error_status(err.kind),
                Json(json!({ "error": err.message, "kind": kind_label(err.kind) })),
            )
                .into_response()
        }
    }
}

async fn fetch_klines(state: Arc<UiState>, query: KlinesQuery) -> Result<KlinesResponse> {
    let interval = match query.interval.as_deref() {
        Some(value) => Interval::parse(value)?,
        None => Interval::parse(&state.config.data.default_interval)?,
    };
    let limit = query.limit.unwrap_or(state.config.data.default_limit);
    let request = KlineRequest::new(state.config.symbol.clone(), interval, limit)?;
    let symbol = request.symbol.clone();

    // the fetcher blocks, keep it off the runtime workers
    let worker = state.clone();
    let klines = spawn_blocking(move || {
        let client = BinanceClient::new(&worker.config)?;
        client.fetch_klines(&request)
    })
    .await
    .map_err(|err| Error::new(format!("join failed: {err}")))??;

    Ok(KlinesResponse {
        symbol,
        interval: interval.as_str(),
        count: klines.len(),
        rows: klines.iter().map(kline_row).collect(),
    })
}

fn kline_row(kline: &Kline) -> KlineRow {
    KlineRow {
        open_time: kline.open_time.to_rfc3339(),
        open: kline.open,
        high: kline.high,
        low: kline.low,
        close: kline.close,
        volume: kline.volume,
        close_time: kline.close_time.to_rfc3339(),
        quote_asset_volume: kline.quote_asset_volume.clone(),
        trades: kline.trades,
        taker_base_vol: kline.taker_base_vol.clone(),
        taker_quote_vol: kline.taker_quote_vol.clone(),
        ignore: kline.ignore.clone(),
    }
}

fn error_status(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Transport => StatusCode::BAD_GATEWAY,
        ErrorKind::Format => StatusCode::BAD_REQUEST,
        ErrorKind::Config | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn kind_label(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Config => "config",
        ErrorKind::Transport => "transport",
        ErrorKind::Format => "format",
        ErrorKind::Internal => "internal",
    }
}

fn now_epoch() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|duration| duration.as_secs() as i64)
        .unwrap_or(0)
}
