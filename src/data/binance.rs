use crate::config::Config;
use crate::data::KlineRequest;
use crate::models::Kline;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::info;

pub struct BinanceClient {
    client: Client,
    base_url: String,
}

impl BinanceClient {
    pub fn new(config: &Config) -> Result<Self> {
        let base_url = config.data.base_url.trim();
        if base_url.is_empty() {
            return Err(Error::config("data.base_url must be set"));
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(config.data.timeout_secs.max(1)))
            .build()
            .map_err(|err| Error::new(format!("http client build failed: {err}")))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// One blocking GET against the kline endpoint. No retries and no
    /// caching; the result is a function of the request parameters and
    /// whatever the upstream returns.
    pub fn fetch_klines(&self, req: &KlineRequest) -> Result<Vec<Kline>> {
        let url = format!("{}/api/v3/klines", self.base_url);
        let query = vec![
            ("symbol".to_string(), req.symbol.clone()),
            ("interval".to_string(), req.interval.as_str().to_string()),
            ("limit".to_string(), req.limit.to_string()),
        ];

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .map_err(|err| Error::transport(format!("http request failed: {err}")))?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::transport(format!("binance response status: {status}")));
        }
        let text = response
            .text()
            .map_err(|err| Error::transport(format!("http read failed: {err}")))?;

        let klines = parse_klines(&text)?;
        info!(
            symbol = %req.symbol,
            interval = req.interval.as_str(),
            limit = req.limit,
            rows = klines.len(),
            "fetched klines"
        );
        Ok(klines)
    }
}

/// Maps the upstream list-of-arrays payload into typed rows. Upstream order
/// is preserved; a valid empty list yields an empty result.
pub fn parse_klines(payload: &str) -> Result<Vec<Kline>> {
    let data: Vec<Vec<Value>> = serde_json::from_str(payload)
        .map_err(|err| Error::format(format!("json parse failed: {err}")))?;

    let mut klines = Vec::with_capacity(data.len());
    for row in &data {
        if row.len() < 12 {
            return Err(Error::format("kline row has insufficient fields"));
        }
        klines.push(Kline {
            open_time: timestamp_from_ms(value_to_i64(&row[0])?)?,
            open: value_to_f64(&row[1])?,
            high: value_to_f64(&row[2])?,
            low: value_to_f64(&row[3])?,
            close: value_to_f64(&row[4])?,
            volume: value_to_f64(&row[5])?,
            close_time: timestamp_from_ms(value_to_i64(&row[6])?)?,
            quote_asset_volume: value_to_string(&row[7]),
            trades: value_to_i64(&row[8])?,
            taker_base_vol: value_to_string(&row[9]),
            taker_quote_vol: value_to_string(&row[10]),
            ignore: value_to_string(&row[11]),
        });
    }
    Ok(klines)
}

fn timestamp_from_ms(ms: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(ms)
        .ok_or_else(|| Error::format(format!("timestamp out of range: {ms}")))
}

fn value_to_i64(value: &Value) -> Result<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .ok_or_else(|| Error::format("number is not i64")),
        Value::String(text) => text
            .parse::<i64>()
            .map_err(|err| Error::format(format!("invalid i64: {err}"))),
        _ => Err(Error::format("unexpected value type for i64")),
    }
}

fn value_to_f64(value: &Value) -> Result<f64> {
    let parsed = match value {
        Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| Error::format("number is not f64"))?,
        Value::String(text) => text
            .parse::<f64>()
            .map_err(|err| Error::format(format!("invalid f64: {err}")))?,
        _ => return Err(Error::format("unexpected value type for f64")),
    };
    if !parsed.is_finite() {
        return Err(Error::format("value is not a finite number"));
    }
    Ok(parsed)
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
