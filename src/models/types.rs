use crate::{Error, Result};
use chrono::{DateTime, Utc};

/// Candle duration supported by the upstream kline endpoint. The set is
/// closed: any other value is rejected at parse time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interval {
    M1,
    M5,
    M15,
    H1,
    H4,
    D1,
}

impl Interval {
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim() {
            "1m" => Ok(Self::M1),
            "5m" => Ok(Self::M5),
            "15m" => Ok(Self::M15),
            "1h" => Ok(Self::H1),
            "4h" => Ok(Self::H4),
            "1d" => Ok(Self::D1),
            other => Err(Error::format(format!("unsupported interval: {other}"))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::M1 => "1m",
            Self::M5 => "5m",
            Self::M15 => "15m",
            Self::H1 => "1h",
            Self::H4 => "4h",
            Self::D1 => "1d",
        }
    }

    pub fn all() -> [Interval; 6] {
        [
            Self::M1,
            Self::M5,
            Self::M15,
            Self::H1,
            Self::H4,
            Self::D1,
        ]
    }
}

/// One OHLCV row as the upstream kline endpoint defines it: twelve positional
/// fields per candle. Prices and volume are coerced to floats, the two time
/// fields to UTC timestamps; the remaining fields pass through unconverted.
#[derive(Clone, Debug, PartialEq)]
pub struct Kline {
    pub open_time: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub close_time: DateTime<Utc>,
    pub quote_asset_volume: String,
    pub trades: i64,
    pub taker_base_vol: String,
    pub taker_quote_vol: String,
    pub ignore: String,
}
