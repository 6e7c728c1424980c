pub mod binance;

use crate::models::Interval;
use crate::{Error, Result};

/// Bounds enforced by the upstream kline endpoint on the `limit` parameter.
pub const MIN_KLINE_LIMIT: u32 = 1;
pub const MAX_KLINE_LIMIT: u32 = 1000;

#[derive(Clone, Debug)]
pub struct KlineRequest {
    pub symbol: String,
    pub interval: Interval,
    pub limit: u32,
}

impl KlineRequest {
    pub fn new(symbol: impl Into<String>, interval: Interval, limit: u32) -> Result<Self> {
        let symbol = symbol.into();
        if symbol.trim().is_empty() {
            return Err(Error::format("symbol must be non-empty"));
        }
        if !(MIN_KLINE_LIMIT..=MAX_KLINE_LIMIT).contains(&limit) {
            return Err(Error::format(format!(
                "limit must be between {MIN_KLINE_LIMIT} and {MAX_KLINE_LIMIT}, got {limit}"
            )));
        }
        Ok(Self {
            symbol,
            interval,
            limit,
        })
    }
}
