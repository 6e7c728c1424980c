use crate::data::{MAX_KLINE_LIMIT, MIN_KLINE_LIMIT};
use crate::models::Interval;
use crate::{Error, Result};
use serde::Deserialize;
use std::env;
use std::fs;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub addr: String,
}

#[derive(Clone, Debug)]
pub struct DataConfig {
    pub base_url: String,
    pub default_interval: String,
    pub default_limit: u32,
    pub min_limit: u32,
    pub max_limit: u32,
    pub timeout_secs: u64,
}

#[derive(Clone, Debug)]
pub struct ChartConfig {
    pub height: u32,
    pub theme: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub symbol: String,
    pub quote_asset: String,
    pub server: ServerConfig,
    pub data: DataConfig,
    pub chart: ChartConfig,
}

#[derive(Clone, Debug, Deserialize)]
struct ServerConfigFile {
    addr: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
struct DataConfigFile {
    base_url: Option<String>,
    default_interval: Option<String>,
    default_limit: Option<u32>,
    min_limit: Option<u32>,
    max_limit: Option<u32>,
    timeout_secs: Option<u64>,
}

#[derive(Clone, Debug, Deserialize)]
struct ChartConfigFile {
    height: Option<u32>,
    theme: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
struct ConfigFile {
    symbol: Option<String>,
    quote_asset: Option<String>,
    server: Option<ServerConfigFile>,
    data: Option<DataConfigFile>,
    chart: Option<ChartConfigFile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            symbol: "BTCUSDT".to_string(),
            quote_asset: "USDT".to_string(),
            server: ServerConfig {
                addr: "127.0.0.1:8088".to_string(),
            },
            data: DataConfig {
                base_url: "https://api.binance.com".to_string(),
                default_interval: "15m".to_string(),
                default_limit: 200,
                min_limit: 50,
                max_limit: 500,
                timeout_secs: 30,
            },
            chart: ChartConfig {
                height: 600,
                theme: "dark".to_string(),
            },
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|err| Error::config(format!("failed to read config: {err}")))?;
        let file: ConfigFile = toml::from_str(&content)
            .map_err(|err| Error::config(format!("failed to parse config: {err}")))?;
        let mut config = Config::from_file(file);
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(file: ConfigFile) -> Self {
        let mut config = Config::default();

        if let Some(symbol) = file.symbol {
            config.symbol = symbol;
        }
        if let Some(quote_asset) = file.quote_asset {
            config.quote_asset = quote_asset;
        }

        if let Some(server) = file.server {
            if let Some(value) = server.addr {
                config.server.addr = value;
            }
        }

        if let Some(data) = file.data {
            if let Some(value) = data.base_url {
                config.data.base_url = value;
            }
            if let Some(value) = data.default_interval {
                config.data.default_interval = value;
            }
            if let Some(value) = data.default_limit {
                config.data.default_limit = value;
            }
            if let Some(value) = data.min_limit {
                config.data.min_limit = value;
            }
            if let Some(value) = data.max_limit {
                config.data.max_limit = value;
            }
            if let Some(value) = data.timeout_secs {
                config.data.timeout_secs = value;
            }
        }

        if let Some(chart) = file.chart {
            if let Some(value) = chart.height {
                config.chart.height = value;
            }
            if let Some(value) = chart.theme {
                config.chart.theme = value;
            }
        }

        config
    }

    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(value) = read_string_env("WICKVIEW_SYMBOL")? {
            self.symbol = value;
        }
        if let Some(value) = read_string_env("WICKVIEW_QUOTE_ASSET")? {
            self.quote_asset = value;
        }
        if let Some(value) = read_string_env("WICKVIEW_ADDR")? {
            self.server.addr = value;
        }
        if let Some(value) = read_string_env("WICKVIEW_BASE_URL")? {
            self.data.base_url = value;
        }
        if let Some(value) = read_string_env("WICKVIEW_DEFAULT_INTERVAL")? {
            self.data.default_interval = value;
        }
        if let Some(value) = read_u32_env("WICKVIEW_DEFAULT_LIMIT")? {
            self.data.default_limit = value;
        }
        if let Some(value) = read_u32_env("WICKVIEW_MIN_LIMIT")? {
            self.data.min_limit = value;
        }
        if let Some(value) = read_u32_env("WICKVIEW_MAX_LIMIT")? {
            self.data.max_limit = value;
        }
        if let Some(value) = read_u64_env("WICKVIEW_HTTP_TIMEOUT_SECS")? {
            self.data.timeout_secs = value;
        }
        if let Some(value) = read_u32_env("WICKVIEW_CHART_HEIGHT")? {
            self.chart.height = value;
        }
        if let Some(value) = read_string_env("WICKVIEW_CHART_THEME")? {
            self.chart.theme = value;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.symbol.trim().is_empty() {
            return Err(Error::config("symbol must be set"));
        }
        if self.quote_asset.trim().is_empty() {
            return Err(Error::config("quote_asset must be set"));
        }
        if self.server.addr.trim().is_empty() {
            return Err(Error::config("server.addr must be set"));
        }

        if self.data.base_url.trim().is_empty() {
            return Err(Error::config("data.base_url must be set"));
        }
        Interval::parse(&self.data.default_interval)
            .map_err(|err| Error::config(format!("data.default_interval: {}", err.message)))?;
        if self.data.min_limit < MIN_KLINE_LIMIT {
            return Err(Error::config(format!(
                "data.min_limit must be at least {MIN_KLINE_LIMIT}"
            )));
        }
        if self.data.max_limit > MAX_KLINE_LIMIT {
            return Err(Error::config(format!(
                "data.max_limit must be at most {MAX_KLINE_LIMIT}"
            )));
        }
        if self.data.min_limit > self.data.max_limit {
            return Err(Error::config("data.min_limit must be <= data.max_limit"));
        }
        if !(self.data.min_limit..=self.data.max_limit).contains(&self.data.default_limit) {
            return Err(Error::config(
                "data.default_limit must be within [min_limit, max_limit]",
            ));
        }
        if self.data.timeout_secs == 0 {
            return Err(Error::config("data.timeout_secs must be positive"));
        }

        if self.chart.height == 0 {
            return Err(Error::config("chart.height must be positive"));
        }
        match self.chart.theme.as_str() {
            "dark" | "light" => {}
            _ => return Err(Error::config("chart.theme must be dark or light")),
        }

        Ok(())
    }
}

fn read_string_env(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(Error::config(format!("failed to read {key}: {err}"))),
    }
}

fn read_u32_env(key: &str) -> Result<Option<u32>> {
    match env::var(key) {
        Ok(value) => value
            .parse::<u32>()
            .map(Some)
            .map_err(|err| Error::config(format!("{key} must be u32: {err}"))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(Error::config(format!("failed to read {key}: {err}"))),
    }
}

fn read_u64_env(key: &str) -> Result<Option<u64>> {
    match env::var(key) {
        Ok(value) => value
            .parse::<u64>()
            .map(Some)
            .map_err(|err| Error::config(format!("{key} must be u64: {err}"))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(Error::config(format!("failed to read {key}: {err}"))),
    }
}
