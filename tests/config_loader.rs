use std::env;
use std::fs;
use std::path::PathBuf;
use wickview::config::Config;

fn temp_config_path(name: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("wickview_{name}.toml"));
    path
}

#[test]
fn loads_config_and_applies_env_overrides() {
    let path = temp_config_path("config_loader");
    let content = r#"
symbol = "BTCUSDT"
quote_asset = "USDT"

[server]
addr = "127.0.0.1:9000"

[data]
base_url = "https://api.binance.com"
default_interval = "1h"
default_limit = 100
min_limit = 50
max_limit = 500
timeout_secs = 10

[chart]
height = 480
theme = "dark"
"#;

    fs::write(&path, content).expect("write temp config");
    env::set_var("WICKVIEW_SYMBOL", "ETHUSDT");
    env::set_var("WICKVIEW_DEFAULT_LIMIT", "150");

    let config = Config::load(path.to_str().expect("path")).expect("load config");

    assert_eq!(config.symbol, "ETHUSDT");
    assert_eq!(config.data.default_limit, 150);
    assert_eq!(config.server.addr, "127.0.0.1:9000");
    assert_eq!(config.data.default_interval, "1h");
    assert_eq!(config.chart.height, 480);

    env::remove_var("WICKVIEW_SYMBOL");
    env::remove_var("WICKVIEW_DEFAULT_LIMIT");
    let _ = fs::remove_file(&path);
}

#[test]
fn partial_file_falls_back_to_defaults() {
    // Only fields no other test overrides through the environment are
    // asserted here; tests in this binary run in parallel.
    let path = temp_config_path("config_partial");
    fs::write(&path, "quote_asset = \"USDC\"\n").expect("write temp config");

    let config = Config::load(path.to_str().expect("path")).expect("load config");

    assert_eq!(config.quote_asset, "USDC");
    assert_eq!(config.data.base_url, "https://api.binance.com");
    assert_eq!(config.data.min_limit, 50);
    assert_eq!(config.data.max_limit, 500);
    assert_eq!(config.chart.theme, "dark");

    let _ = fs::remove_file(&path);
}

#[test]
fn missing_file_is_config_error() {
    let err = Config::load("/nonexistent/wickview.toml").expect_err("should fail");
    assert_eq!(err.kind, wickview::ErrorKind::Config);
}

#[test]
fn invalid_toml_is_config_error() {
    let path = temp_config_path("config_invalid");
    fs::write(&path, "symbol = [not toml").expect("write temp config");

    let err = Config::load(path.to_str().expect("path")).expect_err("should fail");
    assert_eq!(err.kind, wickview::ErrorKind::Config);

    let _ = fs::remove_file(&path);
}
