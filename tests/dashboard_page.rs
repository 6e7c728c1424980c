use wickview::app::ui_server::DASHBOARD_HTML;

#[test]
fn page_wires_the_fetch_trigger() {
    assert!(DASHBOARD_HTML.contains("/api/klines"));
    assert!(DASHBOARD_HTML.contains("/api/config"));
    assert!(DASHBOARD_HTML.contains("id=\"fetch\""));
}

#[test]
fn page_has_interval_and_limit_controls() {
    assert!(DASHBOARD_HTML.contains("id=\"interval\""));
    assert!(DASHBOARD_HTML.contains("id=\"limit\""));
    assert!(DASHBOARD_HTML.contains("type=\"range\""));
}

#[test]
fn page_renders_a_candlestick_chart_without_rangeslider() {
    assert!(DASHBOARD_HTML.contains("candlestick"));
    assert!(DASHBOARD_HTML.contains("rangeslider: { visible: false }"));
    assert!(DASHBOARD_HTML.contains("Candlestick Chart"));
}

#[test]
fn page_carries_all_twelve_columns() {
    for column in [
        "open_time",
        "open",
        "high",
        "low",
        "close",
        "volume",
        "close_time",
        "quote_asset_volume",
        "trades",
        "taker_base_vol",
        "taker_quote_vol",
        "ignore",
    ] {
        assert!(DASHBOARD_HTML.contains(column), "missing column {column}");
    }
}

#[test]
fn empty_result_message_is_informational() {
    assert!(DASHBOARD_HTML.contains("No data received"));
}
