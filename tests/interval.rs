use wickview::models::Interval;
use wickview::ErrorKind;

#[test]
fn parses_supported_intervals() {
    for value in ["1m", "5m", "15m", "1h", "4h", "1d"] {
        let interval = Interval::parse(value).expect(value);
        assert_eq!(interval.as_str(), value);
    }
}

#[test]
fn rejects_unsupported_intervals() {
    for value in ["2m", "30m", "1w", "1M", "", "fifteen"] {
        let err = Interval::parse(value).expect_err(value);
        assert_eq!(err.kind, ErrorKind::Format);
    }
}

#[test]
fn all_lists_six_intervals() {
    let all = Interval::all();
    assert_eq!(all.len(), 6);
    assert_eq!(all[0].as_str(), "1m");
    assert_eq!(all[5].as_str(), "1d");
}

#[test]
fn parse_trims_whitespace() {
    assert_eq!(Interval::parse(" 15m ").expect("15m").as_str(), "15m");
}
