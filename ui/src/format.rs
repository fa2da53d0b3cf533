//! Text formatting shared by the screens.

use chrono::DateTime;
use web_time::SystemTime;
use web_time::UNIX_EPOCH;

/// Keeps the first `head` and last `tail` characters, joined by "...".
/// Strings that are not longer than `head + tail` are returned unchanged.
pub fn abbreviate(s: &str, head: usize, tail: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= head + tail {
        return s.to_string();
    }
    let first: String = s.chars().take(head).collect();
    let last: String = s.chars().skip(char_count - tail).collect();
    format!("{first}...{last}")
}

/// Unix seconds as `2024-05-01 12:00:00 UTC`.
pub fn utc_timestamp(secs: u64) -> String {
    i64::try_from(secs)
        .ok()
        .and_then(|s| DateTime::from_timestamp(s, 0))
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| secs.to_string())
}

/// Wall clock time as `HH:MM:SS UTC`, for "last updated" labels.
pub fn utc_clock(secs: u64) -> String {
    i64::try_from(secs)
        .ok()
        .and_then(|s| DateTime::from_timestamp(s, 0))
        .map(|dt| dt.format("%H:%M:%S UTC").to_string())
        .unwrap_or_default()
}

pub fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// How long before `now` the unix time `then` was, e.g. `3 mins ago`.
pub fn time_ago(then: u64, now: u64) -> String {
    let secs = now.saturating_sub(then);
    let (value, unit) = match secs {
        0..=59 => (secs, "sec"),
        60..=3_599 => (secs / 60, "min"),
        3_600..=86_399 => (secs / 3_600, "hr"),
        _ => (secs / 86_400, "day"),
    };
    let plural = if value == 1 { "" } else { "s" };
    format!("{value} {unit}{plural} ago")
}

/// Average block time as seconds with one decimal, e.g. `12.1s`.
pub fn block_time(seconds: Option<f64>) -> String {
    match seconds {
        Some(s) => format!("{s:.1}s"),
        None => api::market::NOT_AVAILABLE.to_string(),
    }
}

/// Thousands separated integer, e.g. `20,123,456`.
pub fn grouped(n: u64) -> String {
    api::fiat_amount::group_thousands(&n.to_string())
}

/// Price with two decimals and the currency symbol, e.g. `$2,301.46`.
pub fn price(value: f64, fiat: api::fiat_currency::FiatCurrency) -> String {
    api::fiat_amount::FiatAmount::new_from_float(value, fiat).to_string_with_symbol()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH: &str = "0x8e38b4dbf6b11fcc3b9dee84fb7986e29ca0a02cecd8977c161ff7333329681e";

    #[test]
    fn abbreviates_long_strings_only() {
        assert_eq!(abbreviate("abcdefgh", 4, 4), "abcdefgh");
        assert_eq!(abbreviate("abcdefghij", 4, 4), "abcd...ghij");
        assert_eq!(abbreviate(HASH, 10, 8), "0x8e38b4db...3329681e");
    }

    #[test]
    fn formats_utc_timestamps() {
        assert_eq!(utc_timestamp(0), "1970-01-01 00:00:00 UTC");
        assert_eq!(utc_timestamp(1_700_000_000), "2023-11-14 22:13:20 UTC");
        assert_eq!(utc_clock(1_700_000_000), "22:13:20 UTC");
    }

    #[test]
    fn time_ago_picks_unit() {
        assert_eq!(time_ago(100, 101), "1 sec ago");
        assert_eq!(time_ago(100, 100), "0 secs ago");
        assert_eq!(time_ago(0, 150), "2 mins ago");
        assert_eq!(time_ago(0, 7_200), "2 hrs ago");
        assert_eq!(time_ago(0, 86_400), "1 day ago");
        // clock skew: block from the future
        assert_eq!(time_ago(200, 100), "0 secs ago");
    }

    #[test]
    fn block_time_and_grouping() {
        assert_eq!(block_time(Some(12.06)), "12.1s");
        assert_eq!(block_time(None), "N/A");
        assert_eq!(grouped(20_123_456), "20,123,456");
        assert_eq!(grouped(999), "999");
    }
}
