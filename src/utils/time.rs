//! Time utilities: the history clock and its display format.

use chrono::{Local, TimeZone};

/// Current instant in Unix epoch milliseconds.
pub fn now_millis() -> i64 {
    Local::now().timestamp_millis()
}

/// Local `HH:MM` for an epoch-millisecond timestamp, `--:--` if out of range.
pub fn format_clock(millis: i64) -> String {
    match Local.timestamp_millis_opt(millis).single() {
        Some(dt) => dt.format("%H:%M").to_string(),
        None => "--:--".to_string(),
    }
}
