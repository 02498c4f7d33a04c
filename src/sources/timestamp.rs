//! Lenient timestamp normalization for upstream `pubDate`-style fields.
//!
//! Upstream feeds mix epoch seconds, epoch milliseconds, numeric strings, and
//! formatted date strings. Everything is coerced to epoch seconds; anything
//! unparseable degrades to "now" so a bad date never drops an article.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

/// Values above this are epoch milliseconds.
const MILLIS_ABOVE: f64 = 1e12;
/// Values below this are epoch seconds.
const SECONDS_BELOW: f64 = 1e10;

/// Naive (zone-less) layouts tried after RFC 3339 and RFC 2822; read as UTC.
const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// What: Normalize an arbitrary JSON timestamp to epoch seconds using the wall clock.
///
/// Inputs:
/// - `input`: Raw JSON value (number, string, `null`, or anything else).
///
/// Output:
/// - Epoch seconds; the current time when the input cannot be interpreted.
#[must_use]
pub fn normalize_timestamp(input: &Value) -> i64 {
    normalize_timestamp_at(input, Utc::now().timestamp())
}

/// What: Normalize a timestamp with an explicit "now" used for every fallback.
///
/// Inputs:
/// - `input`: Raw JSON value.
/// - `now`: Epoch seconds returned when `input` is absent or unparseable.
///
/// Output:
/// - Epoch seconds.
///
/// Details:
/// - Numbers: `> 1e12` are milliseconds, `< 1e10` are seconds, and the band in
///   between is treated as milliseconds. Fractions are floored.
/// - Strings: numeric text is handled as a number first; then RFC 3339,
///   RFC 2822, naive `YYYY-MM-DD[ T]HH:MM:SS[.f]` (UTC), and `YYYY-MM-DD`
///   (midnight UTC) are tried in that order.
/// - `null`, booleans, arrays, objects, and empty strings yield `now`.
#[must_use]
pub fn normalize_timestamp_at(input: &Value, now: i64) -> i64 {
    match input {
        Value::Number(n) => n.as_f64().map_or(now, |f| from_number(f, now)),
        Value::String(s) => from_text(s, now),
        _ => now,
    }
}

/// Apply the magnitude heuristic to a numeric timestamp.
#[allow(clippy::cast_possible_truncation)]
fn from_number(n: f64, now: i64) -> i64 {
    if !n.is_finite() {
        return now;
    }
    let secs = if n > MILLIS_ABOVE || n >= SECONDS_BELOW {
        n / 1000.0
    } else {
        n
    };
    // `as` saturates on overflow, which is the right clamp for absurd inputs.
    secs.floor() as i64
}

/// Parse a textual timestamp: numeric first, then the supported date layouts.
fn from_text(raw: &str, now: i64) -> i64 {
    let s = raw.trim();
    if s.is_empty() {
        return now;
    }
    if let Ok(n) = s.parse::<f64>() {
        return from_number(n, now);
    }
    parse_date_text(s).unwrap_or(now)
}

/// What: Parse a date string in one of the supported layouts.
///
/// Output:
/// - `Some(epoch_seconds)` on success; `None` when no layout matches.
fn parse_date_text(s: &str) -> Option<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.timestamp());
    }
    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(ndt.and_utc().timestamp());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|ndt| ndt.and_utc().timestamp())
}
