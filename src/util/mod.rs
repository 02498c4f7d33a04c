//! Small utility helpers for lenient JSON field lookup, text shortening,
//! dates, and opening links.
//!
//! The JSON helpers implement "first present alias wins" lookups used by the
//! normalizers: a key whose value is JSON `null` counts as absent.

pub mod config;

use serde_json::Value;

/// What: Return the value of the first candidate key that is present and not `null`.
///
/// Inputs:
/// - `v`: JSON value to inspect (non-objects never match).
/// - `keys`: Candidate keys in priority order.
///
/// Output:
/// - `Some(&Value)` for the first usable key, `None` otherwise.
#[must_use]
pub fn first_present<'a>(v: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|k| v.get(*k))
        .find(|x| !x.is_null())
}

/// What: Extract the first available string from a list of candidate keys.
///
/// Inputs:
/// - `v`: JSON value to extract from.
/// - `keys`: Array of candidate keys to try in order.
///
/// Output:
/// - Returns `Some(String)` for the first key that maps to a JSON string, or `None` if none match.
///
/// Details:
/// - Keys holding non-string values are skipped rather than stopping the search.
#[must_use]
pub fn ss(v: &Value, keys: &[&str]) -> Option<String> {
    for k in keys {
        if let Some(s) = v.get(*k).and_then(|x| x.as_str()) {
            return Some(s.to_owned());
        }
    }
    None
}

/// What: Like [`ss`], but treats empty or whitespace-only strings as absent.
#[must_use]
pub fn ss_non_empty(v: &Value, keys: &[&str]) -> Option<String> {
    for k in keys {
        if let Some(s) = v.get(*k).and_then(|x| x.as_str())
            && !s.trim().is_empty()
        {
            return Some(s.to_owned());
        }
    }
    None
}

/// What: Interpret a JSON value as an integer identifier.
///
/// Inputs:
/// - `v`: JSON number or numeric string.
///
/// Output:
/// - `Some(i64)` when the value is an integral number (or a float with no fractional
///   part) or a string that parses as one; `None` otherwise.
#[must_use]
pub fn as_id(v: &Value) -> Option<i64> {
    if let Some(i) = v.as_i64() {
        return Some(i);
    }
    if let Some(f) = v.as_f64()
        && f.fract().abs() < f64::EPSILON
        && f.abs() < 9.0e15
    {
        #[allow(clippy::cast_possible_truncation)]
        return Some(f as i64);
    }
    v.as_str().and_then(|s| s.trim().parse::<i64>().ok())
}

/// What: Extract an integer id by trying multiple keys and representations.
///
/// Inputs:
/// - `v`: JSON value to extract from.
/// - `keys`: Candidate keys in priority order.
///
/// Output:
/// - The first key that converts through [`as_id`]; `None` if none do.
#[must_use]
pub fn id_of(v: &Value, keys: &[&str]) -> Option<i64> {
    keys.iter().filter_map(|k| v.get(*k)).find_map(as_id)
}

/// What: Shorten text to at most `max` characters, appending `...` when cut.
///
/// Inputs:
/// - `text`: Text to shorten.
/// - `max`: Maximum number of characters kept before the ellipsis.
///
/// Output:
/// - The original text when short enough; otherwise the first `max` characters plus `...`.
///
/// Details:
/// - Counts Unicode scalar values, never splitting a multi-byte character.
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

/// What: Convert a Unix timestamp (seconds) to a UTC date-time string.
///
/// Inputs:
/// - `ts`: Unix timestamp in seconds since epoch.
///
/// Output:
/// - `YYYY-MM-DD HH:MM:SS` (UTC), or the numeric string when out of chrono's range.
#[must_use]
pub fn ts_to_date(ts: i64) -> String {
    chrono::DateTime::from_timestamp(ts, 0).map_or_else(
        || ts.to_string(),
        |dt| dt.format("%Y-%m-%d %H:%M:%S").to_string(),
    )
}

/// What: Open a URL in the default browser (cross-platform).
///
/// Inputs:
/// - `url`: URL string to open.
///
/// Output:
/// - No return value; spawns a background process to open the URL.
///
/// Details:
/// - Uses `xdg-open` when available (Linux), `open` otherwise (macOS), and
///   `cmd /c start` on Windows.
/// - Spawns the command in a background thread and ignores errors.
/// - During tests, this is a no-op to avoid opening real browser windows.
#[cfg_attr(test, allow(unused_variables))]
#[allow(clippy::missing_const_for_fn)]
pub fn open_url(url: &str) {
    #[cfg(not(test))]
    {
        let url = url.to_string();
        std::thread::spawn(move || {
            #[cfg(target_os = "windows")]
            {
                let _ = std::process::Command::new("cmd")
                    .args(["/c", "start", "", &url])
                    .stdin(std::process::Stdio::null())
                    .stdout(std::process::Stdio::null())
                    .stderr(std::process::Stdio::null())
                    .spawn();
            }
            #[cfg(not(target_os = "windows"))]
            {
                let opener = if which::which("xdg-open").is_ok() {
                    "xdg-open"
                } else {
                    "open"
                };
                if let Err(e) = std::process::Command::new(opener)
                    .arg(&url)
                    .stdin(std::process::Stdio::null())
                    .stdout(std::process::Stdio::null())
                    .stderr(std::process::Stdio::null())
                    .spawn()
                {
                    tracing::warn!(error = %e, opener, "failed to open link");
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Validate the alias lookup helpers across nulls, wrong types, and numeric strings.
    ///
    /// Inputs:
    /// - A record mixing `null`, numbers, numeric strings, and blank strings.
    ///
    /// Output:
    /// - `null` entries are skipped, ids parse from numbers and strings, blanks are ignored
    ///   by `ss_non_empty` only.
    fn util_alias_lookup_helpers() {
        let v = serde_json::json!({
            "id": null,
            "_id": 7,
            "title": "",
            "name": "عنوان",
            "n": "42",
            "f": 3.0,
            "bad": "x1",
        });
        assert_eq!(first_present(&v, &["id", "_id"]), Some(&serde_json::json!(7)));
        assert!(first_present(&v, &["missing"]).is_none());
        assert_eq!(ss(&v, &["title", "name"]).as_deref(), Some(""));
        assert_eq!(ss_non_empty(&v, &["title", "name"]).as_deref(), Some("عنوان"));
        assert_eq!(id_of(&v, &["n"]), Some(42));
        assert_eq!(id_of(&v, &["f"]), Some(3));
        assert_eq!(id_of(&v, &["bad", "_id"]), Some(7));
        assert_eq!(id_of(&serde_json::json!("text"), &["id"]), None);
    }

    #[test]
    /// What: Ensure truncation counts characters rather than bytes.
    ///
    /// Inputs:
    /// - ASCII and Persian strings shorter and longer than the limit.
    ///
    /// Output:
    /// - Short strings are untouched; long ones are cut at a char boundary with `...`.
    fn util_truncate_chars_respects_char_boundaries() {
        assert_eq!(truncate_chars("abc", 5), "abc");
        assert_eq!(truncate_chars("abcdef", 3), "abc...");
        assert_eq!(truncate_chars("سلام دنیا", 4), "سلام...");
        assert_eq!(truncate_chars("", 0), "");
    }

    #[test]
    /// What: Format epoch seconds as a UTC date-time.
    fn util_ts_to_date_formats_utc() {
        assert_eq!(ts_to_date(0), "1970-01-01 00:00:00");
        assert_eq!(ts_to_date(1_700_000_000), "2023-11-14 22:13:20");
    }
}
