//! Text formatting shared by the TUI and `--print` output.

use unicode_width::UnicodeWidthStr;

use crate::util::truncate_chars;

/// Characters of article content shown in previews.
pub const CONTENT_PREVIEW_CHARS: usize = 200;

const MINUTE: i64 = 60;
const HOUR: i64 = MINUTE * 60;
const DAY: i64 = HOUR * 24;
const WEEK: i64 = DAY * 7;

/// What: Persian relative time for a publication timestamp, against the wall clock.
#[must_use]
pub fn format_relative_time(ts: i64) -> String {
    format_relative_time_at(ts, chrono::Utc::now().timestamp())
}

/// What: Persian relative time for `ts` as seen at `now` (both epoch seconds).
///
/// Output:
/// - Under a minute: `"هم‌اکنون"` (past) or `"به‌زودی"` (future).
/// - Otherwise the largest whole unit among minute, hour, day, and week,
///   followed by `"پیش"` (past) or `"دیگر"` (future).
#[must_use]
pub fn format_relative_time_at(ts: i64, now: i64) -> String {
    let delta = now.saturating_sub(ts);
    let future = delta < 0;
    let diff = delta.saturating_abs();
    if diff < MINUTE {
        return if future { "به‌زودی" } else { "هم‌اکنون" }.to_string();
    }
    let (count, unit) = if diff < HOUR {
        (diff / MINUTE, "دقیقه")
    } else if diff < DAY {
        (diff / HOUR, "ساعت")
    } else if diff < WEEK {
        (diff / DAY, "روز")
    } else {
        (diff / WEEK, "هفته")
    };
    format!("{count} {unit} {}", if future { "دیگر" } else { "پیش" })
}

/// Article content cut to the preview length with a trailing `...`.
#[must_use]
pub fn content_preview(content: &str) -> String {
    truncate_chars(content.trim(), CONTENT_PREVIEW_CHARS)
}

/// What: Badge letter standing in for a missing agency logo.
///
/// Output:
/// - The first non-whitespace character of the name, or `?`.
#[must_use]
pub fn agency_initial(name: &str) -> char {
    name.chars().find(|c| !c.is_whitespace()).unwrap_or('?')
}

/// What: Right-pad `text` with spaces to `width` terminal columns.
///
/// Details:
/// - Measures display width, so wide and zero-width characters (ZWNJ in
///   Persian words) line up in columns.
#[must_use]
pub fn pad_to_width(text: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(text);
    format!("{text}{}", " ".repeat(width.saturating_sub(w)))
}
