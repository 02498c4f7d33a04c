//! Configuration file parsing utilities.
//!
//! Helpers for the `key = value` settings format: comment skipping, key
//! normalization and inline comment stripping.

/// What: Check if a line should be skipped (empty or comment).
///
/// Inputs:
/// - `line`: Line to check
///
/// Output:
/// - `true` if the line should be skipped, `false` otherwise
///
/// Details:
/// - Skips empty lines and lines starting with `#`, `//`, or `;`
#[must_use]
pub fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// What: Parse a key-value pair from a line.
///
/// Inputs:
/// - `line`: Line containing key=value format
///
/// Output:
/// - `Some((key, value))` if parsing succeeds, `None` otherwise
///
/// Details:
/// - Splits on the first `=` character.
/// - Keys are lowercased and `.`, `-`, and spaces become `_`, so `Page-Size` and
///   `page_size` are the same setting.
/// - Inline comments are removed from the value.
#[must_use]
pub fn parse_key_value(line: &str) -> Option<(String, String)> {
    let trimmed = line.trim();
    let (raw_key, raw_val) = trimmed.split_once('=')?;
    let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
    if key.is_empty() {
        return None;
    }
    Some((key, strip_inline_comment(raw_val.trim()).to_string()))
}

/// What: Remove a trailing inline comment from a value.
///
/// Inputs:
/// - `val`: Raw value text after the `=`.
///
/// Output:
/// - The value with any ` #...` or `//...` suffix removed and trimmed.
///
/// Details:
/// - A `#` only starts a comment when preceded by whitespace, so fragment URLs
///   such as `http://host/#top` survive.
/// - `//` only starts a comment when preceded by whitespace, so `http://` survives.
#[must_use]
pub fn strip_inline_comment(val: &str) -> &str {
    let bytes = val.as_bytes();
    let mut cut = val.len();
    for (i, &b) in bytes.iter().enumerate() {
        let after_space = i > 0 && bytes[i - 1].is_ascii_whitespace();
        if after_space && (b == b'#' || (b == b'/' && bytes.get(i + 1) == Some(&b'/'))) {
            cut = i;
            break;
        }
    }
    val[..cut].trim()
}
