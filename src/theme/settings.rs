use std::fs;
use std::path::Path;
use std::time::Duration;

use super::paths::settings_path;
use super::types::Settings;
use crate::util::config::{parse_key_value, skip_comment_or_empty};

/// Commented template written on first run so users can discover the keys.
pub const SETTINGS_SKELETON_CONTENT: &str = "\
# akhbar settings (key = value)
#
# API base URL. A --api-base override given on the command line wins and is
# remembered in the api_base file next to this one.
# api_base_url = http://127.0.0.1:8000

# Items per infinite-scroll page
page_size = 10
# Items fetched on startup (split between carousel and feed)
initial_window = 15
# Carousel slides
featured_count = 5
# Feed items shown after startup
latest_initial_count = 10
# Carousel auto-advance period in seconds
carousel_interval_secs = 5
# Load more when the selection is this many rows from the end
prefetch_rows = 3
# Mouse drag distance (columns) that counts as a swipe on the carousel
swipe_threshold = 4
";

/// What: Load settings from `<config>/settings.conf`, writing the skeleton on first run.
///
/// Output:
/// - Parsed [`Settings`]; defaults when the file is missing or unreadable.
pub fn settings() -> Settings {
    let path = settings_path();
    if !path.exists() {
        if let Err(e) = fs::write(&path, SETTINGS_SKELETON_CONTENT) {
            tracing::debug!(path = %path.display(), error = %e, "could not write settings skeleton");
        }
        return Settings::default();
    }
    load_settings_from(&path)
}

/// What: Load settings from an explicit file path.
///
/// Output:
/// - Parsed [`Settings`]; defaults when the file cannot be read.
pub fn load_settings_from(path: &Path) -> Settings {
    let mut out = Settings::default();
    match fs::read_to_string(path) {
        Ok(content) => parse_settings(&content, &mut out),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read settings; using defaults");
        }
    }
    out
}

/// What: Parse settings content into an existing [`Settings`].
///
/// Inputs:
/// - `content`: Text of the settings file.
/// - `settings`: Settings to update in place.
///
/// Details:
/// - Unknown keys and unparseable values are ignored (logged at debug).
/// - Counts must be at least 1; zero would stall paging.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        if skip_comment_or_empty(line) {
            continue;
        }
        let Some((key, val)) = parse_key_value(line) else {
            continue;
        };
        match key.as_str() {
            "api_base_url" | "api_base" | "base_url" => {
                let v = val.trim().trim_end_matches('/');
                settings.api_base_url = (!v.is_empty()).then(|| v.to_string());
            }
            "page_size" | "limit" => set_count(&mut settings.page_size, &key, &val),
            "initial_window" => set_count(&mut settings.initial_window, &key, &val),
            "featured_count" | "carousel_slides" => {
                set_count(&mut settings.featured_count, &key, &val);
            }
            "latest_initial_count" => set_count(&mut settings.latest_initial_count, &key, &val),
            "carousel_interval_secs" | "carousel_interval" => {
                if let Ok(v) = val.parse::<u64>()
                    && v > 0
                {
                    settings.carousel_interval = Duration::from_secs(v);
                }
            }
            "prefetch_rows" => {
                if let Ok(v) = val.parse::<usize>() {
                    settings.prefetch_rows = v;
                }
            }
            "swipe_threshold" => {
                if let Ok(v) = val.parse::<u16>()
                    && v > 0
                {
                    settings.swipe_threshold = v;
                }
            }
            other => tracing::debug!(key = other, "ignoring unknown setting"),
        }
    }
}

/// Parse a positive count into `slot`, leaving it unchanged on bad input.
fn set_count(slot: &mut usize, key: &str, val: &str) {
    match val.parse::<usize>() {
        Ok(v) if v > 0 => *slot = v,
        _ => tracing::debug!(key, value = val, "ignoring invalid count"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: The written skeleton parses back to the defaults.
    fn settings_skeleton_matches_defaults() {
        let mut s = Settings::default();
        parse_settings(SETTINGS_SKELETON_CONTENT, &mut s);
        assert_eq!(s, Settings::default());
    }

    #[test]
    /// What: Known keys are applied, invalid values ignored.
    ///
    /// Inputs:
    /// - A file with aliases, a zero count, a trailing slash on the base URL, and junk.
    ///
    /// Output:
    /// - Valid values applied; invalid ones leave defaults untouched.
    fn settings_parse_values_and_aliases() {
        let content = "\
api_base_url = http://news.lan:8000/   # lab
limit = 20
initial_window = 0
carousel-interval-secs = 8
featured_count = abc
prefetch_rows = 0
unknown_key = 1
";
        let mut s = Settings::default();
        parse_settings(content, &mut s);
        assert_eq!(s.api_base_url.as_deref(), Some("http://news.lan:8000"));
        assert_eq!(s.page_size, 20);
        assert_eq!(s.initial_window, 15);
        assert_eq!(s.carousel_interval, Duration::from_secs(8));
        assert_eq!(s.featured_count, 5);
        assert_eq!(s.prefetch_rows, 0);
    }

    #[test]
    /// What: Missing files yield defaults from the explicit loader.
    fn settings_missing_file_is_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        let s = load_settings_from(&dir.path().join("nope.conf"));
        assert_eq!(s, Settings::default());
    }
}
