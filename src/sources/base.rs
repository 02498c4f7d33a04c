//! API base URL resolution and the persisted `--api-base` override.

use std::fs;
use std::io;
use std::path::Path;

/// Backend address used when nothing else is configured (the server's local default).
pub const SAME_ORIGIN_BASE: &str = "http://127.0.0.1:8000";

/// Base URL baked in at build time, if any.
const BUILD_TIME_BASE: Option<&str> = option_env!("AKHBAR_API_BASE_URL");

/// Where the resolved base URL came from (logged at startup).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BaseSource {
    /// `--api-base` on the command line.
    Cli,
    /// Override stored by an earlier `--api-base`.
    Persisted,
    /// `api_base_url` in `settings.conf`.
    Settings,
    /// `AKHBAR_API_BASE_URL` at build time.
    BuildTime,
    /// Fallback to [`SAME_ORIGIN_BASE`].
    SameOrigin,
}

/// Strip whitespace and trailing slashes; `None` for blank input.
#[must_use]
pub fn clean_base(raw: &str) -> Option<String> {
    let v = raw.trim().trim_end_matches('/');
    (!v.is_empty()).then(|| v.to_string())
}

/// What: Resolve the API base URL once at startup.
///
/// Inputs:
/// - `cli`: `--api-base` value, if given. Persisted to `store` when present.
/// - `settings_base`: `api_base_url` from the settings file.
/// - `store`: Path of the persisted override file.
///
/// Output:
/// - `(base_url, source)` with any trailing `/` removed.
///
/// Details:
/// - Precedence: CLI, persisted override, settings, build-time env, same origin.
/// - A failure to persist the CLI override is logged and otherwise ignored.
pub fn resolve_api_base(
    cli: Option<&str>,
    settings_base: Option<&str>,
    store: &Path,
) -> (String, BaseSource) {
    if let Some(base) = cli.and_then(clean_base) {
        if let Err(e) = persist_api_base(store, &base) {
            tracing::warn!(path = %store.display(), error = %e, "failed to persist api base override");
        }
        return (base, BaseSource::Cli);
    }
    if let Some(base) = load_persisted(store) {
        return (base, BaseSource::Persisted);
    }
    if let Some(base) = settings_base.and_then(clean_base) {
        return (base, BaseSource::Settings);
    }
    if let Some(base) = BUILD_TIME_BASE.and_then(clean_base) {
        return (base, BaseSource::BuildTime);
    }
    (SAME_ORIGIN_BASE.to_string(), BaseSource::SameOrigin)
}

/// Read the persisted override, `None` when missing or blank.
#[must_use]
pub fn load_persisted(store: &Path) -> Option<String> {
    fs::read_to_string(store)
        .ok()
        .and_then(|s| s.lines().next().and_then(clean_base))
}

/// What: Write the override so later runs use it without the flag.
///
/// # Errors
/// - Returns the I/O error when the file cannot be written.
pub fn persist_api_base(store: &Path, base: &str) -> io::Result<()> {
    if let Some(dir) = store.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(store, format!("{base}\n"))
}

/// What: Forget the persisted override (`--reset-api-base`).
///
/// Output:
/// - `Ok(true)` when a file was removed, `Ok(false)` when none existed.
///
/// # Errors
/// - Returns the I/O error for failures other than "not found".
pub fn forget_api_base(store: &Path) -> io::Result<bool> {
    match fs::remove_file(store) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: CLI override wins, is persisted, and is picked up on the next run.
    fn api_base_cli_override_persists() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = dir.path().join("api_base");
        let (base, src) = resolve_api_base(
            Some("https://news.example.com/ "),
            Some("http://settings:1"),
            &store,
        );
        assert_eq!(base, "https://news.example.com");
        assert_eq!(src, BaseSource::Cli);

        let (base, src) = resolve_api_base(None, Some("http://settings:1"), &store);
        assert_eq!(base, "https://news.example.com");
        assert_eq!(src, BaseSource::Persisted);
    }

    #[test]
    /// What: Settings beat the fallback; forgetting the override restores them.
    fn api_base_settings_and_reset() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = dir.path().join("api_base");
        persist_api_base(&store, "http://old:9").expect("persist");
        assert!(forget_api_base(&store).expect("forget"));
        assert!(!forget_api_base(&store).expect("forget twice"));

        let (base, src) = resolve_api_base(None, Some("http://settings:1///"), &store);
        assert_eq!(base, "http://settings:1");
        assert_eq!(src, BaseSource::Settings);
    }

    #[test]
    /// What: Blank sources fall through to build-time or same-origin default.
    fn api_base_fallback_chain() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = dir.path().join("api_base");
        let (base, src) = resolve_api_base(Some("  "), Some(""), &store);
        if BUILD_TIME_BASE.and_then(clean_base).is_some() {
            assert_eq!(src, BaseSource::BuildTime);
        } else {
            assert_eq!(base, SAME_ORIGIN_BASE);
            assert_eq!(src, BaseSource::SameOrigin);
        }
        assert!(!store.exists());
    }
}
