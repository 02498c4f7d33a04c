use std::env;
use std::path::{Path, PathBuf};

/// Environment variable that pins the config directory (used by tests and
/// portable installs).
pub const CONFIG_DIR_ENV: &str = "AKHBAR_CONFIG_DIR";

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// Config directory for akhbar (ensured to exist).
///
/// Resolution order: `$AKHBAR_CONFIG_DIR`, then `$XDG_CONFIG_HOME/akhbar`, then
/// `$HOME/.config/akhbar`.
pub fn config_dir() -> PathBuf {
    let dir = match env::var(CONFIG_DIR_ENV) {
        Ok(p) if !p.trim().is_empty() => PathBuf::from(p),
        _ => xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join("akhbar"),
    };
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: "<config>/logs" (ensured to exist)
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Settings file: "<config>/settings.conf" (may not exist).
pub fn settings_path() -> PathBuf {
    config_dir().join("settings.conf")
}

/// File holding the persisted API base override: "<config>/api_base".
pub fn api_base_store_path() -> PathBuf {
    api_base_store_path_in(&config_dir())
}

/// Same as [`api_base_store_path`] but relative to an explicit directory.
pub fn api_base_store_path_in(dir: &Path) -> PathBuf {
    dir.join("api_base")
}
