//! Settings, config paths, and the color palette for akhbar.

/// Path resolution for config directories.
mod paths;
/// Settings file loading and parsing.
mod settings;
/// Theme and settings type definitions.
mod types;

pub use paths::{
    CONFIG_DIR_ENV, api_base_store_path, api_base_store_path_in, config_dir, logs_dir,
    settings_path,
};
pub use settings::{SETTINGS_SKELETON_CONTENT, load_settings_from, parse_settings, settings};
pub use types::{Settings, Theme};

use ratatui::style::Color;

/// Return the application's palette (Catppuccin Mocha neutrals, brand accent).
#[must_use]
pub const fn theme() -> Theme {
    Theme {
        base: Color::Rgb(30, 30, 46),        // #1e1e2e
        mantle: Color::Rgb(24, 24, 37),      // #181825
        surface1: Color::Rgb(69, 71, 90),    // #45475a
        overlay1: Color::Rgb(127, 132, 156), // #7f849c
        overlay2: Color::Rgb(147, 153, 178), // #9399b2
        text: Color::Rgb(205, 214, 244),     // #cdd6f4
        subtext0: Color::Rgb(166, 173, 200), // #a6adc8
        accent: Color::Rgb(29, 191, 152),    // #1dbf98
        mauve: Color::Rgb(203, 166, 247),    // #cba6f7
        green: Color::Rgb(166, 227, 161),    // #a6e3a1
        yellow: Color::Rgb(249, 226, 175),   // #f9e2af
        red: Color::Rgb(243, 139, 168),      // #f38ba8
    }
}

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize environment- or disk-mutating tests.
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
///
/// Details:
/// - Callers lock it around `AKHBAR_CONFIG_DIR` changes.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
