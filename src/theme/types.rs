use ratatui::style::Color;
use std::time::Duration;

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background layer used behind panels.
    pub mantle: Color,
    /// Subtle surface color for component backgrounds.
    pub surface1: Color,
    /// Muted overlay line/border color (primary).
    pub overlay1: Color,
    /// Muted overlay line/border color (secondary).
    pub overlay2: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Brand accent (the web client's `#1DBF98`), used for badges and active chips.
    pub accent: Color,
    /// Accent for emphasized headings or selections.
    pub mauve: Color,
    /// Success/positive state color.
    pub green: Color,
    /// Warning/attention state color.
    pub yellow: Color,
    /// Error/danger state color.
    pub red: Color,
}

/// User-configurable settings loaded from `settings.conf`.
///
/// Paging numbers drive the feed state machine; the rest tune the UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// API base URL from the settings file (lower priority than CLI/persisted override).
    pub api_base_url: Option<String>,
    /// Page size for infinite-scroll appends and filter reloads.
    pub page_size: usize,
    /// Size of the combined first request covering featured + latest.
    pub initial_window: usize,
    /// Maximum number of carousel slides.
    pub featured_count: usize,
    /// Maximum number of items shown in the feed after the first request.
    pub latest_initial_count: usize,
    /// Carousel auto-advance period.
    pub carousel_interval: Duration,
    /// Rows before the sentinel at which an append is triggered.
    pub prefetch_rows: usize,
    /// Horizontal drag distance (columns) that counts as a swipe.
    pub swipe_threshold: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: None,
            page_size: 10,
            initial_window: 15,
            featured_count: 5,
            latest_initial_count: 10,
            carousel_interval: Duration::from_secs(5),
            prefetch_rows: 3,
            swipe_threshold: 4,
        }
    }
}
