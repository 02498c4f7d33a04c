//! Central `AppState` container.

use std::time::Instant;

use ratatui::widgets::ListState;

use crate::state::carousel::Carousel;
use crate::state::feed::FeedState;
use crate::state::filters::SelectedFilters;
use crate::state::modal::Modal;
use crate::state::types::{Agency, Category, NewsItem};
use crate::theme::Settings;


/// Screen rectangle `(x, y, width, height)` recorded during rendering for mouse hit-tests.
pub type Rect4 = (u16, u16, u16, u16);

/// What: Global application state shared by the event, runtime, and UI layers.
///
/// Details:
/// - Mutated only on the event-loop task, so it carries no locks.
/// - News data lives in [`FeedState`] (feed list and paging) and `featured`
///   (carousel); lookups come from the API or are inferred from loaded news.
#[derive(Debug)]
pub struct AppState {
    /// Settings loaded at startup.
    pub settings: Settings,
    /// Resolved API base URL (shown in the header).
    pub api_base: String,
    /// Carousel items.
    pub featured: Vec<NewsItem>,
    /// Carousel position and timer.
    pub carousel: Carousel,
    /// Feed list and paging state.
    pub feed: FeedState,
    /// Categories offered in the filter modal.
    pub categories: Vec<Category>,
    /// Agencies offered in the filter modal.
    pub agencies: Vec<Agency>,
    /// Lookups were inferred from news because the endpoints failed (noted in the filter modal).
    pub lookups_inferred: bool,
    /// Filter modal selection.
    pub selected_filters: SelectedFilters,
    /// Free-text search applied with the filter, if any.
    pub search: Option<String>,
    /// Highlighted feed row.
    pub selected: usize,
    /// List widget state for the feed.
    pub list_state: ListState,
    /// Active modal.
    pub modal: Modal,
    /// Startup load in flight (shows the loading placeholder).
    pub loading_initial: bool,
    /// Startup failure text; shown as the error banner with an empty feed.
    /// Cleared by the next successful load or reset.
    pub error_banner: Option<String>,
    /// Short status line message (e.g. a news item without a link).
    pub status: Option<String>,
    /// Carousel area from the last frame.
    pub carousel_rect: Option<Rect4>,
    /// Feed list area from the last frame.
    pub feed_rect: Option<Rect4>,
}

impl AppState {
    /// What: Fresh state for the given settings and API base.
    #[must_use]
    pub fn new(settings: Settings, api_base: String) -> Self {
        let carousel = Carousel::new(settings.carousel_interval, settings.swipe_threshold);
        let feed = FeedState::new(settings.page_size);
        Self {
            settings,
            api_base,
            featured: Vec::new(),
            carousel,
            feed,
            categories: Vec::new(),
            agencies: Vec::new(),
            lookups_inferred: false,
            selected_filters: SelectedFilters::default(),
            search: None,
            selected: 0,
            list_state: ListState::default(),
            modal: Modal::None,
            loading_initial: false,
            error_banner: None,
            status: None,
            carousel_rect: None,
            feed_rect: None,
        }
    }

    /// Replace the carousel items and reset the slide position.
    pub fn set_featured(&mut self, featured: Vec<NewsItem>, now: Instant) {
        self.carousel.set_slides(featured.len(), now);
        self.featured = featured;
    }

    /// Featured item under the carousel cursor.
    #[must_use]
    pub fn current_slide(&self) -> Option<&NewsItem> {
        self.featured.get(self.carousel.index())
    }

    /// Feed item under the list cursor.
    #[must_use]
    pub fn selected_item(&self) -> Option<&NewsItem> {
        self.feed.items.get(self.selected)
    }

    /// Find a loaded item (feed or carousel) by id.
    #[must_use]
    pub fn find_item(&self, id: &str) -> Option<&NewsItem> {
        self.feed
            .items
            .iter()
            .chain(self.featured.iter())
            .find(|it| it.id == id)
    }

    /// Whether a previous load left anything on screen (feed or carousel).
    #[must_use]
    pub fn has_content(&self) -> bool {
        !self.feed.items.is_empty() || !self.featured.is_empty()
    }

    /// What: Move the feed cursor by `delta` rows, clamped to the list.
    pub fn move_selection(&mut self, delta: isize) {
        if self.feed.items.is_empty() {
            self.selected = 0;
        } else {
            let last = self.feed.items.len() - 1;
            self.selected = self.selected.saturating_add_signed(delta).min(last);
        }
        self.list_state.select(Some(self.selected));
    }

    /// Put the cursor back on the first row (after a list replacement).
    pub fn reset_selection(&mut self) {
        self.selected = 0;
        self.list_state = ListState::default();
        if !self.feed.items.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    /// What: Whether the cursor is close enough to the end to load more.
    ///
    /// Details:
    /// - Mirrors the trailing sentinel becoming visible: true when the cursor is
    ///   within `prefetch_rows` of the last item, or the list is empty.
    #[must_use]
    pub fn near_end(&self) -> bool {
        let len = self.feed.items.len();
        len == 0 || self.selected + self.settings.prefetch_rows + 1 >= len
    }

    /// Name of a category id from the lookups, if known.
    #[must_use]
    pub fn category_name(&self, id: i64) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
    }

    /// Name of an agency id from the lookups, if known.
    #[must_use]
    pub fn agency_name(&self, id: i64) -> Option<&str> {
        self.agencies
            .iter()
            .find(|a| a.id == id)
            .map(|a| a.name.as_str())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            Settings::default(),
            crate::sources::base::SAME_ORIGIN_BASE.to_string(),
        )
    }
}
