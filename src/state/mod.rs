//! Application state: feed paging, filter selection, carousel, modals.
//!
//! Everything here is plain data with pure transitions; the runtime mutates it
//! from a single task.

pub mod app_state;
pub mod carousel;
pub mod feed;
pub mod filters;
pub mod modal;
pub mod types;

pub use app_state::AppState;
pub use carousel::{Carousel, CarouselMode, Swipe};
pub use feed::{
    AppendRequest, ApplyOutcome, FeedRequest, FeedResponse, FeedState, ResetRequest,
};
pub use filters::SelectedFilters;
pub use modal::{DateField, FilterModalState, FilterSection, Modal};
pub use types::{ActiveFilter, Agency, Category, NewsItem, NewsPage, NewsQuery};
