//! Core non-UI logic: pure state transitions that may enqueue feed requests.

pub mod filters;
pub mod load;
pub mod paging;

pub use filters::{
    apply_filters, clear_filters, current_filter, remove_agency_chip, remove_category_chip,
    set_search, toggle_agency, toggle_category,
};
pub use load::{
    INITIAL_LOAD_ERROR, apply_initial_load, infer_agencies, infer_categories, partition_initial,
    start_initial_load,
};
pub use paging::{handle_feed_response, maybe_load_more};
