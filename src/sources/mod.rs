//! News API access and response normalization, split into submodules.
//!
//! Data flows leaf-first: [`api`] fetches raw JSON, [`extract`] finds the list
//! inside whatever envelope came back, and [`normalize`] turns each record into
//! the canonical model using [`timestamp`] for dates.

pub mod api;
pub mod base;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod timestamp;

#[cfg(test)]
mod tests;

pub use api::{ApiClient, is_healthy, news_page_from};
pub use base::{BaseSource, forget_api_base, resolve_api_base};
pub use error::ApiError;
pub use extract::{
    extract_agencies_list, extract_categories_list, extract_news_list, extract_next_link,
};
pub use normalize::{normalize_agency, normalize_category, normalize_news_item};
pub use timestamp::normalize_timestamp;
