/// News, category, and agency fetching worker.
pub mod feed;

pub use feed::spawn_feed_worker;
