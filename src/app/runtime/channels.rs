use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::sources::ApiClient;
use crate::state::{FeedRequest, FeedResponse};

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Senders and receivers shared between the main event loop, the terminal
///   event thread, the tick task, and the feed worker.
pub struct Channels {
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    pub event_thread_cancelled: Arc<AtomicBool>,
    pub feed_req_tx: mpsc::UnboundedSender<FeedRequest>,
    pub feed_res_rx: mpsc::UnboundedReceiver<FeedResponse>,
    pub tick_tx: mpsc::UnboundedSender<()>,
    pub tick_rx: mpsc::UnboundedReceiver<()>,
}

impl Channels {
    /// What: Create all channels and spawn the feed worker.
    ///
    /// Inputs:
    /// - `client`: API client handed to the worker.
    ///
    /// Output:
    /// - A `Channels` struct with all senders and receivers initialized.
    pub fn new(client: ApiClient) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let event_thread_cancelled = Arc::new(AtomicBool::new(false));
        let (feed_req_tx, feed_req_rx) = mpsc::unbounded_channel::<FeedRequest>();
        let (feed_res_tx, feed_res_rx) = mpsc::unbounded_channel::<FeedResponse>();
        let (tick_tx, tick_rx) = mpsc::unbounded_channel::<()>();

        super::workers::spawn_feed_worker(client, feed_req_rx, feed_res_tx);

        Self {
            event_tx,
            event_rx,
            event_thread_cancelled,
            feed_req_tx,
            feed_res_rx,
            tick_tx,
            tick_rx,
        }
    }
}
