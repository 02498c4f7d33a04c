use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

/// Period of the UI tick driving the carousel timer.
pub const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// What: Spawn the periodic tick task.
///
/// Details:
/// - Sends `()` every [`TICK_INTERVAL`]; stops once the receiver is dropped.
pub fn spawn_tick_worker(tick_tx: mpsc::UnboundedSender<()>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(TICK_INTERVAL);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            if tick_tx.send(()).is_err() {
                break;
            }
        }
    });
}

/// What: Spawn the thread that reads terminal events.
///
/// Inputs:
/// - `headless`: When true no thread is started (tests).
/// - `event_tx`: Channel for crossterm events.
/// - `event_thread_cancelled`: Set on shutdown; the thread exits within one poll period.
///
/// Details:
/// - Polls with a 50 ms timeout so cancellation is noticed promptly.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    event_thread_cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        loop {
            if event_thread_cancelled.load(Ordering::Relaxed) {
                break;
            }
            match crossterm::event::poll(Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if event_thread_cancelled.load(Ordering::Relaxed)
                            || event_tx.send(ev).is_err()
                        {
                            break;
                        }
                    }
                    Err(e) => tracing::debug!(error = %e, "terminal event read failed"),
                },
                Ok(false) => {}
                Err(e) => {
                    tracing::debug!(error = %e, "terminal event poll failed");
                    std::thread::sleep(Duration::from_millis(50));
                }
            }
        }
    });
}
