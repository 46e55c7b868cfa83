//! Shared helpers for unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::error::ListenerError;
use crate::events::CustomEvent;
use crate::listeners::{Callback, ReportUnhandled};

/// Callback that counts its invocations.
pub(crate) fn counter() -> (Arc<AtomicUsize>, Callback) {
    let hits = Arc::new(AtomicUsize::new(0));
    let cb = Callback::new({
        let hits = Arc::clone(&hits);
        move || {
            hits.fetch_add(1, Ordering::SeqCst);
        }
    });
    (hits, cb)
}

/// Callback that appends `tag` to a shared log.
pub(crate) fn recorder(log: &Arc<Mutex<Vec<String>>>, tag: &str) -> Callback {
    let log = Arc::clone(log);
    let tag = tag.to_string();
    Callback::new(move || log.lock().push(tag.clone()))
}

/// Reporter that keeps `(event name, error)` pairs.
#[derive(Default)]
pub(crate) struct RecordingReporter {
    seen: Mutex<Vec<(String, ListenerError)>>,
}

impl RecordingReporter {
    pub(crate) fn errors(&self) -> Vec<(String, ListenerError)> {
        self.seen.lock().clone()
    }

    /// Polls until at least `n` errors arrived or `limit` elapsed.
    pub(crate) async fn wait_for(&self, n: usize, limit: Duration) -> Vec<(String, ListenerError)> {
        let deadline = tokio::time::Instant::now() + limit;
        while self.seen.lock().len() < n && tokio::time::Instant::now() < deadline {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        self.errors()
    }
}

impl ReportUnhandled for RecordingReporter {
    fn report(&self, event: &CustomEvent, error: &ListenerError) {
        self.seen
            .lock()
            .push((event.name().to_string(), error.clone()));
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}
