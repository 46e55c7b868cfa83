//! # The custom event carrier.
//!
//! A [`CustomEvent`] is built fresh for every dispatched name. It carries no
//! payload: only the name, a global sequence number and a timestamp.
//!
//! ## Ordering guarantees
//! Each event gets a globally unique sequence number (`seq`) that increases
//! monotonically across all buses in the process.
//!
//! ## Example
//! ```rust
//! use custom_events::CustomEvent;
//!
//! let a = CustomEvent::new("refresh");
//! let b = CustomEvent::new("refresh");
//!
//! assert_eq!(a.name(), "refresh");
//! assert!(b.seq > a.seq);
//! ```

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::time::{Duration, SystemTime};

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Named, payload-less notification.
#[derive(Clone, Debug)]
pub struct CustomEvent {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    name: Arc<str>,
}

impl CustomEvent {
    /// Creates a new event with current timestamp and next sequence number.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            name: name.into(),
        }
    }

    /// Event name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Time elapsed since the event was created.
    ///
    /// Zero if the wall clock went backwards in the meantime.
    pub fn age(&self) -> Duration {
        self.at.elapsed().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_is_taken_at_creation() {
        let before = SystemTime::now();
        let ev = CustomEvent::new("tick");
        let after = SystemTime::now();

        assert!(ev.at >= before && ev.at <= after);
        assert!(ev.age() < Duration::from_secs(5));
    }

    #[test]
    fn clones_keep_sequence_and_timestamp() {
        let ev = CustomEvent::new("tick");
        let copy = ev.clone();
        let next = CustomEvent::new("tick");

        assert_eq!(copy.seq, ev.seq);
        assert_eq!(copy.at, ev.at);
        assert!(next.seq > ev.seq);
    }
}
