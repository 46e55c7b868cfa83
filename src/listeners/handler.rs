//! # Shared handler.
//!
//! One [`Handler`] is created per activation and registered against every
//! name of the activation. Listener tables key entries by handler identity,
//! so adding and removing "the same handler" is well defined even when the
//! callback it wraps is shared by several activations.

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use super::callback::{Callback, Invocation};

static HANDLER_ID: AtomicU64 = AtomicU64::new(1);

/// Listener-table entry value: a callback plus a unique identity.
#[derive(Clone, Debug)]
pub struct Handler {
    id: u64,
    callback: Callback,
}

impl Handler {
    /// Wraps `callback` in a handler with a fresh identity.
    pub fn new(callback: Callback) -> Self {
        Self {
            id: HANDLER_ID.fetch_add(1, AtomicOrdering::Relaxed),
            callback,
        }
    }

    /// Unique identity of this handler.
    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The wrapped callback.
    #[inline]
    pub fn callback(&self) -> &Callback {
        &self.callback
    }

    /// Calls the wrapped callback once.
    #[inline]
    pub fn call(&self) -> Invocation {
        self.callback.call()
    }
}

impl PartialEq for Handler {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Handler {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handlers_over_one_callback_are_distinct() {
        let cb = Callback::new(|| {});
        let a = Handler::new(cb.clone());
        let b = Handler::new(cb);
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
        assert!(a.callback().same_as(b.callback()));
    }
}
