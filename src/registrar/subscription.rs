//! # Subscription guard.
//!
//! A [`Subscription`] owns one handler registered under every name of an
//! [`EventNames`] set. Dropping it removes exactly those entries.
//!
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use custom_events::{dispatch_custom_event, subscribe_to_custom_events, Bus, Callback};
//!
//! let bus = Bus::new();
//! let hits = Arc::new(AtomicUsize::new(0));
//! let cb = Callback::new({
//!     let hits = Arc::clone(&hits);
//!     move || { hits.fetch_add(1, Ordering::SeqCst); }
//! });
//!
//! let sub = subscribe_to_custom_events(bus.clone(), ["a", "b"], cb);
//! dispatch_custom_event(bus.as_ref(), ["a", "b"]);
//! assert_eq!(hits.load(Ordering::SeqCst), 2);
//!
//! drop(sub);
//! dispatch_custom_event(bus.as_ref(), "a");
//! assert_eq!(hits.load(Ordering::SeqCst), 2);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::events::{EventNames, EventTarget};
use crate::listeners::{Callback, Handler};

/// Live registration of one handler under a set of names.
#[must_use = "dropping a Subscription removes its listeners immediately"]
pub struct Subscription {
    target: Arc<dyn EventTarget>,
    names: EventNames,
    handler: Handler,
}

impl Subscription {
    pub(crate) fn attach(target: Arc<dyn EventTarget>, names: EventNames, callback: Callback) -> Self {
        let handler = Handler::new(callback);
        for name in names.iter() {
            target.add_listener(name, &handler);
        }
        tracing::debug!(events = ?names, handler = handler.id(), "subscribed");

        Self {
            target,
            names,
            handler,
        }
    }

    /// Names this subscription is registered under.
    pub fn event_names(&self) -> &EventNames {
        &self.names
    }

    /// Identity of the shared handler.
    pub fn handler_id(&self) -> u64 {
        self.handler.id()
    }

    pub(crate) fn callback(&self) -> &Callback {
        self.handler.callback()
    }

    /// Removes every entry now. Same as dropping the guard.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        for name in self.names.iter() {
            self.target.remove_listener(name, &self.handler);
        }
        tracing::debug!(events = ?self.names, handler = self.handler.id(), "unsubscribed");
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("names", &self.names)
            .field("handler", &self.handler.id())
            .finish()
    }
}

/// Registers `callback` under every name in `names` until the returned guard
/// is dropped.
///
/// One shared handler is created and added once per name. Empty name sets
/// produce a guard with no entries.
pub fn subscribe_to_custom_events(
    target: Arc<dyn EventTarget>,
    names: impl Into<EventNames>,
    callback: Callback,
) -> Subscription {
    Subscription::attach(target, names.into(), callback)
}
