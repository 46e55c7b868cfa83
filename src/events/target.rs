//! # Event target: the listener-table seam.
//!
//! [`EventTarget`] is the observer registry the rest of the crate talks to.
//! [`Bus`](crate::Bus) is the stock implementation; tests or embedders can
//! provide their own (e.g. to forward into another event system).
//!
//! ## Contract
//! - `add_listener(name, h)` creates at most one entry per `(name, h)` pair;
//!   adding a pair that already exists is a no-op and returns `false`.
//! - `remove_listener(name, h)` removes that entry and returns `true`, or does
//!   nothing and returns `false` if it was not registered.
//! - `dispatch(event)` invokes, synchronously and in registration order, every
//!   handler registered under exactly `event.name()` when dispatch started.
//!   It never fails and never waits for async tails.

use crate::events::CustomEvent;
use crate::listeners::Handler;

/// Register / unregister / publish by event name.
pub trait EventTarget: Send + Sync + 'static {
    /// Registers `handler` under `name`.
    fn add_listener(&self, name: &str, handler: &Handler) -> bool;

    /// Unregisters `handler` from `name`.
    fn remove_listener(&self, name: &str, handler: &Handler) -> bool;

    /// Delivers `event` to the handlers registered under its name.
    fn dispatch(&self, event: &CustomEvent);
}
