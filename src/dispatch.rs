//! # Event dispatch.
//!
//! ```text
//! dispatch_custom_event(target, ["a", "b"])
//!     ├─► CustomEvent("a") ─► target.dispatch ─► every "a" listener, in order
//!     └─► CustomEvent("b") ─► target.dispatch ─► every "b" listener, in order
//! ```
//!
//! The synchronous work for one name finishes before the next name is
//! published. Async tails are not waited for.

use std::sync::Arc;

use crate::events::{CustomEvent, EventNames, EventTarget};

/// Publishes one fresh [`CustomEvent`] per name, in order.
///
/// Never fails; names with no listeners are simply dropped.
pub fn dispatch_custom_event<T>(target: &T, names: impl Into<EventNames>)
where
    T: EventTarget + ?Sized,
{
    let names = names.into();
    for name in names.shared() {
        target.dispatch(&CustomEvent::new(Arc::clone(name)));
    }
}
