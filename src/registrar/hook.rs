//! # Lifecycle-bound registrar.
//!
//! [`ListenerRegistrar`] is the hook-style face of the crate: a component
//! creates one when it mounts, calls [`activate`](ListenerRegistrar::activate)
//! on every update with its current `(names, callback)`, and drops it (or
//! calls [`unmount`](ListenerRegistrar::unmount)) when it goes away.
//!
//! ## Lifecycle
//! ```text
//! new(target)            ── unmounted
//!   │
//!   ├─► activate(N, C)   ── subscribed (N, C)
//!   │     │
//!   │     ├─ same N (contents) and same C (identity) ─► unchanged
//!   │     └─ anything else ─► unsubscribe (N, C) ─► subscribe (N', C')
//!   │
//!   └─► unmount() / drop ── unsubscribed
//! ```
//!
//! ## Rules
//! - Callbacks compare by identity: rebuilding a `Callback` on every update
//!   re-subscribes every time. Keep it and pass the same one.
//! - Names compare by contents: a freshly built list with the same names in
//!   the same order keeps the existing subscription.
//! - Teardown always happens before the next subscription is created.

use std::sync::Arc;

use crate::events::{EventNames, EventTarget};
use crate::listeners::Callback;

use super::subscription::Subscription;

/// Keeps one component's subscription in sync with its inputs.
pub struct ListenerRegistrar {
    target: Arc<dyn EventTarget>,
    active: Option<Subscription>,
}

impl ListenerRegistrar {
    /// Creates an unmounted registrar bound to `target`.
    pub fn new(target: Arc<dyn EventTarget>) -> Self {
        Self {
            target,
            active: None,
        }
    }

    /// Synchronizes the subscription with `(names, callback)`.
    ///
    /// Call on mount and on every update. Re-subscribes only when the names
    /// or the callback identity changed.
    pub fn activate(&mut self, names: impl Into<EventNames>, callback: &Callback) {
        let names = names.into();
        if let Some(active) = &self.active {
            if active.event_names() == &names && active.callback().same_as(callback) {
                return;
            }
        }

        // old entries must be gone before the new handler is registered
        self.active = None;
        self.active = Some(Subscription::attach(
            Arc::clone(&self.target),
            names,
            callback.clone(),
        ));
    }

    /// Removes the current subscription, if any.
    pub fn unmount(&mut self) {
        self.active = None;
    }

    /// True while a subscription is held.
    pub fn is_mounted(&self) -> bool {
        self.active.is_some()
    }

    /// Names of the current subscription.
    pub fn event_names(&self) -> Option<&EventNames> {
        self.active.as_ref().map(Subscription::event_names)
    }

    /// Identity of the current shared handler; changes on every re-subscription.
    pub fn handler_id(&self) -> Option<u64> {
        self.active.as_ref().map(Subscription::handler_id)
    }
}

impl std::fmt::Debug for ListenerRegistrar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistrar")
            .field("active", &self.active)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use parking_lot::Mutex;

    use super::*;
    use crate::dispatch::dispatch_custom_event;
    use crate::events::Bus;
    use crate::registrar::subscribe_to_custom_events;
    use crate::testing::{counter, recorder};

    #[test]
    fn refresh_scenario() {
        let bus = Bus::new();
        let (hits, f) = counter();
        let mut component = ListenerRegistrar::new(bus.clone());

        component.activate("refresh", &f);
        dispatch_custom_event(bus.as_ref(), "refresh");
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        component.unmount();
        dispatch_custom_event(bus.as_ref(), "refresh");
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn two_names_fire_in_dispatch_order() {
        let bus = Bus::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        let g = recorder(&log, "g");

        let mut component = ListenerRegistrar::new(bus.clone());
        component.activate(["a", "b"], &g);

        // registered after g, so each marks the end of g's run for its name
        let _a = subscribe_to_custom_events(bus.clone(), "a", recorder(&log, "after-a"));
        let _b = subscribe_to_custom_events(bus.clone(), "b", recorder(&log, "after-b"));

        dispatch_custom_event(bus.as_ref(), ["a", "b"]);
        assert_eq!(*log.lock(), vec!["g", "after-a", "g", "after-b"]);
    }

    #[test]
    fn every_name_invokes_once_per_dispatch() {
        let bus = Bus::new();
        let (hits, cb) = counter();
        let names = ["x", "y", "z"];

        let mut component = ListenerRegistrar::new(bus.clone());
        component.activate(names, &cb);

        for (i, name) in names.iter().enumerate() {
            dispatch_custom_event(bus.as_ref(), *name);
            assert_eq!(hits.load(Ordering::SeqCst), i + 1);
        }
    }

    #[test]
    fn changing_names_moves_every_entry() {
        let bus = Bus::new();
        let (hits, cb) = counter();
        let mut component = ListenerRegistrar::new(bus.clone());

        component.activate(["a", "b"], &cb);
        component.activate(["c"], &cb);

        assert!(!bus.has_listeners("a"));
        assert!(!bus.has_listeners("b"));
        assert_eq!(bus.listener_count("c"), 1);
        assert_eq!(bus.event_names(), vec!["c".to_string()]);

        dispatch_custom_event(bus.as_ref(), ["a", "b", "c"]);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unchanged_inputs_keep_the_handler() {
        let bus = Bus::new();
        let (_, cb) = counter();
        let mut component = ListenerRegistrar::new(bus.clone());

        component.activate(vec!["a".to_string(), "b".to_string()], &cb);
        let first = component.handler_id();

        // fresh list, same contents; cloned callback, same identity
        component.activate(["a", "b"], &cb.clone());
        assert_eq!(component.handler_id(), first);
        assert_eq!(bus.listener_count("a"), 1);
    }

    #[test]
    fn new_callback_identity_resubscribes() {
        let bus = Bus::new();
        let (old_hits, old_cb) = counter();
        let (new_hits, new_cb) = counter();
        let mut component = ListenerRegistrar::new(bus.clone());

        component.activate("a", &old_cb);
        let first = component.handler_id();
        component.activate("a", &new_cb);

        assert_ne!(component.handler_id(), first);
        assert_eq!(bus.listener_count("a"), 1);

        dispatch_custom_event(bus.as_ref(), "a");
        assert_eq!(old_hits.load(Ordering::SeqCst), 0);
        assert_eq!(new_hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn single_name_and_one_element_sequence_match() {
        let bus = Bus::new();
        let (hits, cb) = counter();
        let mut component = ListenerRegistrar::new(bus.clone());

        component.activate("a", &cb);
        let first = component.handler_id();
        component.activate(["a"], &cb);
        assert_eq!(component.handler_id(), first);

        dispatch_custom_event(bus.as_ref(), ["a"]);
        dispatch_custom_event(bus.as_ref(), "a");
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn drop_unmounts() {
        let bus = Bus::new();
        let (hits, cb) = counter();
        {
            let mut component = ListenerRegistrar::new(bus.clone());
            component.activate("a", &cb);
            assert!(component.is_mounted());
        }
        assert!(!bus.has_listeners("a"));
        dispatch_custom_event(bus.as_ref(), "a");
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn remount_after_unmount() {
        let bus = Bus::new();
        let (hits, cb) = counter();
        let mut component = ListenerRegistrar::new(bus.clone());

        component.activate("a", &cb);
        component.unmount();
        assert!(!component.is_mounted());
        assert!(component.event_names().is_none());

        component.activate("a", &cb);
        dispatch_custom_event(bus.as_ref(), "a");
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn pending_tail_finishes_after_unmount() {
        let bus = Bus::new();
        let gate = Arc::new(tokio::sync::Notify::new());
        let started = Arc::new(AtomicUsize::new(0));
        let finished = Arc::new(AtomicUsize::new(0));

        let cb = Callback::future({
            let gate = Arc::clone(&gate);
            let started = Arc::clone(&started);
            let finished = Arc::clone(&finished);
            move || {
                let gate = Arc::clone(&gate);
                let finished = Arc::clone(&finished);
                started.fetch_add(1, Ordering::SeqCst);
                async move {
                    gate.notified().await;
                    finished.fetch_add(1, Ordering::SeqCst);
                }
            }
        });

        let mut component = ListenerRegistrar::new(bus.clone());
        component.activate("a", &cb);
        dispatch_custom_event(bus.as_ref(), "a");
        assert_eq!(started.load(Ordering::SeqCst), 1);

        component.unmount();
        assert!(!bus.has_listeners("a"));
        gate.notify_one();

        tokio::time::timeout(Duration::from_secs(1), async {
            while finished.load(Ordering::SeqCst) == 0 {
                tokio::task::yield_now().await;
            }
        })
        .await
        .expect("tail did not finish after unmount");

        dispatch_custom_event(bus.as_ref(), "a");
        tokio::task::yield_now().await;
        assert_eq!(started.load(Ordering::SeqCst), 1);
        assert_eq!(finished.load(Ordering::SeqCst), 1);
    }
}
