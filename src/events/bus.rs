//! # In-process listener table.
//!
//! [`Bus`] maps event names to ordered lists of [`Handler`]s and delivers
//! [`CustomEvent`]s to them synchronously on the dispatching thread.
//!
//! ## Architecture
//! ```text
//! dispatch(event)
//!     │  read lock, clone entries for event.name(), unlock
//!     ▼
//! snapshot [e1, e2, ..., eN]   (registration order)
//!     │
//!     ├─► e1 removed? skip : handler.call()
//!     │        ├─ Ready(Ok)     ─► done
//!     │        ├─ Ready(Err)    ─► ReportUnhandled
//!     │        ├─ panic         ─► ReportUnhandled (catch_panics = true)
//!     │        └─ Pending(fut)  ─► runtime.spawn(fut), not awaited
//!     ├─► e2 ...
//!     └─► eN ...
//! ```
//!
//! ## Rules
//! - **No lock during delivery**: callbacks may dispatch, subscribe or
//!   unsubscribe on the same bus.
//! - **Snapshot**: handlers added during a dispatch are not invoked for it;
//!   handlers removed during a dispatch are skipped if not yet invoked.
//! - **Dedup**: a `(name, handler)` pair is stored at most once.
//! - **Fire-and-forget**: async tails are spawned and never awaited. A tail
//!   dropped before it finishes (runtime shut down) is reported as
//!   [`ListenerError::Cancelled`].
//! - **Threading**: synchronous callbacks always run on the dispatching
//!   thread. On a `current_thread` runtime a tail cannot start before
//!   `dispatch()` returns and the caller yields. On a multi-thread runtime a
//!   worker may start it while the remaining synchronous listeners still run,
//!   so tails must not assume they are ordered after them. Use a
//!   `current_thread` runtime when strictly single-threaded delivery matters.

use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::Arc;

use futures::FutureExt;
use parking_lot::RwLock;

use crate::config::BusConfig;
use crate::error::ListenerError;
use crate::events::{BusBuilder, CustomEvent, EventTarget};
use crate::listeners::{BoxListenerFuture, Handler, Invocation, ReportUnhandled};

/// One `(name, handler)` registration.
struct Entry {
    handler: Handler,
    /// Set on removal so in-flight snapshots skip the entry.
    removed: AtomicBool,
}

type ListenerTable = HashMap<Arc<str>, Vec<Arc<Entry>>>;

/// Default [`EventTarget`]: a process-local listener table.
///
/// ### Properties
/// - **Synchronous**: `dispatch()` returns once every synchronous callback ran.
/// - **Isolated**: listener failures go to the configured reporter.
/// - **Shared**: built as `Arc<Bus>`; subscriptions keep their own clone.
pub struct Bus {
    listeners: RwLock<ListenerTable>,
    cfg: BusConfig,
    reporter: Arc<dyn ReportUnhandled>,
}

impl Bus {
    /// Creates a bus with [`BusConfig::default`] and the tracing reporter.
    pub fn new() -> Arc<Self> {
        Self::builder(BusConfig::default()).build()
    }

    /// Returns a builder for a customised bus.
    pub fn builder(cfg: BusConfig) -> BusBuilder {
        BusBuilder::new(cfg)
    }

    pub(crate) fn new_internal(cfg: BusConfig, reporter: Arc<dyn ReportUnhandled>) -> Self {
        Self {
            listeners: RwLock::new(HashMap::new()),
            cfg,
            reporter,
        }
    }

    /// Number of handlers currently registered under `name`.
    pub fn listener_count(&self, name: &str) -> usize {
        self.listeners.read().get(name).map_or(0, Vec::len)
    }

    /// True if at least one handler is registered under `name`.
    pub fn has_listeners(&self, name: &str) -> bool {
        self.listener_count(name) > 0
    }

    /// Sorted list of names with at least one handler.
    pub fn event_names(&self) -> Vec<String> {
        let table = self.listeners.read();
        let mut names: Vec<String> = table.keys().map(|n| n.to_string()).collect();
        names.sort_unstable();
        names
    }

    /// Runs one handler for `event`.
    fn invoke(&self, event: &CustomEvent, handler: &Handler) {
        let invocation = if self.cfg.catch_panics {
            match panic::catch_unwind(AssertUnwindSafe(|| handler.call())) {
                Ok(inv) => inv,
                Err(payload) => {
                    self.reporter
                        .report(event, &ListenerError::from_panic(payload.as_ref()));
                    return;
                }
            }
        } else {
            handler.call()
        };

        match invocation {
            Invocation::Ready(Ok(())) => {}
            Invocation::Ready(Err(err)) => self.reporter.report(event, &err),
            Invocation::Pending(fut) => self.spawn_tail(event, fut),
        }
    }

    /// Spawns an async tail without awaiting it.
    fn spawn_tail(&self, event: &CustomEvent, fut: BoxListenerFuture) {
        let Some(rt) = self.cfg.spawn_handle() else {
            self.reporter.report(event, &ListenerError::NoRuntime);
            return;
        };

        // built outside the async block so it also fires if the task is
        // dropped before its first poll
        let guard = TailGuard {
            reporter: Arc::clone(&self.reporter),
            event: event.clone(),
            finished: false,
        };
        rt.spawn(async move {
            let outcome = AssertUnwindSafe(fut).catch_unwind().await;
            guard.finish(outcome);
        });
    }
}

/// Reports an async tail that ends without running to completion.
struct TailGuard {
    reporter: Arc<dyn ReportUnhandled>,
    event: CustomEvent,
    finished: bool,
}

impl TailGuard {
    fn finish(mut self, outcome: std::thread::Result<Result<(), ListenerError>>) {
        self.finished = true;
        match outcome {
            Ok(Ok(())) => {}
            Ok(Err(err)) => self.reporter.report(&self.event, &err),
            Err(payload) => {
                self.reporter
                    .report(&self.event, &ListenerError::from_panic(payload.as_ref()));
            }
        }
    }
}

impl Drop for TailGuard {
    fn drop(&mut self) {
        if !self.finished {
            self.reporter.report(&self.event, &ListenerError::Cancelled);
        }
    }
}

impl EventTarget for Bus {
    fn add_listener(&self, name: &str, handler: &Handler) -> bool {
        let mut table = self.listeners.write();
        let entries = table.entry(Arc::from(name)).or_default();
        if entries.iter().any(|e| e.handler == *handler) {
            tracing::debug!(event = name, handler = handler.id(), "listener already registered");
            return false;
        }
        entries.push(Arc::new(Entry {
            handler: handler.clone(),
            removed: AtomicBool::new(false),
        }));
        true
    }

    fn remove_listener(&self, name: &str, handler: &Handler) -> bool {
        let mut table = self.listeners.write();
        let Some(entries) = table.get_mut(name) else {
            return false;
        };
        let Some(pos) = entries.iter().position(|e| e.handler == *handler) else {
            return false;
        };

        let entry = entries.remove(pos);
        entry.removed.store(true, AtomicOrdering::Release);
        if entries.is_empty() {
            table.remove(name);
        }
        true
    }

    fn dispatch(&self, event: &CustomEvent) {
        let snapshot: Vec<Arc<Entry>> = match self.listeners.read().get(event.name()) {
            Some(entries) => entries.clone(),
            None => {
                tracing::trace!(event = event.name(), seq = event.seq, "no listeners");
                return;
            }
        };

        tracing::trace!(
            event = event.name(),
            seq = event.seq,
            listeners = snapshot.len(),
            "dispatching"
        );
        for entry in &snapshot {
            if entry.removed.load(AtomicOrdering::Acquire) {
                continue;
            }
            self.invoke(event, &entry.handler);
        }
    }
}

impl std::fmt::Debug for Bus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bus")
            .field("events", &self.event_names())
            .field("cfg", &self.cfg)
            .field("reporter", &self.reporter.name())
            .finish()
    }
}
