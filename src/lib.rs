//! # custom-events
//!
//! **custom-events** ties a component's lifetime to one or more named,
//! payload-less, in-process events, and lets any other part of the program
//! dispatch those events by name.
//!
//! There is no transport, persistence or retry. Delivery is synchronous and
//! happens on the dispatching thread; async callbacks get their tail spawned
//! on a tokio runtime and are never waited for.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   component A                    component B               anywhere
//! ┌───────────────────┐        ┌───────────────────┐   ┌─────────────────────────┐
//! │ ListenerRegistrar │        │   Subscription    │   │ dispatch_custom_event() │
//! │ activate(N, C)    │        │   (RAII guard)    │   └────────────┬────────────┘
//! └─────────┬─────────┘        └─────────┬─────────┘                │
//!           │ add/remove (name, handler) │                          │ CustomEvent per name
//!           ▼                            ▼                          ▼
//! ┌───────────────────────────────────────────────────────────────────────────┐
//! │  EventTarget (Bus by default)                                             │
//! │  name → [handler1, handler2, ...]   (registration order)                  │
//! └─────────────────────────────────────┬─────────────────────────────────────┘
//!                                       ▼
//!                   handler.call() ─► Ready(Ok)   ─► done
//!                                  ─► Ready(Err)  ─► ReportUnhandled
//!                                  ─► Pending     ─► tokio spawn (fire-and-forget)
//! ```
//!
//! ### Lifecycle
//! ```text
//! mount    ──► activate(N, C)  ──► one handler added under every name in N
//! update   ──► activate(N', C')
//!               ├─ N' == N and C' is C ─► nothing happens
//!               └─ otherwise ─► remove handler from N, add a new one under N'
//! unmount  ──► unmount() / drop ─► handler removed from every name
//! ```
//!
//! ## Features
//! | Area             | Description                                                | Key types / functions                                   |
//! |------------------|------------------------------------------------------------|---------------------------------------------------------|
//! | **Registration** | Lifetime-scoped listeners, re-synced on input changes.     | [`ListenerRegistrar`], [`subscribe_to_custom_events`]   |
//! | **Dispatch**     | Synchronous publish of one or more names.                  | [`dispatch_custom_event`]                               |
//! | **Targets**      | Injected listener table; stock in-process implementation.  | [`EventTarget`], [`Bus`], [`Bus::global`], [`global::init`] |
//! | **Errors**       | Listener failures routed to a reporter, never to callers.  | [`ListenerError`], [`ReportUnhandled`]                  |
//! | **Configuration**| Panic isolation and fallback runtime for async tails.      | [`BusConfig`]                                           |
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use custom_events::{dispatch_custom_event, Bus, Callback, ListenerRegistrar};
//!
//! let bus = Bus::new();
//! let refreshes = Arc::new(AtomicUsize::new(0));
//! let refetch = Callback::new({
//!     let refreshes = Arc::clone(&refreshes);
//!     move || { refreshes.fetch_add(1, Ordering::SeqCst); }
//! });
//!
//! // mount
//! let mut component = ListenerRegistrar::new(bus.clone());
//! component.activate(["dataRefresh", "userUpdate"], &refetch);
//!
//! dispatch_custom_event(bus.as_ref(), "dataRefresh");
//! dispatch_custom_event(bus.as_ref(), ["dataRefresh", "userUpdate"]);
//! assert_eq!(refreshes.load(Ordering::SeqCst), 3);
//!
//! // unmount
//! drop(component);
//! dispatch_custom_event(bus.as_ref(), "dataRefresh");
//! assert_eq!(refreshes.load(Ordering::SeqCst), 3);
//! ```
mod config;
mod dispatch;
mod error;
mod events;
mod listeners;
mod registrar;

pub mod global;

#[cfg(test)]
mod testing;

// ---- Public re-exports ----

pub use config::BusConfig;
pub use dispatch::dispatch_custom_event;
pub use error::ListenerError;
pub use events::{Bus, BusBuilder, CustomEvent, EventNames, EventTarget};
pub use listeners::{BoxListenerFuture, Callback, Handler, Invocation, ReportUnhandled, TracingReporter};
pub use registrar::{subscribe_to_custom_events, ListenerRegistrar, Subscription};
