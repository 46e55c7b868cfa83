//! # Unhandled-error reporting.
//!
//! Listener failures never reach the code that dispatched the event. They go
//! to the bus's [`ReportUnhandled`] implementation instead, which plays the
//! role of a runtime's default unhandled-error handler.
//!
//! ## Contract
//! - `report` may be called from the dispatching thread (synchronous
//!   callbacks) or from a runtime worker (async tails).
//! - `report` must not panic; nothing above it would catch the panic on a
//!   runtime worker.
//!
//! ## Example
//! ```rust
//! use custom_events::{CustomEvent, ListenerError, ReportUnhandled};
//!
//! struct Stderr;
//!
//! impl ReportUnhandled for Stderr {
//!     fn report(&self, event: &CustomEvent, error: &ListenerError) {
//!         eprintln!("[{}] {}", event.name(), error.as_message());
//!     }
//!     fn name(&self) -> &'static str { "stderr" }
//! }
//! ```

use crate::error::ListenerError;
use crate::events::CustomEvent;

/// Sink for listener failures.
pub trait ReportUnhandled: Send + Sync + 'static {
    /// Handle one failure raised while `event` was being delivered.
    fn report(&self, event: &CustomEvent, error: &ListenerError);

    /// Human-readable name (for logs).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Default reporter: logs every failure at `error` level via `tracing`.
///
/// ## Example output
/// ```text
/// ERROR custom_events: unhandled listener error event="refresh" seq=4 age_ms=12 label="listener_failed" error: connection refused
/// ```
#[derive(Default, Debug, Clone, Copy)]
pub struct TracingReporter;

impl ReportUnhandled for TracingReporter {
    fn report(&self, event: &CustomEvent, error: &ListenerError) {
        tracing::error!(
            event = event.name(),
            seq = event.seq,
            age_ms = event.age().as_millis() as u64,
            label = error.as_label(),
            "unhandled listener error {}",
            error.as_message()
        );
    }

    fn name(&self) -> &'static str {
        "tracing"
    }
}
