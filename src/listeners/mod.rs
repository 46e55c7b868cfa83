//! # Listener building blocks.
//!
//! ```text
//! Callback ──► Handler (one per activation) ──► listener table entries
//!                 │
//!                 └─ call() ─► Invocation::Ready(result)
//!                              Invocation::Pending(future) ─► spawned, never awaited
//!
//! failures ─► ReportUnhandled (TracingReporter by default)
//! ```

mod callback;
mod handler;
mod reporter;

pub use callback::{BoxListenerFuture, Callback, Invocation};
pub use handler::Handler;
pub use reporter::{ReportUnhandled, TracingReporter};
