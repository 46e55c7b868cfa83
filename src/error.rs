//! Errors reported on the unhandled-error path.
//!
//! Dispatch itself never fails. Anything that goes wrong inside a listener is
//! turned into a [`ListenerError`] and handed to the bus's
//! [`ReportUnhandled`](crate::ReportUnhandled) implementation instead of being
//! returned to whoever dispatched the event.
//!
//! Like the rest of the crate, the enum offers `as_label` / `as_message`
//! helpers for logs and metrics.

use thiserror::Error;

/// # Failures raised by listener callbacks.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListenerError {
    /// A fallible callback (or its async tail) returned an error.
    #[error("listener failed: {error}")]
    Failed {
        /// The underlying error message.
        error: String,
    },

    /// A callback (or its async tail) panicked.
    #[error("listener panicked: {info}")]
    Panicked {
        /// Panic payload rendered as text, when it was a string.
        info: String,
    },

    /// An async callback fired but no tokio runtime was available for its tail.
    #[error("no tokio runtime available to drive async listener")]
    NoRuntime,

    /// An async tail was dropped before it finished, e.g. because the runtime
    /// it was spawned on had shut down.
    #[error("async listener cancelled before completion")]
    Cancelled,
}

impl ListenerError {
    /// Wraps any displayable error as [`ListenerError::Failed`].
    pub fn failed(error: impl std::fmt::Display) -> Self {
        ListenerError::Failed {
            error: error.to_string(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use custom_events::ListenerError;
    ///
    /// let err = ListenerError::failed("boom");
    /// assert_eq!(err.as_label(), "listener_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ListenerError::Failed { .. } => "listener_failed",
            ListenerError::Panicked { .. } => "listener_panicked",
            ListenerError::NoRuntime => "listener_no_runtime",
            ListenerError::Cancelled => "listener_cancelled",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            ListenerError::Failed { error } => format!("error: {error}"),
            ListenerError::Panicked { info } => format!("panic: {info}"),
            ListenerError::NoRuntime => "async tail dropped: no runtime".to_string(),
            ListenerError::Cancelled => "async tail dropped before completion".to_string(),
        }
    }

    /// Builds [`ListenerError::Panicked`] from a `catch_unwind` payload.
    pub(crate) fn from_panic(payload: &(dyn std::any::Any + Send)) -> Self {
        let info = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };
        ListenerError::Panicked { info }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_stable() {
        assert_eq!(ListenerError::failed("x").as_label(), "listener_failed");
        assert_eq!(
            ListenerError::Panicked { info: "x".into() }.as_label(),
            "listener_panicked"
        );
        assert_eq!(ListenerError::NoRuntime.as_label(), "listener_no_runtime");
        assert_eq!(ListenerError::Cancelled.as_label(), "listener_cancelled");
    }

    #[test]
    fn panic_payloads_are_rendered() {
        let err = std::panic::catch_unwind(|| panic!("static message")).unwrap_err();
        assert_eq!(
            ListenerError::from_panic(err.as_ref()),
            ListenerError::Panicked {
                info: "static message".into()
            }
        );

        let n = 7;
        let err = std::panic::catch_unwind(|| panic!("formatted {n}")).unwrap_err();
        assert_eq!(
            ListenerError::from_panic(err.as_ref()).as_message(),
            "panic: formatted 7"
        );
    }
}
