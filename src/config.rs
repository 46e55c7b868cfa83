//! # Bus configuration.
//!
//! Provides [`BusConfig`], the settings that control how a [`Bus`](crate::Bus)
//! runs listener callbacks.
//!
//! There is no environment or file based configuration; callers build a
//! `BusConfig` in code and hand it to [`Bus::builder`](crate::Bus::builder).

use tokio::runtime::Handle;

/// Configuration for a [`Bus`](crate::Bus).
///
/// ## Field semantics
/// - `catch_panics`: isolate panicking synchronous callbacks (`true`) or let the
///   panic unwind into the dispatcher's caller (`false`)
/// - `runtime`: fallback runtime for async callback tails
///
/// ## Notes
/// All fields are public. Async tails are always isolated, whatever
/// `catch_panics` says: they run on a runtime task that nobody awaits.
#[derive(Clone, Debug)]
pub struct BusConfig {
    /// Catch panics raised by synchronous callbacks.
    ///
    /// When `true`, a panic is reported as
    /// [`ListenerError::Panicked`](crate::ListenerError::Panicked) and dispatch
    /// continues with the next listener.
    pub catch_panics: bool,

    /// Runtime used to spawn async tails when dispatch happens outside any
    /// tokio runtime context.
    ///
    /// The ambient runtime (`Handle::try_current`) always wins when present.
    /// With neither available, the tail is dropped and reported as
    /// [`ListenerError::NoRuntime`](crate::ListenerError::NoRuntime). A tail
    /// spawned on a runtime that has since shut down is reported as
    /// [`ListenerError::Cancelled`](crate::ListenerError::Cancelled).
    ///
    /// On a multi-thread runtime a tail may start while later synchronous
    /// listeners of the same dispatch are still running; a `current_thread`
    /// runtime keeps all listener code on one thread.
    pub runtime: Option<Handle>,
}

impl BusConfig {
    /// Returns the runtime an async tail should be spawned on, if any.
    pub(crate) fn spawn_handle(&self) -> Option<Handle> {
        Handle::try_current().ok().or_else(|| self.runtime.clone())
    }
}

impl Default for BusConfig {
    /// Default configuration:
    ///
    /// - `catch_panics = true`
    /// - `runtime = None` (ambient runtime only)
    fn default() -> Self {
        Self {
            catch_panics: true,
            runtime: None,
        }
    }
}
