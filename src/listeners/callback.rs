//! # Function-backed callbacks (`Callback`)
//!
//! [`Callback`] wraps a zero-argument closure. The closure may be synchronous
//! or return a future; either way calling it yields an [`Invocation`]:
//! - [`Invocation::Ready`] for synchronous work that has already finished,
//! - [`Invocation::Pending`] for an async tail the bus spawns and forgets.
//!
//! ## Identity
//! Every constructor call mints a new identity. Clones share it. The
//! [`ListenerRegistrar`](crate::ListenerRegistrar) compares callbacks by
//! identity, so keep the `Callback` around across activations instead of
//! rebuilding it each time.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use custom_events::Callback;
//!
//! let hits = Arc::new(AtomicUsize::new(0));
//! let cb = Callback::new({
//!     let hits = Arc::clone(&hits);
//!     move || {
//!         hits.fetch_add(1, Ordering::SeqCst);
//!     }
//! });
//!
//! let same = cb.clone();
//! assert!(cb.same_as(&same));
//! assert!(!cb.same_as(&Callback::new(|| {})));
//! ```

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;

use futures::FutureExt;

use crate::error::ListenerError;

/// Boxed async tail of a callback.
pub type BoxListenerFuture = Pin<Box<dyn Future<Output = Result<(), ListenerError>> + Send>>;

type CallbackFn = dyn Fn() -> Invocation + Send + Sync + 'static;

static CALLBACK_ID: AtomicU64 = AtomicU64::new(1);

/// Result of calling a [`Callback`] once.
pub enum Invocation {
    /// Synchronous callback finished.
    Ready(Result<(), ListenerError>),
    /// Async callback returned a future that still has to be driven.
    Pending(BoxListenerFuture),
}

impl fmt::Debug for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Invocation::Ready(res) => f.debug_tuple("Ready").field(res).finish(),
            Invocation::Pending(_) => f.write_str("Pending"),
        }
    }
}

/// Zero-argument listener callback, synchronous or asynchronous.
#[derive(Clone)]
pub struct Callback {
    id: u64,
    f: Arc<CallbackFn>,
}

impl Callback {
    /// Synchronous callback that cannot fail.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self::from_fn(move || {
            f();
            Invocation::Ready(Ok(()))
        })
    }

    /// Synchronous callback whose `Err` is reported as [`ListenerError::Failed`].
    pub fn fallible<F, E>(f: F) -> Self
    where
        F: Fn() -> Result<(), E> + Send + Sync + 'static,
        E: fmt::Display,
    {
        Self::from_fn(move || Invocation::Ready(f().map_err(ListenerError::failed)))
    }

    /// Async callback; a fresh future is created per invocation.
    pub fn future<F, Fut>(f: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self::from_fn(move || Invocation::Pending(f().map(Ok::<(), ListenerError>).boxed()))
    }

    /// Async callback whose `Err` is reported as [`ListenerError::Failed`].
    pub fn try_future<F, Fut, E>(f: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), E>> + Send + 'static,
        E: fmt::Display,
    {
        Self::from_fn(move || {
            Invocation::Pending(f().map(|r| r.map_err(ListenerError::failed)).boxed())
        })
    }

    fn from_fn<F>(f: F) -> Self
    where
        F: Fn() -> Invocation + Send + Sync + 'static,
    {
        Self {
            id: CALLBACK_ID.fetch_add(1, AtomicOrdering::Relaxed),
            f: Arc::new(f),
        }
    }

    /// True if both handles come from the same constructor call.
    #[inline]
    pub fn same_as(&self, other: &Callback) -> bool {
        self.id == other.id
    }

    /// Calls the closure once.
    #[inline]
    pub fn call(&self) -> Invocation {
        (self.f)()
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sync_callbacks_are_ready() {
        let ok = Callback::new(|| {});
        assert!(matches!(ok.call(), Invocation::Ready(Ok(()))));

        let bad = Callback::fallible(|| Err::<(), _>("nope"));
        match bad.call() {
            Invocation::Ready(Err(err)) => assert_eq!(err, ListenerError::failed("nope")),
            other => panic!("unexpected invocation: {other:?}"),
        }
    }

    #[test]
    fn async_callbacks_are_pending() {
        let cb = Callback::future(|| async {});
        assert!(matches!(cb.call(), Invocation::Pending(_)));

        let cb = Callback::try_future(|| async { Err::<(), _>("late") });
        match cb.call() {
            Invocation::Pending(fut) => {
                let res = futures::executor::block_on(fut);
                assert_eq!(res, Err(ListenerError::failed("late")));
            }
            other => panic!("unexpected invocation: {other:?}"),
        }
    }

    #[test]
    fn identity_follows_clones_not_contents() {
        let a = Callback::new(|| {});
        let b = Callback::new(|| {});
        assert!(a.same_as(&a.clone()));
        assert!(!a.same_as(&b));
    }
}
