//! # Process-wide default bus.
//!
//! Code that does not want to thread a bus through its components can use
//! the shared instance returned by [`Bus::global`]. The helpers below are
//! the ambient counterparts of the target-taking functions at the crate root.
//!
//! Unless [`init`] or [`init_with`] ran first, the global bus is created on
//! first use with [`BusConfig::default`] and the tracing reporter. Either
//! way it lives for the rest of the process.
//!
//! ## Async tails off-runtime
//! The default global bus has no fallback runtime, so async callbacks
//! dispatched from a thread outside any tokio runtime are reported as
//! [`ListenerError::NoRuntime`](crate::ListenerError::NoRuntime). Install a
//! configured bus at startup to drive them:
//!
//! ```rust
//! use custom_events::{global, BusConfig};
//!
//! let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! let cfg = BusConfig {
//!     runtime: Some(rt.handle().clone()),
//!     ..BusConfig::default()
//! };
//! global::init(cfg).expect("global bus already in use");
//! ```

use std::sync::{Arc, OnceLock};

use crate::config::BusConfig;
use crate::events::{Bus, BusBuilder, EventNames};
use crate::listeners::Callback;
use crate::registrar::{ListenerRegistrar, Subscription};

/// Write-once slot holding a bus.
struct GlobalBus(OnceLock<Arc<Bus>>);

impl GlobalBus {
    const fn new() -> Self {
        Self(OnceLock::new())
    }

    fn get(&self) -> Arc<Bus> {
        Arc::clone(self.0.get_or_init(Bus::new))
    }

    /// Installs `bus` unless the slot is already filled; on failure returns
    /// the bus that is in place.
    fn install(&self, bus: Arc<Bus>) -> Result<(), Arc<Bus>> {
        self.0.set(bus).map_err(|_| self.get())
    }
}

static GLOBAL_BUS: GlobalBus = GlobalBus::new();

impl Bus {
    /// Shared process-wide bus.
    pub fn global() -> Arc<Bus> {
        GLOBAL_BUS.get()
    }
}

/// Configures the global bus. Must run before its first use.
///
/// # Errors
/// Returns the existing global bus if one was already created, either by an
/// earlier `init` or by any use of [`Bus::global`] or the helpers below.
pub fn init(cfg: BusConfig) -> Result<(), Arc<Bus>> {
    init_with(Bus::builder(cfg))
}

/// Like [`init`], for a bus that also needs a custom reporter.
pub fn init_with(builder: BusBuilder) -> Result<(), Arc<Bus>> {
    GLOBAL_BUS.install(builder.build())
}

/// [`dispatch_custom_event`](crate::dispatch_custom_event) on the global bus.
pub fn dispatch_custom_event(names: impl Into<EventNames>) {
    crate::dispatch::dispatch_custom_event(Bus::global().as_ref(), names);
}

/// [`subscribe_to_custom_events`](crate::subscribe_to_custom_events) on the global bus.
pub fn subscribe_to_custom_events(names: impl Into<EventNames>, callback: Callback) -> Subscription {
    crate::registrar::subscribe_to_custom_events(Bus::global(), names, callback)
}

/// Unmounted registrar bound to the global bus.
pub fn registrar() -> ListenerRegistrar {
    ListenerRegistrar::new(Bus::global())
}
