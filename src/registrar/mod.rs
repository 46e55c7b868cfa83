//! Listener registration bound to a component's lifetime.
//!
//! - [`Subscription`] RAII guard for one handler under a set of names
//! - [`subscribe_to_custom_events`] creates a guard
//! - [`ListenerRegistrar`] hook-style wrapper that keeps a guard in sync with
//!   changing inputs across updates

mod hook;
mod subscription;

pub use hook::ListenerRegistrar;
pub use subscription::{subscribe_to_custom_events, Subscription};
