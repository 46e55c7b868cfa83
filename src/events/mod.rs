//! Custom events: names, carrier, and the listener table.
//!
//! ## Contents
//! - [`EventNames`] normalized ordered set of names (single name or sequence)
//! - [`CustomEvent`] payload-less carrier built per dispatched name
//! - [`EventTarget`] register / unregister / publish seam
//! - [`Bus`] default in-process [`EventTarget`], built via [`BusBuilder`]

mod builder;
mod bus;
mod event;
mod names;
mod target;

pub use builder::BusBuilder;
pub use bus::Bus;
pub use event::CustomEvent;
pub use names::EventNames;
pub use target::EventTarget;
