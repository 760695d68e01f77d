//! Lifecycle events and the dispatch lane.
//!
//! - [`event`]: the event types handed to subscribers ([`ErrorEvent`],
//!   [`InfoEvent`]) and the [`Tagged`](event::Tagged) wrapping contract;
//! - [`lane`]: one category's wiring records, subscriber list, and dispatch
//!   workers.

pub(crate) mod event;
pub(crate) mod lane;

pub use event::{ErrorEvent, InfoEvent, SharedError};
