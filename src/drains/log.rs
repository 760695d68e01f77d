//! # LogDrain — simple event printer.
//!
//! A minimal drain that subscribes to all four categories and prints
//! incoming events to stdout. Use it for tests or demos.
//!
//! ## Example output
//! ```text
//! [error] service=db err="connection refused"
//! [warn] service=cache err="eviction lagging"
//! [close] service=http err="listener dropped"
//! [info] service=db msg="harbor is closing service db"
//! ```
//!
//! Not intended for production use: hand your own queues to the
//! `subscribe_*` methods for structured logging or metrics collection.

use tokio::sync::mpsc;

use crate::core::Harbor;
use crate::events::{ErrorEvent, InfoEvent};

/// Queue capacity per category.
const DRAIN_CAPACITY: usize = 1024;

/// Stdout printing drain.
///
/// Enabled via the `logging` feature.
pub struct LogDrain;

impl LogDrain {
    /// Subscribes to every category of `harbor` and spawns one printer task
    /// per category.
    ///
    /// Must be called from within a tokio runtime, before `ready()` if no
    /// event is to be missed.
    pub fn attach(harbor: &Harbor) {
        Self::drain_errors(harbor, "error");
        Self::drain_warns(harbor, "warn");
        Self::drain_closes(harbor, "close");

        let (tx, mut rx) = mpsc::channel::<InfoEvent>(DRAIN_CAPACITY);
        harbor.subscribe_infos(tx);
        tokio::spawn(async move {
            while let Some(ev) = rx.recv().await {
                println!("[info] service={} msg={:?}", ev.name, ev.message);
            }
        });
    }

    fn drain_errors(harbor: &Harbor, label: &'static str) {
        let (tx, rx) = mpsc::channel::<ErrorEvent>(DRAIN_CAPACITY);
        harbor.subscribe_errors(tx);
        Self::print_faults(rx, label);
    }

    fn drain_warns(harbor: &Harbor, label: &'static str) {
        let (tx, rx) = mpsc::channel::<ErrorEvent>(DRAIN_CAPACITY);
        harbor.subscribe_warns(tx);
        Self::print_faults(rx, label);
    }

    fn drain_closes(harbor: &Harbor, label: &'static str) {
        let (tx, rx) = mpsc::channel::<ErrorEvent>(DRAIN_CAPACITY);
        harbor.subscribe_closes(tx);
        Self::print_faults(rx, label);
    }

    fn print_faults(mut rx: mpsc::Receiver<ErrorEvent>, label: &'static str) {
        tokio::spawn(async move {
            while let Some(ev) = rx.recv().await {
                println!("[{label}] service={} err={:?}", ev.name, ev.error.to_string());
            }
        });
    }
}
