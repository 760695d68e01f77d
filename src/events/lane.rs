//! # Lane: per-category wiring, fan-out, and dispatch workers.
//!
//! A [`Lane`] owns everything one event category (error, warn, close, or
//! info) needs:
//!
//! - the **wiring record**: `(service name, bounded receiver)` pairs created
//!   at registration time and drained exactly once by `spawn_workers`;
//! - the **subscriber list**: append-only senders handed in via the
//!   observation API;
//! - the **dispatch workers**: one tokio task per wired queue, all observing
//!   the shared abort token.
//!
//! ## Worker loop
//! ```text
//! loop {
//!     select! (biased) {
//!         abort cancelled  => exit
//!         payload = rx     => Some(p) => fan_out(tag(name, p))
//!                             None    => exit (service dropped its sender)
//!     }
//! }
//! ```
//!
//! ## Rules
//! - Per-producer FIFO: events from one service, within one category, reach
//!   every subscriber in emission order. No ordering across services or
//!   categories.
//! - The abort arm is polled first (`biased`), so no event is delivered
//!   after the token fires even if more payloads sit in the queue.
//! - No lock is held across an await: fan-out snapshots the sender list,
//!   then sends.

use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::config::DeliveryPolicy;

use super::event::Tagged;

/// One wired producer queue, recorded at registration.
struct Wire<P> {
    name: String,
    rx: mpsc::Receiver<P>,
}

/// Wiring record, subscriber list, and worker spawner for one category.
pub(crate) struct Lane<E: Tagged> {
    capacity: usize,
    delivery: DeliveryPolicy,
    wired: Mutex<Vec<Wire<E::Payload>>>,
    subscribers: Arc<Mutex<Vec<mpsc::Sender<E>>>>,
}

impl<E: Tagged> Lane<E> {
    /// Creates an empty lane.
    ///
    /// `capacity` bounds each producer queue (min 1, clamped); `delivery`
    /// governs pushes onto subscriber queues.
    pub(crate) fn new(capacity: usize, delivery: DeliveryPolicy) -> Self {
        Self {
            capacity: capacity.max(1),
            delivery,
            wired: Mutex::new(Vec::new()),
            subscribers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Allocates a bounded producer queue for `name`, records the receiver
    /// in the wiring record, and returns the sender for the service to keep.
    ///
    /// Never fails; duplicate names are rejected by the store before wiring
    /// happens.
    pub(crate) fn attach(&self, name: &str) -> mpsc::Sender<E::Payload> {
        let (tx, rx) = mpsc::channel(self.capacity);
        self.wired
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Wire {
                name: name.to_string(),
                rx,
            });
        tx
    }

    /// Appends a subscriber queue to this category's list.
    ///
    /// Lists are append-only; there is no unsubscribe.
    pub(crate) fn subscribe(&self, tx: mpsc::Sender<E>) {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(tx);
    }

    /// Drains the wiring record and spawns one dispatch worker per entry.
    ///
    /// Workers are one-shot: they run until `abort` fires (or the producer
    /// side is dropped) and are never restarted. Queues wired after this
    /// call get no worker.
    ///
    /// Must be called from within a tokio runtime.
    pub(crate) fn spawn_workers(&self, abort: &CancellationToken) {
        let wired: Vec<Wire<E::Payload>> = {
            let mut guard = self.wired.lock().unwrap_or_else(PoisonError::into_inner);
            guard.drain(..).collect()
        };

        for wire in wired {
            let subscribers = Arc::clone(&self.subscribers);
            let delivery = self.delivery;
            let abort = abort.clone();

            tokio::spawn(async move {
                let Wire { name, mut rx } = wire;
                loop {
                    tokio::select! {
                        biased;
                        _ = abort.cancelled() => break,
                        payload = rx.recv() => match payload {
                            Some(p) => {
                                fan_out(&subscribers, delivery, E::tag(&name, p)).await;
                            }
                            None => break,
                        },
                    }
                }
            });
        }
    }

    /// Pushes an already-tagged event to every current subscriber.
    ///
    /// Used by the shutdown coordinator, which emits info events directly
    /// rather than through a wired queue.
    pub(crate) async fn publish(&self, event: E) {
        fan_out(&self.subscribers, self.delivery, event).await;
    }
}

/// Fan one event out to every subscriber queue, in list order.
async fn fan_out<E: Tagged>(
    subscribers: &Mutex<Vec<mpsc::Sender<E>>>,
    delivery: DeliveryPolicy,
    event: E,
) {
    // Snapshot under the lock; senders are cheap to clone.
    let targets: Vec<mpsc::Sender<E>> = subscribers
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();

    match delivery {
        DeliveryPolicy::Block => {
            for tx in &targets {
                // Waits while the queue is full; a dropped receiver returns
                // immediately and the event is skipped for it.
                let _ = tx.send(event.clone()).await;
            }
        }
        DeliveryPolicy::Drop => {
            for tx in &targets {
                let _ = tx.try_send(event.clone());
            }
        }
    }
}
