//! # Harbor: registration, wiring, dispatch startup, and shutdown.
//!
//! One [`Harbor`] owns the whole registry: the service store, the four
//! dispatch lanes, and the abort token. Construct it once, share it (it is
//! `Sync`; methods take `&self`), and drive it through the lifecycle:
//!
//! ```text
//! register(..)*  ─►  subscribe_*(..)*  ─►  ready()  ─►  ...  ─►  close()
//! ```
//!
//! ## Rules
//! - `register` is safe to call concurrently; the store and wiring records
//!   are internally synchronized.
//! - `ready()` is one-shot: it drains the wiring records into dispatch
//!   workers. A second call fails with [`HarborError::AlreadyReady`].
//! - `close()` is one-shot behind a latch: a second call fails with
//!   [`HarborError::AlreadyClosed`] instead of double-cancelling the abort
//!   token.
//! - Registrations made after `ready()` still wire queues but get no
//!   dispatch worker; their events are never delivered.

use std::any::Any;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::config::HarborConfig;
use crate::error::HarborError;
use crate::events::lane::Lane;
use crate::events::{ErrorEvent, InfoEvent};
use crate::services::Capabilities;

use super::store::{Entry, Store};

/// Process-wide service registry with lifecycle event fan-out.
pub struct Harbor {
    store: Store,
    errors: Lane<ErrorEvent>,
    warns: Lane<ErrorEvent>,
    closes: Lane<ErrorEvent>,
    infos: Lane<InfoEvent>,
    abort: CancellationToken,
    started: AtomicBool,
    closed: AtomicBool,
}

impl Harbor {
    /// Creates an empty registry with the given configuration.
    #[must_use]
    pub fn new(cfg: HarborConfig) -> Self {
        let capacity = cfg.service_queue_capacity;
        let delivery = cfg.delivery;
        Self {
            store: Store::new(),
            errors: Lane::new(capacity, delivery),
            warns: Lane::new(capacity, delivery),
            closes: Lane::new(capacity, delivery),
            infos: Lane::new(capacity, delivery),
            abort: CancellationToken::new(),
            started: AtomicBool::new(false),
            closed: AtomicBool::new(false),
        }
    }

    // ---------------------------
    // Store operations
    // ---------------------------

    /// Registers `service` under `name` and wires a bounded queue for each
    /// role declared in `caps`.
    ///
    /// Fails with [`HarborError::DuplicateName`] if the name is taken; the
    /// existing registration is unaffected. Wiring itself never fails.
    pub fn register(
        &self,
        name: impl Into<String>,
        service: Arc<dyn Any + Send + Sync>,
        caps: Capabilities,
    ) -> Result<(), HarborError> {
        let name = name.into();

        self.store.insert(
            &name,
            Entry {
                service,
                closer: caps.closer,
            },
        )?;

        // The name is now reserved; hand each declared role its queue.
        if let Some(source) = caps.errors {
            source.attach_errors(self.errors.attach(&name));
        }
        if let Some(source) = caps.warns {
            source.attach_warns(self.warns.attach(&name));
        }
        if let Some(source) = caps.closes {
            source.attach_closed(self.closes.attach(&name));
        }
        if let Some(source) = caps.infos {
            source.attach_infos(self.infos.attach(&name));
        }
        Ok(())
    }

    /// Retrieves a registered service.
    pub fn get(&self, name: &str) -> Result<Arc<dyn Any + Send + Sync>, HarborError> {
        self.store.get(name).ok_or_else(|| HarborError::NotFound {
            name: name.to_string(),
        })
    }

    /// Retrieves a registered service, returning `None` when nothing is
    /// registered under `name`.
    pub fn get_opt(&self, name: &str) -> Option<Arc<dyn Any + Send + Sync>> {
        self.store.get(name)
    }

    /// True if a service is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.store.contains(name)
    }

    /// Sorted names of all registered services.
    pub fn names(&self) -> Vec<String> {
        self.store.names()
    }

    // ---------------------------
    // Dispatch
    // ---------------------------

    /// Starts one dispatch worker per wired queue.
    ///
    /// Expected to be called exactly once, after all services have
    /// registered, so every wiring record is established before dispatch
    /// begins. A second call fails with [`HarborError::AlreadyReady`].
    ///
    /// Must be called from within a tokio runtime.
    pub fn ready(&self) -> Result<(), HarborError> {
        if self.started.swap(true, Ordering::SeqCst) {
            return Err(HarborError::AlreadyReady);
        }
        self.errors.spawn_workers(&self.abort);
        self.warns.spawn_workers(&self.abort);
        self.closes.spawn_workers(&self.abort);
        self.infos.spawn_workers(&self.abort);
        Ok(())
    }

    // ---------------------------
    // Observation API
    // ---------------------------

    /// Subscribes `tx` to errors emitted by registered services.
    ///
    /// The queue's capacity is the subscriber's own choice; with
    /// [`DeliveryPolicy::Block`](crate::DeliveryPolicy::Block) a full queue
    /// stalls dispatch for the whole category.
    pub fn subscribe_errors(&self, tx: mpsc::Sender<ErrorEvent>) {
        self.errors.subscribe(tx);
    }

    /// Subscribes `tx` to warnings emitted by registered services.
    pub fn subscribe_warns(&self, tx: mpsc::Sender<ErrorEvent>) {
        self.warns.subscribe(tx);
    }

    /// Subscribes `tx` to unexpected-close notifications emitted by
    /// registered services.
    pub fn subscribe_closes(&self, tx: mpsc::Sender<ErrorEvent>) {
        self.closes.subscribe(tx);
    }

    /// Subscribes `tx` to info messages emitted by registered services (and
    /// by the shutdown coordinator).
    pub fn subscribe_infos(&self, tx: mpsc::Sender<InfoEvent>) {
        self.infos.subscribe(tx);
    }

    // ---------------------------
    // Shutdown
    // ---------------------------

    /// Shuts the registry down.
    ///
    /// 1. Cancels the abort token; every dispatch worker observes it and
    ///    exits. Events pushed afterwards onto the now-orphaned producer
    ///    queues are never delivered.
    /// 2. Walks the registered services (map order, non-deterministic) and,
    ///    for each with a closeable role, emits an [`InfoEvent`] announcing
    ///    the attempt, awaits its close, and emits a second [`InfoEvent`] on
    ///    success.
    ///
    /// Fail-fast: the first close failure is returned as
    /// [`HarborError::CloseFailure`] and the remaining services are not
    /// closed. A second `close()` fails with [`HarborError::AlreadyClosed`].
    pub async fn close(&self) -> Result<(), HarborError> {
        if self.closed.swap(true, Ordering::SeqCst) {
            return Err(HarborError::AlreadyClosed);
        }
        self.abort.cancel();

        for (name, closer) in self.store.closers() {
            self.infos
                .publish(InfoEvent {
                    name: name.clone(),
                    message: format!("harbor is closing service {name}"),
                })
                .await;

            if let Err(source) = closer.close().await {
                return Err(HarborError::CloseFailure { name, source });
            }

            self.infos
                .publish(InfoEvent {
                    name: name.clone(),
                    message: format!("harbor closed service {name}"),
                })
                .await;
        }
        Ok(())
    }
}
