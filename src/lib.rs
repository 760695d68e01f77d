//! # harbor
//!
//! **Harbor** is a process-wide service registry with a lightweight
//! publish/subscribe mechanism for lifecycle events emitted by registered
//! services.
//!
//! Independent components register themselves under a name, are retrieved by
//! other components, and have their operational events (errors, warnings,
//! unexpected-close notifications, informational messages) aggregated and
//! fanned out to a dynamic set of subscriber queues, with an orderly shutdown
//! path.
//!
//! ## Architecture
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │   Service    │   │   Service    │   │   Service    │
//!     │  "database"  │   │   "cache"    │   │    "http"    │
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            │ register(name, service, Capabilities)
//!            ▼                  ▼                  ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Harbor (registry + dispatcher)                                   │
//! │  - Store (name → service, closer)                                 │
//! │  - 4 Lanes (error / warn / close / info)                          │
//! │      wiring records: per-service bounded producer queues          │
//! │      subscriber lists: append-only, per category                  │
//! │  - abort token (CancellationToken, one-shot)                      │
//! └──────┬──────────────────┬──────────────────┬──────────────────────┘
//!        │ ready() spawns one worker per wired queue
//!        ▼                  ▼                  ▼
//!   ┌──────────┐       ┌──────────┐       ┌──────────┐
//!   │  worker  │       │  worker  │       │  worker  │
//!   │ (select) │       │ (select) │       │ (select) │
//!   └────┬─────┘       └────┬─────┘       └────┬─────┘
//!        │ wrap payload with service name
//!        ▼                  ▼                  ▼
//!   ErrorEvent / InfoEvent ──► every subscribed queue, in list order
//! ```
//!
//! ## Lifecycle
//! ```text
//! 1. register(..)   services declare emitter roles via Capabilities;
//!                   each role gets a bounded producer queue (capacity from
//!                   HarborConfig::service_queue_capacity).
//! 2. subscribe_*(q) observers hand in their own queues, per category.
//! 3. ready()        spawns one dispatch worker per wired queue. Call once,
//!                   after all registrations, so no event is lost during
//!                   bootstrap.
//! 4. close()        cancels the abort token (all workers exit), then closes
//!                   every Closeable service in turn, emitting an InfoEvent
//!                   before and after each attempt. Fail-fast: the first
//!                   close failure stops the sequence.
//! ```
//!
//! ## Example
//! ```rust
//! use std::any::Any;
//! use std::sync::{Arc, OnceLock};
//! use tokio::sync::mpsc;
//! use harbor::{Capabilities, Harbor, HarborConfig, InfoSource};
//!
//! #[derive(Default)]
//! struct Pinger {
//!     infos: OnceLock<mpsc::Sender<String>>,
//! }
//!
//! impl InfoSource for Pinger {
//!     fn attach_infos(&self, tx: mpsc::Sender<String>) {
//!         let _ = self.infos.set(tx);
//!     }
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let harbor = Harbor::new(HarborConfig::default());
//!
//!     let pinger = Arc::new(Pinger::default());
//!     harbor.register(
//!         "pinger",
//!         pinger.clone() as Arc<dyn Any + Send + Sync>,
//!         Capabilities::new().with_infos(pinger.clone()),
//!     )?;
//!
//!     let (tx, mut rx) = mpsc::channel(16);
//!     harbor.subscribe_infos(tx);
//!     harbor.ready()?;
//!
//!     pinger.infos.get().unwrap().send("ping".into()).await?;
//!     let ev = rx.recv().await.unwrap();
//!     assert_eq!(ev.name, "pinger");
//!     assert_eq!(ev.message, "ping");
//!
//!     harbor.close().await?;
//!     Ok(())
//! }
//! ```

mod config;
mod core;
mod error;
mod events;
mod services;

// ---- Public re-exports ----

pub use config::{DeliveryPolicy, HarborConfig};
pub use core::Harbor;
pub use error::{BoxError, HarborError};
pub use events::{ErrorEvent, InfoEvent, SharedError};
pub use services::{Capabilities, CloseSource, Closeable, ErrorSource, InfoSource, WarnSource};

// Optional: expose a simple built-in stdout drain (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
mod drains;
#[cfg(feature = "logging")]
pub use drains::LogDrain;
