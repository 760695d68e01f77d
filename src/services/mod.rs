//! # Service-side contracts.
//!
//! A registered service participates in event emission by fulfilling
//! **emitter roles**. Each role is a small trait whose only job is to accept
//! the bounded sender the registry allocates at registration time; the
//! service keeps the sender and pushes onto it whenever it has something to
//! surface. A fifth, independent role — [`Closeable`] — is consumed only by
//! the shutdown coordinator.
//!
//! Roles are opt-in and explicit: the caller lists the ones a service
//! fulfills in a [`Capabilities`] record passed to
//! [`Harbor::register`](crate::Harbor::register). There is no structural
//! probing of the service value itself.
//!
//! ## Implementing a role
//! ```rust
//! use std::sync::OnceLock;
//! use tokio::sync::mpsc;
//! use harbor::{BoxError, ErrorSource};
//!
//! #[derive(Default)]
//! struct Store {
//!     errors: OnceLock<mpsc::Sender<BoxError>>,
//! }
//!
//! impl ErrorSource for Store {
//!     fn attach_errors(&self, tx: mpsc::Sender<BoxError>) {
//!         let _ = self.errors.set(tx);
//!     }
//! }
//! ```

mod capabilities;
mod sources;

pub use capabilities::Capabilities;
pub use sources::{CloseSource, Closeable, ErrorSource, InfoSource, WarnSource};
