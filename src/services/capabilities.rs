//! # Capabilities: the per-registration role record.
//!
//! Lists which emitter roles (and the separate closeable role) a service
//! fulfills. Each field is an optional holder of the relevant behavior,
//! usually an `Arc` clone of the service itself.
//!
//! ## Example
//! ```rust
//! # use std::sync::{Arc, OnceLock};
//! # use tokio::sync::mpsc;
//! # use harbor::{BoxError, Capabilities, ErrorSource, InfoSource};
//! # #[derive(Default)]
//! # struct Store {
//! #     errors: OnceLock<mpsc::Sender<BoxError>>,
//! #     infos: OnceLock<mpsc::Sender<String>>,
//! # }
//! # impl ErrorSource for Store {
//! #     fn attach_errors(&self, tx: mpsc::Sender<BoxError>) { let _ = self.errors.set(tx); }
//! # }
//! # impl InfoSource for Store {
//! #     fn attach_infos(&self, tx: mpsc::Sender<String>) { let _ = self.infos.set(tx); }
//! # }
//! let store = Arc::new(Store::default());
//! let caps = Capabilities::new()
//!     .with_errors(store.clone())
//!     .with_infos(store.clone());
//! assert!(!caps.is_empty());
//! ```

use std::sync::Arc;

use super::sources::{CloseSource, Closeable, ErrorSource, InfoSource, WarnSource};

/// Declares the roles a service fulfills; passed to
/// [`Harbor::register`](crate::Harbor::register).
///
/// Every field defaults to `None`: a service with no capabilities wires no
/// queues and produces no dispatch worker.
#[derive(Clone, Default)]
pub struct Capabilities {
    /// Error emitter role.
    pub errors: Option<Arc<dyn ErrorSource>>,
    /// Warning emitter role.
    pub warns: Option<Arc<dyn WarnSource>>,
    /// Unexpected-close emitter role.
    pub closes: Option<Arc<dyn CloseSource>>,
    /// Info emitter role.
    pub infos: Option<Arc<dyn InfoSource>>,
    /// Closeable role, consumed by the shutdown coordinator.
    pub closer: Option<Arc<dyn Closeable>>,
}

impl Capabilities {
    /// A record with no roles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares the error emitter role.
    #[must_use]
    pub fn with_errors(mut self, source: Arc<dyn ErrorSource>) -> Self {
        self.errors = Some(source);
        self
    }

    /// Declares the warning emitter role.
    #[must_use]
    pub fn with_warns(mut self, source: Arc<dyn WarnSource>) -> Self {
        self.warns = Some(source);
        self
    }

    /// Declares the unexpected-close emitter role.
    #[must_use]
    pub fn with_closes(mut self, source: Arc<dyn CloseSource>) -> Self {
        self.closes = Some(source);
        self
    }

    /// Declares the info emitter role.
    #[must_use]
    pub fn with_infos(mut self, source: Arc<dyn InfoSource>) -> Self {
        self.infos = Some(source);
        self
    }

    /// Declares the closeable role.
    #[must_use]
    pub fn with_closer(mut self, closer: Arc<dyn Closeable>) -> Self {
        self.closer = Some(closer);
        self
    }

    /// True if no role is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_none()
            && self.warns.is_none()
            && self.closes.is_none()
            && self.infos.is_none()
            && self.closer.is_none()
    }
}
