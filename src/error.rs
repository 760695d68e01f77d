//! Error types used by the harbor registry.
//!
//! All registry operations report failures through [`HarborError`]. Events
//! relayed from services are never errors of the registry itself: they are
//! data handed to subscribers, and if no one subscribes they are simply
//! never observed.

use thiserror::Error;

/// Boxed error payload pushed by services onto their wired queues and
/// wrapped by [`HarborError::CloseFailure`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// # Errors produced by registry operations.
///
/// These represent failures of the registry surface itself: name collisions,
/// missing lookups, a failing service close, and lifecycle misuse
/// (`ready()`/`close()` called twice).
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum HarborError {
    /// A service with this name is already registered. The original
    /// registration is left untouched.
    #[error("a service named {name} is already registered")]
    DuplicateName {
        /// The contested service name.
        name: String,
    },

    /// No service is registered under this name.
    #[error("no service named {name} is registered")]
    NotFound {
        /// The name that was looked up.
        name: String,
    },

    /// A closeable service failed to close during shutdown. Services after
    /// the failing one were not closed (fail-fast).
    #[error("failed to close service {name}: {source}")]
    CloseFailure {
        /// Name of the service whose close failed.
        name: String,
        /// The underlying cause reported by the service.
        #[source]
        source: BoxError,
    },

    /// `close()` was called more than once.
    #[error("harbor is already closed")]
    AlreadyClosed,

    /// `ready()` was called more than once; dispatch workers are one-shot
    /// and must not be double-started.
    #[error("dispatch workers are already running")]
    AlreadyReady,
}

impl HarborError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use harbor::HarborError;
    ///
    /// let err = HarborError::NotFound { name: "db".into() };
    /// assert_eq!(err.as_label(), "not_found");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            HarborError::DuplicateName { .. } => "duplicate_name",
            HarborError::NotFound { .. } => "not_found",
            HarborError::CloseFailure { .. } => "close_failure",
            HarborError::AlreadyClosed => "already_closed",
            HarborError::AlreadyReady => "already_ready",
        }
    }
}
