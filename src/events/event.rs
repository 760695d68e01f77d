//! # Events delivered to subscribers.
//!
//! A service pushes raw payloads (an error value, or an info string) onto its
//! own wired queue; a dispatch worker wraps each payload with the originating
//! service name into one of the types below before fan-out. Events are
//! immutable once constructed and cheap to clone, so one emission can reach
//! any number of subscriber queues.
//!
//! [`ErrorEvent`] is shared by the error, warn and close categories; the
//! category is implied by which queue a subscriber handed in.

use std::sync::Arc;

use crate::error::BoxError;

/// Shared, clonable form of an error pushed by a service.
pub type SharedError = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// An error, warning, or unexpected-close notification emitted by a
/// registered service.
#[derive(Clone, Debug)]
pub struct ErrorEvent {
    /// Name the originating service was registered under.
    pub name: String,
    /// The error value the service pushed.
    pub error: SharedError,
}

/// An informational message emitted by a registered service.
#[derive(Clone, Debug)]
pub struct InfoEvent {
    /// Name the originating service was registered under.
    pub name: String,
    /// The message the service pushed.
    pub message: String,
}

/// Contract for wrapping a raw producer payload into a subscriber-facing
/// event tagged with the originating service name.
pub(crate) trait Tagged: Clone + Send + 'static {
    /// What the service pushes onto its wired queue.
    type Payload: Send + 'static;

    fn tag(name: &str, payload: Self::Payload) -> Self;
}

impl Tagged for ErrorEvent {
    type Payload = BoxError;

    fn tag(name: &str, payload: BoxError) -> Self {
        Self {
            name: name.to_string(),
            error: Arc::from(payload),
        }
    }
}

impl Tagged for InfoEvent {
    type Payload = String;

    fn tag(name: &str, payload: String) -> Self {
        Self {
            name: name.to_string(),
            message: payload,
        }
    }
}
