//! Emitter-role traits and the closeable contract.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::error::BoxError;

/// Role of a service that surfaces errors.
///
/// Called once, at registration. The service keeps the sender and pushes an
/// error value onto it whenever it encounters an error worth surfacing.
/// A full queue blocks the push until dispatch drains it.
pub trait ErrorSource: Send + Sync {
    fn attach_errors(&self, tx: mpsc::Sender<BoxError>);
}

/// Role of a service that surfaces warnings. Same shape as [`ErrorSource`],
/// semantically a distinct category.
pub trait WarnSource: Send + Sync {
    fn attach_warns(&self, tx: mpsc::Sender<BoxError>);
}

/// Role of a service that reports closing unexpectedly (not driven by the
/// shutdown coordinator).
pub trait CloseSource: Send + Sync {
    fn attach_closed(&self, tx: mpsc::Sender<BoxError>);
}

/// Role of a service that surfaces informational messages.
pub trait InfoSource: Send + Sync {
    fn attach_infos(&self, tx: mpsc::Sender<String>);
}

/// Role of a service that can be told to close during shutdown.
///
/// Independent from [`CloseSource`]: that one *reports* an unexpected close,
/// this one *performs* a requested close. Consumed only by
/// [`Harbor::close`](crate::Harbor::close).
#[async_trait]
pub trait Closeable: Send + Sync {
    /// Closes the service. A returned error aborts the remaining shutdown
    /// sequence (fail-fast).
    async fn close(&self) -> Result<(), BoxError>;
}
