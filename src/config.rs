//! # Registry configuration.
//!
//! Provides [`HarborConfig`], the settings a [`Harbor`](crate::Harbor) is
//! constructed with, and [`DeliveryPolicy`], the subscriber-side delivery
//! strategy.
//!
//! ## Back-pressure, in two places
//! - **Producer side**: every wired capability queue is bounded by
//!   [`HarborConfig::service_queue_capacity`]. A full queue blocks the
//!   producing service until a dispatch worker drains it. This is the chosen
//!   back-pressure policy; there is no overflow handling beyond the queue's
//!   own blocking semantics.
//! - **Subscriber side**: subscriber queues are created by subscribers with
//!   whatever capacity they choose; the registry imposes none. What happens
//!   when one is full is governed by [`DeliveryPolicy`].

/// How events are pushed onto subscriber queues.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeliveryPolicy {
    /// Wait until every subscriber queue has room (reference behavior).
    ///
    /// A slow subscriber stalls dispatch for its whole category. Queues
    /// whose receiver was dropped are skipped without waiting.
    #[default]
    Block,

    /// Never wait: events are dropped for subscribers whose queue is full
    /// or closed. Other subscribers still receive them.
    Drop,
}

/// Configuration for a [`Harbor`](crate::Harbor) instance.
///
/// ## Field semantics
/// - `service_queue_capacity`: bound of each wired producer queue
///   (min 1; clamped)
/// - `delivery`: subscriber-side delivery strategy
#[derive(Clone, Debug)]
pub struct HarborConfig {
    /// Capacity of each bounded queue handed to a service at registration.
    ///
    /// One queue is allocated per declared capability. A service pushing
    /// onto a full queue blocks until a dispatch worker drains it.
    /// Minimum value is 1 (enforced at wiring time).
    pub service_queue_capacity: usize,

    /// Strategy used when fanning events out to subscriber queues.
    pub delivery: DeliveryPolicy,
}

impl Default for HarborConfig {
    /// Default configuration:
    ///
    /// - `service_queue_capacity = 100`
    /// - `delivery = DeliveryPolicy::Block`
    fn default() -> Self {
        Self {
            service_queue_capacity: 100,
            delivery: DeliveryPolicy::Block,
        }
    }
}
