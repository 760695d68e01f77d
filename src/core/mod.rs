//! Registry core: the store and the [`Harbor`] context object.
//!
//! Internal modules:
//! - [`store`]: name → service mapping with duplicate rejection;
//! - [`harbor`]: registration, wiring, dispatch startup, and shutdown.

mod harbor;
mod store;

pub use harbor::Harbor;
