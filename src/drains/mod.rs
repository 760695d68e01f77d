//! Built-in event drains (demo/reference only).

mod log;

pub use log::LogDrain;
