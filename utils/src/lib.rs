//! Shared utilities for the kata crates.

pub mod logging;

pub use logging::init_tracing_with_level;
