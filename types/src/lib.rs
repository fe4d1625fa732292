//! Fundamental value types for the kata crates.
//!
//! Currently this is the `Bitcoin` amount held by a wallet.

pub mod amount;

pub use amount::Bitcoin;
