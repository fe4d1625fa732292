//! String repetition.

pub mod repeat;

pub use repeat::repeat;
