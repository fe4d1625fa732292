//! Localized greetings.
//!
//! A greeting is a language-specific prefix followed by a name. Unknown
//! languages fall back to English, and an empty name greets the `World`.

pub mod greeting;
pub mod language;

pub use greeting::{greet, DEFAULT_NAME};
pub use language::{greeting_prefix, Language};
