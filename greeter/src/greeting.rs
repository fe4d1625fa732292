//! Building greetings.

use crate::language::greeting_prefix;

/// Name used when the caller supplies an empty one.
pub const DEFAULT_NAME: &str = "World";

/// Greet `name` in `language`, e.g. `greet("Louis", "French")` is
/// `"Bonjour, Louis"`.
pub fn greet(name: &str, language: &str) -> String {
    let name = if name.is_empty() { DEFAULT_NAME } else { name };
    format!("{}{}", greeting_prefix(language), name)
}
