//! Supported languages and their greeting prefixes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A language with a dedicated greeting prefix.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
}

/// Language name, variant and prefix. English is the fallback for any name
/// not listed here.
const PREFIXES: &[(&str, Language, &str)] = &[
    ("English", Language::English, "Hello, "),
    ("Spanish", Language::Spanish, "Hola, "),
    ("French", Language::French, "Bonjour, "),
];

impl Language {
    /// Resolve a language by its exact name. Never fails: unrecognised
    /// names (including the empty string) resolve to English.
    pub fn from_name(name: &str) -> Self {
        match PREFIXES.iter().find(|(n, _, _)| *n == name) {
            Some(&(_, language, _)) => language,
            None => {
                if !name.is_empty() {
                    tracing::debug!(language = name, "unrecognised language, using English");
                }
                Language::English
            }
        }
    }

    pub fn name(self) -> &'static str {
        self.entry().0
    }

    /// The greeting lead-in, including the trailing `", "`.
    pub fn prefix(self) -> &'static str {
        self.entry().2
    }

    fn entry(self) -> &'static (&'static str, Language, &'static str) {
        match self {
            Language::English => &PREFIXES[0],
            Language::Spanish => &PREFIXES[1],
            Language::French => &PREFIXES[2],
        }
    }
}

impl From<String> for Language {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<Language> for &'static str {
    fn from(language: Language) -> Self {
        language.name()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The greeting prefix for a language name, falling back to English.
pub fn greeting_prefix(language: &str) -> &'static str {
    Language::from_name(language).prefix()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_prefixes() {
        assert_eq!(greeting_prefix("English"), "Hello, ");
        assert_eq!(greeting_prefix("Spanish"), "Hola, ");
        assert_eq!(greeting_prefix("French"), "Bonjour, ");
    }

    #[test]
    fn unknown_and_empty_fall_back_to_english() {
        assert_eq!(greeting_prefix(""), "Hello, ");
        assert_eq!(greeting_prefix("Klingon"), "Hello, ");
        // Matching is case-sensitive.
        assert_eq!(greeting_prefix("french"), "Hello, ");
    }

    #[test]
    fn table_entries_match_variants() {
        for language in [Language::English, Language::Spanish, Language::French] {
            assert_eq!(language.entry().1, language);
            assert_eq!(Language::from_name(language.name()), language);
        }
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(Language::French.to_string(), "French");
        assert_eq!(Language::default(), Language::English);
    }

    #[test]
    fn serde_by_name() {
        let json = serde_json::to_string(&Language::Spanish).unwrap();
        assert_eq!(json, "\"Spanish\"");
        let parsed: Language = serde_json::from_str("\"French\"").unwrap();
        assert_eq!(parsed, Language::French);
        let fallback: Language = serde_json::from_str("\"Esperanto\"").unwrap();
        assert_eq!(fallback, Language::English);
    }
}
