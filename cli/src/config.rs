//! Greeting configuration with TOML file support.

use kata_greeter::Language;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Who to greet, and in which language.
///
/// Can be loaded from a TOML file via [`HelloConfig::from_toml_file`];
/// missing keys take their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelloConfig {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default)]
    pub language: Language,
}

fn default_name() -> String {
    "world".to_string()
}

impl HelloConfig {
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Default for HelloConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            language: Language::default(),
        }
    }
}
