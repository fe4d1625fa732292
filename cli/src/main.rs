//! `hello`: prints one localized greeting.

mod config;

use clap::Parser;
use kata_greeter::{greet, Language};
use std::path::PathBuf;

use crate::config::HelloConfig;

#[derive(Parser, Debug)]
#[command(name = "hello", about = "Print a localized greeting")]
struct Cli {
    /// Who to greet. An empty name greets the World.
    #[arg(long, env = "KATA_NAME")]
    name: Option<String>,

    /// Greeting language: "English", "Spanish" or "French".
    /// Anything else falls back to English.
    #[arg(long, env = "KATA_LANGUAGE")]
    language: Option<String>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, default_value = "warn", env = "KATA_LOG_LEVEL")]
    log_level: String,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Load the config file if one was given. A file that cannot be read or
/// parsed is reported and ignored.
fn load_file_config(path: Option<&PathBuf>) -> Option<HelloConfig> {
    let path = path?;
    match HelloConfig::from_toml_file(path) {
        Ok(cfg) => {
            tracing::info!("Loaded config from {}", path.display());
            Some(cfg)
        }
        Err(e) => {
            tracing::warn!("{e}, using defaults");
            None
        }
    }
}

fn resolve(cli: &Cli, file_config: Option<HelloConfig>) -> HelloConfig {
    let base = file_config.unwrap_or_default();
    HelloConfig {
        name: cli.name.clone().unwrap_or(base.name),
        language: cli
            .language
            .as_deref()
            .map(Language::from_name)
            .unwrap_or(base.language),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    kata_utils::init_tracing_with_level(&cli.log_level);

    let config = resolve(&cli, load_file_config(cli.config.as_ref()));
    tracing::debug!(name = %config.name, language = %config.language, "greeting");

    println!("{}", greet(&config.name, config.language.name()));
    Ok(())
}
