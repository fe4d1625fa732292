//! Structured logging initialization via `tracing`.

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber, writing to stderr.
///
/// Respects the `RUST_LOG` environment variable for filtering, falling
/// back to `level` when it is unset or unparsable.
pub fn init_tracing_with_level(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter_or(level))
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(level, "tracing initialized");
}

fn env_filter_or(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_given_level() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        assert_eq!(env_filter_or("warn").to_string(), "warn");
    }
}
