//! File logging via `tracing`.
//!
//! The terminal belongs to the UI, so log lines go to `starfolio.log` in the
//! data directory. `RUST_LOG` wins over the configured level.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_FILE: &str = "starfolio.log";

const DEFAULT_DIRECTIVE: &str = "info";

/// The filter directive to use when `RUST_LOG` is unset.
pub fn filter_directive(configured: &str) -> &str {
    let configured = configured.trim();
    if configured.is_empty() {
        DEFAULT_DIRECTIVE
    } else {
        configured
    }
}

/// Build the filter from `RUST_LOG`, then `configured`, then `info`.
pub fn env_filter(configured: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter_directive(configured)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber writing to `<log_dir>/starfolio.log`.
///
/// Returns the log path, or `None` when no file could be opened; the app then
/// runs without logging.
pub fn init(log_dir: Option<&Path>, configured: &str) -> Option<PathBuf> {
    let log_dir = log_dir?;
    std::fs::create_dir_all(log_dir).ok()?;
    let path = log_dir.join(LOG_FILE);
    let file = File::create(&path).ok()?;

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_timer(fmt::time::uptime());

    tracing_subscriber::registry()
        .with(env_filter(configured))
        .with(file_layer)
        .try_init()
        .ok()?;

    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive_defaults_to_info() {
        assert_eq!(filter_directive(""), "info");
        assert_eq!(filter_directive("   "), "info");
        assert_eq!(filter_directive("starfolio=debug"), "starfolio=debug");
    }

    #[test]
    fn test_init_without_dir_is_noop() {
        assert_eq!(init(None, "info"), None);
    }
}
