//! Tracing setup for shells embedding the core.
//!
//! Use the `RUST_LOG` env var to control the log level (e.g. `RUST_LOG=debug`).

use std::io;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log level used when `RUST_LOG` is unset or invalid
const DEFAULT_FILTER: &str = "warn";

/// Log file prefix inside the log directory
const LOG_FILE_PREFIX: &str = "little-lemon.log";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize the tracing subscriber.
///
/// Logs go to stderr and, when `log_dir` is given, to a daily-rolling file
/// there. Keep the returned guard alive for as long as file logs should be
/// flushed. Once a global subscriber is installed, later calls install
/// nothing and return `None`.
pub fn init_tracing(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    if tracing::dispatcher::has_been_set() {
        return None;
    }

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let installed = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(file_layer)
        .with(env_filter())
        .try_init()
        .is_ok();

    // Dropping the guard stops the writer of a layer that was never installed
    if installed {
        guard
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_writes_to_log_dir() {
        let dir = tempfile::tempdir().unwrap();
        let guard = init_tracing(Some(dir.path()));
        assert!(guard.is_some());

        // Already installed: no second appender, no guard
        let second_dir = tempfile::tempdir().unwrap();
        assert!(init_tracing(Some(second_dir.path())).is_none());
        assert_eq!(std::fs::read_dir(second_dir.path()).unwrap().count(), 0);
        assert!(init_tracing(None).is_none());
    }
}
