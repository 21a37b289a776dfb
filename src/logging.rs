//! Tracing setup for the binary.
//!
//! Logs go to `~/.pantrypal/logs/pantrypal.log` so they never interleave
//! with the REPL. If the file cannot be opened, stderr is used instead.
//! `RUST_LOG` overrides the default `info` level.

use std::fs::OpenOptions;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Keep the returned guard alive until exit
/// so buffered lines are flushed.
pub fn init(dir: &Path) -> Option<WorkerGuard> {
    let path = dir.join("pantrypal.log");
    let file = std::fs::create_dir_all(dir).and_then(|_| {
        OpenOptions::new().create(true).append(true).open(&path)
    });

    match file {
        Ok(file) => {
            let (writer, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            tracing::info!(path = %path.display(), "logging initialized");
            Some(guard)
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
            None
        }
    }
}
