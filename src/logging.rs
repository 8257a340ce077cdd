//! Tracing subscriber setup for the binary.
//!
//! The terminal game owns stdout and stderr, so it only logs when `SNAKE_LOG_FILE`
//! is set. Headless mode writes JSON lines to stdout and logs to stderr.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    Off,
    Stderr,
    File(&'a Path),
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop; keep it alive for the
/// lifetime of `main`.
pub fn setup_logging(target: LogTarget<'_>) -> Result<Option<WorkerGuard>> {
    let env_filter =
        || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match target {
        LogTarget::Off => Ok(None),
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(env_filter())
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(false),
                )
                .try_init()
                .context("install tracing subscriber")?;
            Ok(None)
        }
        LogTarget::File(path) => {
            let dir = match path.parent() {
                Some(dir) if !dir.as_os_str().is_empty() => dir,
                _ => Path::new("."),
            };
            fs::create_dir_all(dir)
                .with_context(|| format!("create log directory {}", dir.display()))?;
            let file_name = path
                .file_name()
                .with_context(|| format!("log path has no file name: {}", path.display()))?;

            let file_appender = tracing_appender::rolling::never(dir, file_name);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

            tracing_subscriber::registry()
                .with(env_filter())
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(non_blocking_file)
                        .with_ansi(false),
                )
                .try_init()
                .context("install tracing subscriber")?;

            tracing::info!(path = %path.display(), "logging initialized");
            Ok(Some(guard))
        }
    }
}
