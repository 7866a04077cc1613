//! Application logging functionality
//!
//! Installs the tracing subscriber: human-readable output on stderr and,
//! on request, a daily log file under ~/.config/strokefont/logs.

use crate::core::config_file::ConfigFile;
use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Keeps the file writer alive; dropping it flushes pending log lines
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Get the path to the logs directory
pub fn logs_dir() -> PathBuf {
    ConfigFile::logs_dir()
}

/// Default filter directive for a `-v` count
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over the
/// verbosity flag.
pub fn init_logging(verbose: u8, log_to_file: bool) -> anyhow::Result<LogGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose)));
    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    if !log_to_file {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .try_init()?;
        return Ok(LogGuard { _file_guard: None });
    }

    let logs_dir = logs_dir();
    fs::create_dir_all(&logs_dir)?;
    let appender = tracing_appender::rolling::daily(&logs_dir, "strokefont.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let file_layer = fmt::layer().with_writer(writer).with_ansi(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    tracing::info!(
        "=== strokefont started at {} ===",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );
    tracing::info!("Logging to {:?}", logs_dir);

    Ok(LogGuard {
        _file_guard: Some(guard),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for_verbosity(0), "info");
        assert_eq!(level_for_verbosity(1), "debug");
        assert_eq!(level_for_verbosity(5), "trace");
    }

    #[test]
    fn logs_live_under_the_config_dir() {
        assert!(logs_dir().starts_with(ConfigFile::config_dir()));
        assert!(logs_dir().ends_with("logs"));
    }
}
