//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

const LOG_FILE_NAME: &str = "askout.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/ask-out/logs/` since stdout belongs to
/// the terminal UI (or the NDJSON stream in headless mode).
/// Log level is controlled by the `ASKOUT_LOG` environment variable.
///
/// # Examples
/// ```bash
/// ASKOUT_LOG=debug askout
/// ASKOUT_LOG=askout_app=trace askout --headless
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    // Default to info for our crates, allow override via ASKOUT_LOG
    let env_filter = EnvFilter::try_from_env("ASKOUT_LOG").unwrap_or_else(|_| {
        EnvFilter::new("ask_out=info,askout_app=info,askout_tui=info,warn")
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("Ask Out starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("ask-out").join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_lives_under_app_dir() {
        let path = get_log_directory();
        assert!(path.ends_with("ask-out/logs"));
    }
}
