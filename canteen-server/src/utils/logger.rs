//! Logging Infrastructure
//!
//! Console logging by default, daily rolling file when a log directory exists.

use std::path::Path;

/// Initialize the logger with optional file output
///
/// Fails only if a global subscriber is already installed.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) -> anyhow::Result<()> {
    let level = log_level.unwrap_or("info");

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level.parse().unwrap_or(tracing::Level::INFO))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.is_dir()
            && let Some(dir_str) = log_path.to_str()
        {
            let file_appender = tracing_appender::rolling::daily(dir_str, "canteen-server");
            return subscriber
                .with_ansi(false)
                .with_writer(file_appender)
                .try_init()
                .map_err(|e| anyhow::anyhow!("failed to install file logger: {e}"));
        }
    }

    subscriber
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))
}
