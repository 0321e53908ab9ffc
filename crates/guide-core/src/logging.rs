//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Application directory name shared by logs, preferences and config
pub const APP_DIR_NAME: &str = "prompt-guide";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/prompt-guide/logs/` because the
/// terminal itself belongs to the UI. Log level is controlled by the
/// `GUIDE_LOG` environment variable.
///
/// # Examples
/// ```bash
/// GUIDE_LOG=debug cargo run
/// GUIDE_LOG=guide_app::navigation=trace cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "guide.log");

    let env_filter = EnvFilter::try_from_env("GUIDE_LOG")
        .unwrap_or_else(|_| EnvFilter::new("prompt_guide=info,guide_app=info,guide_tui=info,warn"));

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
    tracing::info!("Prompt Guide starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join(APP_DIR_NAME).join("logs"))
}

/// Get the log file path for the current day
pub fn get_current_log_file() -> Result<PathBuf> {
    let dir = get_log_directory()?;
    Ok(dir.join("guide.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_lives_under_app_dir() {
        let path = get_current_log_file().unwrap();
        assert!(path.ends_with("prompt-guide/logs/guide.log"));
    }
}
