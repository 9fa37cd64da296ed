use std::path::PathBuf;

use directories::BaseDirs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

const LOG_ENV: &str = "ACTION_HISTORY_LOG";
const LOG_FILE_PREFIX: &str = "action-history.log";

pub fn log_dir() -> Option<PathBuf> {
    let base = BaseDirs::new()?;
    Some(base.data_dir().join("action-history").join("logs"))
}

/// Logs go to a daily file so the prompt stays readable. Without a data
/// directory only warnings and errors are written, to stderr.
/// Keep the returned guard alive until exit or buffered lines are lost.
pub fn init() -> Option<WorkerGuard> {
    if let Some(dir) = log_dir().filter(|d| std::fs::create_dir_all(d).is_ok()) {
        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .with_env_var(LOG_ENV)
            .from_env_lossy();
        let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(true);
        let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
        return Some(guard);
    }
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();
    let layer = fmt::layer().with_writer(std::io::stderr).with_target(true);
    let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
    None
}
