//! File logging for the stdio adapter.
//!
//! stdout carries outbound commands and stderr carries the rendered view, so
//! tracing output goes to a per-session file:
//! `<cache dir>/battle-screen/logs/<session>/client.log`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LoggingConfig;

const APPLICATION: &str = "battle-screen";
const LOG_FILE: &str = "client.log";

/// Keeps the non-blocking file writer alive; drop it only at shutdown.
pub struct LoggingGuard {
    _worker: WorkerGuard,
    pub session_id: String,
    pub log_file: PathBuf,
}

/// Platform cache directory for logs, unless overridden.
///
/// - macOS: `~/Library/Caches/battle-screen/logs`
/// - Linux: `~/.cache/battle-screen/logs` (or `$XDG_CACHE_HOME/battle-screen/logs`)
/// - Windows: `%LOCALAPPDATA%\battle-screen\cache\logs`
/// - Fallback: `/tmp/battle-screen/logs`
pub fn log_directory(override_dir: Option<&Path>) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir.to_path_buf();
    }

    directories::ProjectDirs::from("", "", APPLICATION)
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp").join(APPLICATION))
        .join("logs")
}

/// Configured session id, or one derived from the local time.
pub fn session_id(configured: Option<&str>) -> String {
    match configured {
        Some(id) => id.to_owned(),
        None => format!("session_{}", chrono::Local::now().format("%Y%m%d_%H%M%S")),
    }
}

/// Creates `<base>/<session>` and returns it.
pub fn prepare_session_dir(base: &Path, session_id: &str) -> Result<PathBuf> {
    let dir = base.join(session_id);
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
    Ok(dir)
}

/// Installs the global subscriber writing to the session log file.
///
/// The filter defaults to `info` and honours `RUST_LOG`.
pub fn init(config: &LoggingConfig) -> Result<LoggingGuard> {
    let session_id = session_id(config.session_id.as_deref());
    let base = log_directory(config.log_dir.as_deref());
    let session_dir = prepare_session_dir(&base, &session_id)?;

    let file_appender = tracing_appender::rolling::never(&session_dir, LOG_FILE);
    let (writer, worker) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer().with_writer(writer).with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    let log_file = session_dir.join(LOG_FILE);
    tracing::info!(session = %session_id, "logging initialized");
    tracing::info!("log file: {}", log_file.display());

    Ok(LoggingGuard {
        _worker: worker,
        session_id,
        log_file,
    })
}
