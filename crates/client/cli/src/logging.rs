//! File logging for the terminal client.
//!
//! The TUI owns the terminal, so all tracing output goes to
//! `<cache>/hexcrawl/logs/<session>/client.log`.
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_FILE: &str = "client.log";

/// Platform log directory for hexcrawl.
///
/// - macOS: `~/Library/Caches/hexcrawl/logs`
/// - Linux: `~/.cache/hexcrawl/logs` (or `$XDG_CACHE_HOME/hexcrawl/logs`)
/// - Windows: `%LOCALAPPDATA%\hexcrawl\cache\logs`
/// - Fallback: `/tmp/hexcrawl/logs`
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "hexcrawl")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/hexcrawl"))
        .join("logs")
}

/// Session directory name; timestamp based when none is configured.
pub fn session_name(session_id: Option<&str>) -> String {
    match session_id {
        Some(id) if !id.trim().is_empty() => id.trim().to_string(),
        _ => {
            let timestamp = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_secs())
                .unwrap_or_default();
            format!("session_{timestamp}")
        }
    }
}

/// Installs the global subscriber. Returns the session log directory.
pub fn setup_logging(session_id: Option<&str>) -> Result<PathBuf> {
    let session = session_name(session_id);
    let session_log_dir = log_dir().join(&session);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!(
            "Failed to create log directory: {}",
            session_log_dir.display()
        )
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    // Keep the writer thread alive for the rest of the process
    std::mem::forget(guard);

    tracing::info!(session = %session, "logging initialized");
    tracing::info!("log file: {}", session_log_dir.join(LOG_FILE).display());

    Ok(session_log_dir)
}
