//! Application logger.
//!
//! Entries are kept in memory for the logs dialog ('G') and forwarded to the
//! `log` facade. When file logging is enabled a `fern` dispatch writing to
//! the data directory is installed once per process.

use crate::config::Config;
use crate::constants::APP_NAME;
use anyhow::{Context, Result};
use chrono::Utc;
use once_cell::sync::OnceCell;
use std::path::PathBuf;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Maximum number of in-memory entries kept for the logs dialog
const MAX_LOG_ENTRIES: usize = 500;

static FILE_DISPATCH: OnceCell<PathBuf> = OnceCell::new();

type Entries = Arc<Mutex<VecDeque<String>>>;

/// Cheap to clone; every clone appends to the same entries
#[derive(Clone, Default)]
pub struct Logger {
    entries: Entries,
    enabled: bool,
}

impl Logger {
    /// In-memory logger without a file sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a logger from the `logging.enabled` setting
    pub fn from_config(enabled: bool) -> Result<Self> {
        if enabled {
            Self::install_file_dispatch()?;
        }
        Ok(Self {
            enabled,
            ..Self::default()
        })
    }

    /// Whether file logging was requested
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether a file dispatch is active in this process
    pub fn has_file_sink(&self) -> bool {
        self.enabled && FILE_DISPATCH.get().is_some()
    }

    /// Path of the log file inside the data directory
    pub fn get_log_file_path() -> Result<PathBuf> {
        Ok(Config::get_data_dir()?.join(format!("{APP_NAME}.log")))
    }

    fn install_file_dispatch() -> Result<()> {
        FILE_DISPATCH
            .get_or_try_init(|| -> Result<PathBuf> {
                let path = Self::get_log_file_path()?;
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
                }

                let dispatch = fern::Dispatch::new()
                    .format(|out, message, record| {
                        out.finish(format_args!(
                            "{} [{}] {}: {}",
                            Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                            record.level(),
                            record.target(),
                            message
                        ))
                    })
                    .level(log::LevelFilter::Info)
                    .chain(fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?);

                // Another global logger may already be set (tests, embedding); keep it.
                if dispatch.apply().is_err() {
                    log::debug!("global logger already installed, file dispatch skipped");
                }
                Ok(path)
            })
            .map(|_| ())
    }

    /// Record `message` with a time-of-day stamp and pass it on to `log`
    pub fn log(&self, message: String) {
        log::info!("{message}");

        let stamped = format!("[{}] {message}", Utc::now().format("%H:%M:%S%.3f"));
        if let Ok(mut entries) = self.entries.lock() {
            if entries.len() == MAX_LOG_ENTRIES {
                entries.pop_front();
            }
            entries.push_back(stamped);
        }
    }

    /// Entries, most recent first
    pub fn get_logs(&self) -> Vec<String> {
        self.entries
            .lock()
            .map(|entries| entries.iter().rev().cloned().collect())
            .unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}
