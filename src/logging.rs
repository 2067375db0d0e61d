//! Dialog debug log sink.
//!
//! Controller events are emitted through `tracing` under [`LOG_TARGET`]. Nothing is written unless a
//! subscriber is installed; [`DebugLogger`] installs one for the current thread that appends plain
//! text to the file named by `MESSAGE_VIEW_WRITE_LOG`.

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::level_filters::LevelFilter;
use tracing::subscriber::DefaultGuard;

use crate::config::EnvConfig;

pub const LOG_TARGET: &str = "message_view";

/// Keeps the file subscriber installed on this thread until dropped.
#[derive(Debug)]
pub struct DebugLogger {
    path: PathBuf,
    _guard: DefaultGuard,
}

impl DebugLogger {
    /// Installs the file sink when `write_log` is set; `Ok(None)` otherwise.
    pub fn from_config(config: &EnvConfig) -> io::Result<Option<Self>> {
        let Some(path) = config.write_log.as_deref() else {
            return Ok(None);
        };

        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let level = if config.debug {
            LevelFilter::DEBUG
        } else {
            LevelFilter::INFO
        };

        let subscriber = tracing_subscriber::fmt()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(true)
            .with_max_level(level)
            .finish();

        Ok(Some(Self {
            path: PathBuf::from(path),
            _guard: tracing::subscriber::set_default(subscriber),
        }))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::{DebugLogger, LOG_TARGET};
    use crate::config::EnvConfig;
    use std::fs;

    #[test]
    fn no_path_means_no_logger() {
        let config = EnvConfig::default();
        let logger = DebugLogger::from_config(&config).expect("no io");
        assert!(logger.is_none());
    }

    #[test]
    fn debug_events_reach_the_file_only_in_debug_mode() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("dialog.log");
        let path_str = path.to_string_lossy().into_owned();

        {
            let config = EnvConfig {
                debug: false,
                write_log: Some(path_str.clone()),
            };
            let logger = DebugLogger::from_config(&config)
                .expect("open log")
                .expect("logger");
            assert_eq!(logger.path(), path.as_path());
            tracing::info!(target: LOG_TARGET, "info line");
            tracing::debug!(target: LOG_TARGET, "hidden debug line");
        }
        {
            let config = EnvConfig {
                debug: true,
                write_log: Some(path_str),
            };
            let _logger = DebugLogger::from_config(&config)
                .expect("open log")
                .expect("logger");
            tracing::debug!(target: LOG_TARGET, "visible debug line");
        }

        let contents = fs::read_to_string(&path).expect("read log");
        assert!(contents.contains("info line"));
        assert!(!contents.contains("hidden debug line"));
        assert!(contents.contains("visible debug line"));
        assert!(contents.contains(LOG_TARGET));
        assert!(!contents.contains('\x1b'));
    }
}
