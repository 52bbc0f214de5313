//! Diagnostic logging.
//!
//! The interactive UI owns the terminal, so tracing output only goes to a file
//! chosen with `--log`. Without it no subscriber is installed.

use std::error::Error;
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing::Subscriber;
use tracing_subscriber::EnvFilter;

use crate::core::constants::LOG_FILTER_ENV;

const DEFAULT_FILTER: &str = "info";

pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

pub fn file_subscriber(file: File, filter: EnvFilter) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .finish()
}

fn open_log_file(path: &Path) -> Result<File, Box<dyn Error>> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(file)
}

/// Installs the global subscriber writing to `path`, appending to any
/// existing content.
pub fn init_file_logging(path: &Path) -> Result<(), Box<dyn Error>> {
    let file = open_log_file(path)?;
    tracing::subscriber::set_global_default(file_subscriber(file, env_filter()))?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging started");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn file_subscriber_appends_filtered_events() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("chatshell.log");
        fs::write(&path, "existing line\n").expect("seed log");

        let file = open_log_file(&path).expect("open log");
        let subscriber = file_subscriber(file, EnvFilter::new("info"));
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(reply_id = 4, "reply received");
            tracing::debug!("hidden by the filter");
        });

        let contents = fs::read_to_string(&path).expect("read log");
        assert!(contents.starts_with("existing line\n"));
        assert!(contents.contains("reply received"));
        assert!(contents.contains("reply_id=4"));
        assert!(!contents.contains("hidden by the filter"));
    }

    #[test]
    fn open_log_file_fails_for_missing_directory() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("missing").join("chatshell.log");
        assert!(open_log_file(&path).is_err());
    }
}
