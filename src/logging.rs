//! Logger setup.
//!
//! The terminal belongs to the TUI, so log output never goes to stderr. When
//! `RUST_LOG` is set, records are appended to a file in the temp directory;
//! otherwise logging stays off.

use crate::core::constants::LOG_FILE_NAME;
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;

pub fn log_file_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE_NAME)
}

/// Install the global logger. Returns the log file path when logging is on.
pub fn init() -> io::Result<Option<PathBuf>> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(None);
    }

    let path = log_file_path();
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_lives_in_temp_dir() {
        let path = log_file_path();
        assert!(path.starts_with(std::env::temp_dir()));
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("endless-runner.log")
        );
    }
}
