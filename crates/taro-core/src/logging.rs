//! File-backed diagnostics for terminal applications.
//!
//! A TUI owns stdout, so taro's `tracing` output goes to a file instead.
//! Call [`init_file_logging`] once at startup; `RUST_LOG` overrides the
//! default filter directive.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::filter::ParseError;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, EnvFilter};

/// Errors that can occur while setting up logging.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The log file could not be opened.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The default filter directive did not parse.
    #[error("invalid log filter: {0}")]
    Filter(#[from] ParseError),
    /// A global subscriber was already installed.
    #[error("logging already initialized: {0}")]
    Init(#[from] TryInitError),
}

/// Open (or create) `path` for appending.
pub fn log_to_file(path: impl AsRef<Path>) -> Result<File, std::io::Error> {
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
}

/// Install a global `tracing` subscriber writing plain-text lines to `path`.
///
/// `default_directive` (for example `"taro_widgets=debug"`) is used when
/// `RUST_LOG` is unset.
pub fn init_file_logging(path: impl AsRef<Path>, default_directive: &str) -> Result<(), LogError> {
    let file = log_to_file(path)?;
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directive)?,
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .with(filter)
        .try_init()?;

    tracing::debug!("file logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("taro-{}-{name}", std::process::id()))
    }

    #[test]
    fn log_to_file_appends() {
        let path = temp_path("append.log");
        let _ = std::fs::remove_file(&path);

        writeln!(log_to_file(&path).unwrap(), "one").unwrap();
        writeln!(log_to_file(&path).unwrap(), "two").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "one\ntwo\n");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn log_to_file_reports_missing_directory() {
        let path = temp_path("no-such-dir").join("x.log");
        assert!(log_to_file(path).is_err());
    }

    #[test]
    fn second_init_fails() {
        let path = temp_path("init.log");
        init_file_logging(&path, "debug").unwrap();
        let err = init_file_logging(&path, "debug").unwrap_err();
        assert!(matches!(err, LogError::Init(_)));
        let _ = std::fs::remove_file(&path);
    }
}
