//! Error types for launchpin.
//!
//! One enum for the whole pipeline so the CLI can map any failure to its
//! exit status in a single place.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Main error type for the launchpin library.
#[derive(Debug, Error)]
pub enum LaunchpinError {
    // Environment errors
    #[error("This tool must run on {required}, not {current}")]
    UnsupportedPlatform {
        required: &'static str,
        current: &'static str,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    // Discovery errors
    #[error("Target executable not found: {0}")]
    TargetNotFound(PathBuf),

    #[error(
        "Timed out after {waited:?} waiting for process \"{process}\"; \
         start it from its usual launcher first"
    )]
    WatchTimeout { process: String, waited: Duration },

    /// A single process-table entry could not be read (the process exited
    /// mid-scan or access was denied). Consumed by the watcher, which skips
    /// the entry; never user-facing.
    #[error("Cannot read process {pid}: {message}")]
    ProcessAccess { pid: u32, message: String },

    // File system errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    // Launcher artifact errors
    #[error("failed to create native shortcut: {message}")]
    NativeShortcut { message: String },
}

/// Result type alias for launchpin operations.
pub type Result<T> = std::result::Result<T, LaunchpinError>;

impl From<std::io::Error> for LaunchpinError {
    fn from(err: std::io::Error) -> Self {
        LaunchpinError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl LaunchpinError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        LaunchpinError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// Convert to the process exit status the CLI reports.
    ///
    /// - `2`: wrong operating system
    /// - `3`: target executable not found
    /// - `4`: timed out waiting for the watched process
    /// - `1`: everything else
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchpinError::UnsupportedPlatform { .. } => 2,
            LaunchpinError::TargetNotFound(_) => 3,
            LaunchpinError::WatchTimeout { .. } => 4,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LaunchpinError::TargetNotFound(PathBuf::from("/missing/app.exe"));
        assert_eq!(
            err.to_string(),
            "Target executable not found: /missing/app.exe"
        );
    }

    #[test]
    fn test_timeout_message_names_the_precondition() {
        let err = LaunchpinError::WatchTimeout {
            process: "Game.exe".into(),
            waited: Duration::from_secs(30),
        };
        let msg = err.to_string();
        assert!(msg.contains("Game.exe"));
        assert!(msg.contains("start it from its usual launcher"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            LaunchpinError::UnsupportedPlatform {
                required: "windows",
                current: "linux",
            }
            .exit_code(),
            2
        );
        assert_eq!(
            LaunchpinError::TargetNotFound(PathBuf::from("x")).exit_code(),
            3
        );
        assert_eq!(
            LaunchpinError::WatchTimeout {
                process: "x".into(),
                waited: Duration::from_secs(1),
            }
            .exit_code(),
            4
        );
        assert_eq!(
            LaunchpinError::Config {
                message: "no desktop directory".into(),
            }
            .exit_code(),
            1
        );
    }

    #[test]
    fn test_io_with_path_keeps_path_context() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = LaunchpinError::io_with_path(io, "/desktop/Game.bat");

        assert!(err.to_string().contains("Game.bat"));
        assert_eq!(err.exit_code(), 1);
    }
}
