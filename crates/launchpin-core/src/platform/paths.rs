//! Platform-specific path utilities.

use crate::error::{LaunchpinError, Result};
use std::path::PathBuf;

/// Get the user's desktop directory.
///
/// # Platform Behavior
/// Uses the `dirs` crate which handles platform differences:
/// - **Windows**: `C:\Users\{user}\Desktop`
/// - **Linux**: `~/Desktop` or XDG user dirs
/// - **macOS**: `~/Desktop`
///
/// The directory is where launcher artifacts land by default. It is not
/// created here; the writer creates missing destination directories.
pub fn desktop_dir() -> Result<PathBuf> {
    dirs::desktop_dir().ok_or_else(|| LaunchpinError::Config {
        message: "Could not determine desktop directory".to_string(),
    })
}
