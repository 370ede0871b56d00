//! Platform abstraction layer.
//!
//! All `#[cfg]` blocks for OS-specific behavior live in this module rather
//! than scattered throughout the codebase:
//! - `paths` - well-known user directories
//! - `permissions` - executable-bit handling for launch scripts

pub mod paths;
pub mod permissions;

// Re-export commonly used items
pub use paths::desktop_dir;
pub use permissions::set_executable;

use crate::error::{LaunchpinError, Result};

/// Returns the current platform name.
pub fn current_platform() -> &'static str {
    #[cfg(target_os = "linux")]
    {
        "linux"
    }
    #[cfg(target_os = "windows")]
    {
        "windows"
    }
    #[cfg(target_os = "macos")]
    {
        "macos"
    }
    #[cfg(not(any(target_os = "linux", target_os = "windows", target_os = "macos")))]
    {
        "unknown"
    }
}

/// Fail unless running on Windows.
///
/// The launcher artifacts this tool produces (`.lnk` shortcuts, `.bat`
/// scripts) only mean anything to the Windows shell, so the whole pipeline
/// refuses to start anywhere else.
pub fn require_windows() -> Result<()> {
    if cfg!(target_os = "windows") {
        Ok(())
    } else {
        Err(LaunchpinError::UnsupportedPlatform {
            required: "windows",
            current: current_platform(),
        })
    }
}
