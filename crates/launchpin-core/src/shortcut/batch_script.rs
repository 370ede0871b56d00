//! Batch-script launcher generation.
//!
//! The fallback artifact when a native shortcut cannot be produced: a
//! `.bat` that enters the target's working directory and hands off through
//! `start`, so the console window does not stay attached to the game.

use super::writer::LauncherSpec;
use crate::config::LauncherConfig;
use crate::error::{LaunchpinError, Result};
use crate::platform;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Write the launch script for `spec`.
///
/// The script lands at the requested destination with its extension
/// replaced, so a fallback from `App.lnk` produces `App.bat` in the same
/// directory. Returns the script path.
pub fn generate(spec: &LauncherSpec) -> Result<PathBuf> {
    let script_path = spec
        .destination
        .with_extension(LauncherConfig::SCRIPT_EXTENSION);

    fs::write(&script_path, content(spec))
        .map_err(|e| LaunchpinError::io_with_path(e, &script_path))?;

    platform::set_executable(&script_path)?;

    debug!("Generated launch script at {:?}", script_path);

    Ok(script_path)
}

/// The three-line script body.
///
/// `start ""` claims the window-title slot, which `start` would otherwise
/// fill with the quoted target path instead of treating it as the command.
fn content(spec: &LauncherSpec) -> String {
    let working_dir = spec.working_dir.display();
    let target = spec.target.display();

    if spec.arguments.is_empty() {
        format!("@echo off\r\npushd \"{working_dir}\"\r\nstart \"\" \"{target}\"\r\n")
    } else {
        format!(
            "@echo off\r\npushd \"{working_dir}\"\r\nstart \"\" \"{target}\" {}\r\n",
            spec.arguments
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::permissions::is_executable;
    use tempfile::TempDir;

    fn spec(dir: &std::path::Path, arguments: &str) -> LauncherSpec {
        LauncherSpec {
            target: dir.join("Client.exe"),
            arguments: arguments.to_string(),
            working_dir: dir.to_path_buf(),
            icon: None,
            destination: dir.join("Game (Direct).lnk"),
        }
    }

    #[test]
    fn test_script_replaces_requested_extension() {
        let temp_dir = TempDir::new().unwrap();
        let script = generate(&spec(temp_dir.path(), "--windowed")).unwrap();

        assert_eq!(script, temp_dir.path().join("Game (Direct).bat"));
        assert!(script.exists());
        assert!(is_executable(&script));
    }

    #[test]
    fn test_script_content() {
        let temp_dir = TempDir::new().unwrap();
        let spec = spec(temp_dir.path(), r#"--level 3 "map name.dat""#);
        let script = generate(&spec).unwrap();

        let expected = format!(
            "@echo off\r\npushd \"{}\"\r\nstart \"\" \"{}\" --level 3 \"map name.dat\"\r\n",
            temp_dir.path().display(),
            temp_dir.path().join("Client.exe").display(),
        );
        assert_eq!(fs::read_to_string(&script).unwrap(), expected);
    }

    #[test]
    fn test_script_content_without_arguments() {
        let temp_dir = TempDir::new().unwrap();
        let script = generate(&spec(temp_dir.path(), "")).unwrap();

        let expected = format!(
            "@echo off\r\npushd \"{}\"\r\nstart \"\" \"{}\"\r\n",
            temp_dir.path().display(),
            temp_dir.path().join("Client.exe").display(),
        );
        assert_eq!(fs::read_to_string(&script).unwrap(), expected);
    }
}
