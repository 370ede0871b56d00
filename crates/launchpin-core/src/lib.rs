//! Launchpin core - capture a running process's launch arguments and pin
//! them into a direct-launch desktop shortcut.
//!
//! The pipeline has three stages: watch the process table until the named
//! process shows up, re-quote its captured argument vector into a single
//! command-line string, and write a desktop launcher that starts a related
//! executable with those arguments. Each stage is usable on its own.
//!
//! # Example
//!
//! ```rust,ignore
//! use launchpin_core::{cmdline, LauncherSpec, LauncherWriter, ProcessWatcher};
//!
//! fn main() -> launchpin_core::Result<()> {
//!     let mut watcher = ProcessWatcher::new();
//!     let capture = watcher.watch("Game-Win64-Shipping.exe", None)?;
//!
//!     let spec = LauncherSpec {
//!         target: r"C:\Games\Client.exe".into(),
//!         arguments: cmdline::join(capture.arguments()),
//!         working_dir: r"C:\Games".into(),
//!         icon: Some(r"C:\Games\Client.exe".into()),
//!         destination: launchpin_core::platform::desktop_dir()?.join("Game (Direct).lnk"),
//!     };
//!     let artifact = LauncherWriter::new().write(&spec, true)?;
//!     println!("created {:?}", artifact.path());
//!     Ok(())
//! }
//! ```

pub mod cmdline;
pub mod config;
pub mod error;
pub mod platform;
pub mod shortcut;
pub mod watcher;

// Re-export commonly used types
pub use error::{LaunchpinError, Result};
pub use shortcut::{
    LauncherArtifact, LauncherSpec, LauncherWriter, NativeShortcutCapability, NativeShortcutWriter,
};
pub use watcher::{
    CaptureResult, ProcessSnapshot, ProcessTable, ProcessWatcher, SysinfoProcessTable,
};
