//! Launcher artifact writing.
//!
//! One call produces exactly one artifact: the native shortcut when it can
//! be made, otherwise the batch script. A native failure degrades to the
//! script; only a script failure is fatal.

use super::batch_script;
use super::native::{NativeShortcutCapability, NativeShortcutWriter};
use crate::config::LauncherConfig;
use crate::error::{LaunchpinError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Everything needed to produce one launcher artifact.
#[derive(Debug, Clone)]
pub struct LauncherSpec {
    /// Executable the launcher starts.
    pub target: PathBuf,
    /// Pre-quoted argument string passed through to the target verbatim.
    pub arguments: String,
    /// Directory the target is started from.
    pub working_dir: PathBuf,
    /// Icon source. Left unset on the artifact when the path does not exist.
    pub icon: Option<PathBuf>,
    /// Requested artifact path, native extension included.
    pub destination: PathBuf,
}

/// The artifact that actually landed on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LauncherArtifact {
    /// Native shortcut at the requested destination.
    Native(PathBuf),
    /// Batch script at the fallback path.
    Script(PathBuf),
}

impl LauncherArtifact {
    pub fn path(&self) -> &Path {
        match self {
            LauncherArtifact::Native(path) | LauncherArtifact::Script(path) => path,
        }
    }
}

/// Writes launcher artifacts, preferring the native form when possible.
pub struct LauncherWriter {
    capability: NativeShortcutCapability,
}

impl LauncherWriter {
    /// Writer with the capability this build actually has.
    pub fn new() -> Self {
        Self {
            capability: NativeShortcutCapability::detect(),
        }
    }

    /// Writer with an injected capability. Used by tests and by callers
    /// that resolve the capability themselves.
    pub fn with_capability(capability: NativeShortcutCapability) -> Self {
        Self { capability }
    }

    /// Write exactly one launcher artifact for `spec`.
    ///
    /// The native form is attempted only when `prefer_native` is set, the
    /// requested destination carries the native extension, and the
    /// capability is available. Whatever goes wrong natively, the caller
    /// still ends up with a working artifact or an error, never neither.
    pub fn write(&self, spec: &LauncherSpec, prefer_native: bool) -> Result<LauncherArtifact> {
        if let Some(parent) = spec.destination.parent() {
            fs::create_dir_all(parent).map_err(|e| LaunchpinError::io_with_path(e, parent))?;
        }

        if prefer_native && has_native_extension(&spec.destination) {
            match &self.capability {
                NativeShortcutCapability::Available(writer) => {
                    match write_native(writer.as_ref(), spec) {
                        Ok(()) => {
                            info!("Created native shortcut at {:?}", spec.destination);
                            return Ok(LauncherArtifact::Native(spec.destination.clone()));
                        }
                        Err(e) => {
                            info!(
                                "Native shortcut creation failed ({}); falling back to batch script",
                                e
                            );
                            remove_partial(&spec.destination);
                        }
                    }
                }
                NativeShortcutCapability::Unavailable => {
                    debug!("Native shortcut support unavailable; using batch script");
                }
            }
        }

        let script_path = batch_script::generate(spec)?;
        Ok(LauncherArtifact::Script(script_path))
    }
}

impl Default for LauncherWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn has_native_extension(destination: &Path) -> bool {
    destination
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case(LauncherConfig::NATIVE_EXTENSION))
        .unwrap_or(false)
}

fn write_native(writer: &dyn NativeShortcutWriter, spec: &LauncherSpec) -> Result<()> {
    let mut native_spec = spec.clone();
    if let Some(icon) = &native_spec.icon {
        if !icon.exists() {
            debug!("Icon {:?} does not exist; shortcut icon left unset", icon);
            native_spec.icon = None;
        }
    }
    writer.create(&native_spec)
}

/// Best-effort removal of a half-written shortcut after a failed attempt.
fn remove_partial(destination: &Path) {
    if destination.exists() {
        if let Err(e) = fs::remove_file(destination) {
            warn!("Failed to remove partial shortcut {:?}: {}", destination, e);
        }
    }
}
