//! Native shortcut (.lnk) support.
//!
//! Shortcut-file creation only exists on Windows, so it sits behind a
//! capability resolved once at startup. Everything downstream handles
//! `Unavailable` by falling back to the batch script, which keeps the
//! rest of the pipeline portable and testable anywhere.

use super::writer::LauncherSpec;
use crate::error::Result;

/// A single native shortcut write.
///
/// Implementations receive a spec whose icon has already been checked for
/// existence, and either produce the shortcut file at `spec.destination`
/// or report why they could not. A failed attempt may leave a partial
/// file behind; the caller cleans that up.
pub trait NativeShortcutWriter {
    fn create(&self, spec: &LauncherSpec) -> Result<()>;
}

/// Whether this build can produce native shortcuts.
pub enum NativeShortcutCapability {
    /// A working shortcut writer for this platform.
    Available(Box<dyn NativeShortcutWriter>),
    /// No native shortcut support here; callers fall back to the script
    /// artifact.
    Unavailable,
}

impl NativeShortcutCapability {
    /// Probe for native shortcut support. Resolved once, at startup.
    pub fn detect() -> Self {
        #[cfg(windows)]
        {
            NativeShortcutCapability::Available(Box::new(LnkShortcutWriter))
        }
        #[cfg(not(windows))]
        {
            NativeShortcutCapability::Unavailable
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, NativeShortcutCapability::Available(_))
    }
}

/// Writer backed by the `lnk` crate.
#[cfg(windows)]
pub struct LnkShortcutWriter;

#[cfg(windows)]
impl NativeShortcutWriter for LnkShortcutWriter {
    fn create(&self, spec: &LauncherSpec) -> Result<()> {
        use crate::error::LaunchpinError;

        let mut link =
            lnk::ShellLink::new_simple(&spec.target).map_err(|e| LaunchpinError::NativeShortcut {
                message: format!("link target {}: {}", spec.target.display(), e),
            })?;

        if !spec.arguments.is_empty() {
            link.set_arguments(Some(spec.arguments.clone()));
        }
        link.set_working_dir(Some(spec.working_dir.display().to_string()));
        if let Some(icon) = &spec.icon {
            link.set_icon_location(Some(icon.display().to_string()));
        }

        link.save(&spec.destination)
            .map_err(|e| LaunchpinError::NativeShortcut {
                message: format!("save {}: {}", spec.destination.display(), e),
            })
    }
}
