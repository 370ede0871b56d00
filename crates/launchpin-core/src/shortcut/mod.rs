//! Desktop launcher generation.
//!
//! Each submodule owns one artifact concern:
//! - `writer` - the one-artifact-per-invocation state machine
//! - `native` - capability-gated `.lnk` creation
//! - `batch_script` - the `.bat` fallback

pub mod batch_script;
pub mod native;
pub mod writer;

// Re-export commonly used items
pub use native::{NativeShortcutCapability, NativeShortcutWriter};
pub use writer::{LauncherArtifact, LauncherSpec, LauncherWriter};
