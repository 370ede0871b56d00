//! Centralized configuration for launchpin.
//!
//! This module provides the default watch target, polling cadence, and
//! launcher naming used when the CLI is run without overrides.

use std::time::Duration;

/// Application-level configuration.
pub struct AppConfig;

impl AppConfig {
    pub const APP_NAME: &'static str = "launchpin";
}

/// Configuration for the process watch loop.
pub struct WatchConfig;

impl WatchConfig {
    /// Executable name to look for in the process table. The shipping
    /// binary is what the official launcher actually spawns, so its
    /// command line is the one worth capturing.
    pub const DEFAULT_PROCESS_NAME: &'static str = "EVEVanguardClient-Win64-Shipping.exe";

    /// Delay between process-table scans.
    pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

    /// Default wait budget in seconds. Zero or negative means wait forever.
    pub const DEFAULT_TIMEOUT_SECS: f64 = 0.0;
}

/// Configuration for the generated launcher artifact.
pub struct LauncherConfig;

impl LauncherConfig {
    /// Executable the launcher re-invokes. Distinct from the watched
    /// process: this is the client entry point, not the shipping binary.
    pub const DEFAULT_TARGET: &'static str =
        r"C:\CCP\EVE\eve-vanguard\live\WindowsClient\EVEVanguardClient.exe";

    /// File name of the artifact placed on the desktop. The extension is
    /// swapped for the script extension when the native form falls through.
    pub const DEFAULT_SHORTCUT_NAME: &'static str = "EVE Vanguard (Direct).lnk";

    pub const NATIVE_EXTENSION: &'static str = "lnk";
    pub const SCRIPT_EXTENSION: &'static str = "bat";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_interval_is_reasonable() {
        assert!(WatchConfig::POLL_INTERVAL > Duration::ZERO);
        assert!(WatchConfig::POLL_INTERVAL <= Duration::from_secs(5));
    }

    #[test]
    fn test_watched_process_is_not_the_target() {
        // The whole point of the tool: capture from one binary, launch another.
        assert!(!LauncherConfig::DEFAULT_TARGET.ends_with(WatchConfig::DEFAULT_PROCESS_NAME));
    }
}
