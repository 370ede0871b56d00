//! Process-table watching and command-line capture.
//!
//! Polls the OS process table until a process with the requested executable
//! name shows up with a readable command line, then hands the full argument
//! vector back to the caller. The table itself is behind a trait so the
//! loop can be driven against scripted entries in tests.

use crate::config::WatchConfig;
use crate::error::{LaunchpinError, Result};
use std::thread;
use std::time::{Duration, Instant};
use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, System, UpdateKind};
use tracing::{debug, trace};

/// One process-table entry, as seen during a single scan.
#[derive(Debug, Clone)]
pub struct ProcessSnapshot {
    /// Executable name, without path.
    pub name: String,
    /// Full argument vector, executable slot included.
    pub command_line: Vec<String>,
}

/// A captured invocation.
#[derive(Debug, Clone)]
pub struct CaptureResult {
    /// Full argument vector as captured. Never re-ordered or trimmed.
    pub command_line: Vec<String>,
}

impl CaptureResult {
    /// The passthrough arguments: everything after the executable slot.
    pub fn arguments(&self) -> &[String] {
        self.command_line.get(1..).unwrap_or(&[])
    }
}

/// Source of process-table entries.
///
/// Each scan yields every visible process. Entries that exist but cannot
/// be read (the process exited mid-scan, or access was denied) come back
/// as `Err`; the watcher skips those and keeps going.
pub trait ProcessTable {
    fn scan(&mut self) -> Vec<Result<ProcessSnapshot>>;
}

/// Production process table backed by sysinfo.
///
/// The `System` is kept across polls so each refresh only has to diff the
/// table. sysinfo reports unreadable entries as an empty command line
/// rather than an error, so this implementation never yields `Err`; the
/// error channel exists for other table sources.
pub struct SysinfoProcessTable {
    system: System,
}

impl SysinfoProcessTable {
    pub fn new() -> Self {
        Self {
            system: System::new(),
        }
    }
}

impl Default for SysinfoProcessTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessTable for SysinfoProcessTable {
    fn scan(&mut self) -> Vec<Result<ProcessSnapshot>> {
        self.system.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::new().with_cmd(UpdateKind::Always),
        );

        self.system
            .processes()
            .values()
            .map(|process| {
                Ok(ProcessSnapshot {
                    name: process.name().to_string_lossy().into_owned(),
                    command_line: process
                        .cmd()
                        .iter()
                        .map(|arg| arg.to_string_lossy().into_owned())
                        .collect(),
                })
            })
            .collect()
    }
}

/// Polls a process table until a named process appears.
pub struct ProcessWatcher<T: ProcessTable> {
    table: T,
    poll_interval: Duration,
}

impl ProcessWatcher<SysinfoProcessTable> {
    /// Watcher over the live OS process table.
    pub fn new() -> Self {
        Self::with_table(SysinfoProcessTable::new())
    }
}

impl Default for ProcessWatcher<SysinfoProcessTable> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ProcessTable> ProcessWatcher<T> {
    pub fn with_table(table: T) -> Self {
        Self {
            table,
            poll_interval: WatchConfig::POLL_INTERVAL,
        }
    }

    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Wait for a process named `process_name` and capture its command line.
    ///
    /// The name comparison is ASCII-case-insensitive. If several processes
    /// share the name, whichever one the table enumerates first wins. A
    /// `None` timeout waits indefinitely.
    ///
    /// The table is always scanned at least once, even with a zero timeout:
    /// the deadline is only checked after a scan comes up empty.
    pub fn watch(
        &mut self,
        process_name: &str,
        timeout: Option<Duration>,
    ) -> Result<CaptureResult> {
        let deadline = timeout.map(|budget| (Instant::now() + budget, budget));
        debug!(
            "watching for process {:?} (timeout: {:?})",
            process_name, timeout
        );

        loop {
            if let Some(capture) = self.scan_for(process_name) {
                debug!(
                    "captured {} argument(s) from {:?}",
                    capture.command_line.len(),
                    process_name
                );
                return Ok(capture);
            }

            if let Some((at, budget)) = deadline {
                if Instant::now() >= at {
                    return Err(LaunchpinError::WatchTimeout {
                        process: process_name.to_string(),
                        waited: budget,
                    });
                }
            }

            thread::sleep(self.poll_interval);
        }
    }

    /// One pass over the table. Returns the first usable match.
    fn scan_for(&mut self, process_name: &str) -> Option<CaptureResult> {
        for entry in self.table.scan() {
            let snapshot = match entry {
                Ok(snapshot) => snapshot,
                Err(err) => {
                    trace!("skipping unreadable process entry: {}", err);
                    continue;
                }
            };

            if !snapshot.name.eq_ignore_ascii_case(process_name) {
                continue;
            }

            if snapshot.command_line.is_empty() {
                // The process is visible but its argv is not readable yet.
                // Treat it as not found and let the next poll retry.
                debug!("{} is running but its command line is empty", snapshot.name);
                continue;
            }

            return Some(CaptureResult {
                command_line: snapshot.command_line,
            });
        }
        None
    }
}
