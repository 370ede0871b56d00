//! Launchpin - pin a running game's launch arguments into a desktop shortcut.
//!
//! Waits for the watched process to appear in the process table, captures
//! its command line, and writes a desktop launcher that starts the target
//! executable directly with the same arguments. The point is to skip the
//! intermediary launcher on subsequent runs.

use clap::Parser;
use launchpin_core::cmdline;
use launchpin_core::config::{AppConfig, LauncherConfig, WatchConfig};
use launchpin_core::platform;
use launchpin_core::{
    LaunchpinError, LauncherArtifact, LauncherSpec, LauncherWriter, ProcessWatcher,
};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = AppConfig::APP_NAME)]
#[command(about = "Create a desktop launcher that bypasses an intermediary game launcher")]
struct Args {
    /// Target executable the generated launcher starts
    #[arg(long, default_value = LauncherConfig::DEFAULT_TARGET)]
    target: PathBuf,

    /// Seconds to wait for the watched process (0 = wait forever)
    #[arg(long, default_value_t = WatchConfig::DEFAULT_TIMEOUT_SECS)]
    timeout: f64,

    /// File name of the launcher placed on the desktop
    #[arg(long, default_value = LauncherConfig::DEFAULT_SHORTCUT_NAME)]
    shortcut_name: String,

    /// Process name whose command line gets captured
    #[arg(long, default_value = WatchConfig::DEFAULT_PROCESS_NAME)]
    proc_name: String,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    if let Err(err) = run(args) {
        eprintln!("ERROR: {err}");
        std::process::exit(err.exit_code());
    }
}

/// Map the `--timeout` flag to the watcher's optional wait budget.
///
/// Zero (the default) and negative values mean wait forever.
fn watch_timeout(secs: f64) -> Option<Duration> {
    if secs > 0.0 {
        Some(Duration::from_secs_f64(secs))
    } else {
        None
    }
}

fn run(args: Args) -> launchpin_core::Result<()> {
    platform::require_windows()?;

    if !args.target.is_file() {
        return Err(LaunchpinError::TargetNotFound(args.target));
    }

    debug!(
        "target: {:?}, process: {:?}, timeout: {}s, shortcut: {:?}",
        args.target, args.proc_name, args.timeout, args.shortcut_name
    );

    println!("Watching for process: {}", args.proc_name);
    let mut watcher = ProcessWatcher::new();
    let capture = watcher.watch(&args.proc_name, watch_timeout(args.timeout))?;

    let arguments = cmdline::join(capture.arguments());
    println!("Captured arguments:");
    if arguments.is_empty() {
        println!("  (none)");
    } else {
        println!("  {arguments}");
    }

    // The launcher starts the target from its own directory and borrows its
    // icon, matching what a hand-made shortcut would look like.
    let working_dir = args
        .target
        .parent()
        .map(|dir| dir.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    let destination = platform::desktop_dir()?.join(&args.shortcut_name);
    let icon = Some(args.target.clone());

    let spec = LauncherSpec {
        target: args.target,
        arguments,
        working_dir,
        icon,
        destination,
    };

    let artifact = LauncherWriter::new().write(&spec, true)?;
    match &artifact {
        LauncherArtifact::Native(path) => println!("Shortcut created: {}", path.display()),
        LauncherArtifact::Script(path) => println!("Launcher created: {}", path.display()),
    }
    println!("Done.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_timeout_means_wait_forever() {
        assert_eq!(watch_timeout(0.0), None);
        assert_eq!(watch_timeout(-1.0), None);
    }

    #[test]
    fn test_positive_timeout_becomes_a_budget() {
        assert_eq!(watch_timeout(2.0), Some(Duration::from_secs(2)));
        assert_eq!(watch_timeout(0.5), Some(Duration::from_millis(500)));
    }
}
