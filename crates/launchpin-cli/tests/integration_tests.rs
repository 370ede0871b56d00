//! Integration tests for the launchpin binary.
//!
//! These drive the built executable end to end and assert on the exit
//! codes and output a user would actually see.

use std::process::Command;

fn launchpin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_launchpin"))
}

#[test]
fn test_help_lists_all_flags() {
    let output = launchpin()
        .arg("--help")
        .output()
        .expect("failed to run binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in [
        "--target",
        "--timeout",
        "--shortcut-name",
        "--proc-name",
        "--debug",
    ] {
        assert!(stdout.contains(flag), "missing {flag} in help output");
    }
}

#[cfg(not(windows))]
#[test]
fn test_refuses_to_run_off_windows() {
    let output = launchpin().output().expect("failed to run binary");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("ERROR:"), "stderr was: {stderr}");
    assert!(stderr.contains("windows"));
}

#[cfg(windows)]
#[test]
fn test_missing_target_exits_with_code_3() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let missing = temp_dir.path().join("NoSuchClient.exe");

    let output = launchpin()
        .arg("--target")
        .arg(&missing)
        .arg("--timeout")
        .arg("1")
        .output()
        .expect("failed to run binary");

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"));
}

#[cfg(windows)]
#[test]
fn test_watch_timeout_exits_with_code_4() {
    // An existing target but a process name that cannot be running.
    let temp_dir = tempfile::TempDir::new().unwrap();
    let target = temp_dir.path().join("Client.exe");
    std::fs::write(&target, b"stub").unwrap();

    let output = launchpin()
        .arg("--target")
        .arg(&target)
        .arg("--proc-name")
        .arg("launchpin-no-such-process.exe")
        .arg("--timeout")
        .arg("1")
        .output()
        .expect("failed to run binary");

    assert_eq!(output.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Timed out"));
}
