//! Behavior that terminates the process, checked by re-running this test binary as a child
//! process filtered down to a single test.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::unreachable)]

use std::{
    env,
    num::NonZeroUsize,
    path::Path,
    process::{Command, Output},
};

use leveled_log::{Level, Logger, LoggerConfig, SizeRotatingFileTarget, fatal};

/// Set in the child process; holds the scratch directory handed over by the parent.
const CHILD_DIRECTORY: &str = "LEVELED_LOG_CHILD_DIRECTORY";

fn run_child(test_name: &str, directory: &Path) -> Output {
    Command::new(env::current_exe().unwrap())
        .args([test_name, "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_DIRECTORY, directory)
        .output()
        .expect("failed to spawn the test binary")
}

#[test]
fn fetching_the_logger_before_initialization_exits() {
    if env::var_os(CHILD_DIRECTORY).is_some() {
        let _ = leveled_log::logger();
        unreachable!("fetching an uninitialized logger must exit");
    }

    let dir = tempfile::tempdir().unwrap();
    let output = run_child("fetching_the_logger_before_initialization_exits", dir.path());

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("logger is not initialized"), "{stdout}");
}

#[test]
fn fatal_writes_to_every_target_then_exits() {
    if let Some(directory) = env::var_os(CHILD_DIRECTORY) {
        let logger = Logger::new(false).with_target(SizeRotatingFileTarget::new(
            Level::All,
            1024,
            NonZeroUsize::new(2).unwrap(),
            Path::new(&directory).join("fatal.log"),
        ));
        logger.info(format_args!("about to fail"));
        fatal!(logger, "unrecoverable: {}", "disk gone");
    }

    let dir = tempfile::tempdir().unwrap();
    let output = run_child("fatal_writes_to_every_target_then_exits", dir.path());

    assert_eq!(output.status.code(), Some(1));
    let contents = std::fs::read_to_string(dir.path().join("fatal.log")).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2, "{contents:?}");
    assert!(lines.last().unwrap().contains(" FATAL unrecoverable: disk gone [process_exit.rs:"));
}

#[test]
fn global_fatal_reaches_the_console_and_the_file() {
    if let Some(directory) = env::var_os(CHILD_DIRECTORY) {
        let config = LoggerConfig::size(
            Level::Warn,
            Path::new(&directory).join("global.log"),
            1024,
            NonZeroUsize::new(2).unwrap(),
        );
        leveled_log::init_logger(&config, false);
        leveled_log::logger().fatal_parts(&[&"shutting down after ", &3, &" failures"]);
    }

    let dir = tempfile::tempdir().unwrap();
    let output = run_child("global_fatal_reaches_the_console_and_the_file", dir.path());

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(" FATAL shutting down after 3 failures ["), "{stdout}");
    let contents = std::fs::read_to_string(dir.path().join("global.log")).unwrap();
    assert!(contents.contains(" FATAL shutting down after 3 failures [process_exit.rs:"));
}
