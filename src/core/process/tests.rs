// webk-build: Web K build configuration composer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::builder::ProcessBuilder;
use crate::error::ProcessError;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

#[cfg(unix)]
fn write_executable(path: &std::path::Path, content: &[u8]) {
    use std::os::unix::fs::PermissionsExt;
    std::fs::write(path, content).unwrap();
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
}

#[cfg(not(windows))]
#[tokio::test]
async fn test_process_success() {
    let output = ProcessBuilder::new("sh")
        .args(["-c", "echo forwarded; exit 0"])
        .run_with_cancellation(CancellationToken::new())
        .await
        .expect("process should succeed");

    assert!(output.success());
    assert!(!output.is_interrupted());
}

#[cfg(not(windows))]
#[tokio::test]
async fn test_process_failure_is_error() {
    let err = ProcessBuilder::new("sh")
        .args(["-c", "exit 3"])
        .run_with_cancellation(CancellationToken::new())
        .await
        .expect_err("non-zero exit should fail");

    assert!(matches!(
        err.downcast_ref::<ProcessError>(),
        Some(ProcessError::NonZeroExit { code: 3, .. })
    ));
    insta::assert_snapshot!(err.to_string(), @"process 'sh' exited with code 3");
}

#[cfg(not(windows))]
#[tokio::test]
async fn test_process_runs_in_cwd() {
    let temp = tempfile::tempdir().unwrap();

    ProcessBuilder::new("touch")
        .args(["marker"])
        .cwd(temp.path())
        .run_with_cancellation(CancellationToken::new())
        .await
        .expect("touch should succeed");

    assert!(temp.path().join("marker").exists());
}

#[cfg(not(windows))]
#[tokio::test]
async fn test_process_cancellation() {
    let token = CancellationToken::new();
    let canceller = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        canceller.cancel();
    });

    let output = ProcessBuilder::new("sleep")
        .args(["30"])
        .run_with_cancellation(token)
        .await
        .expect("interrupted process is not an error");

    assert!(output.is_interrupted());
}

#[tokio::test]
async fn test_cancelled_before_spawn() {
    let token = CancellationToken::new();
    token.cancel();

    let output = ProcessBuilder::new("nonexistent_program_12345")
        .run_with_cancellation(token)
        .await
        .expect("nothing is spawned once cancelled");
    assert!(output.is_interrupted());
    assert_eq!(output.exit_code(), -1);
}

#[tokio::test]
async fn test_missing_executable_reported_before_spawn() {
    let err = ProcessBuilder::new("nonexistent_program_12345")
        .run_with_cancellation(CancellationToken::new())
        .await
        .expect_err("missing program should fail");

    assert!(matches!(
        err.downcast_ref::<ProcessError>(),
        Some(ProcessError::ExecutableNotFound { name }) if name == "nonexistent_program_12345"
    ));
}

#[cfg(unix)]
#[test]
fn test_resolve_relative_program_against_cwd() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::create_dir(temp.path().join("tools")).unwrap();
    write_executable(&temp.path().join("tools/watch-lang"), b"#!/bin/sh\n");

    let builder = ProcessBuilder::new("./tools/watch-lang").cwd(temp.path());
    let resolved = builder.resolve().expect("script should resolve");
    assert_eq!(
        resolved.canonicalize().unwrap(),
        temp.path().join("tools/watch-lang").canonicalize().unwrap()
    );

    let elsewhere = ProcessBuilder::new("./tools/watch-lang").cwd(temp.path().join("tools"));
    assert!(matches!(
        elsewhere.resolve(),
        Err(ProcessError::ExecutableNotFound { .. })
    ));
}

#[cfg(unix)]
#[tokio::test]
async fn test_spawn_failure() {
    let temp = tempfile::tempdir().unwrap();
    // executable bit set, but not a runnable image
    write_executable(&temp.path().join("broken"), b"\x00\x01\x02\x03");

    let err = ProcessBuilder::new("./broken")
        .cwd(temp.path())
        .run_with_cancellation(CancellationToken::new())
        .await
        .expect_err("spawn should fail");
    assert!(matches!(
        err.downcast_ref::<ProcessError>(),
        Some(ProcessError::SpawnFailed { command, .. }) if command == "./broken"
    ));
}

#[test]
fn test_command_line_quotes_spaces() {
    let builder = ProcessBuilder::new("node").args(["watch-lang.js", "--dir", "src/lang files"]);
    assert_eq!(
        builder.command_line(),
        "node watch-lang.js --dir \"src/lang files\""
    );
    assert_eq!(builder.display_name(), "node");
    assert_eq!(builder.name("watcher").display_name(), "watcher");
}
