//! CLI integration tests for cscbuild.
//!
//! These tests drive the real binary with stub compiler executables and
//! verify the fatal error surfaces end to end.

use std::fs;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the cscbuild binary command.
fn cscbuild() -> Command {
    Command::cargo_bin("cscbuild").unwrap()
}

/// Create a temporary working directory.
fn temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

/// Write a stub compiler script into the working directory.
#[cfg(unix)]
fn write_stub_tool(dir: &std::path::Path, name: &str, body: &str) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let tool = dir.join(name);
    fs::write(&tool, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&tool, fs::Permissions::from_mode(0o755)).unwrap();
    tool
}

#[test]
fn help_prints_usage() {
    cscbuild()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("cscbuild"));
}

#[test]
fn missing_source_argument_fails() {
    cscbuild().assert().failure();
}

#[test]
fn missing_tool_is_a_fatal_error() {
    let tmp = temp_dir();

    cscbuild()
        .args(["app.cs", "--tool-path", "./no/such/csc.exe"])
        .args(["--working-dir", tmp.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("csc: Could not locate executable."));
}

#[test]
fn unparseable_config_is_a_fatal_error() {
    let tmp = temp_dir();
    let config = tmp.path().join("csc.toml");
    fs::write(&config, "no-logo = ").unwrap();

    cscbuild()
        .args(["app.cs", "--config", config.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse settings file"));
}

#[cfg(unix)]
#[test]
fn successful_compile_passes_arguments_to_the_tool() {
    let tmp = temp_dir();
    write_stub_tool(tmp.path(), "csc.exe", "echo \"$@\" > args.txt\nexit 0");

    cscbuild()
        .args(["./app.cs", "--nologo", "--optimize"])
        .args(["--tool-path", "./csc.exe"])
        .args(["--working-dir", tmp.path().to_str().unwrap()])
        .assert()
        .success();

    let recorded = fs::read_to_string(tmp.path().join("args.txt")).unwrap();
    assert!(recorded.contains("/nologo"), "args were: {recorded}");
    assert!(recorded.contains("/optimize"), "args were: {recorded}");
    assert!(recorded.contains("app.cs"), "args were: {recorded}");
}

#[cfg(unix)]
#[test]
fn non_zero_exit_code_is_a_fatal_error() {
    let tmp = temp_dir();
    write_stub_tool(tmp.path(), "csc.exe", "exit 7");

    cscbuild()
        .args(["./app.cs", "--tool-path", "./csc.exe"])
        .args(["--working-dir", tmp.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "csc: Process returned an error (exit code 7).",
        ));
}

#[cfg(unix)]
#[test]
fn unstartable_tool_is_a_fatal_error() {
    let tmp = temp_dir();
    // Present on disk but not executable, so the spawn itself fails.
    let tool = tmp.path().join("csc.exe");
    fs::write(&tool, "not a program").unwrap();

    cscbuild()
        .args(["./app.cs", "--tool-path", "./csc.exe"])
        .args(["--working-dir", tmp.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("csc: Process was not started."));
}

#[cfg(unix)]
#[test]
fn config_file_settings_reach_the_command_line() {
    let tmp = temp_dir();
    write_stub_tool(tmp.path(), "csc.exe", "echo \"$@\" > args.txt\nexit 0");

    let config = tmp.path().join("csc.toml");
    fs::write(
        &config,
        r#"
no-logo = true
platform = "x64"
target = "library"
define = ["DEBUG", "TRACE"]
"#,
    )
    .unwrap();

    cscbuild()
        .args(["./app.cs", "--config", config.to_str().unwrap()])
        .args(["--tool-path", "./csc.exe"])
        .args(["--working-dir", tmp.path().to_str().unwrap()])
        .assert()
        .success();

    let recorded = fs::read_to_string(tmp.path().join("args.txt")).unwrap();
    assert!(recorded.contains("/nologo"), "args were: {recorded}");
    assert!(recorded.contains("/platform:x64"), "args were: {recorded}");
    assert!(recorded.contains("/target:library"), "args were: {recorded}");
    assert!(
        recorded.contains("/define:DEBUG;TRACE"),
        "args were: {recorded}"
    );
}
