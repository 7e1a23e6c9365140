//! CLI integration tests using the REAL ultrac binary

mod common;

use assert_cmd::Command;
use common::TestProject;
use predicates::prelude::*;

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
fn ultrac_cmd() -> Command {
    Command::cargo_bin("ultrac").unwrap()
}

#[test]
fn test_help_output() {
    ultrac_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(".ultra artifacts"))
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_version_output() {
    ultrac_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ultrac"))
        .stdout(predicate::str::contains("Build info"));
}

#[test]
fn test_completions_bash() {
    ultrac_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ultrac"));
}

#[test]
fn test_completions_unknown_shell() {
    ultrac_cmd()
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shell"));
}

#[test]
fn test_root_from_env() {
    let project = TestProject::with_preamble("a: 1\n");
    project.add_unit("foo", Some("b: 2\n"), Some("hello"));

    ultrac_cmd()
        .env("ULTRAC_ROOT", &project.path)
        .arg("build")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created output/foo.ultra"));

    assert!(project.file_exists("output/foo.ultra"));
}

#[test]
fn test_root_flag_overrides_env() {
    let env_project = TestProject::with_preamble("a: 1\n");
    env_project.add_unit("env_unit", Some("b: 2\n"), Some("hello"));
    let flag_project = TestProject::with_preamble("a: 1\n");
    flag_project.add_unit("flag_unit", Some("b: 2\n"), Some("hello"));

    ultrac_cmd()
        .env("ULTRAC_ROOT", &env_project.path)
        .args(["--root", flag_project.path.to_str().unwrap(), "build"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created output/flag_unit.ultra"));

    assert!(flag_project.file_exists("output/flag_unit.ultra"));
    assert!(!env_project.file_exists("output"));
}

#[test]
fn test_error_goes_to_stderr_with_exit_code() {
    let project = TestProject::new();

    ultrac_cmd()
        .args(["--root", project.path.to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error:"));
}
