//! Integration tests for the CLI surface itself: version flag, help
//! behavior, and the global modules-directory option.

use predicates::prelude::*;

mod common;
use common::TestProject;

/// `-v` prints the version and exits successfully
#[test]
fn test_version_short_flag() {
    let project = TestProject::new().unwrap();

    project
        .lola_bare()
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// `--version` long form works too
#[test]
fn test_version_long_flag() {
    let project = TestProject::new().unwrap();

    project
        .lola_bare()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// No arguments shows usage help
#[test]
fn test_no_args_shows_help() {
    let project = TestProject::new().unwrap();

    project
        .lola_bare()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

/// Unknown subcommands are rejected by the parser
#[test]
fn test_unknown_subcommand() {
    let project = TestProject::new().unwrap();

    project.lola_bare().arg("frobnicate").assert().failure();
}

/// The default modules directory is ./modules relative to the cwd
#[test]
fn test_default_modules_dir() {
    let project = TestProject::new().unwrap();

    project
        .lola_bare()
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("Modules directory not found"))
        .stdout(predicate::str::contains("./modules"));
}

/// `-p` may come before or after the subcommand
#[test]
fn test_path_flag_position() {
    let project = TestProject::new().unwrap();
    project.write_manifest("lolas:\n  - name: only\n").unwrap();

    project
        .lola_bare()
        .args(["-p", "modules", "ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. only"));

    project
        .lola_bare()
        .args(["ls", "-p", "modules"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. only"));
}

/// install requires a module name
#[test]
fn test_install_requires_module_name() {
    let project = TestProject::new().unwrap();

    project
        .lola_bare()
        .arg("install")
        .assert()
        .failure()
        .stderr(predicate::str::contains("MODULE_NAME"));
}
