use predicates::prelude::*;

use crate::common::{Fixture, dirlist};

#[test]
fn help_prints_usage_and_exits_non_zero() {
    let fixture = Fixture::new();
    fixture.file("a.txt", "hello", 0o644);

    dirlist()
        .args(["-h", fixture.path_str()])
        .assert()
        .code(255)
        .stdout(predicate::str::contains("Usage: dirlist [options] <path>"))
        .stdout(predicate::str::contains("-l                List in long format."))
        .stdout(predicate::str::contains("a.txt").not());
}

#[test]
fn unknown_flag_is_named_then_usage() {
    dirlist()
        .args(["-x", "."])
        .assert()
        .code(255)
        .stdout(predicate::str::starts_with("Unknown option '-x'\n"))
        .stdout(predicate::str::contains("Usage: dirlist"));
}

#[test]
fn missing_path_is_a_usage_error() {
    dirlist()
        .assert()
        .code(255)
        .stdout(predicate::str::starts_with("Missing argument: <path>\n"))
        .stdout(predicate::str::contains("Usage: dirlist"));
}

#[test]
fn extra_path_is_rejected() {
    dirlist()
        .args([".", ".."])
        .assert()
        .code(255)
        .stdout(predicate::str::starts_with("Unexpected argument '..'\n"));
}

#[test]
fn version_succeeds() {
    dirlist()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("dirlist "));
}

#[test]
fn short_version_flag_is_unknown() {
    dirlist()
        .args(["-V", "."])
        .assert()
        .code(255)
        .stdout(predicate::str::starts_with("Unknown option '-V'\n"));
}

#[test]
fn repeated_long_flag_still_lists() {
    let fixture = Fixture::new();
    fixture.file("a.txt", "hello", 0o644);

    dirlist()
        .args(["-l", "-l", fixture.path_str()])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("-rw-r--r--  1 "))
        .stdout(predicate::str::ends_with("a.txt\x1B[0m\n"));
}

#[test]
fn open_failure_is_a_distinct_error_by_default() {
    let fixture = Fixture::new();
    let missing = fixture.path().join("absent");

    dirlist()
        .arg(&missing)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("cannot open directory"));
}

#[test]
fn open_failure_on_a_file_is_reported() {
    let fixture = Fixture::new();
    let file = fixture.file("plain", "x", 0o644);

    dirlist().arg(&file).assert().code(1).stdout(predicate::str::is_empty());
}

#[test]
fn legacy_exit_status_replicates_silent_success() {
    let fixture = Fixture::new();
    let missing = fixture.path().join("absent");

    dirlist()
        .arg("--legacy-exit-status")
        .arg(&missing)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn logging_goes_to_stderr_only() {
    let fixture = Fixture::new();
    fixture.file("a.txt", "hello", 0o644);

    dirlist()
        .env("DIRLIST_LOG", "debug")
        .arg(fixture.path())
        .assert()
        .success()
        .stdout("\x1B[0ma.txt\x1B[0m\n")
        .stderr(predicate::str::contains("listed 1 entries"));
}
