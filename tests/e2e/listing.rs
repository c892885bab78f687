use std::{ffi::OsStr, fs, os::unix::ffi::OsStrExt};

use predicates::prelude::*;

use crate::common::{BLUE, Fixture, GREEN, RESET, dirlist, sorted_lines};

const RECENT_OR_OLD_DATE: &str = r"\w{3} [ \d]\d (\d\d:\d\d| \d{4})";

#[test]
fn long_format_regular_file() {
    let fixture = Fixture::new();
    fixture.file("a.txt", "hello", 0o644);

    let pattern =
        format!(r"^-rw-r--r--  1 +\S+ +\S+ +5 {RECENT_OR_OLD_DATE}   \x1B\[0ma\.txt\x1B\[0m\n$");
    dirlist()
        .args(["-l", fixture.path_str()])
        .assert()
        .success()
        .stdout(predicate::str::is_match(pattern).unwrap());
}

#[test]
fn subdirectory_is_blue_and_reset_after() {
    let fixture = Fixture::new();
    fixture.subdir("sub");

    dirlist()
        .arg(fixture.path())
        .assert()
        .success()
        .stdout(format!("{BLUE}sub{RESET}\n"));
}

#[test]
fn long_format_subdirectory() {
    let fixture = Fixture::new();
    fixture.subdir("sub");

    let output = dirlist().args(["-l", fixture.path_str()]).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(output.status.success());
    assert!(stdout.starts_with('d'), "{stdout}");
    assert!(stdout.ends_with(&format!("{BLUE}sub{RESET}\n")), "{stdout}");
}

#[test]
fn each_kind_gets_its_colour() {
    let fixture = Fixture::new();
    fixture.file("a.txt", "hello", 0o644);
    fixture.subdir("sub");
    fixture.link("ln", "a.txt");

    let output = dirlist().arg(fixture.path()).output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        sorted_lines(&output.stdout),
        vec![
            format!("{RESET}a.txt{RESET}"),
            format!("{GREEN}ln{RESET}"),
            format!("{BLUE}sub{RESET}"),
        ]
    );
}

#[test]
fn dangling_symlink_is_described_not_followed() {
    let fixture = Fixture::new();
    fixture.link("dangling", "nowhere");

    dirlist()
        .args(["-l", fixture.path_str()])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("lrwxrwxrwx"))
        .stdout(predicate::str::ends_with(format!("{GREEN}dangling{RESET}\n")));
}

#[test]
fn listed_directory_is_used_for_metadata_from_another_cwd() {
    let fixture = Fixture::new();
    fixture.file("a.txt", "hello", 0o600);
    let elsewhere = Fixture::new();

    dirlist()
        .current_dir(elsewhere.path())
        .args(["-l", fixture.path_str()])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("-rw-------  1 "));
}

#[test]
fn legacy_cwd_lookup_fails_from_another_cwd() {
    let fixture = Fixture::new();
    fixture.file("a.txt", "hello", 0o644);
    let elsewhere = Fixture::new();

    dirlist()
        .current_dir(elsewhere.path())
        .args(["-l", "--legacy-cwd-lookup", fixture.path_str()])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("cannot stat 'a.txt'"));
}

#[test]
fn legacy_cwd_lookup_works_when_listing_the_cwd() {
    let fixture = Fixture::new();
    fixture.file("a.txt", "hello", 0o644);

    dirlist()
        .current_dir(fixture.path())
        .args(["-l", "--legacy-cwd-lookup", "."])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("-rw-r--r--  1 "));
}

#[test]
fn legacy_cwd_lookup_with_legacy_exit_is_silent() {
    let fixture = Fixture::new();
    fixture.file("a.txt", "hello", 0o644);
    let elsewhere = Fixture::new();

    dirlist()
        .current_dir(elsewhere.path())
        .args(["-l", "--legacy-cwd-lookup", "--legacy-exit-status", fixture.path_str()])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn empty_directory_prints_nothing() {
    let fixture = Fixture::new();
    dirlist().arg(fixture.path()).assert().success().stdout("");
}

#[test]
fn repeated_runs_match_modulo_order() {
    let fixture = Fixture::new();
    fixture.file("a.txt", "hello", 0o644);
    fixture.file("b.txt", "", 0o600);
    fixture.subdir("sub");

    let run = || dirlist().args(["-l", fixture.path_str()]).output().unwrap();
    let (first, second) = (run(), run());
    assert!(first.status.success() && second.status.success());
    assert_eq!(sorted_lines(&first.stdout), sorted_lines(&second.stdout));
}

#[test]
fn non_utf8_names_are_printed_byte_for_byte() {
    let fixture = Fixture::new();
    let name = OsStr::from_bytes(b"caf\xe9");
    fs::write(fixture.path().join(name), "").unwrap();

    let expected = [RESET.as_bytes(), b"caf\xe9", RESET.as_bytes(), b"\n"].concat();
    dirlist().arg(fixture.path()).assert().success().stdout(expected.clone());

    let output = dirlist().args(["-l", fixture.path_str()]).output().unwrap();
    assert!(output.status.success());
    assert!(output.stdout.starts_with(b"-"));
    assert!(output.stdout.ends_with(&expected));
}
