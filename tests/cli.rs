//! End-to-end tests for the `urlcode` binary.
//!
//! Inline `--data` values only apply when stdin is a terminal, which a
//! test harness never is, so these tests drive the binary through piped
//! stdin and files; the data path is covered by unit tests.

use std::fs;
use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn urlcode() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_urlcode"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn encodes_piped_stdin() {
    urlcode()
        .arg("--url-encode")
        .write_stdin("hello world\n")
        .assert()
        .success()
        .stdout("hello%20world\n");
}

#[test]
fn decodes_piped_stdin() {
    urlcode()
        .arg("--url-decode")
        .write_stdin("hello%20world\n")
        .assert()
        .success()
        .stdout("hello world\n");
}

#[test]
fn multiline_stdin_drops_blanks_and_keeps_order() {
    urlcode()
        .arg("--url-encode")
        .write_stdin("a b\n\n  c&d  \n")
        .assert()
        .success()
        .stdout("a%20b\nc%26d\n");
}

#[test]
fn reads_units_from_input_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "a b\n\nc&d\n").unwrap();

    urlcode()
        .arg("--url-encode")
        .arg("-i")
        .arg(file.path())
        .assert()
        .success()
        .stdout("a%20b\nc%26d\n");
}

#[test]
fn input_file_wins_over_piped_stdin() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "from file\n").unwrap();

    urlcode()
        .arg("--url-encode")
        .arg("-i")
        .arg(file.path())
        .write_stdin("from stdin\n")
        .assert()
        .success()
        .stdout("from%20file\n");
}

#[test]
fn writes_output_file_without_trailing_newline() {
    let mut input = NamedTempFile::new().unwrap();
    write!(input, "a b\nc&d\n").unwrap();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.txt");
    fs::write(&out, "previous run output that is much longer").unwrap();

    urlcode()
        .arg("--url-encode")
        .arg("-i")
        .arg(input.path())
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(fs::read_to_string(&out).unwrap(), "a%20b\nc%26d");
}

#[test]
fn decode_failure_names_the_unit_and_prints_nothing() {
    urlcode()
        .arg("--url-decode")
        .write_stdin("ok%20fine\n50%2\n")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("input 2"))
        .stderr(predicate::str::contains("incomplete percent escape"));
}

#[test]
fn decode_failure_leaves_output_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.txt");
    fs::write(&out, "sentinel").unwrap();

    urlcode()
        .arg("--url-decode")
        .arg("-o")
        .arg(&out)
        .write_stdin("fine\n50%G1\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid hex digit"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "sentinel");
}

#[test]
fn decodes_with_alternate_encoding() {
    urlcode()
        .arg("--url-decode")
        .arg("-e")
        .arg("latin1")
        .write_stdin("caf%E9\n")
        .assert()
        .success()
        .stdout("café\n");
}

#[test]
fn decode_rejects_bytes_invalid_for_encoding() {
    urlcode()
        .arg("--url-decode")
        .write_stdin("%FF\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not valid UTF-8"));
}

#[test]
fn unknown_encoding_is_a_runtime_error() {
    urlcode()
        .arg("--url-encode")
        .arg("-e")
        .arg("utf-9")
        .write_stdin("x\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("utf-9"));
}

#[test]
fn decode_only_encoding_is_a_runtime_error() {
    urlcode()
        .arg("--url-encode")
        .arg("-e")
        .arg("utf-16le")
        .write_stdin("hi\n")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("utf-16le"));
}

#[test]
fn empty_piped_stdin_is_a_runtime_error() {
    urlcode()
        .arg("--url-encode")
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("input is empty"));
}

#[test]
fn blank_piped_stdin_is_a_runtime_error() {
    urlcode()
        .arg("--url-encode")
        .write_stdin("\n  \n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("input is empty"));
}

#[test]
fn missing_input_file_is_a_runtime_error() {
    urlcode()
        .arg("--url-encode")
        .arg("-i")
        .arg("definitely/not/here.txt")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn no_transform_flag_is_a_usage_error() {
    urlcode()
        .write_stdin("x\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn conflicting_transform_flags_are_a_usage_error() {
    urlcode()
        .arg("--url-encode")
        .arg("--url-decode")
        .write_stdin("x\n")
        .assert()
        .code(2);
}

#[test]
fn version_flag() {
    urlcode()
        .arg("--version")
        .assert()
        .success()
        .stdout("urlcode 1.0.0\n");
}

#[test]
fn help_shows_examples() {
    urlcode()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Examples:"));
}

#[test]
fn verbose_reports_each_unit_on_stderr() {
    urlcode()
        .arg("--url-encode")
        .arg("-v")
        .write_stdin("a b\nc\n")
        .assert()
        .success()
        .stdout("a%20b\nc\n")
        .stderr(predicate::str::contains("[1/2]"))
        .stderr(predicate::str::contains("[2/2]"));
}

#[test]
fn quiet_by_default() {
    urlcode()
        .arg("--url-encode")
        .write_stdin("a b\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("[1/1]").not());
}

#[test]
fn rust_log_overrides_verbosity() {
    urlcode()
        .arg("--url-encode")
        .env("RUST_LOG", "info")
        .write_stdin("a b\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("[1/1]"));

    urlcode()
        .arg("--url-encode")
        .arg("-v")
        .env("RUST_LOG", "error")
        .write_stdin("a b\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("[1/1]").not());
}
