use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use tempfile::{tempdir, TempDir};

const TRIANGLE: &str = "3 3\n0 1 5\n1 2 3\n0 2 10\n";

// Runs one of the crate's binaries with `stdin` piped in
fn run_with_stdin(program: &str, args: &[&str], stdin: &str, rust_log: Option<&str>) -> Output {
    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    match rust_log {
        Some(level) => command.env("RUST_LOG", level),
        None => command.env_remove("RUST_LOG"),
    };

    let mut child = command.spawn().unwrap();
    if let Some(mut pipe) = child.stdin.take() {
        // Usage errors exit before reading stdin
        let _ = pipe.write_all(stdin.as_bytes());
    }
    child.wait_with_output().unwrap()
}

fn write_tables(expected: &str, actual: &str) -> (TempDir, PathBuf, PathBuf) {
    let dir = tempdir().unwrap();
    let expected_path = dir.path().join("expected.txt");
    let actual_path = dir.path().join("actual.txt");
    fs::write(&expected_path, expected).unwrap();
    fs::write(&actual_path, actual).unwrap();
    (dir, expected_path, actual_path)
}

fn compare(expected: &str, actual: &str) -> Output {
    let (_dir, expected_path, actual_path) = write_tables(expected, actual);
    Command::new(env!("CARGO_BIN_EXE_compare_output"))
        .arg(&expected_path)
        .arg(&actual_path)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn text(bytes: &[u8]) -> String {
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[test]
fn all_pairs_binary_keeps_logs_off_stdout() {
    let output = run_with_stdin(env!("CARGO_BIN_EXE_all_pairs"), &[], TRIANGLE, Some("debug"));
    assert!(output.status.success());
    assert_eq!(
        text(&output.stdout),
        "0 -> 0: 0\n0 -> 1: 5\n0 -> 2: 8\n\
         1 -> 0: 2139062143\n1 -> 1: 0\n1 -> 2: 3\n\
         2 -> 0: 2139062143\n2 -> 1: 2139062143\n2 -> 2: 0\n"
    );
    assert!(text(&output.stderr).contains("parsed graph with 3 vertices"));
}

#[test]
fn single_source_binary_prints_one_line_per_vertex() {
    let output = run_with_stdin(env!("CARGO_BIN_EXE_single_source"), &[], TRIANGLE, None);
    assert!(output.status.success());
    assert_eq!(text(&output.stdout), "0: 0\n1: 5\n2: 8\n");
}

#[test]
fn oracle_binaries_fail_on_malformed_input() {
    for program in [
        env!("CARGO_BIN_EXE_all_pairs"),
        env!("CARGO_BIN_EXE_single_source"),
    ] {
        let output = run_with_stdin(program, &[], "3 2\n0 1 5\n1", None);
        assert_eq!(output.status.code(), Some(1));
        assert!(output.stdout.is_empty());
        assert!(text(&output.stderr).contains("Unexpected end of input"));

        let output = run_with_stdin(program, &[], "2 1\n0 1 -3\n", None);
        assert_eq!(output.status.code(), Some(1));
        assert!(text(&output.stderr).contains("Negative edge weight"));
    }
}

#[test]
fn compare_output_exits_zero_on_match() {
    let table = "0: 0\n1: 5\n2: 8\n";
    let output = compare(table, table);
    assert_eq!(output.status.code(), Some(0));
    assert!(text(&output.stdout).contains("all 3 records match"));
    assert!(output.stderr.is_empty());
}

#[test]
fn compare_output_caps_reported_mismatches() {
    let expected: String = (0..12).map(|i| format!("{}: {}\n", i, i)).collect();
    let actual: String = (0..12).map(|i| format!("{}: {}\n", i, i + 1)).collect();
    let output = compare(&expected, &actual);

    assert_eq!(output.status.code(), Some(1));
    assert!(text(&output.stdout).contains("mismatches = 12 / 12"));
    let reported = text(&output.stderr)
        .lines()
        .filter(|line| line.starts_with("[mismatch]"))
        .count();
    assert_eq!(reported, 10);
}

#[test]
fn compare_output_fails_on_length_mismatch() {
    let output = compare("0: 0\n1: 5\n", "0: 0\n");
    assert_eq!(output.status.code(), Some(1));
    assert!(text(&output.stderr).contains("Line count mismatch"));
}

#[test]
fn compare_output_prints_usage_on_wrong_arguments() {
    let output = Command::new(env!("CARGO_BIN_EXE_compare_output"))
        .arg("only-one")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(text(&output.stderr).contains("usage:"));
}

#[test]
fn paths_within_binary_lists_bounded_paths() {
    let output = run_with_stdin(
        env!("CARGO_BIN_EXE_paths_within"),
        &["0", "2", "10"],
        TRIANGLE,
        None,
    );
    assert!(output.status.success());
    assert_eq!(text(&output.stdout), "0 -> 1 -> 2\n0 -> 2\n");

    let output = run_with_stdin(env!("CARGO_BIN_EXE_paths_within"), &["0"], TRIANGLE, None);
    assert_eq!(output.status.code(), Some(2));
}
