use std::io::Write;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn wordfreq(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_wordfreq"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn stdin_report_exits_zero() {
    let output = wordfreq(&[], "The quick brown fox. The QUICK fox!\n");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "   2 fox\n   2 quick\n   2 the\n   1 brown\n"
    );
}

#[test]
fn empty_stdin_prints_nothing_and_exits_zero() {
    let output = wordfreq(&[], "");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_file_exits_non_zero_without_output() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("missing.txt");
    let output = wordfreq(&[missing.to_str().unwrap()], "");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing.txt"), "stderr: {stderr}");
}
