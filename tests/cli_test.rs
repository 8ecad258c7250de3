use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn strip_gremlins() -> Command {
    Command::new(env!("CARGO_BIN_EXE_strip-gremlins"))
}

fn run_with_stdin(input: &[u8]) -> Output {
    let mut child = strip_gremlins()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(input).unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_stdin_to_stdout() {
    let output = run_with_stdin("a\u{00A0}b\r\nx\u{200B}y\u{FEFF}z".as_bytes());

    assert!(output.status.success());
    assert_eq!(output.stdout, b"a b\r\nxy z");
}

#[test]
fn test_file_cleaned_then_no_change() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("hello.txt");
    fs::write(&file, "hello\u{00A0}world").unwrap();

    let output = strip_gremlins().arg(&file).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, format!("strip-gremlins: cleaned {}\n", file.display()));
    assert_eq!(fs::read_to_string(&file).unwrap(), "hello world");

    let output = strip_gremlins().arg(&file).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, format!("strip-gremlins: no change {}\n", file.display()));
    assert_eq!(fs::read(&file).unwrap(), b"hello world");
}

#[test]
fn test_missing_path_is_skipped_with_exit_zero() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.txt");

    let output = strip_gremlins().arg(&missing).output().unwrap();

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains(&format!(
        "strip-gremlins: skip (not found): {}",
        missing.display()
    )));
}

#[test]
fn test_directory_is_skipped_and_later_files_still_run() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("after.txt");
    fs::write(&file, "tab\tstays\u{2028}").unwrap();

    let output = strip_gremlins()
        .arg(temp_dir.path())
        .arg(&file)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("skip (not a file)"));
    assert_eq!(fs::read_to_string(&file).unwrap(), "tab\tstays");
}

#[test]
fn test_dry_run_leaves_file_alone() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("keep.txt");
    fs::write(&file, "a\u{3000}b").unwrap();

    let output = strip_gremlins().arg("--dry-run").arg(&file).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("strip-gremlins: would clean "));
    assert!(stdout.contains("(1 replaced, 0 removed)"));
    assert_eq!(fs::read_to_string(&file).unwrap(), "a\u{3000}b");
}
