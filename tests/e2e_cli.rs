//! End-to-end tests of the `image-manifest` binary: exit status and error output.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn run_binary(dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_image-manifest"))
        .arg(dir)
        .arg("--quiet")
        .output()
        .expect("Failed to execute image-manifest")
}

#[test]
fn test_success_exits_zero_and_writes_manifest() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("a.PNG"), b"").unwrap();
    fs::write(tmp.path().join("notes.txt"), b"").unwrap();

    let output = run_binary(tmp.path());

    assert!(
        output.status.success(),
        "Expected success, got: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        fs::read_to_string(tmp.path().join("images.txt")).unwrap(),
        "a.PNG\n"
    );
}

#[test]
fn test_missing_directory_exits_nonzero_with_path() {
    let tmp = tempdir().unwrap();
    let missing = tmp.path().join("nope");

    let output = run_binary(&missing);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr.contains(&format!("directory not found: {}", missing.display())),
        "Unexpected stderr: {}",
        stderr
    );
    assert!(!missing.exists());
    assert!(!tmp.path().join("images.txt").exists());
}

#[test]
fn test_manifest_path_taken_by_directory_exits_nonzero() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("a.png"), b"").unwrap();
    fs::create_dir(tmp.path().join("images.txt")).unwrap();

    let output = run_binary(tmp.path());
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr.starts_with("error: ") && stderr.contains("images.txt"),
        "Unexpected stderr: {}",
        stderr
    );
    assert!(tmp.path().join("images.txt").is_dir());
}
