// tests/common/mod.rs
// Shared test utilities for integration tests
#![allow(dead_code)]

use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::NamedTempFile;

/// Locate the built logsum binary
fn binary_path() -> &'static str {
    if cfg!(debug_assertions) {
        "./target/debug/logsum"
    } else {
        "./target/release/logsum"
    }
}

/// Run logsum against an existing path with the given arguments
pub fn run_logsum(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(binary_path())
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute logsum");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.code().unwrap_or(-1),
    )
}

/// Write content to a temp file with the given suffix and run logsum on it
pub fn run_logsum_with_file_suffix(
    args: &[&str],
    file_content: &str,
    suffix: &str,
) -> (String, String, i32) {
    // Dot-free prefix: the extension check inspects everything after the
    // first dot in the path, so the default ".tmp" prefix would defeat it
    let mut temp_file = tempfile::Builder::new()
        .prefix("logsum_test")
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    temp_file
        .write_all(file_content.as_bytes())
        .expect("Failed to write to temp file");

    let path = temp_file.path().to_str().unwrap().to_string();
    let mut full_args = vec![path.as_str()];
    full_args.extend(args);

    run_logsum(&full_args)
}

/// Write content to a temp .log file and run logsum on it
pub fn run_logsum_with_file(args: &[&str], file_content: &str) -> (String, String, i32) {
    run_logsum_with_file_suffix(args, file_content, ".log")
}

/// Create a temp file that outlives the helper, for tests that need the path
pub fn temp_log_file(content: &str) -> NamedTempFile {
    let mut temp_file = tempfile::Builder::new()
        .prefix("logsum_test")
        .suffix(".log")
        .tempfile()
        .expect("Failed to create temp file");
    temp_file
        .write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    temp_file
}
