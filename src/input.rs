use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};

/// Check whether the argument names a log file.
///
/// Deliberately replicates the reference tool's literal check: everything
/// after the FIRST dot in the argument must be exactly "log" or "txt".
/// So `app.log` and `notes.txt` qualify, while `app.log.bak` and
/// `archive.tar.log` do not.
pub fn is_log_file(path: &str) -> bool {
    match path.split_once('.') {
        Some((_, ext)) => matches!(ext, "log" | "txt"),
        None => false,
    }
}

/// Open the log file for buffered line-by-line reading.
pub fn open_log_file(path: &str) -> Result<BufReader<File>> {
    let file = File::open(path).with_context(|| format!("failed to open file: {}", path))?;
    Ok(BufReader::new(file))
}
