//! Shared test helpers.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a temp directory holding scratch hosts/config files.
pub fn temp_dir() -> TempDir {
    tempfile::Builder::new()
        .prefix("hostsedit_test_")
        .tempdir()
        .expect("temp dir")
}

/// Write a hosts file with `content` into `dir` and return its path.
pub fn hosts_file(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("hosts");
    std::fs::write(&path, content).unwrap();
    path
}

/// Run a closure with `key` set to `value`, restoring the previous value afterwards.
pub fn with_env<F, R>(key: &str, value: &Path, f: F) -> R
where
    F: FnOnce() -> R,
{
    let prev = std::env::var_os(key);
    std::env::set_var(key, value);
    let r = f();
    match prev {
        Some(v) => std::env::set_var(key, v),
        None => std::env::remove_var(key),
    }
    r
}
