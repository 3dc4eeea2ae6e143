//! Unix (macOS, Linux) hosts file location and conventions.

use std::path::PathBuf;

pub const LINE_ENDING: &str = "\n";

pub const ELEVATION_HINT: &str = "Try running the command again with sudo.";

pub fn default_hosts_path() -> PathBuf {
    PathBuf::from("/etc/hosts")
}
