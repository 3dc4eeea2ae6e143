//! Windows hosts file location and conventions.

use std::path::PathBuf;

pub const LINE_ENDING: &str = "\r\n";

pub const ELEVATION_HINT: &str =
    "Try running in a console window with administrator permissions.";

/// `%SystemRoot%\System32\drivers\etc\hosts`, falling back to `C:\Windows`.
pub fn default_hosts_path() -> PathBuf {
    let root = std::env::var_os("SystemRoot")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(r"C:\Windows"));
    root.join("System32").join("drivers").join("etc").join("hosts")
}
