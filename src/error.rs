//! Error kinds surfaced by the editor.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostsError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("insufficient permissions to edit {}. {}", .path.display(), crate::platform::ELEVATION_HINT)]
    PermissionDenied { path: PathBuf },

    #[error("could not access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

impl HostsError {
    /// Classify an I/O failure on `path`.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::PermissionDenied {
            HostsError::PermissionDenied { path }
        } else {
            HostsError::Io { path, source }
        }
    }

    /// Process exit code for this error (sysexits where one fits).
    pub fn exit_code(&self) -> i32 {
        match self {
            HostsError::InvalidArgument(_) => 2,
            HostsError::Io { .. } => 74,
            HostsError::PermissionDenied { .. } => 77,
            HostsError::Config { .. } => 78,
        }
    }
}
