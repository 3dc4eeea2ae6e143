//! Platform abstraction for the hosts file.

#[cfg(unix)]
pub mod unix;

#[cfg(windows)]
pub mod windows;

use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::net::Ipv4Addr;
use std::path::PathBuf;

use crate::config::EditorConfig;
use crate::error::HostsError;
use crate::hosts::{self, AddOutcome, BlankLinePolicy, DeleteOutcome};

#[cfg(unix)]
pub use unix::{default_hosts_path, ELEVATION_HINT, LINE_ENDING};

#[cfg(windows)]
pub use windows::{default_hosts_path, ELEVATION_HINT, LINE_ENDING};

/// Trait for hosts file operations.
pub trait HostsEditor: Send + Sync {
    /// Append `<address>\t\t<hostname>` unless the hostname is already present.
    fn add_entry(&self, hostname: &str, address: Ipv4Addr) -> Result<AddOutcome, HostsError>;
    /// Drop lines whose last token is the hostname.
    fn delete_entry(&self, hostname: &str) -> Result<DeleteOutcome, HostsError>;
    /// Non-comment, non-blank lines.
    fn entries(&self) -> Result<Vec<String>, HostsError>;
}

/// Get the HostsEditor for the resolved configuration.
pub fn default_hosts_editor(config: &EditorConfig) -> Box<dyn HostsEditor> {
    Box::new(FileHostsEditor::from_config(config))
}

/// HostsEditor that reads/writes a file at the given path.
#[derive(Debug, Clone)]
pub struct FileHostsEditor {
    path: PathBuf,
    blank_lines: BlankLinePolicy,
    line_ending: &'static str,
}

impl FileHostsEditor {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            blank_lines: BlankLinePolicy::default(),
            line_ending: LINE_ENDING,
        }
    }

    pub fn from_config(config: &EditorConfig) -> Self {
        Self::new(&config.hosts_file).with_blank_lines(config.blank_lines)
    }

    pub fn with_blank_lines(mut self, policy: BlankLinePolicy) -> Self {
        self.blank_lines = policy;
        self
    }

    pub fn with_line_ending(mut self, line_ending: &'static str) -> Self {
        self.line_ending = line_ending;
        self
    }

    fn io(&self, e: std::io::Error) -> HostsError {
        HostsError::from_io(&self.path, e)
    }

    /// Read whole file under a shared lock.
    fn read(&self) -> Result<Vec<u8>, HostsError> {
        let mut file = File::open(&self.path).map_err(|e| self.io(e))?;
        FileExt::lock_shared(&file).map_err(|e| self.io(e))?;
        let mut buf = Vec::new();
        file.read_to_end(&mut buf).map_err(|e| self.io(e))?;
        Ok(buf)
    }

    /// Open for writing and take an exclusive lock, returning the current content.
    fn open_locked(&self, opts: &mut OpenOptions) -> Result<(File, Vec<u8>), HostsError> {
        let mut file = opts.read(true).open(&self.path).map_err(|e| self.io(e))?;
        FileExt::lock_exclusive(&file).map_err(|e| self.io(e))?;
        let mut buf = Vec::new();
        file.read_to_end(&mut buf).map_err(|e| self.io(e))?;
        Ok((file, buf))
    }
}

impl HostsEditor for FileHostsEditor {
    fn add_entry(&self, hostname: &str, address: Ipv4Addr) -> Result<AddOutcome, HostsError> {
        // Decide on a plain read first so duplicates never need write access.
        if hosts::contains_hostname(&self.read()?, hostname)? {
            tracing::debug!(hostname, path = %self.path.display(), "hostname already present");
            return Ok(AddOutcome::AlreadyExists);
        }

        let (mut file, current) = self.open_locked(OpenOptions::new().append(true))?;
        if hosts::contains_hostname(&current, hostname)? {
            return Ok(AddOutcome::AlreadyExists);
        }
        let text = hosts::entry_text(&current, address, hostname, self.line_ending);
        file.write_all(text.as_bytes()).map_err(|e| self.io(e))?;
        tracing::info!(hostname, %address, path = %self.path.display(), "appended entry");
        Ok(AddOutcome::Added)
    }

    fn delete_entry(&self, hostname: &str) -> Result<DeleteOutcome, HostsError> {
        let content = self.read()?;
        if hosts::remove_hostname(&content, hostname, self.blank_lines, self.line_ending)?.is_none() {
            tracing::debug!(hostname, path = %self.path.display(), "no line ends with hostname");
            return Ok(DeleteOutcome::NotFound);
        }

        let (mut file, current) = self.open_locked(OpenOptions::new().write(true))?;
        let Some((rewritten, lines)) =
            hosts::remove_hostname(&current, hostname, self.blank_lines, self.line_ending)?
        else {
            return Ok(DeleteOutcome::NotFound);
        };
        // In place, so ownership and permissions of the hosts file stay intact.
        file.seek(SeekFrom::Start(0)).map_err(|e| self.io(e))?;
        file.write_all(&rewritten).map_err(|e| self.io(e))?;
        file.set_len(rewritten.len() as u64).map_err(|e| self.io(e))?;
        file.sync_all().map_err(|e| self.io(e))?;
        tracing::info!(hostname, lines, path = %self.path.display(), "rewrote hosts file");
        Ok(DeleteOutcome::Deleted { lines })
    }

    fn entries(&self) -> Result<Vec<String>, HostsError> {
        let content = self.read()?;
        Ok(hosts::entry_lines(&content).map(|l| l.into_owned()).collect())
    }
}
