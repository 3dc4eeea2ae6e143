//! Configuration loading and path resolution.
//!
//! Supports HOSTSEDIT_CONFIG and HOSTSEDIT_HOSTS_FILE env var overrides for testing.

use std::fs;
use std::net::Ipv4Addr;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::HostsError;
use crate::hosts::BlankLinePolicy;

/// Fully resolved settings handed to the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    pub hosts_file: PathBuf,
    pub default_address: Ipv4Addr,
    pub blank_lines: BlankLinePolicy,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            hosts_file: crate::platform::default_hosts_path(),
            default_address: Ipv4Addr::LOCALHOST,
            blank_lines: BlankLinePolicy::default(),
        }
    }
}

/// On-disk config.toml; every key optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub hosts_file: Option<PathBuf>,
    pub default_address: Option<String>,
    pub blank_lines: Option<BlankLinePolicy>,
}

impl ConfigFile {
    /// Load from `path`; a missing file yields the empty config.
    pub fn load(path: &Path) -> Result<ConfigFile, HostsError> {
        if !path.is_file() {
            return Ok(ConfigFile::default());
        }
        let s = fs::read_to_string(path).map_err(|e| HostsError::from_io(path, e))?;
        toml::from_str(&s).map_err(|e| HostsError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// Path to config.toml (respects HOSTSEDIT_CONFIG).
pub fn config_path() -> Option<PathBuf> {
    if let Some(p) = std::env::var_os("HOSTSEDIT_CONFIG") {
        return Some(PathBuf::from(p));
    }
    directories::ProjectDirs::from("", "", "hostsedit").map(|d| d.config_dir().join("config.toml"))
}

impl EditorConfig {
    /// Config for an explicit hosts file, everything else default.
    pub fn for_file(hosts_file: impl AsRef<Path>) -> Self {
        Self {
            hosts_file: hosts_file.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Defaults, then config.toml, then HOSTSEDIT_HOSTS_FILE.
    pub fn load() -> Result<Self, HostsError> {
        let mut cfg = match config_path() {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        if let Some(p) = std::env::var_os("HOSTSEDIT_HOSTS_FILE") {
            cfg.hosts_file = PathBuf::from(p);
        }
        Ok(cfg)
    }

    /// Defaults overlaid with the config file at `path`.
    pub fn from_file(path: &Path) -> Result<Self, HostsError> {
        let file = ConfigFile::load(path)?;
        let mut cfg = Self::default();
        if let Some(h) = file.hosts_file {
            cfg.hosts_file = h;
        }
        if let Some(a) = file.default_address {
            cfg.default_address = crate::validate::validate_address(&a).map_err(|e| HostsError::Config {
                path: path.to_path_buf(),
                message: format!("default_address: {e}"),
            })?;
        }
        if let Some(b) = file.blank_lines {
            cfg.blank_lines = b;
        }
        tracing::debug!(path = %path.display(), ?cfg, "resolved config");
        Ok(cfg)
    }
}
