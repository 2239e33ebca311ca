//! User configuration
//!
//! Read from `config.yaml` in the platform config directory
//! (e.g. `~/.config/gitbrama/config.yaml` on Linux). Every field is
//! optional; a missing file means defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;

use crate::selection::DEFAULT_TITLE;

const CONFIG_FILE: &str = "config.yaml";

/// Branch ordering in the list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sort {
    /// Order reported by git
    #[default]
    None,
    /// Alphabetical
    Name,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Branches that are never offered for deletion
    pub protected_branches: Vec<String>,
    pub sort: Sort,
    /// Header text above the list
    pub title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            protected_branches: Vec::new(),
            sort: Sort::None,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl Config {
    /// Load from an explicit path, or from the default location
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match default_path() {
                Some(path) => Self::from_file(&path),
                None => Ok(Self::default()),
            },
        }
    }

    /// Parse a config file; a missing file yields the defaults
    fn from_file(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read config file {}", path.display()));
            }
        };

        Self::parse(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    fn parse(contents: &str) -> Result<Self> {
        // An empty YAML document deserializes to unit, not a map
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "gitbrama")
}

/// Default config file location
pub fn default_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// Directory for the log file
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_local_dir().to_path_buf())
}
