//! Configuration structures and loading logic.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub options: OptionsConfig,
}

/// Organizer options configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Whether to extract ZIP archives found in student folders.
    #[serde(default)]
    pub extract_archives: bool,

    /// Path to the roster file listing known students.
    #[serde(default)]
    pub roster: Option<PathBuf>,

    /// Whether to flatten student folders into the target directory.
    #[serde(default)]
    pub flatten: bool,

    /// External files to copy into the target directory.
    #[serde(default)]
    pub external_files: Vec<PathBuf>,

    /// Filename extensions whose files get shortened stems during flatten.
    #[serde(default)]
    pub shorten_extensions: Vec<String>,

    /// Filename prefixes exempt from shortening.
    #[serde(default)]
    pub protected_prefixes: Vec<String>,

    /// Whether to narrate every step.
    #[serde(default)]
    pub verbose: bool,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
