//! Configuration validation logic.
//!
//! All checks run before any filesystem mutation.

use std::path::Path;

use crate::config::Config;
use crate::error::{Error, Result};

/// Validate the target directory and the entire configuration.
pub fn validate_config(target: &Path, config: &Config) -> Result<()> {
    if !target.is_dir() {
        return Err(Error::NotADirectory(target.to_path_buf()));
    }

    if let Some(roster) = &config.options.roster {
        if !roster.is_file() {
            return Err(Error::FileNotFound(roster.clone()));
        }
    }

    for external in &config.options.external_files {
        if !external.is_file() {
            return Err(Error::FileNotFound(external.clone()));
        }
    }

    validate_extensions(&config.options.shorten_extensions)?;

    for prefix in &config.options.protected_prefixes {
        if prefix.is_empty() {
            return Err(Error::ConfigValidation {
                field: "protected_prefixes".to_string(),
                message: "Protected prefix cannot be empty".to_string(),
            });
        }
    }

    Ok(())
}

/// Validate shorten extensions.
pub fn validate_extensions<S: AsRef<str>, I: IntoIterator<Item = S>>(extensions: I) -> Result<()> {
    for ext in extensions {
        let ext = ext.as_ref();
        if !ext.starts_with('.') || ext.len() < 2 {
            return Err(Error::ConfigValidation {
                field: "shorten_extensions".to_string(),
                message: format!(
                    "Extension '{}' must start with a dot and name at least one character",
                    ext
                ),
            });
        }
    }
    Ok(())
}
