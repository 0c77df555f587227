//! Error types for the moodle-organizer application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    // Roster errors
    #[error("Invalid roster line: {0}")]
    RosterParse(String),

    // Resolution errors
    #[error("Folder '{0}' has no corresponding student")]
    NoMatchingStudent(String),

    #[error(
        "Duplicate submission: '{student}' already owns folder '{assigned}', cannot also take '{folder}'"
    )]
    DuplicateSubmission {
        student: String,
        assigned: String,
        folder: String,
    },

    // Archive errors
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Config file parse errors
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes reported to the shell.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const CONFIG_ERROR: i32 = 1;
    pub const ROSTER_ERROR: i32 = 2;
    pub const RESOLUTION_ERROR: i32 = 3;
    pub const FILESYSTEM_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
}
