//! Moodle Organizer - rename and reorganize assignment submission folders
//!
//! A Moodle bulk download names each student's folder
//! `<Full Name>_<id>_assignsubmission_file_`. This library matches those
//! folders to a roster of known students, renames them to canonical
//! `Last__First` identifiers, and optionally extracts archives, flattens the
//! folders into one directory, and shortens submitted file names to minimal
//! unique stems.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use moodle_organizer::{config::Config, organize};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = Config::default();
//!     config.options.roster = Some("students.txt".into());
//!     let summary = organize::run(Path::new("submissions"), &config)?;
//!     println!("renamed {} folders", summary.folders_renamed);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod naming;
pub mod organize;
pub mod output;
pub mod roster;

// Re-exports for convenience
pub use config::Config;
pub use error::{Error, Result};
pub use naming::{AssignmentTable, Resolution};
pub use organize::Summary;
pub use roster::{Roster, Student};
