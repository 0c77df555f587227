//! Folder and file orchestration.
//!
//! Provides:
//! - Scanning and classifying submission folders
//! - ZIP archive extraction
//! - The rename / flatten / copy-in passes

pub mod extract;
pub mod flatten;
pub mod runner;
pub mod scan;

pub use extract::extract_archives;
pub use flatten::flatten_folders;
pub use runner::{run, run_with_roster, Summary};
pub use scan::{scan_folders, PlannedFolder};
