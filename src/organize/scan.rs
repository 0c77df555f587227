//! Scanning and classifying submission folders.

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::error::Result;
use crate::naming::{self, identifier::SEP, AssignmentTable, Resolution};
use crate::roster::Roster;

/// A folder matched to a student, with the name it should end up under.
#[derive(Debug, Clone)]
pub struct PlannedFolder {
    /// Current directory name on disk.
    pub original: String,
    /// Canonical identifier the directory is (or will be) named.
    pub target: String,
    pub resolution: Resolution,
}

impl PlannedFolder {
    pub fn needs_rename(&self) -> bool {
        self.original != self.target
    }
}

/// Scan the target directory and resolve every submission folder.
///
/// Fresh Moodle download folders are matched by pattern and resolved from
/// their name tokens; folders already in canonical form are parsed directly.
/// Unrelated entries are skipped. Every matched folder is entered into the
/// assignment table, so a resolution failure anywhere aborts the scan before
/// any rename happens.
pub fn scan_folders(
    target: &Path,
    roster: Option<&Roster>,
    table: &mut AssignmentTable,
) -> Result<Vec<PlannedFolder>> {
    let moodle_pattern = Regex::new(r"^\S* .*_\d*_assignsubmission_file_$").unwrap();

    let mut names: Vec<String> = Vec::new();
    for entry in fs::read_dir(target)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(name) => tracing::warn!("Skipping non-UTF-8 directory name: {:?}", name),
        }
    }
    // Scan order assigns occurrence numbers to duplicate names; sort so the
    // order does not depend on the filesystem.
    names.sort();

    let mut plan = Vec::new();
    for name in names {
        if moodle_pattern.is_match(&name) {
            tracing::debug!("Found yet to be processed folder {}", name);
            let head = &name[..name.find(SEP).unwrap_or(name.len())];
            let tokens: Vec<&str> = head.split_whitespace().collect();
            let resolution = naming::resolve_submission(&tokens, &name, roster, table)?;
            let target_name = resolution.identifier();
            table.assign(&resolution, &target_name)?;
            plan.push(PlannedFolder {
                original: name,
                target: target_name,
                resolution,
            });
        } else if let Some(parsed) = naming::parse(&name) {
            tracing::debug!("Found already renamed folder {}", name);
            let resolution = naming::resolve_canonical(&parsed, &name, roster)?;
            table.assign(&resolution, &name)?;
            plan.push(PlannedFolder {
                original: name.clone(),
                target: name,
                resolution,
            });
        } else {
            tracing::debug!("Ignoring unrelated entry {}", name);
        }
    }

    Ok(plan)
}
