//! Pass orchestration over one target directory.
//!
//! Strictly sequential: resolve everything first, then extract, then rename,
//! then flatten, then copy in external files. A resolution failure aborts
//! before the first rename, so a bad folder never leaves the scan's batch
//! half-renamed.

use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::naming::AssignmentTable;
use crate::organize::extract::extract_archives;
use crate::organize::flatten::flatten_folders;
use crate::organize::scan::scan_folders;
use crate::roster::{load_roster, Roster};

/// Counters for the run summary.
#[derive(Debug, Default)]
pub struct Summary {
    pub folders_matched: usize,
    pub folders_renamed: usize,
    pub archives_extracted: usize,
    pub files_moved: usize,
    pub externals_copied: usize,
}

/// Run all configured passes over the target directory.
pub fn run(target: &Path, config: &Config) -> Result<Summary> {
    let roster = match &config.options.roster {
        Some(path) => {
            let roster = load_roster(path)?;
            tracing::info!("Loaded {} students from {}", roster.len(), path.display());
            Some(roster)
        }
        None => None,
    };

    run_with_roster(target, config, roster.as_ref())
}

/// Run the passes against an already-loaded roster.
pub fn run_with_roster(
    target: &Path,
    config: &Config,
    roster: Option<&Roster>,
) -> Result<Summary> {
    let mut table = AssignmentTable::default();

    tracing::debug!("Scanning for Moodle download folders");
    let plan = scan_folders(target, roster, &mut table)?;
    let mut summary = Summary {
        folders_matched: plan.len(),
        ..Default::default()
    };

    if config.options.extract_archives {
        for folder in &plan {
            summary.archives_extracted += extract_archives(&target.join(&folder.original))?;
        }
    }

    // Every folder in the batch resolved; renaming is safe now.
    tracing::debug!("Renaming folders");
    for folder in plan.iter().filter(|p| p.needs_rename()) {
        fs::rename(target.join(&folder.original), target.join(&folder.target))?;
        tracing::debug!("Renamed {} to {}", folder.original, folder.target);
        summary.folders_renamed += 1;
    }

    if config.options.flatten {
        tracing::debug!("Flattening");
        summary.files_moved = flatten_folders(target, &plan, config)?;
    }

    for external in &config.options.external_files {
        let name = external.file_name().ok_or_else(|| {
            Error::Config(format!(
                "External file has no file name: {}",
                external.display()
            ))
        })?;
        fs::copy(external, target.join(name))?;
        tracing::debug!("Copied in file {}", external.display());
        summary.externals_copied += 1;
    }

    Ok(summary)
}
