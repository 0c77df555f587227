//! ZIP archive extraction inside student folders.

use std::collections::HashSet;
use std::fs::{self, File};
use std::path::Path;

use zip::ZipArchive;

use crate::error::Result;
use crate::organize::flatten::unique_destination;

/// Extraction-created directories with these name prefixes are deleted
/// instead of flattened (editor droppings, `__MACOSX` and friends).
const IGNORED_PREFIXES: [&str; 2] = [".", "__"];

/// Extract every ZIP archive in `dir` into `dir`, deleting the archives.
///
/// Directories created by the extraction are flattened into `dir` (ignorable
/// ones are deleted outright), so a student zipping a whole folder ends up
/// with the same layout as one zipping loose files. Returns the number of
/// archives extracted.
pub fn extract_archives(dir: &Path) -> Result<usize> {
    tracing::debug!("Looking for ZIP files in {}", dir.display());

    let mut archives = Vec::new();
    let mut existing_dirs = HashSet::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(_) => continue,
        };
        if entry.file_type()?.is_file() && (name.ends_with(".zip") || name.ends_with(".ZIP")) {
            archives.push(name);
        } else if entry.file_type()?.is_dir() {
            existing_dirs.insert(name);
        }
    }
    archives.sort();

    for archive_name in &archives {
        let path = dir.join(archive_name);
        let mut archive = ZipArchive::new(File::open(&path)?)?;
        archive.extract(dir)?;
        fs::remove_file(&path)?;
        tracing::debug!("Extracted and deleted {}", archive_name);
    }

    // Flatten out whatever directories the extraction introduced.
    let mut created_dirs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        if let Ok(name) = entry.file_name().into_string() {
            if !existing_dirs.contains(&name) {
                created_dirs.push(name);
            }
        }
    }
    created_dirs.sort();

    for created in created_dirs {
        let created_path = dir.join(&created);
        if IGNORED_PREFIXES.iter().any(|p| created.starts_with(p)) {
            fs::remove_dir_all(&created_path)?;
            tracing::debug!("Deleted irrelevant directory {}", created);
            continue;
        }

        let mut names: Vec<String> = Vec::new();
        for entry in fs::read_dir(&created_path)? {
            if let Ok(name) = entry?.file_name().into_string() {
                names.push(name);
            }
        }
        names.sort();
        for name in names {
            let dest = unique_destination(dir, &name);
            fs::rename(created_path.join(&name), &dest)?;
            tracing::debug!("Moved {}/{} up to {}", created, name, dest.display());
        }
        fs::remove_dir(&created_path)?;
        tracing::debug!("Removed directory {}", created);
    }

    Ok(archives.len())
}
