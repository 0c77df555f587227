//! Flattening student folders into the target directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::naming::compute_short_stems;
use crate::naming::identifier::SEP;
use crate::organize::scan::PlannedFolder;

/// Move every file out of each student folder into the target directory,
/// then remove the emptied folders. Returns the number of entries moved.
///
/// Files keep their name prefixed with the folder identifier, except files
/// matching a shorten extension (and no protected prefix), which are renamed
/// to the batch-unique short stem plus the extension.
pub fn flatten_folders(target: &Path, plan: &[PlannedFolder], config: &Config) -> Result<usize> {
    let identifiers: Vec<String> = plan.iter().map(|p| p.target.clone()).collect();
    let stems = compute_short_stems(&identifiers);

    let mut moved = 0;
    for folder in plan {
        let folder_path = target.join(&folder.target);

        let mut names: Vec<String> = Vec::new();
        for entry in fs::read_dir(&folder_path)? {
            let entry = entry?;
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(name) => {
                    tracing::warn!("Skipping non-UTF-8 file name: {:?}", name);
                }
            }
        }
        names.sort();

        for name in names {
            let new_name = flattened_name(&folder.target, &name, config, &stems);
            let dest = unique_destination(target, &new_name);
            fs::rename(folder_path.join(&name), &dest)?;
            tracing::debug!("Moved {}/{} to {}", folder.target, name, dest.display());
            moved += 1;
        }

        fs::remove_dir(&folder_path)?;
        tracing::debug!("Removed directory {}", folder.target);
    }

    Ok(moved)
}

/// Pick the flattened name for one file out of a student folder.
fn flattened_name(
    identifier: &str,
    file_name: &str,
    config: &Config,
    stems: &std::collections::HashMap<String, String>,
) -> String {
    for ext in &config.options.shorten_extensions {
        if !file_name.ends_with(ext.as_str()) {
            continue;
        }
        let protected = config
            .options
            .protected_prefixes
            .iter()
            .any(|prefix| file_name.starts_with(prefix.as_str()));
        if protected {
            tracing::debug!("File {} has a protected prefix, not shortening", file_name);
            break;
        }
        if let Some(stem) = stems.get(identifier) {
            return format!("{}{}", stem, ext);
        }
        break;
    }
    format!("{}{}{}", identifier, SEP, file_name)
}

/// Find a free name in `dir` for `name`, inserting `_N` before the final dot
/// (or at the end) until nothing is in the way. Dotfiles are left alone.
pub(crate) fn unique_destination(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    if !path.exists() {
        return path;
    }

    let dot = match name.rfind('.') {
        Some(0) => return path, // dotfile, no stem to number
        Some(i) => i,
        None => name.len(),
    };

    let mut counter = 0;
    loop {
        let candidate = format!("{}{}{}{}", &name[..dot], SEP, counter, &name[dot..]);
        let candidate_path = dir.join(&candidate);
        if !candidate_path.exists() {
            tracing::debug!("Name {} taken, using {} instead", name, candidate);
            return candidate_path;
        }
        counter += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::AssignmentTable;
    use crate::organize::scan::scan_folders;
    use crate::roster::parse_roster;

    fn student_folder(root: &Path, name: &str, files: &[(&str, &str)]) {
        let dir = root.join(name);
        fs::create_dir(&dir).unwrap();
        for (file, content) in files {
            fs::write(dir.join(file), content).unwrap();
        }
    }

    fn plan_for(root: &Path, roster_text: &str) -> Vec<PlannedFolder> {
        let roster = parse_roster(roster_text).unwrap();
        let mut table = AssignmentTable::default();
        scan_folders(root, Some(&roster), &mut table).unwrap()
    }

    #[test]
    fn test_flatten_prefixes_identifier() {
        let dir = tempfile::tempdir().unwrap();
        student_folder(dir.path(), "Smith__Alice", &[("essay.pdf", "x")]);
        let plan = plan_for(dir.path(), "Alice Smith\n");

        let moved = flatten_folders(dir.path(), &plan, &Config::default()).unwrap();
        assert_eq!(moved, 1);
        assert!(dir.path().join("Smith__Alice_essay.pdf").is_file());
        assert!(!dir.path().join("Smith__Alice").exists());
    }

    #[test]
    fn test_flatten_shortens_matching_extension() {
        let dir = tempfile::tempdir().unwrap();
        student_folder(dir.path(), "Smith__Bob", &[("hw3.py", "x"), ("notes.txt", "y")]);
        student_folder(dir.path(), "Smithson__Carl", &[("hw3.py", "x")]);
        let plan = plan_for(dir.path(), "Bob Smith\nCarl Smithson\n");

        let mut config = Config::default();
        config.options.shorten_extensions = vec![".py".to_string()];
        flatten_folders(dir.path(), &plan, &config).unwrap();

        assert!(dir.path().join("Smith.py").is_file());
        assert!(dir.path().join("Smithson.py").is_file());
        assert!(dir.path().join("Smith__Bob_notes.txt").is_file());
    }

    #[test]
    fn test_flatten_respects_protected_prefix() {
        let dir = tempfile::tempdir().unwrap();
        student_folder(dir.path(), "Smith__Alice", &[("test_hw3.py", "x")]);
        let plan = plan_for(dir.path(), "Alice Smith\n");

        let mut config = Config::default();
        config.options.shorten_extensions = vec![".py".to_string()];
        config.options.protected_prefixes = vec!["test_".to_string()];
        flatten_folders(dir.path(), &plan, &config).unwrap();

        assert!(dir.path().join("Smith__Alice_test_hw3.py").is_file());
    }

    #[test]
    fn test_flatten_duplicate_students_stay_distinct() {
        let dir = tempfile::tempdir().unwrap();
        student_folder(dir.path(), "Evans__Bob", &[("hw.py", "first")]);
        student_folder(dir.path(), "Evans__Bob1", &[("hw.py", "second")]);
        let plan = plan_for(dir.path(), "Bob Evans\nBob Evans\n");

        let mut config = Config::default();
        config.options.shorten_extensions = vec![".py".to_string()];
        flatten_folders(dir.path(), &plan, &config).unwrap();

        assert_eq!(fs::read_to_string(dir.path().join("Evans.py")).unwrap(), "first");
        assert_eq!(fs::read_to_string(dir.path().join("Evans1.py")).unwrap(), "second");
    }

    #[test]
    fn test_unique_destination_numbers_collisions() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "x").unwrap();
        fs::write(dir.path().join("a_0.txt"), "x").unwrap();
        let dest = unique_destination(dir.path(), "a.txt");
        assert_eq!(dest, dir.path().join("a_1.txt"));

        let free = unique_destination(dir.path(), "b.txt");
        assert_eq!(free, dir.path().join("b.txt"));
    }

    #[test]
    fn test_unique_destination_without_extension() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("README"), "x").unwrap();
        let dest = unique_destination(dir.path(), "README");
        assert_eq!(dest, dir.path().join("README_0"));
    }
}
