/// File handling utilities
///
/// This module finds the source files a run should scan.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;
use walkdir::WalkDir;

use crate::config::ScanConfig;

/// List the source files directly inside a directory.
///
/// Only the top level of `dir` is read. Entries are returned in the order
/// the directory listing yields them, without sorting.
///
/// # Arguments
///
/// * `dir` - Directory to list
/// * `config` - Supplies the file suffix and the name to skip
///
/// # Returns
///
/// Paths of the files to scan
pub fn source_files(dir: &Path, config: &ScanConfig) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.with_context(|| format!("Failed to list directory: {}", dir.display()))?;

        let file_name = entry.file_name();
        if !file_name.to_string_lossy().ends_with(config.extension.as_str()) {
            continue;
        }

        if config.skip_name.as_deref() == Some(file_name) {
            debug!("Skipping own file {}", entry.path().display());
            continue;
        }

        // a directory can't be read line by line; it is left out instead of
        // failing the run
        if entry.file_type().is_dir() {
            debug!("Skipping directory {}", entry.path().display());
            continue;
        }

        files.push(entry.into_path());
    }

    Ok(files)
}

/// Display name of a scanned file, used in header records
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn names(files: &[PathBuf]) -> Vec<String> {
        let mut names: Vec<_> = files.iter().map(|p| display_name(p)).collect();
        names.sort();
        names
    }

    #[test]
    fn test_lists_only_matching_top_level_files() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::write(dir.path().join("a.py"), "").unwrap();
        fs::write(dir.path().join("b.py"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::write(dir.path().join("a.pyc"), "").unwrap();
        fs::create_dir(dir.path().join("pkg")).unwrap();
        fs::write(dir.path().join("pkg").join("nested.py"), "").unwrap();
        fs::create_dir(dir.path().join("odd.py")).unwrap();

        let files = source_files(dir.path(), &ScanConfig::default()).unwrap();
        assert_eq!(names(&files), vec!["a.py", "b.py"]);
    }

    #[test]
    fn test_skips_own_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::write(dir.path().join("lines.py"), "def x():\n").unwrap();
        fs::write(dir.path().join("other.py"), "").unwrap();

        let config = ScanConfig::default().with_skip_name("lines.py");
        let files = source_files(dir.path(), &config).unwrap();
        assert_eq!(names(&files), vec!["other.py"]);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let missing = dir.path().join("gone");
        assert!(source_files(&missing, &ScanConfig::default()).is_err());
    }
}
