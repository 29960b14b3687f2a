use globset::{GlobBuilder, GlobMatcher};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Result, ValidatorError};

/// Finds instance files laid out as `root/<instance_type>/<objectives>/<file>`.
///
/// Only those two directory levels are visited. Files outside objective
/// folders and anything nested deeper are ignored.
pub struct InstanceScanner {
    root: PathBuf,
    matcher: GlobMatcher,
}

impl InstanceScanner {
    pub fn new(root: impl AsRef<Path>, pattern: &str) -> Result<Self> {
        let matcher = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|source| ValidatorError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?
            .compile_matcher();
        Ok(Self {
            root: root.as_ref().to_path_buf(),
            matcher,
        })
    }

    /// Instance type folders directly under the root.
    pub fn instance_types(&self) -> Result<Vec<PathBuf>> {
        Self::child_dirs(&self.root)
    }

    /// Objective count folders directly under an instance type folder.
    pub fn objective_folders(&self, instance_type: &Path) -> Result<Vec<PathBuf>> {
        Self::child_dirs(instance_type)
    }

    /// Files in an objective folder whose name matches the pattern.
    pub fn instance_files(&self, folder: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in Self::children(folder) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            if self.matcher.is_match(entry.file_name()) {
                files.push(entry.into_path());
            } else {
                log::trace!("Skipping non-instance file {}", entry.path().display());
            }
        }
        Ok(files)
    }

    fn child_dirs(dir: &Path) -> Result<Vec<PathBuf>> {
        let mut dirs = Vec::new();
        for entry in Self::children(dir) {
            let entry = entry?;
            if entry.file_type().is_dir() {
                dirs.push(entry.into_path());
            }
        }
        Ok(dirs)
    }

    fn children(dir: &Path) -> walkdir::IntoIter {
        WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
    }
}

/// Last path component for progress output.
pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
