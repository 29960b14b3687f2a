use serde::{Deserialize, Serialize};

use crate::outcome::{FileOutcome, FileStatus, Finding, Repair};

/// Aggregate counters for a validation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationStats {
    /// Instance files visited
    pub total_files: usize,

    /// Files declaring more points than they list distinctly
    pub files_with_duplicates: usize,

    /// Files listing more distinct points than they declare
    pub files_with_count_mismatch: usize,

    /// Files rewritten in modify mode
    pub files_fixed: usize,

    /// Unreadable or malformed files, failed rewrites, unreadable folders
    pub errors: usize,
}

impl ValidationStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: &FileOutcome) {
        self.total_files += 1;
        match &outcome.status {
            FileStatus::Valid => {}
            FileStatus::Failed(_) => self.errors += 1,
            FileStatus::Flagged { finding, repair } => {
                match finding {
                    Finding::Duplicates { .. } => self.files_with_duplicates += 1,
                    Finding::CountMismatch { .. } => self.files_with_count_mismatch += 1,
                }
                match repair {
                    Repair::NotRequested => {}
                    Repair::Rewritten { .. } => self.files_fixed += 1,
                    Repair::Failed(_) => self.errors += 1,
                }
            }
        }
    }

    pub fn add_error(&mut self) {
        self.errors += 1;
    }

    pub fn merge(&mut self, other: &ValidationStats) {
        self.total_files += other.total_files;
        self.files_with_duplicates += other.files_with_duplicates;
        self.files_with_count_mismatch += other.files_with_count_mismatch;
        self.files_fixed += other.files_fixed;
        self.errors += other.errors;
    }

    /// Files with any finding, fixed or not.
    pub fn flagged_files(&self) -> usize {
        self.files_with_duplicates + self.files_with_count_mismatch
    }

    pub fn is_clean(&self) -> bool {
        self.flagged_files() == 0 && self.errors == 0
    }
}
