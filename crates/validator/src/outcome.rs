use mobkp_instance::{parse_instance_file, write_instance, Instance, InstanceError, Point};
use std::path::{Path, PathBuf};

/// Inconsistency between the declared point count and the distinct points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// `declared - unique` repeated occurrences; `duplicates` lists each
    /// repeated point once, by second occurrence.
    Duplicates {
        excess: usize,
        duplicates: Vec<Point>,
    },

    /// More distinct points than declared.
    CountMismatch { declared: usize, unique: usize },
}

impl Finding {
    pub fn classify(instance: &Instance) -> Option<Finding> {
        if instance.is_consistent() {
            return None;
        }
        let declared = instance.declared_point_count;
        let unique = instance.unique_point_count();
        if declared > unique {
            Some(Finding::Duplicates {
                excess: declared - unique,
                duplicates: instance.duplicate_points(),
            })
        } else {
            Some(Finding::CountMismatch { declared, unique })
        }
    }
}

#[derive(Debug)]
pub enum Repair {
    NotRequested,
    Rewritten { points: usize },
    Failed(InstanceError),
}

#[derive(Debug)]
pub enum FileStatus {
    Valid,
    Flagged { finding: Finding, repair: Repair },
    Failed(InstanceError),
}

/// Result of checking a single instance file
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub status: FileStatus,
}

/// Parse one file, classify it and rewrite it when `modify` is set.
///
/// Every failure is captured in the returned outcome so one bad file never
/// stops the caller's scan.
pub fn check_file(path: &Path, modify: bool) -> FileOutcome {
    let status = match parse_instance_file(path) {
        Err(err) => {
            if err.is_format_error() {
                log::debug!("Failed to parse {}: {err}", path.display());
            } else {
                log::warn!("Cannot read {}: {err}", path.display());
            }
            FileStatus::Failed(err)
        }
        Ok(instance) => match Finding::classify(&instance) {
            None => FileStatus::Valid,
            Some(finding) => {
                let repair = if modify {
                    match write_instance(path, &instance) {
                        Ok(points) => Repair::Rewritten { points },
                        Err(err) => {
                            log::warn!("Failed to rewrite {}: {err}", path.display());
                            Repair::Failed(err)
                        }
                    }
                } else {
                    Repair::NotRequested
                };
                FileStatus::Flagged { finding, repair }
            }
        },
    };

    FileOutcome {
        path: path.to_path_buf(),
        status,
    }
}
