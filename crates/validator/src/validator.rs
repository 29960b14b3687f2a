use std::io::Write;
use std::path::Path;
use std::time::Instant;

use crate::config::ValidateOptions;
use crate::error::{Result, ValidatorError};
use crate::outcome::check_file;
use crate::report::write_outcome;
use crate::scanner::{display_name, InstanceScanner};
use crate::stats::ValidationStats;

/// Walks an instance corpus, reporting and optionally repairing each file
pub struct Validator {
    options: ValidateOptions,
}

impl Validator {
    pub fn new(options: ValidateOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ValidateOptions {
        &self.options
    }

    /// Validate every instance file under `root`, writing diagnostics to `out`.
    ///
    /// Only a missing or unusable root aborts the run. Per-file and
    /// per-folder failures are printed, counted and skipped.
    pub fn run<W: Write>(&self, root: impl AsRef<Path>, out: &mut W) -> Result<ValidationStats> {
        let root = root.as_ref();
        if !root.exists() {
            return Err(ValidatorError::MissingDirectory(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(ValidatorError::NotADirectory(root.to_path_buf()));
        }

        let started = Instant::now();
        let scanner = InstanceScanner::new(root, &self.options.pattern)?;
        let verbose = self.options.verbose;
        let mut stats = ValidationStats::new();

        let instance_types = scanner.instance_types()?;
        if verbose {
            writeln!(out, "Found instance types: {:?}", names(&instance_types))?;
        }

        for instance_type in &instance_types {
            let folders = match scanner.objective_folders(instance_type) {
                Ok(folders) => folders,
                Err(err) => {
                    log::warn!("Cannot list {}: {err}", instance_type.display());
                    writeln!(out, "Error processing {}: {err}", instance_type.display())?;
                    stats.add_error();
                    continue;
                }
            };
            if verbose {
                writeln!(
                    out,
                    "\nProcessing '{}' with folders: {:?}",
                    display_name(instance_type),
                    names(&folders)
                )?;
            }

            for folder in &folders {
                stats.merge(&self.validate_folder(&scanner, folder, out)?);
            }
        }

        log::info!(
            "Checked {} instance files in {} ms ({} flagged, {} fixed, {} errors)",
            stats.total_files,
            started.elapsed().as_millis(),
            stats.flagged_files(),
            stats.files_fixed,
            stats.errors
        );
        Ok(stats)
    }

    fn validate_folder<W: Write>(
        &self,
        scanner: &InstanceScanner,
        folder: &Path,
        out: &mut W,
    ) -> Result<ValidationStats> {
        let mut stats = ValidationStats::new();
        let files = match scanner.instance_files(folder) {
            Ok(files) => files,
            Err(err) => {
                log::warn!("Cannot list {}: {err}", folder.display());
                writeln!(out, "Error processing {}: {err}", folder.display())?;
                stats.add_error();
                return Ok(stats);
            }
        };

        for path in &files {
            log::debug!("Checking {}", path.display());
            let outcome = check_file(path, self.options.modify);
            write_outcome(out, &outcome)?;
            stats.record(&outcome);
        }

        if self.options.verbose {
            writeln!(
                out,
                "  Validated {} instances in {}",
                files.len(),
                display_name(folder)
            )?;
        }
        Ok(stats)
    }
}

fn names(paths: &[std::path::PathBuf]) -> Vec<String> {
    paths.iter().map(|p| display_name(p)).collect()
}
