use std::io::{self, Write};

use crate::config::DUPLICATE_PREVIEW_LIMIT;
use crate::outcome::{FileOutcome, FileStatus, Finding, Repair};
use crate::stats::ValidationStats;

const RULE_WIDTH: usize = 50;

/// Write the diagnostic lines for one file. Valid files print nothing.
pub fn write_outcome<W: Write>(out: &mut W, outcome: &FileOutcome) -> io::Result<()> {
    let path = outcome.path.display();
    match &outcome.status {
        FileStatus::Valid => Ok(()),
        FileStatus::Failed(err) => writeln!(out, "Error processing {path}: {err}"),
        FileStatus::Flagged { finding, repair } => {
            match finding {
                Finding::Duplicates { excess, duplicates } => {
                    writeln!(out, "Error: {path} has {excess} duplicate nondominated points")?;
                    for (idx, point) in duplicates.iter().take(DUPLICATE_PREVIEW_LIMIT).enumerate() {
                        writeln!(out, "  Duplicate {}: {point}", idx + 1)?;
                    }
                    if duplicates.len() > DUPLICATE_PREVIEW_LIMIT {
                        writeln!(
                            out,
                            "  ... and {} more",
                            duplicates.len() - DUPLICATE_PREVIEW_LIMIT
                        )?;
                    }
                }
                Finding::CountMismatch { declared, unique } => writeln!(
                    out,
                    "Error: {path} declares {declared} nondominated points but lists {unique} distinct points"
                )?,
            }
            match (repair, finding) {
                (Repair::NotRequested, _) => Ok(()),
                (Repair::Rewritten { .. }, Finding::Duplicates { .. }) => {
                    writeln!(out, "  -> Fixed: removed duplicates")
                }
                (Repair::Rewritten { .. }, Finding::CountMismatch { .. }) => {
                    writeln!(out, "  -> Fixed: corrected point count")
                }
                (Repair::Failed(err), _) => writeln!(out, "  -> Failed to rewrite: {err}"),
            }
        }
    }
}

/// Write the end-of-run summary block.
pub fn write_summary<W: Write>(out: &mut W, stats: &ValidationStats, modify: bool) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out)?;
    writeln!(out, "{rule}")?;
    writeln!(out, "Validation Summary")?;
    writeln!(out, "{rule}")?;
    writeln!(out, "Total files checked:       {}", stats.total_files)?;
    writeln!(out, "Files with duplicates:     {}", stats.files_with_duplicates)?;
    writeln!(out, "Files with count mismatch: {}", stats.files_with_count_mismatch)?;
    if modify {
        writeln!(out, "Files fixed:               {}", stats.files_fixed)?;
    }
    writeln!(out, "Errors encountered:        {}", stats.errors)?;

    if stats.is_clean() {
        writeln!(out, "\n✓ All instances validated successfully!")?;
    } else if !modify && stats.flagged_files() > 0 {
        writeln!(out, "\nRun with --modify to fix duplicate issues.")?;
    }
    Ok(())
}
