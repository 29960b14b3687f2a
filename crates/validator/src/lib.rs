//! # MOBKP Validator
//!
//! Scans an instance corpus and checks every file's nondominated point list.
//!
//! ## Pipeline
//!
//! ```text
//! root/
//!     │
//!     ├──> Instance types (random, negative, positive, ...)
//!     │      └─> Objective folders (2, 3, ...)
//!     │             └─> *.in files
//!     │
//!     ├──> Parser → Instance
//!     │
//!     ├──> Duplicate check (declared vs distinct points)
//!     │      └─> Finding + diagnostics
//!     │
//!     └──> Writer (modify mode only)
//!            └─> Canonical, duplicate-free file
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use mobkp_validator::{ValidateOptions, Validator};
//!
//! fn main() -> mobkp_validator::Result<()> {
//!     let validator = Validator::new(ValidateOptions::dry_run());
//!     let stats = validator.run("instances", &mut std::io::stdout())?;
//!     println!("{} files, {} with duplicates", stats.total_files, stats.files_with_duplicates);
//!     Ok(())
//! }
//! ```

mod config;
mod error;
mod outcome;
mod report;
mod scanner;
mod stats;
mod validator;

pub use config::{
    default_instances_dir, ValidateOptions, DEFAULT_INSTANCES_DIR, DEFAULT_INSTANCE_PATTERN,
    DUPLICATE_PREVIEW_LIMIT, INSTANCES_DIR_ENV,
};
pub use error::{Result, ValidatorError};
pub use outcome::{check_file, FileOutcome, FileStatus, Finding, Repair};
pub use report::{write_outcome, write_summary};
pub use scanner::InstanceScanner;
pub use stats::ValidationStats;
pub use validator::Validator;
