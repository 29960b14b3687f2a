use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Root scanned when neither a flag nor the environment names one.
pub const DEFAULT_INSTANCES_DIR: &str = "instances";

/// Environment variable overriding [`DEFAULT_INSTANCES_DIR`].
pub const INSTANCES_DIR_ENV: &str = "MOBKP_INSTANCES_DIR";

/// File name glob selecting instance files inside objective folders.
pub const DEFAULT_INSTANCE_PATTERN: &str = "*.in";

/// How many distinct duplicates are listed per file before truncating.
pub const DUPLICATE_PREVIEW_LIMIT: usize = 3;

/// Options for a validation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateOptions {
    /// Rewrite files whose point list is inconsistent
    pub modify: bool,

    /// Print per-folder progress to the report stream
    pub verbose: bool,

    /// Glob matched against instance file names
    pub pattern: String,
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self {
            modify: false,
            verbose: false,
            pattern: DEFAULT_INSTANCE_PATTERN.to_string(),
        }
    }
}

impl ValidateOptions {
    /// Report only, never touch files.
    pub fn dry_run() -> Self {
        Self::default()
    }

    /// Report and rewrite inconsistent files in place.
    pub fn repair() -> Self {
        Self {
            modify: true,
            ..Default::default()
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    pub fn mode_label(&self) -> &'static str {
        if self.modify {
            "modify"
        } else {
            "dry-run (report only)"
        }
    }
}

/// Scan root from `MOBKP_INSTANCES_DIR`, falling back to `instances`.
pub fn default_instances_dir() -> PathBuf {
    env::var_os(INSTANCES_DIR_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INSTANCES_DIR))
}
