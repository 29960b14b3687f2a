use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ValidatorError>;

#[derive(Error, Debug)]
pub enum ValidatorError {
    #[error("Directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Invalid instance pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Directory walk error: {0}")]
    WalkError(#[from] walkdir::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
