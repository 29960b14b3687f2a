use thiserror::Error;

/// Result type for instance operations
pub type Result<T> = std::result::Result<T, InstanceError>;

/// Errors raised while reading or writing an instance file
#[derive(Error, Debug)]
pub enum InstanceError {
    /// Fewer than the three lines every instance needs
    #[error("File too short: {lines} line(s), expected at least 3")]
    TooShort { lines: usize },

    /// The file ended before a required line
    #[error("Line {line}: missing {expected}")]
    MissingLine { line: usize, expected: &'static str },

    /// A token that does not parse as an integer
    #[error("Line {line}: invalid integer '{token}'")]
    InvalidInteger { line: usize, token: String },

    /// A line with the wrong number of integers
    #[error("Line {line}: {section} has {found} value(s), expected {expected}")]
    FieldCount {
        line: usize,
        section: Section,
        expected: usize,
        found: usize,
    },

    /// Header or count value below its allowed minimum
    #[error("{field} must be at least {min}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
    },

    /// IO error occurred
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl InstanceError {
    /// Create a missing line error
    pub fn missing(line: usize, expected: &'static str) -> Self {
        Self::MissingLine { line, expected }
    }

    /// Create an invalid integer error
    pub fn invalid_integer(line: usize, token: impl Into<String>) -> Self {
        Self::InvalidInteger {
            line,
            token: token.into(),
        }
    }

    /// True for malformed content, false for I/O failures.
    pub fn is_format_error(&self) -> bool {
        !matches!(self, Self::IoError(_))
    }
}

/// Part of the instance grammar a line belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Header,
    Capacity,
    Item,
    PointCount,
    Point,
}

impl Section {
    pub const fn as_str(self) -> &'static str {
        match self {
            Section::Header => "header",
            Section::Capacity => "capacity line",
            Section::Item => "item",
            Section::PointCount => "point count line",
            Section::Point => "point",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
