use thiserror::Error;

/// Unified error type for tagver operations
#[derive(Error, Debug)]
pub enum TagverError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No semver-like tags found{}", prefix_note(.prefix))]
    NoCandidates { prefix: String },

    #[error("Label '{label}' has non-numeric ordinal segment '{segment}'")]
    NonNumericLabelOrdinal { label: String, segment: String },

    #[error("Cannot bump {section}: the {section} number is already at its maximum")]
    VersionOverflow { section: String },

    #[error("Invalid version: '{0}' is not semver-like")]
    InvalidVersion(String),

    #[error("Publish failed: {0}")]
    Publish(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn prefix_note(prefix: &str) -> String {
    if prefix.is_empty() {
        String::new()
    } else {
        format!(" with prefix '{}'", prefix)
    }
}

/// Convenience type alias for Results in tagver
pub type Result<T> = std::result::Result<T, TagverError>;

impl TagverError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        TagverError::Config(msg.into())
    }

    /// Create an invalid-version error for the offending input
    pub fn invalid_version(raw: impl Into<String>) -> Self {
        TagverError::InvalidVersion(raw.into())
    }

    /// Create an overflow error for the section that cannot grow
    pub fn version_overflow(section: impl Into<String>) -> Self {
        TagverError::VersionOverflow {
            section: section.into(),
        }
    }

    /// Create a publish error with context
    pub fn publish(msg: impl Into<String>) -> Self {
        TagverError::Publish(msg.into())
    }

    /// Create a no-candidates error for the given tag prefix
    pub fn no_candidates(prefix: impl Into<String>) -> Self {
        TagverError::NoCandidates {
            prefix: prefix.into(),
        }
    }
}
