//! Domain logic - pure version rules independent of git operations

pub mod grammar;
pub mod ordering;
pub mod version;

pub use grammar::{filter_semver_like, is_semver_like, SemverMatcher};
pub use ordering::{compare, latest, sort_versions};
pub use version::{Version, VersionBump, LABEL_ORDINAL_MAX};
