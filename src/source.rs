//! Loader/publisher boundary.
//!
//! The core never talks to a version store directly. It asks a
//! [VersionLoader] for the current version and hands the computed string to
//! a [VersionPublisher]. Plain closures satisfy both traits, and
//! [TagLoader]/[TagPublisher] back them with a [TagRepository].

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::{latest, SemverMatcher, Version};
use crate::error::{Result, TagverError};
use crate::git::TagRepository;

/// Supplies the version a bump starts from.
///
/// Failing to find any version is an error; loaders must not fall back to a
/// made-up default.
pub trait VersionLoader {
    fn load(&self) -> Result<Version>;
}

impl<F> VersionLoader for F
where
    F: Fn() -> Result<Version>,
{
    fn load(&self) -> Result<Version> {
        self()
    }
}

/// Records a computed version string.
pub trait VersionPublisher {
    fn publish(&self, version: &str) -> Result<()>;
}

impl<F> VersionPublisher for F
where
    F: Fn(&str) -> Result<()>,
{
    fn publish(&self, version: &str) -> Result<()> {
        self(version)
    }
}

/// Which tag counts as "the" version of a repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LoadMode {
    /// Highest semver-like tag anywhere in the repository
    #[default]
    Latest,
    /// Nearest tag reachable from HEAD
    Current,
}

/// Loads versions from the tags of a repository
pub struct TagLoader<'a, R: TagRepository + ?Sized> {
    repo: &'a R,
    mode: LoadMode,
    prefix: String,
}

impl<'a, R: TagRepository + ?Sized> TagLoader<'a, R> {
    pub fn new(repo: &'a R, mode: LoadMode, prefix: impl Into<String>) -> Self {
        TagLoader {
            repo,
            mode,
            prefix: prefix.into(),
        }
    }

    fn load_latest(&self) -> Result<Version> {
        let matcher = SemverMatcher::new(&self.prefix)?;
        let tags = self.repo.list_tags()?;
        let candidates = matcher.filter(&tags);

        debug!(
            total = tags.len(),
            semver_like = candidates.len(),
            prefix = %self.prefix,
            "filtered repository tags"
        );

        let versions = candidates.iter().filter_map(|tag| {
            let parsed = Version::checked_parse(tag, &self.prefix);
            if parsed.is_none() {
                debug!(%tag, "skipping tag with out-of-range numbers");
            }
            parsed
        });

        latest(versions).ok_or_else(|| TagverError::no_candidates(&self.prefix))
    }

    fn load_current(&self) -> Result<Version> {
        let described = self.repo.describe_latest_tag()?;
        debug!(tag = %described, "described HEAD");

        Version::try_parse(described.trim(), &self.prefix)
    }
}

impl<R: TagRepository + ?Sized> VersionLoader for TagLoader<'_, R> {
    fn load(&self) -> Result<Version> {
        match self.mode {
            LoadMode::Latest => self.load_latest(),
            LoadMode::Current => self.load_current(),
        }
    }
}

/// Publishes versions by tagging HEAD
pub struct TagPublisher<'a, R: TagRepository + ?Sized> {
    repo: &'a R,
}

impl<'a, R: TagRepository + ?Sized> TagPublisher<'a, R> {
    pub fn new(repo: &'a R) -> Self {
        TagPublisher { repo }
    }
}

impl<R: TagRepository + ?Sized> VersionPublisher for TagPublisher<'_, R> {
    fn publish(&self, version: &str) -> Result<()> {
        self.repo.create_tag(version)?;
        info!(tag = %version, "created tag");
        Ok(())
    }
}
