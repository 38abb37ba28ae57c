use crate::error::{Result, TagverError};
use git2::{DescribeFormatOptions, DescribeOptions, Repository as Git2Repo};
use std::path::Path;
use std::sync::Mutex;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Mutex<Git2Repo>,
}

impl Git2Repository {
    /// Open or discover a git repository at or above `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository::from_git2(repo))
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository {
            repo: Mutex::new(repo),
        }
    }

    fn with_repo<T>(&self, f: impl FnOnce(&Git2Repo) -> Result<T>) -> Result<T> {
        let repo = self
            .repo
            .lock()
            .map_err(|_| TagverError::Git(git2::Error::from_str("repository lock poisoned")))?;
        f(&repo)
    }
}

impl super::TagRepository for Git2Repository {
    fn list_tags(&self) -> Result<Vec<String>> {
        self.with_repo(|repo| {
            let tags = repo.tag_names(None)?;

            Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
        })
    }

    fn describe_latest_tag(&self) -> Result<String> {
        self.with_repo(|repo| {
            let mut options = DescribeOptions::new();
            options.describe_tags();

            let describe = repo.describe(&options)?;

            let mut format = DescribeFormatOptions::new();
            format.abbreviated_size(0);

            Ok(describe.format(Some(&format))?)
        })
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        self.with_repo(|repo| {
            let head = repo.head()?.peel_to_commit()?;

            repo.tag_lightweight(name, head.as_object(), false)
                .map_err(|e| TagverError::publish(format!("Cannot create tag '{}': {}", name, e)))?;

            Ok(())
        })
    }
}
