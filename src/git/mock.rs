use crate::error::{Result, TagverError};
use crate::git::TagRepository;
use std::sync::Mutex;

/// Mock repository for testing without actual git operations
///
/// Tags are kept in creation order. `describe_latest_tag` answers with the
/// explicitly configured tag, or else the most recently added one.
#[derive(Debug, Default)]
pub struct MockRepository {
    tags: Mutex<Vec<String>>,
    described: Option<String>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock repository holding `tags`
    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MockRepository {
            tags: Mutex::new(tags.into_iter().map(Into::into).collect()),
            described: None,
        }
    }

    /// Fix the tag reported by `describe_latest_tag`
    pub fn set_described(&mut self, tag: impl Into<String>) {
        self.described = Some(tag.into());
    }

    /// Snapshot of the current tags
    pub fn tags(&self) -> Vec<String> {
        self.tags.lock().map(|t| t.clone()).unwrap_or_default()
    }
}

impl TagRepository for MockRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags())
    }

    fn describe_latest_tag(&self) -> Result<String> {
        self.described
            .clone()
            .or_else(|| self.tags().last().cloned())
            .ok_or_else(|| TagverError::Git(git2::Error::from_str("No tags can describe HEAD")))
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        let mut tags = self
            .tags
            .lock()
            .map_err(|_| TagverError::publish("mock tag list poisoned"))?;

        if tags.iter().any(|t| t == name) {
            return Err(TagverError::publish(format!(
                "Cannot create tag '{}': tag already exists",
                name
            )));
        }
        tags.push(name.to_string());
        Ok(())
    }
}
