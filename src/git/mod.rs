//! Git operations abstraction layer
//!
//! The version source is a set of tags. This module hides where those tags
//! live behind the [TagRepository] trait:
//!
//! - [repository::Git2Repository]: a real repository through the `git2` crate
//! - [mock::MockRepository]: an in-memory tag list for testing
//!
//! Code that loads or publishes versions should depend on the trait so it can
//! be exercised without a repository on disk.
//!
//! ```rust
//! # use tagver::git::{MockRepository, TagRepository};
//! let repo = MockRepository::with_tags(["v1.0.0", "v1.1.0"]);
//! repo.create_tag("v1.2.0")?;
//! assert_eq!(repo.list_tags()?.len(), 3);
//! # Ok::<(), tagver::TagverError>(())
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Common tag operations needed to read and record versions
///
/// ## Thread Safety
///
/// Implementors must be `Send + Sync`. The trait does not serialise a full
/// read-bump-write cycle; callers that may run concurrently against the same
/// tag namespace must hold their own lock around it.
///
/// ## Error Handling
///
/// Implementations map their underlying failures (e.g. `git2::Error`) into
/// [crate::error::TagverError].
pub trait TagRepository: Send + Sync {
    /// Every tag name in the repository, in no particular order
    fn list_tags(&self) -> Result<Vec<String>>;

    /// The nearest tag reachable from HEAD, without any describe suffix
    ///
    /// Equivalent to `git describe --tags --abbrev=0`.
    fn describe_latest_tag(&self) -> Result<String>;

    /// Create a lightweight tag on HEAD
    ///
    /// # Returns
    /// * `Ok(())` - Tag created
    /// * `Err` - If the tag already exists or HEAD cannot be resolved
    fn create_tag(&self, name: &str) -> Result<()>;
}
