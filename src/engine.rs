//! One bump cycle: load the current version, compute its successor, publish.
//!
//! Callers that can run concurrently against the same tag namespace should
//! treat `plan_bump` + `publish_plan` as a single critical section.

use tracing::debug;

use crate::domain::{Version, VersionBump};
use crate::error::Result;
use crate::source::{VersionLoader, VersionPublisher};

/// The current version and the version a bump would produce
#[derive(Debug, Clone, PartialEq)]
pub struct BumpPlan {
    pub bump: VersionBump,
    pub current: Version,
    pub next: Version,
}

/// Load the current version and compute its successor
///
/// # Returns
/// * `Ok(BumpPlan)` - current and next version
/// * `Err` - If the loader fails or a label ordinal is not numeric
pub fn plan_bump<L: VersionLoader + ?Sized>(loader: &L, bump: VersionBump) -> Result<BumpPlan> {
    let current = loader.load()?;
    let next = current.bump(&bump)?;

    debug!(%current, %next, section = %bump, "planned bump");

    Ok(BumpPlan {
        bump,
        current,
        next,
    })
}

/// Hand the planned version to `publisher`, returning the published string
pub fn publish_plan<P: VersionPublisher + ?Sized>(plan: &BumpPlan, publisher: &P) -> Result<String> {
    let version = plan.next.to_string();
    publisher.publish(&version)?;
    Ok(version)
}
