//! Precedence between versions.
//!
//! This is deliberately not semver.org precedence. At equal
//! `major.minor.patch`, versions are ranked by:
//!
//! 1. label weight, descending (more label segments sort first, releases last)
//! 2. label core, ascending byte order
//! 3. label ordinal, ascending (an un-numbered label closes its series)

use std::cmp::Ordering;

use crate::domain::version::Version;

/// Total order used to rank tags.
pub fn compare(a: &Version, b: &Version) -> Ordering {
    a.major
        .cmp(&b.major)
        .then_with(|| a.minor.cmp(&b.minor))
        .then_with(|| a.patch.cmp(&b.patch))
        .then_with(|| b.label_weight().cmp(&a.label_weight()))
        .then_with(|| a.label_core().cmp(b.label_core()))
        .then_with(|| a.label_ordinal().cmp(&b.label_ordinal()))
}

/// Stable in-place sort; versions that compare equal keep their input order.
pub fn sort_versions(versions: &mut [Version]) {
    versions.sort_by(compare);
}

/// The greatest version, i.e. the last one after [`sort_versions`].
///
/// Among versions that compare equal the one appearing last wins, exactly as
/// taking the tail of a stable sort would.
pub fn latest<I>(versions: I) -> Option<Version>
where
    I: IntoIterator<Item = Version>,
{
    versions.into_iter().max_by(compare)
}
