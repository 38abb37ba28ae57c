//! Recognition of semver-like tag strings.
//!
//! A semver-like string is `PREFIX? INT.INT.INT ("-" LABELSEG)*` where `INT`
//! has no leading zeros and `LABELSEG` is drawn from `[A-Za-z0-9._]`.

use regex::Regex;

use crate::error::{Result, TagverError};

const INT_SECTION: &str = r"(0|[1-9][0-9]*)";
const INT_SEPARATOR: &str = r"\.";
const LABEL_SECTION: &str = r"(-[a-zA-Z0-9._]+)*";

/// Compiled grammar for one tag prefix.
///
/// The prefix is matched literally: it is escaped before it is embedded in the
/// pattern, so prefixes such as `v.` or `release+` behave as plain text.
#[derive(Debug, Clone)]
pub struct SemverMatcher {
    prefix: String,
    pattern: Regex,
}

impl SemverMatcher {
    /// Build a matcher for tags carrying `prefix` (empty for no prefix).
    ///
    /// Fails only when the escaped prefix pushes the pattern past the regex
    /// engine's size limits.
    pub fn new(prefix: &str) -> Result<Self> {
        let source = format!(
            "^({}){}{}{}{}{}{}$",
            regex::escape(prefix),
            INT_SECTION,
            INT_SEPARATOR,
            INT_SECTION,
            INT_SEPARATOR,
            INT_SECTION,
            LABEL_SECTION,
        );
        let pattern = Regex::new(&source).map_err(|e| {
            TagverError::config(format!("Unusable tag prefix '{}': {}", prefix, e))
        })?;

        Ok(SemverMatcher {
            prefix: prefix.to_string(),
            pattern,
        })
    }

    /// The prefix this matcher was built for
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Whether the whole `candidate` is a semver-like string
    pub fn is_match(&self, candidate: &str) -> bool {
        self.pattern.is_match(candidate)
    }

    /// Keep the semver-like entries of `candidates`, in input order.
    pub fn filter<'a, I, S>(&self, candidates: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a S>,
        S: AsRef<str> + ?Sized + 'a,
    {
        candidates
            .into_iter()
            .map(<S as AsRef<str>>::as_ref)
            .filter(|candidate| !candidate.is_empty() && self.is_match(candidate))
            .map(str::to_string)
            .collect()
    }
}

/// Returns true if `candidate` follows the semver pattern for `prefix`.
///
/// A prefix the grammar cannot be built for matches nothing.
pub fn is_semver_like(candidate: &str, prefix: &str) -> bool {
    SemverMatcher::new(prefix)
        .map(|matcher| matcher.is_match(candidate))
        .unwrap_or(false)
}

/// Retrieves every semver-like entry from `candidates`, preserving order.
pub fn filter_semver_like<S: AsRef<str>>(candidates: &[S], prefix: &str) -> Vec<String> {
    SemverMatcher::new(prefix)
        .map(|matcher| matcher.filter(candidates))
        .unwrap_or_default()
}
