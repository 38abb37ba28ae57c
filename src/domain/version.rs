use crate::domain::grammar::SemverMatcher;
use crate::error::{Result, TagverError};
use std::fmt;
use std::str::FromStr;

/// Ordinal reported for labels without a trailing numeric segment.
///
/// Such a label is the last member of its series, so it sorts after every
/// numbered sibling (`rc.1 < rc.2 < rc`).
pub const LABEL_ORDINAL_MAX: u64 = u64::MAX;

/// Semantic version representation
///
/// `prefix` is carried through for display only: two versions are equal when
/// their numbers and labels are equal, whatever their prefixes.
#[derive(Debug, Clone, Default)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub label: String,
    pub prefix: String,
}

impl Version {
    /// Create a new unprefixed version
    pub fn new(major: u64, minor: u64, patch: u64, label: impl Into<String>) -> Self {
        Version {
            major,
            minor,
            patch,
            label: label.into(),
            prefix: String::new(),
        }
    }

    /// Attach a display prefix (e.g. "v")
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Decompose `raw` into a version, without validating it.
    ///
    /// The literal `prefix` is removed from the front, everything after the
    /// first `-` becomes the label, and the rest is split on `.` into the
    /// three numbers. Missing or unparseable numbers become `0` instead of
    /// failing, so callers that care must check the string with
    /// [`SemverMatcher`] first (or use [`Version::try_parse`]).
    ///
    /// The returned version carries `prefix` whether or not `raw` had it.
    pub fn parse(raw: &str, prefix: &str) -> Self {
        let body = raw.strip_prefix(prefix).unwrap_or(raw);
        let (core, label) = body.split_once('-').unwrap_or((body, ""));

        let mut numbers = core.split('.').map(|n| n.parse::<u64>().unwrap_or(0));
        let major = numbers.next().unwrap_or(0);
        let minor = numbers.next().unwrap_or(0);
        let patch = numbers.next().unwrap_or(0);

        Version {
            major,
            minor,
            patch,
            label: label.to_string(),
            prefix: prefix.to_string(),
        }
    }

    /// Like [`Version::parse`], but `None` when a number is missing or does
    /// not fit in a u64. The label is not checked.
    pub fn checked_parse(raw: &str, prefix: &str) -> Option<Self> {
        let body = raw.strip_prefix(prefix).unwrap_or(raw);
        let (core, label) = body.split_once('-').unwrap_or((body, ""));

        let mut numbers = core.split('.').map(|n| n.parse::<u64>().ok());
        let major = numbers.next()??;
        let minor = numbers.next()??;
        let patch = numbers.next()??;
        if numbers.next().is_some() {
            return None;
        }

        Some(Version {
            major,
            minor,
            patch,
            label: label.to_string(),
            prefix: prefix.to_string(),
        })
    }

    /// Parse `raw`, rejecting anything that is not semver-like for `prefix`
    /// or whose numbers overflow a u64.
    pub fn try_parse(raw: &str, prefix: &str) -> Result<Self> {
        if !SemverMatcher::new(prefix)?.is_match(raw) {
            return Err(TagverError::invalid_version(raw));
        }
        Version::checked_parse(raw, prefix).ok_or_else(|| TagverError::invalid_version(raw))
    }

    /// The label without its trailing numeric segment.
    ///
    /// `rc.2` -> `rc`, `a.b` -> `a.b`, `rc` -> `rc`. A single-segment label is
    /// never stripped, even when it is numeric.
    pub fn label_core(&self) -> &str {
        match self.label.rsplit_once('.') {
            Some((stem, last)) if parse_ordinal(last).is_some() => stem,
            _ => &self.label,
        }
    }

    /// The trailing numeric segment of the label, or [`LABEL_ORDINAL_MAX`]
    pub fn label_ordinal(&self) -> u64 {
        self.label
            .rsplit_once('.')
            .and_then(|(_, last)| parse_ordinal(last))
            .unwrap_or(LABEL_ORDINAL_MAX)
    }

    /// Number of dot-separated segments in the label core; 0 for no label.
    pub fn label_weight(&self) -> usize {
        let core = self.label_core();
        if core.is_empty() {
            0
        } else {
            core.split('.').count()
        }
    }

    /// Whether this is a final release (no label)
    pub fn is_release(&self) -> bool {
        self.label.is_empty()
    }

    /// Produce the successor of this version for `bump`.
    ///
    /// Fails when the number to increment is already `u64::MAX`, or when a
    /// label bump finds a segment that is not a number.
    pub fn bump(&self, bump: &VersionBump) -> Result<Self> {
        let mut next = self.clone();
        match bump {
            VersionBump::Major => {
                next.major = increment(self.major, bump)?;
                next.minor = 0;
                next.patch = 0;
                next.label.clear();
            }
            VersionBump::Minor => {
                next.minor = increment(self.minor, bump)?;
                next.patch = 0;
                next.label.clear();
            }
            VersionBump::Patch => {
                next.patch = increment(self.patch, bump)?;
                next.label.clear();
            }
            VersionBump::Label(name) => {
                next.label = next_label(&self.label, name)?;
            }
        }
        Ok(next)
    }
}

fn increment(value: u64, bump: &VersionBump) -> Result<u64> {
    value
        .checked_add(1)
        .ok_or_else(|| TagverError::version_overflow(bump.section()))
}

/// Accepts only non-empty ASCII digit strings that fit in a u64.
///
/// Signed segments such as `-1` in `rc.-1` are not ordinals: the label is
/// then all core and sorts last in its series, and a label bump on it fails.
fn parse_ordinal(segment: &str) -> Option<u64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse::<u64>().ok()
}

/// Label series stepping: `""` -> `name.0`, `name` -> `name.0`,
/// `name.3` -> `name.4`, `name.a.3` -> `name.a.4`.
fn next_label(current: &str, name: &str) -> Result<String> {
    if !current.starts_with(name) {
        return Ok(format!("{}.0", name));
    }

    let Some((stem, last)) = current.rsplit_once('.') else {
        return Ok(format!("{}.0", current));
    };

    let non_numeric = || TagverError::NonNumericLabelOrdinal {
        label: current.to_string(),
        segment: last.to_string(),
    };
    let ordinal = parse_ordinal(last).ok_or_else(non_numeric)?;
    let next = ordinal.checked_add(1).ok_or_else(non_numeric)?;

    Ok(format!("{}.{}", stem, next))
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.label == other.label
    }
}

impl Eq for Version {}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}.{}.{}",
            self.prefix, self.major, self.minor, self.patch
        )?;
        if !self.label.is_empty() {
            write!(f, "-{}", self.label)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = TagverError;

    /// Strict, unprefixed parse
    fn from_str(s: &str) -> Result<Self> {
        Version::try_parse(s, "")
    }
}

/// Version bump type decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
    /// Step the named label series
    Label(String),
}

impl VersionBump {
    /// Map a section name to a bump.
    ///
    /// Empty and unrecognised sections fall back to `Patch`. A `label`
    /// section takes its series name from `label`, which may be empty.
    pub fn from_section(section: &str, label: Option<&str>) -> Self {
        match section.to_lowercase().as_str() {
            "major" => VersionBump::Major,
            "minor" => VersionBump::Minor,
            "label" => VersionBump::Label(label.unwrap_or_default().to_string()),
            _ => VersionBump::Patch,
        }
    }

    /// Section name as shown to users
    pub fn section(&self) -> &'static str {
        match self {
            VersionBump::Major => "major",
            VersionBump::Minor => "minor",
            VersionBump::Patch => "patch",
            VersionBump::Label(_) => "label",
        }
    }
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.section())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label_bump(label: &str, name: &str) -> Result<String> {
        Version::new(1, 0, 0, label)
            .bump(&VersionBump::Label(name.to_string()))
            .map(|v| v.label)
    }

    #[test]
    fn test_version_parse() {
        let v = Version::parse("1.2.3", "");
        assert_eq!(v, Version::new(1, 2, 3, ""));
        assert_eq!(v.prefix, "");
    }

    #[test]
    fn test_version_parse_with_prefix() {
        let v = Version::parse("v1.2.3-rc.1", "v");
        assert_eq!(v, Version::new(1, 2, 3, "rc.1"));
        assert_eq!(v.prefix, "v");
    }

    #[test]
    fn test_version_parse_prefix_containing_dash() {
        let v = Version::parse("ver-0.0.1", "ver-");
        assert_eq!(v, Version::new(0, 0, 1, ""));
    }

    #[test]
    fn test_version_parse_label_keeps_dashes() {
        let v = Version::parse("0.0.0-label.with-all_possible-delims", "");
        assert_eq!(v.label, "label.with-all_possible-delims");
    }

    #[test]
    fn test_version_parse_is_permissive() {
        assert_eq!(Version::parse("a.b.c", ""), Version::new(0, 0, 0, ""));
        assert_eq!(Version::parse("1.x", ""), Version::new(1, 0, 0, ""));
        assert_eq!(Version::parse("", ""), Version::new(0, 0, 0, ""));
    }

    #[test]
    fn test_version_try_parse_rejects_invalid() {
        assert!(Version::try_parse("1.0", "").is_err());
        assert!(Version::try_parse("1.0.0", "v").is_err());
        assert!("00.1.0".parse::<Version>().is_err());
        assert_eq!(
            "2.0.1-beta".parse::<Version>().unwrap(),
            Version::new(2, 0, 1, "beta")
        );
    }

    #[test]
    fn test_version_display() {
        assert_eq!(Version::new(1, 2, 3, "").to_string(), "1.2.3");
        assert_eq!(
            Version::new(1, 4, 0, "rc.2").with_prefix("v").to_string(),
            "v1.4.0-rc.2"
        );
    }

    #[test]
    fn test_display_then_parse_restores_version() {
        let versions = vec![
            Version::new(0, 0, 0, ""),
            Version::new(1, 2, 3, "alpha.1"),
            Version::new(10, 0, 7, "a.b-c_d.3"),
        ];
        for v in versions {
            assert_eq!(Version::parse(&v.to_string(), ""), v);
            let prefixed = v.clone().with_prefix("v");
            assert_eq!(Version::parse(&prefixed.to_string(), "v"), v);
        }
    }

    #[test]
    fn test_equality_ignores_prefix() {
        let a = Version::new(1, 0, 0, "rc").with_prefix("v");
        let b = Version::new(1, 0, 0, "rc");
        assert_eq!(a, b);
        assert_ne!(b, Version::new(1, 0, 0, "rc.0"));
    }

    #[test]
    fn test_label_derived_fields() {
        let new = Version::new(1, 2, 3, "new.4");
        assert_eq!(new.label_core(), "new");
        assert_eq!(new.label_ordinal(), 4);
        assert_eq!(new.label_weight(), 1);

        let plain = Version::new(1, 2, 3, "beta");
        assert_eq!(plain.label_core(), "beta");
        assert_eq!(plain.label_ordinal(), LABEL_ORDINAL_MAX);
        assert_eq!(plain.label_weight(), 1);

        let deep = Version::new(1, 2, 3, "a.b.c");
        assert_eq!(deep.label_core(), "a.b.c");
        assert_eq!(deep.label_ordinal(), LABEL_ORDINAL_MAX);
        assert_eq!(deep.label_weight(), 3);

        let release = Version::new(1, 2, 3, "");
        assert_eq!(release.label_core(), "");
        assert_eq!(release.label_weight(), 0);
        assert!(release.is_release());
    }

    #[test]
    fn test_single_numeric_label_is_its_own_core() {
        let v = Version::new(0, 0, 0, "5");
        assert_eq!(v.label_core(), "5");
        assert_eq!(v.label_ordinal(), LABEL_ORDINAL_MAX);
        assert_eq!(v.label_weight(), 1);
    }

    #[test]
    fn test_version_bump_major() {
        let v = Version::new(1, 2, 3, "label");
        assert_eq!(v.bump(&VersionBump::Major).unwrap().to_string(), "2.0.0");
    }

    #[test]
    fn test_version_bump_minor() {
        let v = Version::new(1, 2, 3, "label");
        assert_eq!(v.bump(&VersionBump::Minor).unwrap(), Version::new(1, 3, 0, ""));
    }

    #[test]
    fn test_version_bump_patch() {
        let v = Version::new(1, 2, 3, "label");
        assert_eq!(v.bump(&VersionBump::Patch).unwrap(), Version::new(1, 2, 4, ""));
    }

    #[test]
    fn test_version_bump_keeps_prefix() {
        let v = Version::new(1, 2, 3, "").with_prefix("v");
        assert_eq!(v.bump(&VersionBump::Patch).unwrap().to_string(), "v1.2.4");
    }

    #[test]
    fn test_label_bump_starts_series() {
        assert_eq!(label_bump("", "X").unwrap(), "X.0");
        assert_eq!(label_bump("X.0", "X").unwrap(), "X.1");
    }

    #[test]
    fn test_label_bump_appends_ordinal() {
        assert_eq!(label_bump("rc", "rc").unwrap(), "rc.0");
    }

    #[test]
    fn test_label_bump_replaces_other_series() {
        assert_eq!(label_bump("beta.4", "rc").unwrap(), "rc.0");
    }

    #[test]
    fn test_label_bump_multi_segment() {
        assert_eq!(label_bump("label.0.0", "label").unwrap(), "label.0.1");
        assert_eq!(label_bump("label.a.0", "label").unwrap(), "label.a.1");
    }

    #[test]
    fn test_label_bump_matches_by_prefix() {
        assert_eq!(label_bump("rc.1", "r").unwrap(), "rc.2");
    }

    #[test]
    fn test_label_bump_non_numeric_fails() {
        assert!(matches!(
            label_bump("rc.x", "rc"),
            Err(TagverError::NonNumericLabelOrdinal { ref segment, .. }) if segment == "x"
        ));
        assert!(matches!(
            label_bump("label.a.b", "label"),
            Err(TagverError::NonNumericLabelOrdinal { .. })
        ));
    }

    #[test]
    fn test_bump_is_monotonic() {
        let v = Version::new(0, 1, 0, "");
        let once = v.bump(&VersionBump::Patch).unwrap();
        let twice = once.bump(&VersionBump::Patch).unwrap();
        assert_eq!(twice, Version::new(0, 1, 2, ""));
    }

    #[test]
    fn test_numeric_bump_overflow_fails() {
        let cases = [
            (Version::new(u64::MAX, 0, 0, ""), VersionBump::Major, "major"),
            (Version::new(0, u64::MAX, 0, ""), VersionBump::Minor, "minor"),
            (Version::new(0, 0, u64::MAX, "rc.1"), VersionBump::Patch, "patch"),
        ];

        for (version, bump, expected) in cases {
            assert!(matches!(
                version.bump(&bump),
                Err(TagverError::VersionOverflow { ref section }) if section == expected
            ));
        }
    }

    #[test]
    fn test_max_major_still_bumps_minor() {
        let v = Version::new(u64::MAX, 1, 0, "");
        assert_eq!(
            v.bump(&VersionBump::Minor).unwrap(),
            Version::new(u64::MAX, 2, 0, "")
        );
    }

    #[test]
    fn test_checked_parse_rejects_oversized_numbers() {
        assert_eq!(
            Version::checked_parse("v18446744073709551615.0.0", "v"),
            Some(Version::new(u64::MAX, 0, 0, ""))
        );
        assert_eq!(Version::checked_parse("99999999999999999999.0.0", ""), None);
        assert_eq!(Version::checked_parse("1.2", ""), None);
        assert!(matches!(
            Version::try_parse("1.99999999999999999999.0", ""),
            Err(TagverError::InvalidVersion(_))
        ));
    }

    #[test]
    fn test_signed_label_segment_is_not_an_ordinal() {
        let v = Version::new(1, 0, 0, "rc.-1");
        assert_eq!(v.label_core(), "rc.-1");
        assert_eq!(v.label_ordinal(), LABEL_ORDINAL_MAX);
        assert!(matches!(
            label_bump("rc.-1", "rc"),
            Err(TagverError::NonNumericLabelOrdinal { .. })
        ));
    }

    #[test]
    fn test_bump_from_section() {
        assert_eq!(VersionBump::from_section("major", None), VersionBump::Major);
        assert_eq!(VersionBump::from_section("MINOR", None), VersionBump::Minor);
        assert_eq!(VersionBump::from_section("patch", None), VersionBump::Patch);
        assert_eq!(VersionBump::from_section("", None), VersionBump::Patch);
        assert_eq!(VersionBump::from_section("nonsense", None), VersionBump::Patch);
        assert_eq!(
            VersionBump::from_section("label", Some("rc")),
            VersionBump::Label("rc".to_string())
        );
    }

    #[test]
    fn test_bump_display() {
        assert_eq!(VersionBump::Label("rc".into()).to_string(), "label");
        assert_eq!(VersionBump::Patch.to_string(), "patch");
    }
}
