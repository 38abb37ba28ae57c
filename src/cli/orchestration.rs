//! Main workflow orchestration logic
//!
//! Each command is a function over a [TagRepository] and resolved
//! [Settings], so workflows can be driven programmatically (and tested
//! against [crate::git::MockRepository]) without clap or a terminal.

use anyhow::{bail, Context, Result};
use tracing::{debug, info};

use crate::config::Config;
use crate::domain::{Version, VersionBump};
use crate::engine::{plan_bump, publish_plan, BumpPlan};
use crate::git::TagRepository;
use crate::source::{LoadMode, TagLoader, TagPublisher, VersionLoader};
use crate::ui;

/// The only version source engine currently supported
pub const GIT_ENGINE: &str = "git";

/// Effective options after merging flags over the configuration file
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Settings {
    pub prefix: String,
    pub mode: LoadMode,
    pub assume_yes: bool,
}

impl Settings {
    /// Flags win over the configuration file; unset flags fall back to it.
    pub fn resolve(
        config: &Config,
        prefix: Option<&str>,
        mode: Option<LoadMode>,
        yes: bool,
    ) -> Self {
        Settings {
            prefix: prefix.map_or_else(|| config.tags.prefix.clone(), str::to_string),
            mode: mode.unwrap_or(config.tags.mode),
            assume_yes: yes || config.behavior.assume_yes,
        }
    }
}

/// Result of a bump workflow
#[derive(Debug, Clone, PartialEq)]
pub struct BumpOutcome {
    pub plan: BumpPlan,
    /// Whether the new tag was created
    pub published: bool,
}

/// Reject engines other than git
pub fn ensure_engine(engine: &str) -> Result<()> {
    if engine.eq_ignore_ascii_case(GIT_ENGINE) {
        Ok(())
    } else {
        bail!("invalid engine '{}' specified (only '{}' is supported)", engine, GIT_ENGINE)
    }
}

/// Bump workflow
///
/// 1. Load the current version from the repository tags
/// 2. Compute the next version for `section`
/// 3. Ask `confirm` unless `settings.assume_yes`
/// 4. Tag HEAD with the next version
///
/// Declining the confirmation is not an error; the outcome reports
/// `published: false`.
pub fn run_bump<R, C>(
    repo: &R,
    settings: &Settings,
    section: Option<&str>,
    label: Option<&str>,
    confirm: C,
) -> Result<BumpOutcome>
where
    R: TagRepository + ?Sized,
    C: FnOnce(&str) -> Result<bool>,
{
    let bump = VersionBump::from_section(section.unwrap_or_default(), label);
    if let VersionBump::Label(name) = &bump {
        if name.is_empty() {
            bail!("a label bump needs a label name, e.g. `tagver bump label rc`");
        }
    }

    let loader = TagLoader::new(repo, settings.mode, settings.prefix.as_str());
    let plan = plan_bump(&loader, bump).context("failed to compute the next version")?;

    let confirmed = settings.assume_yes || confirm(&ui::bump_question(&plan))?;
    if !confirmed {
        info!(next = %plan.next, "bump declined");
        return Ok(BumpOutcome {
            plan,
            published: false,
        });
    }

    let tag = publish_plan(&plan, &TagPublisher::new(repo))
        .with_context(|| format!("failed to tag version {}", plan.next))?;
    debug!(%tag, "bump published");

    Ok(BumpOutcome {
        plan,
        published: true,
    })
}

/// Get workflow: the whole version, or the requested section of it
pub fn run_get<R>(repo: &R, settings: &Settings, section: Option<&str>) -> Result<String>
where
    R: TagRepository + ?Sized,
{
    let loader = TagLoader::new(repo, settings.mode, settings.prefix.as_str());
    let version = loader
        .load()
        .context("failed to load the repository version")?;

    let output = match section.map(str::to_lowercase).as_deref() {
        Some("major") => version.major.to_string(),
        Some("minor") => version.minor.to_string(),
        Some("patch") => version.patch.to_string(),
        Some("label") => version.label.clone(),
        _ => version.to_string(),
    };
    Ok(output)
}

/// Set workflow: validate `raw` and return it as a version carrying `prefix`.
///
/// `raw` may be given with or without the prefix.
pub fn run_set(raw: &str, prefix: &str) -> Result<Version> {
    Version::try_parse(raw, prefix)
        .or_else(|_| Version::try_parse(raw, "").map(|v| v.with_prefix(prefix)))
        .with_context(|| format!("invalid semver '{}' specified", raw))
}

/// Self-version workflow: `semver`, `commit`, or both
pub fn run_self_version(kind: Option<&str>) -> String {
    let semver = env!("CARGO_PKG_VERSION");
    let commit = option_env!("TAGVER_GIT_COMMIT").unwrap_or("unknown");

    match kind.map(str::to_lowercase).as_deref() {
        Some("semver") => semver.to_string(),
        Some("commit") => commit.to_string(),
        _ => format!("tagver {}-{}", semver, commit),
    }
}
