//! Command-line definitions
//!
//! Parsing lives here so the binary stays thin and integration tests can
//! build [Cli] values directly. The work behind each command is in
//! [orchestration].

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::source::LoadMode;

pub mod orchestration;

#[derive(Parser, Debug)]
#[command(
    name = "tagver",
    version,
    about = "Find, bump and tag semantic versions from git tags"
)]
pub struct Cli {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    pub config: Option<PathBuf>,

    #[arg(
        short,
        long,
        global = true,
        action = ArgAction::Count,
        help = "More diagnostics on stderr (-v debug, -vv trace)"
    )]
    pub verbose: u8,

    #[arg(short, long, global = true, help = "Only report errors")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Bump the repository's version and tag HEAD with it
    ///
    /// Defaults to a patch bump when no section is given.
    #[command(visible_alias = "b")]
    Bump(BumpArgs),

    /// Print the repository's version, or one section of it
    #[command(visible_alias = "g")]
    Get(GetArgs),

    /// Validate a version and show how it decomposes
    #[command(visible_alias = "s")]
    Set(SetArgs),

    /// Print tagver's own version
    #[command(name = "version", visible_alias = "v")]
    SelfVersion(SelfVersionArgs),
}

/// Where versions are read from and how tags look
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    #[arg(
        short,
        long,
        env = "TAGVER_PREFIX",
        help = "Literal tag prefix, e.g. 'v' for v1.0.0"
    )]
    pub prefix: Option<String>,

    #[arg(
        short,
        long,
        value_enum,
        env = "TAGVER_MODE",
        help = "'latest' picks the highest tag, 'current' the nearest tag to HEAD"
    )]
    pub mode: Option<LoadMode>,

    #[arg(
        short = 'u',
        long = "use",
        env = "TAGVER_USE",
        default_value = "git",
        help = "Version source engine (only 'git')"
    )]
    pub engine: String,
}

#[derive(Args, Debug, Clone)]
pub struct BumpArgs {
    #[arg(help = "major | minor | patch | label")]
    pub section: Option<String>,

    #[arg(help = "Label series name for a label bump, e.g. 'rc'")]
    pub label: Option<String>,

    #[command(flatten)]
    pub source: SourceArgs,

    #[arg(short, long, env = "TAGVER_YES", help = "Skip the confirmation prompt")]
    pub yes: bool,
}

#[derive(Args, Debug, Clone)]
pub struct GetArgs {
    #[arg(help = "major | minor | patch | label (whole version if omitted)")]
    pub section: Option<String>,

    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Args, Debug, Clone)]
pub struct SetArgs {
    #[arg(help = "Version to set, e.g. 1.4.0-rc.2")]
    pub version: String,

    #[arg(short, long, env = "TAGVER_PREFIX", help = "Literal tag prefix")]
    pub prefix: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct SelfVersionArgs {
    #[arg(help = "semver | commit (both if omitted)")]
    pub kind: Option<String>,
}
