use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use tagver::cli::orchestration::{self, Settings};
use tagver::cli::{Cli, Commands, SourceArgs};
use tagver::config::{self, Config};
use tagver::git::Git2Repository;
use tagver::{logging, ui};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load_config(cli.config.as_deref()).context("failed to load configuration")?;
    debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Bump(args) => {
            let settings = settings_for(&config, &args.source, args.yes)?;
            let repo = open_repository()?;

            let outcome = orchestration::run_bump(
                &repo,
                &settings,
                args.section.as_deref(),
                args.label.as_deref(),
                |question| ui::confirm_action(question, false),
            )?;

            if outcome.published {
                ui::display_success(&format!(
                    "Tagged {} (was {})",
                    outcome.plan.next, outcome.plan.current
                ));
            } else {
                ui::display_warning("Bump cancelled, no tag created.");
            }
        }
        Commands::Get(args) => {
            let settings = settings_for(&config, &args.source, false)?;
            let repo = open_repository()?;

            println!(
                "{}",
                orchestration::run_get(&repo, &settings, args.section.as_deref())?
            );
        }
        Commands::Set(args) => {
            let prefix = args.prefix.unwrap_or_else(|| config.tags.prefix.clone());
            let version = orchestration::run_set(&args.version, &prefix)?;

            ui::display_status("setting version to:");
            println!("{}", ui::format_breakdown(&version));
        }
        Commands::SelfVersion(args) => {
            println!("{}", orchestration::run_self_version(args.kind.as_deref()));
        }
    }

    Ok(())
}

fn settings_for(config: &Config, source: &SourceArgs, yes: bool) -> Result<Settings> {
    orchestration::ensure_engine(&source.engine)?;
    Ok(Settings::resolve(
        config,
        source.prefix.as_deref(),
        source.mode,
        yes,
    ))
}

fn open_repository() -> Result<Git2Repository> {
    Git2Repository::open(".").context("not in a git repository")
}
