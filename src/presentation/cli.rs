//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--config, --json, --color, --verbose, --yes, --dry-run)
//!   are inherited by all subcommands
//! - No subcommand deploys the whole site

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::application::DeployScope;
use crate::domain::value_objects::Direction;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// kirby-deploy - FTP deployment for Kirby sites
#[derive(Parser, Debug)]
#[command(name = "kirby-deploy")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'kirby-deploy' without a command to deploy the whole site.")]
pub struct Cli {
    /// Config file (defaults to ./kirby-deploy.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Apply changes without asking for confirmation
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Preview changes before applying them
    #[arg(long, global = true, overrides_with = "no_dry_run")]
    pub dry_run: bool,

    /// Apply changes without a preview run
    #[arg(long, global = true, overrides_with = "dry_run")]
    pub no_dry_run: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Upload the content folder
    ContentPush,
    /// Download the content folder
    ContentPull,
    /// Upload user accounts
    AccountsPush,
    /// Download user accounts
    AccountsPull,
    /// Upload the languages folder
    LanguagesPush,
    /// Download the languages folder
    LanguagesPull,
}

impl Commands {
    pub fn scope(&self) -> (DeployScope, Direction) {
        match self {
            Commands::ContentPush => (DeployScope::Content, Direction::Push),
            Commands::ContentPull => (DeployScope::Content, Direction::Pull),
            Commands::AccountsPush => (DeployScope::Accounts, Direction::Push),
            Commands::AccountsPull => (DeployScope::Accounts, Direction::Pull),
            Commands::LanguagesPush => (DeployScope::Languages, Direction::Push),
            Commands::LanguagesPull => (DeployScope::Languages, Direction::Pull),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Commands::ContentPush => "content-push",
            Commands::ContentPull => "content-pull",
            Commands::AccountsPush => "accounts-push",
            Commands::AccountsPull => "accounts-pull",
            Commands::LanguagesPush => "languages-push",
            Commands::LanguagesPull => "languages-pull",
        }
    }
}

impl Cli {
    /// Scope and direction of the requested command
    pub fn scope(&self) -> (DeployScope, Direction) {
        self.command
            .map(|c| c.scope())
            .unwrap_or((DeployScope::Site, Direction::Push))
    }

    pub fn command_name(&self) -> &'static str {
        self.command.map(|c| c.name()).unwrap_or("deploy")
    }

    /// `Some` when `--dry-run` or `--no-dry-run` was given
    pub fn dry_run_override(&self) -> Option<bool> {
        if self.dry_run {
            Some(true)
        } else if self.no_dry_run {
            Some(false)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_command_deploys_site() {
        let cli = Cli::try_parse_from(["kirby-deploy"]).unwrap();
        assert_eq!(cli.scope(), (DeployScope::Site, Direction::Push));
        assert_eq!(cli.command_name(), "deploy");
        assert_eq!(cli.dry_run_override(), None);
    }

    #[test]
    fn subcommands_map_to_scopes() {
        let cli = Cli::try_parse_from(["kirby-deploy", "accounts-pull", "-y"]).unwrap();
        assert_eq!(cli.scope(), (DeployScope::Accounts, Direction::Pull));
        assert!(cli.yes);
        assert_eq!(cli.command_name(), "accounts-pull");
    }

    #[test]
    fn last_dry_run_flag_wins() {
        let cli = Cli::try_parse_from(["kirby-deploy", "--dry-run", "--no-dry-run"]).unwrap();
        assert_eq!(cli.dry_run_override(), Some(false));
        let cli = Cli::try_parse_from(["kirby-deploy", "--no-dry-run", "--dry-run"]).unwrap();
        assert_eq!(cli.dry_run_override(), Some(true));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["kirby-deploy", "content-push", "--json", "-vv", "--color", "never"])
                .unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.color, Some(ColorWhen::Never));
    }
}
