//! CLI argument parsing and command dispatch.
//!
//! Uses clap derive macros for declarative argument definition with
//! support for environment variables and global options.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use moblog::{Call, Catalog};

use crate::commands::bookmarks::BookmarksCommand;
use crate::commands::entry::{EntryCommand, KeywordsCommand};
use crate::commands::favorites::FavoritesCommand;
use crate::commands::moblog::MoblogCommand;
use crate::commands::template::TemplateCommand;
use crate::config;
use crate::output::{print_output, CallOutput, ProceduresOutput};

/// Command-line interface for the moblog RPC service.
#[derive(Parser)]
#[command(name = "moblog-cli")]
#[command(version)]
#[command(about = "Build moblog RPC calls and print exactly what they send")]
#[command(long_about = "Builds the call for any moblog RPC procedure and prints its wire \
    identifier and ordered parameter list. Upload files are read and base64-encoded \
    exactly as the client library does.")]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Commands,
}

/// Global options available to all commands.
#[derive(Args, Clone)]
pub struct GlobalOptions {
    /// TOML credentials file with `api_key`, `login` and `password`.
    ///
    /// Defaults to `moblog.toml` in the working directory when present.
    #[arg(long, env = "MOBLOG_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// API key. Overrides the credentials file.
    #[arg(long, env = "MOBLOG_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Login. Overrides the credentials file.
    #[arg(long, env = "MOBLOG_LOGIN", global = true)]
    pub login: Option<String>,

    /// Password. Overrides the credentials file.
    #[arg(long, env = "MOBLOG_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,

    /// Output JSON instead of human-readable format.
    #[arg(long = "json", global = true)]
    pub is_json: bool,

    /// Print credential parameters instead of masking them.
    #[arg(long = "reveal-credentials", global = true)]
    pub is_revealed: bool,

    /// Emit log events as JSON.
    #[arg(long = "log-json", global = true)]
    pub is_log_json: bool,

    /// Enable verbose logging.
    #[arg(short = 'v', long = "verbose", global = true)]
    pub is_verbose: bool,

    /// Suppress all logging output.
    #[arg(short = 'q', long = "quiet", global = true)]
    pub is_quiet: bool,
}

/// Top-level command groups.
#[derive(Subcommand)]
pub enum Commands {
    /// Moblog listing and settings.
    #[command(subcommand)]
    Moblog(MoblogCommand),

    /// Entry upload and deletion.
    #[command(subcommand)]
    Entry(EntryCommand),

    /// Entry keywords.
    #[command(subcommand)]
    Keywords(KeywordsCommand),

    /// Favorites lists.
    #[command(subcommand)]
    Favorites(FavoritesCommand),

    /// Bookmark lists.
    #[command(subcommand)]
    Bookmarks(BookmarksCommand),

    /// Moblog templates.
    #[command(subcommand)]
    Template(TemplateCommand),

    /// List every procedure with its wire identifier and result shape.
    Procedures,
}

impl Cli {
    /// Runs the selected command.
    pub async fn run(self) -> Result<()> {
        let global = self.global;

        if let Commands::Procedures = self.command {
            print_output(&ProceduresOutput, global.is_json);
            return Ok(());
        }

        let credentials = config::resolve_credentials(&global)?;
        tracing::debug!(login = credentials.login(), "resolved credentials");

        let call = self.command.build(&Catalog::new(&credentials)).await?;
        print_output(&CallOutput::new(&call, global.is_revealed), global.is_json);
        Ok(())
    }
}

impl Commands {
    async fn build(self, catalog: &Catalog<'_>) -> Result<Call> {
        let call = match self {
            Self::Moblog(cmd) => cmd.build(catalog),
            Self::Entry(cmd) => cmd.build(catalog).await?,
            Self::Keywords(cmd) => cmd.build(catalog),
            Self::Favorites(cmd) => cmd.build(catalog),
            Self::Bookmarks(cmd) => cmd.build(catalog),
            Self::Template(cmd) => cmd.build(catalog),
            Self::Procedures => bail!("`procedures` does not build a call"),
        };
        Ok(call)
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let cli = Cli::try_parse_from([
            "moblog-cli",
            "bookmarks",
            "delete",
            "4",
            "--json",
            "--login",
            "me",
        ])
        .unwrap();

        assert!(cli.global.is_json);
        assert_eq!(cli.global.login.as_deref(), Some("me"));
        assert!(matches!(
            cli.command,
            Commands::Bookmarks(BookmarksCommand::Delete { list_id: 4 })
        ));
    }
}
