//! Moblog CLI entry point.
//!
//! This binary is the composition root of the workspace. Responsibilities:
//!
//! 1. **Parse arguments**: one subcommand per remote procedure, grouped by
//!    service area (`moblog`, `entry`, `keywords`, `favorites`, `bookmarks`,
//!    `template`).
//! 2. **Wire observability**: configure `tracing-subscriber` on stderr, in
//!    compact or JSON form. All `tracing` events emitted by the workspace
//!    crates flow through this subscriber.
//! 3. **Resolve credentials**: flags and `MOBLOG_*` environment variables
//!    first, then the TOML credentials file.
//! 4. **Build and print the call**: the exact procedure identifier and
//!    ordered parameter list the client would send, with credentials masked
//!    unless `--reveal-credentials` is given.
//!
//! # Usage
//!
//! ```bash
//! moblog-cli --config moblog.toml moblog update 42 --domain foo --secret-word bar \
//!     --title T --description D --approval-type C --allow-comments Y
//!
//! MOBLOG_API_KEY=... MOBLOG_LOGIN=... MOBLOG_PASSWORD=... \
//!     moblog-cli --json entry update 3 photo.jpg --title Sunset --file-type JPG
//!
//! moblog-cli procedures
//! ```

mod cli;
mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;

/// Initialize tracing subscriber with environment-based filtering.
///
/// - `quiet`: Suppress all logging output (for scripting)
/// - `verbose`: Enable debug-level logging
/// - `json`: Emit one JSON object per event
fn init_tracing(quiet: bool, verbose: bool, json: bool) {
    let filter = if quiet {
        EnvFilter::new("off")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if json {
        builder.json().init();
    } else {
        builder.compact().init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.global.is_quiet, cli.global.is_verbose, cli.global.is_log_json);

    cli.run().await
}
