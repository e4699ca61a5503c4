//! Command handlers for the binary

mod sync;

use std::process::ExitCode;

use anyhow::Result;
use kirby_deploy::presentation::Cli;

pub use sync::cmd_sync;

/// Run the parsed command line
pub async fn run(cli: &Cli) -> Result<ExitCode> {
    cmd_sync(cli).await
}
