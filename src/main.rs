//! kirby-deploy CLI - FTP deployment for Kirby sites
//!
//! Usage: kirby-deploy [COMMAND]
//!
//! Commands:
//!   content-push     Upload the content folder
//!   content-pull     Download the content folder
//!   accounts-push    Upload user accounts
//!   accounts-pull    Download user accounts
//!   languages-push   Upload the languages folder
//!   languages-pull   Download the languages folder
//!
//! Without a command the whole site is deployed.

use std::process::ExitCode;

use clap::Parser;
use kirby_deploy::presentation::{logging, Cli};

mod commands;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match commands::run(&cli).await {
        Ok(code) => code,
        Err(err) => {
            if cli.json {
                let event = serde_json::json!({
                    "event": "error",
                    "command": cli.command_name(),
                    "message": format!("{err:#}"),
                });
                println!("{event}");
            } else {
                eprintln!("error: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}
