//! PermitDesk CLI - command-line front end for the population flow.

use clap::Parser;
use permitdesk_cli::commands;
use permitdesk_cli::{Cli, Command};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Populate(args) => commands::execute_populate(args).await?,
        Command::Validate(args) => commands::execute_validate(args)?,
        Command::Templates => commands::execute_templates()?,
    }

    Ok(())
}
