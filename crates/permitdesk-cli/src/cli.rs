//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use permitdesk_llm::gemini::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use std::path::PathBuf;

/// PermitDesk CLI - generate form data for permit packages.
#[derive(Debug, Parser)]
#[command(name = "permitdesk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the population flow for one request
    Populate(PopulateArgs),

    /// Validate a request file without calling the provider
    Validate(ValidateArgs),

    /// List the built-in PDF template library
    Templates,
}

/// Arguments for the populate command.
#[derive(Debug, Parser)]
pub struct PopulateArgs {
    /// Request file in wire form (customerData, contractorData,
    /// propertyData, permitData, pdfTemplateDataUri)
    #[arg(short, long, conflicts_with_all = ["package", "template_id"])]
    pub request: Option<PathBuf>,

    /// Permit package file; requires --template-id
    #[arg(short, long, requires = "template_id")]
    pub package: Option<PathBuf>,

    /// Template to use from the built-in library (see `permitdesk templates`)
    #[arg(short, long)]
    pub template_id: Option<String>,

    /// Provider endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Model name
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Environment variable holding the provider API key
    #[arg(long, default_value = "GEMINI_API_KEY")]
    pub api_key_env: String,

    /// Provider timeout in seconds
    #[arg(long, default_value_t = 60)]
    pub timeout_secs: u64,

    /// Do not echo the template back in the result
    #[arg(long)]
    pub no_echo: bool,

    /// Use a canned response instead of calling the provider
    #[arg(long)]
    pub offline: bool,

    /// Print the full result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the validate command.
#[derive(Debug, Parser)]
pub struct ValidateArgs {
    /// Request file to check
    #[arg(short, long)]
    pub request: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_populate_with_request_file() {
        let cli = Cli::try_parse_from(["permitdesk", "populate", "--request", "req.json"]).unwrap();
        match cli.command {
            Command::Populate(args) => {
                assert_eq!(args.request.unwrap(), PathBuf::from("req.json"));
                assert_eq!(args.endpoint, DEFAULT_ENDPOINT);
                assert!(!args.offline);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_request_conflicts_with_package() {
        let result = Cli::try_parse_from([
            "permitdesk",
            "populate",
            "--request",
            "req.json",
            "--package",
            "pkg.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_package_requires_template_id() {
        let result = Cli::try_parse_from(["permitdesk", "populate", "--package", "pkg.json"]);
        assert!(result.is_err());

        let result = Cli::try_parse_from([
            "permitdesk",
            "populate",
            "--package",
            "pkg.json",
            "--template-id",
            "tpl_001",
        ]);
        assert!(result.is_ok());
    }
}
