//! PermitDesk CLI - command-line front end for the population flow.
//!
//! Stands in for the package-detail view: it assembles the record bundles
//! from a request or package file, invokes the flow, and prints whatever
//! comes back.

pub mod cli;
pub mod commands;
pub mod error;
pub mod templates;

pub use cli::{Cli, Command};
pub use error::{CliError, Result};
