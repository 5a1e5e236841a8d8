//! CLI module for tvdash.
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing
//! - Version and usage display
//! - The dashboard commands that load data from the API
//!
//! # Usage
//!
//! ```ignore
//! use tvdash::cli::{parse_args, run_cli_command, run_dashboard_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(&command) {
//!     return result;
//! }
//! run_dashboard_command(&store, &command).await?;
//! ```

pub mod args;
pub mod dashboard;
pub mod version;

pub use args::{parse_args, CliCommand, USAGE};
pub use dashboard::run_dashboard_command;
pub use version::{handle_version_command, VERSION};

use color_eyre::eyre::eyre;
use color_eyre::Result;

/// Run a CLI command that needs no network access.
///
/// # Returns
///
/// * `None` - If the command needs the API (see [`run_dashboard_command`])
/// * `Some(Ok(()))` - If a local command executed successfully
/// * `Some(Err(e))` - If the arguments were invalid
pub fn run_cli_command(command: &CliCommand) -> Option<Result<()>> {
    match command {
        CliCommand::Version => {
            handle_version_command();
            Some(Ok(()))
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            Some(Ok(()))
        }
        CliCommand::Invalid(message) => {
            eprintln!("{}\n\n{}", message, USAGE);
            Some(Err(eyre!("{}", message)))
        }
        _ => None,
    }
}
