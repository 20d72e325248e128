//! CLI command definitions and dispatch.

pub mod doctor;
pub mod validate;

use clap::{Parser, Subcommand};

/// Packcheck: validate buildpacks function images end to end.
#[derive(Parser, Debug)]
#[command(name = "pkchk", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a function image and verify the container stays running.
    Validate(validate::ValidateArgs),
    /// Check that the required external tools are installed.
    Doctor,
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Validate(args) => validate::execute(args),
        Command::Doctor => doctor::execute(),
    }
}
