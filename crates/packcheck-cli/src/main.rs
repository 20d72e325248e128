//! # pkchk, the Packcheck CLI
//!
//! Validates buildpacks-produced serverless function images.
//! Builds the image, runs it, and verifies the container stays up.

mod commands;
mod output;

use clap::Parser;

use crate::commands::Cli;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
        )
        .init();

    let cli = Cli::parse();
    commands::execute(cli)
}
