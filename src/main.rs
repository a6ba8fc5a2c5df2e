mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};
use commands::{handle_check, handle_config, handle_init};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays a clean report
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    match cli.command {
        Commands::Check(args) => handle_check(args, cli.quiet),
        Commands::Init { force } => {
            handle_init(force, cli.quiet)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Config { show, validate } => handle_config(show, validate, cli.quiet),
    }
}
