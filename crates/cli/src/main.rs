// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! dbjobs - Ephemeral PR jobs on a Databricks workspace

#![cfg_attr(test, allow(clippy::unwrap_used))]

mod adapters;
mod commands;
mod completions;
mod error;
mod output;

use clap::{Parser, Subcommand};
use commands::{create, delete, run};
use completions::{generate_completions, CompletionsArgs};
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::error::CliError;

/// Log filter variable; logs go to stderr
const LOG_ENV: &str = "DBJOBS_LOG";

#[derive(Parser)]
#[command(
    name = "dbjobs",
    version,
    about = "Create, run, and clean up ephemeral PR jobs on a Databricks workspace"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a job from a JSON template
    Create(create::CreateArgs),
    /// Delete every job whose name starts with a prefix
    Delete(delete::DeleteArgs),
    /// Run a job by name and wait for it to finish
    Run(run::RunArgs),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    let result = match cli.command {
        Commands::Create(args) => create::handle(args),
        Commands::Delete(args) => delete::handle(args),
        Commands::Run(args) => run::handle(args),
        Commands::Completions(args) => {
            generate_completions::<Cli>(args.shell, &mut std::io::stdout());
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<CliError>() {
                Some(cli_err) => eprint!("{}", cli_err),
                None => eprintln!("Error: {:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
