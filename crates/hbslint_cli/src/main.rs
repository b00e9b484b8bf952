//! hbslint CLI
//!
//! Runs the hbslint language server, or lints a single template once.

mod cli;
mod commands;
mod output;
mod utils;

use std::process::ExitCode;

use clap::Parser;
use miette::Result;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands, lint_settings};
use crate::commands::lint::run_lint;
use crate::commands::lsp::run_lsp;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr: stdout carries the LSP transport.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(has_errors) => {
            if has_errors {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    match cli.command {
        Commands::Lint {
            file,
            format,
            stdin,
            timeout_ms,
            executable,
            config_file,
        } => {
            let settings = lint_settings(timeout_ms, executable.as_deref(), config_file.as_deref());
            run_lint(&file, format, stdin, &settings)
        }
        Commands::Lsp => run_lsp().map(|_| false),
    }
}
