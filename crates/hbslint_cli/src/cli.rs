//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use hbslint_core::LintSettings;

/// hbslint - ember-template-lint diagnostics for editors
#[derive(Parser)]
#[command(name = "hbslint")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Lint a single template once
    Lint {
        /// Template file to lint
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Read the template text from stdin instead of the file
        #[arg(long)]
        stdin: bool,

        /// Kill the linter after this many milliseconds
        #[arg(long, value_name = "MS")]
        timeout_ms: Option<u64>,

        /// Linter executable, relative to the configuration directory
        #[arg(long, value_name = "PATH")]
        executable: Option<String>,

        /// Configuration file name to search for
        #[arg(long, value_name = "NAME")]
        config_file: Option<String>,
    },

    /// Start the LSP server
    Lsp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Applies command line overrides on top of the default settings.
pub fn lint_settings(
    timeout_ms: Option<u64>,
    executable: Option<&str>,
    config_file: Option<&str>,
) -> LintSettings {
    let mut settings = LintSettings::default();
    if let Some(timeout_ms) = timeout_ms {
        settings.timeout_ms = timeout_ms;
    }
    if let Some(executable) = executable {
        settings.executable = executable.to_string();
    }
    if let Some(config_file) = config_file {
        settings.config_file = config_file.to_string();
    }
    settings
}
