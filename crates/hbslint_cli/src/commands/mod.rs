//! Subcommand implementations

pub mod lint;
pub mod lsp;
