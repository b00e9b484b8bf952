//! # hbslint_core
//!
//! Core pieces of hbslint that do not depend on the editor protocol.
//!
//! This crate provides:
//! - Configuration discovery (`ConfigResolver`)
//! - Settings shared by the LSP server and the CLI (`LintSettings`)
//! - The ember-template-lint process runner and its output parser
//!
//! ## Example
//!
//! ```rust,ignore
//! use hbslint_core::{ConfigResolver, LintRequest, LintRunner, LintSettings, TemplateLinter};
//!
//! let settings = LintSettings::default();
//! let resolver = ConfigResolver::new(&settings.config_file);
//! if let Some(config_dir) = resolver.resolve(file.parent().unwrap()) {
//!     let request = LintRequest::new(&settings, &config_dir, &file, text)?;
//!     let outcome = TemplateLinter.run(request).await;
//! }
//! ```

mod config;
mod error;
mod issue;
pub mod resolver;
pub mod runner;

pub use config::LintSettings;
pub use error::LinterError;
pub use issue::{LintIssue, LintOutcome, SEVERITY_ERROR};
pub use resolver::ConfigResolver;
pub use runner::{LintRequest, LintRunner, TemplateLinter, parse_output};
