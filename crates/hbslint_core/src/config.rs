//! Lint settings.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Settings shared by the LSP server and the CLI.
///
/// Every field has a default, so a partial JSON object (for example the
/// LSP `initializationOptions`) is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintSettings {
    /// Suffix a document path must end with to be linted.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// File name searched for when walking up from a document.
    #[serde(default = "default_config_file")]
    pub config_file: String,

    /// Linter executable, relative to the configuration directory.
    #[serde(default = "default_executable")]
    pub executable: String,

    /// Quiet period before a scheduled lint fires.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Hard bound on a single linter run.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_extension() -> String {
    ".hbs".to_string()
}

fn default_config_file() -> String {
    ".template-lintrc.js".to_string()
}

fn default_executable() -> String {
    "node_modules/.bin/ember-template-lint".to_string()
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_timeout_ms() -> u64 {
    2000
}

impl LintSettings {
    /// Creates settings with all defaults.
    pub fn new() -> Self {
        Self {
            extension: default_extension(),
            config_file: default_config_file(),
            executable: default_executable(),
            debounce_ms: default_debounce_ms(),
            timeout_ms: default_timeout_ms(),
        }
    }

    /// Parses settings from a JSON value.
    ///
    /// `null` yields the defaults.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        if value.is_null() {
            return Ok(Self::new());
        }
        serde_json::from_value(value)
    }

    /// Returns true if `path` names a template this server lints.
    pub fn is_template(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(&self.extension))
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for LintSettings {
    fn default() -> Self {
        Self::new()
    }
}
