//! Lint issue types reported by ember-template-lint.

use serde::{Deserialize, Serialize};

use crate::LinterError;

/// Severity code ember-template-lint uses for errors. Everything else is
/// treated as informational.
pub const SEVERITY_ERROR: i64 = 2;

/// One finding from the linter's `--json` output.
///
/// Fatal template parse errors come through as issues with no `rule`,
/// `line` or `column`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintIssue {
    /// Rule identifier, e.g. `no-bare-strings`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,

    pub message: String,

    #[serde(default)]
    pub severity: i64,

    /// 1-based line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,

    /// 0-based start column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
}

impl LintIssue {
    /// Creates an error-severity issue with no rule and no position.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            rule: None,
            message: message.into(),
            severity: SEVERITY_ERROR,
            line: None,
            column: None,
        }
    }

    pub fn with_rule(mut self, rule: impl Into<String>) -> Self {
        self.rule = Some(rule.into());
        self
    }

    pub fn with_severity(mut self, severity: i64) -> Self {
        self.severity = severity;
        self
    }

    pub fn with_position(mut self, line: u32, column: u32) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == SEVERITY_ERROR
    }
}

/// Result of one linter run.
#[derive(Debug)]
pub enum LintOutcome {
    /// The linter ran; publish these (possibly none).
    Issues(Vec<LintIssue>),
    /// No result could be determined; leave existing diagnostics alone.
    Skipped(LinterError),
}

impl LintOutcome {
    pub fn issues(&self) -> Option<&[LintIssue]> {
        match self {
            LintOutcome::Issues(issues) => Some(issues),
            LintOutcome::Skipped(_) => None,
        }
    }
}

impl From<Result<Vec<LintIssue>, LinterError>> for LintOutcome {
    fn from(result: Result<Vec<LintIssue>, LinterError>) -> Self {
        match result {
            Ok(issues) => LintOutcome::Issues(issues),
            Err(e) => LintOutcome::Skipped(e),
        }
    }
}
