//! LSP type conversion utilities.

use tower_lsp::lsp_types::{Diagnostic, DiagnosticSeverity, NumberOrString, Position, Range};

use hbslint_core::LintIssue;

/// Value of `Diagnostic::source` for everything this server publishes.
pub const DIAGNOSTIC_SOURCE: &str = "ember-template-lint";

/// Converts a lint issue to an LSP diagnostic.
///
/// Issues without a position (fatal parse errors) get the empty range at the
/// start of the document.
pub fn to_lsp_diagnostic(issue: &LintIssue) -> Diagnostic {
    let severity = if issue.is_error() {
        DiagnosticSeverity::ERROR
    } else {
        DiagnosticSeverity::INFORMATION
    };

    Diagnostic {
        range: issue_range(issue).unwrap_or_default(),
        severity: Some(severity),
        code: issue.rule.clone().map(NumberOrString::String),
        source: Some(DIAGNOSTIC_SOURCE.to_string()),
        message: issue.message.clone(),
        ..Default::default()
    }
}

/// One-character range at the issue position, if both line and column are known.
///
/// ember-template-lint lines are 1-based, columns 0-based.
pub fn issue_range(issue: &LintIssue) -> Option<Range> {
    let line = issue.line?.saturating_sub(1);
    let column = issue.column?;
    Some(Range::new(
        Position::new(line, column),
        Position::new(line, column.saturating_add(1)),
    ))
}
