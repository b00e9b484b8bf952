//! Output formatting module

mod json;
mod text;

use hbslint_core::LintIssue;
use miette::Result;

use crate::cli::OutputFormat;

pub fn output_results(filename: &str, issues: &[LintIssue], format: OutputFormat) -> Result<bool> {
    let has_errors = issues.iter().any(|issue| issue.is_error());

    match format {
        OutputFormat::Json => json::output_json(filename, issues)?,
        OutputFormat::Text => text::output_text(filename, issues),
    }

    Ok(has_errors)
}
