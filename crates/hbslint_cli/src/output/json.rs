//! JSON output formatter

use hbslint_core::LintIssue;
use miette::{IntoDiagnostic, Result};

pub fn output_json(filename: &str, issues: &[LintIssue]) -> Result<()> {
    let output = serde_json::json!({
        "path": filename,
        "issues": issues,
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&output).into_diagnostic()?
    );
    Ok(())
}
