//! Text output formatter

use hbslint_core::LintIssue;

pub fn output_text(filename: &str, issues: &[LintIssue]) {
    if !issues.is_empty() {
        println!("\n{}:", filename);
    }

    for issue in issues {
        println!("  {}", format_issue(issue));
    }

    println!();
    println!("Found {} issue(s) in {}", issues.len(), filename);
}

fn format_issue(issue: &LintIssue) -> String {
    let severity = if issue.is_error() { "error" } else { "info" };
    let position = match (issue.line, issue.column) {
        (Some(line), Some(column)) => format!("{}:{}", line, column),
        _ => "-".to_string(),
    };

    match &issue.rule {
        Some(rule) => format!("{} {} [{}]: {}", position, severity, rule, issue.message),
        None => format!("{} {}: {}", position, severity, issue.message),
    }
}
