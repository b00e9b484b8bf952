//! Runs `TemplateLinter` against shell scripts standing in for ember-template-lint.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::time::{Duration, Instant};

use hbslint_core::{LintOutcome, LintRequest, LintRunner, LintSettings, LinterError, TemplateLinter};
use tempfile::TempDir;

fn install_linter(root: &Path, script: &str) {
    let bin = root.join("node_modules").join(".bin");
    fs::create_dir_all(&bin).unwrap();
    let path = bin.join("ember-template-lint");
    fs::write(&path, format!("#!/bin/sh\n{script}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
}

fn project() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(".template-lintrc.js"), "module.exports = {};").unwrap();
    fs::create_dir_all(dir.path().join("app/templates")).unwrap();
    dir
}

fn request(root: &Path, settings: &LintSettings, text: &str) -> LintRequest {
    let file = root.join("app/templates/application.hbs");
    LintRequest::new(settings, root, &file, text).unwrap()
}

#[tokio::test]
async fn passes_arguments_cwd_and_stdin() {
    let dir = project();
    install_linter(
        dir.path(),
        r#"cat > received.txt
printf '%s\n' "$@" > args.txt
exit 0"#,
    );

    let settings = LintSettings::default();
    let outcome = TemplateLinter
        .run(request(dir.path(), &settings, "<h1>{{title}}</h1>"))
        .await;

    assert_eq!(outcome.issues().map(|i| i.len()), Some(0));

    let received = fs::read_to_string(dir.path().join("received.txt")).unwrap();
    assert_eq!(received, "<h1>{{title}}</h1>");

    let args = fs::read_to_string(dir.path().join("args.txt")).unwrap();
    assert_eq!(args, "--json\n--filename\napp/templates/application.hbs\n");
}

#[tokio::test]
async fn reports_issues_on_nonzero_exit() {
    let dir = project();
    install_linter(
        dir.path(),
        r#"cat > /dev/null
echo '{"app/templates/application.hbs": [{"rule": "no-bare-strings", "message": "Non-translated string used", "severity": 2, "line": 1, "column": 4}]}'
exit 1"#,
    );

    let settings = LintSettings::default();
    let outcome = TemplateLinter
        .run(request(dir.path(), &settings, "<h1>Hello</h1>"))
        .await;

    let issues = outcome.issues().expect("expected issues");
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].rule.as_deref(), Some("no-bare-strings"));
    assert_eq!(issues[0].line, Some(1));
    assert_eq!(issues[0].column, Some(4));
}

#[tokio::test]
async fn missing_executable_is_skipped() {
    let dir = project();

    let settings = LintSettings::default();
    let outcome = TemplateLinter
        .run(request(dir.path(), &settings, "<div></div>"))
        .await;

    assert!(matches!(outcome, LintOutcome::Skipped(LinterError::Spawn(_))));
}

#[tokio::test]
async fn slow_linter_times_out() {
    let dir = project();
    install_linter(dir.path(), "sleep 5\necho '{}'\nexit 1");

    let settings = LintSettings {
        timeout_ms: 200,
        ..LintSettings::default()
    };

    let start = Instant::now();
    let outcome = TemplateLinter
        .run(request(dir.path(), &settings, "<div></div>"))
        .await;

    assert!(matches!(outcome, LintOutcome::Skipped(LinterError::Timeout(_))));
    assert!(
        start.elapsed() < Duration::from_secs(3),
        "timeout took {:?}",
        start.elapsed()
    );
}

#[tokio::test]
async fn crash_without_output_is_skipped() {
    let dir = project();
    install_linter(dir.path(), "echo 'boom' >&2\nexit 1");

    let settings = LintSettings::default();
    let outcome = TemplateLinter
        .run(request(dir.path(), &settings, "<div></div>"))
        .await;

    assert!(matches!(
        outcome,
        LintOutcome::Skipped(LinterError::EmptyOutput { code: 1 })
    ));
}
