//! ember-template-lint process runner.
//!
//! The linter is invoked as
//! `<config dir>/node_modules/.bin/ember-template-lint --json --filename <relative path>`
//! with the configuration directory as working directory and the live
//! document text on stdin.

use std::collections::HashMap;
use std::future::Future;
use std::path::{Component, Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use crate::{LintIssue, LintOutcome, LintSettings, LinterError};

/// Everything needed for one linter run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintRequest {
    /// Directory containing the configuration file; used as working directory.
    pub config_dir: PathBuf,
    /// Absolute path of the linter executable.
    pub executable: PathBuf,
    /// Document path relative to `config_dir`, `/`-separated.
    pub filename: String,
    /// Current document text.
    pub text: String,
    pub timeout: Duration,
}

impl LintRequest {
    /// Builds a request for `file`, which must live under `config_dir`.
    pub fn new(
        settings: &LintSettings,
        config_dir: &Path,
        file: &Path,
        text: impl Into<String>,
    ) -> Result<Self, LinterError> {
        Ok(Self {
            config_dir: config_dir.to_path_buf(),
            executable: config_dir.join(&settings.executable),
            filename: relative_filename(config_dir, file)?,
            text: text.into(),
            timeout: settings.timeout(),
        })
    }
}

/// Computes the `/`-separated path of `file` relative to `base`.
fn relative_filename(base: &Path, file: &Path) -> Result<String, LinterError> {
    let relative = file.strip_prefix(base).map_err(|_| {
        LinterError::invalid_path(format!(
            "{} is not under {}",
            file.display(),
            base.display()
        ))
    })?;

    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => {
                let part = part.to_str().ok_or_else(|| {
                    LinterError::invalid_path(format!("{} is not valid UTF-8", file.display()))
                })?;
                parts.push(part);
            }
            _ => {
                return Err(LinterError::invalid_path(format!(
                    "unexpected component in {}",
                    relative.display()
                )));
            }
        }
    }

    if parts.is_empty() {
        return Err(LinterError::invalid_path(format!(
            "{} is a directory",
            file.display()
        )));
    }

    Ok(parts.join("/"))
}

/// Runs the external linter for a request.
///
/// Implementations never fail: anything that goes wrong is reported as
/// [`LintOutcome::Skipped`].
pub trait LintRunner: Send + Sync + 'static {
    fn run(&self, request: LintRequest) -> impl Future<Output = LintOutcome> + Send;
}

/// Runs ember-template-lint as a child process.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateLinter;

impl TemplateLinter {
    /// Spawns the linter, feeds it the text and waits at most `request.timeout`.
    ///
    /// On timeout the child is killed.
    pub async fn execute(&self, request: &LintRequest) -> Result<Vec<LintIssue>, LinterError> {
        debug!(
            "Running {} --json --filename {} in {}",
            request.executable.display(),
            request.filename,
            request.config_dir.display()
        );

        let mut child = Command::new(&request.executable)
            .current_dir(&request.config_dir)
            .arg("--json")
            .arg("--filename")
            .arg(&request.filename)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(LinterError::Spawn)?;

        let stdin = child.stdin.take();
        let run = async {
            let feed = async {
                if let Some(mut stdin) = stdin {
                    // The linter may exit before reading everything.
                    if let Err(e) = stdin.write_all(request.text.as_bytes()).await {
                        debug!("Failed to write document to linter stdin: {}", e);
                    }
                }
            };
            let ((), output) = tokio::join!(feed, child.wait_with_output());
            output
        };

        let output = match tokio::time::timeout(request.timeout, run).await {
            Ok(output) => output?,
            Err(_) => return Err(LinterError::Timeout(request.timeout)),
        };

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            debug!("Linter stderr: {}", stderr.trim());
        }

        parse_output(output.status.code(), &output.stdout, &request.filename)
    }
}

impl LintRunner for TemplateLinter {
    async fn run(&self, request: LintRequest) -> LintOutcome {
        self.execute(&request).await.into()
    }
}

/// Interprets the linter's exit code and stdout.
///
/// - exit 0: no issues, unless stdout carries an entry for `filename`
///   (the linter reports warnings with a zero exit code).
/// - non-zero: stdout must be a JSON object mapping `filename` to issues.
/// - no exit code (killed by a signal): no result.
pub fn parse_output(
    code: Option<i32>,
    stdout: &[u8],
    filename: &str,
) -> Result<Vec<LintIssue>, LinterError> {
    let stdout = String::from_utf8_lossy(stdout);
    let stdout = stdout.trim();

    match code {
        None => Err(LinterError::Terminated),
        Some(0) => {
            if stdout.is_empty() {
                return Ok(Vec::new());
            }
            match serde_json::from_str::<HashMap<String, Vec<LintIssue>>>(stdout) {
                Ok(mut files) => Ok(files.remove(filename).unwrap_or_default()),
                Err(e) => {
                    debug!("Ignoring unparsable output from successful run: {}", e);
                    Ok(Vec::new())
                }
            }
        }
        Some(code) => {
            if stdout.is_empty() {
                return Err(LinterError::EmptyOutput { code });
            }
            let mut files: HashMap<String, Vec<LintIssue>> = serde_json::from_str(stdout)?;
            files
                .remove(filename)
                .ok_or_else(|| LinterError::MissingEntry(filename.to_string()))
        }
    }
}
