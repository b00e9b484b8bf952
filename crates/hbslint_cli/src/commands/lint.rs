//! Lint command implementation

use std::io::Read;
use std::path::{Path, PathBuf};

use miette::{IntoDiagnostic, Result, miette};
use tracing::info;

use hbslint_core::{ConfigResolver, LintRequest, LintSettings, TemplateLinter};

use crate::cli::OutputFormat;
use crate::output::output_results;
use crate::utils::create_tokio_runtime;

/// Lints `file` once. Returns true if any error-severity issue was found.
///
/// Non-templates and templates without a configuration are skipped, not
/// treated as failures.
pub fn run_lint(
    file: &Path,
    format: OutputFormat,
    read_stdin: bool,
    settings: &LintSettings,
) -> Result<bool> {
    if !settings.is_template(file) {
        eprintln!(
            "Skipping {}: not a {} template",
            file.display(),
            settings.extension
        );
        return Ok(false);
    }

    let file = real_path(file)?;

    let text = if read_stdin {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .into_diagnostic()?;
        text
    } else {
        std::fs::read_to_string(&file)
            .map_err(|e| miette!("Failed to read {}: {}", file.display(), e))?
    };

    let dir = file
        .parent()
        .ok_or_else(|| miette!("{} has no parent directory", file.display()))?;

    let resolver = ConfigResolver::new(&settings.config_file);
    let Some(config_dir) = resolver.resolve(dir) else {
        eprintln!(
            "Skipping {}: no {} found",
            file.display(),
            settings.config_file
        );
        return Ok(false);
    };
    info!(
        "Using config: {}",
        config_dir.join(&settings.config_file).display()
    );

    let request = LintRequest::new(settings, &config_dir, &file, text).into_diagnostic()?;
    let issues = create_tokio_runtime()?
        .block_on(TemplateLinter.execute(&request))
        .into_diagnostic()?;

    output_results(&request.filename, &issues, format)
}

/// Absolute path of `file` with `..` and symlinks in its directory resolved,
/// so the configuration search walks the real ancestors.
fn real_path(file: &Path) -> Result<PathBuf> {
    let name = file
        .file_name()
        .ok_or_else(|| miette!("{} does not name a file", file.display()))?;
    let dir = match file.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let dir = std::fs::canonicalize(dir)
        .map_err(|e| miette!("Failed to resolve {}: {}", dir.display(), e))?;
    Ok(dir.join(name))
}
