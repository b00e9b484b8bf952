//! The diagnostics refresh pipeline.
//!
//! `request_lint` is called for every open/change/save event. Non-template
//! documents are cleared right away. Template documents are debounced
//! through a single process-wide timer slot: a request for any document
//! cancels whatever lint was still waiting. When the timer fires, the
//! configuration directory is resolved, the linter runs and the document's
//! diagnostics are replaced.
//!
//! A lint that has already fired runs as its own task and is not cancelled
//! by later requests. Its result is published whenever it completes, so the
//! last run to finish wins.

use std::sync::Arc;

use parking_lot::RwLock;
use tower_lsp::lsp_types::Diagnostic;
use tracing::{debug, warn};

use hbslint_core::{ConfigResolver, LintOutcome, LintRequest, LintRunner, LintSettings};

use crate::conversion::to_lsp_diagnostic;
use crate::debounce::TimerSlot;
use crate::document::Document;
use crate::sink::DiagnosticSink;

struct Inner<R, S> {
    runner: R,
    sink: S,
    settings: RwLock<LintSettings>,
    timer: TimerSlot,
}

/// Debounces lint requests and publishes their results.
pub struct LintOrchestrator<R, S> {
    inner: Arc<Inner<R, S>>,
}

impl<R, S> Clone for LintOrchestrator<R, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: LintRunner, S: DiagnosticSink> LintOrchestrator<R, S> {
    pub fn new(runner: R, sink: S, settings: LintSettings) -> Self {
        Self {
            inner: Arc::new(Inner {
                runner,
                sink,
                settings: RwLock::new(settings),
                timer: TimerSlot::new(),
            }),
        }
    }

    pub fn sink(&self) -> &S {
        &self.inner.sink
    }

    /// Returns a snapshot of the current settings.
    pub fn settings(&self) -> LintSettings {
        self.inner.settings.read().clone()
    }

    /// Replaces the settings used by lints that have not fired yet.
    pub fn update_settings(&self, settings: LintSettings) {
        *self.inner.settings.write() = settings;
    }

    /// Entry point for document events.
    pub async fn request_lint(&self, document: Document) {
        let settings = self.settings();

        if !document.path().is_some_and(|path| settings.is_template(path)) {
            debug!("Not a template, clearing diagnostics: {}", document.uri);
            self.inner.sink.set(document.uri, Vec::new()).await;
            return;
        }

        debug!("Scheduling lint for {}", document.uri);
        let this = self.clone();
        self.inner.timer.schedule(settings.debounce(), async move {
            // Detached so that a later request cancels only the timer,
            // never a linter process that is already running.
            tokio::spawn(async move {
                this.lint_now(document).await;
            });
        });
    }

    /// Aborts a lint that is still waiting for its debounce delay.
    pub fn cancel_pending(&self) -> bool {
        self.inner.timer.cancel()
    }

    /// Runs the pipeline for `document` immediately, without debouncing.
    pub async fn lint_now(&self, document: Document) {
        debug!("Linting template: {}", document.uri);

        let settings = self.settings();
        let Document { uri, path, text } = document;
        let Some((path, dir)) = path
            .as_deref()
            .and_then(|path| path.parent().map(|dir| (path, dir)))
        else {
            debug!("No parent directory for {}", uri);
            self.inner.sink.set(uri, Vec::new()).await;
            return;
        };

        let resolver = ConfigResolver::new(&settings.config_file);
        let Some(config_dir) = resolver.resolve(dir) else {
            debug!("No {} found for {}, skipping", settings.config_file, uri);
            self.inner.sink.set(uri, Vec::new()).await;
            return;
        };

        let request = match LintRequest::new(&settings, &config_dir, path, text) {
            Ok(request) => request,
            Err(e) => {
                warn!("Cannot lint {}: {}", uri, e);
                return;
            }
        };

        match self.inner.runner.run(request).await {
            LintOutcome::Issues(issues) => {
                debug!("{} issue(s) in {}", issues.len(), uri);
                let diagnostics: Vec<Diagnostic> = issues.iter().map(to_lsp_diagnostic).collect();
                self.inner.sink.set(uri, diagnostics).await;
            }
            LintOutcome::Skipped(reason) => {
                warn!("Leaving diagnostics unchanged for {}: {}", uri, reason);
            }
        }
    }

    /// Cancels pending work and removes all published diagnostics.
    pub async fn shutdown(&self) {
        self.cancel_pending();
        self.inner.sink.clear().await;
    }
}
