//! hbslint LSP Server
//!
//! Language Server Protocol implementation that runs ember-template-lint on
//! Handlebars templates and publishes its findings as diagnostics.

use std::sync::Arc;

use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer, LspService, Server};
use tracing::info;

use hbslint_core::{LintSettings, TemplateLinter};

mod config;
mod conversion;
mod debounce;
mod document;
mod handler;
mod orchestrator;
mod sink;
mod state;

pub use config::{SETTINGS_SECTION, settings_from_configuration, settings_from_init};
pub use conversion::{DIAGNOSTIC_SOURCE, issue_range, to_lsp_diagnostic};
pub use debounce::TimerSlot;
pub use document::Document;
pub use orchestrator::LintOrchestrator;
pub use sink::{ClientSink, DiagnosticSink};

use state::{BackendState, SharedState};

/// The orchestrator the server runs: real linter process, LSP client sink.
pub type ServerOrchestrator = LintOrchestrator<TemplateLinter, ClientSink>;

/// The LSP backend for hbslint.
#[derive(Clone)]
pub struct Backend {
    /// LSP client for sending notifications.
    client: Client,
    /// Open documents.
    state: SharedState,
    orchestrator: ServerOrchestrator,
}

impl Backend {
    /// Creates a new backend with the given client.
    ///
    /// Settings may be replaced during `initialize`.
    pub fn new(client: Client) -> Self {
        Self::with_settings(client, LintSettings::default())
    }

    pub fn with_settings(client: Client, settings: LintSettings) -> Self {
        let orchestrator =
            LintOrchestrator::new(TemplateLinter, ClientSink::new(client.clone()), settings);

        Self {
            client,
            state: Arc::new(BackendState::new()),
            orchestrator,
        }
    }

    pub fn orchestrator(&self) -> &ServerOrchestrator {
        &self.orchestrator
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        handler::handle_initialize(&self.orchestrator, params).await
    }

    async fn initialized(&self, _: InitializedParams) {
        handler::handle_initialized(&self.client).await;
    }

    async fn shutdown(&self) -> Result<()> {
        handler::handle_shutdown(&self.orchestrator).await
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let document = handler::handle_did_open(&self.state, params);
        self.orchestrator.request_lint(document).await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        if let Some(document) = handler::handle_did_change(&self.state, params) {
            self.orchestrator.request_lint(document).await;
        }
    }

    async fn did_save(&self, params: DidSaveTextDocumentParams) {
        if let Some(document) = handler::handle_did_save(&self.state, params) {
            self.orchestrator.request_lint(document).await;
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = handler::handle_did_close(&self.state, params);
        self.orchestrator.sink().set(uri, Vec::new()).await;
    }

    async fn did_change_configuration(&self, params: DidChangeConfigurationParams) {
        handler::handle_did_change_configuration(&self.orchestrator, params);
    }
}

/// Starts the LSP server.
///
/// This function does not return unless an error occurs or the server shuts down.
pub async fn run() {
    info!("hbslint LSP server starting...");

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(Backend::new);
    Server::new(stdin, stdout, socket).serve(service).await;
}
