//! Initialize and shutdown handlers.

use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tracing::info;

use crate::ServerOrchestrator;
use crate::config::settings_from_init;

/// Handles the `initialize` LSP request.
pub async fn handle_initialize(
    orchestrator: &ServerOrchestrator,
    params: InitializeParams,
) -> Result<InitializeResult> {
    info!("hbslint LSP server initializing...");

    if let Some(root) = params.root_uri.as_ref() {
        info!("Workspace root: {}", root);
    }
    orchestrator.update_settings(settings_from_init(params.initialization_options));

    Ok(InitializeResult {
        capabilities: ServerCapabilities {
            text_document_sync: Some(TextDocumentSyncCapability::Options(
                TextDocumentSyncOptions {
                    open_close: Some(true),
                    change: Some(TextDocumentSyncKind::FULL),
                    save: Some(TextDocumentSyncSaveOptions::SaveOptions(SaveOptions {
                        include_text: Some(true),
                    })),
                    ..Default::default()
                },
            )),
            ..Default::default()
        },
        server_info: Some(ServerInfo {
            name: "hbslint-lsp".to_string(),
            version: Some(env!("CARGO_PKG_VERSION").to_string()),
        }),
    })
}

/// Handles the `initialized` LSP notification.
pub async fn handle_initialized(client: &tower_lsp::Client) {
    client
        .log_message(MessageType::INFO, "hbslint LSP server initialized!")
        .await;
}

/// Handles the `shutdown` LSP request.
pub async fn handle_shutdown(orchestrator: &ServerOrchestrator) -> Result<()> {
    info!("hbslint LSP server shutting down...");
    orchestrator.shutdown().await;
    Ok(())
}
