//! Document lifecycle handlers (open, change, save, close).

use tower_lsp::lsp_types::*;
use tracing::debug;

use crate::document::Document;
use crate::state::SharedState;

/// Handles the `textDocument/didOpen` notification.
pub fn handle_did_open(state: &SharedState, params: DidOpenTextDocumentParams) -> Document {
    debug!("Document opened: {}", params.text_document.uri);

    let uri = params.text_document.uri;
    let text = params.text_document.text;
    state.store(uri.clone(), text.clone());

    Document::new(uri, text)
}

/// Handles the `textDocument/didChange` notification.
///
/// Returns `None` if the notification carries no change.
pub fn handle_did_change(
    state: &SharedState,
    params: DidChangeTextDocumentParams,
) -> Option<Document> {
    debug!("Document changed: {}", params.text_document.uri);

    // FULL sync: the last change holds the whole text.
    let change = params.content_changes.into_iter().last()?;
    let uri = params.text_document.uri;
    state.store(uri.clone(), change.text.clone());

    Some(Document::new(uri, change.text))
}

/// Handles the `textDocument/didSave` notification.
///
/// Uses the saved text when the client includes it, otherwise the stored text.
pub fn handle_did_save(state: &SharedState, params: DidSaveTextDocumentParams) -> Option<Document> {
    debug!("Document saved: {}", params.text_document.uri);

    let uri = params.text_document.uri;
    let text = match params.text {
        Some(text) => {
            state.store(uri.clone(), text.clone());
            text
        }
        None => state.text(&uri)?,
    };

    Some(Document::new(uri, text))
}

/// Handles the `textDocument/didClose` notification.
pub fn handle_did_close(state: &SharedState, params: DidCloseTextDocumentParams) -> Url {
    debug!("Document closed: {}", params.text_document.uri);

    state.remove(&params.text_document.uri);
    params.text_document.uri
}
