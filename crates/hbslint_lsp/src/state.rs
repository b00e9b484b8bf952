//! LSP Backend state management.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tower_lsp::lsp_types::Url;
use tracing::error;

/// Shared backend state.
#[derive(Debug, Default)]
pub(crate) struct BackendState {
    /// Latest text of every open document.
    pub documents: RwLock<HashMap<Url, String>>,
}

impl BackendState {
    /// Creates a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self, uri: Url, text: String) {
        match self.documents.write() {
            Ok(mut docs) => {
                docs.insert(uri, text);
            }
            Err(e) => error!("Documents lock poisoned: {}", e),
        }
    }

    pub fn text(&self, uri: &Url) -> Option<String> {
        match self.documents.read() {
            Ok(docs) => docs.get(uri).cloned(),
            Err(e) => {
                error!("Documents lock poisoned: {}", e);
                None
            }
        }
    }

    pub fn remove(&self, uri: &Url) {
        match self.documents.write() {
            Ok(mut docs) => {
                docs.remove(uri);
            }
            Err(e) => error!("Documents lock poisoned: {}", e),
        }
    }
}

/// Type alias for shared state.
pub(crate) type SharedState = Arc<BackendState>;
