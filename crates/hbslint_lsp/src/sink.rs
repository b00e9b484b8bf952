//! Diagnostic publishing.

use std::collections::HashSet;
use std::future::Future;

use parking_lot::Mutex;
use tower_lsp::Client;
use tower_lsp::lsp_types::{Diagnostic, Url};

/// Destination for diagnostics, keyed by document URI.
pub trait DiagnosticSink: Send + Sync + 'static {
    /// Replaces the full diagnostic list of one document.
    fn set(&self, uri: Url, diagnostics: Vec<Diagnostic>) -> impl Future<Output = ()> + Send;

    /// Removes diagnostics for every document.
    fn clear(&self) -> impl Future<Output = ()> + Send;
}

/// Publishes diagnostics to the LSP client.
///
/// LSP has no "clear everything" notification, so the sink remembers which
/// URIs currently have diagnostics and publishes an empty list to each on
/// [`DiagnosticSink::clear`].
pub struct ClientSink {
    client: Client,
    published: Mutex<HashSet<Url>>,
}

impl ClientSink {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            published: Mutex::new(HashSet::new()),
        }
    }
}

impl DiagnosticSink for ClientSink {
    async fn set(&self, uri: Url, diagnostics: Vec<Diagnostic>) {
        {
            let mut published = self.published.lock();
            if diagnostics.is_empty() {
                published.remove(&uri);
            } else {
                published.insert(uri.clone());
            }
        }

        self.client.publish_diagnostics(uri, diagnostics, None).await;
    }

    async fn clear(&self) {
        let uris: Vec<Url> = self.published.lock().drain().collect();
        for uri in uris {
            self.client.publish_diagnostics(uri, Vec::new(), None).await;
        }
    }
}
