//! Documents handed to the orchestrator.

use std::path::{Path, PathBuf};

use tower_lsp::lsp_types::Url;

/// An open editor document: identity, file path and live text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub uri: Url,
    /// `None` for URIs that are not `file:` URIs (e.g. `untitled:`).
    pub path: Option<PathBuf>,
    pub text: String,
}

impl Document {
    pub fn new(uri: Url, text: impl Into<String>) -> Self {
        let path = uri.to_file_path().ok();
        Self {
            uri,
            path,
            text: text.into(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
