//! Configuration discovery.

use std::path::{Path, PathBuf};

use tracing::debug;

/// Finds the directory that owns a template's lint configuration.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    file_name: String,
}

impl ConfigResolver {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }

    /// Walks from `start_dir` (inclusive) towards the filesystem root and
    /// returns the first directory containing the configuration file.
    ///
    /// Nothing is cached: a config file created or removed between calls is
    /// seen on the next call.
    pub fn resolve(&self, start_dir: &Path) -> Option<PathBuf> {
        for dir in start_dir.ancestors() {
            if dir.join(&self.file_name).is_file() {
                debug!("Found {} in {}", self.file_name, dir.display());
                return Some(dir.to_path_buf());
            }
        }

        debug!(
            "No {} found at or above {}",
            self.file_name,
            start_dir.display()
        );
        None
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}
