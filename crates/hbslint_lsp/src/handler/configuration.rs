//! Configuration change handler.

use tower_lsp::lsp_types::*;
use tracing::{debug, info};

use crate::ServerOrchestrator;
use crate::config::settings_from_configuration;

/// Handles the `workspace/didChangeConfiguration` notification.
pub fn handle_did_change_configuration(
    orchestrator: &ServerOrchestrator,
    params: DidChangeConfigurationParams,
) {
    debug!("Configuration changed: {:?}", params.settings);

    if let Some(settings) = settings_from_configuration(params.settings) {
        info!("Settings reloaded");
        orchestrator.update_settings(settings);
    }
}
