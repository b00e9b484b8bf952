//! Configuration management for LSP server.

use serde_json::Value;
use tracing::{debug, error, info};

use hbslint_core::LintSettings;

/// Section name clients may nest settings under in `workspace/didChangeConfiguration`.
pub const SETTINGS_SECTION: &str = "hbslint";

/// Reads settings from `initializationOptions`.
///
/// Missing options yield the defaults; invalid options are logged and the
/// defaults are kept.
pub fn settings_from_init(options: Option<Value>) -> LintSettings {
    let Some(options) = options else {
        return LintSettings::default();
    };

    match LintSettings::from_value(options) {
        Ok(settings) => {
            info!("Loaded settings from initialization options");
            settings
        }
        Err(e) => {
            error!("Invalid initialization options, using defaults: {}", e);
            LintSettings::default()
        }
    }
}

/// Keys a top-level `didChangeConfiguration` payload must carry to be read
/// as settings.
const SETTINGS_KEYS: &[&str] = &[
    "extension",
    "configFile",
    "executable",
    "debounceMs",
    "timeoutMs",
];

/// Reads settings from a `workspace/didChangeConfiguration` payload.
///
/// Accepts the settings at the top level or under [`SETTINGS_SECTION`].
/// Returns `None` when the payload carries no settings for this server
/// (`null`, or an object with neither the section nor a known key) or
/// cannot be parsed, so the current settings stay in effect.
pub fn settings_from_configuration(value: Value) -> Option<LintSettings> {
    let value = match value {
        Value::Object(mut map) => match map.remove(SETTINGS_SECTION) {
            Some(section) => section,
            None if SETTINGS_KEYS.iter().any(|key| map.contains_key(*key)) => {
                Value::Object(map)
            }
            None => Value::Null,
        },
        other => other,
    };

    if value.is_null() {
        debug!("Configuration change carries no hbslint settings");
        return None;
    }

    match LintSettings::from_value(value) {
        Ok(settings) => Some(settings),
        Err(e) => {
            error!("Invalid configuration, keeping current settings: {}", e);
            None
        }
    }
}
