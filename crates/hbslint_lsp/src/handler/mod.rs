//! LSP request/notification handlers.

mod configuration;
mod documents;
mod initialize;

pub use configuration::handle_did_change_configuration;
pub use documents::{handle_did_change, handle_did_close, handle_did_open, handle_did_save};
pub use initialize::{handle_initialize, handle_initialized, handle_shutdown};
