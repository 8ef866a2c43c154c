//! Full configuration validation.
//!
//! Validates numeric ranges and the stick list. Each section has its own
//! submodule; this orchestrator calls them all and collects errors into a
//! single `ConfigError`.

mod guides;
mod helpers;
mod panel;


use crate::schema::DragboxConfig;
use dragbox_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &DragboxConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    panel::validate_panel(&mut errors, config);
    guides::validate_guides(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
