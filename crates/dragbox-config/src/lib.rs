//! dragbox configuration system.
//!
//! TOML-based configuration for panel interaction behavior, alignment
//! guides, and logging. All sections use sensible defaults so partial
//! configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use dragbox_config::{config_to_json, load_default};
//!
//! let config = load_default().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;

pub use schema::{
    DragboxConfig, GuideConfig, LogLevel, LoggingConfig, PanelConfig, CONFIG_SCHEMA_VERSION,
};
pub use toml_loader::{load_default, load_from_path, load_from_str};
pub use toml_writer::save_config_to_path;

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &DragboxConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
