//! Configuration schema types for dragbox.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod guides;
mod panel;
mod system;

pub use guides::*;
pub use panel::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DragboxConfig {
    pub panel: PanelConfig,
    pub guides: GuideConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
