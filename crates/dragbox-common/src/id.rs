use serde::{Deserialize, Serialize};
use std::fmt;

/// Host-assigned identifier of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PanelId(pub u32);

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panel-{}", self.0)
    }
}

/// Opaque handle to a mounted panel element.
///
/// Handles are what the alignment registry stores and what a
/// `LayoutProbe` is asked to measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementHandle(uuid::Uuid);

impl ElementHandle {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    pub fn short(&self) -> String {
        let bytes = self.0.as_bytes();
        format!(
            "{:02x}{:02x}{:02x}{:02x}",
            bytes[0], bytes[1], bytes[2], bytes[3]
        )
    }
}

impl Default for ElementHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ElementHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "el-{}", self.short())
    }
}
