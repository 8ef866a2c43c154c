//! Per-panel interaction settings.

use dragbox_common::{StickId, Unit};
use serde::{Deserialize, Serialize};

/// Interaction behavior shared by every panel built from this config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Unit of declared props and emitted rects.
    pub unit: Unit,
    /// Keep panels fully inside their parent while dragging.
    pub parent_limitation: bool,
    pub draggable: bool,
    pub resizable: bool,
    /// Lock width/height to the ratio captured at resize start.
    pub aspect_ratio: bool,
    /// Resize handle edge length in pixels (valid range: 1-64).
    pub stick_size: f64,
    /// Enabled resize handles.
    pub sticks: Vec<StickId>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            unit: Unit::Px,
            parent_limitation: true,
            draggable: true,
            resizable: true,
            aspect_ratio: false,
            stick_size: 8.0,
            sticks: StickId::ALL.to_vec(),
        }
    }
}
