//! Scripted pointer scenarios: a parent size, a set of panels, and a list
//! of host and pointer steps to replay against them.

mod runner;

pub use runner::{PanelSummary, ScenarioEvent, ScenarioReport, ScenarioRunner};

use std::path::Path;

use dragbox_common::{
    PanelError, PanelId, ParentSize, PointerButton, PointerEvent, Result, StickId, Unit,
};
use dragbox_geometry::PanelProps;
use serde::{Deserialize, Serialize};

/// Demo replayed when no scenario file is given.
pub const DEMO: &str = include_str!("../../scenarios/demo.json");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub parent: ParentSize,
    pub panels: Vec<PanelSpec>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelSpec {
    pub id: PanelId,
    #[serde(default)]
    pub props: PanelProps,
    /// Panels sharing a group name align against each other.
    #[serde(default)]
    pub group: Option<String>,
}

/// Pointer position as written in a scenario.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub button: PointerButton,
}

impl From<Pointer> for PointerEvent {
    fn from(p: Pointer) -> Self {
        PointerEvent {
            x: p.x,
            y: p.y,
            button: p.button,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    PointerDown {
        panel: PanelId,
        #[serde(flatten)]
        pointer: Pointer,
    },
    StickDown {
        panel: PanelId,
        stick: StickId,
        #[serde(flatten)]
        pointer: Pointer,
        #[serde(default)]
        force: bool,
    },
    PointerMove {
        panel: PanelId,
        #[serde(flatten)]
        pointer: Pointer,
    },
    PointerUp {
        panel: PanelId,
    },
    PointerCancel {
        panel: PanelId,
    },
    /// Resize the shared parent container.
    ParentResize {
        width: f64,
        height: f64,
    },
    Props {
        panel: PanelId,
        props: PanelProps,
        #[serde(default)]
        unit: Option<Unit>,
        #[serde(default)]
        parent_limitation: Option<bool>,
    },
    Detach {
        panel: PanelId,
    },
}

impl Scenario {
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| PanelError::Other(format!("invalid scenario: {e}")))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn demo() -> Result<Self> {
        Self::from_json(DEMO)
    }
}
