//! Pointer input and resize handle identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerButton {
    #[default]
    Primary,
    Middle,
    Secondary,
    Other,
}

/// A pointer sample in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub button: PointerButton,
}

impl PointerEvent {
    pub fn primary(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            button: PointerButton::Primary,
        }
    }

    pub fn is_primary(&self) -> bool {
        self.button == PointerButton::Primary
    }
}

/// Which inset a stick moves on the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalSide {
    Top,
    Middle,
    Bottom,
}

/// Which inset a stick moves on the horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalSide {
    Left,
    Middle,
    Right,
}

/// A resize handle: four corners and four edge midpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StickId {
    #[serde(rename = "tl")]
    TopLeft,
    #[serde(rename = "tm")]
    TopMiddle,
    #[serde(rename = "tr")]
    TopRight,
    #[serde(rename = "mr")]
    MiddleRight,
    #[serde(rename = "br")]
    BottomRight,
    #[serde(rename = "bm")]
    BottomMiddle,
    #[serde(rename = "bl")]
    BottomLeft,
    #[serde(rename = "ml")]
    MiddleLeft,
}

impl StickId {
    pub const ALL: [StickId; 8] = [
        StickId::TopLeft,
        StickId::TopMiddle,
        StickId::TopRight,
        StickId::MiddleRight,
        StickId::BottomRight,
        StickId::BottomMiddle,
        StickId::BottomLeft,
        StickId::MiddleLeft,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StickId::TopLeft => "tl",
            StickId::TopMiddle => "tm",
            StickId::TopRight => "tr",
            StickId::MiddleRight => "mr",
            StickId::BottomRight => "br",
            StickId::BottomMiddle => "bm",
            StickId::BottomLeft => "bl",
            StickId::MiddleLeft => "ml",
        }
    }

    pub fn vertical(self) -> VerticalSide {
        match self {
            StickId::TopLeft | StickId::TopMiddle | StickId::TopRight => VerticalSide::Top,
            StickId::MiddleLeft | StickId::MiddleRight => VerticalSide::Middle,
            StickId::BottomLeft | StickId::BottomMiddle | StickId::BottomRight => {
                VerticalSide::Bottom
            }
        }
    }

    pub fn horizontal(self) -> HorizontalSide {
        match self {
            StickId::TopLeft | StickId::MiddleLeft | StickId::BottomLeft => HorizontalSide::Left,
            StickId::TopMiddle | StickId::BottomMiddle => HorizontalSide::Middle,
            StickId::TopRight | StickId::MiddleRight | StickId::BottomRight => {
                HorizontalSide::Right
            }
        }
    }

    pub fn is_edge_midpoint(self) -> bool {
        self.vertical() == VerticalSide::Middle || self.horizontal() == HorizontalSide::Middle
    }
}

impl fmt::Display for StickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StickId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StickId::ALL
            .into_iter()
            .find(|stick| stick.as_str() == s)
            .ok_or_else(|| format!("unknown stick id: {s}"))
    }
}
