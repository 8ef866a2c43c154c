//! Rectangles in the two forms the engine works with: parent-relative
//! insets and edge-coordinate boxes.

use serde::{Deserialize, Serialize};

/// Size of the container a panel is positioned in.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ParentSize {
    pub width: f64,
    pub height: f64,
}

impl ParentSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A panel rectangle as distances from each parent edge.
///
/// Width and height are never stored; they follow from the parent size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Insets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Insets {
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Build insets from a position/size pair inside `parent`.
    pub fn from_rect(parent: ParentSize, left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            right: parent.width - width - left,
            bottom: parent.height - height - top,
            left,
        }
    }

    pub fn width(&self, parent: ParentSize) -> f64 {
        parent.width - self.left - self.right
    }

    pub fn height(&self, parent: ParentSize) -> f64 {
        parent.height - self.top - self.bottom
    }

    pub fn bounding_box(&self, parent: ParentSize) -> BoundingBox {
        BoundingBox::new(self.top, self.left, self.width(parent), self.height(parent))
    }
}

/// Output rectangle reported to the host.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PanelRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Measured layout box of an element, in parent coordinates.
///
/// `right` and `bottom` are edge coordinates (`left + width`,
/// `top + height`), not insets.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
    pub right: f64,
    pub bottom: f64,
}

impl BoundingBox {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
            right: left + width,
            bottom: top + height,
        }
    }

    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }
}
