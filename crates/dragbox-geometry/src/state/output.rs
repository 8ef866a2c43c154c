//! Rect and style output in the configured unit.

use dragbox_common::{BoundingBox, PanelRect};
use serde::{Deserialize, Serialize};

use crate::unit::round4;

use super::GeometryState;

/// Positioning style for the panel element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelStyle {
    pub top: String,
    pub left: String,
    pub width: String,
    pub height: String,
}

impl GeometryState {
    /// Rect in pixels at 4-decimal precision.
    pub fn precise_rect(&self) -> PanelRect {
        PanelRect {
            left: round4(self.insets.left),
            top: round4(self.insets.top),
            width: self.width(),
            height: self.height(),
        }
    }

    /// Rect in the configured unit, rounded to whole numbers, as reported
    /// in output events.
    pub fn rect(&self) -> PanelRect {
        let rect = self.output_rect();
        PanelRect {
            left: rect.left.round(),
            top: rect.top.round(),
            width: rect.width.round(),
            height: rect.height.round(),
        }
    }

    pub fn style(&self) -> PanelStyle {
        let rect = self.output_rect();
        let suffix = self.unit().suffix();
        PanelStyle {
            top: format!("{}{suffix}", rect.top),
            left: format!("{}{suffix}", rect.left),
            width: format!("{}{suffix}", rect.width),
            height: format!("{}{suffix}", rect.height),
        }
    }

    /// The panel's box in parent pixel coordinates.
    pub fn bounding_box(&self) -> BoundingBox {
        self.insets.bounding_box(self.parent)
    }

    fn output_rect(&self) -> PanelRect {
        let precise = self.precise_rect();
        let (pw, ph) = (self.parent.width, self.parent.height);
        PanelRect {
            left: self.converter.to_output(precise.left, pw),
            top: self.converter.to_output(precise.top, ph),
            width: self.converter.to_output(precise.width, pw),
            height: self.converter.to_output(precise.height, ph),
        }
    }
}
