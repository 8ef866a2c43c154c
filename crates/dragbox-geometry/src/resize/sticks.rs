//! Resize handle styles.

use dragbox_common::{HorizontalSide, StickId, VerticalSide};
use serde::Serialize;

/// Inline style of one resize handle, relative to the panel box.
///
/// Corners are offset half their size past both edges. Edge midpoints get
/// a negative margin on the centered axis instead.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StickStyle {
    pub width: String,
    pub height: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<String>,
}

pub fn stick_style(stick: StickId, stick_size: f64) -> StickStyle {
    let size = format!("{stick_size}px");
    let offset = Some(format!("{}px", stick_size / -2.0));

    let mut style = StickStyle {
        width: size.clone(),
        height: size,
        ..StickStyle::default()
    };

    match stick.vertical() {
        VerticalSide::Top => style.top = offset.clone(),
        VerticalSide::Middle => style.margin_top = offset.clone(),
        VerticalSide::Bottom => style.bottom = offset.clone(),
    }
    match stick.horizontal() {
        HorizontalSide::Left => style.left = offset,
        HorizontalSide::Middle => style.margin_left = offset,
        HorizontalSide::Right => style.right = offset,
    }

    style
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_offsets_both_edges() {
        let style = stick_style(StickId::TopLeft, 8.0);
        assert_eq!(style.width, "8px");
        assert_eq!(style.height, "8px");
        assert_eq!(style.top.as_deref(), Some("-4px"));
        assert_eq!(style.left.as_deref(), Some("-4px"));
        assert!(style.bottom.is_none());
        assert!(style.margin_top.is_none());
    }

    #[test]
    fn midpoint_uses_margin() {
        let style = stick_style(StickId::MiddleRight, 10.0);
        assert_eq!(style.margin_top.as_deref(), Some("-5px"));
        assert_eq!(style.right.as_deref(), Some("-5px"));
        assert!(style.top.is_none());

        let style = stick_style(StickId::BottomMiddle, 10.0);
        assert_eq!(style.bottom.as_deref(), Some("-5px"));
        assert_eq!(style.margin_left.as_deref(), Some("-5px"));
    }

    #[test]
    fn serializes_only_set_sides() {
        let json = serde_json::to_value(stick_style(StickId::BottomRight, 6.0)).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert_eq!(obj["bottom"], "-3px");
        assert_eq!(obj["right"], "-3px");
    }
}
