//! Edge and center proximity tests between a moving box and a target box.

use dragbox_common::BoundingBox;

/// Gap used when a caller does not configure one.
pub const DEFAULT_COMPARATOR_GAP: f64 = 3.0;

/// Number of proximity tests per axis.
pub const TESTS_PER_AXIS: usize = 5;

/// Outcome of one proximity test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityTest {
    pub near: bool,
    /// Guide line relative to the moving box's near edge (top or left).
    pub offset: f64,
    /// Guide line in parent coordinates.
    pub position: f64,
    /// Near-edge coordinate that would make the tested edges flush.
    pub drag_value: f64,
}

/// All ten tests for one moving/target pair.
///
/// Vertical order: top-top, bottom-top, center-center, bottom-bottom,
/// top-bottom. Horizontal order: left-left, left-right, center-center,
/// right-right, right-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conditions {
    pub vertical: [ProximityTest; TESTS_PER_AXIS],
    pub horizontal: [ProximityTest; TESTS_PER_AXIS],
}

pub fn is_nearly(drag_value: f64, target_value: f64, gap: f64) -> bool {
    (drag_value - target_value).abs() <= gap
}

pub fn compare(moving: &BoundingBox, target: &BoundingBox, gap: f64) -> Conditions {
    let m = moving;
    let t = target;
    let test = |near_edge: f64, target_edge: f64, offset: f64, position: f64, drag_value: f64| {
        ProximityTest {
            near: is_nearly(near_edge, target_edge, gap),
            offset,
            position,
            drag_value,
        }
    };

    let vertical = [
        test(m.top, t.top, 0.0, t.top, t.top),
        test(m.bottom, t.top, m.height, t.top, t.top - m.height),
        test(
            m.center_y(),
            t.center_y(),
            m.height / 2.0,
            t.center_y(),
            t.center_y() - m.height / 2.0,
        ),
        test(m.bottom, t.bottom, m.height, t.bottom, t.bottom - m.height),
        test(m.top, t.bottom, 0.0, t.bottom, t.bottom),
    ];

    let horizontal = [
        test(m.left, t.left, 0.0, t.left, t.left),
        test(m.left, t.right, 0.0, t.right, t.right),
        test(
            m.center_x(),
            t.center_x(),
            m.width / 2.0,
            t.center_x(),
            t.center_x() - m.width / 2.0,
        ),
        test(m.right, t.right, m.width, t.right, t.right - m.width),
        test(m.right, t.left, m.width, t.left, t.left - m.width),
    ];

    Conditions {
        vertical,
        horizontal,
    }
}
