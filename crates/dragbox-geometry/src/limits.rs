//! Per-inset min/max limits for drag and resize sessions.

use dragbox_common::{Insets, StickId, VerticalSide};
use serde::{Deserialize, Serialize};

use crate::state::Snapshot;

/// Valid range for one inset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Limit {
    pub min: f64,
    pub max: f64,
}

impl Limit {
    pub const UNBOUNDED: Limit = Limit {
        min: f64::NEG_INFINITY,
        max: f64::INFINITY,
    };

    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamp `value` into the range. When the range is empty (`min > max`)
    /// the minimum wins.
    pub fn clamp(&self, value: f64) -> f64 {
        value.min(self.max).max(self.min)
    }

    pub fn intersect(&self, other: Limit) -> Limit {
        Limit {
            min: self.min.max(other.min),
            max: self.max.min(other.max),
        }
    }
}

/// Limits for all four insets of a session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Limits {
    pub top: Limit,
    pub right: Limit,
    pub bottom: Limit,
    pub left: Limit,
}

impl Limits {
    pub fn unbounded() -> Self {
        Self {
            top: Limit::UNBOUNDED,
            right: Limit::UNBOUNDED,
            bottom: Limit::UNBOUNDED,
            left: Limit::UNBOUNDED,
        }
    }

    /// Clamp each inset independently. Total; never fails.
    pub fn clamp(&self, insets: Insets) -> Insets {
        Insets {
            top: self.top.clamp(insets.top),
            right: self.right.clamp(insets.right),
            bottom: self.bottom.clamp(insets.bottom),
            left: self.left.clamp(insets.left),
        }
    }
}

/// Drag keeps the whole panel inside the parent: every inset stays in
/// `[0, parent - own size]`.
pub fn calc_drag_limitation(
    snapshot: &Snapshot,
    parent_width: f64,
    parent_height: f64,
    parent_limitation: bool,
) -> Limits {
    if !parent_limitation {
        return Limits::unbounded();
    }

    let horizontal = Limit::new(0.0, parent_width - snapshot.width);
    let vertical = Limit::new(0.0, parent_height - snapshot.height);
    Limits {
        top: vertical,
        right: horizontal,
        bottom: vertical,
        left: horizontal,
    }
}

/// Resize limits: an edge can move out to the parent edge and in until the
/// panel collapses to zero size.
///
/// With an aspect factor and an edge-midpoint stick, the moving pair is
/// further limited so that the cross-axis growth (split evenly over both
/// unaffected sides) cannot push either of those sides past the parent.
pub fn calc_resize_limitation(
    snapshot: &Snapshot,
    stick: StickId,
    aspect: Option<f64>,
    parent_limitation: bool,
) -> Limits {
    let Snapshot {
        insets,
        width,
        height,
    } = *snapshot;
    let min = if parent_limitation {
        0.0
    } else {
        f64::NEG_INFINITY
    };

    let mut limits = Limits {
        top: Limit::new(min, insets.top + height),
        right: Limit::new(min, insets.right + width),
        bottom: Limit::new(min, insets.bottom + height),
        left: Limit::new(min, insets.left + width),
    };

    let Some(factor) = aspect else {
        return limits;
    };
    if !parent_limitation || !stick.is_edge_midpoint() {
        return limits;
    }

    if stick.vertical() == VerticalSide::Middle {
        // ml / mr: width drives height.
        let shrink_room = insets.top.min(insets.bottom) * factor * 2.0;
        let grow_room = (height / 2.0) * factor * 2.0;
        limits.left = limits.left.intersect(Limit::new(
            insets.left - shrink_room,
            insets.left + grow_room,
        ));
        limits.right = limits.right.intersect(Limit::new(
            insets.right - shrink_room,
            insets.right + grow_room,
        ));
    } else {
        // tm / bm: height drives width.
        let shrink_room = insets.left.min(insets.right) / factor * 2.0;
        let grow_room = (width / 2.0 / factor) * 2.0;
        limits.top = limits
            .top
            .intersect(Limit::new(insets.top - shrink_room, insets.top + grow_room));
        limits.bottom = limits.bottom.intersect(Limit::new(
            insets.bottom - shrink_room,
            insets.bottom + grow_room,
        ));
    }

    limits
}
