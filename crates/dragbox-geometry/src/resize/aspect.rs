//! Aspect-ratio correction of a clamped resize draft.

use dragbox_common::{HorizontalSide, Insets, ParentSize, StickId, VerticalSide};

use crate::limits::Limits;
use crate::state::Snapshot;

/// Re-derive the insets the stick does not move so that
/// `width / height == factor`.
///
/// Edge midpoints spread the cross-axis change evenly over both sides.
/// Corners keep the opposite corner fixed and let the dominant axis decide
/// the size; if the derived inset hits its limit the other axis is shrunk
/// to match. A factor that is not a positive finite ratio leaves the draft
/// as is.
pub fn correct(
    draft: Insets,
    stick: StickId,
    factor: f64,
    snapshot: &Snapshot,
    parent: ParentSize,
    limits: &Limits,
) -> Insets {
    if !(factor.is_finite() && factor > 0.0) {
        return draft;
    }

    let mut out = draft;
    let new_width = draft.width(parent);
    let new_height = draft.height(parent);

    match (stick.vertical(), stick.horizontal()) {
        (_, HorizontalSide::Middle) => {
            let delta_height = new_height - snapshot.height;
            out.left -= delta_height * factor / 2.0;
            out.right -= delta_height * factor / 2.0;
        }
        (VerticalSide::Middle, _) => {
            let delta_width = new_width - snapshot.width;
            out.top -= delta_width / factor / 2.0;
            out.bottom -= delta_width / factor / 2.0;
        }
        (vertical, horizontal) => {
            if new_width / new_height > factor {
                let height = new_width / factor;
                set_vertical(&mut out, vertical, parent, height);
                if clamp_vertical(&mut out, vertical, limits) {
                    let width = out.height(parent) * factor;
                    set_horizontal(&mut out, horizontal, parent, width);
                }
            } else {
                let width = new_height * factor;
                set_horizontal(&mut out, horizontal, parent, width);
                if clamp_horizontal(&mut out, horizontal, limits) {
                    let height = out.width(parent) / factor;
                    set_vertical(&mut out, vertical, parent, height);
                }
            }
        }
    }

    out
}

fn set_vertical(insets: &mut Insets, side: VerticalSide, parent: ParentSize, height: f64) {
    match side {
        VerticalSide::Top => insets.top = parent.height - insets.bottom - height,
        _ => insets.bottom = parent.height - insets.top - height,
    }
}

fn set_horizontal(insets: &mut Insets, side: HorizontalSide, parent: ParentSize, width: f64) {
    match side {
        HorizontalSide::Left => insets.left = parent.width - insets.right - width,
        _ => insets.right = parent.width - insets.left - width,
    }
}

/// Returns whether the clamp changed the inset.
fn clamp_vertical(insets: &mut Insets, side: VerticalSide, limits: &Limits) -> bool {
    let (value, limit) = match side {
        VerticalSide::Top => (&mut insets.top, limits.top),
        _ => (&mut insets.bottom, limits.bottom),
    };
    let clamped = limit.clamp(*value);
    let changed = clamped != *value;
    *value = clamped;
    changed
}

fn clamp_horizontal(insets: &mut Insets, side: HorizontalSide, limits: &Limits) -> bool {
    let (value, limit) = match side {
        HorizontalSide::Left => (&mut insets.left, limits.left),
        _ => (&mut insets.right, limits.right),
    };
    let clamped = limit.clamp(*value);
    let changed = clamped != *value;
    *value = clamped;
    changed
}
