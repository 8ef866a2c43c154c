//! Whole-panel translate session: `Idle -> Dragging -> Idle`.

use dragbox_common::{Insets, PointerEvent};

use crate::limits::{calc_drag_limitation, Limits};
use crate::state::{GeometryState, Snapshot};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub start_x: f64,
    pub start_y: f64,
    pub snapshot: Snapshot,
    pub limits: Limits,
}

#[derive(Debug, Clone)]
pub struct DragController {
    draggable: bool,
    parent_limitation: bool,
    session: Option<DragSession>,
}

impl DragController {
    pub fn new(draggable: bool, parent_limitation: bool) -> Self {
        Self {
            draggable,
            parent_limitation,
            session: None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn draggable(&self) -> bool {
        self.draggable
    }

    pub fn set_draggable(&mut self, draggable: bool) {
        self.draggable = draggable;
    }

    pub fn set_parent_limitation(&mut self, parent_limitation: bool) {
        self.parent_limitation = parent_limitation;
    }

    /// Start a session. Ignored unless the button is primary and the panel
    /// is draggable. Returns whether a session started.
    pub fn begin(&mut self, state: &GeometryState, ev: PointerEvent) -> bool {
        if !ev.is_primary() || !self.draggable {
            return false;
        }

        let snapshot = state.snapshot();
        let parent = state.parent();
        let limits = calc_drag_limitation(
            &snapshot,
            parent.width,
            parent.height,
            self.parent_limitation,
        );
        self.session = Some(DragSession {
            start_x: ev.x,
            start_y: ev.y,
            snapshot,
            limits,
        });
        tracing::debug!(x = ev.x, y = ev.y, "drag started");
        true
    }

    /// Clamped insets for the pointer at `ev`, or `None` when idle.
    pub fn draft(&self, ev: PointerEvent) -> Option<Insets> {
        let session = self.session.as_ref()?;
        let dx = ev.x - session.start_x;
        let dy = ev.y - session.start_y;
        let s = session.snapshot.insets;

        let moved = Insets {
            top: s.top + dy,
            right: s.right - dx,
            bottom: s.bottom - dy,
            left: s.left + dx,
        };
        Some(session.limits.clamp(moved))
    }

    /// Recompute limits after the parent changed size mid-session.
    pub fn refresh_limits(&mut self, state: &GeometryState) {
        if let Some(session) = self.session.as_mut() {
            let parent = state.parent();
            session.snapshot.width = state.width();
            session.snapshot.height = state.height();
            session.limits = calc_drag_limitation(
                &session.snapshot,
                parent.width,
                parent.height,
                self.parent_limitation,
            );
        }
    }

    /// End the session. Returns whether one was active.
    pub fn end(&mut self) -> bool {
        let was_dragging = self.session.take().is_some();
        if was_dragging {
            tracing::debug!("drag ended");
        }
        was_dragging
    }
}
