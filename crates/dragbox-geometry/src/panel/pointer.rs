//! Pointer event routing for Panel.

use dragbox_common::{PanelError, PanelEvent, PanelRect, PointerEvent, Result, StickId};

use crate::guides::{LayoutProbe, SnapMode};

use super::Panel;

impl Panel {
    /// Pointer pressed on the panel body. Returns whether a drag started.
    ///
    /// `Activated` is emitted before the button check.
    pub fn pointer_down(&mut self, ev: PointerEvent) -> Result<bool> {
        if !self.is_attached() {
            return Err(PanelError::NotAttached(self.id));
        }
        self.emit(PanelEvent::Activated);

        if self.in_session() {
            return Ok(false);
        }
        Ok(self.drag.begin(&self.state, ev))
    }

    /// Pointer pressed on a resize stick. Returns whether a resize started.
    ///
    /// `force` starts the session regardless of the resizable flag, the
    /// button, and the enabled sticks.
    pub fn stick_down(&mut self, stick: StickId, ev: PointerEvent, force: bool) -> Result<bool> {
        if !self.is_attached() {
            return Err(PanelError::NotAttached(self.id));
        }
        if self.in_session() {
            return Ok(false);
        }
        Ok(self.resize.begin(&self.state, stick, ev, force))
    }

    /// Pointer moved. Returns the emitted rect, or `None` when idle.
    pub fn pointer_move(&mut self, ev: PointerEvent, probe: &dyn LayoutProbe) -> Option<PanelRect> {
        let parent = self.state.parent();

        if let Some(draft) = self.drag.draft(ev) {
            let insets = self.guides.near_bounds(probe, parent, draft, SnapMode::Snap);
            self.state.commit(insets);
            let rect = self.state.rect();
            self.emit(PanelEvent::Move(rect));
            return Some(rect);
        }

        if let Some(draft) = self.resize.draft(&self.state, ev) {
            let insets = self
                .guides
                .near_bounds(probe, parent, draft, SnapMode::GuidesOnly);
            self.state.commit(insets);
            let rect = self.state.rect();
            self.emit(PanelEvent::Resizing(rect));
            return Some(rect);
        }

        None
    }

    /// Pointer released. Returns whether a session ended.
    pub fn pointer_up(&mut self) -> bool {
        if self.drag.end() {
            self.guides.reset();
            self.emit(PanelEvent::MoveEnd);
            return true;
        }

        if self.resize.end() {
            self.guides.reset();
            let rect = self.state.rect();
            self.emit(PanelEvent::Resizing(rect));
            self.emit(PanelEvent::ResizeStop(rect));
            return true;
        }

        false
    }

    /// Pointer capture lost. Ends the session like a release.
    pub fn pointer_cancel(&mut self) -> bool {
        let ended = self.pointer_up();
        if ended {
            tracing::debug!(panel = %self.id, "session cancelled");
        }
        ended
    }
}
