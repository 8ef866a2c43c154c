//! Attach, detach, and host-driven resynchronization.

use dragbox_common::{PanelError, ParentSize, Result};

use super::{AttachContext, Panel, PropsUpdate};

impl Panel {
    /// Mount the panel: sync geometry from props and join the alignment
    /// group.
    ///
    /// Fails if the host supplied no parent container or a prop cannot be
    /// parsed; the panel stays detached in that case.
    pub fn on_attach(&mut self, ctx: AttachContext) -> Result<()> {
        let parent = ctx.parent.ok_or(PanelError::MissingParent(self.id))?;

        if self.is_attached() {
            self.on_detach();
        }

        self.state.set_parent(parent);
        self.state.record_state(&ctx.props)?;
        self.props = ctx.props;
        self.props_stale = false;

        self.guides.attach(ctx.element, ctx.group);
        self.element = Some(ctx.element);

        tracing::debug!(
            panel = %self.id,
            element = %ctx.element,
            grouped = self.guides.group().is_some(),
            "panel attached"
        );
        Ok(())
    }

    /// Unmount: end any session without emitting and leave the group.
    pub fn on_detach(&mut self) {
        self.drag.end();
        self.resize.end();
        self.guides.detach();
        if let Some(element) = self.element.take() {
            tracing::debug!(panel = %self.id, %element, "panel detached");
        }
    }

    /// Apply new props. Geometry is resynchronized only while idle; during
    /// a session the props are kept for the next sync.
    pub fn on_props_changed(&mut self, update: PropsUpdate) -> Result<()> {
        let unit_changed = update
            .unit
            .is_some_and(|unit| unit != self.state.unit());
        if let Some(unit) = update.unit {
            self.state.set_unit(unit);
        }
        if let Some(parent_limitation) = update.parent_limitation {
            self.drag.set_parent_limitation(parent_limitation);
            self.resize.set_parent_limitation(parent_limitation);
            // An active session picks the new bounds up on its next move.
            self.drag.refresh_limits(&self.state);
            self.resize.refresh_limits(&self.state);
        }

        let props_changed = update.props != self.props;
        self.props = update.props;

        if !self.is_attached() {
            return Ok(());
        }
        if self.in_session() {
            self.props_stale |= props_changed || unit_changed;
            return Ok(());
        }
        if props_changed || unit_changed || self.props_stale {
            self.state.record_state(&self.props)?;
            self.props_stale = false;
        }
        Ok(())
    }

    /// The parent container changed size.
    ///
    /// While idle the geometry is resynchronized from props; during a
    /// session only the active limits are recomputed.
    pub fn on_parent_resize(&mut self, parent: ParentSize) -> Result<()> {
        if !self.is_attached() {
            return Err(PanelError::NotAttached(self.id));
        }

        self.state.set_parent(parent);
        if self.in_session() {
            self.drag.refresh_limits(&self.state);
            self.resize.refresh_limits(&self.state);
            tracing::debug!(panel = %self.id, ?parent, "limits refreshed mid-session");
            return Ok(());
        }

        self.state.record_state(&self.props)?;
        self.props_stale = false;
        Ok(())
    }
}
