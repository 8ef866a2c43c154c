//! Stick-based resize sessions, with optional aspect-ratio lock.

mod aspect;
mod sticks;

pub use sticks::{stick_style, StickStyle};

use dragbox_common::{HorizontalSide, Insets, PointerEvent, StickId, VerticalSide};
use dragbox_config::PanelConfig;

use crate::limits::{calc_resize_limitation, Limits};
use crate::state::{GeometryState, Snapshot};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeSession {
    pub stick: StickId,
    pub start_x: f64,
    pub start_y: f64,
    pub snapshot: Snapshot,
    /// `width / height` at session start, when the ratio is locked and
    /// both dimensions are positive.
    pub aspect_factor: Option<f64>,
    pub limits: Limits,
}

#[derive(Debug, Clone)]
pub struct ResizeController {
    resizable: bool,
    aspect_ratio: bool,
    parent_limitation: bool,
    sticks: Vec<StickId>,
    session: Option<ResizeSession>,
}

impl ResizeController {
    pub fn new(config: &PanelConfig) -> Self {
        Self {
            resizable: config.resizable,
            aspect_ratio: config.aspect_ratio,
            parent_limitation: config.parent_limitation,
            sticks: config.sticks.clone(),
            session: None,
        }
    }

    pub fn is_resizing(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&ResizeSession> {
        self.session.as_ref()
    }

    pub fn resizable(&self) -> bool {
        self.resizable
    }

    pub fn sticks(&self) -> &[StickId] {
        &self.sticks
    }

    pub fn set_parent_limitation(&mut self, parent_limitation: bool) {
        self.parent_limitation = parent_limitation;
    }

    /// Start a session on `stick`.
    ///
    /// Without `force` the panel must be resizable, the button primary, and
    /// the stick enabled. Returns whether a session started.
    pub fn begin(
        &mut self,
        state: &GeometryState,
        stick: StickId,
        ev: PointerEvent,
        force: bool,
    ) -> bool {
        if !force {
            if !self.resizable || !ev.is_primary() {
                return false;
            }
            if !self.sticks.contains(&stick) {
                tracing::debug!(%stick, "stick not enabled, resize ignored");
                return false;
            }
        }

        let snapshot = state.snapshot();
        let measurable = snapshot.width > 0.0 && snapshot.height > 0.0;
        let aspect_factor = if self.aspect_ratio && measurable {
            Some(snapshot.width / snapshot.height)
        } else {
            None
        };
        let limits = calc_resize_limitation(&snapshot, stick, aspect_factor, self.parent_limitation);

        self.session = Some(ResizeSession {
            stick,
            start_x: ev.x,
            start_y: ev.y,
            snapshot,
            aspect_factor,
            limits,
        });
        tracing::debug!(%stick, ?aspect_factor, "resize started");
        true
    }

    /// Clamped, aspect-corrected insets for the pointer at `ev`, or `None`
    /// when idle.
    pub fn draft(&self, state: &GeometryState, ev: PointerEvent) -> Option<Insets> {
        let session = self.session.as_ref()?;
        let dx = ev.x - session.start_x;
        let dy = ev.y - session.start_y;
        let s = session.snapshot.insets;
        let mut draft = s;

        match session.stick.vertical() {
            VerticalSide::Top => draft.top = s.top + dy,
            VerticalSide::Bottom => draft.bottom = s.bottom - dy,
            VerticalSide::Middle => {}
        }
        match session.stick.horizontal() {
            HorizontalSide::Left => draft.left = s.left + dx,
            HorizontalSide::Right => draft.right = s.right - dx,
            HorizontalSide::Middle => {}
        }

        let draft = session.limits.clamp(draft);
        Some(match session.aspect_factor {
            Some(factor) => aspect::correct(
                draft,
                session.stick,
                factor,
                &session.snapshot,
                state.parent(),
                &session.limits,
            ),
            None => draft,
        })
    }

    /// Recompute limits after the parent changed size mid-session.
    pub fn refresh_limits(&mut self, state: &GeometryState) {
        if let Some(session) = self.session.as_mut() {
            session.snapshot.width = state.width();
            session.snapshot.height = state.height();
            session.limits = calc_resize_limitation(
                &session.snapshot,
                session.stick,
                session.aspect_factor,
                self.parent_limitation,
            );
        }
    }

    /// End the session. Returns whether one was active.
    pub fn end(&mut self) -> bool {
        let was_resizing = self.session.take().is_some();
        if was_resizing {
            tracing::debug!("resize ended");
        }
        was_resizing
    }
}
