//! Canonical panel geometry: insets plus the parent size they refer to.

use dragbox_common::{Insets, ParentSize, Result, Unit};
use serde::{Deserialize, Serialize};

use crate::unit::{round4, PropValue, UnitConverter};

/// Position and size as declared by the host, in the configured unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelProps {
    pub x: PropValue,
    pub y: PropValue,
    pub w: PropValue,
    pub h: PropValue,
}

impl PanelProps {
    pub fn new(
        x: impl Into<PropValue>,
        y: impl Into<PropValue>,
        w: impl Into<PropValue>,
        h: impl Into<PropValue>,
    ) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            w: w.into(),
            h: h.into(),
        }
    }
}

impl Default for PanelProps {
    fn default() -> Self {
        Self::new(0.0, 0.0, 200.0, 200.0)
    }
}

/// Geometry captured when a pointer session starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub insets: Insets,
    pub width: f64,
    pub height: f64,
}

/// The single owned geometry of one panel.
///
/// Drag, resize, and alignment all read and commit through this type.
#[derive(Debug, Clone)]
pub struct GeometryState {
    pub(super) insets: Insets,
    pub(super) parent: ParentSize,
    pub(super) converter: UnitConverter,
}

impl GeometryState {
    pub fn new(unit: Unit) -> Self {
        Self {
            insets: Insets::default(),
            parent: ParentSize::default(),
            converter: UnitConverter::new(unit),
        }
    }

    pub fn with_parent(parent: ParentSize, unit: Unit) -> Self {
        Self {
            parent,
            ..Self::new(unit)
        }
    }

    // -- Accessors --

    pub fn insets(&self) -> Insets {
        self.insets
    }

    pub fn parent(&self) -> ParentSize {
        self.parent
    }

    pub fn unit(&self) -> Unit {
        self.converter.unit()
    }

    pub fn converter(&self) -> UnitConverter {
        self.converter
    }

    pub fn width(&self) -> f64 {
        round4(self.insets.width(self.parent))
    }

    pub fn height(&self) -> f64 {
        round4(self.insets.height(self.parent))
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            insets: self.insets,
            width: self.width(),
            height: self.height(),
        }
    }

    // -- Mutation --

    pub fn set_unit(&mut self, unit: Unit) {
        self.converter = UnitConverter::new(unit);
    }

    /// Replace the parent size without touching the insets.
    pub fn set_parent(&mut self, parent: ParentSize) {
        self.parent = parent;
    }

    /// Resynchronize the insets from declared props.
    ///
    /// Callers must only do this while no pointer session is active.
    pub fn record_state(&mut self, props: &PanelProps) -> Result<()> {
        let parent = self.parent;
        let left = self.converter.resolve(&props.x, "x", parent.width)?;
        let top = self.converter.resolve(&props.y, "y", parent.height)?;
        let width = self.converter.resolve(&props.w, "w", parent.width)?;
        let height = self.converter.resolve(&props.h, "h", parent.height)?;

        self.commit(Insets::from_rect(parent, left, top, width, height));
        tracing::trace!(insets = ?self.insets, "geometry resynchronized from props");
        Ok(())
    }

    /// Store new insets, rounded to 4 decimals.
    pub fn commit(&mut self, insets: Insets) {
        self.insets = Insets {
            top: round4(insets.top),
            right: round4(insets.right),
            bottom: round4(insets.bottom),
            left: round4(insets.left),
        };
    }
}
