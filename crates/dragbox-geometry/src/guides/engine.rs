//! Alignment guide detection and snap correction for one panel.

use dragbox_common::{BoundingBox, ElementHandle, Insets, ParentSize};
use dragbox_config::GuideConfig;
use serde::Serialize;

use super::comparator::{compare, ProximityTest, TESTS_PER_AXIS};
use super::probe::LayoutProbe;
use super::registry::GroupScope;

/// Whether an alignment pass may move the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapMode {
    /// Report guides and pull the near edge onto close matches.
    Snap,
    /// Report guides only.
    GuidesOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum GuideState {
    #[default]
    NoGuides,
    GuidesActive,
}

/// One aligned line and the candidate that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GuideLine {
    pub position: f64,
    pub offset: f64,
    pub candidate: ElementHandle,
}

/// The five test slots of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct AxisGuides {
    pub slots: [Option<GuideLine>; TESTS_PER_AXIS],
}

impl AxisGuides {
    pub fn lines(&self) -> impl Iterator<Item = &GuideLine> {
        self.slots.iter().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

/// Guides of the current tick. An axis with no match is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Guides {
    /// Lines across the vertical axis (aligned tops, bottoms, middles).
    pub vertical: Option<AxisGuides>,
    /// Lines across the horizontal axis (aligned lefts, rights, centers).
    pub horizontal: Option<AxisGuides>,
}

impl Guides {
    pub fn is_empty(&self) -> bool {
        self.vertical.is_none() && self.horizontal.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct AlignmentGuideEngine {
    enabled: bool,
    gap: f64,
    snap_threshold: f64,
    element: Option<ElementHandle>,
    group: Option<GroupScope>,
    guides: Guides,
    checking: Vec<ElementHandle>,
    state: GuideState,
}

impl AlignmentGuideEngine {
    pub fn new(gap: f64, snap_threshold: f64) -> Self {
        Self {
            enabled: true,
            gap,
            snap_threshold,
            element: None,
            group: None,
            guides: Guides::default(),
            checking: Vec::new(),
            state: GuideState::NoGuides,
        }
    }

    pub fn from_config(config: &GuideConfig) -> Self {
        Self {
            enabled: config.enabled,
            ..Self::new(config.gap, config.snap_threshold)
        }
    }

    // -- Accessors --

    pub fn guides(&self) -> &Guides {
        &self.guides
    }

    /// Candidates highlighted in the current tick.
    pub fn checking(&self) -> &[ElementHandle] {
        &self.checking
    }

    pub fn state(&self) -> GuideState {
        self.state
    }

    pub fn group(&self) -> Option<&GroupScope> {
        self.group.as_ref()
    }

    /// Alignment runs only for an enabled engine attached to a group.
    pub fn is_active(&self) -> bool {
        self.enabled && self.group.is_some() && self.element.is_some()
    }

    // -- Registration --

    /// Register `element` in `group`. Without a group the panel skips
    /// alignment entirely.
    pub fn attach(&mut self, element: ElementHandle, group: Option<GroupScope>) {
        self.detach();
        if let Some(group) = &group {
            group.add(element);
        }
        self.element = Some(element);
        self.group = group;
    }

    pub fn detach(&mut self) {
        if let (Some(group), Some(element)) = (&self.group, self.element) {
            group.remove(element);
        }
        self.group = None;
        self.element = None;
        self.reset();
    }

    /// Clear guide lines and highlights.
    pub fn reset(&mut self) {
        self.guides = Guides::default();
        self.checking.clear();
        self.set_state(GuideState::NoGuides);
    }

    /// Compare the moving box described by `insets` against every other
    /// group member and return the (possibly snapped) insets.
    ///
    /// Members are evaluated in registration order; within a slot the last
    /// matching candidate wins.
    pub fn near_bounds(
        &mut self,
        probe: &dyn LayoutProbe,
        parent: ParentSize,
        insets: Insets,
        mode: SnapMode,
    ) -> Insets {
        self.guides = Guides::default();
        self.checking.clear();

        let scope = match (&self.group, self.element) {
            (Some(group), Some(me)) if self.enabled => Some((group.snapshot(), me)),
            _ => None,
        };
        let Some((members, me)) = scope else {
            self.set_state(GuideState::NoGuides);
            return insets;
        };

        let width = insets.width(parent);
        let height = insets.height(parent);
        let moving = BoundingBox::new(insets.top, insets.left, width, height);
        let mut out = insets;

        let mut vertical = AxisGuides::default();
        let mut horizontal = AxisGuides::default();
        let mut checking = Vec::new();

        for candidate in members {
            if candidate == me {
                continue;
            }
            let Some(target) = probe.bounding_box(candidate) else {
                tracing::trace!(%candidate, "candidate not measurable, skipped");
                continue;
            };

            let conditions = compare(&moving, &target, self.gap);

            for (i, test) in conditions.vertical.iter().enumerate() {
                if !test.near {
                    continue;
                }
                mark(&mut checking, candidate);
                vertical.slots[i] = Some(line(test, candidate));
                if mode == SnapMode::Snap && (out.top - test.drag_value).abs() < self.snap_threshold
                {
                    out.top = test.drag_value;
                    out.bottom = parent.height - height - out.top;
                }
            }

            for (i, test) in conditions.horizontal.iter().enumerate() {
                if !test.near {
                    continue;
                }
                mark(&mut checking, candidate);
                horizontal.slots[i] = Some(line(test, candidate));
                if mode == SnapMode::Snap && (out.left - test.drag_value).abs() < self.snap_threshold
                {
                    out.left = test.drag_value;
                    out.right = parent.width - width - out.left;
                }
            }
        }

        self.guides = Guides {
            vertical: (!vertical.is_empty()).then_some(vertical),
            horizontal: (!horizontal.is_empty()).then_some(horizontal),
        };
        self.checking = checking;

        let next = if self.guides.is_empty() {
            GuideState::NoGuides
        } else {
            GuideState::GuidesActive
        };
        self.set_state(next);

        out
    }

    fn set_state(&mut self, next: GuideState) {
        if self.state != next {
            tracing::debug!(from = ?self.state, to = ?next, "guide state changed");
            self.state = next;
        }
    }
}

fn line(test: &ProximityTest, candidate: ElementHandle) -> GuideLine {
    GuideLine {
        position: test.position,
        offset: test.offset,
        candidate,
    }
}

fn mark(checking: &mut Vec<ElementHandle>, candidate: ElementHandle) {
    if !checking.contains(&candidate) {
        checking.push(candidate);
    }
}
