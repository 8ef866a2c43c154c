//! Core types and constructors for Panel.

use dragbox_common::{
    ElementHandle, EventListeners, ListenerId, PanelEvent, PanelId, PanelRect, ParentSize, StickId,
    Unit,
};
use dragbox_config::{DragboxConfig, GuideConfig, PanelConfig};

use crate::drag::DragController;
use crate::guides::{AlignmentGuideEngine, GroupScope, GuideState, Guides};
use crate::resize::{stick_style, ResizeController, StickStyle};
use crate::state::{GeometryState, PanelProps, PanelStyle};

/// What the host hands over when the panel element is mounted.
#[derive(Debug, Clone)]
pub struct AttachContext {
    pub element: ElementHandle,
    /// Size of the parent container. Attaching without one is an error.
    pub parent: Option<ParentSize>,
    /// Alignment group of the nearest grouping ancestor, if any.
    pub group: Option<GroupScope>,
    pub props: PanelProps,
}

/// Declared props after a host-side change. `None` keeps the current
/// setting.
#[derive(Debug, Clone, Default)]
pub struct PropsUpdate {
    pub props: PanelProps,
    pub unit: Option<Unit>,
    pub parent_limitation: Option<bool>,
}

/// One draggable, resizable panel and its interaction state.
///
/// Owns a single [`GeometryState`]; the drag and resize controllers and the
/// alignment engine read and commit through it.
pub struct Panel {
    pub(super) id: PanelId,
    pub(super) element: Option<ElementHandle>,
    pub(super) props: PanelProps,
    /// Props changed during a session and have not been synced yet.
    pub(super) props_stale: bool,
    pub(super) state: GeometryState,
    pub(super) drag: DragController,
    pub(super) resize: ResizeController,
    pub(super) guides: AlignmentGuideEngine,
    pub(super) listeners: EventListeners,
    pub(super) stick_size: f64,
}

impl Panel {
    pub fn new(id: PanelId, config: &PanelConfig) -> Self {
        Self::with_guides(id, config, &GuideConfig::default())
    }

    pub fn with_guides(id: PanelId, config: &PanelConfig, guides: &GuideConfig) -> Self {
        Self {
            id,
            element: None,
            props: PanelProps::default(),
            props_stale: false,
            state: GeometryState::new(config.unit),
            drag: DragController::new(config.draggable, config.parent_limitation),
            resize: ResizeController::new(config),
            guides: AlignmentGuideEngine::from_config(guides),
            listeners: EventListeners::new(),
            stick_size: config.stick_size,
        }
    }

    pub fn from_config(id: PanelId, config: &DragboxConfig) -> Self {
        Self::with_guides(id, &config.panel, &config.guides)
    }

    // -- Accessors --

    pub fn id(&self) -> PanelId {
        self.id
    }

    pub fn element(&self) -> Option<ElementHandle> {
        self.element
    }

    pub fn is_attached(&self) -> bool {
        self.element.is_some()
    }

    pub fn props(&self) -> &PanelProps {
        &self.props
    }

    pub fn state(&self) -> &GeometryState {
        &self.state
    }

    /// Integer rect in the configured unit.
    pub fn rect(&self) -> PanelRect {
        self.state.rect()
    }

    /// 4-decimal rect in pixels.
    pub fn precise_rect(&self) -> PanelRect {
        self.state.precise_rect()
    }

    pub fn style(&self) -> PanelStyle {
        self.state.style()
    }

    pub fn guides(&self) -> &Guides {
        self.guides.guides()
    }

    /// Candidates currently highlighted by the alignment pass.
    pub fn checking(&self) -> &[ElementHandle] {
        self.guides.checking()
    }

    pub fn guide_state(&self) -> GuideState {
        self.guides.state()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn is_resizing(&self) -> bool {
        self.resize.is_resizing()
    }

    /// Whether a drag or resize session is in progress.
    pub fn in_session(&self) -> bool {
        self.is_dragging() || self.is_resizing()
    }

    /// Enabled resize handles.
    pub fn sticks(&self) -> &[StickId] {
        self.resize.sticks()
    }

    /// Handle style for an enabled stick.
    pub fn stick_style(&self, stick: StickId) -> Option<StickStyle> {
        self.resize
            .sticks()
            .contains(&stick)
            .then(|| stick_style(stick, self.stick_size))
    }

    // -- Events --

    pub fn subscribe(&mut self, listener: impl FnMut(&PanelEvent) + 'static) -> ListenerId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    pub(super) fn emit(&mut self, event: PanelEvent) {
        tracing::trace!(panel = %self.id, ?event, "emit");
        self.listeners.emit(&event);
    }
}

impl std::fmt::Debug for Panel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Panel")
            .field("id", &self.id)
            .field("element", &self.element)
            .field("insets", &self.state.insets())
            .field("dragging", &self.is_dragging())
            .field("resizing", &self.is_resizing())
            .finish()
    }
}
