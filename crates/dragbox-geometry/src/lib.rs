pub mod drag;
pub mod guides;
pub mod limits;
pub mod panel;
pub mod resize;
pub mod state;
pub mod unit;

pub use drag::{DragController, DragSession};
pub use guides::{
    AlignmentGuideEngine, GroupScope, GuideLine, GuideState, Guides, LayoutProbe, NoLayout,
    SnapMode,
};
pub use limits::{calc_drag_limitation, calc_resize_limitation, Limit, Limits};
pub use panel::{AttachContext, Panel, PropsUpdate};
pub use resize::{stick_style, ResizeController, ResizeSession, StickStyle};
pub use state::{GeometryState, PanelProps, PanelStyle, Snapshot};
pub use unit::{round4, PropValue, UnitConverter};
