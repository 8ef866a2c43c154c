//! Alignment guides: the group registry, the layout probe seam, the
//! proximity comparator, and the per-panel engine that ties them together.

pub mod comparator;
mod engine;
mod probe;
mod registry;

pub use comparator::{compare, is_nearly, Conditions, ProximityTest, DEFAULT_COMPARATOR_GAP};
pub use engine::{AlignmentGuideEngine, AxisGuides, GuideLine, GuideState, Guides, SnapMode};
pub use probe::{LayoutProbe, NoLayout};
pub use registry::GroupScope;
