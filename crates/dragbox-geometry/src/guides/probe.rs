//! Layout measurement capability.

use std::collections::HashMap;
use std::hash::BuildHasher;

use dragbox_common::{BoundingBox, ElementHandle};

/// Measures the current box of a mounted element in parent coordinates.
///
/// Returns `None` when the element is not laid out (unmounted, hidden, or
/// unknown to the host); the alignment pass skips such candidates.
pub trait LayoutProbe {
    fn bounding_box(&self, element: ElementHandle) -> Option<BoundingBox>;
}

impl<S: BuildHasher> LayoutProbe for HashMap<ElementHandle, BoundingBox, S> {
    fn bounding_box(&self, element: ElementHandle) -> Option<BoundingBox> {
        self.get(&element).copied()
    }
}

/// A probe that measures nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLayout;

impl LayoutProbe for NoLayout {
    fn bounding_box(&self, _element: ElementHandle) -> Option<BoundingBox> {
        None
    }
}
