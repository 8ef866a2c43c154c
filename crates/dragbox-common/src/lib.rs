pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use errors::{ConfigError, PanelError};
pub use events::{EventListeners, ListenerId, PanelEvent};
pub use id::{ElementHandle, PanelId};
pub use types::{
    BoundingBox, HorizontalSide, Insets, PanelRect, ParentSize, PointerButton, PointerEvent,
    StickId, Unit, VerticalSide,
};

pub type Result<T> = std::result::Result<T, PanelError>;
