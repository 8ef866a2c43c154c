//! The Panel facade: host lifecycle hooks, pointer routing, and output
//! events around one GeometryState.

mod lifecycle;
mod pointer;
mod types;

pub use types::*;
