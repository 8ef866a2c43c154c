mod geometry;
mod input;

pub use self::geometry::*;
pub use input::*;

use serde::{Deserialize, Serialize};
use std::fmt;

/// How panel positions and sizes are expressed to and from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Absolute pixels.
    #[default]
    Px,
    /// Fraction of the parent dimension, 0-100.
    Percent,
}

impl Unit {
    /// CSS suffix for style output.
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Percent => "%",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Px => write!(f, "px"),
            Unit::Percent => write!(f, "percent"),
        }
    }
}
