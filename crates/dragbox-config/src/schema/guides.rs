//! Alignment guide settings.

use serde::{Deserialize, Serialize};

/// Alignment guide detection and snapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuideConfig {
    pub enabled: bool,
    /// Max distance in pixels for an edge to count as aligned (valid range: 0-50).
    pub gap: f64,
    /// Max correction in pixels applied as a hard snap (valid range: 0-100).
    pub snap_threshold: f64,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            gap: 5.0,
            snap_threshold: 10.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guide_config_defaults() {
        let config = GuideConfig::default();
        assert!(config.enabled);
        assert!((config.gap - 5.0).abs() < f64::EPSILON);
        assert!((config.snap_threshold - 10.0).abs() < f64::EPSILON);
    }
}
