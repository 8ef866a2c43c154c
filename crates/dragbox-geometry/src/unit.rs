//! Pixel/percent conversion at the boundary between host props and the
//! engine. Everything inside the engine is absolute pixels.

use dragbox_common::{PanelError, Result, Unit};
use serde::{Deserialize, Serialize};

/// Round to 4 decimal places.
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// A declared position or size as the host supplies it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Number(f64),
    Text(String),
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Number(value)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Text(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnitConverter {
    unit: Unit,
}

impl UnitConverter {
    pub fn new(unit: Unit) -> Self {
        Self { unit }
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Convert a value in this converter's unit to absolute pixels.
    pub fn to_absolute(&self, value: f64, parent_dim: f64) -> f64 {
        match self.unit {
            Unit::Px => round4(value),
            Unit::Percent => round4(value * parent_dim / 100.0),
        }
    }

    /// Convert absolute pixels to a percentage of `parent_dim`, in `[0, 100]`.
    pub fn to_percent(&self, absolute: f64, parent_dim: f64) -> f64 {
        if parent_dim <= 0.0 {
            return 0.0;
        }
        round4(absolute / parent_dim * 100.0).clamp(0.0, 100.0)
    }

    /// Express absolute pixels in this converter's unit.
    pub fn to_output(&self, absolute: f64, parent_dim: f64) -> f64 {
        match self.unit {
            Unit::Px => round4(absolute),
            Unit::Percent => self.to_percent(absolute, parent_dim),
        }
    }

    /// Read a prop as a number in this converter's unit.
    ///
    /// Text may carry the unit's suffix (`"25%"`, `"120px"`). Percent values
    /// are clamped into `[0, 100]`.
    pub fn parse(&self, value: &PropValue, field: &'static str) -> Result<f64> {
        let number = match value {
            PropValue::Number(n) => Some(*n),
            PropValue::Text(text) => {
                let trimmed = text.trim();
                let stripped = trimmed
                    .strip_suffix(self.unit.suffix())
                    .unwrap_or(trimmed)
                    .trim();
                stripped.parse::<f64>().ok()
            }
        };

        let number = number
            .filter(|n| n.is_finite())
            .ok_or_else(|| PanelError::InvalidValue {
                field,
                value: match value {
                    PropValue::Number(n) => n.to_string(),
                    PropValue::Text(text) => text.clone(),
                },
                unit: self.unit,
            })?;

        Ok(match self.unit {
            Unit::Px => number,
            Unit::Percent => number.clamp(0.0, 100.0),
        })
    }

    /// Parse a prop and convert it to absolute pixels.
    pub fn resolve(&self, value: &PropValue, field: &'static str, parent_dim: f64) -> Result<f64> {
        let parsed = self.parse(value, field)?;
        Ok(self.to_absolute(parsed, parent_dim))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round4_keeps_four_decimals() {
        assert_eq!(round4(1.234_567), 1.2346);
        assert_eq!(round4(-0.000_04), 0.0);
        assert_eq!(round4(100.0), 100.0);
    }

    #[test]
    fn pixel_mode_is_identity() {
        let conv = UnitConverter::new(Unit::Px);
        assert_eq!(conv.to_absolute(120.5, 800.0), 120.5);
        assert_eq!(conv.to_output(120.5, 800.0), 120.5);
    }

    #[test]
    fn percent_to_absolute() {
        let conv = UnitConverter::new(Unit::Percent);
        assert_eq!(conv.to_absolute(25.0, 800.0), 200.0);
        assert_eq!(conv.to_absolute(33.3333, 300.0), 99.9999);
    }

    #[test]
    fn absolute_to_percent() {
        let conv = UnitConverter::new(Unit::Percent);
        assert_eq!(conv.to_percent(200.0, 800.0), 25.0);
        assert_eq!(conv.to_percent(100.0, 300.0), 33.3333);
    }

    #[test]
    fn to_percent_of_empty_parent_is_zero() {
        let conv = UnitConverter::new(Unit::Percent);
        assert_eq!(conv.to_percent(50.0, 0.0), 0.0);
    }

    #[test]
    fn to_percent_is_normalized() {
        let conv = UnitConverter::new(Unit::Percent);
        assert_eq!(conv.to_percent(900.0, 800.0), 100.0);
        assert_eq!(conv.to_percent(-10.0, 800.0), 0.0);
    }

    #[test]
    fn parse_accepts_numbers_and_suffixed_text() {
        let px = UnitConverter::new(Unit::Px);
        assert_eq!(px.parse(&PropValue::Number(12.0), "x").unwrap(), 12.0);
        assert_eq!(px.parse(&"120px".into(), "x").unwrap(), 120.0);
        assert_eq!(px.parse(&" 7 ".into(), "x").unwrap(), 7.0);

        let pct = UnitConverter::new(Unit::Percent);
        assert_eq!(pct.parse(&"25%".into(), "w").unwrap(), 25.0);
        assert_eq!(pct.parse(&"12.5".into(), "w").unwrap(), 12.5);
    }

    #[test]
    fn parse_clamps_percent_range() {
        let pct = UnitConverter::new(Unit::Percent);
        assert_eq!(pct.parse(&PropValue::Number(140.0), "w").unwrap(), 100.0);
        assert_eq!(pct.parse(&PropValue::Number(-3.0), "x").unwrap(), 0.0);
    }

    #[test]
    fn parse_rejects_garbage_with_field_name() {
        let pct = UnitConverter::new(Unit::Percent);
        let err = pct.parse(&"wide".into(), "w").unwrap_err();
        match err {
            PanelError::InvalidValue { field, value, unit } => {
                assert_eq!(field, "w");
                assert_eq!(value, "wide");
                assert_eq!(unit, Unit::Percent);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parse_rejects_non_finite_numbers() {
        let px = UnitConverter::new(Unit::Px);
        assert!(px.parse(&PropValue::Number(f64::NAN), "x").is_err());
        assert!(px.parse(&PropValue::Number(f64::INFINITY), "y").is_err());
    }

    #[test]
    fn resolve_converts_to_pixels() {
        let pct = UnitConverter::new(Unit::Percent);
        assert_eq!(pct.resolve(&"50%".into(), "h", 600.0).unwrap(), 300.0);
    }

    #[test]
    fn prop_value_deserializes_untagged() {
        let n: PropValue = serde_json::from_str("12.5").unwrap();
        assert_eq!(n, PropValue::Number(12.5));
        let t: PropValue = serde_json::from_str("\"40%\"").unwrap();
        assert_eq!(t, PropValue::Text("40%".into()));
    }
}
