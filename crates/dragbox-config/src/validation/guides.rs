//! Guide section validation.

use crate::schema::DragboxConfig;

use super::helpers::validate_range_f64;

pub(crate) fn validate_guides(errors: &mut Vec<String>, config: &DragboxConfig) {
    validate_range_f64(errors, "guides.gap", config.guides.gap, 0.0, 50.0);
    validate_range_f64(
        errors,
        "guides.snap_threshold",
        config.guides.snap_threshold,
        0.0,
        100.0,
    );
}
