//! Panel section validation (stick size and stick list).

use std::collections::HashSet;

use crate::schema::DragboxConfig;

use super::helpers::validate_range_f64;

pub(crate) fn validate_panel(errors: &mut Vec<String>, config: &DragboxConfig) {
    validate_range_f64(errors, "panel.stick_size", config.panel.stick_size, 1.0, 64.0);

    if config.panel.resizable && config.panel.sticks.is_empty() {
        errors.push("panel.sticks must not be empty when panel.resizable is set".into());
    }

    let mut seen = HashSet::new();
    for stick in &config.panel.sticks {
        if !seen.insert(*stick) {
            errors.push(format!("panel.sticks lists `{stick}` more than once"));
        }
    }
}
