//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# dragbox configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[panel]
# unit = "px"              # px, percent
# parent_limitation = true
# draggable = true
# resizable = true
# aspect_ratio = false
# stick_size = 8.0         # 1-64
# sticks = ["tl", "tm", "tr", "mr", "br", "bm", "bl", "ml"]

[guides]
# enabled = true
# gap = 5.0                # 0-50
# snap_threshold = 10.0    # 0-100

[logging]
# level = "INFO"           # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
