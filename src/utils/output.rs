use colored::*;

pub struct OutputStyle;

impl OutputStyle {
    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    /// Apply the `color` config flag.
    ///
    /// `false` turns colors off for the rest of the process; `true` leaves
    /// terminal detection alone. Returns whether an override was installed.
    pub fn apply_color_setting(enabled: bool) -> bool {
        if enabled {
            return false;
        }
        colored::control::set_override(false);
        true
    }
}
