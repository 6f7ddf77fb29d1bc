//! The fixed visual baseline and the focus/blur style transitions.
//!
//! Everything here is a plain declaration write through `style`, so
//! applying any of these twice leaves the list unchanged.

use field_state::VisualState;
use style::{Declarations, remove_property, set_property};

pub const ACCENT_COLOR: &str = "#4a7c59";
pub const NEUTRAL_BORDER_COLOR: &str = "#ced4da";
pub const FOCUS_GLOW: &str = "0 0 0 3px rgba(74, 124, 89, 0.25)";
pub const TOGGLE_RESTING_COLOR: &str = "#6c757d";

const FIELD_BASELINE: [(&str, &str); 8] = [
    ("border", "1px solid #ced4da"),
    ("border-radius", "8px"),
    ("padding", "10px 12px"),
    ("width", "100%"),
    ("background-color", "#ffffff"),
    ("font-size", "15px"),
    ("line-height", "1.5"),
    ("transition", "border-color 0.2s ease, box-shadow 0.2s ease"),
];

const CHECKBOX_BASELINE: [(&str, &str); 4] = [
    ("width", "16px"),
    ("height", "16px"),
    ("border", "1px solid #ced4da"),
    ("background-color", "#ffffff"),
];

/// Baseline for text-like inputs, textareas, and selects.
pub fn apply_field_baseline(style: &mut Declarations) {
    for (name, value) in FIELD_BASELINE {
        set_property(style, name, value);
    }
}

/// Static sizing/border/background for checkboxes; no dynamic state.
pub fn apply_checkbox_baseline(style: &mut Declarations) {
    for (name, value) in CHECKBOX_BASELINE {
        set_property(style, name, value);
    }
}

/// Resting appearance of a toggle control.
pub fn apply_toggle_baseline(style: &mut Declarations) {
    set_property(style, "cursor", "pointer");
    set_property(style, "color", TOGGLE_RESTING_COLOR);
}

/// Translate a field's visual state into its border/glow declarations.
///
/// The asymmetry lives in `Filled`: the glow is gone but the accent
/// border stays, marking a field that was touched and holds content.
pub fn apply_visual_state(style: &mut Declarations, state: VisualState) {
    match state {
        VisualState::Default => {
            set_property(style, "border-color", NEUTRAL_BORDER_COLOR);
            remove_property(style, "box-shadow");
        }
        VisualState::Focused => {
            set_property(style, "border-color", ACCENT_COLOR);
            set_property(style, "box-shadow", FOCUS_GLOW);
        }
        VisualState::Filled => {
            set_property(style, "border-color", ACCENT_COLOR);
            remove_property(style, "box-shadow");
        }
    }
}
