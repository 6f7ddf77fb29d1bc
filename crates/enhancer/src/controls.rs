//! Recognition of form controls and toggle controls.
//!
//! Matching is selector-like: an `<input>` without an explicit `type`
//! in the recognized set is left alone, as a class-based page script
//! would leave it alone.

use dom::Node;

/// Input types that receive the text-like baseline and focus/blur wiring.
const TEXT_LIKE_TYPES: [&str; 6] = ["text", "email", "password", "tel", "number", "date"];

/// Marker classes identifying a password-visibility toggle control.
/// Two are recognized: the primary password field's toggle and the
/// confirmation field's.
pub const TOGGLE_CLASSES: [&str; 2] = ["toggle-password", "toggle-password-confirm"];

/// Per-element marker set once a toggle's click behavior is wired.
/// Living on the element itself, it survives repeated enhancement passes
/// without any global registry.
pub const WIRED_ATTR: &str = "data-toggle-wired";

/// Icon marker classes swapped to mirror the visibility state.
pub const ICON_MASKED_CLASS: &str = "fa-eye";
pub const ICON_VISIBLE_CLASS: &str = "fa-eye-slash";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlKind {
    /// Text-like `<input>`: text, email, password, tel, number, date.
    TextLike,
    TextArea,
    Select,
    Checkbox,
}

/// Classify an element as an enhanceable form control, or `None`.
pub fn classify(node: &Node) -> Option<ControlKind> {
    let name = node.name()?;
    if name.eq_ignore_ascii_case("textarea") {
        return Some(ControlKind::TextArea);
    }
    if name.eq_ignore_ascii_case("select") {
        return Some(ControlKind::Select);
    }
    if !name.eq_ignore_ascii_case("input") {
        return None;
    }
    let ty = node.attr("type")?;
    if ty.eq_ignore_ascii_case("checkbox") {
        return Some(ControlKind::Checkbox);
    }
    TEXT_LIKE_TYPES
        .iter()
        .any(|t| ty.eq_ignore_ascii_case(t))
        .then_some(ControlKind::TextLike)
}

pub fn is_toggle_control(node: &Node) -> bool {
    TOGGLE_CLASSES.iter().any(|c| node.has_class(c))
}

pub fn is_password_input(node: &Node) -> bool {
    node.is_element_named("input")
        && node
            .attr("type")
            .is_some_and(|t| t.eq_ignore_ascii_case("password"))
}

/// The control's initial value at enhancement time: the `value`
/// attribute for inputs, the concatenated text content for textareas.
pub fn initial_value(node: &Node, kind: ControlKind) -> String {
    match kind {
        ControlKind::TextArea => {
            let mut out = String::new();
            if let Some(children) = node.children() {
                for c in children {
                    if let Node::Text { text, .. } = c {
                        out.push_str(text);
                    }
                }
            }
            out
        }
        _ => node.attr("value").unwrap_or_default().to_string(),
    }
}
