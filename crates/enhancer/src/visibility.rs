//! Password masking as an explicit two-state machine.
//!
//! The transition is a pure function; applying a state to a field or
//! icon is a separate, side-effecting step. Nothing but a click moves
//! the state, and the state has no memory beyond the element's current
//! `type` attribute.

use crate::controls::{ICON_MASKED_CLASS, ICON_VISIBLE_CLASS};
use dom::Node;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    /// `type=password`: characters hidden. The initial state.
    Masked,
    /// `type=text`: characters shown.
    Visible,
}

impl Visibility {
    /// Read the state off a field's `type` attribute. Anything that is
    /// not exactly a plain-text reveal counts as masked.
    pub fn from_type_attr(ty: Option<&str>) -> Self {
        match ty {
            Some(t) if t.eq_ignore_ascii_case("text") => Visibility::Visible,
            _ => Visibility::Masked,
        }
    }

    pub fn type_attr(self) -> &'static str {
        match self {
            Visibility::Masked => "password",
            Visibility::Visible => "text",
        }
    }
}

/// The toggle transition: exactly two states, each click inverts.
pub fn next_state(current: Visibility) -> Visibility {
    match current {
        Visibility::Masked => Visibility::Visible,
        Visibility::Visible => Visibility::Masked,
    }
}

/// Write the state onto the field's `type` attribute.
pub fn apply_to_field(field: &mut Node, state: Visibility) {
    field.set_attr("type", state.type_attr());
}

/// Mirror the state on an icon element by swapping the two mutually
/// exclusive marker classes: the eye icon invites revealing, the
/// slashed eye invites re-masking.
pub fn apply_to_icon(icon: &mut Node, state: Visibility) {
    match state {
        Visibility::Masked => {
            icon.remove_class(ICON_VISIBLE_CLASS);
            icon.add_class(ICON_MASKED_CLASS);
        }
        Visibility::Visible => {
            icon.remove_class(ICON_MASKED_CLASS);
            icon.add_class(ICON_VISIBLE_CLASS);
        }
    }
}

/// `true` if the element carries either icon marker class.
pub fn is_visibility_icon(node: &Node) -> bool {
    node.has_class(ICON_MASKED_CLASS) || node.has_class(ICON_VISIBLE_CLASS)
}
