//! The enhancement pass and event dispatch.
//!
//! A pass scans a subtree, brings every recognized control to the visual
//! baseline, and registers listeners for the interactive transitions.
//! The pass runs twice per page by design (eagerly, then on the DOM
//! ready signal); every style write is idempotent and click wiring is
//! guarded by a per-element marker attribute, so the passes commute.
//!
//! Nothing in here surfaces an error: a lookup that finds no element,
//! no password field, or no icon degrades to a no-op. Enhancement must
//! never break the page it decorates.

use crate::baseline::{
    ACCENT_COLOR, TOGGLE_RESTING_COLOR, apply_checkbox_baseline, apply_field_baseline,
    apply_toggle_baseline, apply_visual_state,
};
use crate::controls::{self, ControlKind};
use crate::events::{Behavior, EventKind, Listener};
use crate::visibility::{self, Visibility};
use dom::{Id, Node};
use field_state::{FieldId, FieldStore, VisualState};
use style::set_property;

fn field_id(id: Id) -> FieldId {
    FieldId::from_raw(id.0 as u64)
}

#[derive(Debug, Default)]
struct EnhanceStats {
    fields: usize,
    checkboxes: usize,
    toggles: usize,
}

/// Form enhancer for one document.
///
/// Owns the listener registry and the per-field state table; the DOM
/// itself stays with the caller and is borrowed for each pass or event.
#[derive(Debug, Default)]
pub struct Enhancer {
    listeners: Vec<Listener>,
    fields: FieldStore,
}

impl Enhancer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The eager enhancement pass over the whole document.
    ///
    /// Assigns node ids and seeds inline styles first so that both are
    /// in place no matter how early this runs.
    pub fn enhance(&mut self, dom: &mut Node) {
        dom::assign_node_ids(dom);
        style::attach_inline_styles(dom);
        let mut stats = EnhanceStats::default();
        self.enhance_node(dom, &mut stats);
        log::debug!(
            target: "enhancer",
            "pass complete: {} fields, {} checkboxes, {} toggles",
            stats.fields,
            stats.checkboxes,
            stats.toggles
        );
    }

    /// The DOM-ready pass. Identical to [`enhance`](Self::enhance); it
    /// exists so hosts can wire both lifecycle points explicitly.
    pub fn on_dom_content_loaded(&mut self, dom: &mut Node) {
        self.enhance(dom);
    }

    /// Enhance only the subtree rooted at `scope`, for fragments
    /// inserted after the initial passes. Unknown ids are a no-op.
    pub fn enhance_subtree(&mut self, dom: &mut Node, scope: Id) {
        dom::assign_node_ids(dom);
        style::attach_inline_styles(dom);
        let mut stats = EnhanceStats::default();
        let Some(root) = dom::find_node_by_id_mut(dom, scope) else {
            return;
        };
        self.enhance_node(root, &mut stats);
        log::debug!(
            target: "enhancer",
            "scoped pass under #{}: {} fields, {} checkboxes, {} toggles",
            scope.0,
            stats.fields,
            stats.checkboxes,
            stats.toggles
        );
    }

    /// Deliver a UI event to an element. Runs every matching listener
    /// synchronously, in registration order, to completion.
    pub fn dispatch(&mut self, dom: &mut Node, target: Id, event: EventKind) {
        let matched: Vec<Behavior> = self
            .listeners
            .iter()
            .filter(|l| l.target == target && l.kind == event)
            .map(|l| l.behavior)
            .collect();
        for behavior in matched {
            match behavior {
                Behavior::FieldFocus => {
                    let state = self.fields.focus(field_id(target));
                    apply_state_to_element(dom, target, state);
                }
                Behavior::FieldBlur => {
                    let state = self.fields.blur(field_id(target));
                    apply_state_to_element(dom, target, state);
                }
                Behavior::ToggleHoverIn => set_text_color(dom, target, ACCENT_COLOR),
                Behavior::ToggleHoverOut => set_text_color(dom, target, TOGGLE_RESTING_COLOR),
                Behavior::ToggleClick => self.on_toggle_click(dom, target),
            }
        }
    }

    /// Report a value change (the host's input handling feeds this) so
    /// the blur policy sees current content, not the parse-time value.
    pub fn input_value_changed(&mut self, target: Id, value: &str) {
        self.fields.set_value(field_id(target), value);
    }

    pub fn fields(&self) -> &FieldStore {
        &self.fields
    }

    fn listen(&mut self, target: Id, kind: EventKind, behavior: Behavior) {
        self.listeners.push(Listener {
            target,
            kind,
            behavior,
        });
    }

    fn enhance_node(&mut self, node: &mut Node, stats: &mut EnhanceStats) {
        match controls::classify(node) {
            Some(ControlKind::Checkbox) => {
                if let Some(style) = node.inline_style_mut() {
                    apply_checkbox_baseline(style);
                }
                style::sync_style_attribute(node);
                stats.checkboxes += 1;
            }
            Some(kind) => {
                self.enhance_field(node, kind);
                stats.fields += 1;
            }
            None => {
                if controls::is_toggle_control(node) {
                    self.enhance_toggle(node);
                    stats.toggles += 1;
                }
            }
        }
        if let Some(children) = node.children_mut() {
            for c in children {
                self.enhance_node(c, stats);
            }
        }
    }

    fn enhance_field(&mut self, node: &mut Node, kind: ControlKind) {
        let id = node.id();
        if let Some(style) = node.inline_style_mut() {
            apply_field_baseline(style);
        }
        style::sync_style_attribute(node);
        self.fields
            .ensure_initial(field_id(id), controls::initial_value(node, kind));
        self.listen(id, EventKind::Focus, Behavior::FieldFocus);
        self.listen(id, EventKind::Blur, Behavior::FieldBlur);
    }

    fn enhance_toggle(&mut self, node: &mut Node) {
        let id = node.id();
        if let Some(style) = node.inline_style_mut() {
            apply_toggle_baseline(style);
        }
        style::sync_style_attribute(node);
        self.listen(id, EventKind::PointerEnter, Behavior::ToggleHoverIn);
        self.listen(id, EventKind::PointerLeave, Behavior::ToggleHoverOut);
        // Click wiring is the one registration where a double run would
        // be observable (two flips cancel out), so it is guarded by the
        // per-element marker.
        if !node.has_attr(controls::WIRED_ATTR) {
            node.set_attr(controls::WIRED_ATTR, "1");
            self.listen(id, EventKind::Click, Behavior::ToggleClick);
            log::trace!(target: "enhancer", "wired toggle #{}", id.0);
        }
    }

    fn on_toggle_click(&mut self, dom: &mut Node, toggle: Id) {
        let Some(field) = locate_password_field(dom, toggle) else {
            log::trace!(target: "enhancer", "toggle #{} has no associated password field", toggle.0);
            return;
        };
        let Some(node) = dom::find_node_by_id_mut(dom, field) else {
            return;
        };
        let next = visibility::next_state(Visibility::from_type_attr(node.attr("type")));
        visibility::apply_to_field(node, next);

        if let Some(icon) = locate_icon(dom, toggle) {
            if let Some(icon_node) = dom::find_node_by_id_mut(dom, icon) {
                visibility::apply_to_icon(icon_node, next);
            }
        }
    }
}

fn apply_state_to_element(dom: &mut Node, target: Id, state: VisualState) {
    let Some(node) = dom::find_node_by_id_mut(dom, target) else {
        return;
    };
    if let Some(style) = node.inline_style_mut() {
        apply_visual_state(style, state);
    }
    style::sync_style_attribute(node);
}

fn set_text_color(dom: &mut Node, target: Id, color: &str) {
    let Some(node) = dom::find_node_by_id_mut(dom, target) else {
        return;
    };
    if let Some(style) = node.inline_style_mut() {
        set_property(style, "color", color);
    }
    style::sync_style_attribute(node);
}

/// Find the password field a toggle acts on.
///
/// The preceding element sibling wins if it is an `<input>` at all; its
/// `type` may legitimately read `text` while the field is revealed, so
/// no type check is applied on this path. The fallback searches the
/// toggle's parent for a descendant input that is currently masked.
/// Structural lookup like this is fragile to markup changes; hosts that
/// can should place the field directly before the toggle.
fn locate_password_field(dom: &Node, toggle: Id) -> Option<Id> {
    if let Some(prev) = dom::preceding_element_sibling(dom, toggle) {
        if let Some(node) = dom::find_node_by_id(dom, prev) {
            if node.is_element_named("input") {
                return Some(prev);
            }
        }
    }
    let parent = dom::parent_of(dom, toggle)?;
    let parent_node = dom::find_node_by_id(dom, parent)?;
    dom::find_element(parent_node, &controls::is_password_input).map(|n| n.id())
}

/// First descendant of the toggle carrying either icon marker class.
fn locate_icon(dom: &Node, toggle: Id) -> Option<Id> {
    let toggle_node = dom::find_node_by_id(dom, toggle)?;
    for c in toggle_node.children()? {
        if let Some(found) = dom::find_element(c, &visibility::is_visibility_icon) {
            return Some(found.id());
        }
    }
    None
}
