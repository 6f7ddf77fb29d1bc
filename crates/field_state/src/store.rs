//! Central side table for enhanced-field state.
//!
//! The store is UI-agnostic: it never touches an element tree. The
//! enhancement layer reports focus, blur, and value changes; the store
//! answers with the resulting visual state, and the enhancement layer
//! translates that into style mutations.

use crate::id::FieldId;
use crate::state::FieldState;
use std::collections::HashMap;

/// Visual styling state of a field across the focus/blur cycle.
///
/// `Filled` exists so a blurred field that still holds content keeps its
/// accent border, visually separating "touched and filled" from
/// "untouched".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VisualState {
    #[default]
    Default,
    Focused,
    Filled,
}

/// Side table of per-field values and visual states.
///
/// # Example
///
/// ```
/// use field_state::{FieldId, FieldStore, VisualState};
///
/// let mut store = FieldStore::new();
/// let id = FieldId::from_raw(1);
///
/// store.ensure_initial(id, String::new());
/// assert_eq!(store.focus(id), VisualState::Focused);
/// store.set_value(id, "hello");
/// assert_eq!(store.blur(id), VisualState::Filled);
/// ```
#[derive(Clone, Debug, Default)]
pub struct FieldStore {
    fields: HashMap<FieldId, FieldState>,
}

impl FieldStore {
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    pub fn has(&self, id: FieldId) -> bool {
        self.fields.contains_key(&id)
    }

    /// Ensure an entry exists; if missing, seeds it with `initial`.
    /// Existing entries are untouched, so repeated enhancement passes do
    /// not reset a value the host has since updated.
    pub fn ensure_initial(&mut self, id: FieldId, initial: String) {
        self.fields.entry(id).or_insert(FieldState {
            value: initial,
            visual: VisualState::Default,
        });
    }

    /// Overwrite the current value, as reported by the host on user input.
    pub fn set_value(&mut self, id: FieldId, value: &str) {
        let st = self.fields.entry(id).or_default();
        st.value = value.to_string();
    }

    pub fn value(&self, id: FieldId) -> Option<&str> {
        self.fields.get(&id).map(|s| s.value.as_str())
    }

    /// `true` when the field has no content. Unknown fields count as
    /// empty, which matches the blur policy's "untouched" branch.
    pub fn is_empty(&self, id: FieldId) -> bool {
        self.fields.get(&id).is_none_or(|s| s.value.is_empty())
    }

    pub fn visual(&self, id: FieldId) -> VisualState {
        self.fields.get(&id).map(|s| s.visual).unwrap_or_default()
    }

    /// Record focus. Always lands on `Focused` regardless of content.
    pub fn focus(&mut self, id: FieldId) -> VisualState {
        let st = self.fields.entry(id).or_default();
        st.visual = VisualState::Focused;
        st.visual
    }

    /// Record blur. A field with content settles on `Filled`, an empty
    /// one returns to `Default`.
    pub fn blur(&mut self, id: FieldId) -> VisualState {
        let st = self.fields.entry(id).or_default();
        st.visual = if st.value.is_empty() {
            VisualState::Default
        } else {
            VisualState::Filled
        };
        st.visual
    }

    /// Drop all state, typically when the host replaces the document.
    pub fn clear(&mut self) {
        self.fields.clear();
    }
}
