//! Internal per-field state kept by the store.

use crate::VisualState;

/// State for one enhanced field. Not exposed publicly; managed by
/// [`FieldStore`](crate::FieldStore).
#[derive(Clone, Debug, Default)]
pub(crate) struct FieldState {
    /// Current text value as last reported by the host.
    pub value: String,

    /// Where the field sits in the focus/blur styling cycle.
    pub visual: VisualState,
}
