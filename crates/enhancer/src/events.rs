//! Event kinds and the listener registry.
//!
//! Handlers are a closed set of behaviors rather than closures: the
//! registry stays cloneable and inspectable, and dispatch is a plain
//! match. Listeners are a flat list, so registering the same behavior
//! twice really does run it twice on dispatch; anything where a double
//! run is not harmless must be guarded at registration time (see the
//! toggle wiring marker).

use dom::Id;

/// The UI events the enhancer reacts to. All handlers run synchronously
/// to completion; there is no queueing or re-entrancy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    Focus,
    Blur,
    PointerEnter,
    PointerLeave,
    Click,
}

/// What a listener does when its event fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Behavior {
    /// Accent border + glow on the field.
    FieldFocus,
    /// Glow off; border reset only if the field is empty.
    FieldBlur,
    /// Toggle hover-in: accent text color.
    ToggleHoverIn,
    /// Toggle hover-out: resting text color.
    ToggleHoverOut,
    /// Flip the associated password field's masking.
    ToggleClick,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Listener {
    pub target: Id,
    pub kind: EventKind,
    pub behavior: Behavior,
}
