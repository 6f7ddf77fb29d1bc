//! # field_state
//!
//! UI-agnostic per-field state side table for form enhancement.
//!
//! The enhancement layer needs two pieces of state that do not belong in
//! the element tree: the field's current value (so the blur policy can
//! ask "is this empty?") and its visual state in the focus/blur cycle.
//! This crate keeps both behind an opaque [`FieldId`], with no dependency
//! on any DOM representation, so the transition logic is testable on its
//! own.

mod id;
mod state;
mod store;

pub use id::FieldId;
pub use store::{FieldStore, VisualState};
