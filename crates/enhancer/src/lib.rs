//! # enhancer
//!
//! Best-effort form enhancement over a parsed document: every
//! recognized control is brought to a consistent visual baseline, and
//! password-visibility toggles are wired, independent of whatever
//! styling the page author applied.
//!
//! The contract is silent degradation throughout: missing elements,
//! missing password fields, and missing icons are no-ops, never errors.
//! A pass may run any number of times over the same tree and leaves the
//! same final state as a single run.

pub mod baseline;
pub mod controls;
pub mod visibility;

mod enhance;
mod events;

pub use crate::enhance::Enhancer;
pub use crate::events::EventKind;
pub use crate::visibility::{Visibility, next_state};
