//! Minimal DOM for form enhancement.
//!
//! Owns the node tree representation, a practical (non-spec-complete)
//! HTML parser, node identity, and traversal helpers. Higher layers
//! mutate elements through ids handed out by [`assign_node_ids`].

pub mod outline;
pub mod traverse;

mod parse;
mod types;

pub use crate::parse::parse_document;
pub use crate::traverse::{
    assign_node_ids, find_element, find_node_by_id, find_node_by_id_mut, for_each_element,
    parent_of, preceding_element_sibling,
};
pub use crate::types::{Id, Node, NodeId};
