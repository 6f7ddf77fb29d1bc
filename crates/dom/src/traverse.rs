use crate::types::{Id, Node};

/// Assign fresh ids to every node that still carries `Id(0)`.
///
/// Ids already assigned are kept, so re-running after inserting a fragment
/// only numbers the new nodes.
pub fn assign_node_ids(root: &mut Node) {
    fn walk(node: &mut Node, next: &mut u32) {
        if node.id() == Id(0) {
            let id = Id(*next);
            *next = next.wrapping_add(1);
            node.set_id(id);
        }
        if let Some(children) = node.children_mut() {
            for c in children {
                walk(c, next);
            }
        }
    }

    let mut next = highest_assigned_id(root).wrapping_add(1).max(1);
    walk(root, &mut next);
}

fn highest_assigned_id(node: &Node) -> u32 {
    let mut max = node.id().0;
    if let Some(children) = node.children() {
        for c in children {
            max = max.max(highest_assigned_id(c));
        }
    }
    max
}

pub fn find_node_by_id(node: &Node, id: Id) -> Option<&Node> {
    if node.id() == id {
        return Some(node);
    }
    for c in node.children()? {
        if let Some(found) = find_node_by_id(c, id) {
            return Some(found);
        }
    }
    None
}

pub fn find_node_by_id_mut(node: &mut Node, id: Id) -> Option<&mut Node> {
    if node.id() == id {
        return Some(node);
    }
    for c in node.children_mut()? {
        if let Some(found) = find_node_by_id_mut(c, id) {
            return Some(found);
        }
    }
    None
}

/// Id of the parent of `target`, or `None` for the root / unknown ids.
pub fn parent_of(root: &Node, target: Id) -> Option<Id> {
    let children = root.children()?;
    for c in children {
        if c.id() == target {
            return Some(root.id());
        }
        if let Some(found) = parent_of(c, target) {
            return Some(found);
        }
    }
    None
}

/// Id of the nearest preceding *element* sibling of `target`, skipping
/// text and comment nodes, or `None` when `target` is the first element
/// under its parent.
pub fn preceding_element_sibling(root: &Node, target: Id) -> Option<Id> {
    let parent = parent_of(root, target)?;
    let parent_node = find_node_by_id(root, parent)?;
    let mut last_element: Option<Id> = None;
    for c in parent_node.children()? {
        if c.id() == target {
            return last_element;
        }
        if matches!(c, Node::Element { .. }) {
            last_element = Some(c.id());
        }
    }
    None
}

/// Visit every element in the subtree in document order.
pub fn for_each_element(node: &Node, visit: &mut impl FnMut(&Node)) {
    if matches!(node, Node::Element { .. }) {
        visit(node);
    }
    if let Some(children) = node.children() {
        for c in children {
            for_each_element(c, visit);
        }
    }
}

/// First element in the subtree matching the predicate, in document order.
/// The subtree root itself is considered.
pub fn find_element<'a>(node: &'a Node, matches: &impl Fn(&Node) -> bool) -> Option<&'a Node> {
    if matches!(node, Node::Element { .. }) && matches(node) {
        return Some(node);
    }
    for c in node.children()? {
        if let Some(found) = find_element(c, matches) {
            return Some(found);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_document;

    fn id_of(dom: &Node, tag: &str) -> Id {
        find_element(dom, &|n| n.is_element_named(tag))
            .unwrap_or_else(|| panic!("expected a <{tag}> element"))
            .id()
    }

    #[test]
    fn assign_node_ids_gives_every_node_a_unique_id() {
        let mut dom = parse_document("<div><input><span>x</span></div>");
        assign_node_ids(&mut dom);

        let mut ids = Vec::new();
        fn collect(node: &Node, out: &mut Vec<Id>) {
            out.push(node.id());
            if let Some(children) = node.children() {
                for c in children {
                    collect(c, out);
                }
            }
        }
        collect(&dom, &mut ids);

        assert!(ids.iter().all(|id| id.0 != 0), "no node may stay unassigned");
        let mut deduped = ids.clone();
        deduped.sort_by_key(|id| id.0);
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len(), "ids must be unique");
    }

    #[test]
    fn reassignment_keeps_existing_ids_and_numbers_new_nodes() {
        let mut dom = parse_document("<div></div>");
        assign_node_ids(&mut dom);
        let div = id_of(&dom, "div");

        let fragment = parse_document("<input>");
        let Node::Document { children, .. } = fragment else {
            unreachable!();
        };
        find_node_by_id_mut(&mut dom, div)
            .unwrap()
            .children_mut()
            .unwrap()
            .extend(children);
        assign_node_ids(&mut dom);

        assert_eq!(id_of(&dom, "div"), div, "existing id must survive");
        assert_ne!(id_of(&dom, "input").0, 0, "new node must get an id");
    }

    #[test]
    fn find_node_by_id_mut_reaches_nested_nodes() {
        let mut dom = parse_document("<form><div><input type=password></div></form>");
        assign_node_ids(&mut dom);
        let input = id_of(&dom, "input");

        find_node_by_id_mut(&mut dom, input)
            .unwrap()
            .set_attr("type", "text");
        assert_eq!(
            find_node_by_id(&dom, input).unwrap().attr("type"),
            Some("text")
        );
    }

    #[test]
    fn preceding_element_sibling_skips_text_nodes() {
        let mut dom = parse_document("<div><input type=password> \n <button>show</button></div>");
        assign_node_ids(&mut dom);
        let button = id_of(&dom, "button");
        let input = id_of(&dom, "input");

        assert_eq!(preceding_element_sibling(&dom, button), Some(input));
    }

    #[test]
    fn first_element_under_parent_has_no_preceding_sibling() {
        let mut dom = parse_document("<div>text<input></div>");
        assign_node_ids(&mut dom);
        let input = id_of(&dom, "input");
        assert_eq!(preceding_element_sibling(&dom, input), None);
    }

    #[test]
    fn parent_of_root_is_none() {
        let mut dom = parse_document("<div></div>");
        assign_node_ids(&mut dom);
        assert_eq!(parent_of(&dom, dom.id()), None);
    }
}
