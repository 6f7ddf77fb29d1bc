pub type NodeId = u32;

/// Identity of a node within one parsed tree. `Id(0)` means "not yet
/// assigned"; see [`assign_node_ids`](crate::traverse::assign_node_ids).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Id(pub NodeId);

#[derive(Debug)]
pub enum Node {
    Document {
        id: Id,
        doctype: Option<String>,
        children: Vec<Node>,
    },
    Element {
        id: Id,
        name: String,
        attributes: Vec<(String, Option<String>)>,
        /// Live inline style declarations, lowest-level source of truth
        /// for per-element presentation. Kept separate from the `style`
        /// attribute text; see `style::sync_style_attribute`.
        style: Vec<(String, String)>,
        children: Vec<Node>,
    },
    Text {
        id: Id,
        text: String,
    },
    Comment {
        id: Id,
        text: String,
    },
}

impl Node {
    pub fn id(&self) -> Id {
        match self {
            Node::Document { id, .. } => *id,
            Node::Element { id, .. } => *id,
            Node::Text { id, .. } => *id,
            Node::Comment { id, .. } => *id,
        }
    }

    pub fn set_id(&mut self, new_id: Id) {
        match self {
            Node::Document { id, .. } => *id = new_id,
            Node::Element { id, .. } => *id = new_id,
            Node::Text { id, .. } => *id = new_id,
            Node::Comment { id, .. } => *id = new_id,
        }
    }

    /// Element tag name, lowercased at parse time. `None` for non-elements.
    pub fn name(&self) -> Option<&str> {
        match self {
            Node::Element { name, .. } => Some(name.as_str()),
            _ => None,
        }
    }

    pub fn is_element_named(&self, target: &str) -> bool {
        self.name().is_some_and(|n| n.eq_ignore_ascii_case(target))
    }

    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Document { children, .. } | Node::Element { children, .. } => Some(children),
            _ => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Document { children, .. } | Node::Element { children, .. } => Some(children),
            _ => None,
        }
    }

    /// Value of an attribute, matched case-insensitively by name.
    ///
    /// Returns `None` for non-elements, for absent attributes, and for
    /// boolean attributes written without a value (`<input disabled>`).
    pub fn attr(&self, key: &str) -> Option<&str> {
        match self {
            Node::Element { attributes, .. } => attributes
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(key))
                .and_then(|(_, v)| v.as_deref()),
            _ => None,
        }
    }

    /// `true` if the attribute is present at all, valueless or not.
    pub fn has_attr(&self, key: &str) -> bool {
        match self {
            Node::Element { attributes, .. } => {
                attributes.iter().any(|(k, _)| k.eq_ignore_ascii_case(key))
            }
            _ => false,
        }
    }

    /// Set or replace an attribute. No-op on non-elements.
    pub fn set_attr(&mut self, key: &str, value: &str) {
        let Node::Element { attributes, .. } = self else {
            return;
        };
        if let Some(slot) = attributes
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
        {
            slot.1 = Some(value.to_string());
        } else {
            attributes.push((key.to_ascii_lowercase(), Some(value.to_string())));
        }
    }

    /// `true` if the whitespace-separated `class` attribute contains `want`.
    /// Class comparison is exact (case-sensitive), as in the web platform.
    pub fn has_class(&self, want: &str) -> bool {
        self.attr("class")
            .is_some_and(|list| list.split_whitespace().any(|c| c == want))
    }

    pub fn add_class(&mut self, class: &str) {
        if self.has_class(class) {
            return;
        }
        let merged = match self.attr("class") {
            Some(existing) if !existing.trim().is_empty() => format!("{existing} {class}"),
            _ => class.to_string(),
        };
        self.set_attr("class", &merged);
    }

    pub fn remove_class(&mut self, class: &str) {
        let Some(existing) = self.attr("class") else {
            return;
        };
        if !existing.split_whitespace().any(|c| c == class) {
            return;
        }
        let remaining = existing
            .split_whitespace()
            .filter(|c| *c != class)
            .collect::<Vec<_>>()
            .join(" ");
        self.set_attr("class", &remaining);
    }

    /// Swap two mutually exclusive marker classes: whichever of the pair is
    /// present is removed and the other added. With neither present, `a` is
    /// added so the element ends up in a known state.
    pub fn swap_class(&mut self, a: &str, b: &str) {
        if self.has_class(a) {
            self.remove_class(a);
            self.add_class(b);
        } else {
            self.remove_class(b);
            self.add_class(a);
        }
    }

    pub fn inline_style(&self) -> Option<&[(String, String)]> {
        match self {
            Node::Element { style, .. } => Some(style),
            _ => None,
        }
    }

    pub fn inline_style_mut(&mut self) -> Option<&mut Vec<(String, String)>> {
        match self {
            Node::Element { style, .. } => Some(style),
            _ => None,
        }
    }
}
