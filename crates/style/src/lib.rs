//! Inline-style declaration handling.
//!
//! An element's presentation lives in two places: the `style` attribute
//! text and the parsed declaration list on the node. This crate parses
//! the former into the latter, provides idempotent property edits, and
//! serializes edits back so output markup reflects them.

use dom::Node;

/// A parsed inline declaration list: `(property, value)` pairs with
/// lowercase property names, last write wins.
pub type Declarations = Vec<(String, String)>;

/// Parse `"color: red; font-size: 12px"` into declaration pairs.
/// Malformed segments are skipped; property names are lowercased.
pub fn parse_declarations(input: &str) -> Declarations {
    input
        .split(';')
        .filter_map(|pair| {
            let (n, v) = pair.split_once(':')?;
            let name = n.trim().to_ascii_lowercase();
            if name.is_empty() {
                return None;
            }
            Some((name, v.trim().to_string()))
        })
        .collect()
}

pub fn serialize_declarations(declarations: &[(String, String)]) -> String {
    let mut out = String::new();
    for (i, (name, value)) in declarations.iter().enumerate() {
        if i != 0 {
            out.push(' ');
        }
        out.push_str(name);
        out.push_str(": ");
        out.push_str(value);
        out.push(';');
    }
    out
}

pub fn get_property<'a>(declarations: &'a [(String, String)], name: &str) -> Option<&'a str> {
    declarations
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

/// Set a property, replacing any existing declaration for the same name.
/// Setting an identical value leaves the list unchanged, so repeated
/// application is observably idempotent.
pub fn set_property(declarations: &mut Declarations, name: &str, value: &str) {
    if let Some(slot) = declarations
        .iter_mut()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
    {
        if slot.1 != value {
            slot.1 = value.to_string();
        }
    } else {
        declarations.push((name.to_ascii_lowercase(), value.to_string()));
    }
}

pub fn remove_property(declarations: &mut Declarations, name: &str) {
    declarations.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
}

/// Seed every element's declaration list from its `style` attribute.
/// Elements whose list is already populated are left alone, so the walk
/// can run once per parse without clobbering later edits.
pub fn attach_inline_styles(node: &mut Node) {
    if let Node::Element {
        attributes, style, ..
    } = node
    {
        if style.is_empty() {
            let inline = attributes
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case("style"))
                .and_then(|(_, v)| v.as_deref());
            if let Some(inline) = inline {
                *style = parse_declarations(inline);
            }
        }
    }
    if let Some(children) = node.children_mut() {
        for c in children {
            attach_inline_styles(c);
        }
    }
}

/// Write an element's declaration list back into its `style` attribute.
/// No-op for non-elements and for elements with no declarations.
pub fn sync_style_attribute(node: &mut Node) {
    let Some(declarations) = node.inline_style() else {
        return;
    };
    if declarations.is_empty() {
        return;
    }
    let text = serialize_declarations(declarations);
    node.set_attr("style", &text);
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom::parse_document;

    #[test]
    fn parse_skips_malformed_segments() {
        let declarations = parse_declarations("color: red; nonsense; : bad; width:100%");
        assert_eq!(
            declarations,
            vec![
                ("color".to_string(), "red".to_string()),
                ("width".to_string(), "100%".to_string()),
            ]
        );
    }

    #[test]
    fn property_names_are_lowercased_but_values_kept() {
        let declarations = parse_declarations("Border-Color: #CED4DA");
        assert_eq!(get_property(&declarations, "border-color"), Some("#CED4DA"));
    }

    #[test]
    fn set_property_upserts_without_duplicates() {
        let mut declarations = Declarations::new();
        set_property(&mut declarations, "border-color", "#ced4da");
        set_property(&mut declarations, "border-color", "#4a7c59");
        assert_eq!(declarations.len(), 1);
        assert_eq!(get_property(&declarations, "border-color"), Some("#4a7c59"));
    }

    #[test]
    fn set_property_twice_with_same_value_changes_nothing() {
        let mut declarations = parse_declarations("width: 100%");
        let before = declarations.clone();
        set_property(&mut declarations, "width", "100%");
        assert_eq!(declarations, before);
    }

    #[test]
    fn remove_property_tolerates_absent_names() {
        let mut declarations = parse_declarations("width: 100%");
        remove_property(&mut declarations, "box-shadow");
        assert_eq!(declarations.len(), 1);
    }

    #[test]
    fn attach_then_sync_round_trips_the_style_attribute() {
        let mut dom = parse_document(r#"<input style="color: red; width: 50%">"#);
        dom::assign_node_ids(&mut dom);
        attach_inline_styles(&mut dom);
        let input_id = dom::find_element(&dom, &|n| n.is_element_named("input"))
            .expect("input parses")
            .id();
        {
            let input = dom::find_node_by_id_mut(&mut dom, input_id).expect("id resolves");
            let style = input.inline_style_mut().expect("element style");
            set_property(style, "width", "100%");
            sync_style_attribute(input);
        }
        let input = dom::find_node_by_id(&dom, input_id).expect("id resolves");
        assert_eq!(input.attr("style"), Some("color: red; width: 100%;"));
    }

    #[test]
    fn attach_does_not_clobber_existing_declarations() {
        let mut dom = parse_document(r#"<input style="color: red">"#);
        attach_inline_styles(&mut dom);
        {
            let input = dom::find_element(&dom, &|n| n.is_element_named("input")).unwrap();
            assert_eq!(get_property(input.inline_style().unwrap(), "color"), Some("red"));
        }
        // A second attach pass (the eager + dom-ready double run) is a no-op.
        let Node::Document { children, .. } = &mut dom else {
            unreachable!();
        };
        let style = children[0].inline_style_mut().unwrap();
        set_property(style, "color", "blue");
        attach_inline_styles(&mut dom);
        let input = dom::find_element(&dom, &|n| n.is_element_named("input")).unwrap();
        assert_eq!(get_property(input.inline_style().unwrap(), "color"), Some("blue"));
    }
}
