//! Capped, indented DOM outline for debug output.

use crate::types::Node;
use std::fmt::Write;

const PREVIEW_CHARS: usize = 40;

fn push_preview(out: &mut String, s: &str) {
    let mut truncated = false;
    for (i, ch) in s.chars().enumerate() {
        if i == PREVIEW_CHARS {
            truncated = true;
            break;
        }
        out.push(if ch == '\n' { ' ' } else { ch });
    }
    if truncated {
        out.push('…');
    }
}

fn first_styles(style: &[(String, String)]) -> String {
    let mut out = String::new();
    for (i, (k, v)) in style.iter().take(3).enumerate() {
        if i != 0 {
            out.push(' ');
        }
        let _ = write!(&mut out, "{k}: {v};");
    }
    out
}

/// Render the tree as one line per node, depth-indented, capped at `cap`
/// lines. Inline style is previewed as a trailing comment.
pub fn outline_from_dom(root: &Node, cap: usize) -> Vec<String> {
    fn walk(node: &Node, depth: usize, out: &mut Vec<String>, left: &mut usize) {
        if *left == 0 {
            return;
        }
        *left -= 1;
        let indent = "  ".repeat(depth);
        match node {
            Node::Document {
                doctype, children, ..
            } => {
                match doctype {
                    Some(dt) => out.push(format!("{indent}<!{dt}>")),
                    None => out.push(format!("{indent}#document")),
                }
                for c in children {
                    walk(c, depth + 1, out, left);
                }
            }
            Node::Element {
                name,
                attributes,
                style,
                children,
                ..
            } => {
                let mut line = format!("{indent}<{name}");
                for key in ["id", "class", "type"] {
                    if let Some(v) = attributes
                        .iter()
                        .find(|(k, _)| k == key)
                        .and_then(|(_, v)| v.as_deref())
                    {
                        let _ = write!(&mut line, r#" {key}="{v}""#);
                    }
                }
                line.push('>');
                let styles = first_styles(style);
                if !styles.is_empty() {
                    let _ = write!(&mut line, "  /* {styles} */");
                }
                out.push(line);
                for c in children {
                    walk(c, depth + 1, out, left);
                }
            }
            Node::Text { text, .. } => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    *left += 1; // whitespace-only text takes no line
                    return;
                }
                let mut line = format!("{indent}\"");
                push_preview(&mut line, trimmed);
                line.push('"');
                out.push(line);
            }
            Node::Comment { text, .. } => {
                let mut line = format!("{indent}<!-- ");
                push_preview(&mut line, text.trim());
                line.push_str(" -->");
                out.push(line);
            }
        }
    }

    let mut out = Vec::new();
    let mut left = cap;
    walk(root, 0, &mut out, &mut left);
    out
}
