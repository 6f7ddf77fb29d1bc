//! Practical HTML tokenizer and tree builder.
//!
//! Tag and attribute names are constrained to ASCII `[A-Za-z0-9:_-]` and
//! lowercased on the way in. This is deliberately not an HTML5-spec
//! tokenizer: no parse-error recovery states, no foster parenting, and
//! only a narrow entity subset. Pages this library enhances are expected
//! to be ordinary well-formed markup; anything stranger still parses into
//! *some* tree rather than failing.
//!
//! Known limitations (intentional):
//! - Mismatched end tags pop open elements until a match, dropping the
//!   unmatched ones silently.
//! - Rawtext scanning (`<script>`, `<style>`) accepts only ASCII
//!   whitespace between the close tag name and `>`.

use crate::types::{Id, Node};
use memchr::memchr;

const COMMENT_START: &str = "<!--";
const COMMENT_END: &str = "-->";

/// Parse an HTML document into a node tree. Node ids are left unassigned
/// (`Id(0)`); callers that need identity run
/// [`assign_node_ids`](crate::traverse::assign_node_ids) afterwards.
pub fn parse_document(input: &str) -> Node {
    let mut builder = TreeBuilder::new();
    tokenize_into(input, &mut builder);
    builder.finish()
}

fn is_void_element(name: &str) -> bool {
    matches!(
        name,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b':'
}

struct TreeBuilder {
    doctype: Option<String>,
    /// Children collected directly under the document root.
    top: Vec<Node>,
    /// Open elements awaiting their end tag.
    open: Vec<OpenElement>,
}

struct OpenElement {
    name: String,
    attributes: Vec<(String, Option<String>)>,
    children: Vec<Node>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            doctype: None,
            top: Vec::new(),
            open: Vec::new(),
        }
    }

    fn sink(&mut self) -> &mut Vec<Node> {
        match self.open.last_mut() {
            Some(open) => &mut open.children,
            None => &mut self.top,
        }
    }

    fn doctype(&mut self, value: String) {
        if self.doctype.is_none() {
            self.doctype = Some(value);
        }
    }

    fn text(&mut self, text: String) {
        if !text.is_empty() {
            self.sink().push(Node::Text { id: Id(0), text });
        }
    }

    fn comment(&mut self, text: String) {
        self.sink().push(Node::Comment { id: Id(0), text });
    }

    fn start_tag(
        &mut self,
        name: String,
        attributes: Vec<(String, Option<String>)>,
        self_closing: bool,
    ) {
        if self_closing {
            self.sink().push(Node::Element {
                id: Id(0),
                name,
                attributes,
                style: Vec::new(),
                children: Vec::new(),
            });
        } else {
            self.open.push(OpenElement {
                name,
                attributes,
                children: Vec::new(),
            });
        }
    }

    fn end_tag(&mut self, target: &str) {
        if !self.open.iter().any(|o| o.name == target) {
            log::trace!(target: "dom.parse", "dropping unmatched end tag </{target}>");
            return;
        }
        loop {
            let Some(open) = self.open.pop() else {
                return;
            };
            let done = open.name == target;
            let node = Node::Element {
                id: Id(0),
                name: open.name,
                attributes: open.attributes,
                style: Vec::new(),
                children: open.children,
            };
            self.sink().push(node);
            if done {
                return;
            }
        }
    }

    fn finish(mut self) -> Node {
        // Close anything left open at end of input.
        while let Some(open) = self.open.pop() {
            let node = Node::Element {
                id: Id(0),
                name: open.name,
                attributes: open.attributes,
                style: Vec::new(),
                children: open.children,
            };
            self.sink().push(node);
        }
        Node::Document {
            id: Id(0),
            doctype: self.doctype,
            children: self.top,
        }
    }
}

fn tokenize_into(input: &str, builder: &mut TreeBuilder) {
    let bytes = input.as_bytes();
    let len = bytes.len();
    let mut i = 0;

    // Invariant: slice endpoints are always UTF-8 char boundaries because we
    // only cut at ASCII structural bytes or positions reached by scanning
    // ASCII-only runs.
    while i < len {
        if bytes[i] != b'<' {
            let start = i;
            i = match memchr(b'<', &bytes[i..]) {
                Some(rel) => i + rel,
                None => len,
            };
            builder.text(decode_entities(&input[start..i]));
            continue;
        }

        if input[i..].starts_with(COMMENT_START) {
            let body_start = i + COMMENT_START.len();
            match input[body_start..].find(COMMENT_END) {
                Some(rel) => {
                    builder.comment(input[body_start..body_start + rel].to_string());
                    i = body_start + rel + COMMENT_END.len();
                }
                None => {
                    builder.comment(input[body_start..].to_string());
                    i = len;
                }
            }
            continue;
        }

        if bytes[i..].len() >= 9 && bytes[i..i + 9].eq_ignore_ascii_case(b"<!doctype") {
            let rest = &input[i + 2..];
            match rest.find('>') {
                Some(end) => {
                    builder.doctype(rest[..end].trim().to_string());
                    i += 2 + end + 1;
                }
                None => i = len,
            }
            continue;
        }

        if i + 1 < len && bytes[i + 1] == b'/' {
            let start = i + 2;
            let mut j = start;
            while j < len && is_name_byte(bytes[j]) {
                j += 1;
            }
            let name = input[start..j].to_ascii_lowercase();
            while j < len && bytes[j] != b'>' {
                j += 1;
            }
            if j < len {
                j += 1;
            }
            builder.end_tag(&name);
            i = j;
            continue;
        }

        let start = i + 1;
        let mut j = start;
        while j < len && is_name_byte(bytes[j]) {
            j += 1;
        }
        if j == start {
            // Bare '<' in text; treat it literally and move on.
            builder.text("<".to_string());
            i += 1;
            continue;
        }
        let name = input[start..j].to_ascii_lowercase();
        let (attributes, mut self_closing, after) = scan_attributes(input, j);
        if is_void_element(&name) {
            self_closing = true;
        }

        let rawtext = !self_closing && (name == "script" || name == "style");
        builder.start_tag(name.clone(), attributes, self_closing);
        i = after;

        if rawtext {
            // Rawtext content runs to the matching close tag; near-matches
            // like `</scriptx>` stay part of the text.
            match find_rawtext_close(&input[i..], &name) {
                Some((body_end, tag_end)) => {
                    builder.text(input[i..i + body_end].to_string());
                    builder.end_tag(&name);
                    i += tag_end;
                }
                None => {
                    builder.text(input[i..].to_string());
                    builder.end_tag(&name);
                    i = len;
                }
            }
        }
    }
}

/// Scan an attribute list starting just after the tag name. Returns the
/// attributes, whether the tag was self-closing, and the index just past `>`.
fn scan_attributes(input: &str, from: usize) -> (Vec<(String, Option<String>)>, bool, usize) {
    let bytes = input.as_bytes();
    let len = bytes.len();
    let mut k = from;
    let mut attributes = Vec::new();
    let mut self_closing = false;

    loop {
        while k < len && bytes[k].is_ascii_whitespace() {
            k += 1;
        }
        if k >= len {
            break;
        }
        if bytes[k] == b'>' {
            k += 1;
            break;
        }
        if bytes[k] == b'/' {
            if k + 1 < len && bytes[k + 1] == b'>' {
                self_closing = true;
                k += 2;
                break;
            }
            k += 1;
            continue;
        }

        let name_start = k;
        while k < len && is_name_byte(bytes[k]) {
            k += 1;
        }
        if name_start == k {
            k += 1;
            continue;
        }
        let attr_name = input[name_start..k].to_ascii_lowercase();

        while k < len && bytes[k].is_ascii_whitespace() {
            k += 1;
        }
        let value = if k < len && bytes[k] == b'=' {
            k += 1;
            while k < len && bytes[k].is_ascii_whitespace() {
                k += 1;
            }
            if k < len && (bytes[k] == b'"' || bytes[k] == b'\'') {
                let quote = bytes[k];
                k += 1;
                let vstart = k;
                while k < len && bytes[k] != quote {
                    k += 1;
                }
                let raw = &input[vstart..k];
                if k < len {
                    k += 1;
                }
                Some(decode_entities(raw))
            } else {
                let vstart = k;
                while k < len && !bytes[k].is_ascii_whitespace() && bytes[k] != b'>' {
                    if bytes[k] == b'/' && k + 1 < len && bytes[k + 1] == b'>' {
                        break;
                    }
                    k += 1;
                }
                Some(input[vstart..k].to_string())
            }
        } else {
            None
        };
        attributes.push((attr_name, value));
    }

    (attributes, self_closing, k)
}

/// Find the close tag for a rawtext element. Returns byte offsets relative
/// to the start of the rawtext body: (end of body, end of close tag).
fn find_rawtext_close(haystack: &str, name: &str) -> Option<(usize, usize)> {
    let bytes = haystack.as_bytes();
    let len = bytes.len();
    let name_bytes = name.as_bytes();
    let mut i = 0;
    while i < len {
        let rel = memchr(b'<', &bytes[i..])?;
        i += rel;
        let tag_start = i + 2 + name_bytes.len();
        if tag_start > len {
            return None;
        }
        if bytes[i + 1] == b'/' && bytes[i + 2..tag_start].eq_ignore_ascii_case(name_bytes) {
            let mut k = tag_start;
            while k < len && bytes[k].is_ascii_whitespace() {
                k += 1;
            }
            if k < len && bytes[k] == b'>' {
                return Some((i, k + 1));
            }
        }
        i += 1;
    }
    None
}

/// Decode a minimal entity subset: the six common named entities plus
/// well-formed, semicolon-terminated numeric references. Everything else
/// passes through unchanged.
fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        let decoded = decode_one_entity(rest);
        match decoded {
            Some((ch, consumed)) => {
                out.push(ch);
                rest = &rest[consumed..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_one_entity(s: &str) -> Option<(char, usize)> {
    const NAMED: [(&str, char); 6] = [
        ("&amp;", '&'),
        ("&lt;", '<'),
        ("&gt;", '>'),
        ("&quot;", '"'),
        ("&apos;", '\''),
        ("&nbsp;", '\u{a0}'),
    ];
    for (pat, ch) in NAMED {
        if s.starts_with(pat) {
            return Some((ch, pat.len()));
        }
    }
    let body = s.strip_prefix("&#")?;
    let (digits, radix, prefix_len) = match body.strip_prefix(['x', 'X']) {
        Some(hex) => (hex, 16, 3),
        None => (body, 10, 2),
    };
    let end = digits.find(';')?;
    // Bounded digit runs keep adversarial input from forcing long scans.
    if end == 0 || end > 7 {
        return None;
    }
    let code = u32::from_str_radix(&digits[..end], radix).ok()?;
    let ch = char::from_u32(code)?;
    Some((ch, prefix_len + end + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_element(dom: &Node) -> &Node {
        let Node::Document { children, .. } = dom else {
            panic!("expected document root");
        };
        children
            .iter()
            .find(|c| matches!(c, Node::Element { .. }))
            .expect("expected at least one element child")
    }

    #[test]
    fn parses_doctype_and_root_element() {
        let dom = parse_document("<!DOCTYPE html><html></html>");
        let Node::Document { doctype, .. } = &dom else {
            panic!("expected document root");
        };
        assert_eq!(doctype.as_deref(), Some("DOCTYPE html"));
        assert!(first_element(&dom).is_element_named("html"));
    }

    #[test]
    fn void_elements_do_not_swallow_siblings() {
        let dom = parse_document("<div><input type=text><span>after</span></div>");
        let div = first_element(&dom);
        let children = div.children().unwrap();
        assert_eq!(children.len(), 2);
        assert!(children[0].is_element_named("input"));
        assert!(children[1].is_element_named("span"));
    }

    #[test]
    fn attribute_names_are_lowercased_and_values_preserved() {
        let dom = parse_document(r#"<input TYPE="Email" VALUE="A&amp;B">"#);
        let input = first_element(&dom);
        assert_eq!(input.attr("type"), Some("Email"));
        assert_eq!(input.attr("value"), Some("A&B"));
    }

    #[test]
    fn unquoted_and_single_quoted_attribute_values_parse() {
        let dom = parse_document("<input type=password class='form-control wide'>");
        let input = first_element(&dom);
        assert_eq!(input.attr("type"), Some("password"));
        assert!(input.has_class("form-control"));
        assert!(input.has_class("wide"));
    }

    #[test]
    fn valueless_attributes_are_kept() {
        let dom = parse_document("<input required>");
        assert!(first_element(&dom).has_attr("required"));
    }

    #[test]
    fn rawtext_script_body_is_a_single_text_node() {
        let dom = parse_document("<script>if (a < b) { x(); }</SCRIPT>");
        let script = first_element(&dom);
        let children = script.children().unwrap();
        assert_eq!(children.len(), 1);
        let Node::Text { text, .. } = &children[0] else {
            panic!("expected rawtext body");
        };
        assert_eq!(text, "if (a < b) { x(); }");
    }

    #[test]
    fn rawtext_near_match_close_tag_stays_in_body() {
        let dom = parse_document("<style>a</stylex>b</style>");
        let style = first_element(&dom);
        let Node::Text { text, .. } = &style.children().unwrap()[0] else {
            panic!("expected rawtext body");
        };
        assert_eq!(text, "a</stylex>b");
    }

    #[test]
    fn unclosed_elements_are_closed_at_end_of_input() {
        let dom = parse_document("<div><span>hi");
        let div = first_element(&dom);
        assert!(div.is_element_named("div"));
        let span = &div.children().unwrap()[0];
        assert!(span.is_element_named("span"));
    }

    #[test]
    fn unmatched_end_tag_is_dropped_without_closing_ancestors() {
        let dom = parse_document("<div></p><span>x</span></div>");
        let div = first_element(&dom);
        assert!(div.is_element_named("div"));
        assert!(div.children().unwrap().iter().any(|c| c.is_element_named("span")));
    }

    #[test]
    fn comments_and_entities_decode_in_text() {
        let dom = parse_document("<p><!-- note -->Tom &amp; Jerry &#x41;</p>");
        let p = first_element(&dom);
        let children = p.children().unwrap();
        assert!(matches!(&children[0], Node::Comment { text, .. } if text == " note "));
        assert!(matches!(&children[1], Node::Text { text, .. } if text == "Tom & Jerry A"));
    }

    #[test]
    fn utf8_text_survives_tokenization() {
        let dom = parse_document("<p>café — 10€</p>");
        let p = first_element(&dom);
        assert!(
            matches!(&p.children().unwrap()[0], Node::Text { text, .. } if text == "café — 10€"),
            "expected UTF-8 text to pass through unchanged"
        );
    }

    #[test]
    fn bare_angle_bracket_is_literal_text() {
        let dom = parse_document("<p>1 < 2</p>");
        let p = first_element(&dom);
        let joined: String = p
            .children()
            .unwrap()
            .iter()
            .filter_map(|c| match c {
                Node::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(joined, "1 < 2");
    }

    #[test]
    fn deep_nesting_builds_without_recursion() {
        let depth = 10_000usize;
        let mut input = String::new();
        for _ in 0..depth {
            input.push_str("<div>");
        }
        for _ in 0..depth {
            input.push_str("</div>");
        }
        let dom = parse_document(&input);
        let mut current = first_element(&dom);
        let mut seen = 1usize;
        while let Some(children) = current.children() {
            match children.first() {
                Some(child) if child.is_element_named("div") => {
                    seen += 1;
                    current = child;
                }
                _ => break,
            }
        }
        assert_eq!(seen, depth);
    }
}
