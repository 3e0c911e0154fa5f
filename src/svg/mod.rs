//! # SVG Element Tree
//!
//! Charts draw into an inspectable tree of elements rather than straight
//! into a string. The tree can be walked (tests and tooling query it by tag
//! name) and is serialized to markup only when the document is saved.
//!
//! ```
//! use trazo::svg::Element;
//!
//! let group = Element::new("g")
//!     .attr("id", "pie")
//!     .child(Element::new("circle").attr("r", 120));
//!
//! let mut out = String::new();
//! group.write_svg(&mut out);
//! assert_eq!(out, r#"<g id="pie"><circle r="120"/></g>"#);
//! ```

pub mod document;

pub use document::ChartDocument;

use std::fmt::Display;

/// A node in the element tree: either a child element or character data.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// A single SVG element with attributes and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Create an empty element with the given tag name.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute. Later values for the same name win.
    pub fn attr(mut self, name: impl Into<String>, value: impl Display) -> Self {
        let name = name.into();
        let value = value.to_string();
        if let Some(existing) = self.attrs.iter_mut().find(|(n, _)| *n == name) {
            existing.1 = value;
        } else {
            self.attrs.push((name, value));
        }
        self
    }

    /// Append a child element.
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Append character data.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// The element's tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Look up an attribute value.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// The element's children, in document order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Concatenated character data of the element's direct text children.
    pub fn text_content(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                Node::Text(text) => Some(text.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    /// Collect this element and every descendant matching `tag`,
    /// in document order.
    pub fn find_all<'a>(&'a self, tag: &str, out: &mut Vec<&'a Element>) {
        if self.tag == tag {
            out.push(self);
        }
        for child in &self.children {
            if let Node::Element(element) = child {
                element.find_all(tag, out);
            }
        }
    }

    /// Serialize this element (and its subtree) as SVG markup.
    pub fn write_svg(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
        if self.children.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        for child in &self.children {
            match child {
                Node::Element(element) => element.write_svg(out),
                Node::Text(text) => out.push_str(&escape_text(text)),
            }
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

/// Escape character data for element content.
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape an attribute value for double-quoted serialization.
pub fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

/// Format a coordinate for path data: up to three fractional digits,
/// trailing zeros trimmed.
pub(crate) fn fmt_coord(value: f64) -> String {
    let formatted = format!("{value:.3}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_element_self_closes() {
        let mut out = String::new();
        Element::new("defs").write_svg(&mut out);
        assert_eq!(out, "<defs/>");
    }

    #[test]
    fn test_attrs_serialize_in_insertion_order() {
        let mut out = String::new();
        Element::new("rect")
            .attr("width", 24)
            .attr("height", 24)
            .write_svg(&mut out);
        assert_eq!(out, r#"<rect width="24" height="24"/>"#);
    }

    #[test]
    fn test_attr_overwrite() {
        let element = Element::new("rect").attr("fill", "red").attr("fill", "blue");
        assert_eq!(element.get_attr("fill"), Some("blue"));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut out = String::new();
        Element::new("text").text("a < b & c").write_svg(&mut out);
        assert_eq!(out, "<text>a &lt; b &amp; c</text>");
    }

    #[test]
    fn test_attr_is_escaped() {
        let mut out = String::new();
        Element::new("text").attr("data-label", "say \"hi\"").write_svg(&mut out);
        assert_eq!(out, r#"<text data-label="say &quot;hi&quot;"/>"#);
    }

    #[test]
    fn test_find_all_walks_subtree() {
        let tree = Element::new("g")
            .child(Element::new("path"))
            .child(Element::new("g").child(Element::new("path")));
        let mut paths = Vec::new();
        tree.find_all("path", &mut paths);
        assert_eq!(paths.len(), 2);
    }

    #[test]
    fn test_text_content() {
        let element = Element::new("text").text("Other ").text("3.8%");
        assert_eq!(element.text_content(), "Other 3.8%");
    }

    #[test]
    fn test_fmt_coord() {
        assert_eq!(fmt_coord(500.0), "500");
        assert_eq!(fmt_coord(86.602_540_4), "86.603");
        assert_eq!(fmt_coord(-0.000_1), "0");
        assert_eq!(fmt_coord(12.5), "12.5");
    }
}
