//! HTML rendering.
//!
//! Serializes documents and elements back to HTML, e.g. after build-time
//! transforms or to snapshot a page in tests.

use crate::attr::Attrs;
use crate::node::{Document, Element, Node};

// =============================================================================
// RenderConfig
// =============================================================================

/// Default attribute name for stable ids.
pub const DEFAULT_ID_ATTR: &str = "data-media-id";

/// Configuration for HTML rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Emit each element's stable id as an attribute.
    pub emit_ids: bool,
    /// Attribute name for stable ids.
    pub id_attr_name: String,
}

impl RenderConfig {
    pub fn new(emit_ids: bool) -> Self {
        Self {
            emit_ids,
            id_attr_name: DEFAULT_ID_ATTR.to_string(),
        }
    }

    /// Set custom attribute name for stable ids.
    pub fn with_id_attr(mut self, attr_name: impl Into<String>) -> Self {
        self.id_attr_name = attr_name.into();
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(false)
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Render a document to an HTML string.
pub fn render_document(doc: &Document, config: &RenderConfig) -> String {
    render_element(&doc.root, config)
}

/// Render one element and its subtree.
pub fn render_element(elem: &Element, config: &RenderConfig) -> String {
    let mut output = String::new();
    write_element(elem, config, &mut output);
    output
}

fn write_element(elem: &Element, config: &RenderConfig, output: &mut String) {
    output.push('<');
    output.push_str(&elem.tag);

    render_attrs(&elem.attrs, output);

    if config.emit_ids && elem.id.is_assigned() {
        output.push(' ');
        output.push_str(&config.id_attr_name);
        output.push_str("=\"");
        output.push_str(&elem.id.to_attr_value());
        output.push('"');
    }

    if is_void_element(&elem.tag) {
        output.push_str(" />");
        return;
    }

    output.push('>');
    for child in &elem.children {
        match child {
            Node::Element(e) => write_element(e, config, output),
            // raw text is trusted markup
            Node::Text(text) if text.is_raw() => output.push_str(&text.content),
            Node::Text(text) => output.push_str(&escape_html(&text.content)),
        }
    }
    output.push_str("</");
    output.push_str(&elem.tag);
    output.push('>');
}

/// Render attributes to HTML.
fn render_attrs(attrs: &Attrs, output: &mut String) {
    for (name, value) in attrs.iter() {
        output.push(' ');
        output.push_str(name);
        output.push_str("=\"");
        output.push_str(&escape_attr(value));
        output.push('"');
    }
}

/// Escape HTML special characters.
fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape attribute value special characters.
fn escape_attr(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

/// Check if element is a void element (self-closing).
fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
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

// =============================================================================
// Tests
// =============================================================================
