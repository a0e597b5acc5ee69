//! Read-only view over parsed DOM nodes.
//!
//! The walker never touches `scraper` types directly; it sees nodes through
//! [`DocumentNode`], which exposes only what classification and rendering
//! need: an element name, text, ordered children and a serialized form for
//! diagnostics.

use ego_tree::NodeRef;
use scraper::{ElementRef, Node};

/// Structural tag category of a node (closed set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagCategory {
    HeadingLevel1,
    HeadingLevel2,
    Paragraph,
    Table,
    HorizontalRule,
    Other,
}

pub trait DocumentNode: Clone {
    /// Local element name, `None` for text, comments and other non-elements.
    fn element_name(&self) -> Option<&str>;

    /// Text carried by this node itself (text nodes only).
    fn own_text(&self) -> Option<&str>;

    /// Direct children in document order.
    fn child_nodes(&self) -> Vec<Self>;

    /// Serialized markup of this node, used by the error rendering path.
    fn outer_html(&self) -> String;

    /// Concatenation of all descendant text, unnormalized.
    fn raw_text(&self) -> String {
        let mut buffer = String::new();
        collect_text(self, &mut buffer);
        buffer
    }

    /// Descendant elements named `name`, in document order.
    fn descendants_named(&self, name: &str) -> Vec<Self> {
        let mut found = Vec::new();
        collect_named(self, name, &mut found);
        found
    }

    fn has_descendant_named(&self, name: &str) -> bool {
        self.child_nodes().iter().any(|child| {
            child.element_name().is_some_and(|n| n.eq_ignore_ascii_case(name))
                || child.has_descendant_named(name)
        })
    }

    /// True for text nodes holding nothing but whitespace.
    fn is_blank_text(&self) -> bool {
        self.own_text().is_some_and(|t| t.trim().is_empty())
    }
}

fn collect_text<N: DocumentNode>(node: &N, buffer: &mut String) {
    if let Some(text) = node.own_text() {
        buffer.push_str(text);
        return;
    }
    for child in node.child_nodes() {
        collect_text(&child, buffer);
    }
}

fn collect_named<N: DocumentNode>(node: &N, name: &str, found: &mut Vec<N>) {
    for child in node.child_nodes() {
        if child.element_name().is_some_and(|n| n.eq_ignore_ascii_case(name)) {
            found.push(child.clone());
        }
        collect_named(&child, name, found);
    }
}

impl<'a> DocumentNode for NodeRef<'a, Node> {
    fn element_name(&self) -> Option<&str> {
        self.value().as_element().map(|element| element.name())
    }

    fn own_text(&self) -> Option<&str> {
        self.value().as_text().map(|text| &**text)
    }

    fn child_nodes(&self) -> Vec<Self> {
        self.children().collect()
    }

    fn outer_html(&self) -> String {
        match self.value() {
            Node::Element(_) => ElementRef::wrap(*self)
                .map(|element| element.html())
                .unwrap_or_default(),
            Node::Text(text) => (**text).to_string(),
            Node::Comment(comment) => format!("<!--{}-->", &**comment),
            _ => String::new(),
        }
    }
}
