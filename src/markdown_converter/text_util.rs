//! Whitespace normalization of node text.

use super::node_util::DocumentNode;

/// Collapse every run of whitespace into a single space and trim the edges.
///
/// Uses the Unicode `White_Space` property, so the non-breaking spaces legal
/// portals pad their headings with collapse like ordinary spaces.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Whitespace-normalized concatenation of all descendant text of `node`.
#[must_use]
pub fn flatten_text<N: DocumentNode>(node: &N) -> String {
    collapse_whitespace(&node.raw_text())
}
