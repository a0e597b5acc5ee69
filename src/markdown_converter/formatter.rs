//! Markdown fragment rendering, one function per structural role.
//!
//! Leading and trailing newlines are part of every fragment: fragments are
//! joined by plain concatenation, so they carry their own block separators.

use super::classifier::StructuralRole;
use super::node_util::DocumentNode;
use super::text_util::flatten_text;
use super::tokens::{ArticleNumber, LeadingTokenizer, ListIndex, NoteMarker};

/// Pre-built heading prefixes
const HEADING_PREFIXES: [&str; 3] = ["# ", "## ", "### "];

const ENDNOTES_SEPARATOR: &str = "\n---\n";

/// Marker emitted ahead of each node while the walker is in the error state
pub const ERROR_MARKER: &str = ">>> error";

// =============================================================================
// TEXT-LEVEL RENDERERS
// =============================================================================

/// Setext level-1 heading.
///
/// The underline is as long as the title's UTF-8 encoding, so accented titles
/// get one extra `=` per two-byte character.
#[must_use]
pub fn format_main_title(title: &str) -> String {
    format!("{title}\n{}\n", "=".repeat(title.len()))
}

/// Plain paragraph used for main and section subtitles.
#[must_use]
pub fn format_subtitle(text: &str) -> String {
    format!("\n{text}\n")
}

/// ATX heading at `level` (1..=3).
#[must_use]
pub fn format_heading(level: usize, text: &str) -> String {
    let prefix = HEADING_PREFIXES[level.clamp(1, HEADING_PREFIXES.len()) - 1];
    format!("\n{prefix}{text}\n")
}

/// Article paragraph with its number in bold; `None` when there is no text.
#[must_use]
pub fn format_article(text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Some(format!("\n{}\n", ArticleNumber.rewrite(text)))
}

/// Item list rows, each with its index rewritten to `N) `.
#[must_use]
pub fn format_item_rows<S: AsRef<str>>(rows: &[S]) -> String {
    rows.iter().fold(String::new(), |mut out, row| {
        out.push('\n');
        out.push_str(&ListIndex.rewrite(row.as_ref()));
        out.push('\n');
        out
    })
}

/// Endnotes: one separator, then each row with its marker rewritten to `(*) `.
#[must_use]
pub fn format_endnote_rows<S: AsRef<str>>(rows: &[S]) -> String {
    rows.iter().fold(ENDNOTES_SEPARATOR.to_string(), |mut out, row| {
        out.push('\n');
        out.push_str(&NoteMarker.rewrite(row.as_ref()));
        out.push('\n');
        out
    })
}

// =============================================================================
// NODE-LEVEL DISPATCH
// =============================================================================

fn flattened_rows<N: DocumentNode>(node: &N) -> Vec<String> {
    node.descendants_named("tr").iter().map(flatten_text).collect()
}

/// Render `node` in `role`. `None` means the role produced no fragment.
pub fn render<N: DocumentNode>(role: StructuralRole, node: &N) -> Option<String> {
    match role {
        StructuralRole::MainTitle => Some(format_main_title(&flatten_text(node))),
        StructuralRole::Subtitle => Some(format_subtitle(&flatten_text(node))),
        StructuralRole::SectionTitle | StructuralRole::SpecialSectionTitle => {
            Some(format_heading(2, &flatten_text(node)))
        }
        StructuralRole::ChapterTitle
        | StructuralRole::SpecialSectionPartTitle
        | StructuralRole::SpecialSectionHeading => {
            Some(format_heading(3, &flatten_text(node)))
        }
        StructuralRole::Article => format_article(&flatten_text(node)),
        StructuralRole::ItemList => Some(format_item_rows(&flattened_rows(node))),
        StructuralRole::EndnotesTable => Some(format_endnote_rows(&flattened_rows(node))),
        // Boundaries switch state; they never render.
        StructuralRole::EndnotesBoundary => None,
    }
}

/// Diagnostic rendering used only in the error state.
pub fn render_error<N: DocumentNode>(node: &N) -> String {
    format!("{ERROR_MARKER}{}", node.outer_html())
}
