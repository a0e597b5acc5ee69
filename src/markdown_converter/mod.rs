//! Legal HTML to Markdown conversion pipeline
//!
//! 1. Decode source bytes to UTF-8 (see [`crate::source`])
//! 2. Parse HTML with `scraper` and take the direct children of `<body>`
//! 3. Walk those nodes with the structural state machine in [`walker`]
//! 4. Concatenate the emitted fragments
//!
//! # Usage
//!
//! ```rust
//! # use kodegen_tools_lexscrape::{convert_html_to_markdown, ConversionConfig};
//! let html = "<html><body><h2>Ley 1/2000</h2><h4>Sección 1</h4></body></html>";
//! let output = convert_html_to_markdown(html, &ConversionConfig::default())?;
//! assert_eq!(output.markdown, "Ley 1/2000\n==========\n\n## Sección 1\n");
//! # Ok::<(), kodegen_tools_lexscrape::ConversionError>(())
//! ```

use ego_tree::NodeRef;
use scraper::{Html, Node, Selector};
use serde::Serialize;
use std::sync::LazyLock;

use crate::config::ConversionConfig;
use crate::error::{ConversionError, Result};
use crate::source::decode_html;

pub mod classifier;
pub mod formatter;
pub mod node_util;
pub mod text_util;
pub mod tokens;
pub mod walker;

pub use classifier::{NodeClassifier, StructuralRole};
pub use node_util::{DocumentNode, TagCategory};
pub use text_util::{collapse_whitespace, flatten_text};
pub use walker::{DocumentWalker, Fragment, ParsingState, WalkOutcome, WalkReport};

static BODY_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("body").expect("BUG: hardcoded CSS selector 'body' is invalid")
});

/// Markdown produced from one document, with the walk diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionOutput {
    pub markdown: String,
    pub report: WalkReport,
    /// Encoding the source was decoded from, when conversion started from bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_encoding: Option<&'static str>,
}

/// Ordered top-level nodes of the document body.
///
/// # Errors
///
/// Returns `MissingBody` when the parsed tree has no `<body>` element.
pub fn body_nodes(document: &Html) -> Result<Vec<NodeRef<'_, Node>>> {
    let body = document
        .select(&BODY_SELECTOR)
        .next()
        .ok_or(ConversionError::MissingBody)?;
    Ok(body.children().collect())
}

/// Convert already-decoded HTML into Markdown.
///
/// # Errors
///
/// Returns `MissingBody` if the document has no body, or
/// `WalkDidNotTerminate` from the walker.
pub fn convert_html_to_markdown(html: &str, config: &ConversionConfig) -> Result<ConversionOutput> {
    let document = Html::parse_document(html);
    let nodes = body_nodes(&document)?;
    tracing::debug!("Walking {} top-level body nodes", nodes.len());

    let outcome = DocumentWalker::new(config.tags().clone()).walk(&nodes)?;
    Ok(ConversionOutput {
        markdown: outcome.markdown(),
        report: outcome.report,
        source_encoding: None,
    })
}

/// Decode raw source bytes and convert them into Markdown.
///
/// # Errors
///
/// Returns `InputTooLarge` past the configured size cap, plus the errors of
/// [`convert_html_to_markdown`].
pub fn convert_bytes(bytes: &[u8], config: &ConversionConfig) -> Result<ConversionOutput> {
    let decoded = decode_html(bytes, None, config)?;
    let mut output = convert_html_to_markdown(&decoded.html, config)?;
    output.source_encoding = Some(decoded.encoding);
    Ok(output)
}
