//! # kodegen_tools_lexscrape
//!
//! Converts HTML renditions of Spanish legal and regulatory texts into
//! structured Markdown: title, sections, chapters, articles, item lists,
//! transitional provisions and endnotes.
//!
//! The body of these documents is a flat run of headings, paragraphs, tables
//! and rules. A state machine ([`markdown_converter::walker`]) recovers the
//! hierarchy from Spanish structural markers ("Sección", "Capítulo",
//! "Artículo N", Roman-numeral parts) and renders each recognized node.

pub mod config;
pub mod error;
pub mod markdown_converter;
pub mod source;
pub mod utils;

pub use config::{ConversionConfig, ConversionConfigBuilder, TagMapping};
pub use error::{ConversionError, Result};
pub use markdown_converter::{
    ConversionOutput, DocumentWalker, ParsingState, WalkOutcome, WalkReport, convert_bytes,
    convert_html_to_markdown,
};
pub use source::{SourceDocument, load_source};
