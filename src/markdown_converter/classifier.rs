//! Structural role detection for top-level body nodes.
//!
//! Predicates are pure and overlap on purpose: any heading-level-2 node is a
//! candidate for several roles depending on its text. Which one wins is
//! decided by rule order in [`super::walker::rules`], never here.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use crate::config::TagMapping;

use super::node_util::{DocumentNode, TagCategory};
use super::text_util::flatten_text;

// =============================================================================
// KEYWORD PATTERNS - case-insensitive, accent-tolerant
// =============================================================================

static SECTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)secci[oó]n").expect("SECTION_RE: hardcoded regex is valid")
});

static CHAPTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)cap[ií]tulo").expect("CHAPTER_RE: hardcoded regex is valid")
});

static SPECIAL_SECTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)disposici[oó]nes\s+transitorias")
        .expect("SPECIAL_SECTION_RE: hardcoded regex is valid")
});

/// Candidate words made only of Roman-numeral letters.
static ROMAN_WORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b[ivxlcdm]+\b").expect("ROMAN_WORD_RE: hardcoded regex is valid")
});

/// Well-formed numeral (1..=3999); rejects letter soup such as "mil" or "civil".
static ROMAN_NUMERAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^M{0,3}(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$")
        .expect("ROMAN_NUMERAL_RE: hardcoded regex is valid")
});

/// Structural role a node can be recognized as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StructuralRole {
    MainTitle,
    /// Main or section subtitle; the generic fallback for headings and paragraphs
    Subtitle,
    SectionTitle,
    ChapterTitle,
    SpecialSectionTitle,
    SpecialSectionPartTitle,
    /// Any other heading inside the transitional region ("Disposición final única")
    SpecialSectionHeading,
    Article,
    ItemList,
    EndnotesBoundary,
    EndnotesTable,
}

/// True if `text` contains a standalone, well-formed Roman numeral.
#[must_use]
pub fn contains_roman_numeral(text: &str) -> bool {
    ROMAN_WORD_RE
        .find_iter(text)
        .any(|word| ROMAN_NUMERAL_RE.is_match(word.as_str()))
}

/// Stateless predicates bound to one tag mapping.
#[derive(Debug, Clone)]
pub struct NodeClassifier {
    tags: TagMapping,
}

impl NodeClassifier {
    #[must_use]
    pub fn new(tags: TagMapping) -> Self {
        Self { tags }
    }

    #[must_use]
    pub fn category<N: DocumentNode>(&self, node: &N) -> TagCategory {
        node.element_name()
            .map_or(TagCategory::Other, |name| self.tags.category_of(name))
    }

    /// Dispatch to the predicate for `role`.
    pub fn matches<N: DocumentNode>(&self, role: StructuralRole, node: &N) -> bool {
        match role {
            StructuralRole::MainTitle => self.is_main_title(node),
            StructuralRole::Subtitle => self.is_subtitle(node),
            StructuralRole::SectionTitle => self.is_section_title(node),
            StructuralRole::ChapterTitle => self.is_chapter_title(node),
            StructuralRole::SpecialSectionTitle => self.is_special_section_title(node),
            StructuralRole::SpecialSectionPartTitle => self.is_special_section_part_title(node),
            StructuralRole::SpecialSectionHeading => self.is_special_section_heading(node),
            StructuralRole::Article => self.is_article(node),
            StructuralRole::ItemList => self.is_item_list(node),
            StructuralRole::EndnotesBoundary => self.is_endnotes_boundary(node),
            StructuralRole::EndnotesTable => self.is_endnotes_table(node),
        }
    }

    pub fn is_main_title<N: DocumentNode>(&self, node: &N) -> bool {
        self.category(node) == TagCategory::HeadingLevel1
    }

    pub fn is_subtitle<N: DocumentNode>(&self, node: &N) -> bool {
        matches!(
            self.category(node),
            TagCategory::HeadingLevel2 | TagCategory::Paragraph
        )
    }

    pub fn is_section_title<N: DocumentNode>(&self, node: &N) -> bool {
        self.heading_matches(node, &SECTION_RE)
    }

    pub fn is_chapter_title<N: DocumentNode>(&self, node: &N) -> bool {
        self.heading_matches(node, &CHAPTER_RE)
    }

    pub fn is_special_section_title<N: DocumentNode>(&self, node: &N) -> bool {
        self.heading_matches(node, &SPECIAL_SECTION_RE)
    }

    pub fn is_special_section_part_title<N: DocumentNode>(&self, node: &N) -> bool {
        self.category(node) == TagCategory::HeadingLevel2
            && contains_roman_numeral(&flatten_text(node))
    }

    /// Any heading-level-2 node. Only ever tried after the region's boundary
    /// rules, so it catches provisions with ordinal names instead of numerals.
    pub fn is_special_section_heading<N: DocumentNode>(&self, node: &N) -> bool {
        self.category(node) == TagCategory::HeadingLevel2
    }

    /// Any paragraph; emptiness is the formatter's concern.
    pub fn is_article<N: DocumentNode>(&self, node: &N) -> bool {
        self.category(node) == TagCategory::Paragraph
    }

    pub fn is_item_list<N: DocumentNode>(&self, node: &N) -> bool {
        self.category(node) == TagCategory::Table
    }

    pub fn is_endnotes_boundary<N: DocumentNode>(&self, node: &N) -> bool {
        self.category(node) == TagCategory::HorizontalRule
    }

    /// A table with rows, or a wrapper holding such a table.
    pub fn is_endnotes_table<N: DocumentNode>(&self, node: &N) -> bool {
        let wraps_table =
            self.category(node) == TagCategory::Table || node.has_descendant_named("table");
        wraps_table && node.has_descendant_named("tr")
    }

    fn heading_matches<N: DocumentNode>(&self, node: &N, pattern: &Regex) -> bool {
        self.category(node) == TagCategory::HeadingLevel2 && pattern.is_match(&flatten_text(node))
    }
}
