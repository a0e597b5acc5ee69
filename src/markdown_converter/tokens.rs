//! Leading index-token tokenizers.
//!
//! Each tokenizer looks only at the start of a flattened line and splits it
//! into the index token and the remaining text. Nothing past the token is
//! ever rewritten, whatever the rest of the line contains.

use regex::Regex;
use std::sync::LazyLock;

/// `Artículo <n>` followed by at least one non-word character.
static ARTICLE_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(art[íi]culo\s+\d+)\W+").expect("ARTICLE_NUMBER_RE: hardcoded regex is valid")
});

/// Digit run or single ASCII letter (optionally primed), then `.`, `º`, `)` or `-`, then whitespace.
static LIST_INDEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+|[a-zA-Z]'?)[.º)\-]+\s").expect("LIST_INDEX_RE: hardcoded regex is valid")
});

/// One or more asterisks, then whitespace.
static NOTE_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\*+)\s").expect("NOTE_MARKER_RE: hardcoded regex is valid")
});

/// A line split at its leading index token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeadingToken<'a> {
    /// The captured index (`Artículo 5`, `3`, `b'`, `**`)
    pub token: &'a str,
    /// Everything after the token and its delimiter
    pub rest: &'a str,
}

pub trait LeadingTokenizer {
    /// Split `line` at its leading token, if it has one.
    fn split<'a>(&self, line: &'a str) -> Option<LeadingToken<'a>>;

    /// Render a recognized token in its Markdown form.
    fn render(&self, token: LeadingToken<'_>) -> String;

    /// Rewrite the leading token of `line`, leaving unmatched lines untouched.
    fn rewrite(&self, line: &str) -> String {
        match self.split(line) {
            Some(token) => self.render(token),
            None => line.to_string(),
        }
    }
}

fn split_with<'a>(pattern: &Regex, line: &'a str) -> Option<LeadingToken<'a>> {
    let captures = pattern.captures(line)?;
    let whole = captures.get(0)?;
    let token = captures.get(1)?;
    Some(LeadingToken {
        token: token.as_str(),
        rest: &line[whole.end()..],
    })
}

/// `Artículo 5. Texto` → `__Artículo 5__. Texto`
#[derive(Debug, Clone, Copy, Default)]
pub struct ArticleNumber;

impl LeadingTokenizer for ArticleNumber {
    fn split<'a>(&self, line: &'a str) -> Option<LeadingToken<'a>> {
        split_with(&ARTICLE_NUMBER_RE, line)
    }

    fn render(&self, token: LeadingToken<'_>) -> String {
        format!("__{}__. {}", token.token, token.rest)
    }
}

/// `1. Objeto` / `b) Ámbito` / `3º- Plazo` → `1) Objeto` / `b) Ámbito` / `3) Plazo`
#[derive(Debug, Clone, Copy, Default)]
pub struct ListIndex;

impl LeadingTokenizer for ListIndex {
    fn split<'a>(&self, line: &'a str) -> Option<LeadingToken<'a>> {
        split_with(&LIST_INDEX_RE, line)
    }

    fn render(&self, token: LeadingToken<'_>) -> String {
        format!("{}) {}", token.token, token.rest)
    }
}

/// `* Nota` / `** Nota` → `(*) Nota` / `(**) Nota`
#[derive(Debug, Clone, Copy, Default)]
pub struct NoteMarker;

impl LeadingTokenizer for NoteMarker {
    fn split<'a>(&self, line: &'a str) -> Option<LeadingToken<'a>> {
        split_with(&NOTE_MARKER_RE, line)
    }

    fn render(&self, token: LeadingToken<'_>) -> String {
        format!("({}) {}", token.token, token.rest)
    }
}
