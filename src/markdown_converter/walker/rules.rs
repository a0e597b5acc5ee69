//! Per-state rule table.
//!
//! Rules are evaluated top to bottom and the first whose role matches fires.
//! The order is what resolves overlapping roles: in `Section`, a heading is
//! tested as a section title before a chapter title before a plain subtitle.
//! A node matching no rule is consumed without output.

use crate::markdown_converter::classifier::StructuralRole;

use super::state::ParsingState;

/// What a matching rule does with the current node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Render the node in the rule's role, advance, and move to `next`.
    Emit { next: ParsingState },
    /// Move to another state without consuming the node.
    Switch(ParsingState),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub role: StructuralRole,
    pub action: Action,
}

impl Rule {
    const fn emit(role: StructuralRole, next: ParsingState) -> Self {
        Self {
            role,
            action: Action::Emit { next },
        }
    }

    const fn switch(role: StructuralRole, next: ParsingState) -> Self {
        Self {
            role,
            action: Action::Switch(next),
        }
    }
}

use ParsingState as S;
use StructuralRole as R;

const INTRO: &[Rule] = &[
    Rule::emit(R::MainTitle, S::Intro),
    Rule::switch(R::SectionTitle, S::Section),
    Rule::emit(R::Subtitle, S::Intro),
];

const SECTION: &[Rule] = &[
    Rule::emit(R::SectionTitle, S::Section),
    Rule::switch(R::ChapterTitle, S::Chapter),
    Rule::emit(R::Subtitle, S::Section),
];

const SPECIAL_SECTION: &[Rule] = &[
    Rule::emit(R::SpecialSectionTitle, S::SpecialSection),
    Rule::emit(R::SpecialSectionPartTitle, S::SpecialSection),
    Rule::emit(R::Article, S::SpecialSection),
    Rule::emit(R::ItemList, S::SpecialSection),
    Rule::switch(R::EndnotesBoundary, S::Endnotes),
    Rule::switch(R::ChapterTitle, S::Chapter),
    Rule::switch(R::SectionTitle, S::Section),
    Rule::emit(R::SpecialSectionHeading, S::SpecialSection),
];

const CHAPTER: &[Rule] = &[
    Rule::emit(R::ChapterTitle, S::Chapter),
    Rule::emit(R::Article, S::Chapter),
    Rule::emit(R::ItemList, S::Chapter),
    Rule::switch(R::SectionTitle, S::Section),
    Rule::switch(R::SpecialSectionTitle, S::SpecialSection),
];

const ENDNOTES: &[Rule] = &[Rule::emit(R::EndnotesTable, S::Finished)];

/// Ordered rules for `state`. Terminal states have none.
#[must_use]
pub fn rules_for(state: ParsingState) -> &'static [Rule] {
    match state {
        S::Intro => INTRO,
        S::Section => SECTION,
        S::SpecialSection => SPECIAL_SECTION,
        S::Chapter => CHAPTER,
        S::Endnotes => ENDNOTES,
        S::Finished | S::Error => &[],
    }
}
