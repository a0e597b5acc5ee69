//! Parsing states of the document walker.

use serde::Serialize;
use std::fmt;

/// Which structural region of the document the walker believes it is in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParsingState {
    #[default]
    Intro,
    Section,
    SpecialSection,
    Chapter,
    Endnotes,
    Finished,
    /// Diagnostic state; only entered through an explicit override
    Error,
}

impl ParsingState {
    pub const ALL: [ParsingState; 7] = [
        Self::Intro,
        Self::Section,
        Self::SpecialSection,
        Self::Chapter,
        Self::Endnotes,
        Self::Finished,
        Self::Error,
    ];

    /// Terminal states never leave themselves.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Finished | Self::Error)
    }
}

impl fmt::Display for ParsingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Intro => "intro",
            Self::Section => "section",
            Self::SpecialSection => "special_section",
            Self::Chapter => "chapter",
            Self::Endnotes => "endnotes",
            Self::Finished => "finished",
            Self::Error => "error",
        };
        f.write_str(name)
    }
}
