//! Walk output: emitted fragments plus a diagnostic report.
//!
//! Unrecognized nodes are dropped from the Markdown without complaint. The
//! report is where those drops become visible.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::markdown_converter::classifier::StructuralRole;

use super::state::ParsingState;

/// One emitted unit of output, tagged with the node that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fragment {
    /// Index of the producing node in the walked sequence
    pub node_index: usize,
    /// Role the node was rendered as; `None` on the error path
    pub role: Option<StructuralRole>,
    pub text: String,
}

/// A state change, recorded at the node that triggered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub node_index: usize,
    pub from: ParsingState,
    pub to: ParsingState,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WalkReport {
    pub nodes_total: usize,
    /// Nodes the cursor moved past; equals `nodes_total` after a full walk
    pub nodes_visited: usize,
    pub fragments_emitted: usize,
    /// Non-blank nodes no rule matched
    pub nodes_skipped: usize,
    /// Whitespace-only text nodes between elements
    pub blank_nodes_skipped: usize,
    /// Matched nodes whose render produced nothing (empty articles)
    pub empty_renders: usize,
    /// Nodes consumed after reaching `Finished`
    pub nodes_after_finish: usize,
    pub skipped_by_state: BTreeMap<ParsingState, usize>,
    pub transitions: Vec<Transition>,
    pub final_state: ParsingState,
}

impl WalkReport {
    pub(crate) fn new(nodes_total: usize, initial_state: ParsingState) -> Self {
        Self {
            nodes_total,
            final_state: initial_state,
            ..Self::default()
        }
    }

    pub(crate) fn record_skip(&mut self, state: ParsingState, blank: bool) {
        if state == ParsingState::Finished {
            self.nodes_after_finish += 1;
        } else if blank {
            self.blank_nodes_skipped += 1;
        } else {
            self.nodes_skipped += 1;
            *self.skipped_by_state.entry(state).or_insert(0) += 1;
        }
    }

    /// True when every node was either rendered or deliberately ignored
    /// (blank text, trailing content after the endnotes).
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.nodes_skipped == 0
    }
}

/// Result of walking one node sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkOutcome {
    pub fragments: Vec<Fragment>,
    pub report: WalkReport,
}

impl WalkOutcome {
    #[must_use]
    pub fn final_state(&self) -> ParsingState {
        self.report.final_state
    }

    /// The Markdown document: all fragments concatenated in order.
    #[must_use]
    pub fn markdown(&self) -> String {
        let capacity = self.fragments.iter().map(|f| f.text.len()).sum();
        self.fragments
            .iter()
            .fold(String::with_capacity(capacity), |mut out, fragment| {
                out.push_str(&fragment.text);
                out
            })
    }
}
