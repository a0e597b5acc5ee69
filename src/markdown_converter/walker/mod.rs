//! Stateful walker over the top-level body nodes of a legal document.
//!
//! The walker holds a read-only cursor into an immutable node slice. At each
//! step it looks up the rules of the current state and fires the first one
//! whose role matches the node under the cursor:
//!
//! - `Emit` renders the node, advances the cursor and moves to the rule's
//!   next state.
//! - `Switch` changes state and leaves the cursor where it is, so the same
//!   node is classified again under the new state on the next step.
//! - No match advances the cursor with no output.
//!
//! A boundary node (for example a chapter heading met while in `Section`)
//! is therefore rendered exactly once, by the state it belongs to.

pub mod report;
pub mod rules;
pub mod state;

use tracing::{debug, trace};

use crate::config::TagMapping;
use crate::error::{ConversionError, Result};
use crate::utils::{LOG_PREVIEW_CHARS, log_preview};

use super::classifier::NodeClassifier;
use super::formatter;
use super::node_util::DocumentNode;
use super::text_util::flatten_text;

pub use report::{Fragment, Transition, WalkOutcome, WalkReport};
pub use rules::{Action, Rule, rules_for};
pub use state::ParsingState;

#[derive(Debug, Clone)]
pub struct DocumentWalker {
    classifier: NodeClassifier,
    initial_state: ParsingState,
}

impl DocumentWalker {
    #[must_use]
    pub fn new(tags: TagMapping) -> Self {
        Self {
            classifier: NodeClassifier::new(tags),
            initial_state: ParsingState::Intro,
        }
    }

    /// Start the walk in `state` instead of `Intro`.
    ///
    /// This is the only way to reach `ParsingState::Error`, where every node
    /// is dumped behind an error marker for inspection.
    #[must_use]
    pub fn starting_in(mut self, state: ParsingState) -> Self {
        self.initial_state = state;
        self
    }

    #[must_use]
    pub fn classifier(&self) -> &NodeClassifier {
        &self.classifier
    }

    /// First rule of `state` whose role matches `node`.
    pub fn first_match<N: DocumentNode>(&self, state: ParsingState, node: &N) -> Option<Rule> {
        rules_for(state)
            .iter()
            .copied()
            .find(|rule| self.classifier.matches(rule.role, node))
    }

    /// Walk `nodes` once, left to right.
    ///
    /// # Errors
    ///
    /// Returns `WalkDidNotTerminate` if the step budget is exhausted, which
    /// the shipped rule table cannot cause.
    pub fn walk<N: DocumentNode>(&self, nodes: &[N]) -> Result<WalkOutcome> {
        let mut state = self.initial_state;
        let mut report = WalkReport::new(nodes.len(), state);
        let mut fragments = Vec::new();

        // Each node can trigger at most one switch per state before it is consumed.
        let budget = nodes.len() * ParsingState::ALL.len() + 1;
        let mut cursor = 0;
        let mut steps = 0;

        while let Some(node) = nodes.get(cursor) {
            steps += 1;
            if steps > budget {
                return Err(ConversionError::WalkDidNotTerminate { steps, state });
            }

            if state == ParsingState::Error {
                fragments.push(Fragment {
                    node_index: cursor,
                    role: None,
                    text: formatter::render_error(node),
                });
                cursor += 1;
                continue;
            }

            match self.first_match(state, node) {
                Some(Rule {
                    action: Action::Switch(next),
                    role,
                }) => {
                    debug!("Node {cursor}: {state} -> {next} on {role:?}");
                    report.transitions.push(Transition {
                        node_index: cursor,
                        from: state,
                        to: next,
                    });
                    state = next;
                }
                Some(Rule {
                    action: Action::Emit { next },
                    role,
                }) => {
                    match formatter::render(role, node) {
                        Some(text) => fragments.push(Fragment {
                            node_index: cursor,
                            role: Some(role),
                            text,
                        }),
                        None => {
                            trace!("Node {cursor}: {role:?} rendered empty");
                            report.empty_renders += 1;
                        }
                    }
                    if next != state {
                        debug!("Node {cursor}: {state} -> {next} after {role:?}");
                        report.transitions.push(Transition {
                            node_index: cursor,
                            from: state,
                            to: next,
                        });
                        state = next;
                    }
                    cursor += 1;
                }
                None => {
                    let blank = node.is_blank_text();
                    if !blank && state != ParsingState::Finished {
                        trace!(
                            "Node {cursor}: skipped in {state} (<{}> {:?})",
                            node.element_name().unwrap_or("#text"),
                            log_preview(&flatten_text(node), LOG_PREVIEW_CHARS)
                        );
                    }
                    report.record_skip(state, blank);
                    cursor += 1;
                }
            }
        }

        report.nodes_visited = cursor;
        report.fragments_emitted = fragments.len();
        report.final_state = state;

        if report.nodes_skipped > 0 {
            debug!(
                "Walk finished in {state}: {} of {} nodes skipped",
                report.nodes_skipped, report.nodes_total
            );
        }

        Ok(WalkOutcome { fragments, report })
    }
}

impl Default for DocumentWalker {
    fn default() -> Self {
        Self::new(TagMapping::default())
    }
}
