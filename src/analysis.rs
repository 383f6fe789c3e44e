//! Output of the Linguistic Analyzer (C1): §3 "Sentence analysis".

use crate::dep::DepArc;
use crate::token::{Pos, Token};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Closed tense category consulted when building `tense_markers`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TenseMarker {
    Past,
    Present,
    Future,
}

/// Closed aspect category consulted when building `aspect_markers`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AspectMarker {
    Continuous,
    Completed,
    Habitual,
}

/// Shallow-parse structure consumed by every downstream component.
///
/// An empty input produces an `Analysis` with all fields empty — this is
/// the documented non-error path (§4.1).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    pub pos: Vec<Pos>,
    pub deps: BTreeSet<DepArc>,
    /// Token indices whose POS/lemma/dependency label reverses polarity.
    pub neg_markers: BTreeSet<usize>,
    /// Token indices carrying a modality cue (possible/necessary/obligatory/permitted),
    /// tagged with which modal flavor they carry.
    pub modal_markers: BTreeMap<usize, crate::operator::Operator>,
    pub tense_markers: BTreeMap<TenseMarker, BTreeSet<usize>>,
    pub aspect_markers: BTreeMap<AspectMarker, BTreeSet<usize>>,
    /// `true` when the sentence's dependency root predicate is in passive voice.
    pub passive_predicates: BTreeSet<usize>,
    /// Terminal punctuation of the sentence, when present (`?`, `!`, `.`).
    pub terminal_punctuation: Option<char>,
    /// Predicate token indices in textual (occurrence) order — one per
    /// independent or subordinate clause (§9 Open Question resolution).
    pub predicate_indices: Vec<usize>,
}

impl Analysis {
    /// Every non-root token has exactly one incoming edge; this looks it up.
    pub fn head_of(&self, dependent_index: usize) -> Option<&DepArc> {
        self.deps.iter().find(|a| a.dependent_index == dependent_index)
    }

    /// All arcs whose head is `head_index`, in ascending dependent order.
    pub fn dependents_of(&self, head_index: usize) -> Vec<&DepArc> {
        let mut out: Vec<&DepArc> = self
            .deps
            .iter()
            .filter(|a| a.head_index == head_index && a.dependent_index != head_index)
            .collect();
        out.sort_by_key(|a| a.dependent_index);
        out
    }

    pub fn lemma(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(|t| t.lemma.as_str())
    }

    pub fn is_empty_input(&self) -> bool {
        self.tokens.is_empty()
    }
}
