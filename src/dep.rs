//! Dependency arcs: the acyclic tree that links tokens to their syntactic head.

use serde::{Deserialize, Serialize};

/// Closed set of dependency relation labels consulted by the encoder.
///
/// This is not a full Universal Dependencies label set — it is restricted to
/// the relations the downstream components (ROLES Binder, OPS Extractor)
/// actually branch on, matching the "shallow" contract of C1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DepRelation {
    /// Nominal subject (active or passive).
    NominalSubject,
    /// Passive nominal subject, when the parser can distinguish voice directly.
    PassiveNominalSubject,
    /// Direct object.
    DirectObject,
    /// Indirect object.
    IndirectObject,
    /// Oblique / prepositional complement attached under a preposition token.
    ObliquePrepositional,
    /// The preposition itself, attached to its predicate.
    CaseMarking,
    /// "by"-phrase agent in a passive construction.
    PassiveAgent,
    /// Auxiliary verb (tense/aspect/modal carrier).
    Auxiliary,
    /// Negation particle.
    Negation,
    /// Adverbial modifier (carries temporal/aspectual adverbs).
    AdverbialModifier,
    /// Clausal complement (subordinate predicate).
    ClausalComplement,
    /// Coordinating conjunction link between two predicates.
    Coordination,
    /// Conjunct introduced by a coordinating conjunction.
    Conjunct,
    /// Root of the sentence (no incoming edge).
    Root,
    /// Catch-all for relations the shallow parser emits but no component reads.
    Other,
}

/// One edge of the dependency tree: `dependent_index` attaches to
/// `head_index` under `relation`. The root token of a clause has a
/// self-referential or sentinel head handled by the analyzer, never a
/// missing edge — every non-root token has exactly one incoming edge (§3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DepArc {
    pub head_index: usize,
    pub relation: DepRelation,
    pub dependent_index: usize,
}

impl DepArc {
    pub fn new(head_index: usize, relation: DepRelation, dependent_index: usize) -> Self {
        Self {
            head_index,
            relation,
            dependent_index,
        }
    }
}
