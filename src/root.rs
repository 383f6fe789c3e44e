//! ROOT: the closed set of semantic primitives anchoring a CSC (§3).
//!
//! The set is part of the public contract and must not vary across inputs
//! or languages (global invariant 5, §3). `ROOT_SET_VERSION` gates any
//! future growth of the catalogue per §9's Open Question resolution: the
//! documented minimum of 11 primitives is kept verbatim as the first 11
//! variants below; the remainder round the catalogue out to the domain
//! coverage the predicate dictionary (`ptil-semantics`) actually needs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Bump this when new `Root` variants are added. Consumers that persist
/// serialized CSCs across versions should gate on it.
pub const ROOT_SET_VERSION: u32 = 1;

/// A symbol from the finite closed set of semantic primitives.
///
/// `EXISTENCE` is the documented fallback ROOT for unresolvable predicates
/// (§4.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum Root {
    // --- Documented minimum set (§3) ---
    Motion,
    Transfer,
    Communication,
    Cognition,
    Perception,
    Creation,
    Destruction,
    Change,
    Possession,
    Intention,
    Existence,

    // --- Enrichment set (DESIGN.md §ROOT-set) ---
    Consumption,
    Production,
    Observation,
    Judgment,
    Emotion,
    Desire,
    Obligation,
    Permission,
    Prohibition,
    Causation,
    Assistance,
    Obstruction,
    Competition,
    Cooperation,
    Agreement,
    Disagreement,
    Attachment,
    Separation,
    Containment,
    Exposure,
    Concealment,
    Measurement,
    Comparison,
    Classification,
    Repetition,
    Beginning,
    Ending,
    Continuation,
    Preparation,
    Maintenance,
    Repair,
    Damage,
    Growth,
    Decline,
    Appearance,
    Disappearance,
    Acquisition,
    Loss,
    Exchange,
    Payment,
    Request,
    Offer,
    Refusal,
    Acceptance,
    Warning,
    Praise,
    Criticism,
    Question,
    Answer,
    Instruction,
    Prediction,
    Memory,
    Belief,
    Doubt,
    Knowledge,
    Ignorance,
    Decision,
    Search,
    Discovery,
    Support,
    Health,
}

impl Root {
    /// All variants in declaration order; used by static-table builders and
    /// property tests that need to enumerate the closed set.
    pub const ALL: &'static [Root] = &[
        Root::Motion,
        Root::Transfer,
        Root::Communication,
        Root::Cognition,
        Root::Perception,
        Root::Creation,
        Root::Destruction,
        Root::Change,
        Root::Possession,
        Root::Intention,
        Root::Existence,
        Root::Consumption,
        Root::Production,
        Root::Observation,
        Root::Judgment,
        Root::Emotion,
        Root::Desire,
        Root::Obligation,
        Root::Permission,
        Root::Prohibition,
        Root::Causation,
        Root::Assistance,
        Root::Obstruction,
        Root::Competition,
        Root::Cooperation,
        Root::Agreement,
        Root::Disagreement,
        Root::Attachment,
        Root::Separation,
        Root::Containment,
        Root::Exposure,
        Root::Concealment,
        Root::Measurement,
        Root::Comparison,
        Root::Classification,
        Root::Repetition,
        Root::Beginning,
        Root::Ending,
        Root::Continuation,
        Root::Preparation,
        Root::Maintenance,
        Root::Repair,
        Root::Damage,
        Root::Growth,
        Root::Decline,
        Root::Appearance,
        Root::Disappearance,
        Root::Acquisition,
        Root::Loss,
        Root::Exchange,
        Root::Payment,
        Root::Request,
        Root::Offer,
        Root::Refusal,
        Root::Acceptance,
        Root::Warning,
        Root::Praise,
        Root::Criticism,
        Root::Question,
        Root::Answer,
        Root::Instruction,
        Root::Prediction,
        Root::Memory,
        Root::Belief,
        Root::Doubt,
        Root::Knowledge,
        Root::Ignorance,
        Root::Decision,
        Root::Search,
        Root::Discovery,
        Root::Support,
        Root::Health,
    ];

    /// Uppercase symbol used in serialization, e.g. `"MOTION"`.
    pub fn symbol(self) -> &'static str {
        match self {
            Root::Motion => "MOTION",
            Root::Transfer => "TRANSFER",
            Root::Communication => "COMMUNICATION",
            Root::Cognition => "COGNITION",
            Root::Perception => "PERCEPTION",
            Root::Creation => "CREATION",
            Root::Destruction => "DESTRUCTION",
            Root::Change => "CHANGE",
            Root::Possession => "POSSESSION",
            Root::Intention => "INTENTION",
            Root::Existence => "EXISTENCE",
            Root::Consumption => "CONSUMPTION",
            Root::Production => "PRODUCTION",
            Root::Observation => "OBSERVATION",
            Root::Judgment => "JUDGMENT",
            Root::Emotion => "EMOTION",
            Root::Desire => "DESIRE",
            Root::Obligation => "OBLIGATION",
            Root::Permission => "PERMISSION",
            Root::Prohibition => "PROHIBITION",
            Root::Causation => "CAUSATION",
            Root::Assistance => "ASSISTANCE",
            Root::Obstruction => "OBSTRUCTION",
            Root::Competition => "COMPETITION",
            Root::Cooperation => "COOPERATION",
            Root::Agreement => "AGREEMENT",
            Root::Disagreement => "DISAGREEMENT",
            Root::Attachment => "ATTACHMENT",
            Root::Separation => "SEPARATION",
            Root::Containment => "CONTAINMENT",
            Root::Exposure => "EXPOSURE",
            Root::Concealment => "CONCEALMENT",
            Root::Measurement => "MEASUREMENT",
            Root::Comparison => "COMPARISON",
            Root::Classification => "CLASSIFICATION",
            Root::Repetition => "REPETITION",
            Root::Beginning => "BEGINNING",
            Root::Ending => "ENDING",
            Root::Continuation => "CONTINUATION",
            Root::Preparation => "PREPARATION",
            Root::Maintenance => "MAINTENANCE",
            Root::Repair => "REPAIR",
            Root::Damage => "DAMAGE",
            Root::Growth => "GROWTH",
            Root::Decline => "DECLINE",
            Root::Appearance => "APPEARANCE",
            Root::Disappearance => "DISAPPEARANCE",
            Root::Acquisition => "ACQUISITION",
            Root::Loss => "LOSS",
            Root::Exchange => "EXCHANGE",
            Root::Payment => "PAYMENT",
            Root::Request => "REQUEST",
            Root::Offer => "OFFER",
            Root::Refusal => "REFUSAL",
            Root::Acceptance => "ACCEPTANCE",
            Root::Warning => "WARNING",
            Root::Praise => "PRAISE",
            Root::Criticism => "CRITICISM",
            Root::Question => "QUESTION",
            Root::Answer => "ANSWER",
            Root::Instruction => "INSTRUCTION",
            Root::Prediction => "PREDICTION",
            Root::Memory => "MEMORY",
            Root::Belief => "BELIEF",
            Root::Doubt => "DOUBT",
            Root::Knowledge => "KNOWLEDGE",
            Root::Ignorance => "IGNORANCE",
            Root::Decision => "DECISION",
            Root::Search => "SEARCH",
            Root::Discovery => "DISCOVERY",
            Root::Support => "SUPPORT",
            Root::Health => "HEALTH",
        }
    }

    /// The documented fallback ROOT when a predicate cannot be resolved (§4.2).
    pub const FALLBACK: Root = Root::Existence;
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
