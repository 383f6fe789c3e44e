//! The diagnostics channel (§7): reports which per-sentence recoveries
//! fired without altering the serialized output. Never caller-visible as an
//! error — `InternalDegradation` in spec terms is this module's
//! `DegradationReason`, surfaced only through `Encoder::encode_with_diagnostics`.

use ptil::{Role, Root};
use serde::{Deserialize, Serialize};

/// A recoverable, per-sentence fault and the documented fallback that fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DegradationReason {
    /// The predicate lemma had no dictionary entry; `Root::FALLBACK` was used (§4.2).
    UnknownPredicate,
    /// The dependency parse for the sentence came back empty (§4.1).
    EmptyDependencyParse,
    /// A bound role was not admissible under its CSC's root and was dropped (§4.6).
    IncompatibleRoleDropped { role: Role, root: Root },
}

/// One recorded recovery, optionally tied to the predicate token index it
/// was resolving (`None` for sentence-wide faults like an empty parse).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub predicate_index: Option<usize>,
    pub reason: DegradationReason,
}
