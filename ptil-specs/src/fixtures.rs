//! Curated data tables the property and golden tests are run against:
//! synonym pairs for P4, and the parallel-sentence table for P9 (§8).
//!
//! Neither table is randomly generated — both are curated exactly as
//! §8/§9 call for ("designated synonym equivalence table",
//! "curated parallel-sentence table") — the randomization proptest adds
//! is in the surrounding sentence frame, not in the word lists themselves.

use ptil::{Language, Root};

/// Predicate lemma pairs drawn from the same `PREDICATE_DICTIONARY` bucket
/// (`ptil-semantics::dictionary`), so substituting one for the other as the
/// main predicate of an otherwise-identical sentence must yield the same
/// ROOT (P4).
pub const SYNONYM_PAIRS: &[(&str, &str, Root)] = &[
    ("go", "walk", Root::Motion),
    ("go", "run", Root::Motion),
    ("give", "deliver", Root::Transfer),
    ("give", "send", Root::Transfer),
    ("want", "need", Root::Desire),
    ("see", "hear", Root::Perception),
    ("write", "build", Root::Creation),
    ("sleep", "live", Root::Existence),
];

/// One entry per parallel sentence pair: an English sentence and a
/// non-English sentence that describe the same event, both of which must
/// resolve to the same ROOT (P9, spec.md §8 scenario 4).
pub struct ParallelSentence {
    pub english: &'static str,
    pub other_language: Language,
    pub other: &'static str,
    pub expected_root: Root,
}

pub const PARALLEL_SENTENCES: &[ParallelSentence] = &[
    ParallelSentence {
        english: "The boy runs.",
        other_language: Language::Es,
        other: "El niño corre.",
        expected_root: Root::Motion,
    },
    ParallelSentence {
        english: "She gave him a book.",
        other_language: Language::Es,
        other: "Ella dio un libro.",
        expected_root: Root::Transfer,
    },
    ParallelSentence {
        english: "The cat sleeps.",
        other_language: Language::Es,
        other: "El gato duerme.",
        expected_root: Root::Existence,
    },
];
