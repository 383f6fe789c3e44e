//! C2 ROOT Mapper: resolves a predicate lemma to its closed semantic
//! primitive, with a deterministic tie-break when a lemma admits more than
//! one candidate `Root` (§4.2).
//!
//! Tie-break order: POS-match filter, then dependency-label filter, then
//! (if still ambiguous) the lexicographically smaller `Root` symbol — each
//! stage narrows the candidate set only if doing so leaves it non-empty,
//! so a candidate that fails every filter is never discarded outright.

use once_cell::sync::Lazy;
use ptil::{DepRelation, Pos, Root};
use std::collections::HashMap;

/// One candidate mapping for a predicate lemma. `pos_filter`/`dep_filter`
/// narrow the candidate to a specific surface context; `None` matches any.
#[derive(Debug, Clone, Copy)]
pub struct RootCandidate {
    pub root: Root,
    pub pos_filter: Option<Pos>,
    pub dep_filter: Option<DepRelation>,
}

const fn cand(root: Root) -> RootCandidate {
    RootCandidate {
        root,
        pos_filter: None,
        dep_filter: None,
    }
}

const fn cand_pos(root: Root, pos: Pos) -> RootCandidate {
    RootCandidate {
        root,
        pos_filter: Some(pos),
        dep_filter: None,
    }
}

const fn cand_dep(root: Root, dep: DepRelation) -> RootCandidate {
    RootCandidate {
        root,
        pos_filter: None,
        dep_filter: Some(dep),
    }
}

static PREDICATE_DICTIONARY: Lazy<HashMap<&'static str, Vec<RootCandidate>>> = Lazy::new(|| {
    use Root::*;
    let mut m: HashMap<&'static str, Vec<RootCandidate>> = HashMap::new();

    // English
    m.insert("go", vec![cand(Motion)]);
    m.insert("run", vec![cand(Motion)]);
    m.insert("come", vec![cand(Motion)]);
    m.insert("arrive", vec![cand(Motion)]);
    m.insert("fly", vec![cand(Motion)]);
    m.insert("walk", vec![cand(Motion)]);
    m.insert("move", vec![cand(Motion)]);
    m.insert("leave", vec![cand(Separation)]);
    m.insert("give", vec![cand(Transfer)]);
    m.insert("deliver", vec![cand(Transfer)]);
    m.insert("send", vec![cand(Transfer)]);
    m.insert("sell", vec![cand(Exchange)]);
    m.insert("buy", vec![cand(Acquisition)]);
    m.insert("take", vec![cand(Acquisition)]);
    m.insert("say", vec![cand(Communication)]);
    m.insert("notify", vec![cand(Communication)]);
    m.insert("see", vec![cand(Perception)]);
    m.insert("hear", vec![cand(Perception)]);
    m.insert("read", vec![cand(Perception)]);
    m.insert("watch", vec![cand(Observation)]);
    m.insert("make", vec![
        cand_dep(Causation, DepRelation::ClausalComplement),
        cand(Creation),
    ]);
    m.insert("write", vec![cand(Creation)]);
    m.insert("build", vec![cand(Creation)]);
    m.insert("break", vec![cand(Destruction)]);
    m.insert("think", vec![cand(Cognition)]);
    m.insert("know", vec![cand(Knowledge)]);
    m.insert("believe", vec![cand(Belief)]);
    m.insert("want", vec![cand(Desire)]);
    m.insert("need", vec![cand(Desire)]);
    m.insert("pay", vec![cand(Payment)]);
    m.insert("ask", vec![cand(Request)]);
    m.insert("sleep", vec![cand(Existence)]);
    m.insert("live", vec![cand(Existence)]);
    m.insert("die", vec![cand(Ending)]);
    m.insert("help", vec![cand(Assistance)]);
    m.insert("do", vec![
        cand_dep(Causation, DepRelation::ClausalComplement),
        cand_pos(Intention, Pos::Verb),
    ]);
    m.insert("play", vec![cand(Intention)]);
    m.insert("eat", vec![cand(Consumption)]);

    // Spanish
    m.insert("correr", vec![cand(Motion)]);
    m.insert("ir", vec![cand(Motion)]);
    m.insert("dar", vec![cand(Transfer)]);
    m.insert("dormir", vec![cand(Existence)]);

    m
});

/// True if `lemma` has at least one entry in the predicate dictionary.
/// Lets callers distinguish "resolved to EXISTENCE because the dictionary
/// says so" (e.g. `sleep`, `live`) from "resolved to EXISTENCE because the
/// lemma is unknown" (§4.2, §7's `DegradationReason::UnknownPredicate`).
pub fn is_known_predicate(lemma: &str) -> bool {
    PREDICATE_DICTIONARY
        .get(lemma)
        .is_some_and(|c| !c.is_empty())
}

/// Resolves `lemma` (already tagged `pos` at a predicate token whose
/// dependents carry `dependent_relations`) to a `Root`. Unknown lemmas fall
/// back to `Root::FALLBACK` (§4.2) — this function never fails.
pub fn resolve_root(lemma: &str, pos: Pos, dependent_relations: &[DepRelation]) -> Root {
    let candidates = match PREDICATE_DICTIONARY.get(lemma) {
        Some(c) if !c.is_empty() => c.as_slice(),
        _ => return Root::FALLBACK,
    };

    let pos_narrowed: Vec<&RootCandidate> = candidates
        .iter()
        .filter(|c| c.pos_filter.map_or(true, |p| p == pos))
        .collect();
    let stage1: Vec<&RootCandidate> = if pos_narrowed.is_empty() {
        candidates.iter().collect()
    } else {
        pos_narrowed
    };

    let dep_narrowed: Vec<&RootCandidate> = stage1
        .iter()
        .copied()
        .filter(|c| {
            c.dep_filter
                .map_or(true, |d| dependent_relations.contains(&d))
        })
        .collect();
    let stage2: Vec<&RootCandidate> = if dep_narrowed.is_empty() {
        stage1
    } else {
        dep_narrowed
    };

    stage2
        .iter()
        .map(|c| c.root)
        .min_by_key(|r| r.symbol())
        .unwrap_or(Root::FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_documented_examples() {
        assert_eq!(resolve_root("go", Pos::Verb, &[]), Root::Motion);
        assert_eq!(resolve_root("give", Pos::Verb, &[]), Root::Transfer);
        assert_eq!(resolve_root("say", Pos::Verb, &[]), Root::Communication);
        assert_eq!(resolve_root("think", Pos::Verb, &[]), Root::Cognition);
        assert_eq!(resolve_root("see", Pos::Verb, &[]), Root::Perception);
    }

    #[test]
    fn unknown_lemma_falls_back_to_existence() {
        assert_eq!(resolve_root("zorblax", Pos::Verb, &[]), Root::FALLBACK);
    }

    #[test]
    fn dep_filter_breaks_tie_for_causative_make() {
        assert_eq!(
            resolve_root("make", Pos::Verb, &[DepRelation::ClausalComplement]),
            Root::Causation
        );
        assert_eq!(resolve_root("make", Pos::Verb, &[]), Root::Creation);
    }
}
