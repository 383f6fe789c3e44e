//! C4 ROLES Binder: maps a predicate's dependents onto the closed `Role`
//! set under the ROOT×ROLE admissibility matrix (§4.4).
//!
//! Binding order follows dependency-relation priority (subject, direct
//! object, indirect object, prepositional/adverbial complements); within a
//! single relation, `Analysis::dependents_of` already yields dependents in
//! ascending token order, so the first assignment to a given `Role` is
//! always the leftmost one — later candidates for an already-filled `Role`
//! are dropped (§9's leftmost-wins resolution).

use once_cell::sync::Lazy;
use ptil::{is_admissible, Analysis, DepRelation, Entity, Language, Pos, Role, Root};
use std::collections::{BTreeMap, HashSet};

static GOAL_PREPS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["to", "into", "onto", "toward", "towards", "a", "hacia", "vers", "zu", "nach", "verso"]
        .into_iter()
        .collect()
});
static SOURCE_PREPS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["from", "out", "desde", "de", "von", "da"].into_iter().collect()
});
static INSTRUMENT_PREPS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["with", "using", "con", "avec", "mit"].into_iter().collect()
});
static TIME_PREPS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "before", "after", "during", "antes", "despues", "avant", "apres", "pendant", "vor",
        "wahrend", "prima", "dopo",
    ]
    .into_iter()
    .collect()
});

/// Closed mapping from a preposition lemma to the `Role` it introduces.
/// `"in"/"on"/"at"` and their cross-language equivalents default to
/// `LOCATION` unless the governed noun is a temporal noun (§4.4 tie-break),
/// in which case the caller resolves it to `TIME` instead.
fn preposition_role(lemma: &str) -> Role {
    if GOAL_PREPS.contains(lemma) {
        Role::Goal
    } else if SOURCE_PREPS.contains(lemma) {
        Role::Source
    } else if INSTRUMENT_PREPS.contains(lemma) {
        Role::Instrument
    } else if TIME_PREPS.contains(lemma) {
        Role::Time
    } else {
        Role::Location
    }
}

/// Entity spans never carry a determiner or an adposition (§8 golden
/// vectors normalize `"the boy"` to `BOY`, not `THE_BOY`, and a passive
/// by-agent's `"by"` is span noise, not part of the agent's name): articles
/// and adpositions are semantically empty for CSC purposes, so
/// `attach_np_modifiers`'/the passive-agent `"by"` edge are filtered out
/// here rather than skipped at attachment time, where they still serve to
/// keep every non-root token attached (§3).
fn entity_for(analysis: &Analysis, head_idx: usize) -> Entity {
    let mut idxs: Vec<usize> = analysis
        .dependents_of(head_idx)
        .into_iter()
        .filter(|a| a.relation == DepRelation::Other && a.dependent_index < head_idx)
        .map(|a| a.dependent_index)
        .filter(|&i| !matches!(analysis.pos.get(i), Some(&Pos::Determiner) | Some(&Pos::Adposition)))
        .collect();
    idxs.push(head_idx);
    idxs.sort_unstable();
    let texts = idxs.iter().filter_map(|&i| analysis.tokens.get(i)).map(|t| t.text.as_str());
    Entity::from_tokens(texts)
}

fn try_insert(roles: &mut BTreeMap<Role, Entity>, root: Root, role: Role, entity: Entity) {
    if !is_admissible(root, role) {
        return;
    }
    roles.entry(role).or_insert(entity);
}

/// Binds `predicate_idx`'s dependents onto `Role`s, filtered by what `root`
/// admits. Returns an empty map if the predicate has no bindable
/// dependents — e.g. an imperative with no overt subject and no object
/// (§4.4 "no-invented-AGENT" rule: never insert a role without a surface
/// dependent to back it).
pub fn bind_roles(
    analysis: &Analysis,
    predicate_idx: usize,
    root: Root,
    lang: Language,
) -> BTreeMap<Role, Entity> {
    let lex = ptil_analyzer::language_lexicon(lang);
    let mut roles = BTreeMap::new();

    for arc in analysis.dependents_of(predicate_idx) {
        match arc.relation {
            DepRelation::NominalSubject => {
                try_insert(&mut roles, root, Role::Agent, entity_for(analysis, arc.dependent_index));
            }
            DepRelation::PassiveNominalSubject => {
                let entity = entity_for(analysis, arc.dependent_index);
                if matches!(root, Root::Motion | Root::Transfer) {
                    try_insert(&mut roles, root, Role::Theme, entity);
                } else {
                    try_insert(&mut roles, root, Role::Patient, entity);
                }
            }
            DepRelation::PassiveAgent => {
                try_insert(&mut roles, root, Role::Agent, entity_for(analysis, arc.dependent_index));
            }
            DepRelation::DirectObject => {
                let entity = entity_for(analysis, arc.dependent_index);
                if is_admissible(root, Role::Patient) {
                    try_insert(&mut roles, root, Role::Patient, entity);
                } else {
                    try_insert(&mut roles, root, Role::Theme, entity);
                }
            }
            DepRelation::IndirectObject => {
                try_insert(&mut roles, root, Role::Goal, entity_for(analysis, arc.dependent_index));
            }
            DepRelation::CaseMarking => {
                let prep_idx = arc.dependent_index;
                let prep_lemma = analysis.tokens[prep_idx].lemma.as_str();
                for oblique in analysis.dependents_of(prep_idx) {
                    if oblique.relation != DepRelation::ObliquePrepositional {
                        continue;
                    }
                    let noun_idx = oblique.dependent_index;
                    let noun_lemma = analysis.tokens[noun_idx].lemma.as_str();
                    let role = if lex.temporal_nouns.contains(noun_lemma) {
                        Role::Time
                    } else {
                        preposition_role(prep_lemma)
                    };
                    try_insert(&mut roles, root, role, entity_for(analysis, noun_idx));
                }
            }
            DepRelation::AdverbialModifier => {
                if analysis.pos.get(arc.dependent_index) == Some(&Pos::Noun) {
                    try_insert(
                        &mut roles,
                        root,
                        Role::Time,
                        entity_for(analysis, arc.dependent_index),
                    );
                }
            }
            _ => {}
        }
    }

    roles
}
