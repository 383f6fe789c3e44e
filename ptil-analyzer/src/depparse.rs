//! Shallow dependency parsing (§3, §4.1): attaches each token to its
//! syntactic head under the closed `DepRelation` set. This is not a full
//! treebank parser — it is the minimum structure C2-C5 need: which token is
//! the predicate, which nominal is its subject/object, which adposition
//! introduces which oblique, and which markers (negation, auxiliary, modal)
//! are attached to which predicate.
//!
//! Clause boundaries are approximated by predicate position: token windows
//! between consecutive predicates bound where a given predicate's subject
//! and complements are searched for. Coordinated or subordinate clauses each
//! get their own predicate token and their own local window, rather than a
//! single cross-clause tree — every predicate is the root of its own clause
//! (§3 only requires *non-root* tokens to have exactly one incoming edge).

use crate::lexicon::{lexicon, LanguageLexicon};
use ptil::{Analysis, AspectMarker, DepArc, DepRelation, Operator, Pos, TenseMarker};
use std::collections::BTreeSet;

fn is_nominal(pos: Pos) -> bool {
    matches!(pos, Pos::Noun | Pos::ProperNoun | Pos::Pronoun)
}

fn modal_operator(lemma: &str) -> Option<Operator> {
    match lemma {
        "may" | "might" | "can" | "could" | "puede" | "podria" | "peut" | "pourrait"
        | "kann" | "puo" | "potrebbe" => Some(Operator::Possible),
        "must" | "debe" | "faut" | "muss" | "deve" => Some(Operator::Obligatory),
        "should" | "shall" | "necesita" | "soll" => Some(Operator::Necessary),
        "need" | "darf" | "mag" => Some(Operator::Necessary),
        _ => None,
    }
}

/// Fills in `deps`, `neg_markers`, `modal_markers`, `tense_markers`,
/// `aspect_markers`, `passive_predicates` and `predicate_indices` on an
/// `Analysis` that already has `tokens`/`pos` populated.
pub fn parse(analysis: &mut Analysis, lang: ptil::Language) {
    let lex = lexicon(lang);
    let len = analysis.tokens.len();
    if len == 0 {
        return;
    }

    let predicates: Vec<usize> = (0..len)
        .filter(|&i| analysis.pos[i] == Pos::Verb)
        .collect();
    analysis.predicate_indices = predicates.clone();

    let mut attached: BTreeSet<usize> = BTreeSet::new();
    let mut deps: BTreeSet<DepArc> = BTreeSet::new();

    for (pi, &pred) in predicates.iter().enumerate() {
        attached.insert(pred);
        let left_start = if pi == 0 { 0 } else { predicates[pi - 1] + 1 };
        let right_end = if pi + 1 < predicates.len() {
            predicates[pi + 1]
        } else {
            len
        };

        let is_passive = detect_passive(analysis, lex, left_start, pred);
        if is_passive {
            analysis.passive_predicates.insert(pred);
        }

        attach_left_window(
            analysis, lex, &mut deps, &mut attached, left_start, pred, is_passive,
        );
        attach_right_window(
            analysis, lex, &mut deps, &mut attached, pred, pred + 1, right_end,
        );
    }

    // Fallback: any token not yet attached gets `Other` from the nearest
    // preceding attached token, guaranteeing a total incoming-edge relation
    // for every non-root token (§3).
    let mut last_attached: Option<usize> = None;
    for idx in 0..len {
        if attached.contains(&idx) {
            last_attached = Some(idx);
            continue;
        }
        if let Some(head) = last_attached {
            deps.insert(DepArc::new(head, DepRelation::Other, idx));
            attached.insert(idx);
        }
        last_attached = Some(idx);
    }

    analysis.deps = deps;
    analysis.terminal_punctuation = detect_terminal_punctuation(analysis);
}

fn detect_passive(
    analysis: &Analysis,
    lex: &LanguageLexicon,
    left_start: usize,
    pred: usize,
) -> bool {
    let lemma = match analysis.lemma(pred) {
        Some(l) => l,
        None => return false,
    };
    let is_past_participle = lex
        .verb_forms
        .get(lemma)
        .map(|(_, is_pp)| *is_pp)
        .unwrap_or(false);
    if !is_past_participle {
        return false;
    }
    (left_start..pred).any(|i| {
        analysis.pos[i] == Pos::Auxiliary
            && lex.continuous_markers.contains(analysis.tokens[i].lemma.as_str())
    })
}

fn attach_left_window(
    analysis: &mut Analysis,
    lex: &LanguageLexicon,
    deps: &mut BTreeSet<DepArc>,
    attached: &mut BTreeSet<usize>,
    start: usize,
    pred: usize,
    is_passive: bool,
) {
    let mut subject_idx: Option<usize> = None;
    let mut has_future_or_past_aux = false;

    for idx in start..pred {
        let lemma = analysis.tokens[idx].lemma.as_str();
        match analysis.pos[idx] {
            Pos::Auxiliary => {
                deps.insert(DepArc::new(pred, DepRelation::Auxiliary, idx));
                attached.insert(idx);
                if lex.future_markers.contains(lemma) {
                    analysis
                        .tense_markers
                        .entry(TenseMarker::Future)
                        .or_default()
                        .insert(idx);
                    has_future_or_past_aux = true;
                } else if lex.past_markers.contains(lemma) {
                    analysis
                        .tense_markers
                        .entry(TenseMarker::Past)
                        .or_default()
                        .insert(idx);
                    has_future_or_past_aux = true;
                } else if lex.present_markers.contains(lemma) {
                    analysis
                        .tense_markers
                        .entry(TenseMarker::Present)
                        .or_default()
                        .insert(idx);
                }
                if lex.completed_markers.contains(lemma) {
                    analysis
                        .aspect_markers
                        .entry(AspectMarker::Completed)
                        .or_default()
                        .insert(idx);
                }
                if lex.continuous_markers.contains(lemma) {
                    analysis
                        .aspect_markers
                        .entry(AspectMarker::Continuous)
                        .or_default()
                        .insert(idx);
                }
                if let Some(op) = modal_operator(lemma) {
                    analysis.modal_markers.insert(idx, op);
                }
            }
            Pos::Particle if lex.negation_markers.contains(lemma) => {
                deps.insert(DepArc::new(pred, DepRelation::Negation, idx));
                attached.insert(idx);
                analysis.neg_markers.insert(idx);
            }
            Pos::Adverb if lex.habitual_markers.contains(lemma) => {
                deps.insert(DepArc::new(pred, DepRelation::AdverbialModifier, idx));
                attached.insert(idx);
                analysis
                    .aspect_markers
                    .entry(AspectMarker::Habitual)
                    .or_default()
                    .insert(idx);
            }
            p if is_nominal(p) => {
                subject_idx = Some(idx);
            }
            _ => {}
        }
    }

    if let Some(subj) = subject_idx {
        let relation = if is_passive {
            DepRelation::PassiveNominalSubject
        } else {
            DepRelation::NominalSubject
        };
        deps.insert(DepArc::new(pred, relation, subj));
        attached.insert(subj);
        attach_np_modifiers(analysis, deps, attached, start, subj);
    }

    if !has_future_or_past_aux {
        let lemma = analysis.lemma(pred).unwrap_or_default().to_string();
        if lex.simple_past_forms.contains(lemma.as_str()) {
            analysis
                .tense_markers
                .entry(TenseMarker::Past)
                .or_default()
                .insert(pred);
        } else {
            analysis
                .tense_markers
                .entry(TenseMarker::Present)
                .or_default()
                .insert(pred);
        }
    }
}

/// Attaches a determiner/adjective immediately preceding a noun phrase head
/// to that head, as `Other` (the ROLES Binder reads the contiguous span
/// directly off `Analysis.pos`, not these edges; they exist for totality).
fn attach_np_modifiers(
    analysis: &Analysis,
    deps: &mut BTreeSet<DepArc>,
    attached: &mut BTreeSet<usize>,
    window_start: usize,
    head: usize,
) {
    let mut i = head;
    while i > window_start {
        i -= 1;
        match analysis.pos[i] {
            Pos::Determiner | Pos::Adjective => {
                deps.insert(DepArc::new(head, DepRelation::Other, i));
                attached.insert(i);
            }
            _ => break,
        }
    }
}

fn attach_right_window(
    analysis: &mut Analysis,
    lex: &LanguageLexicon,
    deps: &mut BTreeSet<DepArc>,
    attached: &mut BTreeSet<usize>,
    pred: usize,
    start: usize,
    end: usize,
) {
    let is_passive = analysis.passive_predicates.contains(&pred);
    let mut idx = start;

    // NPs directly following the verb, determiner/adjective optional:
    // dative-shift detection ("gave him a book", "dio un libro").
    let mut bare_objects: Vec<usize> = Vec::new();
    loop {
        while idx < end && matches!(analysis.pos[idx], Pos::Determiner | Pos::Adjective) {
            idx += 1;
        }
        if idx < end && is_nominal(analysis.pos[idx]) {
            bare_objects.push(idx);
            idx += 1;
        } else {
            break;
        }
    }
    match bare_objects.len() {
        0 => {}
        1 => {
            deps.insert(DepArc::new(pred, DepRelation::DirectObject, bare_objects[0]));
            attached.insert(bare_objects[0]);
        }
        _ => {
            deps.insert(DepArc::new(pred, DepRelation::IndirectObject, bare_objects[0]));
            attached.insert(bare_objects[0]);
            let direct = *bare_objects.last().unwrap();
            deps.insert(DepArc::new(pred, DepRelation::DirectObject, direct));
            attached.insert(direct);
        }
    }

    // Prepositional phrases and passive by-agent.
    while idx < end {
        if analysis.pos[idx] == Pos::Adposition {
            let prep_idx = idx;
            let prep_lemma = analysis.tokens[prep_idx].lemma.clone();
            let mut np_start = idx + 1;
            while np_start < end
                && matches!(analysis.pos[np_start], Pos::Determiner | Pos::Adjective)
            {
                np_start += 1;
            }
            if np_start < end && is_nominal(analysis.pos[np_start]) {
                let noun_idx = np_start;
                if is_passive && prep_lemma == "by" {
                    deps.insert(DepArc::new(pred, DepRelation::PassiveAgent, noun_idx));
                    deps.insert(DepArc::new(noun_idx, DepRelation::Other, prep_idx));
                } else {
                    deps.insert(DepArc::new(pred, DepRelation::CaseMarking, prep_idx));
                    deps.insert(DepArc::new(prep_idx, DepRelation::ObliquePrepositional, noun_idx));
                }
                attached.insert(prep_idx);
                attached.insert(noun_idx);
                attach_np_modifiers(analysis, deps, attached, idx + 1, noun_idx);
                idx = noun_idx + 1;
                continue;
            }
        }
        idx += 1;
    }

    // Bare temporal adjuncts (no preposition): "tomorrow", "yesterday".
    for i in start..end {
        if attached.contains(&i) {
            continue;
        }
        if analysis.pos[i] == Pos::Noun && lex.temporal_nouns.contains(analysis.tokens[i].lemma.as_str())
        {
            deps.insert(DepArc::new(pred, DepRelation::AdverbialModifier, i));
            attached.insert(i);
        }
    }
}

fn detect_terminal_punctuation(analysis: &Analysis) -> Option<char> {
    analysis
        .tokens
        .iter()
        .rev()
        .find_map(|t| {
            let c = t.text.chars().next()?;
            matches!(c, '?' | '!' | '.').then_some(c)
        })
}
