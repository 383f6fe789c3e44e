//! C3 OPS Extractor: builds the ordered `Ops` sequence for one predicate
//! (§3, §4.3).
//!
//! OPS is a left-to-right scan over token index, not over marker category:
//! the scan visits every index attached to `predicate_idx` (directly, or
//! the predicate's own index for its intrinsic tense) in ascending order,
//! and at each index collects every operator cue registered there. A single
//! index can register more than one cue only in principle (the closed
//! marker tables used by `ptil-analyzer` never double-register the same
//! index); when it does, `OperatorCategory`'s priority order (polarity,
//! modality, aspect, temporal, causation, direction, §4.3) breaks the tie
//! before appending.

use ptil::{Analysis, AspectMarker, Operator, Ops, TenseMarker};

fn operators_at(analysis: &Analysis, idx: usize) -> Vec<Operator> {
    let mut found = Vec::new();

    if analysis.neg_markers.contains(&idx) {
        found.push(Operator::Negation);
    }
    if let Some(op) = analysis.modal_markers.get(&idx) {
        found.push(*op);
    }
    for (tense, indices) in &analysis.tense_markers {
        if indices.contains(&idx) {
            found.push(match tense {
                TenseMarker::Past => Operator::Past,
                TenseMarker::Present => Operator::Present,
                TenseMarker::Future => Operator::Future,
            });
        }
    }
    for (aspect, indices) in &analysis.aspect_markers {
        if indices.contains(&idx) {
            found.push(match aspect {
                AspectMarker::Continuous => Operator::Continuous,
                AspectMarker::Completed => Operator::Completed,
                AspectMarker::Habitual => Operator::Habitual,
            });
        }
    }

    found.sort_by_key(|op| op.category());
    found
}

/// Builds the ordered operator sequence for `predicate_idx`. An index
/// contributes only if it is `predicate_idx` itself or directly attached to
/// it in `analysis.deps`.
pub fn extract_ops(analysis: &Analysis, predicate_idx: usize) -> Ops {
    let mut ops = Vec::new();
    for idx in 0..analysis.tokens.len() {
        let attached_here =
            idx == predicate_idx || analysis.head_of(idx).map(|a| a.head_index) == Some(predicate_idx);
        if !attached_here {
            continue;
        }
        ops.extend(operators_at(analysis, idx));
    }
    ops
}
