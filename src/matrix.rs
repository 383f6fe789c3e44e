//! ROOT×ROLE compatibility matrix: a total function from `Root` to its
//! admissible `Role` set (§3).
//!
//! Declared as a `once_cell::sync::Lazy` static table, matching the
//! "tables as immutable data" convention (§9) used throughout the
//! `layered-*` family for predicate dictionaries and marker word lists:
//! initialized once, read-only for the remainder of the process.

use crate::role::Role;
use crate::root::Root;
use once_cell::sync::Lazy;
use std::collections::HashMap;

use Role::*;

/// The five bindings spec.md §3 gives literally, plus the rest of the
/// catalogue filled in by analogy so the function stays total (every
/// `Root` variant has an entry) without inventing incompatible role sets.
static MATRIX: Lazy<HashMap<Root, &'static [Role]>> = Lazy::new(|| {
    use Root::*;
    let mut m: HashMap<Root, &'static [Role]> = HashMap::new();
    m.insert(Motion, &[Agent, Theme, Source, Goal, Location, Time]);
    m.insert(Transfer, &[Agent, Theme, Source, Goal, Time]);
    m.insert(Communication, &[Agent, Patient, Theme, Instrument, Time]);
    m.insert(Cognition, &[Agent, Theme, Time]);
    m.insert(Perception, &[Agent, Theme, Instrument, Time]);
    m.insert(Creation, &[Agent, Theme, Instrument, Time]);
    m.insert(Destruction, &[Agent, Patient, Instrument, Time]);
    m.insert(Change, &[Agent, Patient, Theme, Time]);
    m.insert(Possession, &[Agent, Theme, Source, Time]);
    m.insert(Intention, &[Agent, Theme, Time]);
    m.insert(Existence, &[Agent, Theme, Location, Time]);
    m.insert(Consumption, &[Agent, Theme, Source, Time]);
    m.insert(Production, &[Agent, Theme, Instrument, Time]);
    m.insert(Observation, &[Agent, Theme, Instrument, Time]);
    m.insert(Judgment, &[Agent, Theme, Time]);
    m.insert(Emotion, &[Agent, Theme, Time]);
    m.insert(Desire, &[Agent, Theme, Time]);
    m.insert(Obligation, &[Agent, Patient, Theme, Time]);
    m.insert(Permission, &[Agent, Patient, Theme, Time]);
    m.insert(Prohibition, &[Agent, Patient, Theme, Time]);
    m.insert(Causation, &[Agent, Patient, Theme, Instrument, Time]);
    m.insert(Assistance, &[Agent, Patient, Theme, Time]);
    m.insert(Obstruction, &[Agent, Patient, Theme, Time]);
    m.insert(Competition, &[Agent, Patient, Theme, Time]);
    m.insert(Cooperation, &[Agent, Patient, Theme, Time]);
    m.insert(Agreement, &[Agent, Patient, Theme, Time]);
    m.insert(Disagreement, &[Agent, Patient, Theme, Time]);
    m.insert(Attachment, &[Agent, Theme, Goal, Time]);
    m.insert(Separation, &[Agent, Theme, Source, Time]);
    m.insert(Containment, &[Agent, Theme, Location, Time]);
    m.insert(Exposure, &[Agent, Theme, Time]);
    m.insert(Concealment, &[Agent, Theme, Location, Time]);
    m.insert(Measurement, &[Agent, Theme, Instrument, Time]);
    m.insert(Comparison, &[Agent, Theme, Time]);
    m.insert(Classification, &[Agent, Theme, Time]);
    m.insert(Repetition, &[Agent, Theme, Time]);
    m.insert(Beginning, &[Agent, Theme, Time]);
    m.insert(Ending, &[Agent, Theme, Time]);
    m.insert(Continuation, &[Agent, Theme, Time]);
    m.insert(Preparation, &[Agent, Theme, Instrument, Time]);
    m.insert(Maintenance, &[Agent, Theme, Time]);
    m.insert(Repair, &[Agent, Patient, Instrument, Time]);
    m.insert(Damage, &[Agent, Patient, Instrument, Time]);
    m.insert(Growth, &[Agent, Theme, Time]);
    m.insert(Decline, &[Agent, Theme, Time]);
    m.insert(Appearance, &[Theme, Location, Time]);
    m.insert(Disappearance, &[Theme, Location, Time]);
    m.insert(Acquisition, &[Agent, Theme, Source, Time]);
    m.insert(Loss, &[Agent, Theme, Source, Time]);
    m.insert(Exchange, &[Agent, Patient, Theme, Time]);
    m.insert(Payment, &[Agent, Patient, Theme, Instrument, Time]);
    m.insert(Request, &[Agent, Patient, Theme, Time]);
    m.insert(Offer, &[Agent, Patient, Theme, Time]);
    m.insert(Refusal, &[Agent, Patient, Theme, Time]);
    m.insert(Acceptance, &[Agent, Patient, Theme, Time]);
    m.insert(Warning, &[Agent, Patient, Theme, Time]);
    m.insert(Praise, &[Agent, Patient, Theme, Time]);
    m.insert(Criticism, &[Agent, Patient, Theme, Time]);
    m.insert(Question, &[Agent, Patient, Theme, Time]);
    m.insert(Answer, &[Agent, Patient, Theme, Time]);
    m.insert(Instruction, &[Agent, Patient, Theme, Time]);
    m.insert(Prediction, &[Agent, Theme, Time]);
    m.insert(Memory, &[Agent, Theme, Time]);
    m.insert(Belief, &[Agent, Theme, Time]);
    m.insert(Doubt, &[Agent, Theme, Time]);
    m.insert(Knowledge, &[Agent, Theme, Time]);
    m.insert(Ignorance, &[Agent, Theme, Time]);
    m.insert(Decision, &[Agent, Theme, Time]);
    m.insert(Search, &[Agent, Theme, Location, Time]);
    m.insert(Discovery, &[Agent, Theme, Location, Time]);
    m.insert(Support, &[Agent, Patient, Theme, Time]);
    m.insert(Health, &[Agent, Theme, Time]);
    debug_assert_eq!(
        m.len(),
        Root::ALL.len(),
        "ROOT×ROLE matrix must be a total function over Root"
    );
    m
});

/// The admissible `Role` set for `root`. Total: every `Root` variant has an
/// entry (enforced by a debug assertion at first use).
pub fn admissible_roles(root: Root) -> &'static [Role] {
    MATRIX.get(&root).copied().unwrap_or(&[])
}

pub fn is_admissible(root: Root, role: Role) -> bool {
    admissible_roles(root).contains(&role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_total_over_root() {
        for root in Root::ALL {
            assert!(
                !admissible_roles(*root).is_empty(),
                "{:?} has no admissible roles",
                root
            );
        }
    }

    #[test]
    fn matches_documented_examples() {
        assert_eq!(
            admissible_roles(Root::Motion),
            &[Agent, Theme, Source, Goal, Location, Time]
        );
        assert_eq!(
            admissible_roles(Root::Transfer),
            &[Agent, Theme, Source, Goal, Time]
        );
        assert_eq!(
            admissible_roles(Root::Communication),
            &[Agent, Patient, Theme, Instrument, Time]
        );
        assert_eq!(admissible_roles(Root::Cognition), &[Agent, Theme, Time]);
        assert_eq!(
            admissible_roles(Root::Perception),
            &[Agent, Theme, Instrument, Time]
        );
    }
}
