//! C6 CSC Assembler (§4.6): builds one `Csc` per predicate and validates it.
//!
//! Validation here is recovery, not failure (§7's `InternalDegradation`):
//! an incompatible role is dropped and noted on the diagnostics channel, the
//! assembler itself never returns an error.

use crate::diagnostics::{Diagnostic, DegradationReason};
use ptil::{is_admissible, Csc, Entity, Meta, Operator, Role, Root};
use std::collections::BTreeMap;

/// Assembles one CSC from its parts, dropping any role the ROOT×ROLE matrix
/// doesn't admit and recording a diagnostic for each drop (§4.6).
///
/// `ops` is already a finite `Vec<Operator>` by construction — every
/// `Operator` value is a variant of the closed enum, so the "elements all
/// belong to the Operator closed set" check is a compile-time guarantee
/// here rather than a runtime one.
pub fn assemble(
    root: Root,
    ops: Vec<Operator>,
    roles: BTreeMap<Role, Entity>,
    meta: Option<Meta>,
    predicate_index: usize,
) -> (Csc, Vec<Diagnostic>) {
    let mut csc = Csc::new(root);
    csc.ops = ops;
    csc.meta = meta;

    let mut diagnostics = Vec::new();
    for (role, entity) in roles {
        if is_admissible(root, role) {
            csc.roles.insert(role, entity);
        } else {
            diagnostics.push(Diagnostic {
                predicate_index: Some(predicate_index),
                reason: DegradationReason::IncompatibleRoleDropped { role, root },
            });
        }
    }

    (csc, diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ptil::Role::*;

    #[test]
    fn drops_incompatible_role_and_records_diagnostic() {
        let mut roles = BTreeMap::new();
        roles.insert(Instrument, Entity::from_tokens(["hammer"]));
        roles.insert(Agent, Entity::from_tokens(["boy"]));
        // Cognition does not admit INSTRUMENT (§3 example bindings).
        let (csc, diags) = assemble(Root::Cognition, vec![], roles, None, 0);
        assert!(csc.roles.get(&Instrument).is_none());
        assert_eq!(csc.roles.get(&Agent).map(|e| e.normalized.as_str()), Some("BOY"));
        assert_eq!(diags.len(), 1);
        assert_eq!(
            diags[0].reason,
            DegradationReason::IncompatibleRoleDropped {
                role: Instrument,
                root: Root::Cognition
            }
        );
    }

    #[test]
    fn keeps_every_admissible_role() {
        let mut roles = BTreeMap::new();
        roles.insert(Agent, Entity::from_tokens(["boy"]));
        roles.insert(Goal, Entity::from_tokens(["school"]));
        let (csc, diags) = assemble(Root::Motion, vec![Operator::Future], roles, None, 0);
        assert!(diags.is_empty());
        assert_eq!(csc.roles.len(), 2);
    }
}
