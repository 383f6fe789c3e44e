//! CSC: the assembled record `(root, ops, roles, meta)` (§3).

use crate::meta::Meta;
use crate::operator::Ops;
use crate::role::Role;
use crate::root::Root;
use crate::entity::Entity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One predicate's compressed semantic code.
///
/// `roles` uses a `BTreeMap` keyed by `Role` so "each Role key present at
/// most once" (global invariant 4) is a structural guarantee, not a runtime
/// check, and so iteration order is already role-sorted — though
/// serializers still re-sort by `Role::rank` rather than `Role`'s derived
/// `Ord`, since the two orders happen to coincide only because
/// `CANONICAL_ORDER` was declared in `Ord`-matching sequence; see
/// `role::Role::rank`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Csc {
    pub root: Root,
    pub ops: Ops,
    pub roles: BTreeMap<Role, Entity>,
    pub meta: Option<Meta>,
}

impl Csc {
    pub fn new(root: Root) -> Self {
        Self {
            root,
            ops: Vec::new(),
            roles: BTreeMap::new(),
            meta: None,
        }
    }

    /// Roles in canonical emission order (§4.7), for serializers.
    pub fn roles_in_canonical_order(&self) -> Vec<(Role, &Entity)> {
        let mut out: Vec<(Role, &Entity)> = self.roles.iter().map(|(r, e)| (*r, e)).collect();
        out.sort_by_key(|(r, _)| r.rank());
        out
    }
}
