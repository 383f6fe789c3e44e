//! ROOT Mapper (C2) and ROLES Binder (C4): resolves a predicate to its
//! closed `Root` primitive and binds its dependents onto the closed `Role`
//! set under the ROOT×ROLE admissibility matrix.

pub mod dictionary;
pub mod roles;

pub use dictionary::{is_known_predicate, resolve_root, RootCandidate};
pub use roles::bind_roles;
