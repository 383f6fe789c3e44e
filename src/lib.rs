//! `ptil` — Compressed Semantic Code (CSC) foundation crate.
//!
//! This crate is the data-model foundation other `ptil-*` crates build on:
//! the C1 analyzer output shape, the four closed enumerations (`Root`,
//! `Operator`, `Role`, `Meta`), `Entity`, `Csc` itself, and the ROOT×ROLE
//! compatibility matrix. It holds no pipeline logic — analysis, mapping,
//! extraction, binding, detection, assembly, and serialization each live in
//! their own crate (`ptil-analyzer`, `ptil-semantics`, `ptil-ops`,
//! `ptil-meta`, `ptil-encoder`, `ptil-serialize`).
//!
//! ## Modules
//!
//! - [`token`] — surface tokens and the POS tag set
//! - [`dep`] — dependency relation labels and arcs
//! - [`analysis`] — the C1 output structure
//! - [`root`] — the closed ROOT primitive set
//! - [`operator`] — the closed Operator set and OPS ordering
//! - [`role`] — the closed Role set and canonical emission order
//! - [`meta`] — the optional speech-act tag
//! - [`entity`] — surface span + normalized form
//! - [`csc`] — the assembled CSC record
//! - [`matrix`] — the ROOT×ROLE compatibility matrix
//! - [`error`] — `Language` selection and the caller-visible error taxonomy

pub mod analysis;
pub mod csc;
pub mod dep;
pub mod entity;
pub mod error;
pub mod matrix;
pub mod meta;
pub mod operator;
pub mod role;
pub mod root;
pub mod token;

pub use analysis::{Analysis, AspectMarker, TenseMarker};
pub use csc::Csc;
pub use dep::{DepArc, DepRelation};
pub use entity::Entity;
pub use error::{EncodeError, EncodeResult, Language};
pub use matrix::{admissible_roles, is_admissible};
pub use meta::Meta;
pub use operator::{Operator, OperatorCategory, Ops};
pub use role::Role;
pub use root::{Root, ROOT_SET_VERSION};
pub use token::{Pos, Token};
