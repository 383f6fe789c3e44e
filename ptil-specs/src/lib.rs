//! Specification-driven testing infrastructure for `ptil` (§8): golden
//! end-to-end fixtures for the six literal scenarios, the round-trip
//! idempotence law, and the ten universal testable properties P1-P10.
//!
//! This crate holds no runtime logic of its own — it is a harness crate,
//! the `ptil` analogue of `layered-nlp-specs` in the teacher repo, trimmed
//! to what spec.md §8 actually asks for rather than that crate's full
//! fixture-file/DSL machinery (see DESIGN.md).

pub mod fixtures;
mod golden;
mod properties;
