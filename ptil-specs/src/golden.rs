//! The six literal end-to-end scenarios from spec.md §8, plus the
//! round-trip/idempotence law stated in the same section. Plain
//! `assert_eq!` against inline golden strings/values — no `insta` snapshot
//! dependency is pulled in for six fixed vectors (see DESIGN.md); `insta`
//! is reserved for the larger ultra-compact abbreviation matrix in
//! `ptil-serialize::golden`.
