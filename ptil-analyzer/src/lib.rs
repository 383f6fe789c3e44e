//! Linguistic Analyzer (C1): tokenizes, POS-tags and shallow-dependency-
//! parses raw text into the `Analysis` struct consumed by every downstream
//! CSC pipeline component. Closed, rule-based, no statistical model — five
//! languages (`en`, `es`, `fr`, `de`, `it`), each backed by its own
//! hand-authored lexicon table.

pub mod analyzer;
pub mod depparse;
pub mod lexicon;
pub mod pos;
pub mod tokenizer;

pub use analyzer::Analyzer;
pub use lexicon::{base_lemma, lexicon as language_lexicon, LanguageLexicon};
