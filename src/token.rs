//! Surface tokens and part-of-speech tags produced by the linguistic analyzer.

use serde::{Deserialize, Serialize};

/// A fixed part-of-speech tag set (Universal-Dependencies-flavored, trimmed
/// to what the downstream components actually consult).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pos {
    Noun,
    ProperNoun,
    Pronoun,
    Verb,
    Auxiliary,
    Adjective,
    Adverb,
    Adposition,
    Determiner,
    Conjunction,
    Particle,
    Numeral,
    Punctuation,
    Interjection,
    Other,
}

impl Pos {
    /// True for tags that can head a predicate (a CSC's ROOT anchor).
    pub fn is_predicate_bearing(self) -> bool {
        matches!(self, Pos::Verb | Pos::Auxiliary | Pos::Noun)
    }
}

/// One surface token, aligned 1:1 with an `Analysis::pos` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface text exactly as it appeared in the input.
    pub text: String,
    /// Lowercased, diacritic-preserving lemma-ish form used for dictionary
    /// lookups. This is a shallow normalization, not true lemmatization.
    pub lemma: String,
    /// Byte offset of the token's first byte in the original input.
    pub byte_offset: usize,
}

impl Token {
    pub fn new(text: impl Into<String>, byte_offset: usize) -> Self {
        let text = text.into();
        let lemma = text.to_lowercase();
        Self {
            text,
            lemma,
            byte_offset,
        }
    }
}
