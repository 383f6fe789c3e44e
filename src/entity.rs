//! Entity: a surface span paired with its normalized serialization form (§3).

use serde::{Deserialize, Serialize};

/// A surface span with its normalized uppercase form.
///
/// Entities do not outlive the CSC that contains them (§3 lifecycle);
/// nothing here borrows from the `Analysis` it was extracted from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Surface span, lowercased and whitespace-trimmed/joined.
    pub text: String,
    /// Uppercased, diacritic-preserving form with internal whitespace
    /// collapsed to a single underscore, used in serialization.
    pub normalized: String,
}

impl Entity {
    /// Build an `Entity` from the ordered surface tokens that make up a span.
    pub fn from_tokens<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Self {
        let joined = tokens
            .into_iter()
            .collect::<Vec<_>>()
            .join(" ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        let text = joined.to_lowercase();
        let normalized = joined
            .to_uppercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_");
        Self { text, normalized }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_multi_word_span() {
        let e = Entity::from_tokens(["the", "school", "of", "Rock"]);
        assert_eq!(e.text, "the school of rock");
        assert_eq!(e.normalized, "THE_SCHOOL_OF_ROCK");
    }

    #[test]
    fn preserves_unicode_letters() {
        let e = Entity::from_tokens(["niño"]);
        assert_eq!(e.normalized, "NIÑO");
    }

    #[test]
    fn collapses_repeated_whitespace() {
        let e = Entity::from_tokens(["book"]);
        assert_eq!(e.normalized, "BOOK");
        assert_eq!(e.text, "book");
    }
}
