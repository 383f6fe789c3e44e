//! Tokenization: splits raw text into surface tokens with byte offsets.

use ptil::Token;
use unicode_segmentation::UnicodeSegmentation;

/// Split `text` into tokens on Unicode word boundaries, keeping punctuation
/// as its own token. Empty input yields an empty token list (§4.1).
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    for (offset, word) in text.split_word_bound_indices() {
        if word.trim().is_empty() {
            continue;
        }
        tokens.push(Token::new(word, offset));
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn splits_contractions_and_punctuation() {
        let toks: Vec<&str> = tokenize("The boy will not go to school tomorrow.")
            .iter()
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(
            toks,
            vec!["The", "boy", "will", "not", "go", "to", "school", "tomorrow", "."]
        );
    }

    #[test]
    fn keeps_negation_contraction_as_one_token() {
        let toks: Vec<&str> = tokenize("She didn't go.")
            .iter()
            .map(|t| t.text.as_str())
            .collect();
        assert!(toks.contains(&"didn't") || toks.contains(&"n't"));
    }

    #[test]
    fn preserves_unicode_letters() {
        let toks: Vec<&str> = tokenize("El niño corre.")
            .iter()
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(toks, vec!["El", "niño", "corre", "."]);
    }
}
