//! Paragraph-to-sentence segmentation (§1, §2: "an input sentence (or
//! paragraph segmented into sentences)"). C1 itself analyzes one sentence
//! at a time; the facade is what feeds it one segment per call and
//! concatenates the resulting CSCs in textual order (§4.6).
//!
//! Grounded on the abbreviation-aware boundary detection in
//! `layered-contracts::sentence_boundary::SentenceBoundaryResolver`: scan
//! for terminal punctuation, skip it when the token just before it is a
//! known abbreviation.

use once_cell::sync::Lazy;
use std::collections::HashSet;

static ABBREVIATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "dr", "mr", "mrs", "ms", "prof", "sr", "jr", "inc", "ltd", "corp", "co", "llc", "e.g",
        "i.e", "vs", "etc", "approx", "u.s", "u.k", "p.m", "a.m", "st", "ave", "blvd", "dept",
        "fig",
    ]
    .into_iter()
    .collect()
});

fn is_abbreviation(word_before: &str) -> bool {
    let normalized = word_before.trim_end_matches('.').to_lowercase();
    ABBREVIATIONS.contains(normalized.as_str())
}

/// Splits `text` into sentence segments on `.`/`?`/`!`, folding a trailing
/// abbreviation's period back into the running segment rather than cutting
/// there. Empty input yields no segments (§4.1's empty-input path is
/// handled by the caller, not here).
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current_start = 0usize;
    let chars: Vec<(usize, char)> = text.char_indices().collect();

    for i in 0..chars.len() {
        let (byte_idx, c) = chars[i];
        if !matches!(c, '.' | '?' | '!') {
            continue;
        }
        let word_before = text[current_start..byte_idx]
            .split_whitespace()
            .last()
            .unwrap_or("");
        if c == '.' && is_abbreviation(word_before) {
            continue;
        }
        let end = byte_idx + c.len_utf8();
        let segment = text[current_start..end].trim();
        if !segment.is_empty() {
            segments.push(segment.to_string());
        }
        current_start = end;
    }

    let tail = text[current_start..].trim();
    if !tail.is_empty() {
        segments.push(tail.to_string());
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_no_segments() {
        assert!(split_sentences("").is_empty());
    }

    #[test]
    fn single_sentence_is_one_segment() {
        assert_eq!(
            split_sentences("The boy will not go to school tomorrow."),
            vec!["The boy will not go to school tomorrow."]
        );
    }

    #[test]
    fn splits_two_sentences() {
        assert_eq!(
            split_sentences("She gave him a book. Did the cat sleep?"),
            vec!["She gave him a book.", "Did the cat sleep?"]
        );
    }

    #[test]
    fn does_not_split_on_abbreviation() {
        assert_eq!(
            split_sentences("Dr. Smith left."),
            vec!["Dr. Smith left."]
        );
    }

    #[test]
    fn trailing_text_with_no_terminal_punctuation_is_kept() {
        assert_eq!(split_sentences("Run"), vec!["Run"]);
    }
}
