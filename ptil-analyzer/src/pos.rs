//! Rule-based POS tagging over the closed lexicon tables (§4.1).

use crate::lexicon::{lexicon, LanguageLexicon};
use ptil::{Language, Pos, Token};

pub fn tag_all(tokens: &[Token], language: Language) -> Vec<Pos> {
    let lex = lexicon(language);
    let mut out = Vec::with_capacity(tokens.len());
    for (idx, tok) in tokens.iter().enumerate() {
        out.push(tag_one(tok, idx == 0, lex));
    }
    out
}

fn tag_one(tok: &Token, is_sentence_start: bool, lex: &LanguageLexicon) -> Pos {
    let lemma = tok.lemma.as_str();

    if tok.text.chars().all(|c| c.is_ascii_punctuation()) && !tok.text.is_empty() {
        return Pos::Punctuation;
    }
    if lemma.chars().all(|c| c.is_ascii_digit()) && !lemma.is_empty() {
        return Pos::Numeral;
    }
    if lex.negation_markers.contains(lemma) {
        return Pos::Particle;
    }
    if lex.determiners.contains(lemma) {
        return Pos::Determiner;
    }
    if lex.pronouns.contains(lemma) {
        return Pos::Pronoun;
    }
    if lex.conjunctions.contains(lemma) {
        return Pos::Conjunction;
    }
    if lex.adpositions.contains(lemma) {
        return Pos::Adposition;
    }
    if lex.auxiliaries.contains(lemma) || lex.modal_words.contains(lemma) {
        return Pos::Auxiliary;
    }
    if lex.verb_forms.contains_key(lemma) {
        return Pos::Verb;
    }
    if lemma.ends_with("ly") && lemma.len() > 3 {
        return Pos::Adverb;
    }
    if lex.habitual_markers.contains(lemma) {
        return Pos::Adverb;
    }
    if ["ful", "ous", "ive", "able", "ible", "al"]
        .iter()
        .any(|suffix| lemma.len() > suffix.len() + 2 && lemma.ends_with(suffix))
    {
        return Pos::Adjective;
    }
    if tok
        .text
        .chars()
        .next()
        .map(|c| c.is_uppercase())
        .unwrap_or(false)
        && !is_sentence_start
    {
        return Pos::ProperNoun;
    }
    if ["oh", "ah", "wow", "hey", "please"].contains(&lemma) {
        return Pos::Interjection;
    }

    Pos::Noun
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    #[test]
    fn tags_canonical_vector() {
        let toks = tokenize("The boy will not go to school tomorrow.");
        let tags = tag_all(&toks, Language::En);
        assert_eq!(tags[0], Pos::Determiner); // The
        assert_eq!(tags[1], Pos::Noun); // boy
        assert_eq!(tags[2], Pos::Auxiliary); // will
        assert_eq!(tags[3], Pos::Particle); // not
        assert_eq!(tags[4], Pos::Verb); // go
        assert_eq!(tags[5], Pos::Adposition); // to
        assert_eq!(tags[8], Pos::Punctuation); // .
    }

    #[test]
    fn tags_proper_noun_mid_sentence() {
        let toks = tokenize("She gave Rock a book.");
        let tags = tag_all(&toks, Language::En);
        assert_eq!(tags[2], Pos::ProperNoun);
    }
}
