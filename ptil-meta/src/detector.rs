//! C5 META Detector: a priority-ordered rule cascade over the whole
//! sentence `Analysis` (§4.5). At most one `Meta` tag is ever produced;
//! `Emotive`/`Ironic` are reserved and never emitted by this detector.

use ptil::{Analysis, Language, Meta};

/// Runs the detector's fixed priority cascade: terminal question mark,
/// then leading imperative with no overt subject, then epistemic hedge,
/// then evidential marker, defaulting to `Assertive`.
pub fn detect_meta(analysis: &Analysis, lang: Language) -> Meta {
    if analysis.terminal_punctuation == Some('?') {
        return Meta::Question;
    }

    if is_leading_imperative(analysis) {
        return Meta::Command;
    }

    let lex = ptil_analyzer::language_lexicon(lang);
    let has_hedge = analysis
        .tokens
        .iter()
        .any(|t| lex.epistemic_hedges.contains(t.lemma.as_str()));
    if has_hedge {
        return Meta::Uncertain;
    }

    let has_evidential = analysis
        .tokens
        .iter()
        .any(|t| lex.evidential_markers.contains(t.lemma.as_str()));
    if has_evidential {
        return Meta::Evidential;
    }

    Meta::Assertive
}

fn is_leading_imperative(analysis: &Analysis) -> bool {
    let first_predicate = match analysis.predicate_indices.first() {
        Some(&idx) => idx,
        None => return false,
    };
    first_predicate == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use ptil_analyzer::Analyzer;

    #[test]
    fn terminal_question_mark_wins() {
        let a = Analyzer::new(Language::En).analyze("Did the cat sleep?");
        assert_eq!(detect_meta(&a, Language::En), Meta::Question);
    }

    #[test]
    fn leading_bare_verb_is_command() {
        let a = Analyzer::new(Language::En).analyze("Run!");
        assert_eq!(detect_meta(&a, Language::En), Meta::Command);
    }

    #[test]
    fn declarative_sentence_is_assertive() {
        let a = Analyzer::new(Language::En).analyze("The boy will not go to school tomorrow.");
        assert_eq!(detect_meta(&a, Language::En), Meta::Assertive);
    }

    #[test]
    fn epistemic_hedge_marks_uncertain() {
        let a = Analyzer::new(Language::En).analyze("She will maybe go.");
        assert_eq!(detect_meta(&a, Language::En), Meta::Uncertain);
    }

    #[test]
    fn evidential_marker_marks_evidential() {
        let a = Analyzer::new(Language::En).analyze("She apparently left.");
        assert_eq!(detect_meta(&a, Language::En), Meta::Evidential);
    }
}
