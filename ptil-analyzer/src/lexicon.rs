//! Closed, per-language marker and lexicon word lists (§4.1, §6).
//!
//! These are the "tables as immutable data" §9 requires: initialized once
//! behind `once_cell::sync::Lazy`, read-only for the remainder of the
//! process. Each list is deliberately small and closed — this is a shallow
//! rule-based tagger, not a statistical one, per §4.1's "no deep neural
//! inference" constraint.

use once_cell::sync::Lazy;
use ptil::Language;
use std::collections::{HashMap, HashSet};

pub struct LanguageLexicon {
    pub determiners: HashSet<&'static str>,
    pub pronouns: HashSet<&'static str>,
    pub conjunctions: HashSet<&'static str>,
    pub adpositions: HashSet<&'static str>,
    pub auxiliaries: HashSet<&'static str>,
    pub modal_words: HashSet<&'static str>,
    pub negation_markers: HashSet<&'static str>,
    /// Inflected verb form -> (lemma, is_past_participle)
    pub verb_forms: HashMap<&'static str, (&'static str, bool)>,
    /// Inflected forms that are simple past (finite, no auxiliary needed),
    /// e.g. "went", "gave" — distinct from past participles like "gone".
    pub simple_past_forms: HashSet<&'static str>,
    /// Present-tense auxiliaries/copulas that mark PRESENT when no other tense cue fires.
    pub present_markers: HashSet<&'static str>,
    pub past_markers: HashSet<&'static str>,
    pub future_markers: HashSet<&'static str>,
    pub continuous_markers: HashSet<&'static str>,
    pub completed_markers: HashSet<&'static str>,
    pub habitual_markers: HashSet<&'static str>,
    /// Nouns/adverbs that mark a following or governing prepositional
    /// phrase as temporal rather than spatial (tie-break for "in/on/at").
    pub temporal_nouns: HashSet<&'static str>,
    pub epistemic_hedges: HashSet<&'static str>,
    pub evidential_markers: HashSet<&'static str>,
}

fn set(words: &[&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}

fn english() -> LanguageLexicon {
    let mut verb_forms = HashMap::new();
    let verbs: &[(&str, &[(&str, bool)])] = &[
        ("go", &[("goes", false), ("going", false), ("went", false), ("gone", true)]),
        ("run", &[("runs", false), ("running", false), ("ran", false)]),
        ("give", &[("gives", false), ("giving", false), ("gave", false), ("given", true)]),
        ("sleep", &[("sleeps", false), ("sleeping", false), ("slept", false)]),
        ("come", &[("comes", false), ("coming", false), ("came", false)]),
        ("see", &[("sees", false), ("seeing", false), ("saw", false), ("seen", true)]),
        ("say", &[("says", false), ("saying", false), ("said", true)]),
        ("do", &[("does", false), ("doing", false), ("did", false), ("done", true)]),
        ("make", &[("makes", false), ("making", false), ("made", true)]),
        ("take", &[("takes", false), ("taking", false), ("took", false), ("taken", true)]),
        ("want", &[("wants", false), ("wanting", false), ("wanted", true)]),
        ("need", &[("needs", false), ("needing", false), ("needed", true)]),
        ("read", &[("reads", false), ("reading", false)]),
        ("deliver", &[("delivers", false), ("delivering", false), ("delivered", true)]),
        ("write", &[("writes", false), ("writing", false), ("wrote", false), ("written", true)]),
        ("buy", &[("buys", false), ("buying", false), ("bought", true)]),
        ("sell", &[("sells", false), ("selling", false), ("sold", true)]),
        ("send", &[("sends", false), ("sending", false), ("sent", true)]),
        ("build", &[("builds", false), ("building", false), ("built", true)]),
        ("break", &[("breaks", false), ("breaking", false), ("broke", false), ("broken", true)]),
        ("think", &[("thinks", false), ("thinking", false), ("thought", true)]),
        ("know", &[("knows", false), ("knowing", false), ("knew", false), ("known", true)]),
        ("believe", &[("believes", false), ("believing", false), ("believed", true)]),
        ("notify", &[("notifies", false), ("notifying", false), ("notified", true)]),
        ("pay", &[("pays", false), ("paying", false), ("paid", true)]),
        ("ask", &[("asks", false), ("asking", false), ("asked", true)]),
        ("hear", &[("hears", false), ("hearing", false), ("heard", true)]),
        ("watch", &[("watches", false), ("watching", false), ("watched", true)]),
        ("leave", &[("leaves", false), ("leaving", false), ("left", true)]),
        ("arrive", &[("arrives", false), ("arriving", false), ("arrived", true)]),
        ("move", &[("moves", false), ("moving", false), ("moved", true)]),
        ("fly", &[("flies", false), ("flying", false), ("flew", false), ("flown", true)]),
        ("walk", &[("walks", false), ("walking", false), ("walked", true)]),
        ("eat", &[("eats", false), ("eating", false), ("ate", false), ("eaten", true)]),
        ("play", &[("plays", false), ("playing", false), ("played", true)]),
        ("live", &[("lives", false), ("living", false), ("lived", true)]),
        ("die", &[("dies", false), ("dying", false), ("died", true)]),
        ("help", &[("helps", false), ("helping", false), ("helped", true)]),
    ];
    for (lemma, forms) in verbs {
        verb_forms.insert(*lemma, (*lemma, false));
        for (inflected, is_pp) in *forms {
            verb_forms.insert(*inflected, (*lemma, *is_pp));
        }
    }

    let simple_past_forms = set(&[
        "went", "ran", "gave", "slept", "came", "saw", "said", "did", "made", "took",
        "wanted", "needed", "delivered", "wrote", "bought", "sold", "sent", "built",
        "broke", "thought", "knew", "believed", "notified", "paid", "asked", "heard",
        "watched", "left", "arrived", "moved", "flew", "walked", "ate", "played",
        "lived", "died", "helped",
    ]);

    LanguageLexicon {
        determiners: set(&["the", "a", "an", "this", "that", "these", "those", "his", "her", "their", "its", "my", "your", "our"]),
        pronouns: set(&[
            "i", "you", "he", "she", "it", "we", "they", "him", "her", "them", "us", "me",
            "who", "whom", "which", "that",
        ]),
        conjunctions: set(&["and", "or", "but", "nor", "so", "yet"]),
        adpositions: set(&[
            "to", "into", "onto", "from", "out", "with", "using", "in", "on", "at", "near",
            "within", "before", "after", "during", "by", "for", "of", "about", "toward",
            "towards", "away",
        ]),
        auxiliaries: set(&[
            "will", "shall", "would", "should", "can", "could", "may", "might", "must",
            "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do",
            "does", "did", "need",
        ]),
        modal_words: set(&["may", "might", "can", "could", "must", "should", "shall", "need"]),
        negation_markers: set(&["not", "n't", "never", "no", "none", "nothing", "nobody", "nowhere", "neither", "nor"]),
        verb_forms,
        simple_past_forms,
        present_markers: set(&["is", "are", "am", "does", "do"]),
        past_markers: set(&["was", "were", "did", "had"]),
        future_markers: set(&["will", "shall"]),
        continuous_markers: set(&["is", "are", "was", "were", "am", "being"]),
        completed_markers: set(&["has", "have", "had"]),
        habitual_markers: set(&["always", "usually", "often", "every", "typically", "generally"]),
        temporal_nouns: set(&[
            "day", "days", "week", "weeks", "month", "months", "year", "years", "hour",
            "hours", "minute", "minutes", "second", "seconds", "tomorrow", "today",
            "yesterday", "morning", "evening", "night", "noon", "midnight",
        ]),
        epistemic_hedges: set(&["maybe", "perhaps", "possibly", "might", "probably"]),
        evidential_markers: set(&["apparently", "reportedly", "seemingly", "seems", "allegedly"]),
    }
}

fn spanish() -> LanguageLexicon {
    let mut verb_forms = HashMap::new();
    let verbs: &[(&str, &[(&str, bool)])] = &[
        ("correr", &[("corre", false), ("corren", false), ("corrio", false), ("corriendo", false)]),
        ("ir", &[("va", false), ("van", false), ("fue", false), ("yendo", false)]),
        ("dar", &[("da", false), ("dan", false), ("dio", false), ("dado", true)]),
        ("dormir", &[("duerme", false), ("duermen", false), ("durmio", false)]),
    ];
    for (lemma, forms) in verbs {
        verb_forms.insert(*lemma, (*lemma, false));
        for (inflected, is_pp) in *forms {
            verb_forms.insert(*inflected, (*lemma, *is_pp));
        }
    }
    LanguageLexicon {
        determiners: set(&["el", "la", "los", "las", "un", "una", "unos", "unas", "su", "sus"]),
        pronouns: set(&["yo", "tu", "el", "ella", "nosotros", "ellos", "ellas", "le", "lo", "la"]),
        conjunctions: set(&["y", "o", "pero", "ni"]),
        adpositions: set(&["a", "hacia", "desde", "con", "en", "por", "para", "sobre", "durante", "antes", "despues"]),
        auxiliaries: set(&["va", "iba", "ha", "han", "habia", "puede", "debe", "podria"]),
        modal_words: set(&["puede", "debe", "podria", "necesita"]),
        negation_markers: set(&["no", "nunca", "nada", "nadie", "ni"]),
        verb_forms,
        simple_past_forms: set(&["corrio", "fue", "dio", "durmio"]),
        present_markers: set(&["es", "esta", "va"]),
        past_markers: set(&["fue", "era", "habia"]),
        future_markers: set(&["va a", "sera"]),
        continuous_markers: set(&["esta", "estan"]),
        completed_markers: set(&["ha", "han"]),
        habitual_markers: set(&["siempre", "normalmente", "cada"]),
        temporal_nouns: set(&["dia", "dias", "semana", "manana", "hoy", "ayer", "noche"]),
        epistemic_hedges: set(&["quizas", "tal", "posiblemente"]),
        evidential_markers: set(&["aparentemente", "parece"]),
    }
}

fn french() -> LanguageLexicon {
    LanguageLexicon {
        determiners: set(&["le", "la", "les", "un", "une", "des", "son", "sa", "ses"]),
        pronouns: set(&["je", "tu", "il", "elle", "nous", "vous", "ils", "elles"]),
        conjunctions: set(&["et", "ou", "mais", "ni"]),
        adpositions: set(&["a", "vers", "de", "avec", "dans", "sur", "pendant", "avant", "apres", "par", "pour"]),
        auxiliaries: set(&["va", "est", "sont", "a", "ont", "peut", "doit", "pourrait"]),
        modal_words: set(&["peut", "doit", "pourrait", "faut"]),
        negation_markers: set(&["ne", "pas", "jamais", "rien", "personne", "aucun"]),
        verb_forms: HashMap::new(),
        simple_past_forms: HashSet::new(),
        present_markers: set(&["est", "sont", "va"]),
        past_markers: set(&["etait", "a ete", "avait"]),
        future_markers: set(&["va", "sera"]),
        continuous_markers: set(&["en train de"]),
        completed_markers: set(&["a", "ont"]),
        habitual_markers: set(&["toujours", "souvent", "chaque"]),
        temporal_nouns: set(&["jour", "jours", "semaine", "demain", "aujourd'hui", "hier", "soir"]),
        epistemic_hedges: set(&["peut-etre", "probablement"]),
        evidential_markers: set(&["apparemment", "semble"]),
    }
}

fn german() -> LanguageLexicon {
    LanguageLexicon {
        determiners: set(&["der", "die", "das", "ein", "eine", "sein", "ihr"]),
        pronouns: set(&["ich", "du", "er", "sie", "es", "wir", "ihr"]),
        conjunctions: set(&["und", "oder", "aber", "noch"]),
        adpositions: set(&["zu", "nach", "von", "mit", "in", "an", "bei", "vor", "wahrend", "durch", "fur"]),
        auxiliaries: set(&["wird", "ist", "sind", "war", "waren", "hat", "haben", "kann", "muss", "soll"]),
        modal_words: set(&["kann", "muss", "soll", "darf", "mag"]),
        negation_markers: set(&["nicht", "nie", "kein", "keine", "niemand"]),
        verb_forms: HashMap::new(),
        simple_past_forms: HashSet::new(),
        present_markers: set(&["ist", "sind"]),
        past_markers: set(&["war", "waren", "hatte"]),
        future_markers: set(&["wird"]),
        continuous_markers: set(&[]),
        completed_markers: set(&["hat", "haben"]),
        habitual_markers: set(&["immer", "oft", "jeden"]),
        temporal_nouns: set(&["tag", "tage", "woche", "morgen", "heute", "gestern", "abend"]),
        epistemic_hedges: set(&["vielleicht", "moeglicherweise"]),
        evidential_markers: set(&["anscheinend", "scheint"]),
    }
}

fn italian() -> LanguageLexicon {
    LanguageLexicon {
        determiners: set(&["il", "la", "lo", "gli", "le", "un", "una", "suo", "sua"]),
        pronouns: set(&["io", "tu", "lui", "lei", "noi", "voi", "loro"]),
        conjunctions: set(&["e", "o", "ma", "ne"]),
        adpositions: set(&["a", "verso", "da", "con", "in", "su", "durante", "prima", "dopo", "per"]),
        auxiliaries: set(&["va", "e", "sono", "era", "ha", "hanno", "puo", "deve", "potrebbe"]),
        modal_words: set(&["puo", "deve", "potrebbe"]),
        negation_markers: set(&["non", "mai", "niente", "nessuno"]),
        verb_forms: HashMap::new(),
        simple_past_forms: HashSet::new(),
        present_markers: set(&["e", "sono", "va"]),
        past_markers: set(&["era", "aveva"]),
        future_markers: set(&["sara", "andra"]),
        continuous_markers: set(&["sta"]),
        completed_markers: set(&["ha", "hanno"]),
        habitual_markers: set(&["sempre", "spesso", "ogni"]),
        temporal_nouns: set(&["giorno", "giorni", "settimana", "domani", "oggi", "ieri", "sera"]),
        epistemic_hedges: set(&["forse", "probabilmente"]),
        evidential_markers: set(&["apparentemente", "sembra"]),
    }
}

static LEXICONS: Lazy<HashMap<Language, LanguageLexicon>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(Language::En, english());
    m.insert(Language::Es, spanish());
    m.insert(Language::Fr, french());
    m.insert(Language::De, german());
    m.insert(Language::It, italian());
    m
});

pub fn lexicon(language: Language) -> &'static LanguageLexicon {
    LEXICONS
        .get(&language)
        .expect("every Language variant has a registered lexicon")
}

/// Reduces an inflected surface form (`"gave"`, `"running"`) to its
/// dictionary base form (`"give"`, `"run"`) via `verb_forms`. Forms absent
/// from the table (most non-verb lemmas, and any verb outside the closed
/// inflection tables) pass through unchanged — this is the "shallow
/// normalization, not true lemmatization" `Token::lemma` already documents;
/// `base_lemma` is what lets C2's predicate dictionary key on the
/// uninflected form regardless of tense/aspect marking on the surface verb.
pub fn base_lemma<'a>(surface_lemma: &'a str, lex: &LanguageLexicon) -> &'a str {
    match lex.verb_forms.get(surface_lemma) {
        Some((base, _)) => base,
        None => surface_lemma,
    }
}

#[cfg(test)]
mod base_lemma_tests {
    use super::*;
    use ptil::Language;

    #[test]
    fn reduces_inflected_english_verb_to_base() {
        let lex = lexicon(Language::En);
        assert_eq!(base_lemma("gave", lex), "give");
        assert_eq!(base_lemma("running", lex), "run");
        assert_eq!(base_lemma("went", lex), "go");
    }

    #[test]
    fn passes_through_unknown_form() {
        let lex = lexicon(Language::En);
        assert_eq!(base_lemma("school", lex), "school");
    }
}
