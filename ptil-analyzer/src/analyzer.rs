//! The Linguistic Analyzer (C1) facade: ties tokenizer, POS tagger and
//! shallow dependency parser into the single `analyze` entry point the
//! encoder calls per §4.1.

use crate::{depparse, pos, tokenizer};
use ptil::{Analysis, EncodeError, EncodeResult, Language};

/// One analyzer instance per language. Construction never fails — every
/// `Language` variant has a registered lexicon (`lexicon::lexicon` panics
/// only on a missing table, which cannot happen for a closed enum).
#[derive(Debug, Clone, Copy)]
pub struct Analyzer {
    language: Language,
}

impl Analyzer {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Construct from a BCP-47-ish language code, rejecting unsupported
    /// languages as `EncodeError::ParserUnavailable` (§7).
    pub fn try_new(code: &str) -> EncodeResult<Self> {
        let language = Language::from_code(code).ok_or_else(|| EncodeError::ParserUnavailable {
            language: Language::En,
        })?;
        Ok(Self::new(language))
    }

    pub fn language(self) -> Language {
        self.language
    }

    /// Shallow-parses `text` into an `Analysis`. Empty input yields an
    /// empty `Analysis`, not an error (§4.1); this function never fails —
    /// non-parsable text degrades to best-effort tokenization with no
    /// dependency structure rather than propagating an error.
    pub fn analyze(self, text: &str) -> Analysis {
        let tokens = tokenizer::tokenize(text);
        if tokens.is_empty() {
            return Analysis::default();
        }
        let pos_tags = pos::tag_all(&tokens, self.language);
        let mut analysis = Analysis {
            tokens,
            pos: pos_tags,
            ..Analysis::default()
        };
        depparse::parse(&mut analysis, self.language);
        analysis
    }
}
