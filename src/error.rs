//! Error taxonomy (§7): `InvalidInput` and `ParserUnavailable` are the only
//! caller-visible variants. `InternalDegradation` never surfaces — it is
//! carried only in the diagnostics channel (see `ptil-encoder::Diagnostic`).

use thiserror::Error;

/// A supported input language, selected at `Encoder::new` time (§6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    En,
    Es,
    Fr,
    De,
    It,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::De => "de",
            Language::It => "it",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "es" => Some(Language::Es),
            "fr" => Some(Language::Fr),
            "de" => Some(Language::De),
            "it" => Some(Language::It),
            _ => None,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Unknown `format`/`format_type` name, or a caller-required non-empty
    /// text argument that was empty (the facade's own `encode("")` path is
    /// NOT this error — see scenario 6, §8).
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// The shallow parser for `language` could not be loaded at
    /// construction time; never raised from `encode*` (§7).
    #[error("no shallow parser registered for language {language:?}")]
    ParserUnavailable { language: Language },
}

pub type EncodeResult<T> = Result<T, EncodeError>;
