//! The public Encoder Facade (§4.8, §6): the only surface PromptShield (or
//! any other caller) touches. Orchestrates C1 → (C2, C3, C4, C5) → C6 → C7
//! end to end and is the sole owner of sentence segmentation (§1/§2).

use crate::assembler;
use crate::config::{FormatType, TrainingConfig};
use crate::diagnostics::{Diagnostic, DegradationReason};
use crate::segment::split_sentences;
use ptil::{Analysis, Csc, EncodeError, EncodeResult, Language};
use ptil_analyzer::Analyzer;
use ptil_serialize::Format;

/// Stateless after construction (§5): every owned table the pipeline
/// consults is a process-wide `Lazy` static, so cloning or sharing an
/// `Encoder` across threads needs no locking.
#[derive(Debug, Clone, Copy)]
pub struct Encoder {
    analyzer: Analyzer,
}

impl Encoder {
    pub fn new(language: Language) -> Self {
        Self {
            analyzer: Analyzer::new(language),
        }
    }

    /// Construct from a BCP-47-ish language code (§6). `ParserUnavailable`
    /// is the only error this can return, and only at construction (§7).
    pub fn try_new(code: &str) -> EncodeResult<Self> {
        Ok(Self {
            analyzer: Analyzer::try_new(code)?,
        })
    }

    pub fn language(&self) -> Language {
        self.analyzer.language()
    }

    /// `encode(text) → list[CSC]` (§4.8). Never raises — internal faults
    /// recover via the documented fallbacks and are dropped silently; use
    /// `encode_with_diagnostics` to observe them.
    pub fn encode(&self, text: &str) -> Vec<Csc> {
        self.encode_with_diagnostics(text).0
    }

    /// Same as `encode`, plus every recovery that fired along the way
    /// (§7's diagnostic channel — informational only, never alters output).
    pub fn encode_with_diagnostics(&self, text: &str) -> (Vec<Csc>, Vec<Diagnostic>) {
        let mut cscs = Vec::new();
        let mut diagnostics = Vec::new();

        for sentence in split_sentences(text) {
            let analysis = self.analyzer.analyze(&sentence);
            self.encode_sentence(&analysis, &mut cscs, &mut diagnostics);
        }

        (cscs, diagnostics)
    }

    fn encode_sentence(
        &self,
        analysis: &Analysis,
        cscs: &mut Vec<Csc>,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        if analysis.is_empty_input() {
            return;
        }
        if analysis.deps.is_empty() && analysis.tokens.len() > 1 {
            diagnostics.push(Diagnostic {
                predicate_index: None,
                reason: DegradationReason::EmptyDependencyParse,
            });
        }

        let meta = ptil_meta::detect_meta(analysis, self.language());

        let lex = ptil_analyzer::language_lexicon(self.language());

        for &pred in &analysis.predicate_indices {
            let surface_lemma = analysis.lemma(pred).unwrap_or_default();
            let lemma = ptil_analyzer::base_lemma(surface_lemma, lex);
            let pos = analysis.pos[pred];
            let dependent_relations: Vec<_> = analysis
                .dependents_of(pred)
                .into_iter()
                .map(|a| a.relation)
                .collect();

            if !ptil_semantics::is_known_predicate(lemma) {
                diagnostics.push(Diagnostic {
                    predicate_index: Some(pred),
                    reason: DegradationReason::UnknownPredicate,
                });
            }

            let root = ptil_semantics::resolve_root(lemma, pos, &dependent_relations);
            let ops = ptil_ops::extract_ops(analysis, pred);
            let roles = ptil_semantics::bind_roles(analysis, pred, root, self.language());

            let (csc, mut assembly_diags) =
                assembler::assemble(root, ops, roles, Some(meta), pred);
            diagnostics.append(&mut assembly_diags);
            cscs.push(csc);
        }
    }

    /// `encode_and_serialize(text, format) → string` (§4.8, §6). Multiple
    /// predicates (or multiple sentences) serialize to multiple CSC strings
    /// joined by a single space, in textual order; empty input serializes
    /// to the empty string (scenario 6, §8).
    pub fn encode_and_serialize(&self, text: &str, format: &str) -> EncodeResult<String> {
        let format = Format::from_name(format).ok_or_else(|| EncodeError::InvalidInput {
            reason: format!("unknown serialization format {format:?}"),
        })?;
        Ok(self.serialize_all(text, format))
    }

    fn serialize_all(&self, text: &str, format: Format) -> String {
        self.encode(text)
            .iter()
            .map(|csc| ptil_serialize::serialize(csc, format))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// `encode_for_training(text, config) → string` (§4.8, §6): one of
    /// three training-data layouts per `config.format_type`.
    pub fn encode_for_training(&self, text: &str, config: &TrainingConfig) -> EncodeResult<String> {
        let serialized = self.serialize_all(text, Format::Verbose);

        Ok(match config.format_type {
            FormatType::CscOnly => serialized,
            FormatType::Standard => {
                if config.include_brackets {
                    format!("[CSC] {serialized} [TEXT] {text}")
                } else {
                    format!("{serialized} {text}")
                }
            }
            FormatType::Mixed => {
                let csc_repeats = TrainingConfig::repeat_count(config.csc_weight);
                let original_repeats = TrainingConfig::repeat_count(config.original_weight);
                let mut parts = Vec::with_capacity(csc_repeats + original_repeats);
                for _ in 0..csc_repeats {
                    parts.push(if config.include_brackets {
                        format!("[CSC] {serialized}")
                    } else {
                        serialized.clone()
                    });
                }
                for _ in 0..original_repeats {
                    parts.push(if config.include_brackets {
                        format!("[TEXT] {text}")
                    } else {
                        text.to_string()
                    });
                }
                parts.join(config.separator.as_str())
            }
        })
    }
}
