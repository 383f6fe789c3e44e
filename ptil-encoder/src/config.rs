//! `TrainingConfig` (§6): the `encode_for_training` layout knobs.

use serde::{Deserialize, Serialize};

/// Selects the training-data layout `encode_for_training` emits (§4.8, §6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormatType {
    /// `[CSC] <serialized> [TEXT] <original>`
    Standard,
    /// `<serialized>` only.
    CscOnly,
    /// CSC and original repeated per `csc_weight`/`original_weight`, joined by `separator`.
    Mixed,
}

impl Default for FormatType {
    fn default() -> Self {
        FormatType::Standard
    }
}

/// Configuration for `Encoder::encode_for_training` (§6).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingConfig {
    pub format_type: FormatType,
    /// Meaningful only for `FormatType::Mixed`: how many times the CSC
    /// rendering repeats in the mixed stream, rounded to the nearest
    /// non-negative integer (§9 — the source leaves "repeated with the
    /// configured weights" unspecified beyond non-negative; a rounded
    /// repeat count is the simplest total, deterministic reading).
    pub csc_weight: f64,
    /// Meaningful only for `FormatType::Mixed`: repeat count for the
    /// original text, same rounding rule as `csc_weight`.
    pub original_weight: f64,
    pub separator: String,
    /// When `false`, `Standard` and `Mixed` omit the `[CSC]`/`[TEXT]` markers.
    pub include_brackets: bool,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            format_type: FormatType::default(),
            csc_weight: 1.0,
            original_weight: 1.0,
            separator: " ".to_string(),
            include_brackets: true,
        }
    }
}

impl TrainingConfig {
    /// Repeat count for a non-negative weight, rounded to the nearest
    /// integer (never negative — `weight` is documented non-negative, but a
    /// caller-supplied negative value floors to zero rather than panicking).
    pub(crate) fn repeat_count(weight: f64) -> usize {
        if weight.is_sign_negative() || weight.is_nan() {
            0
        } else {
            weight.round() as usize
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_standard_with_unit_weights() {
        let cfg = TrainingConfig::default();
        assert_eq!(cfg.format_type, FormatType::Standard);
        assert_eq!(cfg.csc_weight, 1.0);
        assert_eq!(cfg.original_weight, 1.0);
        assert_eq!(cfg.separator, " ");
        assert!(cfg.include_brackets);
    }

    #[test]
    fn repeat_count_rounds_and_floors_negative() {
        assert_eq!(TrainingConfig::repeat_count(2.0), 2);
        assert_eq!(TrainingConfig::repeat_count(0.6), 1);
        assert_eq!(TrainingConfig::repeat_count(-3.0), 0);
    }
}
