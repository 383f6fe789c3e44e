//! Operator: the closed, category-partitioned symbol set for OPS (§3).
//!
//! OPS is an ordered sequence, not a set — ordering is significant (non-
//! commutative under reinterpretation, §3/§4.3). `Operator` itself stays a
//! single flat enum so a `Vec<Operator>` is the natural representation of
//! an ordered OPS sequence; `OperatorCategory` recovers the category for
//! the priority tie-break C3 needs (§4.3: polarity, modality, aspect,
//! temporal, within one token index).

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Operator {
    // temporal
    Past,
    Present,
    Future,
    // aspect
    Continuous,
    Completed,
    Habitual,
    // polarity
    Negation,
    Affirmation,
    // modality
    Possible,
    Necessary,
    Obligatory,
    Permitted,
    // causation
    Causative,
    SelfInitiated,
    Forced,
    // direction
    DirectionIn,
    DirectionOut,
    Toward,
    Away,
}

/// The ordered CSC operator sequence. A plain type alias keeps the C3
/// contract ("ordered sequence of Operator, possibly empty") visible at
/// every call site without introducing a distinct newtype.
pub type Ops = Vec<Operator>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorCategory {
    Polarity,
    Modality,
    Aspect,
    Temporal,
    Causation,
    Direction,
}

impl Operator {
    pub const ALL: &'static [Operator] = &[
        Operator::Past,
        Operator::Present,
        Operator::Future,
        Operator::Continuous,
        Operator::Completed,
        Operator::Habitual,
        Operator::Negation,
        Operator::Affirmation,
        Operator::Possible,
        Operator::Necessary,
        Operator::Obligatory,
        Operator::Permitted,
        Operator::Causative,
        Operator::SelfInitiated,
        Operator::Forced,
        Operator::DirectionIn,
        Operator::DirectionOut,
        Operator::Toward,
        Operator::Away,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Past => "PAST",
            Operator::Present => "PRESENT",
            Operator::Future => "FUTURE",
            Operator::Continuous => "CONTINUOUS",
            Operator::Completed => "COMPLETED",
            Operator::Habitual => "HABITUAL",
            Operator::Negation => "NEGATION",
            Operator::Affirmation => "AFFIRMATION",
            Operator::Possible => "POSSIBLE",
            Operator::Necessary => "NECESSARY",
            Operator::Obligatory => "OBLIGATORY",
            Operator::Permitted => "PERMITTED",
            Operator::Causative => "CAUSATIVE",
            Operator::SelfInitiated => "SELF_INITIATED",
            Operator::Forced => "FORCED",
            Operator::DirectionIn => "DIRECTION_IN",
            Operator::DirectionOut => "DIRECTION_OUT",
            Operator::Toward => "TOWARD",
            Operator::Away => "AWAY",
        }
    }

    pub fn category(self) -> OperatorCategory {
        match self {
            Operator::Past | Operator::Present | Operator::Future => OperatorCategory::Temporal,
            Operator::Continuous | Operator::Completed | Operator::Habitual => {
                OperatorCategory::Aspect
            }
            Operator::Negation | Operator::Affirmation => OperatorCategory::Polarity,
            Operator::Possible | Operator::Necessary | Operator::Obligatory | Operator::Permitted => {
                OperatorCategory::Modality
            }
            Operator::Causative | Operator::SelfInitiated | Operator::Forced => {
                OperatorCategory::Causation
            }
            Operator::DirectionIn | Operator::DirectionOut | Operator::Toward | Operator::Away => {
                OperatorCategory::Direction
            }
        }
    }
}

impl OperatorCategory {
    /// Fixed in-index tie-break priority from §4.3: polarity, modality,
    /// aspect, temporal. Causation/direction are not named by the source's
    /// tie-break rule; they sort after temporal, in declaration order,
    /// since no input can produce more than one cue per index in practice
    /// and the source leaves them unconstrained.
    fn priority(self) -> u8 {
        match self {
            OperatorCategory::Polarity => 0,
            OperatorCategory::Modality => 1,
            OperatorCategory::Aspect => 2,
            OperatorCategory::Temporal => 3,
            OperatorCategory::Causation => 4,
            OperatorCategory::Direction => 5,
        }
    }
}

impl PartialOrd for OperatorCategory {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OperatorCategory {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_priority_matches_spec_order() {
        assert!(OperatorCategory::Polarity < OperatorCategory::Modality);
        assert!(OperatorCategory::Modality < OperatorCategory::Aspect);
        assert!(OperatorCategory::Aspect < OperatorCategory::Temporal);
    }

    #[test]
    fn all_symbols_are_uppercase_ascii() {
        for op in Operator::ALL {
            assert!(op.symbol().chars().all(|c| c.is_ascii_uppercase() || c == '_'));
        }
    }
}
