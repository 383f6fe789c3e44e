//! Role: the closed semantic-role set and the canonical emission order (§3, §4.7).

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    Agent,
    Patient,
    Theme,
    Goal,
    Source,
    Instrument,
    Location,
    Time,
}

impl Role {
    /// AGENT, PATIENT, THEME, GOAL, SOURCE, INSTRUMENT, LOCATION, TIME (§3, §4.7).
    pub const CANONICAL_ORDER: &'static [Role] = &[
        Role::Agent,
        Role::Patient,
        Role::Theme,
        Role::Goal,
        Role::Source,
        Role::Instrument,
        Role::Location,
        Role::Time,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Role::Agent => "AGENT",
            Role::Patient => "PATIENT",
            Role::Theme => "THEME",
            Role::Goal => "GOAL",
            Role::Source => "SOURCE",
            Role::Instrument => "INSTRUMENT",
            Role::Location => "LOCATION",
            Role::Time => "TIME",
        }
    }

    /// Rank in the canonical order; used to sort a role map for serialization.
    pub fn rank(self) -> usize {
        Self::CANONICAL_ORDER
            .iter()
            .position(|r| *r == self)
            .expect("CANONICAL_ORDER enumerates every Role variant")
    }

    /// Single-letter prefix for the compact/ultra formats (§4.7, DESIGN.md).
    /// THEME gets `E` (from "thEme") specifically so TIME keeps the
    /// mnemonic `T` without a collision, per §9's Open Question resolution.
    pub fn compact_prefix(self) -> char {
        match self {
            Role::Agent => 'A',
            Role::Patient => 'P',
            Role::Theme => 'E',
            Role::Goal => 'G',
            Role::Source => 'S',
            Role::Instrument => 'I',
            Role::Location => 'L',
            Role::Time => 'T',
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn canonical_order_has_no_duplicates() {
        let set: HashSet<Role> = Role::CANONICAL_ORDER.iter().copied().collect();
        assert_eq!(set.len(), Role::CANONICAL_ORDER.len());
    }

    #[test]
    fn time_and_theme_prefixes_do_not_collide() {
        assert_ne!(Role::Time.compact_prefix(), Role::Theme.compact_prefix());
        assert_eq!(Role::Time.compact_prefix(), 'T');
    }

    #[test]
    fn rank_matches_canonical_order_position() {
        for (idx, role) in Role::CANONICAL_ORDER.iter().enumerate() {
            assert_eq!(role.rank(), idx);
        }
    }
}
