//! CSC rendering for all three formats (§4.7).
//!
//! Every format shares the same emission order: ROOT, then OPS (stored
//! order), then ROLES (canonical role order), then META if present.

use crate::format::Format;
use ptil::Csc;

pub fn serialize(csc: &Csc, format: Format) -> String {
    match format {
        Format::Verbose => verbose(csc),
        Format::Compact => compact(csc),
        Format::Ultra => ultra(csc),
    }
}

fn verbose(csc: &Csc) -> String {
    let mut parts = vec![format!("<ROOT={}>", csc.root.symbol())];
    if !csc.ops.is_empty() {
        let ops = csc
            .ops
            .iter()
            .map(|o| o.symbol())
            .collect::<Vec<_>>()
            .join("|");
        parts.push(format!("<OPS={ops}>"));
    }
    for (role, entity) in csc.roles_in_canonical_order() {
        parts.push(format!("<{}={}>", role.symbol(), entity.normalized));
    }
    if let Some(meta) = csc.meta {
        parts.push(format!("<META={}>", meta.symbol()));
    }
    parts.join(" ")
}

/// `R:X O:O1|O2 A:ENT G:ENT M:V`, single-letter role prefixes from
/// `Role::compact_prefix` (A, P, E, G, S, I, L, T — THEME takes `E` so TIME
/// keeps `T` without a collision, §9).
fn compact(csc: &Csc) -> String {
    let mut parts = vec![format!("R:{}", csc.root.symbol())];
    if !csc.ops.is_empty() {
        let ops = csc
            .ops
            .iter()
            .map(|o| o.symbol())
            .collect::<Vec<_>>()
            .join("|");
        parts.push(format!("O:{ops}"));
    }
    for (role, entity) in csc.roles_in_canonical_order() {
        parts.push(format!("{}:{}", role.compact_prefix(), entity.normalized));
    }
    if let Some(meta) = csc.meta {
        parts.push(format!("M:{}", meta.symbol()));
    }
    parts.join(" ")
}

/// Drops every key name (`ROOT=`, `OPS=`, role names, `META=`), keeping only
/// values and the single-letter role prefix, joined by `|`. This is the
/// frozen abbreviation rule (§9's open question): no separate lookup table
/// is needed because the rule is the symbol itself, not a mnemonic code,
/// so it can never drift out of sync with the ROOT/Operator/Meta catalogs.
fn ultra(csc: &Csc) -> String {
    let mut parts = vec![csc.root.symbol().to_string()];
    for op in &csc.ops {
        parts.push(op.symbol().to_string());
    }
    for (role, entity) in csc.roles_in_canonical_order() {
        parts.push(format!("{}{}", role.compact_prefix(), entity.normalized));
    }
    if let Some(meta) = csc.meta {
        parts.push(meta.symbol().to_string());
    }
    parts.join("|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ptil::{Entity, Meta, Operator, Role, Root};

    fn canonical_csc() -> Csc {
        let mut csc = Csc::new(Root::Motion);
        csc.ops = vec![Operator::Future, Operator::Negation];
        csc.roles.insert(Role::Agent, Entity::from_tokens(["boy"]));
        csc.roles.insert(Role::Goal, Entity::from_tokens(["school"]));
        csc.roles.insert(Role::Time, Entity::from_tokens(["tomorrow"]));
        csc.meta = Some(Meta::Assertive);
        csc
    }

    #[test]
    fn verbose_matches_canonical_test_vector() {
        assert_eq!(
            serialize(&canonical_csc(), Format::Verbose),
            "<ROOT=MOTION> <OPS=FUTURE|NEGATION> <AGENT=BOY> <GOAL=SCHOOL> <TIME=TOMORROW> <META=ASSERTIVE>"
        );
    }

    #[test]
    fn compact_uses_single_letter_role_prefixes() {
        assert_eq!(
            serialize(&canonical_csc(), Format::Compact),
            "R:MOTION O:FUTURE|NEGATION A:BOY G:SCHOOL T:TOMORROW M:ASSERTIVE"
        );
    }

    #[test]
    fn ultra_drops_all_key_names() {
        assert_eq!(
            serialize(&canonical_csc(), Format::Ultra),
            "MOTION|FUTURE|NEGATION|ABOY|GSCHOOL|TTOMORROW|ASSERTIVE"
        );
    }

    #[test]
    fn absent_ops_omits_ops_field() {
        let csc = Csc::new(Root::Existence);
        assert_eq!(serialize(&csc, Format::Verbose), "<ROOT=EXISTENCE>");
    }
}
