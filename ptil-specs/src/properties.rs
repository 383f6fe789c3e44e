//! Universal testable properties P1-P10 (spec.md §8), each exercised with
//! at least 100 randomized inputs via `proptest` where randomization is
//! meaningful; P4 and P9 hold their vocabulary fixed to the curated tables
//! in [`crate::fixtures`] (the source calls for a "designated synonym
//! equivalence table" and a "curated parallel-sentence table", not free
//! generation) and randomize only the surrounding sentence frame.
//!
//! `proptest` is adopted from the broader example pack's
//! property-test usage (see DESIGN.md) since the teacher repo itself does
//! not exercise randomized testing.

#[cfg(test)]
mod tests {
    use crate::fixtures::{PARALLEL_SENTENCES, SYNONYM_PAIRS};
    use proptest::prelude::*;
    use ptil::{Language, Operator, Role, Root};
    use ptil_encoder::{assembler, Encoder};
    use ptil_serialize::{check_compatibility, Format};

    const SUBJECTS: &[&str] = &["boy", "girl", "cat", "dog", "teacher", "man"];
    const OBJECTS: &[&str] = &["school", "book", "letter", "house", "cake", "car"];
    const VERBS: &[&str] = &[
        "go", "run", "give", "say", "see", "think", "want", "eat", "help", "write", "break",
        "pay", "ask", "sleep", "die", "play", "buy", "sell", "leave", "read", "notify", "watch",
        "build", "know", "believe", "need",
    ];

    fn subject_strategy() -> impl Strategy<Value = &'static str> {
        proptest::sample::select(SUBJECTS)
    }
    fn object_strategy() -> impl Strategy<Value = &'static str> {
        proptest::sample::select(OBJECTS)
    }
    fn verb_strategy() -> impl Strategy<Value = &'static str> {
        proptest::sample::select(VERBS)
    }

    fn build_sentence(subject: &str, verb: &str, object: &str, future: bool, negate: bool) -> String {
        let modal = if future { "will " } else { "" };
        let neg = if negate { "not " } else { "" };
        format!("The {subject} {modal}{neg}{verb} to the {object}.")
    }

    proptest! {
        // P1 (mandatoriness) + P5 (role uniqueness): every produced CSC has
        // a non-null ROOT and its roles map contains only admissible Roles
        // per ROOT, with no Role key repeated.
        #[test]
        fn p1_p5_mandatory_root_and_admissible_unique_roles(
            subject in subject_strategy(),
            verb in verb_strategy(),
            object in object_strategy(),
            future in any::<bool>(),
            negate in any::<bool>(),
        ) {
            let enc = Encoder::new(Language::En);
            let text = build_sentence(subject, verb, object, future, negate);
            for csc in enc.encode(&text) {
                // ROOT is a non-null, finite Root value by construction
                // (the type itself has no null variant) — the property to
                // check is that every bound role is admissible under it.
                let mut seen = std::collections::HashSet::new();
                for role in csc.roles.keys() {
                    prop_assert!(ptil::is_admissible(csc.root, *role));
                    prop_assert!(seen.insert(*role), "role {:?} appeared twice", role);
                }
            }
        }

        // P2 (finiteness): every ROOT/Operator/Role/Meta emitted is a
        // member of its declared closed set. Guaranteed by the type system
        // (each is an exhaustive Rust enum with no open variant), but this
        // walks every produced CSC's fields through `symbol()` to confirm
        // the closed-set rendering stays total as the pipeline evolves.
        #[test]
        fn p2_emitted_values_are_members_of_their_closed_set(
            subject in subject_strategy(),
            verb in verb_strategy(),
            object in object_strategy(),
            future in any::<bool>(),
        ) {
            let enc = Encoder::new(Language::En);
            let text = build_sentence(subject, verb, object, future, false);
            for csc in enc.encode(&text) {
                prop_assert!(Root::ALL.contains(&csc.root));
                for op in &csc.ops {
                    prop_assert!(Operator::ALL.contains(op));
                }
                for role in csc.roles.keys() {
                    prop_assert!(Role::CANONICAL_ORDER.contains(role));
                }
                if let Some(meta) = csc.meta {
                    prop_assert!(!meta.symbol().is_empty());
                }
            }
        }

        // P3 (determinism): encode(t) called twice on byte-identical t
        // returns byte-identical serializations under each format.
        #[test]
        fn p3_determinism_across_repeated_encodes(
            subject in subject_strategy(),
            verb in verb_strategy(),
            object in object_strategy(),
            future in any::<bool>(),
            negate in any::<bool>(),
        ) {
            let enc = Encoder::new(Language::En);
            let text = build_sentence(subject, verb, object, future, negate);
            for format in ["verbose", "compact", "ultra"] {
                let first = enc.encode_and_serialize(&text, format).unwrap();
                let second = enc.encode_and_serialize(&text, format).unwrap();
                prop_assert_eq!(first, second);
            }
        }

        // P7 (serializer ordering): ROOT first, then OPS, then roles in
        // canonical role order, then META.
        #[test]
        fn p7_serializer_places_fields_in_canonical_order(
            subject in subject_strategy(),
            verb in verb_strategy(),
            object in object_strategy(),
            future in any::<bool>(),
            negate in any::<bool>(),
        ) {
            let enc = Encoder::new(Language::En);
            let text = build_sentence(subject, verb, object, future, negate);
            for csc in enc.encode(&text) {
                let serialized = ptil_serialize::serialize(&csc, Format::Verbose);
                let root_pos = serialized.find("<ROOT=").expect("ROOT field present");
                prop_assert_eq!(root_pos, 0);
                let mut cursor = root_pos;
                if !csc.ops.is_empty() {
                    let ops_pos = serialized[cursor..].find("<OPS=").map(|p| p + cursor);
                    prop_assert!(ops_pos.is_some());
                    cursor = ops_pos.unwrap();
                }
                for role in csc.roles_in_canonical_order().iter().map(|(r, _)| *r) {
                    let tag = format!("<{}=", role.symbol());
                    let pos = serialized[cursor..].find(&tag).map(|p| p + cursor);
                    prop_assert!(pos.is_some(), "role {:?} missing or out of order", role);
                    cursor = pos.unwrap();
                }
                if let Some(meta) = csc.meta {
                    let tag = format!("<META={}>", meta.symbol());
                    let pos = serialized[cursor..].find(&tag).map(|p| p + cursor);
                    prop_assert!(pos.is_some(), "META out of order");
                }
            }
        }

        // P8 (compatibility recovery): dropping any synthetic incompatible
        // role yields a CSC that still satisfies the compatibility
        // invariant; no incompatible role survives assembly.
        #[test]
        fn p8_assembler_never_keeps_an_inadmissible_role(
            root_idx in 0usize..Root::ALL.len(),
            role_idx in 0usize..Role::CANONICAL_ORDER.len(),
        ) {
            let root = Root::ALL[root_idx];
            let role = Role::CANONICAL_ORDER[role_idx];
            let mut roles = std::collections::BTreeMap::new();
            roles.insert(role, ptil::Entity::from_tokens(["x"]));
            let (csc, _diags) = assembler::assemble(root, vec![], roles, None, 0);
            if ptil::is_admissible(root, role) {
                prop_assert!(csc.roles.contains_key(&role));
            } else {
                prop_assert!(!csc.roles.contains_key(&role));
            }
        }

        // P10 (tokenizer safety): every serialized string, in every format,
        // uses only the permitted character classes (§4.7's ASCII-plus-
        // metacharacters rule). The stronger bound — tokenizes to no more
        // tokens than the raw input — is additionally checked for `ultra`,
        // the one format whose frozen abbreviation table (bare symbols, no
        // repeated field names) actually achieves it for a single short
        // sentence; `verbose`/`compact` spell out field names as literal
        // words and can legitimately exceed raw token count here (see
        // DESIGN.md's resolution of this open question).
        #[test]
        fn p10_serialized_output_is_tokenizer_safe(
            subject in subject_strategy(),
            verb in verb_strategy(),
            object in object_strategy(),
            future in any::<bool>(),
            negate in any::<bool>(),
        ) {
            let enc = Encoder::new(Language::En);
            let text = build_sentence(subject, verb, object, future, negate);
            for format in ["verbose", "compact", "ultra"] {
                let serialized = enc.encode_and_serialize(&text, format).unwrap();
                if serialized.is_empty() {
                    continue;
                }
                prop_assert!(ptil_serialize::uses_permitted_characters(&serialized));
            }
            let ultra = enc.encode_and_serialize(&text, "ultra").unwrap();
            if !ultra.is_empty() {
                prop_assert!(check_compatibility(&ultra, &text));
            }
        }
    }

    // P4 (synonym consistency): curated pairs, randomized sentence frame.
    proptest! {
        #[test]
        fn p4_synonym_pairs_yield_the_same_root(
            pair_idx in 0usize..SYNONYM_PAIRS.len(),
            subject in subject_strategy(),
            object in object_strategy(),
            future in any::<bool>(),
        ) {
            let (p1, p2, expected_root) = SYNONYM_PAIRS[pair_idx];
            let enc = Encoder::new(Language::En);
            let text1 = build_sentence(subject, p1, object, future, false);
            let text2 = build_sentence(subject, p2, object, future, false);
            let cscs1 = enc.encode(&text1);
            let cscs2 = enc.encode(&text2);
            prop_assert_eq!(cscs1.len(), 1);
            prop_assert_eq!(cscs2.len(), 1);
            prop_assert_eq!(cscs1[0].root, expected_root);
            prop_assert_eq!(cscs2[0].root, expected_root);
        }
    }

    // P6 (OPS order sensitivity): a crafted pair whose OPS sequences differ
    // only in order must serialize differently. Not randomized — the
    // source asks for "a crafted input pair", i.e. a specific witness.
    #[test]
    fn p6_ops_order_sensitivity_witness() {
        use ptil::{Csc, Entity};

        let mut forward = Csc::new(Root::Motion);
        forward.ops = vec![Operator::Negation, Operator::Possible];
        forward.roles.insert(Role::Agent, Entity::from_tokens(["boy"]));

        let mut reversed = forward.clone();
        reversed.ops = vec![Operator::Possible, Operator::Negation];

        let forward_out = ptil_serialize::serialize(&forward, Format::Verbose);
        let reversed_out = ptil_serialize::serialize(&reversed, Format::Verbose);
        assert_ne!(forward_out, reversed_out);
    }

    // P9 (cross-lingual ROOT equality): the curated parallel-sentence table.
    #[test]
    fn p9_parallel_sentences_share_root_across_languages() {
        let en = Encoder::new(Language::En);
        for entry in PARALLEL_SENTENCES {
            let other = Encoder::new(entry.other_language);
            let en_cscs = en.encode(entry.english);
            let other_cscs = other.encode(entry.other);
            assert_eq!(en_cscs.len(), 1, "english sentence: {}", entry.english);
            assert_eq!(other_cscs.len(), 1, "other-language sentence: {}", entry.other);
            assert_eq!(en_cscs[0].root, entry.expected_root);
            assert_eq!(other_cscs[0].root, entry.expected_root);
            assert_eq!(en_cscs[0].root, other_cscs[0].root);
        }
    }
}
