use std::cmp::Ordering;

use pdfqa_corpus_id::CorpusItemId;
use pdfqa_rule_id::{Specification, rule_id_from_values};
use proptest::prelude::*;

fn arb_spec() -> impl Strategy<Value = Specification> {
    prop::sample::select(Specification::ALL.to_vec())
}

/// Clause segments the parser never reclassifies (no `t` prefix, no pass/fail).
fn arb_segments() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[0-9]{1,2}", 2..5)
}

fn arb_id() -> impl Strategy<Value = CorpusItemId> {
    (
        arb_spec(),
        arb_segments(),
        0u32..200,
        "[a-zA-Z]",
        any::<bool>(),
        "[0-9a-f]{8}",
    )
        .prop_map(|(spec, segs, n, code, result, sha)| {
            CorpusItemId::from_values(rule_id_from_values(spec, segs.join("."), n), code, result, sha)
        })
}

proptest! {
    #[test]
    fn from_file_name_never_panics(spec in arb_spec(), name in "\\PC*") {
        let _ = CorpusItemId::from_file_name(spec, &name, "00");
    }

    #[test]
    fn names_without_pdf_segment_yield_default(spec in arb_spec(), name in "[a-z0-9/\\-]*") {
        let id = CorpusItemId::from_file_name(spec, &name, "00").unwrap();
        prop_assert_eq!(&id, CorpusItemId::default_instance());
    }

    #[test]
    fn well_formed_names_parse_to_their_parts(
        spec in arb_spec(),
        segs in arb_segments(),
        n in 0u32..10_000,
        pass in any::<bool>(),
        code in "[a-z]",
        dirs in prop::collection::vec("[a-z]{1,6}", 0..3),
    ) {
        let result = if pass { "pass" } else { "fail" };
        let file = format!("{}-t{n}-{result}-{code}.pdf", segs.join("-"));
        let path = dirs.iter().map(String::as_str).chain([file.as_str()]).collect::<Vec<_>>().join("/");

        let id = CorpusItemId::from_file_name(spec, &path, "cafe").unwrap();
        prop_assert_eq!(id.rule_id().specification(), spec);
        prop_assert_eq!(id.rule_id().clause(), segs.join("."));
        prop_assert_eq!(id.rule_id().test_number(), n);
        prop_assert_eq!(id.expected_result(), pass);
        prop_assert_eq!(id.test_code(), code.as_str());
        prop_assert_eq!(id.hex_sha1(), "cafe");
    }

    #[test]
    fn name_round_trips_with_restored_prefix(id in arb_id()) {
        let clause = id.rule_id().clause();
        let prefix = clause.split('.').next().unwrap_or_default();
        let file = format!("{prefix}-{}.pdf", id.name());

        let reparsed = CorpusItemId::from_file_name(id.rule_id().specification(), &file, "other").unwrap();
        prop_assert_eq!(reparsed, id);
    }

    #[test]
    fn name_reparses_to_clause_suffix(id in arb_id()) {
        let file = format!("{}.pdf", id.name());
        let reparsed = CorpusItemId::from_file_name(id.rule_id().specification(), &file, "other").unwrap();

        let clause = id.rule_id().clause();
        let suffix = &clause[clause.find('.').map_or(clause.len(), |i| i + 1)..];
        prop_assert_eq!(reparsed.rule_id().clause(), suffix);
    }

    #[test]
    fn equality_ignores_hash(id in arb_id(), other_sha in "[0-9a-f]{40}") {
        let twin = CorpusItemId::from_values(
            id.rule_id().clone(),
            id.test_code(),
            id.expected_result(),
            other_sha,
        );
        prop_assert_eq!(twin, id);
    }

    #[test]
    fn ordering_agrees_with_equality(a in arb_id(), b in arb_id()) {
        prop_assert_eq!(a.cmp(&b) == Ordering::Equal, a == b);
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
    }

    #[test]
    fn ordering_is_transitive(a in arb_id(), b in arb_id(), c in arb_id()) {
        if a <= b && b <= c {
            prop_assert!(a <= c);
        }
    }

    #[test]
    fn ordering_follows_rule_id_first(a in arb_id(), b in arb_id()) {
        if a.rule_id() != b.rule_id() {
            prop_assert_eq!(a.cmp(&b), a.rule_id().cmp(b.rule_id()));
        }
    }

    #[test]
    fn serde_round_trip_keeps_hash(id in arb_id()) {
        let json = serde_json::to_string(&id).unwrap();
        let back: CorpusItemId = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back.hex_sha1(), id.hex_sha1());
        prop_assert_eq!(back, id);
    }
}
