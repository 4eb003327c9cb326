#![no_main]
use libfuzzer_sys::fuzz_target;
use pdfqa_corpus_id::{CorpusIdError, CorpusItemId};
use pdfqa_rule_id::Specification;

/// Max input size to prevent pathological parse times
const MAX_INPUT_SIZE: usize = 4 * 1024; // 4KB for file names

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_INPUT_SIZE {
        return;
    }
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    let has_test_file = s.split('/').any(|part| part.ends_with(".pdf"));

    match CorpusItemId::from_file_name(Specification::Iso19005_1, s, "fuzz") {
        Ok(id) => {
            // Invariant: without a .pdf segment the sentinel comes back untouched
            if has_test_file {
                assert_eq!(id.hex_sha1(), "fuzz");
                assert_eq!(id.test_code().chars().count(), 1);
            } else {
                assert_eq!(&id, CorpusItemId::default_instance());
                assert_eq!(id.hex_sha1(), "sha1");
            }

            // Invariant: naming never panics and always carries the test prefix
            let name = id.name();
            assert!(name.contains("-t"), "name without test prefix: {name:?}");

            assert_eq!(id.cmp(&id.clone()), std::cmp::Ordering::Equal);
        }
        Err(CorpusIdError::InvalidTestNumber { token, .. }) => {
            // Invariant: only a test-number token fails, and only inside a .pdf segment
            assert!(has_test_file);
            assert!(token.starts_with('t'), "unexpected failing token: {token:?}");
        }
        Err(other) => panic!("unexpected error kind: {other}"),
    }
});
