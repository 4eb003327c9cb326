#![no_main]
use libfuzzer_sys::fuzz_target;
use pdfqa_corpus_id::{CorpusItemId, NamingConvention};
use pdfqa_rule_id::Specification;

const MAX_INPUT_SIZE: usize = 8 * 1024;
const SPLIT_BYTE: u8 = 0x1f;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() || data.len() > MAX_INPUT_SIZE {
        return;
    }

    let mut parts = data.splitn(2, |b| *b == SPLIT_BYTE);
    let toml = String::from_utf8_lossy(parts.next().unwrap_or_default());
    let file_name = String::from_utf8_lossy(parts.next().unwrap_or_default());

    let Ok(convention) = NamingConvention::from_toml(&toml) else {
        return;
    };

    // Invariant: a convention that loaded is valid
    assert!(convention.validate().is_ok());

    if let Ok(id) =
        CorpusItemId::from_file_name_with(&convention, Specification::Iso19005_2, &file_name, "00")
    {
        let _ = id.name_with(&convention);
    }
});
