//! Token parser for a single corpus file name.

use pdfqa_rule_id::{Specification, rule_id_from_values};
use tracing::trace;

use crate::{CorpusIdError, CorpusItemId, NamingConvention};

/// Parse one file-name segment (already known to carry the test-file
/// extension) into a corpus item id.
///
/// Each token is classified independently of its position:
/// 1. ends with the test-file extension: first character is the test code
/// 2. a pass/fail token: expected result
/// 3. starts with the test prefix: remainder is the test number
/// 4. anything else: appended to the dotted clause
///
/// A later token of the same class overwrites an earlier one.
pub(crate) fn from_code(
    convention: &NamingConvention,
    specification: Specification,
    code: &str,
    sha1: String,
) -> Result<CorpusItemId, CorpusIdError> {
    let mut clause_parts: Vec<&str> = Vec::new();
    let mut expected_result = false;
    let mut test_code = String::new();
    let mut test_number = 0u32;

    for token in code.split(convention.token_separator.as_str()) {
        if token.ends_with(convention.test_file_ext.as_str()) {
            test_code = token.chars().next().map(String::from).unwrap_or_default();
        } else if let Some(result) = convention.expected_result_of(token) {
            expected_result = result;
        } else if let Some(number) = token.strip_prefix(convention.test_prefix.as_str()) {
            test_number = number
                .parse()
                .map_err(|source| CorpusIdError::InvalidTestNumber {
                    token: token.to_string(),
                    source,
                })?;
        } else {
            clause_parts.push(token);
        }
    }

    let clause = clause_parts.join(convention.clause_joiner.as_str());
    trace!(
        code,
        clause = %clause,
        test_number,
        expected_result,
        test_code = %test_code,
        "parsed corpus item code"
    );

    let rule_id = rule_id_from_values(specification, clause, test_number);
    Ok(CorpusItemId::from_values(
        rule_id,
        test_code,
        expected_result,
        sha1,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(code: &str) -> Result<CorpusItemId, CorpusIdError> {
        from_code(
            NamingConvention::standard(),
            Specification::Iso19005_1,
            code,
            "cafe".to_string(),
        )
    }

    #[test]
    fn hyphenated_clause_tokens_are_joined_with_dots() {
        let id = parse("6-1-3-t9-fail-b.pdf").unwrap();
        assert_eq!(id.rule_id().clause(), "6.1.3");
        assert_eq!(id.rule_id().test_number(), 9);
        assert_eq!(id.rule_id().specification(), Specification::Iso19005_1);
        assert!(!id.expected_result());
        assert_eq!(id.test_code(), "b");
        assert_eq!(id.hex_sha1(), "cafe");
    }

    #[test]
    fn dotted_clause_token_is_kept_whole() {
        let id = parse("6.1.3-t2-fail-a.pdf").unwrap();
        assert_eq!(id.rule_id().clause(), "6.1.3");
        assert_eq!(id.rule_id().test_number(), 2);
    }

    #[test]
    fn token_classes_are_position_independent() {
        let id = parse("pass-t4-6-2-c.pdf").unwrap();
        assert_eq!(id.rule_id().clause(), "6.2");
        assert_eq!(id.rule_id().test_number(), 4);
        assert!(id.expected_result());
        assert_eq!(id.test_code(), "c");
    }

    #[test]
    fn result_token_ignores_case() {
        assert!(parse("6-1-t1-PASS-a.pdf").unwrap().expected_result());
        assert!(!parse("6-1-t1-FaIl-a.pdf").unwrap().expected_result());
    }

    #[test]
    fn missing_tokens_keep_their_initial_values() {
        let id = parse("a.pdf").unwrap();
        assert_eq!(id.rule_id().clause(), "");
        assert_eq!(id.rule_id().test_number(), 0);
        assert!(!id.expected_result());
        assert_eq!(id.test_code(), "a");
    }

    #[test]
    fn later_tokens_overwrite_earlier_ones() {
        let id = parse("6-t1-pass-t2-fail-x.pdf").unwrap();
        assert_eq!(id.rule_id().test_number(), 2);
        assert!(!id.expected_result());
    }

    #[test]
    fn test_code_keeps_only_the_first_character() {
        let id = parse("6-1-t1-pass-abc.pdf").unwrap();
        assert_eq!(id.test_code(), "a");
    }

    #[test]
    fn non_numeric_test_number_fails() {
        let err = parse("6-1-tX-pass-a.pdf").unwrap_err();
        match err {
            CorpusIdError::InvalidTestNumber { token, .. } => assert_eq!(token, "tX"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bare_test_prefix_fails() {
        assert!(matches!(
            parse("6-1-t-pass-a.pdf"),
            Err(CorpusIdError::InvalidTestNumber { .. })
        ));
    }

    #[test]
    fn words_starting_with_t_are_test_numbers_not_clause() {
        assert!(parse("6-1-table-t1-pass-a.pdf").is_err());
    }

    #[test]
    fn empty_tokens_are_absorbed_into_clause() {
        let id = parse("6--1-t1-pass-a.pdf").unwrap();
        assert_eq!(id.rule_id().clause(), "6..1");
    }
}
