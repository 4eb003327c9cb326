//! Naming convention for corpus test files.
//!
//! The standard convention is
//! `<clause tokens>-t<test number>-<pass|fail>-<code>.pdf`, optionally inside
//! a `/`-delimited path.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::CorpusIdError;

pub const PATH_SEPARATOR: &str = "/";
pub const TOKEN_SEPARATOR: &str = "-";
pub const CLAUSE_JOINER: &str = ".";
pub const TEST_PREFIX: &str = "t";
pub const PASS_TOKEN: &str = "pass";
pub const FAIL_TOKEN: &str = "fail";
pub const TEST_FILE_EXT: &str = ".pdf";

static STANDARD: LazyLock<NamingConvention> = LazyLock::new(NamingConvention::default);

/// Tokens that make up a corpus file name.
///
/// Missing TOML keys fall back to the standard convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NamingConvention {
    /// Separates directories in a corpus path.
    pub path_separator: String,
    /// Separates tokens inside a file name.
    pub token_separator: String,
    /// Joins clause tokens into a dotted clause.
    pub clause_joiner: String,
    /// Marks the test-number token.
    pub test_prefix: String,
    /// Expected-result token for passing files (case-insensitive).
    pub pass_token: String,
    /// Expected-result token for failing files (case-insensitive).
    pub fail_token: String,
    /// Suffix identifying a test file.
    pub test_file_ext: String,
}

impl Default for NamingConvention {
    fn default() -> Self {
        Self {
            path_separator: PATH_SEPARATOR.to_string(),
            token_separator: TOKEN_SEPARATOR.to_string(),
            clause_joiner: CLAUSE_JOINER.to_string(),
            test_prefix: TEST_PREFIX.to_string(),
            pass_token: PASS_TOKEN.to_string(),
            fail_token: FAIL_TOKEN.to_string(),
            test_file_ext: TEST_FILE_EXT.to_string(),
        }
    }
}

impl NamingConvention {
    /// The shared standard convention.
    #[must_use]
    pub fn standard() -> &'static NamingConvention {
        &STANDARD
    }

    /// Parse and validate a convention from a TOML string.
    pub fn from_toml(s: &str) -> Result<Self, CorpusIdError> {
        let convention: Self = toml::from_str(s)?;
        convention.validate()?;
        Ok(convention)
    }

    /// Reject conventions with empty tokens.
    pub fn validate(&self) -> Result<(), CorpusIdError> {
        let fields = [
            ("path_separator", &self.path_separator),
            ("token_separator", &self.token_separator),
            ("clause_joiner", &self.clause_joiner),
            ("test_prefix", &self.test_prefix),
            ("pass_token", &self.pass_token),
            ("fail_token", &self.fail_token),
            ("test_file_ext", &self.test_file_ext),
        ];
        match fields.into_iter().find(|(_, value)| value.is_empty()) {
            Some((field, _)) => Err(CorpusIdError::InvalidConvention { field }),
            None => Ok(()),
        }
    }

    /// Map a pass/fail token to the expected result.
    #[must_use]
    pub fn expected_result_of(&self, token: &str) -> Option<bool> {
        if crate::eq_ignore_case(token, &self.pass_token) {
            Some(true)
        } else if crate::eq_ignore_case(token, &self.fail_token) {
            Some(false)
        } else {
            None
        }
    }

    pub(crate) fn result_token(&self, expected_result: bool) -> &str {
        if expected_result {
            &self.pass_token
        } else {
            &self.fail_token
        }
    }
}
