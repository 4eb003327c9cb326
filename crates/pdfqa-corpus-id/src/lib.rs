//! # pdfqa-corpus-id
//!
//! **Tier 1 (Corpus Identity)**
//!
//! Identity of a test file in a PDF/A conformance corpus. Corpus files follow
//! the naming convention
//! `<clause tokens>-t<test number>-<pass|fail>-<code>.pdf`, e.g.
//! `corpus/6.1.3-t2-fail-a.pdf`, and [`CorpusItemId`] decodes such a name into
//! the rule it exercises, the expected validation outcome and a variant code.
//!
//! ## Identity
//! Two ids are equal when rule, test code and expected result match. The
//! content hash travels with the id but is not part of its identity.
//!
//! ## Failure asymmetry
//! * A file name without any `.pdf` segment yields [`CorpusItemId::default_instance`].
//! * A malformed test number (`tX`) is an error.

#![forbid(unsafe_code)]

pub mod convention;
pub mod error;
mod parse;
pub mod record;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use pdfqa_rule_id::{RuleId, Specification, default_rule_id};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use convention::NamingConvention;
pub use error::CorpusIdError;
pub use record::CorpusItemRecord;

/// Hash carried by the default instance.
pub const DEFAULT_SHA1: &str = "sha1";

/// Test code carried by the default instance.
pub const DEFAULT_TEST_CODE: &str = "testCode";

static DEFAULT: LazyLock<CorpusItemId> = LazyLock::new(|| {
    CorpusItemId::from_values(default_rule_id(), DEFAULT_TEST_CODE, false, DEFAULT_SHA1)
});

/// Immutable identity of a corpus test file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "CorpusItemRecord", into = "CorpusItemRecord")]
pub struct CorpusItemId {
    rule_id: RuleId,
    hex_sha1: String,
    test_code: String,
    expected_result: bool,
}

impl CorpusItemId {
    /// Build an id from known values. Nothing is validated.
    #[must_use]
    pub fn from_values(
        rule_id: RuleId,
        test_code: impl Into<String>,
        expected_result: bool,
        hex_sha1: impl Into<String>,
    ) -> Self {
        Self {
            rule_id,
            hex_sha1: hex_sha1.into(),
            test_code: test_code.into(),
            expected_result,
        }
    }

    /// Parse a corpus file name, optionally embedded in a `/`-delimited path.
    ///
    /// The first path segment ending in `.pdf` is parsed. When no segment
    /// matches, the default instance is returned. `sha1` is stored as given.
    ///
    /// # Errors
    /// [`CorpusIdError::InvalidTestNumber`] when a `t` token is not followed by
    /// an unsigned integer.
    pub fn from_file_name(
        specification: Specification,
        file_name: &str,
        sha1: impl Into<String>,
    ) -> Result<Self, CorpusIdError> {
        Self::from_file_name_with(NamingConvention::standard(), specification, file_name, sha1)
    }

    /// [`CorpusItemId::from_file_name`] with an explicit naming convention.
    pub fn from_file_name_with(
        convention: &NamingConvention,
        specification: Specification,
        file_name: &str,
        sha1: impl Into<String>,
    ) -> Result<Self, CorpusIdError> {
        let test_file = file_name
            .split(convention.path_separator.as_str())
            .find(|part| part.ends_with(convention.test_file_ext.as_str()));

        match test_file {
            Some(code) => parse::from_code(convention, specification, code, sha1.into()),
            None => {
                debug!(file_name, "no test file segment, using default corpus item id");
                Ok(Self::default_instance().clone())
            }
        }
    }

    /// The shared sentinel id: default rule, hash `"sha1"`, code
    /// `"testCode"`, expected result `false`.
    #[must_use]
    pub fn default_instance() -> &'static CorpusItemId {
        &DEFAULT
    }

    /// Display name `<clause suffix>-t<test number>-<pass|fail>-<code>`.
    ///
    /// The clause suffix drops everything up to and including the first `.`
    /// of the clause. A clause without a `.` contributes nothing.
    #[must_use]
    pub fn name(&self) -> String {
        self.name_with(NamingConvention::standard())
    }

    /// [`CorpusItemId::name`] with an explicit naming convention.
    #[must_use]
    pub fn name_with(&self, convention: &NamingConvention) -> String {
        let clause = self.rule_id.clause();
        let joiner = convention.clause_joiner.as_str();
        let suffix = clause
            .find(joiner)
            .map_or("", |idx| &clause[idx + joiner.len()..]);
        let sep = convention.token_separator.as_str();
        format!(
            "{suffix}{sep}{prefix}{number}{sep}{result}{sep}{code}",
            prefix = convention.test_prefix,
            number = self.rule_id.test_number(),
            result = convention.result_token(self.expected_result),
            code = self.test_code,
        )
    }

    #[must_use]
    pub fn rule_id(&self) -> &RuleId {
        &self.rule_id
    }

    #[must_use]
    pub fn hex_sha1(&self) -> &str {
        &self.hex_sha1
    }

    #[must_use]
    pub fn test_code(&self) -> &str {
        &self.test_code
    }

    /// `true` when the file is expected to pass validation.
    #[must_use]
    pub fn expected_result(&self) -> bool {
        self.expected_result
    }
}

impl Default for CorpusItemId {
    fn default() -> Self {
        Self::default_instance().clone()
    }
}

impl PartialEq for CorpusItemId {
    fn eq(&self, other: &Self) -> bool {
        self.expected_result == other.expected_result
            && self.rule_id == other.rule_id
            && self.test_code == other.test_code
    }
}

impl Eq for CorpusItemId {}

impl Hash for CorpusItemId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rule_id.hash(state);
        self.test_code.hash(state);
        self.expected_result.hash(state);
    }
}

/// Report order: rule id, then test code ignoring case.
///
/// Remaining ties break on the exact test code and then the expected result
/// (fail first) so the order stays total and agrees with `Eq`.
impl Ord for CorpusItemId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rule_id
            .cmp(&other.rule_id)
            .then_with(|| cmp_ignore_case(&self.test_code, &other.test_code))
            .then_with(|| self.test_code.cmp(&other.test_code))
            .then_with(|| self.expected_result.cmp(&other.expected_result))
    }
}

impl PartialOrd for CorpusItemId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for CorpusItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

pub(crate) fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    cmp_ignore_case(a, b) == Ordering::Equal
}
