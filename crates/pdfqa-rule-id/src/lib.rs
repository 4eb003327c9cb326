//! # pdfqa-rule-id
//!
//! **Tier 0 (Core Types)**
//!
//! Identifiers for the normative rules a conformance corpus exercises. A
//! [`RuleId`] names one numbered test of one specification clause, e.g. test
//! `2` of clause `6.1.3` of PDF/A-1.
//!
//! ## What belongs here
//! * The [`Specification`] tag and the [`RuleId`] value
//! * The deterministic rule ordering used by reports
//!
//! ## What does NOT belong here
//! * Corpus file-name parsing (see `pdfqa-corpus-id`)
//! * Rule evaluation or profile loading

#![forbid(unsafe_code)]

pub mod specification;

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

pub use specification::{Specification, SpecificationParseError};

/// Clause used by [`default_rule_id`].
pub const DEFAULT_CLAUSE: &str = "clause";

/// Specification used by [`default_rule_id`].
pub const DEFAULT_SPECIFICATION: Specification = Specification::Iso19005_1;

/// Identifies a single numbered test of a specification clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleId {
    specification: Specification,
    clause: String,
    test_number: u32,
}

impl RuleId {
    #[must_use]
    pub fn new(specification: Specification, clause: impl Into<String>, test_number: u32) -> Self {
        Self {
            specification,
            clause: clause.into(),
            test_number,
        }
    }

    #[must_use]
    pub fn specification(&self) -> Specification {
        self.specification
    }

    /// Dotted clause string, e.g. `"6.1.3"`.
    #[must_use]
    pub fn clause(&self) -> &str {
        &self.clause
    }

    #[must_use]
    pub fn test_number(&self) -> u32 {
        self.test_number
    }
}

impl Default for RuleId {
    fn default() -> Self {
        default_rule_id()
    }
}

/// Build a rule id from its parts.
#[must_use]
pub fn rule_id_from_values(
    specification: Specification,
    clause: impl Into<String>,
    test_number: u32,
) -> RuleId {
    RuleId::new(specification, clause, test_number)
}

/// The sentinel rule id: `ISO_19005_1`, clause `"clause"`, test `0`.
#[must_use]
pub fn default_rule_id() -> RuleId {
    RuleId::new(DEFAULT_SPECIFICATION, DEFAULT_CLAUSE, 0)
}

/// Compare two dotted clause strings segment by segment.
///
/// Rules:
/// - Segments that both parse as integers compare numerically (`9 < 10`).
/// - A numeric segment sorts before a non-numeric one.
/// - Other segments compare lexicographically.
/// - A clause that is a segment prefix of another sorts first.
/// - Clauses that tie on all of the above fall back to plain string order,
///   so only identical strings compare `Equal`.
#[must_use]
pub fn compare_clauses(left: &str, right: &str) -> Ordering {
    let mut lhs = left.split('.');
    let mut rhs = right.split('.');
    loop {
        match (lhs.next(), rhs.next()) {
            (None, None) => return left.cmp(right),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(a), Some(b)) => {
                let ord = compare_segments(a, b);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

fn compare_segments(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

impl Ord for RuleId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.specification
            .cmp(&other.specification)
            .then_with(|| compare_clauses(&self.clause, &other.clause))
            .then_with(|| self.test_number.cmp(&other.test_number))
    }
}

impl PartialOrd for RuleId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}-t{}",
            self.specification, self.clause, self.test_number
        )
    }
}
