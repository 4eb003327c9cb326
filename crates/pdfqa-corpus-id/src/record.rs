//! Wire record for corpus item ids.

use pdfqa_rule_id::RuleId;
use serde::{Deserialize, Serialize};

use crate::CorpusItemId;

/// Plain field-by-field serialized form of a [`CorpusItemId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusItemRecord {
    #[serde(rename = "ruleId")]
    pub rule_id: RuleId,
    pub sha1: String,
    #[serde(rename = "testCode")]
    pub test_code: String,
    pub result: bool,
}

impl From<CorpusItemId> for CorpusItemRecord {
    fn from(id: CorpusItemId) -> Self {
        Self {
            rule_id: id.rule_id,
            sha1: id.hex_sha1,
            test_code: id.test_code,
            result: id.expected_result,
        }
    }
}

impl From<CorpusItemRecord> for CorpusItemId {
    fn from(record: CorpusItemRecord) -> Self {
        CorpusItemId::from_values(record.rule_id, record.test_code, record.result, record.sha1)
    }
}
