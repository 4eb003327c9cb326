//! Normative specifications a conformance rule can belong to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a specification id is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown specification id: {0}")]
pub struct SpecificationParseError(pub String);

/// A normative specification that defines conformance rules.
///
/// Serializes as the stable id (`ISO_19005_1`, ...). Ordering follows the
/// declaration order below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Specification {
    #[serde(rename = "NO_STANDARD")]
    NoStandard,
    /// PDF/A-1.
    #[serde(rename = "ISO_19005_1")]
    Iso19005_1,
    /// PDF/A-2.
    #[serde(rename = "ISO_19005_2")]
    Iso19005_2,
    /// PDF/A-3.
    #[serde(rename = "ISO_19005_3")]
    Iso19005_3,
    /// PDF/A-4.
    #[serde(rename = "ISO_19005_4")]
    Iso19005_4,
    /// PDF/UA-1.
    #[serde(rename = "ISO_14289_1")]
    Iso14289_1,
    /// PDF/UA-2.
    #[serde(rename = "ISO_14289_2")]
    Iso14289_2,
}

impl Specification {
    /// Every known specification, in ordering sequence.
    pub const ALL: [Specification; 7] = [
        Specification::NoStandard,
        Specification::Iso19005_1,
        Specification::Iso19005_2,
        Specification::Iso19005_3,
        Specification::Iso19005_4,
        Specification::Iso14289_1,
        Specification::Iso14289_2,
    ];

    /// Stable identifier, identical to the serialized form.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Specification::NoStandard => "NO_STANDARD",
            Specification::Iso19005_1 => "ISO_19005_1",
            Specification::Iso19005_2 => "ISO_19005_2",
            Specification::Iso19005_3 => "ISO_19005_3",
            Specification::Iso19005_4 => "ISO_19005_4",
            Specification::Iso14289_1 => "ISO_14289_1",
            Specification::Iso14289_2 => "ISO_14289_2",
        }
    }

    /// Human readable designation including the publication year.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Specification::NoStandard => "No standard",
            Specification::Iso19005_1 => "ISO 19005-1:2005",
            Specification::Iso19005_2 => "ISO 19005-2:2011",
            Specification::Iso19005_3 => "ISO 19005-3:2012",
            Specification::Iso19005_4 => "ISO 19005-4:2020",
            Specification::Iso14289_1 => "ISO 14289-1:2014",
            Specification::Iso14289_2 => "ISO 14289-2:2024",
        }
    }
}

impl fmt::Display for Specification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Specification {
    type Err = SpecificationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Specification::ALL
            .into_iter()
            .find(|spec| spec.id() == s)
            .ok_or_else(|| SpecificationParseError(s.to_string()))
    }
}
