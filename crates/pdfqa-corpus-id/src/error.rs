//! Error types for corpus item parsing and naming-convention loading.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors from parsing corpus file names or loading a naming convention.
#[derive(Debug, Error)]
pub enum CorpusIdError {
    /// A test-number token (`t<digits>`) did not carry a valid unsigned integer.
    #[error("Invalid test number in token '{token}': {source}")]
    InvalidTestNumber {
        token: String,
        source: ParseIntError,
    },

    #[error("Naming convention field '{field}' must not be empty")]
    InvalidConvention { field: &'static str },

    #[error("Failed to parse naming convention TOML: {0}")]
    ConventionToml(#[from] toml::de::Error),
}
