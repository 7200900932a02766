use thiserror::Error;

use crate::tables::region::SUPPORTED_REGIONS;

/// Input validation failures.
///
/// Every variant is a deterministic, non-retryable, user-facing failure
/// detected before any bracket lookup runs; a failed validation
/// short-circuits the whole simulation and never yields a partial result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The field list did not contain exactly eight entries.
    #[error("expected exactly {expected} input fields, got {got}")]
    FieldCount { expected: usize, got: usize },

    /// The region field contains characters outside the kanji script.
    #[error("region '{0}' must be written in kanji, e.g. 東京都")]
    RegionFormat(String),

    /// The living-space field is not a non-negative integer literal.
    #[error("living space '{0}' must be a non-negative whole number of tatami")]
    SpaceFormat(String),

    /// The region is well-formed but not in the supported set.
    #[error("unsupported region '{region}': supported regions are {}", SUPPORTED_REGIONS.join("・"))]
    UnsupportedRegion { region: String },

    /// A numeric field failed to parse as a non-negative number.
    #[error("field '{field}' must be a non-negative number, got '{value}'")]
    NumberFormat {
        field: &'static str,
        value: String,
    },

    /// The monthly salary must be strictly positive.
    #[error("monthly salary must be greater than zero, got '{0}'")]
    SalaryNotPositive(String),

    /// The marital-status field is not one of the accepted tokens.
    #[error("marital status '{0}' must be あり (with spouse) or なし (none)")]
    MaritalFormat(String),
}
