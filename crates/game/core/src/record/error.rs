//! Stat record errors.

use crate::error::{ErrorSeverity, StatsError};

/// Errors raised by stat record construction, lookup and arithmetic.
///
/// All variants are caller-input problems: the record is never left
/// partially written when one of these is returned.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// The mapping omits stats the schema requires.
    ///
    /// `missing` lists every absent stat in schema order.
    #[error("schema '{schema}' requires values for: {}", .missing.join(", "))]
    MissingStats { schema: String, missing: Vec<String> },

    /// A get/set named a stat that the bound schema does not define.
    #[error("schema '{schema}' has no stat named '{stat}'")]
    UnknownStat { schema: String, stat: String },

    /// The operand of a binary operation lacks a stat of the receiver.
    #[error(
        "cannot align stat '{stat}' of schema '{receiver}': operand schema '{operand}' does not define it"
    )]
    SchemaMismatch {
        stat: String,
        receiver: String,
        operand: String,
    },
}

impl StatsError for RecordError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingStats { .. } => "RECORD_MISSING_STATS",
            Self::UnknownStat { .. } => "RECORD_UNKNOWN_STAT",
            Self::SchemaMismatch { .. } => "RECORD_SCHEMA_MISMATCH",
        }
    }
}
