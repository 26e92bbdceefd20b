//! Common error infrastructure for stat-core.
//!
//! Domain-specific errors live next to the code that produces them:
//! [`SchemaError`](crate::schema::SchemaError) and
//! [`NotFoundError`](crate::registry::NotFoundError) for the registry,
//! [`RecordError`](crate::record::RecordError) for the record engine.
//! This module holds what they share.
//!
//! Every failure is deterministic given its inputs, so nothing here is
//! retryable: callers fix the input and call again.

/// Severity level of an error, used for categorization by callers.
///
/// - **Validation**: Caller supplied input that does not fit the schema
/// - **Fatal**: Catalog definition is malformed; the registry cannot be built
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Invalid input, should not retry without changes.
    ///
    /// Examples: missing stat in a mapping, unknown stat name, mismatched operand
    Validation,

    /// Malformed schema catalog, cannot continue.
    ///
    /// Examples: duplicate stat name, zero-growth stat outside the schema
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error stems from the catalog rather than caller input.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all stat-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Keep error codes stable; they are matched on by callers and tests
pub trait StatsError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_labels() {
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
        assert_eq!(ErrorSeverity::Fatal.as_str(), "fatal");
        assert!(ErrorSeverity::Fatal.is_fatal());
        assert!(!ErrorSeverity::Validation.is_fatal());
    }
}
