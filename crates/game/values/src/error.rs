//! Common error infrastructure for game-values.
//!
//! Domain-specific errors (`WeightError`, `SampleError`, `NotifyError`) live next
//! to the operations that produce them. This module provides the shared
//! severity classification and the [`ValueError`] trait they all implement.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the caller can retry later or pick another path
///   (e.g. sampling a table that is still empty)
/// - **Validation**: invalid input, must not be retried unchanged
/// - **Internal**: an observer or collaborator misbehaved
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ErrorSeverity {
    /// Recoverable error - can retry once the precondition holds.
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    Validation,

    /// Internal error - a callback or collaborator failed.
    Internal,
}

impl ErrorSeverity {
    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a bug in caller-supplied code.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all game-values errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait ValueError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_names_are_snake_case() {
        assert_eq!(ErrorSeverity::Recoverable.as_ref(), "recoverable");
        assert_eq!(ErrorSeverity::Validation.to_string(), "validation");
        assert_eq!(ErrorSeverity::Internal.as_ref(), "internal");
    }

    #[test]
    fn only_internal_is_internal() {
        assert!(ErrorSeverity::Internal.is_internal());
        assert!(!ErrorSeverity::Validation.is_internal());
        assert!(ErrorSeverity::Recoverable.is_recoverable());
    }
}
