//! Weighted table errors.

use crate::error::{ErrorSeverity, ValueError};

/// Rejected weight when adding an entry. The table is left unchanged.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeightError {
    /// Weight was zero or negative and could never be drawn.
    #[error("weight must be positive, got {weight}")]
    NonPositive { weight: i64 },

    /// Adding the weight would push the total past what a draw can address.
    #[error("total weight {total} + {weight} exceeds limit {limit}")]
    TotalOverflow { total: u32, weight: i64, limit: u32 },
}

impl ValueError for WeightError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NonPositive { .. } => "WEIGHT_NON_POSITIVE",
            Self::TotalOverflow { .. } => "WEIGHT_TOTAL_OVERFLOW",
        }
    }
}

/// Failure to draw from a weighted table.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SampleError {
    /// The table has no entries or zero total weight.
    #[error("cannot sample from an empty collection")]
    EmptyCollection,

    /// The random source returned a value outside the requested range.
    #[error("random source returned {draw}, expected 0..{total}")]
    DrawOutOfRange { draw: i32, total: u32 },
}

impl ValueError for SampleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EmptyCollection => ErrorSeverity::Recoverable,
            Self::DrawOutOfRange { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyCollection => "SAMPLE_EMPTY_COLLECTION",
            Self::DrawOutOfRange { .. } => "SAMPLE_DRAW_OUT_OF_RANGE",
        }
    }
}
