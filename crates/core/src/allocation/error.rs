//! Allocation error types.

use thiserror::Error;

/// Errors that can occur when preparing an allocation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AllocationError {
    /// The target total is NaN or infinite.
    #[error("Allocation target must be a finite amount")]
    NonFiniteTotal,

    /// The target total does not fit in a decimal amount.
    #[error("Allocation target is out of range")]
    TotalOutOfRange,
}

impl AllocationError {
    /// Returns the stable error code used in logs.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NonFiniteTotal => "NON_FINITE_TOTAL",
            Self::TotalOutOfRange => "TOTAL_OUT_OF_RANGE",
        }
    }
}
