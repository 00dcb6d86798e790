//! Cent-exact distribution of commission totals across line items.
//!
//! - `allocator` - Largest Remainder Method over decimal weights
//! - `commission` - Commission kinds, their weights and target totals

pub mod allocator;
pub mod commission;
pub mod error;

#[cfg(test)]
mod props;

pub use allocator::{AllocationRequest, AllocationResult, Allocator};
pub use commission::{CommissionBasis, CommissionKind, clamp_weights};
pub use error::AllocationError;
