//! Commission kinds and their allocation targets.

use rust_decimal::Decimal;
use salesbook_shared::config::CommissionSetting;
use salesbook_shared::types::round_cents;
use serde::{Deserialize, Serialize};

use super::allocator::{AllocationRequest, AllocationResult};
use super::error::AllocationError;
use crate::sales::LineItem;

/// The two commissions charged by the distributor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommissionKind {
    /// Distribution commission, weighted by gross sales.
    Distribution,
    /// Diffusion commission, weighted by net-of-discount amounts.
    Diffusion,
}

impl CommissionKind {
    /// The raw (unclamped) weight of a line item for this commission.
    #[must_use]
    pub fn weight(&self, item: &LineItem) -> Decimal {
        match self {
            Self::Distribution => item.gross_sales(),
            Self::Diffusion => item.net_of_discount(),
        }
    }

    /// Clamped weights of all items, in input order.
    #[must_use]
    pub fn weights(&self, items: &[LineItem]) -> Vec<Decimal> {
        clamp_weights(items.iter().map(|item| self.weight(item)))
    }
}

impl std::fmt::Display for CommissionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Distribution => write!(f, "distribution"),
            Self::Diffusion => write!(f, "diffusion"),
        }
    }
}

/// How the total of a commission is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommissionBasis {
    /// A fixed total invoiced by the distributor.
    FixedTotal(Decimal),
    /// A rate applied to the sum of the clamped weights.
    Rate(Decimal),
}

impl CommissionBasis {
    /// A fixed total entered as a floating-point number.
    ///
    /// # Errors
    ///
    /// Returns `AllocationError::NonFiniteTotal` for NaN or infinite totals,
    /// and `TotalOutOfRange` if the total does not fit a decimal.
    pub fn from_float_total(total: f64) -> Result<Self, AllocationError> {
        if !total.is_finite() {
            return Err(AllocationError::NonFiniteTotal);
        }
        Decimal::try_from(total)
            .map(Self::FixedTotal)
            .map_err(|_| AllocationError::TotalOutOfRange)
    }

    /// The target total for the given clamped weights, rounded to cents.
    #[must_use]
    pub fn target_total(&self, weights: &[Decimal]) -> Decimal {
        match self {
            Self::FixedTotal(total) => round_cents(*total),
            Self::Rate(rate) => {
                let base: Decimal = weights.iter().copied().sum();
                round_cents(base * *rate)
            }
        }
    }

    /// Allocates this commission across the items.
    #[must_use]
    pub fn allocate(&self, kind: CommissionKind, items: &[LineItem]) -> AllocationResult {
        let weights = kind.weights(items);
        let total = self.target_total(&weights);
        AllocationRequest::new(weights, total).allocate()
    }
}

impl Default for CommissionBasis {
    fn default() -> Self {
        Self::FixedTotal(Decimal::ZERO)
    }
}

impl From<&CommissionSetting> for CommissionBasis {
    fn from(setting: &CommissionSetting) -> Self {
        match (setting.total, setting.rate) {
            (Some(total), _) => Self::FixedTotal(total),
            (None, Some(rate)) => Self::Rate(rate),
            (None, None) => Self::default(),
        }
    }
}

/// Clamps negative weights to zero.
///
/// Correcting rows (negative sales) must not attract negative commission.
pub fn clamp_weights(values: impl IntoIterator<Item = Decimal>) -> Vec<Decimal> {
    values.into_iter().map(|v| v.max(Decimal::ZERO)).collect()
}
