//! Sales line items as read from the distributor extract.

use rust_decimal::Decimal;
use salesbook_shared::types::round_cents;
use serde::Serialize;

/// One title's sales figures for the period.
///
/// Amounts are rounded to cents on construction and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    identifier: String,
    gross_sales: Decimal,
    returns: Decimal,
    net_of_discount: Decimal,
    invoiced: Decimal,
}

impl LineItem {
    /// Creates a line item, rounding every amount to cents.
    ///
    /// Returns are stored as a magnitude: extracts report them with either
    /// sign, and duplicate rows must add up, not cancel out.
    #[must_use]
    pub fn new(
        identifier: impl Into<String>,
        gross_sales: Decimal,
        returns: Decimal,
        net_of_discount: Decimal,
        invoiced: Decimal,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            gross_sales: round_cents(gross_sales),
            returns: round_cents(returns).abs(),
            net_of_discount: round_cents(net_of_discount),
            invoiced: round_cents(invoiced),
        }
    }

    /// Canonical identifier (ISBN).
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Gross sales; negative on correcting rows.
    #[must_use]
    pub fn gross_sales(&self) -> Decimal {
        self.gross_sales
    }

    /// Returns as a non-negative magnitude.
    #[must_use]
    pub fn returns(&self) -> Decimal {
        self.returns
    }

    /// Net-of-discount amount.
    #[must_use]
    pub fn net_of_discount(&self) -> Decimal {
        self.net_of_discount
    }

    /// Invoiced amount.
    #[must_use]
    pub fn invoiced(&self) -> Decimal {
        self.invoiced
    }

    /// Bookseller discount: net-of-discount minus invoiced.
    #[must_use]
    pub fn discount(&self) -> Decimal {
        self.net_of_discount - self.invoiced
    }

    fn absorb(&mut self, other: &Self) {
        self.gross_sales += other.gross_sales;
        self.returns += other.returns;
        self.net_of_discount += other.net_of_discount;
        self.invoiced += other.invoiced;
    }
}

/// Merges items sharing an identifier, keeping first-appearance order.
pub fn aggregate_by_identifier(items: impl IntoIterator<Item = LineItem>) -> Vec<LineItem> {
    let mut merged: Vec<LineItem> = Vec::new();
    let mut positions: std::collections::HashMap<String, usize> = std::collections::HashMap::new();

    for item in items {
        if let Some(&pos) = positions.get(item.identifier()) {
            merged[pos].absorb(&item);
        } else {
            positions.insert(item.identifier.clone(), merged.len());
            merged.push(item);
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amounts_rounded_on_construction() {
        let item = LineItem::new("978", dec!(10.005), dec!(-1.115), dec!(9.999), dec!(9.5));
        assert_eq!(item.gross_sales(), dec!(10.00));
        assert_eq!(item.returns(), dec!(1.12));
        assert_eq!(item.net_of_discount(), dec!(10.00));
        assert_eq!(item.invoiced(), dec!(9.50));
    }

    #[test]
    fn test_returns_stored_as_magnitude() {
        let item = LineItem::new("978", dec!(0), dec!(-12.40), dec!(0), dec!(0));
        assert_eq!(item.returns(), dec!(12.40));
    }

    #[test]
    fn test_discount() {
        let item = LineItem::new("978", dec!(1000), dec!(0), dec!(1000), dec!(950));
        assert_eq!(item.discount(), dec!(50));
    }

    #[test]
    fn test_aggregate_merges_duplicates_in_order() {
        let items = vec![
            LineItem::new("B", dec!(10), dec!(1), dec!(9), dec!(8)),
            LineItem::new("A", dec!(5), dec!(0), dec!(5), dec!(5)),
            LineItem::new("B", dec!(2.50), dec!(-1), dec!(2), dec!(1)),
        ];
        let merged = aggregate_by_identifier(items);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].identifier(), "B");
        assert_eq!(merged[0].gross_sales(), dec!(12.50));
        assert_eq!(merged[0].returns(), dec!(2));
        assert_eq!(merged[0].net_of_discount(), dec!(11));
        assert_eq!(merged[0].invoiced(), dec!(9));
        assert_eq!(merged[1].identifier(), "A");
    }

    #[test]
    fn test_aggregate_adds_returns_of_either_sign() {
        let items = vec![
            LineItem::new("978", dec!(0), dec!(5), dec!(0), dec!(0)),
            LineItem::new("978", dec!(0), dec!(-5), dec!(0), dec!(0)),
        ];
        let merged = aggregate_by_identifier(items);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].returns(), dec!(10));
    }
}
