//! Lots

use std::ops::Deref;

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur when constructing a lot.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LotError {
    /// A lot must contain at least one unit.
    #[error("lot quantity must be at least 1")]
    ZeroQuantity,
}

/// An indivisible purchasable lot.
///
/// A lot is either bought whole or not at all. The `order_key` defines input
/// order and the tie-break order used when reporting a selection; it need not
/// be unique or sorted.
#[derive(Debug, Clone, PartialEq)]
pub struct Lot {
    order_key: i64,
    label: String,
    unit_price: Decimal,
    quantity: u64,
}

impl Lot {
    /// Creates a new lot with the given order key, label, unit price and quantity.
    ///
    /// # Errors
    ///
    /// Returns a [`LotError`] if the quantity is zero.
    pub fn new(
        order_key: i64,
        label: impl Into<String>,
        unit_price: Decimal,
        quantity: u64,
    ) -> Result<Self, LotError> {
        if quantity == 0 {
            return Err(LotError::ZeroQuantity);
        }

        Ok(Self {
            order_key,
            label: label.into(),
            unit_price,
            quantity,
        })
    }

    /// Returns the order key of the lot.
    #[must_use]
    pub fn order_key(&self) -> i64 {
        self.order_key
    }

    /// Returns the label of the lot.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the unit price of the lot.
    #[must_use]
    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// Returns the number of units in the lot.
    #[must_use]
    pub fn quantity(&self) -> u64 {
        self.quantity
    }
}

/// The maximum total cost a selection of lots may reach, in cost units.
///
/// Non-negative by construction; the protocol layer rejects a negative budget
/// before one of these exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Budget {
    value: u64,
}

impl Budget {
    /// Creates a new budget.
    #[must_use]
    pub fn new(value: u64) -> Self {
        Budget { value }
    }
}

impl Deref for Budget {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn new_lot() -> TestResult {
        let lot = Lot::new(1, "alfa-05", Decimal::new(1002, 1), 2)?;

        assert_eq!(lot.order_key(), 1);
        assert_eq!(lot.label(), "alfa-05");
        assert_eq!(lot.unit_price(), Decimal::new(1002, 1));
        assert_eq!(lot.quantity(), 2);

        Ok(())
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let result = Lot::new(1, "alfa-05", Decimal::new(1002, 1), 0);

        assert_eq!(result, Err(LotError::ZeroQuantity));
    }

    #[test]
    fn budget_derefs_to_u64() {
        let budget = Budget::new(8000);

        assert_eq!(*budget, 8000);
    }
}
