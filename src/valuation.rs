//! Lot valuation
//!
//! Derives the acquisition cost and resulting profit of a [`Lot`] from its
//! unit price and quantity. The derivation is a pure function of the lot's
//! value, so repeated lookups are served from a memo cache keyed by
//! `(unit_price, quantity)`; the order key and label never influence the
//! result and are excluded from the key.

use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::lots::Lot;

/// Errors that can occur when deriving a lot's cost and profit.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValuationError {
    /// The derived cost is negative or does not fit the cost type.
    #[error("derived cost is out of range for unit price {unit_price} and quantity {quantity}")]
    CostOutOfRange {
        /// Unit price of the offending lot
        unit_price: Decimal,

        /// Quantity of the offending lot
        quantity: u64,
    },

    /// The derived profit overflowed during calculation.
    #[error("derived profit overflowed for unit price {unit_price} and quantity {quantity}")]
    ProfitOverflow {
        /// Unit price of the offending lot
        unit_price: Decimal,

        /// Quantity of the offending lot
        quantity: u64,
    },
}

/// The derived cost and profit of a lot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appraisal {
    /// Budget consumed if the lot is selected.
    pub cost: u64,

    /// Net gain if the lot is selected. May be zero or negative.
    pub profit: i64,
}

/// Memoizing cost/profit calculator.
///
/// The cache lives as long as the appraiser; solvers create one per solve
/// call so nothing outlives a single invocation.
#[derive(Debug, Default)]
pub struct Appraiser {
    cache: FxHashMap<(Decimal, u64), Appraisal>,
}

impl Appraiser {
    /// Creates an appraiser with an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the derived cost and profit of the given lot.
    ///
    /// # Errors
    ///
    /// Returns a [`ValuationError`] if the derivation overflows; well-formed
    /// numeric input never fails.
    pub fn appraise(&mut self, lot: &Lot) -> Result<Appraisal, ValuationError> {
        let key = (lot.unit_price(), lot.quantity());

        if let Some(appraisal) = self.cache.get(&key) {
            return Ok(*appraisal);
        }

        let appraisal = derive(lot.unit_price(), lot.quantity())?;
        self.cache.insert(key, appraisal);

        Ok(appraisal)
    }
}

/// Derive `(cost, profit)` from a unit price and quantity:
///
/// - `cost = floor(unit_price * 10 * quantity)`
/// - `profit = quantity * 30 - (cost - quantity * 1000)`
fn derive(unit_price: Decimal, quantity: u64) -> Result<Appraisal, ValuationError> {
    let cost_out_of_range = || ValuationError::CostOutOfRange {
        unit_price,
        quantity,
    };

    let cost = unit_price
        .checked_mul(Decimal::from(10_u32))
        .and_then(|price| price.checked_mul(Decimal::from(quantity)))
        .map(|raw| raw.floor())
        .and_then(|floored| floored.to_u64())
        .ok_or_else(cost_out_of_range)?;

    let profit_overflow = || ValuationError::ProfitOverflow {
        unit_price,
        quantity,
    };

    // profit = quantity * 30 - (cost - quantity * 1000), all checked so a
    // pathological price or quantity fails loudly instead of wrapping.
    let signed_quantity = i64::try_from(quantity).ok().ok_or_else(profit_overflow)?;
    let signed_cost = i64::try_from(cost).ok().ok_or_else(profit_overflow)?;

    let coupon = signed_quantity
        .checked_mul(30)
        .ok_or_else(profit_overflow)?;
    let par_value = signed_quantity
        .checked_mul(1000)
        .ok_or_else(profit_overflow)?;
    let premium = signed_cost
        .checked_sub(par_value)
        .ok_or_else(profit_overflow)?;
    let profit = coupon.checked_sub(premium).ok_or_else(profit_overflow)?;

    Ok(Appraisal { cost, profit })
}
