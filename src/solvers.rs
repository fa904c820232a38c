//! Solvers for the bounded-budget lot-selection problem

use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    lots::{Budget, Lot},
    valuation::ValuationError,
};

pub mod dp;
pub mod exhaustive;
pub mod greedy;

/// Solver Errors
#[derive(Debug, Error)]
pub enum SolverError {
    /// Wrapped cost/profit derivation error.
    #[error(transparent)]
    Valuation(#[from] ValuationError),

    /// The budget cannot be used as an index into the profit row.
    #[error("budget {money} cannot be addressed on this platform")]
    BudgetNotIndexable {
        /// The offending budget in cost units
        money: u64,
    },

    /// Too many lots for the exhaustive solver.
    #[error("exhaustive search over {count} lots exceeds the limit of {limit}")]
    TooManyLots {
        /// Number of lots supplied
        count: usize,

        /// Largest accepted lot count
        limit: usize,
    },

    /// Accumulated profit left the representable range.
    #[error("accumulated profit overflowed")]
    AccumulatedProfitOverflow,

    /// Internal solver invariant was violated (this is a bug).
    #[error("solver invariant violated: {message}")]
    InvariantViolation {
        /// What invariant was violated
        message: &'static str,
    },
}

/// A solved selection of lots.
///
/// The chosen lots are a subset of the input (each lot used at most once),
/// sorted ascending by order key, with total cost within the budget and total
/// profit equal to `profit`.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Total profit of the chosen lots.
    pub profit: i64,

    /// The chosen lots, ascending by order key.
    pub chosen: SmallVec<[Lot; 10]>,
}

impl Selection {
    /// A selection with no lots and zero profit.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            profit: 0,
            chosen: SmallVec::new(),
        }
    }
}

/// Trait for solving a lot selection under a budget
pub trait Solver {
    /// Choose a subset of `lots` whose total cost fits `budget` and report
    /// the subset together with its total profit.
    ///
    /// # Errors
    ///
    /// Returns a [`SolverError`] if the solver encounters an error.
    fn solve(lots: &[Lot], budget: Budget) -> Result<Selection, SolverError>;
}

/// Restore the reporting order of a selection: ascending by order key, ties
/// keeping their current relative order.
pub(crate) fn sort_by_order_key(chosen: &mut SmallVec<[Lot; 10]>) {
    chosen.sort_by_key(Lot::order_key);
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use smallvec::SmallVec;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn empty_selection_has_no_profit() {
        let selection = Selection::empty();

        assert_eq!(selection.profit, 0);
        assert!(selection.chosen.is_empty());
    }

    #[test]
    fn sorting_is_stable_for_equal_order_keys() -> TestResult {
        let mut chosen: SmallVec<[Lot; 10]> = SmallVec::new();
        chosen.push(Lot::new(2, "beta", Decimal::new(1000, 1), 1)?);
        chosen.push(Lot::new(1, "alfa", Decimal::new(1000, 1), 1)?);
        chosen.push(Lot::new(2, "gamma", Decimal::new(1000, 1), 1)?);

        sort_by_order_key(&mut chosen);

        let labels: Vec<&str> = chosen.iter().map(Lot::label).collect();
        assert_eq!(labels, ["alfa", "beta", "gamma"]);

        Ok(())
    }
}
