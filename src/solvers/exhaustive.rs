//! Exhaustive reference solver
//!
//! Full `O(2^n)` enumeration of subsets, used to cross-check the
//! dynamic-programming solver on validation-scale inputs. Produces the
//! optimal profit only; recovering the subset at this cost is not worth it.

use crate::{
    lots::{Budget, Lot},
    solvers::SolverError,
    valuation::Appraiser,
};

/// Largest lot count the exhaustive solver accepts.
pub const MAX_LOTS: usize = 24;

/// Exhaustive solver enumerating every feasible subset.
#[derive(Debug)]
pub struct ExhaustiveSolver;

impl ExhaustiveSolver {
    /// Returns the optimal total profit within the budget.
    ///
    /// The traversal keeps its own frame stack rather than recursing, so the
    /// only limit is [`MAX_LOTS`], enforced up front.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::TooManyLots`] when more than [`MAX_LOTS`] lots
    /// are supplied, and propagates valuation failures.
    pub fn max_profit(lots: &[Lot], budget: Budget) -> Result<i64, SolverError> {
        if lots.len() > MAX_LOTS {
            return Err(SolverError::TooManyLots {
                count: lots.len(),
                limit: MAX_LOTS,
            });
        }

        let mut appraiser = Appraiser::new();
        let appraisals = lots
            .iter()
            .map(|lot| appraiser.appraise(lot))
            .collect::<Result<Vec<_>, _>>()?;

        // Each frame is (next lot index, remaining budget, profit so far).
        let mut frames = vec![(0_usize, *budget, 0_i64)];
        let mut best = 0_i64;

        while let Some((index, remaining, profit)) = frames.pop() {
            let Some(appraisal) = appraisals.get(index) else {
                // No lots left on this branch.
                best = best.max(profit);
                continue;
            };

            if remaining == 0 {
                best = best.max(profit);
                continue;
            }

            // Skip this lot.
            frames.push((index + 1, remaining, profit));

            // Take it, when it fits.
            if appraisal.cost <= remaining {
                let taken = profit
                    .checked_add(appraisal.profit)
                    .ok_or(SolverError::AccumulatedProfitOverflow)?;

                frames.push((index + 1, remaining - appraisal.cost, taken));
            }
        }

        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use super::*;
    use crate::lots::LotError;

    fn lot(order_key: i64, price: Decimal, quantity: u64) -> Result<Lot, LotError> {
        Lot::new(order_key, format!("lot-{order_key}"), price, quantity)
    }

    #[test]
    fn empty_lot_set_has_zero_profit() -> TestResult {
        assert_eq!(ExhaustiveSolver::max_profit(&[], Budget::new(8000))?, 0);

        Ok(())
    }

    #[test]
    fn finds_the_documented_optimum() -> TestResult {
        let lots = [
            lot(1, Decimal::new(1002, 1), 2)?,
            lot(2, Decimal::new(1015, 1), 5)?,
            lot(2, Decimal::new(1000, 1), 2)?,
        ];

        assert_eq!(ExhaustiveSolver::max_profit(&lots, Budget::new(8000))?, 135);

        Ok(())
    }

    #[test]
    fn never_reports_below_zero() -> TestResult {
        // Every lot is a loss; the empty subset wins.
        let lots = [
            lot(1, Decimal::new(1100, 1), 2)?,
            lot(2, Decimal::new(1200, 1), 3)?,
        ];

        assert_eq!(ExhaustiveSolver::max_profit(&lots, Budget::new(10_000))?, 0);

        Ok(())
    }

    #[test]
    fn rejects_oversized_inputs() -> TestResult {
        let mut lots = Vec::new();
        for key in 0..=i64::try_from(MAX_LOTS)? {
            lots.push(lot(key, Decimal::new(1000, 1), 1)?);
        }

        let result = ExhaustiveSolver::max_profit(&lots, Budget::new(100));

        assert!(
            matches!(result, Err(SolverError::TooManyLots { count, limit })
                if count == MAX_LOTS + 1 && limit == MAX_LOTS),
            "expected TooManyLots, got {result:?}"
        );

        Ok(())
    }
}
