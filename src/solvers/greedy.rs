//! Greedy approximate solver
//!
//! Ranks lots by profit-to-cost ratio and takes them in order while they fit
//! the remaining budget. Fast (`O(n log n)`) and never infeasible, but with
//! no optimality guarantee; in practice it lands within 80-100% of the exact
//! optimum.

use std::cmp::Ordering;

use smallvec::SmallVec;

use crate::{
    lots::{Budget, Lot},
    solvers::{Selection, Solver, SolverError, sort_by_order_key},
    valuation::{Appraisal, Appraiser},
};

/// Greedy solver ranking lots by profit density.
#[derive(Debug)]
pub struct GreedySolver;

impl Solver for GreedySolver {
    fn solve(lots: &[Lot], budget: Budget) -> Result<Selection, SolverError> {
        let mut appraiser = Appraiser::new();

        let mut ranked: Vec<(&Lot, Appraisal)> = lots
            .iter()
            .map(|lot| Ok((lot, appraiser.appraise(lot)?)))
            .collect::<Result<_, SolverError>>()?;

        // Stable descending sort, so equal ratios keep their input order.
        ranked.sort_by(|(_, a), (_, b)| ratio_cmp(b, a));

        let mut remaining = *budget;
        let mut profit = 0_i64;
        let mut chosen: SmallVec<[Lot; 10]> = SmallVec::new();

        for (lot, appraisal) in ranked {
            // After ranking, everything past the first non-positive profit
            // is at best break-even; the cut is on the raw profit sign.
            if appraisal.profit <= 0 {
                break;
            }

            if remaining == 0 {
                break;
            }

            if appraisal.cost > remaining {
                continue;
            }

            remaining -= appraisal.cost;
            profit = profit
                .checked_add(appraisal.profit)
                .ok_or(SolverError::AccumulatedProfitOverflow)?;
            chosen.push(lot.clone());
        }

        sort_by_order_key(&mut chosen);

        Ok(Selection { profit, chosen })
    }
}

/// Compare two profit-to-cost ratios without leaving integer arithmetic:
/// `a.profit / a.cost` vs `b.profit / b.cost` cross-multiplies to
/// `a.profit * b.cost` vs `b.profit * a.cost`. A zero cost ranks as an
/// infinite ratio for positive profit.
fn ratio_cmp(a: &Appraisal, b: &Appraisal) -> Ordering {
    let lhs = i128::from(a.profit) * i128::from(b.cost);
    let rhs = i128::from(b.profit) * i128::from(a.cost);

    lhs.cmp(&rhs)
}
