//! Dynamic-programming solver
//!
//! Exact 0/1 selection in `O(n * money)` time and `O(money)` space. Instead
//! of keeping the full `n x money` table for reconstruction, the solver
//! snapshots the distinct values of the rolling profit row after each lot and
//! recovers the chosen lots from those snapshots in a single backward pass.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::{
    lots::{Budget, Lot},
    solvers::{Selection, Solver, SolverError, sort_by_order_key},
    valuation::{Appraisal, Appraiser},
};

/// Exact solver using dynamic programming with row-snapshot reconstruction.
#[derive(Debug)]
pub struct DpSolver;

impl Solver for DpSolver {
    fn solve(lots: &[Lot], budget: Budget) -> Result<Selection, SolverError> {
        let money = usize::try_from(*budget)
            .ok()
            .ok_or(SolverError::BudgetNotIndexable { money: *budget })?;

        // The memo cache lives only for this call.
        let mut appraiser = Appraiser::new();
        let appraisals = lots
            .iter()
            .map(|lot| appraiser.appraise(lot))
            .collect::<Result<Vec<_>, _>>()?;

        // row[b] holds the best total profit attainable with budget exactly b
        // from the lots processed so far. It is non-decreasing in b at all
        // times, and each lot's pass can only raise entries, never lower them.
        let mut row = vec![0_i64; money + 1];

        // One entry per processed lot: the distinct values of `row` after
        // that lot's pass, deduplicated in first-occurrence order. Empirically
        // a small multiple of n, far below the full table.
        let mut history: Vec<Vec<i64>> = Vec::with_capacity(lots.len());

        for appraisal in &appraisals {
            update_row(&mut row, appraisal)?;
            history.push(distinct_values(&row));
        }

        let profit = row
            .last()
            .copied()
            .ok_or(SolverError::InvariantViolation {
                message: "profit row is never empty",
            })?;

        let chosen = reconstruct(lots, &appraisals, &history, profit)?;

        Ok(Selection { profit, chosen })
    }
}

/// One lot's pass over the profit row.
///
/// The budget index runs high to low; this is load-bearing. A descending
/// pass reads only values from before this lot was considered, so the lot
/// enters each budget level at most once. Ascending order would let the lot
/// be reused within its own pass and solve the unbounded problem instead.
fn update_row(row: &mut [i64], appraisal: &Appraisal) -> Result<(), SolverError> {
    let money = row.len().saturating_sub(1);

    let Ok(cost) = usize::try_from(appraisal.cost) else {
        // Wider than any addressable budget, so no level can afford it.
        return Ok(());
    };

    for j in (1..=money).rev() {
        if cost > j {
            continue;
        }

        let base = row
            .get(j - cost)
            .copied()
            .ok_or(SolverError::InvariantViolation {
                message: "profit row read below its length",
            })?;

        let candidate = base
            .checked_add(appraisal.profit)
            .ok_or(SolverError::AccumulatedProfitOverflow)?;

        if let Some(slot) = row.get_mut(j)
            && candidate > *slot
        {
            *slot = candidate;
        }
    }

    Ok(())
}

/// Distinct values of the profit row, in first-occurrence order.
fn distinct_values(row: &[i64]) -> Vec<i64> {
    let mut seen = FxHashSet::default();

    row.iter().copied().filter(|value| seen.insert(*value)).collect()
}

/// Recover which lots produced the optimum from the row snapshots.
///
/// Walking lots from last to first with a running `target` profit: lot `i`
/// must have been selected exactly when `target` is absent from the snapshot
/// taken *before* lot `i` was processed, because only lot `i`'s pass can have
/// introduced that value. The first lot has no earlier snapshot; whatever
/// target remains after the walk is attributed to it. This is a value-set
/// heuristic rather than a proof: with duplicate `(cost, profit)` lots it may
/// name a different optimal subset, but the result remains feasible and sums
/// to the optimum.
fn reconstruct(
    lots: &[Lot],
    appraisals: &[Appraisal],
    history: &[Vec<i64>],
    profit: i64,
) -> Result<SmallVec<[Lot; 10]>, SolverError> {
    let mut chosen: SmallVec<[Lot; 10]> = SmallVec::new();
    let mut target = profit;

    for i in (1..lots.len()).rev() {
        let entry = history
            .get(i - 1)
            .ok_or(SolverError::InvariantViolation {
                message: "one history entry exists per lot",
            })?;

        if entry.contains(&target) {
            continue;
        }

        let (lot, appraisal) = lots
            .get(i)
            .zip(appraisals.get(i))
            .ok_or(SolverError::InvariantViolation {
                message: "one appraisal exists per lot",
            })?;

        chosen.push(lot.clone());
        target = target
            .checked_sub(appraisal.profit)
            .ok_or(SolverError::AccumulatedProfitOverflow)?;
    }

    if target != 0
        && let Some(first) = lots.first()
    {
        chosen.push(first.clone());
    }

    chosen.reverse();
    sort_by_order_key(&mut chosen);

    Ok(chosen)
}
