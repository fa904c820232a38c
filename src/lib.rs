//! Lotpick
//!
//! Lotpick is a bounded-budget lot-selection engine: given purchasable lots
//! with derived acquisition costs and profits, it chooses the subset that
//! maximises total profit without exceeding a fixed budget. It ships an
//! exact dynamic-programming solver with space-reduced reconstruction, an
//! exhaustive verifier, and a greedy approximator, all sharing one memoized
//! cost/profit derivation.

pub mod fixtures;
pub mod lots;
pub mod prelude;
pub mod protocol;
pub mod report;
pub mod solvers;
pub mod utils;
pub mod valuation;
