//! Lotpick prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    fixtures::{FixtureError, LotsFixture},
    lots::{Budget, Lot, LotError},
    protocol::{ProtocolError, Request, read_request, write_selection},
    report::{Report, ReportError},
    solvers::{
        Selection, Solver, SolverError, dp::DpSolver, exhaustive::ExhaustiveSolver,
        greedy::GreedySolver,
    },
    valuation::{Appraisal, Appraiser, ValuationError},
};
