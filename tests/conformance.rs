//! End-to-end conformance tests for the documented scenario

use std::io::Write as _;

use rust_decimal::Decimal;
use testresult::TestResult;

use lotpick::{
    fixtures::LotsFixture,
    lots::{Budget, Lot},
    protocol::{read_request, write_selection},
    report::Report,
    solvers::{Solver, dp::DpSolver, exhaustive::ExhaustiveSolver, greedy::GreedySolver},
    valuation::Appraiser,
};

const DOCUMENTED_INPUT: &str = "2 2 8000\n\
    1 alfa-05 100.2 2\n\
    2 alfa-05 101.5 5\n\
    2 gazprom-17 100.0 2\n\
    \n";

#[test]
fn documented_scenario_through_the_protocol() -> TestResult {
    let request = read_request(&mut DOCUMENTED_INPUT.as_bytes())?;
    let selection = DpSolver::solve(&request.lots, request.budget)?;

    let mut out = Vec::new();
    write_selection(&mut out, &selection)?;

    assert_eq!(
        String::from_utf8(out)?,
        "135\n2 alfa-05 101.5 5\n2 gazprom-17 100.0 2\n\n"
    );

    Ok(())
}

#[test]
fn exact_and_exhaustive_agree_on_the_documented_scenario() -> TestResult {
    let request = read_request(&mut DOCUMENTED_INPUT.as_bytes())?;

    let exact = DpSolver::solve(&request.lots, request.budget)?;
    let reference = ExhaustiveSolver::max_profit(&request.lots, request.budget)?;

    assert_eq!(exact.profit, reference);

    Ok(())
}

#[test]
fn documented_selection_is_feasible_and_consistent() -> TestResult {
    let request = read_request(&mut DOCUMENTED_INPUT.as_bytes())?;
    let selection = DpSolver::solve(&request.lots, request.budget)?;

    let mut appraiser = Appraiser::new();
    let mut total_cost = 0;
    let mut total_profit = 0;

    for lot in &selection.chosen {
        let appraisal = appraiser.appraise(lot)?;
        total_cost += appraisal.cost;
        total_profit += appraisal.profit;
    }

    assert!(total_cost <= *request.budget, "selection must fit the budget");
    assert_eq!(total_profit, selection.profit);

    Ok(())
}

#[test]
fn greedy_stays_within_the_exact_optimum() -> TestResult {
    let request = read_request(&mut DOCUMENTED_INPUT.as_bytes())?;

    let exact = DpSolver::solve(&request.lots, request.budget)?;
    let approximate = GreedySolver::solve(&request.lots, request.budget)?;

    assert!(approximate.profit <= exact.profit, "greedy may not beat the optimum");
    assert!(approximate.profit >= 0, "greedy never reports a loss");
    assert_eq!(approximate.profit, 116);

    Ok(())
}

#[test]
fn zero_budget_yields_an_empty_selection() -> TestResult {
    let lots = [
        Lot::new(1, "alfa-05", Decimal::new(1002, 1), 2)?,
        Lot::new(2, "gazprom-17", Decimal::new(1000, 1), 2)?,
    ];

    let selection = DpSolver::solve(&lots, Budget::new(0))?;

    assert_eq!(selection.profit, 0);
    assert!(selection.chosen.is_empty());

    Ok(())
}

#[test]
fn fixture_file_drives_the_same_result() -> TestResult {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(
        b"money: 8000\n\
          lots:\n\
          - order_key: 1\n\
          \x20 label: alfa-05\n\
          \x20 unit_price: \"100.2\"\n\
          \x20 quantity: 2\n\
          - order_key: 2\n\
          \x20 label: alfa-05\n\
          \x20 unit_price: \"101.5\"\n\
          \x20 quantity: 5\n\
          - order_key: 2\n\
          \x20 label: gazprom-17\n\
          \x20 unit_price: \"100.0\"\n\
          \x20 quantity: 2\n",
    )?;

    let fixture = LotsFixture::from_path(file.path())?;
    let selection = DpSolver::solve(&fixture.lots()?, fixture.budget())?;

    assert_eq!(selection.profit, 135);

    Ok(())
}

#[test]
fn report_renders_the_documented_selection() -> TestResult {
    let request = read_request(&mut DOCUMENTED_INPUT.as_bytes())?;
    let selection = DpSolver::solve(&request.lots, request.budget)?;

    let mut out = Vec::new();
    Report::new(&selection).write_to(&mut out)?;
    let rendered = String::from_utf8(out)?;

    assert!(rendered.contains("Total profit: 135"), "summary shows the optimum");
    assert!(rendered.contains("gazprom-17"), "table lists the chosen lots");

    Ok(())
}
