//! Lotpick CLI
//!
//! Reads a solve request from stdin (or a YAML fixture), runs the chosen
//! strategy and writes the line-protocol response to stdout. Diagnostic
//! output (table, timing) goes to stderr.

use std::{io, process, time::Instant};

use clap::Parser;
use humanize_duration::{Truncate, prelude::DurationExt};
use lotpick::{
    fixtures::LotsFixture,
    protocol::{self, Request},
    report::Report,
    solvers::{Selection, Solver, dp::DpSolver, greedy::GreedySolver},
    utils::SolveArgs,
};

#[expect(clippy::exit, reason = "CLI entry point")]
#[expect(clippy::print_stderr, reason = "Errors are CLI output")]
fn main() {
    let args = SolveArgs::parse();

    if let Err(error) = run(&args) {
        eprintln!("{error}");
        process::exit(1);
    }
}

#[expect(clippy::print_stderr, reason = "Diagnostics are CLI output")]
fn run(args: &SolveArgs) -> Result<(), String> {
    let request = load_request(args.fixture.as_deref())?;

    let start = Instant::now();
    let selection = solve(&args.strategy, &request)?;
    let elapsed = start.elapsed();

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    protocol::write_selection(&mut handle, &selection)
        .map_err(|error| format!("failed to write selection: {error}"))?;

    if args.table {
        let stderr = io::stderr();
        let mut err_handle = stderr.lock();

        Report::new(&selection)
            .write_to(&mut err_handle)
            .map_err(|error| format!("failed to render report: {error}"))?;
    }

    if args.timing {
        eprintln!("solved in {}", elapsed.human(Truncate::Nano));
    }

    Ok(())
}

fn load_request(fixture: Option<&str>) -> Result<Request, String> {
    if let Some(path) = fixture {
        let fixture = LotsFixture::from_path(path)
            .map_err(|error| format!("failed to load fixture {path}: {error}"))?;
        let lots = fixture
            .lots()
            .map_err(|error| format!("invalid fixture {path}: {error}"))?;

        return Ok(Request {
            lots,
            budget: fixture.budget(),
        });
    }

    let stdin = io::stdin();
    let mut handle = stdin.lock();

    protocol::read_request(&mut handle).map_err(|error| format!("failed to read input: {error}"))
}

fn solve(strategy: &str, request: &Request) -> Result<Selection, String> {
    let result = match strategy {
        "dp" => DpSolver::solve(&request.lots, request.budget),
        "greedy" => GreedySolver::solve(&request.lots, request.budget),
        other => return Err(format!("unknown strategy: {other}")),
    };

    result.map_err(|error| format!("solve failed: {error}"))
}
