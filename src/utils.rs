//! Utils

use clap::Parser;

/// Arguments for the lot-selection CLI
#[derive(Debug, Parser)]
#[command(name = "lotpick", about = "Bounded-budget lot selection", long_about = None)]
pub struct SolveArgs {
    /// Solving strategy: "dp" (exact) or "greedy" (fast, approximate)
    #[clap(short, long, default_value = "dp")]
    pub strategy: String,

    /// Load the budget and lots from a YAML fixture instead of stdin
    #[clap(short, long)]
    pub fixture: Option<String>,

    /// Render a table of the selection to stderr
    #[clap(short, long)]
    pub table: bool,

    /// Report the elapsed solve time to stderr
    #[clap(long)]
    pub timing: bool,
}
