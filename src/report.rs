//! Selection report
//!
//! Human-readable table rendering of a solved selection, for the CLI's
//! diagnostic output. The line protocol in [`crate::protocol`] stays the
//! machine-readable surface.

use std::io;

use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    solvers::Selection,
    valuation::{Appraiser, ValuationError},
};

/// Errors that can occur when rendering a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Wrapped cost/profit derivation error.
    #[error(transparent)]
    Valuation(#[from] ValuationError),

    /// IO error
    #[error("IO error")]
    Io,
}

/// Tabular view of a solved selection.
#[derive(Debug)]
pub struct Report<'a> {
    selection: &'a Selection,
}

impl<'a> Report<'a> {
    /// Creates a report over the given selection.
    #[must_use]
    pub fn new(selection: &'a Selection) -> Self {
        Self { selection }
    }

    /// Renders the report as a table followed by a totals summary.
    ///
    /// # Errors
    ///
    /// Returns a [`ReportError`] if a lot cannot be appraised or the
    /// underlying write fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReportError> {
        let mut appraiser = Appraiser::new();
        let mut builder = Builder::default();
        let mut total_cost: u64 = 0;

        builder.push_record(["Lot", "Label", "Unit Price", "Quantity", "Cost", "Profit"]);

        for lot in &self.selection.chosen {
            let appraisal = appraiser.appraise(lot)?;
            total_cost += appraisal.cost;

            builder.push_record([
                lot.order_key().to_string(),
                lot.label().to_owned(),
                lot.unit_price().to_string(),
                lot.quantity().to_string(),
                appraisal.cost.to_string(),
                appraisal.profit.to_string(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern_rounded());
        table.modify(Columns::new(2..6), Alignment::right());
        table.modify(Rows::first(), Color::BOLD);

        writeln!(out, "{table}").map_err(|_err| ReportError::Io)?;
        writeln!(
            out,
            "Total cost: {total_cost}\nTotal profit: {}",
            self.selection.profit
        )
        .map_err(|_err| ReportError::Io)?;

        Ok(())
    }
}
