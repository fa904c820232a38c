//! Line protocol
//!
//! Text protocol for solve requests and responses. A request is a header
//! line of three whitespace-separated integers (two advisory counts and the
//! budget), followed by one line per lot
//! (`order_key label unit_price quantity`), terminated by a blank line or
//! end of input. A response is the optimal profit on its own line, one line
//! per chosen lot in the request's field format, then a blank line.

use std::io::{self, BufRead, Write};

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    lots::{Budget, Lot, LotError},
    solvers::Selection,
};

/// Errors that can occur while reading or writing the line protocol.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// IO error on the underlying stream.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The input ended before a header line was read.
    #[error("missing header line")]
    MissingHeader,

    /// The header line is not three whitespace-separated integers.
    #[error("malformed header line: {line:?}")]
    MalformedHeader {
        /// The offending line
        line: String,
    },

    /// The header carries a negative budget.
    #[error("negative budget: {money}")]
    NegativeBudget {
        /// The rejected budget value
        money: i64,
    },

    /// A lot line does not match `order_key label unit_price quantity`.
    #[error("malformed lot line: {line:?}")]
    MalformedLot {
        /// The offending line
        line: String,
    },

    /// A lot line parsed but failed validation.
    #[error(transparent)]
    Lot(#[from] LotError),
}

/// A parsed solve request: the lots in input order and the budget.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// Lots in input order.
    pub lots: Vec<Lot>,

    /// Maximum total cost of the selection.
    pub budget: Budget,
}

/// Reads a solve request from the given reader.
///
/// # Errors
///
/// Returns a [`ProtocolError`] on IO failure or the first malformed line;
/// parsing is fatal and nothing is recovered.
pub fn read_request(reader: &mut impl BufRead) -> Result<Request, ProtocolError> {
    let mut line = String::new();

    if reader.read_line(&mut line)? == 0 {
        return Err(ProtocolError::MissingHeader);
    }

    let budget = parse_header(&line)?;

    let mut lots = Vec::new();

    loop {
        line.clear();

        if reader.read_line(&mut line)? == 0 || line.trim().is_empty() {
            break;
        }

        lots.push(parse_lot_line(&line)?);
    }

    Ok(Request { lots, budget })
}

/// Writes a solved selection to the given writer.
///
/// # Errors
///
/// Returns a [`ProtocolError`] if the underlying write fails.
pub fn write_selection(
    writer: &mut impl Write,
    selection: &Selection,
) -> Result<(), ProtocolError> {
    writeln!(writer, "{}", selection.profit)?;

    for lot in &selection.chosen {
        writeln!(
            writer,
            "{} {} {} {}",
            lot.order_key(),
            lot.label(),
            lot.unit_price(),
            lot.quantity()
        )?;
    }

    writeln!(writer)?;

    Ok(())
}

/// Parse the header line. Only the third integer (the budget) is consumed;
/// the two counts are advisory, but still have to be integers.
fn parse_header(line: &str) -> Result<Budget, ProtocolError> {
    let malformed = || ProtocolError::MalformedHeader {
        line: line.trim_end().to_owned(),
    };

    let mut fields = line.split_whitespace();

    let _lot_count: i64 = next_parsed(&mut fields).ok_or_else(malformed)?;
    let _advisory: i64 = next_parsed(&mut fields).ok_or_else(malformed)?;
    let money: i64 = next_parsed(&mut fields).ok_or_else(malformed)?;

    if fields.next().is_some() {
        return Err(malformed());
    }

    let money = u64::try_from(money)
        .ok()
        .ok_or(ProtocolError::NegativeBudget { money })?;

    Ok(Budget::new(money))
}

fn parse_lot_line(line: &str) -> Result<Lot, ProtocolError> {
    let malformed = || ProtocolError::MalformedLot {
        line: line.trim_end().to_owned(),
    };

    let mut fields = line.split_whitespace();

    let order_key: i64 = next_parsed(&mut fields).ok_or_else(malformed)?;
    let label = fields.next().ok_or_else(malformed)?;
    let unit_price: Decimal = next_parsed(&mut fields).ok_or_else(malformed)?;
    let quantity: u64 = next_parsed(&mut fields).ok_or_else(malformed)?;

    if fields.next().is_some() {
        return Err(malformed());
    }

    Ok(Lot::new(order_key, label, unit_price, quantity)?)
}

/// Next whitespace-separated field, parsed; `None` on exhaustion or parse
/// failure so callers can attach the full offending line.
fn next_parsed<'a, T: std::str::FromStr>(
    fields: &mut impl Iterator<Item = &'a str>,
) -> Option<T> {
    fields.next().and_then(|field| field.parse().ok())
}
