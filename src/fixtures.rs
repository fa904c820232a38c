//! Fixtures
//!
//! YAML-described lot sets for the CLI, examples and tests.

use std::{fs, path::Path};

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::lots::{Budget, Lot, LotError};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// A lot entry failed validation
    #[error(transparent)]
    Lot(#[from] LotError),
}

/// A lot set and budget loaded from a YAML fixture.
///
/// ```yaml
/// money: 8000
/// lots:
///   - order_key: 1
///     label: alfa-05
///     unit_price: "100.2"
///     quantity: 2
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct LotsFixture {
    money: u64,
    lots: Vec<LotEntry>,
}

#[derive(Debug, Clone, Deserialize)]
struct LotEntry {
    order_key: i64,
    label: String,
    unit_price: Decimal,
    quantity: u64,
}

impl LotsFixture {
    /// Loads a fixture from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        Self::from_yaml(&fs::read_to_string(path)?)
    }

    /// Parses a fixture from YAML text.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the YAML does not match the fixture shape.
    pub fn from_yaml(yaml: &str) -> Result<Self, FixtureError> {
        Ok(serde_norway::from_str(yaml)?)
    }

    /// The budget of the fixture.
    #[must_use]
    pub fn budget(&self) -> Budget {
        Budget::new(self.money)
    }

    /// The lots of the fixture, in file order.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if an entry fails lot validation.
    pub fn lots(&self) -> Result<Vec<Lot>, FixtureError> {
        self.lots
            .iter()
            .map(|entry| {
                Ok(Lot::new(
                    entry.order_key,
                    entry.label.clone(),
                    entry.unit_price,
                    entry.quantity,
                )?)
            })
            .collect()
    }
}
